/// Which arrow was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first product.
    Left,
    /// Towards the last product.
    Right,
}

/// Largest scroll index that still fills the viewport with cards.
pub fn max_index(product_count: usize, visible_count: usize) -> usize {
    product_count.saturating_sub(visible_count)
}

/// Scroll position of the carousel, in whole cards from the first product.
///
/// The index is clamped against the product and visible counts it is given, so it stays valid
/// when either changes between renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
}

impl CarouselState {
    /// Index of the leftmost visible card.
    pub fn index(self) -> usize {
        self.index
    }

    /// The same position clamped to `0..=max_index(product_count, visible_count)`.
    pub fn clamped(self, product_count: usize, visible_count: usize) -> Self {
        Self {
            index: self.index.min(max_index(product_count, visible_count)),
        }
    }

    /// Move one card in `direction`, staying inside the valid range.
    pub fn scroll(&mut self, direction: Direction, product_count: usize, visible_count: usize) {
        let max = max_index(product_count, visible_count);
        let current = self.index.min(max);
        self.index = match direction {
            Direction::Left => current.saturating_sub(1),
            Direction::Right => (current + 1).min(max),
        };
    }

    /// Whether the left arrow is enabled.
    pub fn can_scroll_left(self) -> bool {
        self.index > 0
    }

    /// Whether the right arrow is enabled.
    pub fn can_scroll_right(self, product_count: usize, visible_count: usize) -> bool {
        self.index < max_index(product_count, visible_count)
    }

    /// Horizontal translation of the card strip, as a percentage of its width.
    pub fn offset_percent(self, visible_count: usize) -> f64 {
        self.index as f64 * (100.0 / visible_count.max(1) as f64)
    }
}
