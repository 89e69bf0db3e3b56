/// Cards shown by the static carousel.
pub const DEFAULT_VISIBLE_COUNT: usize = 4;

/// Widest portrait viewport that still shows a single card.
pub const SINGLE_CARD_MAX_WIDTH: f64 = 600.0;

/// Widest viewport that shows two cards.
pub const TWO_CARD_MAX_WIDTH: f64 = 900.0;

/// Widest viewport that shows three cards.
pub const THREE_CARD_MAX_WIDTH: f64 = 1200.0;

/// How many cards fit a viewport of `width` CSS pixels.
pub fn visible_count(width: f64, is_portrait: bool) -> usize {
    if width <= SINGLE_CARD_MAX_WIDTH && is_portrait {
        1
    } else if width <= TWO_CARD_MAX_WIDTH {
        2
    } else if width <= THREE_CARD_MAX_WIDTH {
        3
    } else {
        4
    }
}

/// Where the carousel gets its visible card count from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleCount {
    /// Always show this many cards.
    Fixed(usize),

    /// Follow the viewport size and orientation, see [`visible_count`].
    Responsive,
}

impl VisibleCount {
    /// Whether the count depends on the viewport.
    pub fn is_responsive(self) -> bool {
        matches!(self, VisibleCount::Responsive)
    }
}

impl Default for VisibleCount {
    fn default() -> Self {
        VisibleCount::Fixed(DEFAULT_VISIBLE_COUNT)
    }
}
