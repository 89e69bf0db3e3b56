use crate::Product;

/// Highest rating a product can show.
pub const MAX_RATING: f64 = 5.0;

/// Number of stars drawn for a rating.
pub const STAR_COUNT: usize = 5;

/// Map a raw popularity score onto `0..=1`.
///
/// Scores at or below one are already fractions; anything larger is read as a percentage.
pub fn normalize_popularity(score: f64) -> f64 {
    let normalized = if score <= 1.0 { score } else { score / 100.0 };
    if normalized.is_nan() {
        return 0.0;
    }
    normalized.clamp(0.0, 1.0)
}

/// The product's star rating, in `0..=5` with one decimal.
pub fn compute_rating(product: &Product) -> f64 {
    round_to(normalize_popularity(product.popularity()) * MAX_RATING, 1)
}

/// Rating text shown next to the stars, e.g. `4.0/5`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}/5")
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// How much of one star is filled in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct StarFill(f64);

impl StarFill {
    /// Fill as a fraction in `0..=1`.
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Fill as a percentage, rounded to a tenth, for the `--fill` CSS variable.
    pub fn percent(self) -> f64 {
        round_to(self.0 * 100.0, 1)
    }
}

/// Fill levels for the five stars of `rating`.
///
/// Star `i` (1-based) is filled by `rating - (i - 1)`, clamped to `0..=1`.
pub fn star_fills(rating: f64) -> [StarFill; STAR_COUNT] {
    let rating = if rating.is_nan() { 0.0 } else { rating };
    std::array::from_fn(|i| StarFill((rating - i as f64).clamp(0.0, 1.0)))
}
