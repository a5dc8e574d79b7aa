use rust_decimal::Decimal;

/// Number of daily sales values expected per item (Monday..Sunday).
pub const DAYS_PER_WEEK: usize = 7;

/// Fractional digits a price must carry.
pub const PRICE_DECIMALS: usize = 2;

/// Inclusive rating scale.
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;

/// The rating scale as exact decimals, for validating cell text.
pub const RATING_SCALE_MIN: Decimal = Decimal::ZERO;
pub const RATING_SCALE_MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Decimal places kept for the average rating.
pub const AVG_RATING_DECIMALS: u32 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Popularity score weights
// score = avg_rating * RATING_WEIGHT + total_sales * SALES_WEIGHT
// One rating point is worth about 6.7 weekly sales.
// ─────────────────────────────────────────────────────────────────────────────

/// Weight applied to the average rating.
pub const RATING_WEIGHT: f64 = 4.0;

/// Weight applied to weekly total sales.
pub const SALES_WEIGHT: f64 = 0.6;

// ─────────────────────────────────────────────────────────────────────────────
// Classification thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Popular items need at least this average rating.
pub const POPULAR_MIN_RATING: f64 = 3.5;

/// Underrated items need at least this average rating.
pub const UNDERRATED_MIN_RATING: f64 = 4.5;

/// Underrated items sell fewer than this many units per week.
pub const UNDERRATED_MAX_SALES: u64 = 50;

/// Unprofitable items rate below this average.
pub const UNPROFITABLE_MAX_RATING: f64 = 3.5;

/// Unprofitable items sell fewer than this many units per week.
pub const UNPROFITABLE_MAX_SALES: u64 = 30;
