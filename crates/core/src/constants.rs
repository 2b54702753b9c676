/// Decimal precision kept for internal monetary arithmetic.
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display and wire output.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
