//! Fixed-point constants shared by the settlement modules.

/// Basis points denominator (100% = 10_000 bp).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Highest accepted commission. The house can never take the whole pool.
/// Rates are whole basis points, so nothing finer than 0.01% is expressible.
pub const MAX_COMMISSION_BPS: u32 = 9_999;
