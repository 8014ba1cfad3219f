//! Price arithmetic shared by the product cards and the detail overlay.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-number percentage saved by buying at `discounted` instead of `base`.
///
/// Computes `round((base - discounted) / base * 100)` with halves rounded up.
/// Returns `None` when `base` is zero (the percentage is undefined) or when
/// `discounted` exceeds `base`.
pub fn calculate_discount(base: Decimal, discounted: Decimal) -> Option<u32> {
    if base.is_zero() || discounted > base {
        return None;
    }

    ((base - discounted) * Decimal::ONE_HUNDRED / base)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

/// Price of `quantity` units at `unit` each.
pub fn line_total(unit: Decimal, quantity: u32) -> Decimal {
    unit * Decimal::from(quantity)
}
