//! Discount price calculation

use rust_decimal::{Decimal, RoundingStrategy};

/// Highest base price the catalog accepts (one billion). Keeps line and cart
/// totals far from the `Decimal` range.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Derives the discounted price for `base` at `percentage` percent off.
///
/// Returns `None` (no discount, not a zero price) when the base price is not
/// positive or the percentage is missing, zero, negative or above 100.
/// Range checking of user input happens at the form boundary; out-of-range
/// values reaching this function simply mean "no discount". So does a base
/// price too large for the arithmetic.
pub fn compute_discounted_price(base: Decimal, percentage: Option<Decimal>) -> Option<Decimal> {
    let percentage = percentage?;
    if base <= Decimal::ZERO || percentage <= Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return None;
    }

    let discount = base
        .checked_mul(percentage)?
        .checked_div(Decimal::ONE_HUNDRED)?;
    base.checked_sub(discount).map(round2)
}

/// Rounds to cents, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
