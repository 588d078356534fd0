use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to a whole number, halves away from zero.
pub(crate) fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
