/// Converts a raw counter reading into whole units of `1 / units_per_second` seconds.
///
/// The naive `counter * units_per_second / ticks_per_second` overflows 64 bits long before the
/// counter does, so the multiplication is split into a whole-seconds part and a sub-second part.
/// Only the sub-second remainder is rounded, keeping the error below one output unit.
///
/// The whole-seconds part saturates instead of wrapping. This is only reachable with counter
/// readings that correspond to centuries of uptime at realistic frequencies.
///
/// `ticks_per_second` must be positive.
#[expect(
    clippy::integer_division,
    clippy::arithmetic_side_effects,
    clippy::modulo_arithmetic,
    reason = "divisor is a positive frequency, truncating the sub-unit remainder is intended"
)]
pub(crate) fn counter_to_units(counter: i64, ticks_per_second: i64, units_per_second: i64) -> i64 {
    debug_assert!(ticks_per_second > 0);

    if is_already_in_units(ticks_per_second, units_per_second) {
        return counter;
    }

    let whole = (counter / ticks_per_second).saturating_mul(units_per_second);

    // |remainder| < ticks_per_second, so in i128 the product cannot overflow and the quotient
    // is below units_per_second in magnitude.
    let remainder = counter % ticks_per_second;
    let part = i128::from(remainder) * i128::from(units_per_second) / i128::from(ticks_per_second);
    let part = i64::try_from(part).expect("sub-second part is always below units_per_second");

    whole.saturating_add(part)
}

#[cfg_attr(test, mutants::skip)] // Fast path matches the general path, so its mutations survive. Intentional.
const fn is_already_in_units(ticks_per_second: i64, units_per_second: i64) -> bool {
    ticks_per_second == units_per_second
}
