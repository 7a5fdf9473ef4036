//! Fixed-point amount parsing and formatting.
//!
//! Amounts are signed 64-bit counts of 10^-7 units: one whole unit is
//! `ONE` (10,000,000) scaled units. Text amounts carry at most 7 digits
//! after the decimal point; anything finer cannot be represented and is
//! rejected rather than truncated, so parsing never loses precision.
//!
//! Parsing accepts negative values. Whether a negative amount is
//! acceptable is a policy question that belongs to the layer validating
//! a particular field.

use crate::error::AmountError;

/// Number of scaled units in one whole unit.
pub const ONE: i64 = 10_000_000;

/// Number of decimal digits carried after the point.
pub const FRACTIONAL_DIGITS: u32 = 7;

/// Parse a base-10 decimal string into scaled units.
///
/// The input may carry a single leading `-` or `+`, an optional decimal
/// point, and at most [`FRACTIONAL_DIGITS`] fractional digits. The
/// scaled result must fit in an `i64`.
pub fn parse(input: &str) -> Result<i64, AmountError> {
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::InvalidFormat { input: input.to_string() });
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AmountError::InvalidFormat { input: input.to_string() });
    }
    if frac_part.len() > FRACTIONAL_DIGITS as usize {
        return Err(AmountError::TooPrecise { input: input.to_string() });
    }

    let overflow = || AmountError::Overflow { input: input.to_string() };

    let mut whole: i64 = 0;
    for b in int_part.bytes() {
        whole = whole
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as i64))
            .ok_or_else(overflow)?;
    }

    // At most 7 digits: fits well inside an i64.
    let mut frac: i64 = 0;
    for b in frac_part.bytes() {
        frac = frac * 10 + (b - b'0') as i64;
    }
    frac *= 10i64.pow(FRACTIONAL_DIGITS - frac_part.len() as u32);

    let magnitude = whole
        .checked_mul(ONE)
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(overflow)?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// Render scaled units as a decimal string with all 7 fractional digits.
///
/// `parse(&format(x))` reproduces `x` for every `x` except `i64::MIN`.
pub fn format(units: i64) -> String {
    let sign = if units < 0 { "-" } else { "" };
    let magnitude = units.unsigned_abs();
    format!(
        "{}{}.{:07}",
        sign,
        magnitude / ONE as u64,
        magnitude % ONE as u64
    )
}
