//! Scalar readers for `null`, booleans and numbers (spec.md §4.1).
//!
//! Three numeric readers coexist here on purpose, matching the source this
//! crate is modeled on (spec.md §9, Design Notes): [`read_integer`] is the
//! strict JSON-grammar integer reader, [`read_double`] is a narrow low-level
//! fractional reader, and [`read_number`] is the canonical mid-level reader
//! the dispatcher actually calls — it subsumes both. Implementers extending
//! this crate with a custom [`crate::leaf::NumberPolicy`] should treat
//! `read_number`'s grammar as the one to match; `read_integer`/`read_double`
//! are exposed because spec.md's external interface (§6) names them, not
//! because the dispatcher picks between them at runtime.

use crate::{
    cursor::Cursor,
    error::{JsonError, StructuralError},
};

/// Matches the literal `null` at the cursor, advancing past it on success.
#[must_use]
pub fn read_null(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_literal(b"null")
}

/// Matches `true` or `false` at the cursor.
#[must_use]
pub fn read_bool(cursor: &mut Cursor<'_>) -> Option<bool> {
    if cursor.eat_literal(b"true") {
        Some(true)
    } else if cursor.eat_literal(b"false") {
        Some(false)
    } else {
        None
    }
}

/// A decoded JSON number: either an integer or a double, per the default
/// number policy (spec.md §3's "second mode" is a different [`NumberValue`]
/// shape entirely — see [`crate::leaf::NumberPolicy`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// A value that parsed as a JSON integer with no fractional part or
    /// exponent.
    Integer(i64),
    /// A value with a fractional part and/or exponent, or one whose
    /// magnitude does not fit a signed 64-bit integer's grammar (always via
    /// the `.`/`e` branches, never silently for bare integers).
    Double(f64),
}

impl core::fmt::Display for NumberValue {
    /// Integers print as plain decimal; doubles print `%f`-style (fixed,
    /// six fractional digits) rather than the shortest round-trip
    /// representation — spec.md §4.7 says to match the source's behavior
    /// here rather than improve on it.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NumberValue::Integer(i) => write!(f, "{i}"),
            NumberValue::Double(d) => write!(f, "{d:.6}"),
        }
    }
}

#[inline]
fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Consumes a run of ASCII digits, returning `(count, magnitude, overflowed,
/// as_f64)`. `magnitude` is exact only while `!overflowed`; `as_f64` is kept
/// running regardless, for the fractional/exponent fallback paths.
fn consume_digit_run(cursor: &mut Cursor<'_>) -> (usize, u64, bool, f64) {
    let mut count = 0usize;
    let mut magnitude: u64 = 0;
    let mut overflowed = false;
    let mut as_f64 = 0.0f64;
    while is_digit(cursor.peek()) {
        let digit = (cursor.peek() - b'0') as u64;
        match magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(digit))
        {
            Some(m) => magnitude = m,
            None => overflowed = true,
        }
        as_f64 = as_f64 * 10.0 + digit as f64;
        cursor.advance(1);
        count += 1;
    }
    (count, magnitude, overflowed, as_f64)
}

/// Applies a sign to an unsigned magnitude, returning `None` on signed
/// 64-bit overflow (spec.md §4.1's "negation of a value exceeding the signed
/// maximum is a failure").
fn apply_sign(magnitude: u64, overflowed: bool, negative: bool) -> Option<i64> {
    if overflowed {
        return None;
    }
    if negative {
        if magnitude > i64::MAX as u64 + 1 {
            None
        } else if magnitude == i64::MAX as u64 + 1 {
            Some(i64::MIN)
        } else {
            Some(-(magnitude as i64))
        }
    } else if magnitude > i64::MAX as u64 {
        None
    } else {
        Some(magnitude as i64)
    }
}

/// The strict JSON integer grammar: optional `-`, then `0` or a non-zero
/// leading digit sequence. Fails (without moving the cursor) if a `.`
/// immediately follows the digits — spec.md §4.1 routes that case to a
/// double reader instead.
#[must_use]
pub fn read_integer(cursor: &mut Cursor<'_>) -> Option<i64> {
    let start = cursor.pos();
    let negative = cursor.peek() == b'-';
    if negative {
        cursor.advance(1);
    }
    let first = cursor.peek();
    if !is_digit(first) {
        cursor.set_pos(start);
        return None;
    }
    if first == b'0' {
        cursor.advance(1);
    } else {
        while is_digit(cursor.peek()) {
            cursor.advance(1);
        }
    }
    if cursor.peek() == b'.' {
        cursor.set_pos(start);
        return None;
    }
    // Re-walk the digits we already matched to build the magnitude; this
    // avoids giving `consume_digit_run` the job of enforcing the no-leading-
    // zero rule, which only this strict reader cares about.
    let digits_end = cursor.pos();
    let mut magnitude: u64 = 0;
    let mut overflowed = false;
    for i in (start + usize::from(negative))..digits_end {
        let digit = (cursor_byte(cursor, i) - b'0') as u64;
        match magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(digit))
        {
            Some(m) => magnitude = m,
            None => overflowed = true,
        }
    }
    match apply_sign(magnitude, overflowed, negative) {
        Some(v) => Some(v),
        None => {
            cursor.set_pos(start);
            None
        }
    }
}

#[inline]
fn cursor_byte(cursor: &Cursor<'_>, idx: usize) -> u8 {
    cursor.byte_at(idx)
}

/// The low-level fractional reader spec.md §4.1 describes: optional `-`,
/// optional single `0`, then a fractional part if `.` follows. It never
/// reads an exponent and never fails — on any other shape it simply yields
/// `0.0` without consuming more than the sign/leading zero. This is *not*
/// the reader the leaf dispatcher uses (see the module docs); it exists
/// because spec.md §6 names it as part of the external scalar-reader
/// surface.
#[must_use]
pub fn read_double(cursor: &mut Cursor<'_>) -> f64 {
    let negative = cursor.peek() == b'-';
    if negative {
        cursor.advance(1);
    }
    if cursor.peek() == b'0' {
        cursor.advance(1);
    }
    let mut value = 0.0f64;
    if cursor.peek() == b'.' {
        cursor.advance(1);
        let mut scale = 0.1f64;
        while is_digit(cursor.peek()) {
            let digit = (cursor.peek() - b'0') as f64;
            value += digit * scale;
            scale *= 0.1;
            cursor.advance(1);
        }
    }
    if negative { -value } else { value }
}

/// The canonical mid-level number reader (spec.md §4.1): optional sign, an
/// unsigned digit run, then an optional fractional part and/or exponent.
///
/// Unlike [`read_integer`], leading zeros before a decimal point are
/// tolerated (spec.md §6's stated leniency). The exponent is interpreted in
/// base 10 — spec.md §9 flags the source's base-2 `ldexp` exponent as a
/// probable bug and directs implementers not to replicate it.
pub fn read_number(cursor: &mut Cursor<'_>) -> Result<NumberValue, JsonError> {
    let negative = cursor.peek() == b'-';
    if negative {
        cursor.advance(1);
    }
    let (count, magnitude, overflowed, mut mantissa_f64) = consume_digit_run(cursor);
    if count == 0 {
        return Err(StructuralError::ExpectedValue.into());
    }

    let mut is_double = false;

    if cursor.peek() == b'.' {
        is_double = true;
        cursor.advance(1);
        let mut scale = 0.1f64;
        let mut frac_count = 0usize;
        while is_digit(cursor.peek()) {
            let digit = (cursor.peek() - b'0') as f64;
            mantissa_f64 += digit * scale;
            scale *= 0.1;
            cursor.advance(1);
            frac_count += 1;
        }
        if frac_count == 0 {
            return Err(StructuralError::ExpectedValue.into());
        }
    }

    if matches!(cursor.peek(), b'e' | b'E') {
        is_double = true;
        cursor.advance(1);
        let exp_negative = match cursor.peek() {
            b'-' => {
                cursor.advance(1);
                true
            }
            b'+' => {
                cursor.advance(1);
                false
            }
            _ => false,
        };
        let (exp_count, exp_magnitude, exp_overflowed, _) = consume_digit_run(cursor);
        if exp_count == 0 {
            return Err(StructuralError::ExpectedValue.into());
        }
        if exp_overflowed || exp_magnitude > i32::MAX as u64 {
            return Err(JsonError::NumericOverflow);
        }
        let exponent = if exp_negative {
            -(exp_magnitude as i64)
        } else {
            exp_magnitude as i64
        };
        mantissa_f64 *= 10f64.powi(exponent as i32);
    }

    if is_double {
        Ok(NumberValue::Double(if negative {
            -mantissa_f64
        } else {
            mantissa_f64
        }))
    } else {
        apply_sign(magnitude, overflowed, negative)
            .map(NumberValue::Integer)
            .ok_or(JsonError::NumericOverflow)
    }
}
