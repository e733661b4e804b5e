//! The tree printer (spec.md §4.7).
//!
//! Emits the same JSON-ish textual form spec.md describes — not strict
//! round-trip JSON (control bytes are `\u00XX`-escaped but other non-ASCII
//! bytes pass through verbatim, doubles print with Rust's default
//! formatting rather than any round-trip-guaranteeing algorithm). spec.md
//! §9 flags the source printer's array-vs-object cardinality check as
//! backwards; there's no equivalent bug to reproduce here since each
//! [`Value`] variant already carries its own child count.

use core::fmt::{self, Write};

use crate::tree::value::Value;

/// Writes `value` to `out` in the printer's textual form.
///
/// # Errors
/// Propagates any formatting failure from `out`.
pub fn print<N: fmt::Display, W: Write>(out: &mut W, value: &Value<'_, N>) -> fmt::Result {
    print_at(out, value, 0)
}

fn print_at<N: fmt::Display, W: Write>(out: &mut W, value: &Value<'_, N>, depth: usize) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(true) => out.write_str("true"),
        Value::Bool(false) => out.write_str("false"),
        Value::Number(n) => write!(out, "{n}"),
        Value::Str(s) => print_string(out, s.as_str()),
        Value::Array(items) => print_array(out, items, depth),
        Value::Object(entries) => print_object(out, entries, depth),
    }
}

fn print_array<N: fmt::Display, W: Write>(out: &mut W, items: &[Value<'_, N>], depth: usize) -> fmt::Result {
    if items.is_empty() {
        return out.write_str("[]");
    }
    out.write_char('[')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        print_at(out, item, depth)?;
    }
    out.write_char(']')
}

fn print_object<N: fmt::Display, W: Write>(
    out: &mut W,
    entries: &[(crate::slice::StrSlice<'_>, Value<'_, N>)],
    depth: usize,
) -> fmt::Result {
    if entries.is_empty() {
        return out.write_str("{}");
    }
    out.write_char('{')?;
    out.write_char('\n')?;
    for (i, (key, child)) in entries.iter().enumerate() {
        if i > 0 {
            out.write_str(",\n")?;
        }
        for _ in 0..(depth + 1) {
            out.write_str("    ")?;
        }
        print_string(out, key.as_str())?;
        out.write_str(": ")?;
        print_at(out, child, depth + 1)?;
    }
    out.write_char('\n')?;
    for _ in 0..depth {
        out.write_str("    ")?;
    }
    out.write_char('}')
}

/// Writes `s` as a quoted JSON string, re-escaping `"` and `\` and emitting
/// control bytes below 0x20 as `\u00XX` (spec.md §4.7). This is not strict
/// round-trip escaping: bytes 0x20 and above pass through unescaped even
/// when `serde_json`-style output would prefer `\n`/`\t` forms.
fn print_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}
