//! Display formatting: thousands grouping for the integer digits, typed
//! fractional digits preserved verbatim.

/// Formats an operand buffer for display.
///
/// The textual form is split on the first decimal point. The integer part
/// is parsed as a number and rendered with `,` grouping; if it does not
/// parse (empty buffer, lone `-`), the integer portion renders as empty
/// text. A fractional part present in the input is reattached verbatim,
/// unrounded, so an in-progress entry like `"1234.5"` displays as
/// `"1,234.5"` while the digits being typed stay exactly as typed.
///
/// Never fails: non-finite values (`inf`, `NaN` written back by a
/// computation) parse as `f64` and are rendered in their textual form.
#[must_use]
pub fn format_operand(raw: &str) -> String {
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (raw, None),
    };

    let int_display = match int_part.parse::<f64>() {
        Ok(value) if value.is_finite() => group_thousands(value),
        Ok(value) => value.to_string(),
        Err(_) => String::new(),
    };

    match frac_part {
        Some(frac) => format!("{int_display}.{frac}"),
        None => int_display,
    }
}

/// Canonical numeric-to-text conversion for values written back into an
/// operand buffer after a computation.
///
/// Uses `f64` Display: shortest round-trip decimal form, no exponent
/// notation, `inf`/`NaN` for non-finite values. Those strings parse back
/// to the same `f64`, so a result can seed the next computation.
#[must_use]
pub fn fmt_number(value: f64) -> String {
    value.to_string()
}

/// Renders the truncated integer portion of a finite value with `,`
/// grouping every three digits.
fn group_thousands(value: f64) -> String {
    let text = value.trunc().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}
