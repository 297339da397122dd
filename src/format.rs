/// Renders an evaluation result for display.
///
/// Whole numbers print without a fractional part. Magnitudes of at least `1e6` or below `1e-4`
/// use scientific notation with `precision` fractional digits. Anything else prints with
/// `precision` decimals and trailing zeros removed.
pub fn format_result(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }

    let magnitude = value.abs();
    if magnitude >= 1e6 || magnitude < 1e-4 {
        return scientific(value, precision);
    }

    let fixed = format!("{:.*}", precision, value);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// `1.5e-7` as `1.500000e-07`: signed exponent with at least two digits.
fn scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    formatted
        .split_once('e')
        .and_then(|(mantissa, exponent)| {
            let exponent = exponent.parse::<i32>().ok()?;
            let sign = if exponent < 0 { '-' } else { '+' };
            Some(format!("{}e{}{:02}", mantissa, sign, exponent.abs()))
        })
        .unwrap_or(formatted)
}
