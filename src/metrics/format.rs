const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
/// Extra decimals inspected when deciding whether a value is an exact rounding tie.
const TIE_CHECK_DIGITS: usize = 30;

/// Render a duration as whole hours and minutes, e.g. `5h 0m`.
///
/// Leftover seconds are truncated. Negative and non-finite input renders as `0h 0m`.
pub fn format_time(total_seconds: f64) -> String {
    let seconds = non_negative(total_seconds);
    let hours = (seconds / SECONDS_PER_HOUR).floor();
    let minutes = ((seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).floor();
    format!("{hours}h {minutes}m")
}

/// Render a duration in hours with one decimal, e.g. `10.0h`.
pub fn format_hours(total_seconds: f64) -> String {
    let hours = non_negative(total_seconds) / SECONDS_PER_HOUR;
    format!("{}h", format_fixed(hours, 1))
}

/// Render a duration as an approximate minute count, e.g. `~600 minutes`.
pub fn format_minutes_approx(total_seconds: f64) -> String {
    let minutes = (non_negative(total_seconds) / SECONDS_PER_MINUTE).round();
    format!("~{minutes} minutes")
}

/// Fixed-point rendering with `digits` decimals.
///
/// Exact halves round away from zero (`0.25` gives `0.3`), unlike the
/// round-half-to-even of `{:.N}`.
pub fn format_fixed(value: f64, digits: usize) -> String {
    if is_rounding_tie(value, digits) {
        let nudge = 10f64.powi(-(digits as i32) - 2);
        let away = if value < 0.0 { value - nudge } else { value + nudge };
        return format!("{away:.digits$}");
    }
    format!("{value:.digits$}")
}

/// Whether `value` lies exactly halfway between two `digits`-decimal numbers.
fn is_rounding_tie(value: f64, digits: usize) -> bool {
    if !value.is_finite() {
        return false;
    }
    let precision = digits + TIE_CHECK_DIGITS;
    let expanded = format!("{:.precision$}", value.abs());
    let Some((_, fraction)) = expanded.split_once('.') else {
        return false;
    };
    let tail = &fraction.as_bytes()[digits..];
    tail.first() == Some(&b'5') && tail[1..].iter().all(|&b| b == b'0')
}

/// Render a value as a percentage using its shortest decimal form, e.g. `18.6%`.
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Scientific notation with `digits` mantissa decimals and a signed exponent,
/// e.g. `1.0e-5` or `2.5e+3`.
pub fn format_exponential(value: f64, digits: usize) -> String {
    let raw = format!("{value:.digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

/// Group an integer with comma thousands separators, e.g. `8,500`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
