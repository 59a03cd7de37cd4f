use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user-typed amount such as `"12 345,67"` or `"12345.67"`.
///
/// Whitespace is dropped (thousands separators), the first comma is read as
/// the decimal point and the leading numeric part is used, so `"100 €"`
/// parses as 100. Anything unparseable or negative becomes zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = compact.replacen(',', ".", 1);

    let Some((negative, number)) = numeric_prefix(&normalized) else {
        if !raw.trim().is_empty() {
            log::debug!("Unparseable amount {:?}, using 0", raw);
        }
        return Decimal::ZERO;
    };

    match Decimal::from_str(&number) {
        Ok(value) if negative && !value.is_zero() => {
            log::debug!("Negative amount {:?}, using 0", raw);
            Decimal::ZERO
        }
        Ok(value) => value,
        Err(err) => {
            log::debug!("Amount {:?} out of range ({}), using 0", raw, err);
            Decimal::ZERO
        }
    }
}

/// Leading `[sign]digits[.digits]` of `s`, as (is_negative, unsigned number).
fn numeric_prefix(s: &str) -> Option<(bool, String)> {
    let mut chars = s.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut whole = String::new();
    while let Some(c) = chars.peek().filter(|c| c.is_ascii_digit()) {
        whole.push(*c);
        chars.next();
    }

    let mut fraction = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(c) = chars.peek().filter(|c| c.is_ascii_digit()) {
            fraction.push(*c);
            chars.next();
        }
    }

    match (whole.is_empty(), fraction.is_empty()) {
        (true, true) => None,
        (_, true) => Some((negative, whole)),
        (true, false) => Some((negative, format!("0.{fraction}"))),
        (false, false) => Some((negative, format!("{whole}.{fraction}"))),
    }
}
