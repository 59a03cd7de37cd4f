//! Amount formatting following the sk-SK locale.

use rust_decimal::{Decimal, RoundingStrategy};

const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';

/// Format to two decimal places, e.g. `1234567.891` as `1 234 567,89`.
///
/// Groups are separated by a no-break space and midpoints round away from zero.
pub fn format_sk(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}{DECIMAL_SEPARATOR}{fraction}")
}

/// Format as euros for display, e.g. `36 800,00 €`
pub fn format_eur(amount: Decimal) -> String {
    format!("{} €", format_sk(amount))
}

/// Two decimal places without grouping, e.g. `36800.00`
pub fn format_plain(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
