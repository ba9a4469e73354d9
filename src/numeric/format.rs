// ============================================================================
// Currency Formatting
// Mask/unmask helpers shared by the config and the mask engine
// ============================================================================

use super::amount::{Amount, RoundingPolicy, MAX_FRACTION_DIGITS};

/// Separator inserted every three integer digits.
pub const GROUPING_SEPARATOR: char = ',';

/// Render `amount` as `"{symbol} {grouped integer}{mark}{two digits}"`.
///
/// The sign, if any, follows the symbol and is never grouped:
/// `"$ -1,234.50"`. The space is emitted even for an empty symbol.
pub fn format_amount(
    amount: &Amount,
    currency_symbol: &str,
    decimal_mark: char,
    rounding: RoundingPolicy,
) -> String {
    let cents = amount.to_cents(rounding);
    let scale = 10_u128.pow(MAX_FRACTION_DIGITS);
    let magnitude = cents.unsigned_abs();
    let integer = group_digits(&(magnitude / scale).to_string());
    let fraction = magnitude % scale;

    let mut out = String::with_capacity(currency_symbol.len() + integer.len() + 6);
    out.push_str(currency_symbol);
    out.push(' ');
    if cents < 0 {
        out.push('-');
    }
    out.push_str(&integer);
    out.push(decimal_mark);
    out.push_str(&format!(
        "{:0>width$}",
        fraction,
        width = MAX_FRACTION_DIGITS as usize
    ));
    out
}

/// Insert [`GROUPING_SEPARATOR`] every three digits from the right.
pub fn group_digits(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUPING_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Keep only digits, `-` and the decimal mark.
pub fn unmask(text: &str, decimal_mark: char) -> String {
    text.chars()
        .filter(|&c| c.is_ascii_digit() || c == '-' || c == decimal_mark)
        .collect()
}

/// Cut everything past [`MAX_FRACTION_DIGITS`] characters after the first
/// decimal mark.
///
/// Returns `None` when `text` is already short enough.
pub fn chop_fraction(text: &str, decimal_mark: char) -> Option<String> {
    let (mark_idx, _) = text.char_indices().find(|&(_, c)| c == decimal_mark)?;
    let after_mark = mark_idx + decimal_mark.len_utf8();
    let fraction = &text[after_mark..];

    let (cut, _) = fraction.char_indices().nth(MAX_FRACTION_DIGITS as usize)?;
    Some(text[..after_mark + cut].to_string())
}

/// Char offset of the first decimal mark in `text`.
pub fn mark_position(text: &str, decimal_mark: char) -> Option<usize> {
    text.chars().position(|c| c == decimal_mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(s: &str) -> String {
        format_amount(
            &s.parse().unwrap(),
            "$",
            '.',
            RoundingPolicy::HalfAwayFromZero,
        )
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(fmt("1234567"), "$ 1,234,567.00");
        assert_eq!(fmt("1234.5"), "$ 1,234.50");
        assert_eq!(fmt("123"), "$ 123.00");
        assert_eq!(fmt("0"), "$ 0.00");
        assert_eq!(fmt("100000"), "$ 100,000.00");
    }

    #[test]
    fn test_format_rounding() {
        assert_eq!(fmt("1.005"), "$ 1.01");
        assert_eq!(fmt("1.015"), "$ 1.02");
        assert_eq!(fmt("999.995"), "$ 1,000.00");
        assert_eq!(fmt("0.001"), "$ 0.00");
    }

    #[test]
    fn test_format_negative_sign_not_grouped() {
        assert_eq!(fmt("-1234.5"), "$ -1,234.50");
        assert_eq!(fmt("-123"), "$ -123.00");
        // Rounds to zero, so no sign
        assert_eq!(fmt("-0.001"), "$ 0.00");
    }

    #[test]
    fn test_format_truncate_policy() {
        let a: Amount = "1.009".parse().unwrap();
        assert_eq!(
            format_amount(&a, "₹", '.', RoundingPolicy::Truncate),
            "₹ 1.00"
        );
    }

    #[test]
    fn test_format_custom_symbol_and_mark() {
        let a: Amount = "1234.5".parse().unwrap();
        assert_eq!(
            format_amount(&a, "EUR", '·', RoundingPolicy::HalfAwayFromZero),
            "EUR 1,234·50"
        );
        assert_eq!(
            format_amount(&a, "", '.', RoundingPolicy::HalfAwayFromZero),
            " 1,234.50"
        );
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(""), "");
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456"), "123,456");
    }

    #[test]
    fn test_unmask() {
        assert_eq!(unmask("$ 1,234.50", '.'), "1234.50");
        assert_eq!(unmask("$ -1,234.50", '.'), "-1234.50");
        assert_eq!(unmask("abc", '.'), "");
    }

    #[test]
    fn test_chop_fraction() {
        assert_eq!(chop_fraction("12.345", '.'), Some("12.34".to_string()));
        assert_eq!(chop_fraction("1234.506", '.'), Some("1234.50".to_string()));
        assert_eq!(chop_fraction("12.34", '.'), None);
        assert_eq!(chop_fraction("12.", '.'), None);
        assert_eq!(chop_fraction("1234", '.'), None);
        assert_eq!(chop_fraction(".12345", '.'), Some(".12".to_string()));
    }

    #[test]
    fn test_mark_position() {
        assert_eq!(mark_position("12.34", '.'), Some(2));
        assert_eq!(mark_position("1234", '.'), None);
    }
}
