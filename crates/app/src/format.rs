//! Display formatting helpers.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Format a price as US dollars, e.g. `$1,234.56`.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    let mut amount = price.round_dp(2);
    amount.rescale(2);

    Money::from_decimal(amount, iso::USD).to_string()
}

/// Truncate to at most `max` characters, appending `…` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max).collect();
    truncated.push('…');
    truncated
}

/// Uppercase the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_adds_symbol_and_separators() {
        let price = Decimal::new(123_456, 2);

        assert_eq!(format_price(price), "$1,234.56");
    }

    #[test]
    fn format_price_pads_to_two_decimals() {
        let price = Decimal::new(255, 1);

        assert_eq!(format_price(price), "$25.50");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("backpack", 50), "backpack");
    }

    #[test]
    fn truncate_shortens_and_marks_long_text() {
        assert_eq!(truncate("hello world", 5), "hello…");
    }

    #[test]
    fn capitalize_uppercases_the_first_character() {
        assert_eq!(capitalize("electronics"), "Electronics");
    }

    #[test]
    fn capitalize_of_empty_is_empty() {
        assert_eq!(capitalize(""), "");
    }
}
