use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::UNSPECIFIED_PRICE;

static PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<currency>[^\d\s]{1,3}|[A-Z]{3})?\s*(?P<value>\d[\d,]*(?:\.\d+)?)")
        .expect("static regex")
});

/// Parses displayed price text into (value, currency).
///
/// Only the first `|`-separated segment counts ("$1,800 | $2,000" is a range,
/// "$900 | $1,100" a was/now pair). Empty, unspecified or number-free text
/// gives `(None, None)`.
pub fn parse_price(price_text: &str) -> (Option<f64>, Option<String>) {
    if price_text.is_empty() || price_text == UNSPECIFIED_PRICE {
        return (None, None);
    }

    let primary = price_text.split('|').next().unwrap_or_default().trim();
    let Some(caps) = PRICE.captures(primary) else {
        return (None, None);
    };

    let value = caps["value"].replace(',', "").parse::<f64>().ok();
    let currency = caps
        .name("currency")
        .map(|m| m.as_str().trim().to_string())
        .filter(|c| !c.is_empty());

    match value {
        Some(v) => (Some(v), currency),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbol_and_thousands() {
        assert_eq!(parse_price("$1,900"), (Some(1900.0), Some("$".to_string())));
    }

    #[test]
    fn takes_first_segment_only() {
        assert_eq!(
            parse_price("CA$1,800 | CA$2,000"),
            (Some(1800.0), Some("CA$".to_string()))
        );
    }

    #[test]
    fn parses_decimals_without_currency() {
        assert_eq!(parse_price("1250.50"), (Some(1250.5), None));
    }

    #[test]
    fn parses_iso_code_prefix() {
        assert_eq!(parse_price("USD 700"), (Some(700.0), Some("USD".to_string())));
    }

    #[test]
    fn unspecified_and_empty_have_no_price() {
        assert_eq!(parse_price(UNSPECIFIED_PRICE), (None, None));
        assert_eq!(parse_price(""), (None, None));
        assert_eq!(parse_price("Free"), (None, None));
    }
}
