//! Static exchange-rate table used to normalize salaries to US dollars.

/// Display name of the currency every salary is normalized to.
pub const REFERENCE_CURRENCY: &str = "USD";

/// Symbol of the reference currency, used when formatting normalized values.
pub const REFERENCE_SYMBOL: &str = "$";

/// Multiplier from each accepted symbol to one US dollar.
///
/// `"3"` is kept exactly as it appears in the historical data set; it is
/// most likely a mistyped `£`, but stored records may already use it.
const RATES: &[(&str, f64)] = &[
    ("$", 1.0),
    ("€", 1.08),
    ("3", 1.27),
    ("¥", 0.0062),
    ("₽", 0.011),
    ("₹", 0.012),
    ("﷼", 0.0027),
];

pub fn rate(symbol: &str) -> Option<f64> {
    RATES.iter().find(|(s, _)| *s == symbol).map(|(_, r)| *r)
}

pub fn is_supported(symbol: &str) -> bool {
    rate(symbol).is_some()
}

/// Accepted symbols in table order.
pub fn supported_symbols() -> impl Iterator<Item = &'static str> {
    RATES.iter().map(|(s, _)| *s)
}

/// Converts `amount` to the reference currency.
///
/// Unknown symbols convert at 1:1 instead of failing. Callers that must
/// reject them check [`is_supported`] first.
pub fn to_reference(amount: f64, symbol: &str) -> f64 {
    amount * rate(symbol).unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn converts_known_symbols() {
        assert!(close(to_reference(100.0, "$"), 100.0));
        assert!(close(to_reference(100.0, "€"), 108.0));
        assert!(close(to_reference(1000.0, "¥"), 6.2));
    }

    #[test]
    fn unknown_symbol_defaults_to_parity() {
        assert!(!is_supported("£"));
        assert!(close(to_reference(250.0, "£"), 250.0));
    }

    #[test]
    fn placeholder_symbol_is_carried_verbatim() {
        assert_eq!(rate("3"), Some(1.27));
    }

    #[test]
    fn lists_every_symbol_once() {
        let symbols: Vec<_> = supported_symbols().collect();
        assert_eq!(symbols, vec!["$", "€", "3", "¥", "₽", "₹", "﷼"]);
    }
}
