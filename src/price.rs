//! Price normalization and currency inference.
//!
//! Free-form price strings mix currency symbols, thousands separators, and
//! either comma or dot as the decimal mark (`$1,234.56` vs `1.234,56 €`).
//! Normalization resolves the ambiguity positionally, without locale
//! configuration.

use crate::patterns;

/// Convert a free-form price string into a numeric value.
///
/// The decimal separator is inferred as follows:
/// - both `.` and `,` present: the one occurring last is the decimal mark;
/// - only one present: it is the decimal mark only when followed by exactly
///   one or two trailing digits, otherwise it reads as a thousands
///   separator (`12,5` → 12.5, but `1,234` → 1234).
///
/// Thousands separators are removed, the decimal mark becomes a canonical
/// dot, and the first contiguous numeric substring is parsed. Returns
/// `None` when nothing numeric is recoverable.
#[must_use]
pub fn normalize_price(value: &str) -> Option<f64> {
    let raw = patterns::PRICE_NOISE.replace_all(value, "");

    let decimal_sep = infer_decimal_separator(&raw);

    let normalized: String = match decimal_sep {
        Some(sep) => {
            let thousands = if sep == '.' { ',' } else { '.' };
            let without_thousands: String = raw.chars().filter(|c| *c != thousands).collect();
            without_thousands.replacen(sep, ".", 1)
        }
        None => raw.chars().filter(|c| *c != '.' && *c != ',').collect(),
    };

    let numeric = patterns::NUMERIC.find(&normalized)?;
    numeric.as_str().parse::<f64>().ok()
}

/// Positional heuristic for the decimal mark.
///
/// For pathological mixed strings (`1.234,56.78`) "last separator wins" is
/// kept as documented; real-world storefront markup is too inconsistent
/// for stricter validation.
fn infer_decimal_separator(raw: &str) -> Option<char> {
    match (raw.rfind(','), raw.rfind('.')) {
        (Some(comma), Some(dot)) => {
            if comma > dot {
                Some(',')
            } else {
                Some('.')
            }
        }
        (Some(_), None) => patterns::COMMA_DECIMAL_TAIL.is_match(raw).then_some(','),
        (None, Some(_)) => patterns::DOT_DECIMAL_TAIL.is_match(raw).then_some('.'),
        (None, None) => None,
    }
}

/// Infer a currency from a raw, unstripped price string.
///
/// A known symbol anywhere in the string wins; otherwise the first
/// three-uppercase-letter token is taken as an ISO-style code. Runs only
/// when neither structured data nor meta tags carried a currency.
#[must_use]
pub fn infer_currency(value: &str) -> Option<String> {
    if let Some(symbol) = patterns::CURRENCY_SYMBOL.find(value) {
        return Some(symbol.as_str().to_string());
    }

    patterns::CURRENCY_CODE
        .find(value)
        .map(|code| code.as_str().to_string())
}
