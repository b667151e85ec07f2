//! Locale-aware formatting of counter values

use crate::error::{Result, TallyError};
use num_format::{Locale, ToFormattedString};

/// Resolve a locale identifier like `"en-IN"` to a CLDR locale.
///
/// Both `-` and `_` separators are accepted.
pub fn resolve_locale(tag: &str) -> Result<Locale> {
    Locale::from_name(tag)
        .or_else(|_| Locale::from_name(tag.replace('_', "-")))
        .or_else(|_| Locale::from_name(tag.replace('-', "_")))
        .map_err(|_| TallyError::UnknownLocale(tag.to_string()))
}

/// Format a counter value for display.
///
/// With a locale, finite values are floored and rendered with the locale's
/// digit grouping (`en-IN` groups 3;2: `150000` → `"1,50,000"`). Without one,
/// the plain decimal representation is used. Grouped formatting is
/// integer-only, so non-finite values always take the plain path.
pub fn format_value(value: f64, locale: Option<&Locale>) -> String {
    match locale {
        Some(locale) if value.is_finite() => (value.floor() as i64).to_formatted_string(locale),
        _ => format!("{value}"),
    }
}
