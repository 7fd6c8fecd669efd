//! Text normalization applied before comparison
//!
//! Query and field text go through the same fold: Unicode NFC composition,
//! code-point-aware lowercasing, and whitespace collapsing. Folding both
//! sides identically is what makes the engine case- and
//! whitespace-insensitive.

use unicode_normalization::UnicodeNormalization;

/// Fold a string for comparison.
///
/// Applies NFC normalization, lowercases each code point, collapses runs
/// of whitespace to single spaces, and trims the ends. Lowercasing uses
/// `char::to_lowercase`, so scripts without case (Devanagari, Tamil, ...)
/// pass through unchanged rather than being ASCII-folded.
///
/// # Examples
/// ```
/// use setu_filter::algorithms::normalize::fold;
///
/// assert_eq!(fold("  NCF   2023 Hindi  "), "ncf 2023 hindi");
/// assert_eq!(fold("हिंदी   प्रशिक्षण"), "हिंदी प्रशिक्षण");
/// ```
#[must_use]
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.nfc() {
        if c.is_whitespace() {
            // Defer the separator so trailing whitespace is never flushed
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            for lc in c.to_lowercase() {
                out.push(lc);
            }
        }
    }
    out
}
