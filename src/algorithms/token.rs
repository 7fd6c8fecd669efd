//! Token-overlap similarity
//!
//! Splits text on Unicode word boundaries and scores how well the query's
//! tokens are covered by the field's tokens. Each query token takes its
//! best edit-distance similarity against any field token; the overall
//! score is the mean over query tokens, so a query must be broadly
//! covered to score high while a single missing word only dilutes.

use super::levenshtein::levenshtein_bounded;
use super::Similarity;
use unicode_segmentation::UnicodeSegmentation;

/// Split a string into word tokens (UAX #29 word boundaries).
///
/// Punctuation-only segments are dropped; Indic scripts segment on the
/// same rules as Latin text.
#[must_use]
pub fn tokens(s: &str) -> Vec<&str> {
    s.unicode_words().collect()
}

/// Token-overlap score between a query and a body of text (0.0 to 1.0).
///
/// Returns 0.0 when either side has no word tokens.
///
/// # Examples
/// ```
/// use setu_filter::algorithms::token::token_overlap;
///
/// assert_eq!(token_overlap("hindi manual", "manual hindi"), 1.0);
/// assert!(token_overlap("hindi", "science manual english") < 0.4);
/// ```
#[must_use]
pub fn token_overlap(query: &str, text: &str) -> f64 {
    let query_tokens = tokens(query);
    let text_tokens = tokens(text);

    if query_tokens.is_empty() || text_tokens.is_empty() {
        return 0.0;
    }

    let text_lens: Vec<usize> = text_tokens.iter().map(|t| t.chars().count()).collect();

    let mut sum = 0.0;
    for qt in &query_tokens {
        let qt_len = qt.chars().count();
        let mut best = 0.0f64;

        for (tt, &tt_len) in text_tokens.iter().zip(&text_lens) {
            let max_len = qt_len.max(tt_len);
            if max_len == 0 {
                continue;
            }
            // A field token can only improve on `best` if its distance
            // stays under this cap
            let cap = ((1.0 - best) * max_len as f64).ceil() as usize;
            if let Some(dist) = levenshtein_bounded(qt, tt, Some(cap)) {
                let sim = 1.0 - (dist as f64 / max_len as f64);
                if sim > best {
                    best = sim;
                }
            }
            if best >= 1.0 {
                break;
            }
        }

        sum += best;
    }

    sum / query_tokens.len() as f64
}

/// Token-overlap metric as a [`Similarity`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenOverlap;

impl Similarity for TokenOverlap {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        token_overlap(a, b)
    }

    fn name(&self) -> &'static str {
        "token_overlap"
    }
}
