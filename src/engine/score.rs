//! Per-field scoring and score combination
//!
//! A field pair is checked for containment first: if the folded query
//! occurs inside the folded field text, the score starts at
//! [`CONTAINMENT_FLOOR`] and climbs toward 1.0 as the query covers more
//! of the field, so tight matches outrank needle-in-haystack hits.
//! Non-substring pairs fall back to the better of full-string edit
//! similarity and token overlap. A record's overall score is the maximum
//! across its selected fields: a strong match in any one field is
//! sufficient, and records with many empty fields are not penalized.

use unicode_segmentation::UnicodeSegmentation;

use crate::algorithms::normalize::fold;
use crate::algorithms::{levenshtein_similarity, token_overlap, Similarity};
use crate::engine::record::Searchable;

/// Score a substring hit gets before the coverage bonus.
///
/// Any containment match scores at least this much, which keeps
/// needle-in-haystack hits above the default dashboard threshold while
/// still ranking them below tighter matches.
pub const CONTAINMENT_FLOOR: f64 = 0.6;

/// Similarity between a folded query and folded field text.
///
/// Both arguments are expected to be non-empty and already folded
/// (see [`fold`]). Length ratios are measured in grapheme clusters so
/// combining marks in Indic text do not skew the coverage bonus.
#[must_use]
pub fn pair_score(query: &str, text: &str) -> f64 {
    if query == text {
        return 1.0;
    }

    if text.contains(query) {
        let q = query.graphemes(true).count();
        let t = text.graphemes(true).count().max(1);
        return CONTAINMENT_FLOOR + (1.0 - CONTAINMENT_FLOOR) * (q as f64 / t as f64);
    }

    levenshtein_similarity(query, text).max(token_overlap(query, text))
}

/// The engine's per-pair scorer.
///
/// Implements [`Similarity`] so the combined measure plugs into the same
/// seam as the primitive metrics and can be swapped for one of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryScorer;

impl Similarity for QueryScorer {
    fn similarity(&self, query: &str, text: &str) -> f64 {
        pair_score(query, text)
    }

    fn name(&self) -> &'static str {
        "query_scorer"
    }
}

/// Best score across the selected fields of one record.
///
/// Returns `None` when no selected field holds non-empty text, which is
/// how records with nothing to match are excluded at any threshold.
pub fn record_score<S, F>(
    record: &S,
    folded_query: &str,
    fields: &[F],
    scorer: &dyn Similarity,
) -> Option<f64>
where
    S: Searchable,
    F: AsRef<str>,
{
    let mut best: Option<f64> = None;

    for field in fields {
        let Some(raw) = record.field_text(field.as_ref()) else {
            continue;
        };
        let text = fold(raw);
        if text.is_empty() {
            continue;
        }

        let score = scorer.similarity(folded_query, &text);
        if best.map_or(true, |b| score > b) {
            best = Some(score);
        }
        if score >= 1.0 {
            break;
        }
    }

    best
}
