//! The filter operation
//!
//! Pure functions of `(records, query, fields, threshold)`. [`rank`]
//! carries scores, [`filter`] returns the records themselves; both leave
//! their inputs untouched and hold no state between calls. An empty
//! query (after trimming) is the identity filter.

use rayon::prelude::*;

use crate::algorithms::normalize::fold;
use crate::engine::options::FilterOptions;
use crate::engine::record::Searchable;
use crate::engine::score::{record_score, QueryScorer};

/// Minimum input size for parallel scoring.
///
/// For inputs smaller than this, sequential scoring is faster than paying
/// the thread-pool coordination overhead.
const PARALLEL_THRESHOLD: usize = 100;

/// One entry of a ranked result: the input position of a matching record
/// and its overall similarity score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMatch {
    /// Index of the record in the input slice
    pub index: usize,
    /// Overall similarity score (0.0 - 1.0)
    pub score: f64,
}

/// Rank records against a free-text query.
///
/// Scores each record over the selected `fields` (max across fields),
/// drops records below `threshold`, and sorts the rest by descending
/// score. The sort is stable: equal scores keep their input order. An
/// empty query returns every record, in order, with score 1.0.
///
/// Out-of-range thresholds are clamped into `[0.0, 1.0]`; non-finite
/// thresholds are treated as 0.0. Use [`FilterOptions`] to reject such
/// values instead.
///
/// Inputs of 100 records or more are scored in parallel; the result is
/// identical to the sequential path.
#[must_use]
pub fn rank<S, F>(records: &[S], query: &str, fields: &[F], threshold: f64) -> Vec<RankedMatch>
where
    S: Searchable + Sync,
    F: AsRef<str> + Sync,
{
    let folded = fold(query);
    if folded.is_empty() {
        return (0..records.len())
            .map(|index| RankedMatch { index, score: 1.0 })
            .collect();
    }

    let threshold = if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let scorer = QueryScorer;

    let score_one = |(index, record): (usize, &S)| -> Option<RankedMatch> {
        record_score(record, &folded, fields, &scorer)
            .filter(|score| *score >= threshold)
            .map(|score| RankedMatch { index, score })
    };

    let mut matches: Vec<RankedMatch> = if records.len() >= PARALLEL_THRESHOLD {
        records.par_iter().enumerate().filter_map(score_one).collect()
    } else {
        records.iter().enumerate().filter_map(score_one).collect()
    };

    // Stable sort: ties keep input order
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches
}

/// Filter records against a free-text query.
///
/// Same contract as [`rank`], returning references to the matching
/// records in rank order instead of `(index, score)` pairs.
///
/// # Examples
/// ```
/// use setu_filter::engine::filter::filter;
/// use setu_filter::engine::record::Record;
/// use setu_filter::views::{DEFAULT_THRESHOLD, MANUAL_FIELDS};
///
/// let manuals = vec![
///     Record::new().with("title", "NCF 2023 Hindi Manual"),
///     Record::new().with("title", "Science Manual English"),
/// ];
/// let hits = filter(&manuals, "hindi", MANUAL_FIELDS, DEFAULT_THRESHOLD);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].text("title"), Some("NCF 2023 Hindi Manual"));
/// ```
#[must_use]
pub fn filter<'a, S, F>(records: &'a [S], query: &str, fields: &[F], threshold: f64) -> Vec<&'a S>
where
    S: Searchable + Sync,
    F: AsRef<str> + Sync,
{
    rank(records, query, fields, threshold)
        .into_iter()
        .map(|m| &records[m.index])
        .collect()
}

/// Rank records using validated [`FilterOptions`].
///
/// Applies the options' result limit after sorting, so a limit never
/// changes which records outrank which.
#[must_use]
pub fn rank_with<S>(records: &[S], query: &str, options: &FilterOptions) -> Vec<RankedMatch>
where
    S: Searchable + Sync,
{
    let mut matches = rank(records, query, &options.fields, options.threshold);
    if let Some(limit) = options.limit {
        matches.truncate(limit);
    }
    matches
}

/// Filter records using validated [`FilterOptions`].
#[must_use]
pub fn filter_with<'a, S>(records: &'a [S], query: &str, options: &FilterOptions) -> Vec<&'a S>
where
    S: Searchable + Sync,
{
    rank_with(records, query, options)
        .into_iter()
        .map(|m| &records[m.index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::record::Record;

    fn manuals() -> Vec<Record> {
        vec![
            Record::new().with("title", "NCF 2023 Hindi Manual"),
            Record::new().with("title", "Science Manual English"),
            Record::new().with("title", "NCF Hindi Teacher Guide"),
        ]
    }

    const TITLE: &[&str] = &["title"];

    #[test]
    fn test_empty_query_is_identity() {
        let records = manuals();
        let hits = filter(&records, "", TITLE, 0.4);
        assert_eq!(hits.len(), records.len());
        for (hit, record) in hits.iter().zip(&records) {
            assert_eq!(*hit, record);
        }
        // Whitespace-only queries behave the same
        let hits = filter(&records, "   \t ", TITLE, 0.4);
        assert_eq!(hits.len(), records.len());
    }

    #[test]
    fn test_concrete_hindi_scenario() {
        let records = manuals();
        let hits = filter(&records, "hindi", TITLE, 0.4);
        assert_eq!(hits.len(), 2);
        // The shorter title is covered more by the query, so it ranks first
        assert_eq!(hits[0].text("title"), Some("NCF 2023 Hindi Manual"));
        assert_eq!(hits[1].text("title"), Some("NCF Hindi Teacher Guide"));
    }

    #[test]
    fn test_case_insensitive() {
        let records = manuals();
        let upper = rank(&records, "HINDI", TITLE, 0.4);
        let lower = rank(&records, "hindi", TITLE, 0.4);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_query_whitespace_insignificant() {
        let records = manuals();
        let padded = rank(&records, "  hindi ", TITLE, 0.4);
        let plain = rank(&records, "hindi", TITLE, 0.4);
        assert_eq!(padded, plain);
    }

    #[test]
    fn test_threshold_monotonicity() {
        let records = manuals();
        let loose = rank(&records, "hindi manual", TITLE, 0.2);
        let mid = rank(&records, "hindi manual", TITLE, 0.5);
        let tight = rank(&records, "hindi manual", TITLE, 0.8);

        let contains = |outer: &[RankedMatch], inner: &[RankedMatch]| {
            inner
                .iter()
                .all(|m| outer.iter().any(|o| o.index == m.index))
        };
        assert!(loose.len() >= mid.len() && mid.len() >= tight.len());
        assert!(contains(&loose, &mid));
        assert!(contains(&mid, &tight));
    }

    #[test]
    fn test_no_text_fields_never_match() {
        let records = vec![
            Record::new().with("file_size", 12_i64).with("is_indexed", true),
            Record::new().with("title", "hindi"),
        ];
        // Even at threshold 0.0 the text-free record is excluded
        let hits = filter(&records, "hindi", TITLE, 0.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text("title"), Some("hindi"));
    }

    #[test]
    fn test_stability_under_ties() {
        let records = vec![
            Record::new().with("title", "Hindi Manual A"),
            Record::new().with("title", "Hindi Manual B"),
            Record::new().with("title", "Hindi Manual C"),
        ];
        // Identical titles up to the suffix produce identical scores
        let matches = rank(&records, "hindi manual", TITLE, 0.4);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 1);
        assert_eq!(matches[2].index, 2);
        assert_eq!(matches[0].score, matches[1].score);
        assert_eq!(matches[1].score, matches[2].score);
    }

    #[test]
    fn test_unicode_indic_query() {
        let records = vec![
            Record::new().with("title", "हिंदी प्रशिक्षण मैनुअल"),
            Record::new().with("title", "Science Manual English"),
        ];
        let hits = filter(&records, "हिंदी", TITLE, 0.4);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text("title"), Some("हिंदी प्रशिक्षण मैनुअल"));
    }

    #[test]
    fn test_multi_field_max_scoring() {
        let records = vec![
            Record::new()
                .with("title", "Maths Manual")
                .with("detected_language", "Hindi"),
            Record::new().with("title", "Telugu Manual"),
        ];
        let fields = ["title", "detected_language"];
        let hits = filter(&records, "hindi", &fields, 0.4);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text("title"), Some("Maths Manual"));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let records = manuals();
        let before = records.clone();
        let _ = rank(&records, "hindi", TITLE, 0.4);
        assert_eq!(records, before);
    }

    #[test]
    fn test_threshold_clamped() {
        let records = manuals();
        assert_eq!(rank(&records, "hindi", TITLE, -3.0), rank(&records, "hindi", TITLE, 0.0));
        assert!(rank(&records, "hindi", TITLE, 7.5).is_empty());
        assert_eq!(
            rank(&records, "hindi", TITLE, f64::NAN).len(),
            rank(&records, "hindi", TITLE, 0.0).len()
        );
    }

    #[test]
    fn test_empty_records() {
        let records: Vec<Record> = Vec::new();
        assert!(filter(&records, "hindi", TITLE, 0.4).is_empty());
        assert!(filter(&records, "", TITLE, 0.4).is_empty());
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        // Build an input large enough to take the parallel path, with the
        // matching records scattered through it
        let mut records: Vec<Record> = (0..240)
            .map(|i| Record::new().with("title", format!("Science module {i}")))
            .collect();
        records[7] = Record::new().with("title", "Hindi Manual");
        records[130] = Record::new().with("title", "NCF Hindi Guide");
        records[239] = Record::new().with("title", "Hindi Manual");

        let matches = rank(&records, "hindi", &["title"], 0.4);
        let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
        // The two identical titles tie and keep input order; the longer
        // title scores lower and sorts after them
        assert_eq!(indices, vec![7, 239, 130]);

        // Scores agree exactly with scoring each record on its own,
        // which always takes the sequential path
        for m in &matches {
            let single = std::slice::from_ref(&records[m.index]);
            let seq = rank(single, "hindi", &["title"], 0.4);
            assert_eq!(seq.len(), 1);
            assert_eq!(seq[0].score, m.score);
        }
    }

    #[test]
    fn test_rank_with_applies_limit() {
        use crate::engine::options::FilterOptions;

        let records = manuals();
        let options = FilterOptions::new(vec!["title".to_string()], 0.4)
            .unwrap()
            .with_limit(1);
        let matches = rank_with(&records, "hindi", &options);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 0);

        let hits = filter_with(&records, "hindi", &options);
        assert_eq!(hits.len(), 1);
    }
}
