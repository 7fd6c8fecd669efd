//! Caller configuration for the filter engine
//!
//! The free functions in [`crate::engine::filter`] are permissive; they
//! clamp out-of-range thresholds rather than fail. `FilterOptions` is the
//! strict form for configuration fixed at startup: a view's field
//! selector, threshold, and result limit, validated on construction and
//! (de)serializable so views can load it from config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when validating filter options
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// Threshold outside the similarity scale
    #[error("threshold must be a finite number in [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    /// Field selector names no fields
    #[error("field selector must name at least one field")]
    EmptyFields,
}

/// Validated filter configuration for one view
///
/// # Example
///
/// ```
/// use setu_filter::engine::options::FilterOptions;
/// use setu_filter::views::{DEFAULT_THRESHOLD, MANUAL_FIELDS};
///
/// let options = FilterOptions::for_view(MANUAL_FIELDS, DEFAULT_THRESHOLD)
///     .unwrap()
///     .with_limit(50);
/// assert_eq!(options.fields.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Field names probed for every record, in evaluation order
    pub fields: Vec<String>,

    /// Similarity cutoff in [0.0, 1.0]
    pub threshold: f64,

    /// Maximum number of matches to return (None = unlimited)
    #[serde(default)]
    pub limit: Option<usize>,
}

impl FilterOptions {
    /// Create validated options.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::EmptyFields`] if `fields` is empty and
    /// [`OptionsError::InvalidThreshold`] if `threshold` is not a finite
    /// number in `[0.0, 1.0]`.
    pub fn new(fields: Vec<String>, threshold: f64) -> Result<Self, OptionsError> {
        if fields.is_empty() {
            return Err(OptionsError::EmptyFields);
        }
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(OptionsError::InvalidThreshold(threshold));
        }
        Ok(Self {
            fields,
            threshold,
            limit: None,
        })
    }

    /// Create options from a static view preset (see [`crate::views`]).
    ///
    /// # Errors
    ///
    /// Same validation as [`FilterOptions::new`].
    pub fn for_view(fields: &[&str], threshold: f64) -> Result<Self, OptionsError> {
        Self::new(fields.iter().map(|f| (*f).to_string()).collect(), threshold)
    }

    /// Builder: cap the number of returned matches
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
