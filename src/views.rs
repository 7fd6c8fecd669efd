//! Per-view field selectors and the shared threshold
//!
//! Each dashboard filters its record list over a fixed set of fields.
//! The selectors mirror the columns the backend serves for each list
//! endpoint, so adding a searchable column means extending the matching
//! preset here.

/// Similarity cutoff shared by all dashboard views.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Manuals view: uploaded PDF training manuals.
pub const MANUAL_FIELDS: &[&str] = &[
    "title",
    "filename",
    "detected_language",
    "adapted_summary",
    "extracted_text",
];

/// Modules view: training modules adapted per cluster.
pub const MODULE_FIELDS: &[&str] = &[
    "title",
    "adapted_content",
    "original_content",
    "language",
    "status",
];

/// Clusters view: school clusters and their context notes.
pub const CLUSTER_FIELDS: &[&str] = &[
    "name",
    "region_type",
    "language",
    "infrastructure_constraints",
    "key_issues",
    "grade_range",
];

/// Teacher contacts view.
pub const TEACHER_FIELDS: &[&str] = &["name", "phone_number"];
