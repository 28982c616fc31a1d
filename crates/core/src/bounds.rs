//! Named boundary constants for banding and bucketing.
//!
//! The numeric cut points were inherited from the upstream model tuning
//! and are kept verbatim for behavioral compatibility. Change them here,
//! never inline.

/// Attendance (%) at or above which class attendance counts as positive,
/// regardless of the sign the model reported.
pub const ATTENDANCE_OK_MIN: f64 = 80.0;

/// Attendance (%) below which the lead sentence switches to the
/// strongest wording.
pub const ATTENDANCE_VERY_LOW_MAX: f64 = 70.0;

// Weekly study-hours buckets: < LOW, LOW..MID, MID..HIGH, >= HIGH.
pub const STUDY_HOURS_LOW: f64 = 20.0;
pub const STUDY_HOURS_MID: f64 = 28.0;
pub const STUDY_HOURS_HIGH: f64 = 50.0;

// Nightly sleep-hours buckets: < LOW, LOW..=HIGH, > HIGH.
pub const SLEEP_HOURS_LOW: f64 = 6.0;
pub const SLEEP_HOURS_HIGH: f64 = 10.0;

// Performance score bands (0–100), lower edge inclusive.
pub const PERF_EXCELLENT_MIN: f64 = 90.0;
pub const PERF_GOOD_MIN: f64 = 70.0;
pub const PERF_APPROVED_MIN: f64 = 60.0;

// Dropout probability bands (0–1), lower edge inclusive.
pub const DROPOUT_HIGH_MIN: f64 = 0.7;
pub const DROPOUT_MEDIUM_MIN: f64 = 0.4;

/// Cap on factors surfaced to the render layer.
pub const MAX_FEATURES: usize = 3;

/// Cap on generated suggestions.
pub const MAX_SUGGESTIONS: usize = 8;

/// Below this many per-feature suggestions, a general-purpose bundle
/// is appended.
pub const TOPUP_MIN: usize = 2;

/// Below this many suggestions, the escalation (critical) or
/// consolidation (favorable) bundle is appended.
pub const BUNDLE_MIN: usize = 5;
