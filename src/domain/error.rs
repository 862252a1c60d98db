//! Error types for metric lookups and dataset validation

use crate::domain::types::Profile;

/// Invalid-argument conditions raised by metric lookups
///
/// Local and non-fatal: renderers apply a fallback instead of propagating.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("Unknown profile identifier: {0:?}")]
    UnknownProfile(String),

    #[error("Effort level {0} is outside 1-5")]
    EffortOutOfRange(i64),

    #[error("Stage {index} out of range for {profile} journey ({len} stages)")]
    StageOutOfRange { profile: Profile, index: usize, len: usize },

    #[error("No journey for profile {0}")]
    MissingJourney(Profile),
}

/// Authoring mistakes in the fixture data, found once at load time
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("No journey for profile {0}")]
    MissingJourney(Profile),

    #[error("More than one journey for profile {0}")]
    DuplicateJourney(Profile),

    #[error("Journey for {0} has no timeline stages")]
    EmptyTimeline(Profile),

    #[error("Journey for {0} has no path stages")]
    EmptyPath(Profile),

    #[error("Journey for {profile}: total distance {total} is below direct distance {direct}")]
    DistanceInverted { profile: Profile, total: u32, direct: u32 },

    #[error("Journey for {profile}: elapsed time decreases at stage {index}")]
    NonMonotonicTimeline { profile: Profile, index: usize },

    #[error("Journey for {profile}: timeline has {found} stages, expected {expected}")]
    TimelineLength { profile: Profile, found: usize, expected: usize },

    #[error("Journey for {profile}: stage {index} has effort {level}, outside 1-5")]
    EffortOutOfRange { profile: Profile, index: usize, level: u32 },

    #[error("Outage record {month}: stored total {stored} != computed {computed}")]
    OutageTotalMismatch { month: String, stored: u32, computed: u32 },

    #[error("Effort legend is not the ordered levels 1-5")]
    LegendOrder,
}
