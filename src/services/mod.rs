//! Services - selection state and derived metrics
//!
//! - `selector` - Active profile with change notification
//! - `metrics` - Deltas, effort colors, distance and outage accounting

pub mod metrics;
pub mod selector;

// Re-export commonly used types
pub use metrics::{
    delta, edge_color, effort_color, elapsed_at, extra_distance, outage_total, path_segments,
    stage_tooltip, time_impact, Segment, TimeImpact, Tooltip, EFFORT_PALETTE,
};
pub use selector::ProfileSelector;
