//! Domain models - the fixed route dataset and its types
//!
//! - `types` - `Profile`, `EffortLevel`, `Rgb`, `Position`, `Location`
//! - `journey` - `Stage`, `Journey`, `OutageRecord`, legend entries
//! - `dataset` - compiled-in fixture and load-time validation
//! - `content` - static text panels
//! - `error` - invalid-argument and authoring errors

pub mod content;
pub mod dataset;
pub mod error;
pub mod journey;
pub mod types;

// Re-export commonly used types at module level
pub use dataset::{dataset, Dataset};
pub use error::{DatasetError, MetricsError};
pub use journey::{Journey, OutageRecord, Stage};
pub use types::{EffortLevel, Location, Profile, Rgb};
