//! IO modules - output surfaces
//!
//! - `report` - Text/JSON summary report writer

pub mod report;

// Re-export commonly used types
pub use report::{write_report, Report};
