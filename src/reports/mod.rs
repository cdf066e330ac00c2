//! Report generation for the analysis result
//!
//! - summary: `AnalysisSummary`, the statistics and error lists of one run
//! - human: console report with the cycle chains
//! - json: structured document for programmatic use

pub mod human;
pub mod json;
mod summary;

use crate::error::CircularImportError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Render a finished analysis
    fn generate_report(&self, summary: &AnalysisSummary) -> Result<String, CircularImportError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use summary::{AnalysisStats, AnalysisSummary, ModuleDetail};
