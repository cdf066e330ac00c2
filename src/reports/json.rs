//! JSON format report generation

use serde_json::{Map, Value, json};

use super::{AnalysisSummary, ReportGenerator};
use crate::error::CircularImportError;

/// Structured report: `root`, `stats`, `cycles` and the per-file errors
///
/// Every cycle is listed regardless of `--max-cycles`. Verbose mode adds
/// the discovery errors, resolution warnings and per-module edges.
pub struct JsonReportGenerator {
    verbose: bool,
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl JsonReportGenerator {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, summary: &AnalysisSummary) -> Result<String, CircularImportError> {
        let mut report = json!({
            "root": summary.root.display().to_string(),
            "stats": summary.stats,
            "cycles": summary.cycles,
            "parse_errors": summary.parse_errors,
        });

        if self.verbose
            && let Some(object) = report.as_object_mut()
        {
            object.insert(
                "discovery_errors".to_string(),
                serde_json::to_value(&summary.discovery_errors)?,
            );
            object.insert(
                "resolution_warnings".to_string(),
                serde_json::to_value(&summary.resolution_warnings)?,
            );

            let mut modules = Map::new();
            for module in &summary.modules {
                modules.insert(
                    module.name.clone(),
                    json!({
                        "path": module.path.display().to_string(),
                        "dependencies": module.dependencies,
                        "imported_by": module.imported_by,
                    }),
                );
            }
            object.insert("modules".to_string(), Value::Object(modules));
        }

        serde_json::to_string_pretty(&report).map_err(CircularImportError::Json)
    }
}
