//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::AnalysisOutcome;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single outcome as JSON
    pub fn report(&self, outcome: &AnalysisOutcome) -> String {
        if self.pretty {
            serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(outcome).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Report multiple outcomes as JSON array
    pub fn report_many(&self, outcomes: &[AnalysisOutcome]) -> String {
        if self.pretty {
            serde_json::to_string_pretty(outcomes).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(outcomes).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Report with summary
    pub fn report_with_summary(
        &self,
        outcomes: &[AnalysisOutcome],
        stats: &AggregateStats,
    ) -> String {
        let output = JsonOutput {
            results: outcomes,
            summary: JsonSummary {
                urls_analyzed: stats.urls_analyzed,
                fetch_failures: stats.fetch_failures,
                average_score: stats.average_score.map(|s| s.value),
                average_grade: stats.average_score.map(|s| s.grade.to_string()),
                total_suggestions: stats.total_suggestions,
            },
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [AnalysisOutcome],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    urls_analyzed: usize,
    fetch_failures: usize,
    average_score: Option<u8>,
    average_grade: Option<String>,
    total_suggestions: usize,
}
