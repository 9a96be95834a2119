//! Analysis engine - fetches a document and runs every criterion rule

use crate::fetcher::{FetchError, FetchSettings, Fetcher, PolicyDocument};
use crate::{AnalysisFailure, AnalysisOutcome, CriteriaReport, PolicyAnalysis, Score};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::rules::all_rules;
use super::ScoreCalculator;

// Selector literal is a compile-time constant; parse cannot fail.
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// Orchestrates fetch and evaluation. Each analysis is a single outbound
/// GET followed by pure text matching; analyses share no mutable state and
/// may run concurrently for different URLs.
pub struct AnalysisEngine {
    fetcher: Fetcher,
}

impl AnalysisEngine {
    /// Create an engine with default transport settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_settings(&FetchSettings::default())
    }

    /// Create an engine with explicit transport settings.
    pub fn with_settings(settings: &FetchSettings) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: Fetcher::new(settings)?,
        })
    }

    /// Analyze the document at `url`. Fetch errors are never propagated;
    /// they become the failure-shaped outcome with the error's display text.
    pub fn analyze(&self, url: &str) -> AnalysisOutcome {
        match self.fetcher.fetch(url) {
            Ok(document) => AnalysisOutcome::Success(Self::evaluate(&document)),
            Err(e) => AnalysisOutcome::Failure(AnalysisFailure::new(url, e.to_string())),
        }
    }

    /// Evaluate a fetched document. Pure and deterministic: identical bodies
    /// always produce identical criteria, score, and suggestions.
    pub fn evaluate(document: &PolicyDocument) -> PolicyAnalysis {
        // The DOM parse feeds presentation metadata only; criteria match
        // over the raw body, so tags and attributes count.
        let dom = Html::parse_document(&document.body);
        let title = dom
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let mut criteria = CriteriaReport::default();
        for rule in all_rules() {
            criteria.set(rule.criterion(), rule.evaluate(&document.body));
        }

        let score = ScoreCalculator::calculate(&criteria);
        let suggestions = ScoreCalculator::suggestions(&criteria);

        PolicyAnalysis::new(document.url.clone(), title, criteria, suggestions, score)
    }

    /// Aggregate statistics across several outcomes.
    pub fn aggregate_stats(outcomes: &[AnalysisOutcome]) -> AggregateStats {
        let scores: Vec<u32> = outcomes
            .iter()
            .filter_map(|o| o.score().map(|s| s.value as u32))
            .collect();
        let average_score = if scores.is_empty() {
            None
        } else {
            Some(Score::new(
                (scores.iter().sum::<u32>() / scores.len() as u32) as u8,
            ))
        };

        AggregateStats {
            urls_analyzed: outcomes.len(),
            fetch_failures: outcomes.iter().filter(|o| !o.is_success()).count(),
            average_score,
            total_suggestions: outcomes
                .iter()
                .filter_map(|o| o.as_success())
                .map(|a| a.suggestions.len())
                .sum(),
        }
    }
}

/// Aggregate statistics for multi-URL runs
#[derive(Debug, Clone)]
pub struct AggregateStats {
    pub urls_analyzed: usize,
    pub fetch_failures: usize,
    /// Average over successful analyses; None when every fetch failed
    pub average_score: Option<Score>,
    pub total_suggestions: usize,
}
