//! Placeholder criteria satisfied by every fetched document
//!
//! URL validity, readability, and non-editability are not computed from the
//! document; a completed fetch is taken as sufficient evidence for all
//! three. Each still contributes its 10 points to the score.

use super::CriterionRule;
use crate::Criterion;

/// A completed fetch implies the URL was reachable.
pub struct ValidUrlRule;

impl CriterionRule for ValidUrlRule {
    fn criterion(&self) -> Criterion {
        Criterion::ValidUrl
    }

    fn evaluate(&self, _body: &str) -> bool {
        true
    }
}

/// Fetched documents are assumed readable.
pub struct ReadableRule;

impl CriterionRule for ReadableRule {
    fn criterion(&self) -> Criterion {
        Criterion::Readable
    }

    fn evaluate(&self, _body: &str) -> bool {
        true
    }
}

/// Fetched documents are assumed non-editable.
pub struct NonEditableRule;

impl CriterionRule for NonEditableRule {
    fn criterion(&self) -> Criterion {
        Criterion::NonEditable
    }

    fn evaluate(&self, _body: &str) -> bool {
        true
    }
}
