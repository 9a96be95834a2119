//! Score calculation for policy quality

use crate::{CriteriaReport, Grade, Score, POINTS_PER_CRITERION};

/// Prefix for every improvement suggestion.
const SUGGESTION_PREFIX: &str = "Missing or inadequate";

/// Calculator for policy quality scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Calculate the overall score: 10 points per satisfied criterion.
    pub fn calculate(criteria: &CriteriaReport) -> Score {
        Score::new(criteria.passed_count() as u8 * POINTS_PER_CRITERION)
    }

    /// One suggestion per failed criterion, in display order.
    pub fn suggestions(criteria: &CriteriaReport) -> Vec<String> {
        criteria
            .failed()
            .map(|criterion| format!("{}: {}", SUGGESTION_PREFIX, criterion.label()))
            .collect()
    }

    /// Get a description of the grade
    pub fn grade_description(grade: Grade) -> &'static str {
        match grade {
            Grade::A => "Excellent - The policy addresses every criterion checked",
            Grade::B => "Good - The policy covers most criteria but has a gap",
            Grade::C => "Fair - The policy covers the basics but leaves gaps",
            Grade::D => "Poor - The policy is missing several disclosures",
            Grade::F => "Failing - The page shows little sign of being a privacy policy",
        }
    }
}
