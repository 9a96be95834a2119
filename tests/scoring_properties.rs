//! Property tests for the scoring laws.

use policheck::analyzer::ScoreCalculator;
use policheck::{CriteriaReport, Criterion, MAX_SCORE, POINTS_PER_CRITERION};
use proptest::prelude::*;

fn report_from(flags: [bool; 9]) -> CriteriaReport {
    let mut criteria = CriteriaReport::default();
    for (criterion, flag) in Criterion::ALL.into_iter().zip(flags) {
        criteria.set(criterion, flag);
    }
    criteria
}

proptest! {
    #[test]
    fn score_is_ten_points_per_pass(flags in any::<[bool; 9]>()) {
        let criteria = report_from(flags);
        let score = ScoreCalculator::calculate(&criteria);

        prop_assert_eq!(
            score.value as usize,
            criteria.passed_count() * POINTS_PER_CRITERION as usize
        );
        prop_assert_eq!(score.value % POINTS_PER_CRITERION, 0);
        prop_assert!(score.value <= MAX_SCORE);
    }

    #[test]
    fn suggestions_biject_with_failed_criteria(flags in any::<[bool; 9]>()) {
        let criteria = report_from(flags);
        let suggestions = ScoreCalculator::suggestions(&criteria);
        let score = ScoreCalculator::calculate(&criteria);

        prop_assert_eq!(
            suggestions.len(),
            Criterion::ALL.len() - (score.value / POINTS_PER_CRITERION) as usize
        );

        let failed: Vec<Criterion> = criteria.failed().collect();
        prop_assert_eq!(suggestions.len(), failed.len());
        for (suggestion, criterion) in suggestions.iter().zip(&failed) {
            prop_assert_eq!(
                suggestion,
                &format!("Missing or inadequate: {}", criterion.label())
            );
        }
    }

    #[test]
    fn scoring_is_deterministic(flags in any::<[bool; 9]>()) {
        let criteria = report_from(flags);
        prop_assert_eq!(
            ScoreCalculator::calculate(&criteria),
            ScoreCalculator::calculate(&criteria)
        );
        prop_assert_eq!(
            ScoreCalculator::suggestions(&criteria),
            ScoreCalculator::suggestions(&criteria)
        );
    }
}
