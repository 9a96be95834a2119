//! Criterion rules for policy evaluation

pub mod data_practices;
pub mod identity;
pub mod presentation;

pub use data_practices::{DataCollectionRule, DataRetentionRule, DataSecurityRule};
pub use identity::{ContactRule, EntityNameRule, PolicyLabelRule};
pub use presentation::{NonEditableRule, ReadableRule, ValidUrlRule};

use crate::Criterion;

/// Trait for criterion rules
pub trait CriterionRule {
    /// The criterion this rule evaluates
    fn criterion(&self) -> Criterion;

    /// Whether the document satisfies the criterion. Matching runs over the
    /// raw response body, markup and attributes included.
    fn evaluate(&self, body: &str) -> bool;
}

/// All rules in display order, one per criterion.
pub fn all_rules() -> Vec<Box<dyn CriterionRule>> {
    vec![
        Box::new(ValidUrlRule),
        Box::new(EntityNameRule),
        Box::new(PolicyLabelRule),
        Box::new(ContactRule),
        Box::new(ReadableRule),
        Box::new(NonEditableRule),
        Box::new(DataCollectionRule),
        Box::new(DataSecurityRule),
        Box::new(DataRetentionRule),
    ]
}
