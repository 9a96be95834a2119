//! Criteria about disclosed data handling practices

use super::CriterionRule;
use crate::Criterion;
use once_cell::sync::Lazy;
use regex::Regex;

static DATA_COLLECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)data\s+collection|data\s+sharing").unwrap());

static DATA_SECURITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)data\s+security|secure\s+handling").unwrap());

static DATA_RETENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)data\s+retention|data\s+deletion").unwrap());

/// The policy discloses what data is collected or shared.
pub struct DataCollectionRule;

impl CriterionRule for DataCollectionRule {
    fn criterion(&self) -> Criterion {
        Criterion::DataCollectionDisclosure
    }

    fn evaluate(&self, body: &str) -> bool {
        DATA_COLLECTION.is_match(body)
    }
}

/// The policy states how data is secured.
pub struct DataSecurityRule;

impl CriterionRule for DataSecurityRule {
    fn criterion(&self) -> Criterion {
        Criterion::DataSecurity
    }

    fn evaluate(&self, body: &str) -> bool {
        DATA_SECURITY.is_match(body)
    }
}

/// The policy states retention or deletion practices.
pub struct DataRetentionRule;

impl CriterionRule for DataRetentionRule {
    fn criterion(&self) -> Criterion {
        Criterion::DataRetentionDeletion
    }

    fn evaluate(&self, body: &str) -> bool {
        DATA_RETENTION.is_match(body)
    }
}
