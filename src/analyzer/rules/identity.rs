//! Criteria about who the policy belongs to and how to reach them

use super::CriterionRule;
use crate::Criterion;
use once_cell::sync::Lazy;
use regex::Regex;

// Pattern literals are compile-time constants; Regex::new cannot fail on them.
static ENTITY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)developer|company|entity").unwrap());

static POLICY_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)privacy\s+policy").unwrap());

static CONTACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)contact").unwrap());

/// The page names the developer, company, or entity the policy covers.
/// Presence detection only; no attempt to extract the actual name.
pub struct EntityNameRule;

impl CriterionRule for EntityNameRule {
    fn criterion(&self) -> Criterion {
        Criterion::IncludesEntityName
    }

    fn evaluate(&self, body: &str) -> bool {
        ENTITY_NAME.is_match(body)
    }
}

/// The page calls itself a privacy policy. Whitespace between the two words
/// is flexible so line-wrapped markup still counts.
pub struct PolicyLabelRule;

impl CriterionRule for PolicyLabelRule {
    fn criterion(&self) -> Criterion {
        Criterion::LabeledPrivacyPolicy
    }

    fn evaluate(&self, body: &str) -> bool {
        POLICY_LABEL.is_match(body)
    }
}

/// The page offers some way to contact the entity.
pub struct ContactRule;

impl CriterionRule for ContactRule {
    fn criterion(&self) -> Criterion {
        Criterion::IncludesContact
    }

    fn evaluate(&self, body: &str) -> bool {
        CONTACT.is_match(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_name_matches_any_alias() {
        let rule = EntityNameRule;
        assert!(rule.evaluate("the developer of this app"));
        assert!(rule.evaluate("Acme Company Ltd"));
        assert!(rule.evaluate("the responsible ENTITY"));
        assert!(!rule.evaluate("a page about nothing"));
    }

    #[test]
    fn policy_label_is_case_insensitive() {
        let rule = PolicyLabelRule;
        assert!(rule.evaluate("Our Privacy Policy"));
        assert!(rule.evaluate("PRIVACY POLICY"));
        assert!(!rule.evaluate("privacy statement"));
    }

    #[test]
    fn policy_label_tolerates_flexible_whitespace() {
        let rule = PolicyLabelRule;
        assert!(rule.evaluate("privacy  policy"));
        assert!(rule.evaluate("privacy\npolicy"));
        assert!(!rule.evaluate("privacy-policy"));
    }

    #[test]
    fn contact_matches_inside_larger_words_and_markup() {
        let rule = ContactRule;
        assert!(rule.evaluate("Contact us"));
        assert!(rule.evaluate(r#"<a href="/contact">reach out</a>"#));
        assert!(!rule.evaluate("no way to reach anyone"));
    }
}
