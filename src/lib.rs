//! Policheck: Privacy Policy Quality Analyzer
//!
//! This library fetches a web page purported to be a privacy policy and
//! scores it against nine textual criteria, providing a pass/fail breakdown
//! and actionable suggestions for improvement.

pub mod analyzer;
pub mod config;
pub mod fetcher;
pub mod reporter;

use serde::Serialize;

/// Points awarded per satisfied criterion.
pub const POINTS_PER_CRITERION: u8 = 10;

/// Maximum achievable score (nine criteria, 10 points each).
pub const MAX_SCORE: u8 = 90;

/// The nine criteria a privacy policy is evaluated against.
///
/// Order is significant for display; scoring weighs every criterion equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criterion {
    /// The page was reachable at the supplied URL
    ValidUrl,
    /// Names the developer, company, or entity behind the policy
    IncludesEntityName,
    /// Labeled as a privacy policy
    LabeledPrivacyPolicy,
    /// Offers a way to contact the entity
    IncludesContact,
    /// The document is readable text
    Readable,
    /// The document is not user-editable
    NonEditable,
    /// Discloses data collection or data sharing
    DataCollectionDisclosure,
    /// States how data is secured
    DataSecurity,
    /// States data retention or deletion practices
    DataRetentionDeletion,
}

impl Criterion {
    /// All criteria in display order.
    pub const ALL: [Criterion; 9] = [
        Criterion::ValidUrl,
        Criterion::IncludesEntityName,
        Criterion::LabeledPrivacyPolicy,
        Criterion::IncludesContact,
        Criterion::Readable,
        Criterion::NonEditable,
        Criterion::DataCollectionDisclosure,
        Criterion::DataSecurity,
        Criterion::DataRetentionDeletion,
    ];

    /// Human-readable label, used in reports and suggestion text.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::ValidUrl => "valid url",
            Criterion::IncludesEntityName => "includes entity name",
            Criterion::LabeledPrivacyPolicy => "labeled privacy policy",
            Criterion::IncludesContact => "includes contact",
            Criterion::Readable => "readable",
            Criterion::NonEditable => "non editable",
            Criterion::DataCollectionDisclosure => "data collection disclosure",
            Criterion::DataSecurity => "data security",
            Criterion::DataRetentionDeletion => "data retention deletion",
        }
    }

    /// True for the placeholder criteria that every successfully fetched
    /// document satisfies regardless of content.
    pub fn is_constant(&self) -> bool {
        matches!(
            self,
            Criterion::ValidUrl | Criterion::Readable | Criterion::NonEditable
        )
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::ValidUrl => write!(f, "valid-url"),
            Criterion::IncludesEntityName => write!(f, "includes-entity-name"),
            Criterion::LabeledPrivacyPolicy => write!(f, "labeled-privacy-policy"),
            Criterion::IncludesContact => write!(f, "includes-contact"),
            Criterion::Readable => write!(f, "readable"),
            Criterion::NonEditable => write!(f, "non-editable"),
            Criterion::DataCollectionDisclosure => write!(f, "data-collection-disclosure"),
            Criterion::DataSecurity => write!(f, "data-security"),
            Criterion::DataRetentionDeletion => write!(f, "data-retention-deletion"),
        }
    }
}

/// Pass/fail outcome for each criterion. Fields are independent; there is
/// no cross-field invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaReport {
    pub valid_url: bool,
    pub includes_entity_name: bool,
    pub labeled_privacy_policy: bool,
    pub includes_contact: bool,
    pub readable: bool,
    pub non_editable: bool,
    pub data_collection_disclosure: bool,
    pub data_security: bool,
    pub data_retention_deletion: bool,
}

impl CriteriaReport {
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::ValidUrl => self.valid_url,
            Criterion::IncludesEntityName => self.includes_entity_name,
            Criterion::LabeledPrivacyPolicy => self.labeled_privacy_policy,
            Criterion::IncludesContact => self.includes_contact,
            Criterion::Readable => self.readable,
            Criterion::NonEditable => self.non_editable,
            Criterion::DataCollectionDisclosure => self.data_collection_disclosure,
            Criterion::DataSecurity => self.data_security,
            Criterion::DataRetentionDeletion => self.data_retention_deletion,
        }
    }

    pub fn set(&mut self, criterion: Criterion, passed: bool) {
        match criterion {
            Criterion::ValidUrl => self.valid_url = passed,
            Criterion::IncludesEntityName => self.includes_entity_name = passed,
            Criterion::LabeledPrivacyPolicy => self.labeled_privacy_policy = passed,
            Criterion::IncludesContact => self.includes_contact = passed,
            Criterion::Readable => self.readable = passed,
            Criterion::NonEditable => self.non_editable = passed,
            Criterion::DataCollectionDisclosure => self.data_collection_disclosure = passed,
            Criterion::DataSecurity => self.data_security = passed,
            Criterion::DataRetentionDeletion => self.data_retention_deletion = passed,
        }
    }

    /// Criterion/outcome pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Number of satisfied criteria.
    pub fn passed_count(&self) -> usize {
        self.entries().filter(|(_, passed)| *passed).count()
    }

    /// Failed criteria in display order.
    pub fn failed(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.entries()
            .filter(|(_, passed)| !passed)
            .map(|(criterion, _)| criterion)
    }
}

/// Quality score with grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Numeric score (0-90)
    pub value: u8,
    /// Letter grade (A-F)
    pub grade: Grade,
}

impl Score {
    pub fn new(value: u8) -> Self {
        let grade = Grade::from_points(value);
        Self { value, grade }
    }
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade for a point total on the 90-point scale.
    pub fn from_points(points: u8) -> Self {
        let percent = (points.min(MAX_SCORE) as u16 * 100) / MAX_SCORE as u16;
        match percent {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Successful analysis of a fetched policy document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAnalysis {
    success: bool,
    /// URL the document was fetched from (after redirects)
    pub url: String,
    /// Page title, when the document has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Pass/fail breakdown per criterion
    pub criteria: CriteriaReport,
    /// One suggestion per failed criterion
    pub suggestions: Vec<String>,
    /// Overall score (0-90)
    pub score: Score,
}

impl PolicyAnalysis {
    pub fn new(
        url: String,
        title: Option<String>,
        criteria: CriteriaReport,
        suggestions: Vec<String>,
        score: Score,
    ) -> Self {
        Self {
            success: true,
            url,
            title,
            criteria,
            suggestions,
            score,
        }
    }
}

/// Failed analysis: the document could not be retrieved
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFailure {
    success: bool,
    /// URL the fetch was attempted against
    pub url: String,
    /// Human-readable description of what went wrong
    pub error: String,
}

impl AnalysisFailure {
    pub fn new(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            url: url.into(),
            error: error.into(),
        }
    }
}

/// Outcome of analyzing one URL. Exactly one shape is populated per
/// invocation; serialization carries a `success` discriminant.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Success(PolicyAnalysis),
    Failure(AnalysisFailure),
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }

    pub fn url(&self) -> &str {
        match self {
            AnalysisOutcome::Success(analysis) => &analysis.url,
            AnalysisOutcome::Failure(failure) => &failure.url,
        }
    }

    pub fn score(&self) -> Option<Score> {
        match self {
            AnalysisOutcome::Success(analysis) => Some(analysis.score),
            AnalysisOutcome::Failure(_) => None,
        }
    }

    pub fn as_success(&self) -> Option<&PolicyAnalysis> {
        match self {
            AnalysisOutcome::Success(analysis) => Some(analysis),
            AnalysisOutcome::Failure(_) => None,
        }
    }

    pub fn as_failure(&self) -> Option<&AnalysisFailure> {
        match self {
            AnalysisOutcome::Success(_) => None,
            AnalysisOutcome::Failure(failure) => Some(failure),
        }
    }
}

/// Public API: analyze a single URL with default transport settings. Used by
/// programmatic consumers that don't need a reusable engine.
pub fn analyze_url(url: &str) -> AnalysisOutcome {
    match crate::analyzer::AnalysisEngine::new() {
        Ok(engine) => engine.analyze(url),
        Err(e) => AnalysisOutcome::Failure(AnalysisFailure::new(url, e.to_string())),
    }
}
