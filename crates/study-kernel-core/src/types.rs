use serde::{Deserialize, Serialize};

use crate::KernelError;

/// Literal separator between topic path segments, most-general segment first.
pub const TOPIC_SEPARATOR: &str = " > ";

/// Upper bound on strategy texts per curriculum record.
pub const MAX_STRATEGIES: usize = 4;

/// Split a topic path into its segments. Input without the separator is a
/// single-segment topic, never an error.
#[must_use]
pub fn topic_segments(topic: &str) -> Vec<&str> {
    topic.split(TOPIC_SEPARATOR).map(str::trim).filter(|segment| !segment.is_empty()).collect()
}

/// Coarse performance band assigned to a learner from accuracy statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Mid => 2,
            Self::High => 3,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "mid" => Some(Self::Mid),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// School-year half. Curriculum records carry this instead of a free string so the
/// matcher's semester filter is an exact enum comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "1학기",
            Self::Second => "2학기",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1학기" => Some(Self::First),
            "2학기" => Some(Self::Second),
            _ => None,
        }
    }
}

/// Four-level difficulty tagging used by the current grader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RevisedLevel {
    Foundational,
    Pattern,
    Reasoning,
    Creative,
}

impl RevisedLevel {
    /// Legacy bucket consulted when this bucket has no graded samples.
    /// Creative has no legacy counterpart.
    #[must_use]
    pub fn legacy_fallback(self) -> Option<LegacyLevel> {
        match self {
            Self::Foundational => Some(LegacyLevel::Low),
            Self::Pattern => Some(LegacyLevel::Medium),
            Self::Reasoning => Some(LegacyLevel::High),
            Self::Creative => None,
        }
    }
}

/// Three-level difficulty tagging still present in stored data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LegacyLevel {
    Low,
    Medium,
    High,
}

/// Difficulty bucket of a graded question, with an explicit scheme discriminant so the
/// classifier's fallback logic is a single deterministic switch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(tag = "scheme", content = "level", rename_all = "snake_case")]
pub enum DifficultyBucket {
    Revised(RevisedLevel),
    Legacy(LegacyLevel),
}

impl DifficultyBucket {
    /// Buckets counted toward the hard-problem share in the top-tier rule.
    #[must_use]
    pub fn is_hard(self) -> bool {
        matches!(
            self,
            Self::Revised(RevisedLevel::Reasoning | RevisedLevel::Creative)
                | Self::Legacy(LegacyLevel::High)
        )
    }
}

/// One graded question outcome. `correct: None` means the question was not graded and
/// carries no accuracy signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub struct PerformanceSample {
    pub bucket: DifficultyBucket,
    pub correct: Option<bool>,
}

/// Classifier output rendered by the report layer as a recommendation summary.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct TierResult {
    pub tier: Tier,
    pub confidence: u8,
    pub reason: String,
    pub weak_points: Vec<String>,
    pub recommended_categories: Vec<String>,
}

/// One knowledge-base entry binding a keyword set to pedagogical strategy text for a
/// specific grade/semester/unit.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct CurriculumRecord {
    pub grade: String,
    pub semester: Semester,
    pub unit: String,
    pub keywords: Vec<String>,
    pub strategies: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CurriculumRecord {
    /// Validate one curriculum record against catalog invariants.
    ///
    /// # Errors
    /// Returns [`KernelError::Validation`] when the keyword set is empty, a keyword or
    /// strategy is blank, or the strategy list exceeds [`MAX_STRATEGIES`].
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.grade.trim().is_empty() {
            return Err(KernelError::Validation("grade MUST be non-empty".to_string()));
        }

        if self.unit.trim().is_empty() {
            return Err(KernelError::Validation("unit MUST be non-empty".to_string()));
        }

        if self.keywords.is_empty() {
            return Err(KernelError::Validation(format!(
                "curriculum record `{}` MUST carry at least one keyword",
                self.unit
            )));
        }

        if self.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            return Err(KernelError::Validation(format!(
                "curriculum record `{}` carries a blank keyword",
                self.unit
            )));
        }

        if self.strategies.len() > MAX_STRATEGIES {
            return Err(KernelError::Validation(format!(
                "curriculum record `{}` exceeds {MAX_STRATEGIES} strategies",
                self.unit
            )));
        }

        if self.strategies.iter().any(|strategy| strategy.trim().is_empty()) {
            return Err(KernelError::Validation(format!(
                "curriculum record `{}` carries a blank strategy",
                self.unit
            )));
        }

        Ok(())
    }
}

/// One recommendable study book. Catalogs are partitioned by tier and name-unique
/// within a tier.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct BookRecord {
    pub name: String,
    pub publisher: String,
    pub category: String,
    pub difficulty: u8,
    pub audience_note: String,
}

impl BookRecord {
    /// Validate one book record against catalog invariants.
    ///
    /// # Errors
    /// Returns [`KernelError::Validation`] when a naming field is blank or the
    /// difficulty lies outside 1..=5.
    pub fn validate(&self) -> Result<(), KernelError> {
        for (field, value) in
            [("name", &self.name), ("publisher", &self.publisher), ("category", &self.category)]
        {
            if value.trim().is_empty() {
                return Err(KernelError::Validation(format!("book {field} MUST be non-empty")));
            }
        }

        if !(1..=5).contains(&self.difficulty) {
            return Err(KernelError::Validation(format!(
                "book `{}` difficulty MUST be in 1..=5",
                self.name
            )));
        }

        Ok(())
    }
}

/// One common-mistake pattern inside a unit.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct MistakeEntry {
    pub pattern: String,
    pub keywords: Vec<String>,
    pub remedy: String,
}

/// Common-mistake catalog entry for one unit.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct MistakeRecord {
    pub unit: String,
    pub entries: Vec<MistakeEntry>,
}

impl MistakeRecord {
    /// Validate one mistake record against catalog invariants.
    ///
    /// # Errors
    /// Returns [`KernelError::Validation`] when the unit name is blank or an entry
    /// carries no keywords.
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.unit.trim().is_empty() {
            return Err(KernelError::Validation("mistake unit MUST be non-empty".to_string()));
        }

        for entry in &self.entries {
            if entry.keywords.is_empty() {
                return Err(KernelError::Validation(format!(
                    "mistake entry `{}` MUST carry at least one keyword",
                    entry.pattern
                )));
            }
        }

        Ok(())
    }
}
