//! Deterministic decision core for exam-analysis reports: topic-to-strategy matching,
//! mistake-pattern lookup, performance-tier classification, and diversified book
//! recommendation over embedded, immutable catalogs.
//!
//! The crate is pure and synchronous. Every operation is a total function of its
//! inputs plus the embedded catalogs; the same inputs always produce the same output,
//! and expected absence (no matching record, no graded samples) is modeled with
//! `Option`/empty collections rather than errors.
//!
//! ```
//! use study_kernel_core::{match_topic, TopicQuery};
//!
//! let mut query = TopicQuery::new("공통수학2 > 도형의 방정식 > 원의 방정식");
//! query.grade = Some("고1".to_string());
//!
//! if let Some(found) = match_topic(&query) {
//!     assert_eq!(found.record.unit, "원의 방정식");
//!     assert!(!found.record.strategies.is_empty());
//! }
//! ```

pub mod catalog;
pub mod classifier;
pub mod matcher;
pub mod patterns;
pub mod recommender;
pub mod types;

use thiserror::Error;

pub use catalog::{books_for_tier, curriculum, mistakes, validate_catalogs};
pub use classifier::classify;
pub use matcher::{best_match, extract_semester, TopicMatch, TopicQuery};
pub use patterns::find_patterns;
pub use recommender::{recommend, DEFAULT_RECOMMENDATION_COUNT};
pub use types::{
    BookRecord, CurriculumRecord, DifficultyBucket, LegacyLevel, MistakeEntry, MistakeRecord,
    PerformanceSample, RevisedLevel, Semester, Tier, TierResult, TOPIC_SEPARATOR,
};

/// Errors surfaced by the decision core. Lookup misses are not errors; only broken
/// catalog invariants are.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Find the curriculum strategy best matching a topic query, over the embedded catalog.
#[must_use]
pub fn match_topic(query: &TopicQuery) -> Option<TopicMatch<'static>> {
    matcher::best_match(catalog::curriculum(), query)
}

/// Collect every embedded mistake record related to a topic.
#[must_use]
pub fn find_mistake_patterns(topic: &str) -> Vec<&'static MistakeRecord> {
    patterns::find_patterns(catalog::mistakes(), topic)
}

/// Classify graded question outcomes into a performance tier.
#[must_use]
pub fn classify_performance(samples: &[PerformanceSample]) -> TierResult {
    classifier::classify(samples)
}

/// Recommend up to `count` books from the embedded catalog for a tier, honoring the
/// preferred categories a [`TierResult`] carries.
#[must_use]
pub fn recommend_books(
    tier: Tier,
    count: usize,
    preferred_categories: &[String],
) -> Vec<BookRecord> {
    recommender::recommend(catalog::books_for_tier(tier), count, preferred_categories)
}
