//! Embedded knowledge base: curriculum strategies, mistake patterns, and tiered book
//! lists. All three are built once and never mutated; iteration order is the insertion
//! order of the data modules and is part of the crate's contract.

mod books;
mod curriculum;
mod mistakes;

use once_cell::sync::Lazy;

use crate::types::{BookRecord, CurriculumRecord, MistakeRecord, Tier};
use crate::KernelError;

static CURRICULUM: Lazy<Vec<CurriculumRecord>> = Lazy::new(curriculum::records);
static MISTAKES: Lazy<Vec<MistakeRecord>> = Lazy::new(mistakes::records);
static BOOKS_LOW: Lazy<Vec<BookRecord>> = Lazy::new(books::low_tier);
static BOOKS_MID: Lazy<Vec<BookRecord>> = Lazy::new(books::mid_tier);
static BOOKS_HIGH: Lazy<Vec<BookRecord>> = Lazy::new(books::high_tier);

/// The embedded curriculum strategy catalog, in match-priority order.
#[must_use]
pub fn curriculum() -> &'static [CurriculumRecord] {
    &CURRICULUM
}

/// The embedded common-mistake catalog.
#[must_use]
pub fn mistakes() -> &'static [MistakeRecord] {
    &MISTAKES
}

/// The embedded book catalog for one performance tier.
#[must_use]
pub fn books_for_tier(tier: Tier) -> &'static [BookRecord] {
    match tier {
        Tier::Low => &BOOKS_LOW,
        Tier::Mid => &BOOKS_MID,
        Tier::High => &BOOKS_HIGH,
    }
}

/// Validate every embedded record. Intended for startup checks and the data test
/// suite; the catalogs are static, so a failure here means a bad edit to the data
/// modules, not a runtime condition.
pub fn validate_catalogs() -> Result<(), KernelError> {
    for record in curriculum() {
        record.validate()?;
    }
    for record in mistakes() {
        record.validate()?;
    }
    for tier in [Tier::Low, Tier::Mid, Tier::High] {
        let catalog = books_for_tier(tier);
        for book in catalog {
            book.validate()?;
        }
        for (index, book) in catalog.iter().enumerate() {
            if catalog[..index].iter().any(|other| other.name == book.name) {
                return Err(KernelError::Validation(format!(
                    "duplicate book name `{}` in {} tier catalog",
                    book.name,
                    tier.as_str()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Semester;

    #[test]
    fn embedded_catalogs_pass_validation() {
        if let Err(err) = validate_catalogs() {
            panic!("embedded catalogs must validate: {err}");
        }
    }

    #[test]
    fn catalogs_are_populated() {
        assert!(curriculum().len() >= 40);
        assert!(mistakes().len() >= 12);
        for tier in [Tier::Low, Tier::Mid, Tier::High] {
            assert!(books_for_tier(tier).len() >= 8, "{} tier too small", tier.as_str());
        }
    }

    #[test]
    fn curriculum_covers_both_semesters_of_the_high_school_common_course() {
        let has = |tag: &str, semester: Semester| {
            curriculum()
                .iter()
                .any(|record| record.semester == semester && record.tags.iter().any(|t| t == tag))
        };
        assert!(has("공통수학1", Semester::First));
        assert!(has("공통수학2", Semester::Second));
    }

    #[test]
    fn every_book_tier_has_a_concept_entry() {
        for tier in [Tier::Low, Tier::Mid, Tier::High] {
            assert!(
                books_for_tier(tier).iter().any(|book| book.category.contains("개념")),
                "{} tier lacks a concept book",
                tier.as_str()
            );
        }
    }
}
