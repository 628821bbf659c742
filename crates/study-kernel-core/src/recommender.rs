//! Diversified reading-list selection from a tier's book catalog.
//!
//! Selection walks a deterministically sorted view of the catalog and keeps publishers
//! and categories from repeating before the catalog is exhausted; the publisher
//! constraint is relaxed only when distinct publishers run out. Coming up short of the
//! requested count is an ordinary outcome, not an error.

use std::collections::BTreeSet;

use crate::types::BookRecord;

/// Default reading-list length when the caller does not specify one.
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 3;

/// Fixed category-priority markers, cheapest concept material first, extreme-difficulty
/// material last. A category's rank is the first marker it contains; unknown categories
/// sort after all known ones.
const CATEGORY_PRIORITY: &[&str] = &["개념", "연산", "유형", "기출", "응용", "심화", "킬러"];

fn category_rank(category: &str) -> usize {
    CATEGORY_PRIORITY
        .iter()
        .position(|marker| category.contains(marker))
        .unwrap_or(CATEGORY_PRIORITY.len())
}

fn is_concept_category(category: &str) -> bool {
    category.contains("개념")
}

/// Select up to `count` uniquely named books from a tier catalog, honoring preferred
/// categories first and diversifying publishers and categories. The result is sorted
/// ascending by difficulty.
#[must_use]
pub fn recommend(
    catalog: &[BookRecord],
    count: usize,
    preferred_categories: &[String],
) -> Vec<BookRecord> {
    if count == 0 || catalog.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&BookRecord> = catalog.iter().collect();
    // Stable sort: catalog insertion order is the final tie-break.
    sorted.sort_by(|a, b| {
        a.difficulty
            .cmp(&b.difficulty)
            .then_with(|| category_rank(&a.category).cmp(&category_rank(&b.category)))
    });

    let mut picked: Vec<&BookRecord> = Vec::new();
    let mut used_publishers: BTreeSet<&str> = BTreeSet::new();

    // Pass 1: caller preferences, in preference order.
    for preference in preferred_categories {
        if picked.len() >= count {
            break;
        }
        let candidate = sorted.iter().copied().find(|book| {
            !is_picked(&picked, book)
                && !used_publishers.contains(book.publisher.as_str())
                && book.category.contains(preference.as_str())
        });
        if let Some(book) = candidate {
            used_publishers.insert(book.publisher.as_str());
            picked.push(book);
        }
    }

    // Pass 2: guarantee one concept-category anchor if none was preferred in.
    if picked.len() < count && !picked.iter().any(|book| is_concept_category(&book.category)) {
        let candidate = sorted.iter().copied().find(|book| {
            is_concept_category(&book.category)
                && !is_picked(&picked, book)
                && !used_publishers.contains(book.publisher.as_str())
        });
        if let Some(book) = candidate {
            used_publishers.insert(book.publisher.as_str());
            picked.push(book);
        }
    }

    // Pass 3: one non-concept book from yet another publisher.
    if picked.len() < count {
        let candidate = sorted.iter().copied().find(|book| {
            !is_concept_category(&book.category)
                && !is_picked(&picked, book)
                && !used_publishers.contains(book.publisher.as_str())
        });
        if let Some(book) = candidate {
            used_publishers.insert(book.publisher.as_str());
            picked.push(book);
        }
    }

    // Pass 4: anything from a still-unused publisher.
    for &book in &sorted {
        if picked.len() >= count {
            break;
        }
        if !is_picked(&picked, book) && !used_publishers.contains(book.publisher.as_str()) {
            used_publishers.insert(book.publisher.as_str());
            picked.push(book);
        }
    }

    // Pass 5: distinct publishers ran out; relax that constraint and skip only
    // duplicate names.
    for &book in &sorted {
        if picked.len() >= count {
            break;
        }
        if !is_picked(&picked, book) {
            picked.push(book);
        }
    }

    picked.sort_by_key(|book| book.difficulty);
    picked.into_iter().cloned().collect()
}

fn is_picked(picked: &[&BookRecord], book: &BookRecord) -> bool {
    picked.iter().any(|chosen| chosen.name == book.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, publisher: &str, category: &str, difficulty: u8) -> BookRecord {
        BookRecord {
            name: name.to_string(),
            publisher: publisher.to_string(),
            category: category.to_string(),
            difficulty,
            audience_note: "테스트 교재".to_string(),
        }
    }

    fn fixture_catalog() -> Vec<BookRecord> {
        vec![
            book("쎈", "좋은책신사고", "유형서", 3),
            book("개념원리", "개념원리", "개념서", 2),
            book("일품", "좋은책신사고", "응용 문제집", 4),
            book("자이스토리", "수경출판사", "기출 문제집", 3),
            book("마플 시너지", "희망에듀", "유형서", 3),
        ]
    }

    fn names(books: &[BookRecord]) -> Vec<&str> {
        books.iter().map(|book| book.name.as_str()).collect()
    }

    #[test]
    fn zero_count_returns_nothing() {
        assert!(recommend(&fixture_catalog(), 0, &[]).is_empty());
    }

    #[test]
    fn default_selection_leads_with_a_concept_anchor() {
        let picked = recommend(&fixture_catalog(), 3, &[]);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().any(|book| is_concept_category(&book.category)));

        let publishers: BTreeSet<&str> =
            picked.iter().map(|book| book.publisher.as_str()).collect();
        assert_eq!(publishers.len(), 3, "publishers must be distinct: {:?}", names(&picked));
    }

    #[test]
    fn result_is_sorted_ascending_by_difficulty() {
        let picked = recommend(&fixture_catalog(), 4, &[]);
        let difficulties: Vec<u8> = picked.iter().map(|book| book.difficulty).collect();
        let mut expected = difficulties.clone();
        expected.sort_unstable();
        assert_eq!(difficulties, expected);
    }

    #[test]
    fn preferred_categories_are_honored_in_order() {
        let picked =
            recommend(&fixture_catalog(), 3, &["기출".to_string(), "응용".to_string()]);
        assert!(picked.iter().any(|book| book.name == "자이스토리"));
        assert!(picked.iter().any(|book| book.name == "일품"));
    }

    #[test]
    fn oversized_count_returns_the_whole_catalog() {
        let picked = recommend(&fixture_catalog(), 50, &[]);
        assert_eq!(picked.len(), 5);
        let unique: BTreeSet<&str> = picked.iter().map(|book| book.name.as_str()).collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn publisher_constraint_relaxes_when_publishers_run_out() {
        let catalog = vec![
            book("개념원리 상", "개념원리", "개념서", 2),
            book("개념원리 하", "개념원리", "개념서", 2),
            book("RPM", "개념원리", "유형서", 3),
        ];

        let picked = recommend(&catalog, 3, &[]);
        assert_eq!(picked.len(), 3, "one publisher must still fill the list: {:?}", names(&picked));
        let unique: BTreeSet<&str> = picked.iter().map(|book| book.name.as_str()).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn category_rank_follows_the_priority_table() {
        assert!(category_rank("개념서") < category_rank("유형서"));
        assert!(category_rank("유형서") < category_rank("기출 문제집"));
        assert!(category_rank("심화서") < category_rank("킬러 문항 대비"));
        assert_eq!(category_rank("듣기 모의고사"), CATEGORY_PRIORITY.len());
    }

    #[test]
    fn empty_catalog_is_an_ordinary_outcome() {
        assert!(recommend(&[], 3, &[]).is_empty());
    }
}
