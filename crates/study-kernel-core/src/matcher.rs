//! Topic matching over the curriculum strategy catalog.
//!
//! The upstream analyzer produces a free-text topic path; this module locates the single
//! best-matching curriculum record by keyword scoring. Catalog insertion order is a fixed
//! contract: ties resolve to the first record encountered, so candidates are scanned in
//! order with a strict `>` comparison.

use serde::Serialize;

use crate::types::{CurriculumRecord, Semester};

/// Ordered semester-marker rule list, evaluated top to bottom; the first marker found in
/// the topic text wins. Course names pinned to a school-year half come before the bare
/// semester tokens.
const SEMESTER_MARKERS: &[(&str, Semester)] = &[
    ("공통수학2", Semester::Second),
    ("공통수학1", Semester::First),
    ("2학기", Semester::Second),
    ("1학기", Semester::First),
];

/// A topic lookup request. `grade` is the free-form grade label from the analysis result;
/// `category` is an explicit semester override consulted only when the topic text itself
/// carries no semester marker.
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct TopicQuery {
    pub topic: String,
    pub grade: Option<String>,
    pub category: Option<Semester>,
}

impl TopicQuery {
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self { topic: topic.into(), grade: None, category: None }
    }
}

/// Best match for a topic query, with enough context for the report layer to explain
/// why the strategy was chosen.
#[derive(Debug, Clone, Serialize)]
pub struct TopicMatch<'a> {
    pub record: &'a CurriculumRecord,
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub semester: Option<Semester>,
    pub grade_relaxed: bool,
}

/// Extract an implicit semester from the topic text via the marker rule list.
#[must_use]
pub fn extract_semester(topic: &str) -> Option<Semester> {
    SEMESTER_MARKERS
        .iter()
        .find(|(marker, _)| topic.contains(marker))
        .map(|(_, semester)| *semester)
}

/// Locate the single best-matching curriculum record for a topic query.
///
/// Returns `None` when no record reaches a positive score; absence is an ordinary
/// outcome, not an error. When a grade filter yields nothing, the scan retries exactly
/// once over the full catalog.
#[must_use]
pub fn best_match<'a>(
    records: &'a [CurriculumRecord],
    query: &TopicQuery,
) -> Option<TopicMatch<'a>> {
    let topic = normalize_text(&query.topic);
    if topic.is_empty() {
        return None;
    }

    let semester = extract_semester(&topic).or(query.category);
    let grade = query.grade.as_deref().map(str::trim).filter(|grade| !grade.is_empty());

    if let Some(found) = best_in(records, &topic, grade, semester) {
        tracing::debug!(unit = %found.record.unit, score = found.score, "topic matched");
        return Some(found);
    }

    if grade.is_some() {
        // Single retry level: the grade label may not line up with catalog grades.
        if let Some(mut found) = best_in(records, &topic, None, semester) {
            found.grade_relaxed = true;
            tracing::debug!(
                unit = %found.record.unit,
                score = found.score,
                "topic matched after grade relaxation"
            );
            return Some(found);
        }
    }

    tracing::debug!(topic = %topic, "no curriculum record matched");
    None
}

fn best_in<'a>(
    records: &'a [CurriculumRecord],
    topic: &str,
    grade: Option<&str>,
    semester: Option<Semester>,
) -> Option<TopicMatch<'a>> {
    let grade_prefix: Option<String> =
        grade.map(|grade| grade.chars().take(2).collect::<String>().to_lowercase());

    let mut best: Option<TopicMatch<'a>> = None;
    for record in records {
        if let Some(prefix) = &grade_prefix {
            if !record.grade.to_lowercase().contains(prefix) {
                continue;
            }
        }

        if let Some(semester) = semester {
            if record.semester != semester {
                continue;
            }
        }

        let (score, matched_keywords) = score_record(record, topic);
        if score == 0 {
            continue;
        }

        // Strict `>` keeps the first record at the top score: catalog order is the
        // tie-break contract.
        let is_better = match &best {
            Some(current) => score > current.score,
            None => true,
        };
        if is_better {
            best = Some(TopicMatch {
                record,
                score,
                matched_keywords,
                semester,
                grade_relaxed: false,
            });
        }
    }

    best
}

fn score_record(record: &CurriculumRecord, topic: &str) -> (u32, Vec<String>) {
    let mut total = 0_u32;
    let mut matched = Vec::new();

    for keyword in &record.keywords {
        let normalized = normalize_text(keyword);
        if normalized.is_empty() {
            continue;
        }

        let length = u32::try_from(normalized.chars().count()).unwrap_or(u32::MAX);
        let awarded = if length <= 2 {
            // Short keywords are too noisy as substrings; require a true word boundary
            // and weight the hit double.
            if word_boundary_match(topic, &normalized) {
                length.saturating_mul(2)
            } else {
                0
            }
        } else if topic.contains(&normalized) || normalized.contains(topic) {
            length
        } else {
            0
        };

        if awarded > 0 {
            total = total.saturating_add(awarded);
            matched.push(keyword.clone());
        }
    }

    (total, matched)
}

/// True when `keyword` occurs in `topic` bounded by the string edges or
/// non-alphanumeric characters (separator, whitespace, punctuation).
fn word_boundary_match(topic: &str, keyword: &str) -> bool {
    let mut start = 0;
    while let Some(position) = topic[start..].find(keyword) {
        let begin = start + position;
        let end = begin + keyword.len();

        let before_ok = match topic[..begin].chars().next_back() {
            Some(ch) => is_boundary_char(ch),
            None => true,
        };
        let after_ok = match topic[end..].chars().next() {
            Some(ch) => is_boundary_char(ch),
            None => true,
        };
        if before_ok && after_ok {
            return true;
        }

        start = begin + topic[begin..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

fn is_boundary_char(ch: char) -> bool {
    !ch.is_alphanumeric()
}

pub(crate) fn normalize_text(input: &str) -> String {
    input.trim().to_lowercase()
}

pub(crate) fn contains_either_direction(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        grade: &str,
        semester: Semester,
        unit: &str,
        keywords: &[&str],
    ) -> CurriculumRecord {
        CurriculumRecord {
            grade: grade.to_string(),
            semester,
            unit: unit.to_string(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
            strategies: vec!["개념 정리 후 유형 문제를 푸세요".to_string()],
            tags: Vec::new(),
        }
    }

    fn must_match<'a>(
        records: &'a [CurriculumRecord],
        query: &TopicQuery,
    ) -> TopicMatch<'a> {
        match best_match(records, query) {
            Some(found) => found,
            None => panic!("query `{}` should match a record", query.topic),
        }
    }

    #[test]
    fn semester_markers_are_evaluated_in_order() {
        assert_eq!(extract_semester("공통수학2 > 도형의 방정식"), Some(Semester::Second));
        assert_eq!(extract_semester("공통수학1 > 다항식"), Some(Semester::First));
        assert_eq!(extract_semester("고1 2학기 중간고사 대비"), Some(Semester::Second));
        assert_eq!(extract_semester("삼각비"), None);
    }

    #[test]
    fn extraction_beats_explicit_category() {
        let records = vec![
            record("고1", Semester::First, "이차방정식", &["이차방정식"]),
            record("고1", Semester::Second, "원의 방정식", &["원의 방정식"]),
        ];
        let mut query = TopicQuery::new("공통수학2 > 원의 방정식");
        query.category = Some(Semester::First);

        let found = must_match(&records, &query);
        assert_eq!(found.record.unit, "원의 방정식");
        assert_eq!(found.semester, Some(Semester::Second));
    }

    #[test]
    fn explicit_category_is_the_fallback() {
        let records = vec![
            record("고1", Semester::First, "함수", &["함수"]),
            record("고1", Semester::Second, "함수의 그래프", &["함수의 그래프", "함수"]),
        ];
        let mut query = TopicQuery::new("함수의 그래프");
        query.category = Some(Semester::Second);

        let found = must_match(&records, &query);
        assert_eq!(found.record.unit, "함수의 그래프");
        assert_eq!(found.semester, Some(Semester::Second));
    }

    #[test]
    fn long_keywords_match_as_substrings_in_either_direction() {
        let records =
            vec![record("고1", Semester::Second, "원의 방정식", &["원의 방정식"])];

        // Topic contains the keyword.
        let found = must_match(&records, &TopicQuery::new("도형 > 원의 방정식의 활용"));
        assert_eq!(found.score, 6);

        // Keyword contains the topic.
        let found = must_match(&records, &TopicQuery::new("원의 방"));
        assert_eq!(found.record.unit, "원의 방정식");
    }

    #[test]
    fn short_keywords_require_a_word_boundary() {
        let records = vec![record("중3", Semester::Second, "원의 성질", &["원"])];

        let bounded = must_match(&records, &TopicQuery::new("중3 > 원 > 원주각"));
        assert_eq!(bounded.score, 2);
        assert_eq!(bounded.matched_keywords, vec!["원".to_string()]);

        // 원 embedded inside 원근법 is not a word-boundary hit.
        assert!(best_match(&records, &TopicQuery::new("미술 > 원근법")).is_none());
    }

    #[test]
    fn ties_resolve_to_the_first_record_in_catalog_order() {
        let records = vec![
            record("고1", Semester::First, "첫 번째 단원", &["이차함수"]),
            record("고1", Semester::First, "두 번째 단원", &["이차함수"]),
        ];

        let found = must_match(&records, &TopicQuery::new("이차함수 그래프"));
        assert_eq!(found.record.unit, "첫 번째 단원");
    }

    #[test]
    fn higher_score_beats_catalog_order() {
        let records = vec![
            record("고1", Semester::First, "방정식", &["방정식"]),
            record("고1", Semester::First, "이차방정식과 판별식", &["이차방정식", "판별식"]),
        ];

        let found = must_match(&records, &TopicQuery::new("이차방정식 판별식 활용"));
        assert_eq!(found.record.unit, "이차방정식과 판별식");
        assert_eq!(found.matched_keywords.len(), 2);
    }

    #[test]
    fn grade_filter_uses_two_char_prefix_containment() {
        let records = vec![
            record("중3", Semester::First, "이차방정식(중등)", &["이차방정식"]),
            record("고1", Semester::First, "이차방정식(고등)", &["이차방정식"]),
        ];

        let mut query = TopicQuery::new("이차방정식");
        query.grade = Some("고1".to_string());
        let found = must_match(&records, &query);
        assert_eq!(found.record.unit, "이차방정식(고등)");
        assert!(!found.grade_relaxed);
    }

    #[test]
    fn unmatched_grade_falls_back_to_the_full_catalog_once() {
        let records = vec![record("중3", Semester::First, "이차방정식", &["이차방정식"])];

        let mut query = TopicQuery::new("이차방정식");
        query.grade = Some("고2".to_string());
        let found = must_match(&records, &query);
        assert_eq!(found.record.unit, "이차방정식");
        assert!(found.grade_relaxed);
    }

    #[test]
    fn empty_and_blank_topics_never_match() {
        let records = vec![record("고1", Semester::First, "다항식", &["다항식"])];
        assert!(best_match(&records, &TopicQuery::new("")).is_none());
        assert!(best_match(&records, &TopicQuery::new("   ")).is_none());
    }

    #[test]
    fn matching_is_case_insensitive_after_trimming() {
        let records = vec![record("고1", Semester::First, "영어 독해", &["reading skill"])];
        let found = must_match(&records, &TopicQuery::new("  Reading SKILL 훈련  "));
        assert_eq!(found.record.unit, "영어 독해");
    }
}
