//! Loose multi-result lookup over the common-mistake catalog.
//!
//! Unlike the topic matcher this performs no scoring: every record whose unit name or
//! entry keywords overlap the topic is returned, in catalog order.

use crate::matcher::{contains_either_direction, normalize_text};
use crate::types::MistakeRecord;

/// Collect every mistake record related to a topic. A record matches when its unit name
/// and the topic contain each other in either direction, or any entry keyword does.
/// Returns an empty vec for unrelated or blank topics.
#[must_use]
pub fn find_patterns<'a>(records: &'a [MistakeRecord], topic: &str) -> Vec<&'a MistakeRecord> {
    let topic = normalize_text(topic);
    if topic.is_empty() {
        return Vec::new();
    }

    records.iter().filter(|record| record_matches(record, &topic)).collect()
}

fn record_matches(record: &MistakeRecord, topic: &str) -> bool {
    if contains_either_direction(&normalize_text(&record.unit), topic) {
        return true;
    }

    record.entries.iter().any(|entry| {
        entry
            .keywords
            .iter()
            .any(|keyword| contains_either_direction(&normalize_text(keyword), topic))
    })
}
