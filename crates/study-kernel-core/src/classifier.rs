//! Performance-tier classification from per-difficulty accuracy.
//!
//! The rules form a strict ladder: the first satisfied rule decides tier, confidence
//! and reason; a post-rule then layers the concept-reinforcement signal on top. All
//! percentages are in 0..=100.

use crate::types::{
    DifficultyBucket, LegacyLevel, PerformanceSample, RevisedLevel, Tier, TierResult,
};

/// Weak point appended when pattern accuracy lags in the mid band.
pub const WEAK_APPLIED_PROBLEMS: &str = "응용 문제 취약";
/// Weak point for strong students who face many hard problems but miss reasoning items.
pub const WEAK_KILLER_COMPLETENESS: &str = "킬러 문항 완성도";
/// Default weak point for strong students: the remaining gap is avoidable mistakes.
pub const WEAK_ERROR_PREVENTION: &str = "실수 방지";
/// Weak point prepended whenever foundational accuracy sits strictly inside (0, 70).
pub const WEAK_CONCEPT_REINFORCEMENT: &str = "개념 보강 필요";
/// Book category promoted to the front of the recommendation list by the post-rule.
pub const CONCEPT_CATEGORY: &str = "개념서";

#[derive(Debug, Clone, Copy, Default)]
struct BucketStats {
    graded: usize,
    correct: usize,
}

impl BucketStats {
    fn observe(&mut self, correct: bool) {
        self.graded += 1;
        if correct {
            self.correct += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn accuracy(self) -> Option<f64> {
        if self.graded == 0 {
            None
        } else {
            Some(self.correct as f64 / self.graded as f64 * 100.0)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accuracies {
    overall: BucketStats,
    hard_graded: usize,
    foundational: BucketStats,
    pattern: BucketStats,
    reasoning: BucketStats,
    creative: BucketStats,
    legacy_low: BucketStats,
    legacy_medium: BucketStats,
    legacy_high: BucketStats,
}

impl Accuracies {
    fn collect(samples: &[PerformanceSample]) -> Self {
        let mut accuracies = Self::default();
        for sample in samples {
            let Some(correct) = sample.correct else {
                continue;
            };

            accuracies.overall.observe(correct);
            if sample.bucket.is_hard() {
                accuracies.hard_graded += 1;
            }

            match sample.bucket {
                DifficultyBucket::Revised(RevisedLevel::Foundational) => {
                    accuracies.foundational.observe(correct);
                }
                DifficultyBucket::Revised(RevisedLevel::Pattern) => {
                    accuracies.pattern.observe(correct);
                }
                DifficultyBucket::Revised(RevisedLevel::Reasoning) => {
                    accuracies.reasoning.observe(correct);
                }
                DifficultyBucket::Revised(RevisedLevel::Creative) => {
                    accuracies.creative.observe(correct);
                }
                DifficultyBucket::Legacy(LegacyLevel::Low) => {
                    accuracies.legacy_low.observe(correct);
                }
                DifficultyBucket::Legacy(LegacyLevel::Medium) => {
                    accuracies.legacy_medium.observe(correct);
                }
                DifficultyBucket::Legacy(LegacyLevel::High) => {
                    accuracies.legacy_high.observe(correct);
                }
            }
        }

        accuracies
    }

    /// Accuracy of a revised bucket, falling back to its legacy counterpart when the
    /// revised bucket has no graded samples. Creative has no fallback.
    fn effective(&self, level: RevisedLevel) -> Option<f64> {
        let revised = match level {
            RevisedLevel::Foundational => self.foundational,
            RevisedLevel::Pattern => self.pattern,
            RevisedLevel::Reasoning => self.reasoning,
            RevisedLevel::Creative => self.creative,
        };
        if revised.graded > 0 {
            return revised.accuracy();
        }

        match level.legacy_fallback()? {
            LegacyLevel::Low => self.legacy_low.accuracy(),
            LegacyLevel::Medium => self.legacy_medium.accuracy(),
            LegacyLevel::High => self.legacy_high.accuracy(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn hard_share(&self) -> f64 {
        if self.overall.graded == 0 {
            0.0
        } else {
            self.hard_graded as f64 / self.overall.graded as f64 * 100.0
        }
    }
}

/// Classify graded question outcomes into a performance tier.
///
/// With zero graded samples the neutral result is returned: mid tier at confidence 0.
/// Expected absence of data is never an error.
#[must_use]
pub fn classify(samples: &[PerformanceSample]) -> TierResult {
    let accuracies = Accuracies::collect(samples);
    let Some(overall) = accuracies.overall.accuracy() else {
        return TierResult {
            tier: Tier::Mid,
            confidence: 0,
            reason: "채점된 문항이 없습니다".to_string(),
            weak_points: Vec::new(),
            recommended_categories: Vec::new(),
        };
    };

    let foundational = accuracies.effective(RevisedLevel::Foundational);
    let mut result = primary_rule(&accuracies, overall, foundational);
    tracing::debug!(
        tier = result.tier.as_str(),
        confidence = result.confidence,
        overall = overall,
        "performance classified"
    );

    // Post-rule: a shaky foundation overrides everything on the remediation side,
    // whatever tier the primary rule picked.
    if let Some(foundational) = foundational {
        if foundational > 0.0 && foundational < 70.0 {
            if !result.weak_points.iter().any(|point| point == WEAK_CONCEPT_REINFORCEMENT) {
                result.weak_points.insert(0, WEAK_CONCEPT_REINFORCEMENT.to_string());
            }
            result.recommended_categories.retain(|category| category != CONCEPT_CATEGORY);
            result.recommended_categories.insert(0, CONCEPT_CATEGORY.to_string());
        }
    }

    result
}

fn primary_rule(
    accuracies: &Accuracies,
    overall: f64,
    foundational: Option<f64>,
) -> TierResult {
    let pattern = accuracies.effective(RevisedLevel::Pattern);
    let reasoning = accuracies.effective(RevisedLevel::Reasoning);
    let creative = accuracies.effective(RevisedLevel::Creative);

    // Rule 1: a weak foundation caps the tier regardless of the rest.
    if let Some(foundational) = foundational {
        if foundational < 60.0 {
            return tier_result(
                Tier::Low,
                85,
                format!("기초 문항 정답률이 {}%로 낮아 개념부터 다져야 합니다", foundational.round()),
            );
        }
    }

    // Rule 2: overall collapse.
    if overall < 50.0 {
        return tier_result(
            Tier::Low,
            90,
            format!("전체 정답률이 {}%로 기본기 보강이 필요합니다", overall.round()),
        );
    }

    // Rule 3: pattern-problem gap.
    if let Some(pattern) = pattern {
        if pattern < 70.0 {
            return tier_result(
                Tier::Mid,
                80,
                format!("유형 문항 정답률이 {}%로 유형 훈련이 필요합니다", pattern.round()),
            );
        }
    }

    // Rule 4: solid middle band.
    if (50.0..75.0).contains(&overall) {
        let mut result = tier_result(
            Tier::Mid,
            75,
            format!("전체 정답률 {}%로 중위권 실력입니다", overall.round()),
        );
        if pattern.is_some_and(|pattern| pattern < 80.0) {
            result.weak_points.push(WEAK_APPLIED_PROBLEMS.to_string());
        }
        return result;
    }

    // Rule 5: strong overall but an advanced-problem gap.
    let creative_gap =
        accuracies.creative.graded > 0 && creative.is_some_and(|creative| creative < 60.0);
    if reasoning.is_some_and(|reasoning| reasoning < 60.0) || creative_gap {
        return tier_result(
            Tier::High,
            70,
            "추론·창의 문항 정답률이 낮아 고난도 문항 대비가 필요합니다".to_string(),
        );
    }

    // Rule 6: top band.
    if overall >= 75.0 {
        let mut result = tier_result(
            Tier::High,
            85,
            format!("전체 정답률이 {}%로 상위권 실력입니다", overall.round()),
        );
        let reasoning_soft = reasoning.is_some_and(|reasoning| reasoning < 80.0);
        if accuracies.hard_share() > 30.0 && reasoning_soft {
            result.weak_points.push(WEAK_KILLER_COMPLETENESS.to_string());
        } else {
            result.weak_points.push(WEAK_ERROR_PREVENTION.to_string());
        }
        return result;
    }

    // Rules 1-6 exhaust [0, 100]; kept as the documented fallback.
    tier_result(Tier::Mid, 60, "표준 수준입니다".to_string())
}

fn tier_result(tier: Tier, confidence: u8, reason: String) -> TierResult {
    TierResult {
        tier,
        confidence,
        reason,
        weak_points: Vec::new(),
        recommended_categories: default_categories(tier),
    }
}

fn default_categories(tier: Tier) -> Vec<String> {
    let categories: &[&str] = match tier {
        Tier::Low => &["개념서", "연산 문제집"],
        Tier::Mid => &["유형서", "응용 문제집"],
        Tier::High => &["심화서", "기출 문제집"],
    };
    categories.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn samples(spec: &[(DifficultyBucket, usize, usize)]) -> Vec<PerformanceSample> {
        let mut out = Vec::new();
        for &(bucket, correct, wrong) in spec {
            for _ in 0..correct {
                out.push(PerformanceSample { bucket, correct: Some(true) });
            }
            for _ in 0..wrong {
                out.push(PerformanceSample { bucket, correct: Some(false) });
            }
        }
        out
    }

    const FOUNDATIONAL: DifficultyBucket = DifficultyBucket::Revised(RevisedLevel::Foundational);
    const PATTERN: DifficultyBucket = DifficultyBucket::Revised(RevisedLevel::Pattern);
    const REASONING: DifficultyBucket = DifficultyBucket::Revised(RevisedLevel::Reasoning);
    const CREATIVE: DifficultyBucket = DifficultyBucket::Revised(RevisedLevel::Creative);

    #[test]
    fn no_graded_samples_yield_the_neutral_result() {
        let ungraded = vec![
            PerformanceSample { bucket: FOUNDATIONAL, correct: None },
            PerformanceSample { bucket: REASONING, correct: None },
        ];

        let result = classify(&ungraded);
        assert_eq!(result.tier, Tier::Mid);
        assert_eq!(result.confidence, 0);
        assert!(result.weak_points.is_empty());
        assert!(result.recommended_categories.is_empty());

        let empty = classify(&[]);
        assert_eq!(empty.tier, Tier::Mid);
        assert_eq!(empty.confidence, 0);
    }

    #[test]
    fn weak_foundation_selects_rule_one_before_later_rules() {
        // Foundational 55%, overall 62%: rule 1 must win even though rule 4 would also
        // be satisfied.
        let result = classify(&samples(&[
            (FOUNDATIONAL, 11, 9),
            (PATTERN, 14, 4),
            (REASONING, 6, 6),
        ]));
        assert_eq!(result.tier, Tier::Low);
        assert_eq!(result.confidence, 85);
        assert!(result.reason.contains("55%"), "reason was `{}`", result.reason);
    }

    #[test]
    fn overall_collapse_selects_rule_two() {
        let result = classify(&samples(&[(FOUNDATIONAL, 7, 3), (PATTERN, 2, 8)]));
        assert_eq!(result.tier, Tier::Low);
        assert_eq!(result.confidence, 90);
        assert!(result.reason.contains("45%"), "reason was `{}`", result.reason);
    }

    #[test]
    fn pattern_gap_selects_rule_three() {
        let result = classify(&samples(&[
            (FOUNDATIONAL, 9, 1),
            (PATTERN, 6, 4),
            (REASONING, 8, 2),
        ]));
        assert_eq!(result.tier, Tier::Mid);
        assert_eq!(result.confidence, 80);
        assert!(result.reason.contains("60%"), "reason was `{}`", result.reason);
    }

    #[test]
    fn middle_band_appends_applied_problem_weak_point() {
        // Overall 70%, pattern 75%: rule 4 with the applied-problem weak point.
        let result = classify(&samples(&[
            (FOUNDATIONAL, 8, 2),
            (PATTERN, 15, 5),
            (REASONING, 5, 5),
        ]));
        assert_eq!(result.tier, Tier::Mid);
        assert_eq!(result.confidence, 75);
        assert!(result.weak_points.iter().any(|point| point == WEAK_APPLIED_PROBLEMS));
    }

    #[test]
    fn creative_gap_selects_rule_five() {
        let result = classify(&samples(&[
            (FOUNDATIONAL, 10, 0),
            (PATTERN, 9, 1),
            (REASONING, 8, 2),
            (CREATIVE, 1, 3),
        ]));
        assert_eq!(result.tier, Tier::High);
        assert_eq!(result.confidence, 70);
    }

    #[test]
    fn top_band_flags_killer_completeness_under_hard_load() {
        // Hard share 40%, reasoning 75%: killer-completeness weak point.
        let result = classify(&samples(&[
            (FOUNDATIONAL, 10, 0),
            (PATTERN, 8, 0),
            (REASONING, 9, 3),
        ]));
        assert_eq!(result.tier, Tier::High);
        assert_eq!(result.confidence, 85);
        assert!(result.weak_points.iter().any(|point| point == WEAK_KILLER_COMPLETENESS));
    }

    #[test]
    fn top_band_defaults_to_error_prevention() {
        let result = classify(&samples(&[
            (FOUNDATIONAL, 10, 0),
            (PATTERN, 9, 1),
            (REASONING, 4, 0),
        ]));
        assert_eq!(result.tier, Tier::High);
        assert_eq!(result.confidence, 85);
        assert!(result.weak_points.iter().any(|point| point == WEAK_ERROR_PREVENTION));
    }

    #[test]
    fn legacy_buckets_back_fill_empty_revised_buckets() {
        // No revised foundational samples at all; legacy low at 50% triggers rule 1.
        let legacy_low = DifficultyBucket::Legacy(LegacyLevel::Low);
        let result = classify(&samples(&[(legacy_low, 5, 5), (PATTERN, 9, 1)]));
        assert_eq!(result.tier, Tier::Low);
        assert_eq!(result.confidence, 85);
        assert!(result.reason.contains("50%"), "reason was `{}`", result.reason);
    }

    #[test]
    fn shaky_foundation_prepends_concept_reinforcement() {
        // Foundational 62.5% passes rule 1 (>= 60) but sits inside (0, 70): the
        // post-rule must prepend the concept weak point and lead with the concept
        // category.
        let result = classify(&samples(&[
            (FOUNDATIONAL, 5, 3),
            (PATTERN, 16, 0),
            (REASONING, 9, 3),
        ]));
        assert_eq!(result.weak_points.first().map(String::as_str), Some(WEAK_CONCEPT_REINFORCEMENT));
        assert_eq!(
            result.recommended_categories.first().map(String::as_str),
            Some(CONCEPT_CATEGORY)
        );
        let concept_count = result
            .recommended_categories
            .iter()
            .filter(|category| category.as_str() == CONCEPT_CATEGORY)
            .count();
        assert_eq!(concept_count, 1, "concept category must be deduplicated");
    }

    #[test]
    fn zero_foundational_accuracy_skips_the_post_rule() {
        let result = classify(&samples(&[(FOUNDATIONAL, 0, 10), (PATTERN, 1, 9)]));
        assert!(result.weak_points.iter().all(|point| point != WEAK_CONCEPT_REINFORCEMENT));
    }

    fn arbitrary_bucket() -> impl Strategy<Value = DifficultyBucket> {
        prop_oneof![
            Just(FOUNDATIONAL),
            Just(PATTERN),
            Just(REASONING),
            Just(CREATIVE),
            Just(DifficultyBucket::Legacy(LegacyLevel::Low)),
            Just(DifficultyBucket::Legacy(LegacyLevel::Medium)),
            Just(DifficultyBucket::Legacy(LegacyLevel::High)),
        ]
    }

    fn arbitrary_sample() -> impl Strategy<Value = PerformanceSample> {
        (arbitrary_bucket(), proptest::option::of(any::<bool>()))
            .prop_map(|(bucket, correct)| PerformanceSample { bucket, correct })
    }

    proptest! {
        #[test]
        fn classification_is_always_bounded(samples in proptest::collection::vec(arbitrary_sample(), 0..80)) {
            let result = classify(&samples);
            prop_assert!(result.confidence <= 100);
            let graded = samples.iter().filter(|sample| sample.correct.is_some()).count();
            if graded == 0 {
                prop_assert_eq!(result.tier, Tier::Mid);
                prop_assert_eq!(result.confidence, 0);
            } else {
                prop_assert!(result.confidence > 0);
                prop_assert!(!result.reason.is_empty());
                prop_assert!(!result.recommended_categories.is_empty());
            }
        }

        #[test]
        fn classification_is_deterministic(samples in proptest::collection::vec(arbitrary_sample(), 0..40)) {
            prop_assert_eq!(classify(&samples), classify(&samples));
        }
    }
}
