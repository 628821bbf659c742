use criterion::{criterion_group, criterion_main, Criterion};
use study_kernel_core::{
    classify_performance, find_mistake_patterns, match_topic, recommend_books, DifficultyBucket,
    PerformanceSample, RevisedLevel, Tier, TopicQuery,
};

fn bench_topic_match(c: &mut Criterion) {
    let mut query = TopicQuery::new("공통수학2 > 도형의 방정식 > 원의 방정식");
    query.grade = Some("고1".to_string());

    c.bench_function("topic_match_full_catalog", |b| {
        b.iter(|| {
            let found = match_topic(&query);
            if found.is_none() {
                panic!("benchmark query must match the embedded catalog");
            }
        });
    });
}

fn bench_mistake_lookup(c: &mut Criterion) {
    c.bench_function("mistake_lookup_full_catalog", |b| {
        b.iter(|| {
            let found = find_mistake_patterns("이차방정식");
            if found.is_empty() {
                panic!("benchmark topic must hit the mistake catalog");
            }
        });
    });
}

fn bench_classify_and_recommend(c: &mut Criterion) {
    let samples: Vec<PerformanceSample> = (0..200)
        .map(|index| {
            let bucket = match index % 4 {
                0 => DifficultyBucket::Revised(RevisedLevel::Foundational),
                1 => DifficultyBucket::Revised(RevisedLevel::Pattern),
                2 => DifficultyBucket::Revised(RevisedLevel::Reasoning),
                _ => DifficultyBucket::Revised(RevisedLevel::Creative),
            };
            PerformanceSample { bucket, correct: Some(index % 3 != 0) }
        })
        .collect();

    c.bench_function("classify_200_samples_then_recommend", |b| {
        b.iter(|| {
            let result = classify_performance(&samples);
            let books = recommend_books(result.tier, 3, &result.recommended_categories);
            if books.is_empty() {
                panic!("benchmark tier {} must yield books", result.tier.as_str());
            }
        });
    });
}

criterion_group!(kernel_benches, bench_topic_match, bench_mistake_lookup, bench_classify_and_recommend);
criterion_main!(kernel_benches);
