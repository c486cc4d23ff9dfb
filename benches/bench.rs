use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uuid::Uuid;

use tindog_feed::core::{CandidateOrdering, NewestFirst, Shuffled};
use tindog_feed::models::DogProfile;

fn make_profiles(n: usize) -> Vec<DogProfile> {
    (0..n)
        .map(|i| DogProfile {
            id: Uuid::new_v4(),
            owner_user_id: Uuid::new_v4(),
            name: format!("Dog {}", i),
            age: Some((i % 15) as i16),
            gender: None,
            breed: Some("mixed".to_string()),
            personality: None,
            bio: None,
            photo_ref: None,
            created_at: Utc::now() + Duration::seconds(i as i64),
        })
        .collect()
}

fn bench_ordering(c: &mut Criterion) {
    let profiles = make_profiles(10_000);

    c.bench_function("newest_first_10k", |b| {
        b.iter(|| {
            let mut candidates = profiles.clone();
            NewestFirst.arrange(&mut candidates);
            black_box(candidates.first().map(|p| p.id))
        })
    });

    c.bench_function("shuffled_10k", |b| {
        b.iter(|| {
            let mut candidates = profiles.clone();
            Shuffled.arrange(&mut candidates);
            black_box(candidates.first().map(|p| p.id))
        })
    });
}

criterion_group!(benches, bench_ordering);
criterion_main!(benches);
