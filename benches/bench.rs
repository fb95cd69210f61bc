// Criterion benchmarks for Canteen Advisor

use canteen_advisor::core::{filters::is_eligible, time::time_factor, Recommender};
use canteen_advisor::models::{DiningHallRecord, DiningPurpose, HallType, PreferenceProfile, PriceRange, UserType};
use canteen_advisor::services::Catalog;
use chrono::NaiveTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn create_hall(id: usize) -> DiningHallRecord {
    let hall_type = HallType::ALL[id % HallType::ALL.len()];
    let min = 8 + (id % 10) as u32;
    DiningHallRecord {
        name: format!("Hall {}", id),
        hall_type,
        price_range: PriceRange::new(min, min + 10),
        base_score: 6.0 + (id % 40) as f64 / 10.0,
        location: "Campus".to_string(),
        specialty: "Assorted".to_string(),
        popular_dishes: vec![],
        operating_hours: "06:00-23:00".to_string(),
        seat_count: 300,
    }
}

fn create_profile() -> PreferenceProfile {
    PreferenceProfile::new(
        UserType::Undergraduate,
        DiningPurpose::QuickMeal,
        NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        PriceRange::new(8, 25),
        15,
    )
}

fn bench_time_factor(c: &mut Criterion) {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    c.bench_function("time_factor", |b| {
        b.iter(|| time_factor(black_box(noon)));
    });
}

fn bench_builtin_catalog(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let engine = Recommender::default();
    let profile = create_profile();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("recommend_builtin", |b| {
        b.iter(|| {
            engine
                .recommend(black_box(&catalog), black_box(&profile), &mut rng)
                .map(|recs| recs.ranked().len())
        });
    });
}

fn bench_recommend(c: &mut Criterion) {
    let engine = Recommender::default();
    let profile = create_profile();
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("recommend");

    for hall_count in [8, 50, 100, 500, 1000].iter() {
        let catalog = Catalog::new((0..*hall_count).map(create_hall).collect())
            .expect("generated catalog is valid");

        group.bench_with_input(
            BenchmarkId::new("recommend", hall_count),
            hall_count,
            |b, _| {
                b.iter(|| engine.recommend(black_box(&catalog), black_box(&profile), &mut rng));
            },
        );
    }

    group.finish();
}

fn bench_eligibility(c: &mut Criterion) {
    let profile = create_profile();
    let halls: Vec<DiningHallRecord> = (0..100).map(create_hall).collect();

    c.bench_function("eligibility_100_halls", |b| {
        b.iter(|| {
            let eligible = halls.iter().filter(|h| is_eligible(h, &profile)).count();
            black_box(eligible)
        });
    });
}

criterion_group!(
    benches,
    bench_time_factor,
    bench_builtin_catalog,
    bench_recommend,
    bench_eligibility
);

criterion_main!(benches);
