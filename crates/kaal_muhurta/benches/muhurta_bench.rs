use chrono::{Duration, NaiveDate};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kaal_core::AnalyticEphemeris;
use kaal_muhurta::{MuhurtaEngine, MuhurtaRequest, MuhurtaType};
use kaal_panchang::PanchangCalculator;
use kaal_vedic_base::GeoLocation;

fn sweep_bench(c: &mut Criterion) {
    let Ok(loc) = GeoLocation::new(23.1765, 75.7885, 0.0) else {
        return;
    };
    let Some(start) = NaiveDate::from_ymd_opt(2025, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return;
    };
    let start = start.and_utc();
    let calc = PanchangCalculator::new(AnalyticEphemeris::new());
    let engine = MuhurtaEngine::new(&calc);

    let day = MuhurtaRequest::new(MuhurtaType::Marriage, start, start + Duration::days(1), loc);
    let week = MuhurtaRequest::new(MuhurtaType::Business, start, start + Duration::days(7), loc);

    let mut group = c.benchmark_group("muhurta");
    group.sample_size(10);
    group.bench_function("one_day_cold", |b| {
        b.iter(|| {
            calc.clear_cache();
            engine.find_muhurta(black_box(&day))
        })
    });
    group.bench_function("one_week_cold", |b| {
        b.iter(|| {
            calc.clear_cache();
            engine.find_muhurta(black_box(&week))
        })
    });
    group.bench_function("single_sample", |b| {
        b.iter(|| engine.evaluate(black_box(&day), start))
    });
    group.finish();
}

criterion_group!(benches, sweep_bench);
criterion_main!(benches);
