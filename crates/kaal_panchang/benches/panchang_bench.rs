use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kaal_core::AnalyticEphemeris;
use kaal_panchang::{PanchangCalculator, PanchangRequest, next_amavasya, tithi_for_date};
use kaal_time::Instant;
use kaal_vedic_base::GeoLocation;

fn snapshot_bench(c: &mut Criterion) {
    let Ok(loc) = GeoLocation::new(23.1765, 75.7885, 0.0) else {
        return;
    };
    let Ok(instant) = Instant::from_jd_utc(2_460_732.5) else {
        return;
    };
    let calc = PanchangCalculator::new(AnalyticEphemeris::new());
    let req = PanchangRequest::new(instant, loc);

    let mut group = c.benchmark_group("snapshot");
    group.bench_function("cold", |b| {
        b.iter(|| {
            calc.clear_cache();
            calc.compute(black_box(&req))
        })
    });
    group.bench_function("cached", |b| b.iter(|| calc.compute(black_box(&req))));
    group.finish();
}

fn search_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let Ok(instant) = Instant::from_jd_utc(2_460_732.5) else {
        return;
    };

    let mut group = c.benchmark_group("search");
    group.bench_function("tithi_bounds", |b| {
        b.iter(|| tithi_for_date(&eph, black_box(&instant)))
    });
    group.bench_function("next_amavasya", |b| {
        b.iter(|| next_amavasya(&eph, black_box(instant.jd_tt())))
    });
    group.finish();
}

criterion_group!(benches, snapshot_bench, search_bench);
criterion_main!(benches);
