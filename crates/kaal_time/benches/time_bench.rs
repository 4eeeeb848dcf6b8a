use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kaal_time::{
    Instant, UtcTime, calendar_to_jd, delta_t_seconds_for_jd, gmst_deg, jd_to_calendar,
    local_mean_time,
};

fn time_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;
    let utc = UtcTime::new(2025, 2, 26, 6, 30, 15.25);

    let mut group = c.benchmark_group("time");
    group.bench_function("calendar_to_jd", |b| {
        b.iter(|| calendar_to_jd(black_box(2025), black_box(2), black_box(26.25)))
    });
    group.bench_function("jd_to_calendar", |b| b.iter(|| jd_to_calendar(black_box(jd))));
    group.bench_function("delta_t", |b| b.iter(|| delta_t_seconds_for_jd(black_box(jd))));
    group.bench_function("instant_from_utc", |b| {
        b.iter(|| Instant::from_utc(black_box(&utc)))
    });
    group.bench_function("gmst", |b| b.iter(|| gmst_deg(black_box(jd))));
    group.bench_function("local_mean_time", |b| {
        b.iter(|| local_mean_time(black_box(jd), black_box(75.7885)))
    });
    group.finish();
}

criterion_group!(benches, time_bench);
criterion_main!(benches);
