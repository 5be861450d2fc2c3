use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_chart::{
    BirthInput, Gender, Granularity, compute_chart, compute_flow_state, project_flow_stars,
};
use ziwei_config::Settings;
use ziwei_lunar::TableLunarConverter;
use ziwei_time::CivilDate;

fn chart_bench(c: &mut Criterion) {
    let settings = Settings::default();
    let birth = CivilDate::new(1987, 11, 3).expect("valid date");
    let input = BirthInput::from_slot("bench", birth, 7, Gender::Female);

    c.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(&TableLunarConverter, black_box(&input), &settings))
    });

    let chart = compute_chart(&TableLunarConverter, &input, &settings).expect("should build chart");
    let query = CivilDate::new(2024, 6, 1).expect("valid date");

    c.bench_function("compute_flow_state", |b| {
        b.iter(|| compute_flow_state(&TableLunarConverter, &chart, birth, black_box(query), 6))
    });

    let state = compute_flow_state(&TableLunarConverter, &chart, birth, query, 6)
        .expect("should compute flow state");
    c.bench_function("project_flow_stars_hour", |b| {
        b.iter(|| project_flow_stars(&chart, black_box(&state), &settings, Granularity::Hour))
    });
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
