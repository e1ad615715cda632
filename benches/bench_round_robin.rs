// benches/bench_round_robin.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use signal_scheduler::synthetic::{generate_city, CityParams};
use signal_scheduler::{SimulationProblem, Strategy};
use std::time::Duration;

fn bench_round_robin(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(2));

    let params = CityParams {
        sim_duration: 1_000,
        intersections: 5_000,
        streets: 20_000,
        cars: 2_000,
        max_route_len: 40,
        ..CityParams::default()
    };
    let problem = SimulationProblem::new(generate_city(&params, 3));

    for strategy in [Strategy::Naive, Strategy::Weighted] {
        group.bench_function(strategy.to_string(), |b| {
            b.iter(|| black_box(strategy.solve(black_box(&problem))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_round_robin);
criterion_main!(benches);
