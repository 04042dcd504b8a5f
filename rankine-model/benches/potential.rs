// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

/// Benchmark the potential calculation.
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rankine_model::metrics::DerivedMetrics;
use rankine_model::potential::{ChipSpec, PotentialCalculator, compute};
use rankine_model::process::supported_nodes;
use rankine_track::entity::toplevel;
use rankine_track::tracker::dev_null_tracker;

fn all_node_specs() -> Vec<ChipSpec> {
    supported_nodes()
        .into_iter()
        .map(|node_nm| ChipSpec::new(node_nm, 2000.0, 95.0).with_die_area_mm2(250.0))
        .collect()
}

fn bench_potential(c: &mut Criterion) {
    let mut group = c.benchmark_group("potential");
    let specs = all_node_specs();

    group.bench_function("compute_all_nodes", |b| {
        b.iter(|| {
            for spec in &specs {
                let result = compute(black_box(spec)).unwrap();
                black_box(DerivedMetrics::new(spec, &result));
            }
        });
    });

    // Logging disabled so that only the macro level checks are measured
    let tracker = dev_null_tracker();
    let top = toplevel(&tracker, "rankine");
    let calculator = PotentialCalculator::new(&top);
    group.bench_function("calculator_all_nodes", |b| {
        b.iter(|| {
            for spec in &specs {
                black_box(calculator.compute(black_box(spec)).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_potential
}
criterion_main!(benches);
