// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use approx::assert_relative_eq;
use rankine_model::potential::{ChipSpec, PotentialCalculator, compute};
use rankine_model::process::supported_nodes;
use rankine_model::types::ModelError;
use rankine_track::entity::toplevel;
use rankine_track::test_helpers::{check_and_clear, create_tracker};
use rankine_track::test_init;

fn skylake_like() -> ChipSpec {
    ChipSpec::new(14, 3000.0, 65.0).with_transistor_count_millions(2000.0)
}

#[test]
fn power_bound_scenario() {
    let result = compute(&skylake_like()).unwrap();

    assert_relative_eq!(result.transistor_count, 2e9);
    assert_relative_eq!(result.intrinsic_frequency_mhz, 1e6 / 4.02);
    assert_relative_eq!(
        result.tdp_transistor_count,
        1680304462.249196,
        max_relative = 1e-6
    );
    assert_eq!(result.bound_transistor_count, result.tdp_transistor_count);
    assert_eq!(result.power_bucket_nm, 12);
    assert_relative_eq!(result.throughput, 5040913386747.588, max_relative = 1e-6);
    assert_relative_eq!(result.dynamic_power_w, 4.319892e-7, max_relative = 1e-9);
    assert_relative_eq!(result.static_power_w, 0.99e-6, max_relative = 1e-12);
    assert_relative_eq!(result.total_power_w, 2705.8733804034605, max_relative = 1e-6);
    assert_relative_eq!(result.cost.unwrap(), 2.86e9, max_relative = 1e-12);
}

#[test]
fn area_bound_scenario() {
    let spec = ChipSpec::new(14, 2000.0, 100.0).with_die_area_mm2(100.0);
    let result = compute(&spec).unwrap();

    assert_relative_eq!(result.transistor_count, 2765478077.2768946, max_relative = 1e-6);
    assert_relative_eq!(
        result.tdp_transistor_count,
        3204475584.9276786,
        max_relative = 1e-6
    );
    assert_eq!(result.bound_transistor_count, result.transistor_count);
    assert_relative_eq!(result.throughput, 5530956154553.789, max_relative = 1e-6);
    assert_relative_eq!(result.total_power_w, 3534.2610713177146, max_relative = 1e-6);
    assert_relative_eq!(result.cost.unwrap(), 3954633650.505959, max_relative = 1e-6);
}

#[test]
fn bound_is_minimum() {
    for node_nm in supported_nodes() {
        for count_millions in [1.0, 100.0, 10_000.0] {
            let spec = ChipSpec::new(node_nm, 1000.0, 50.0)
                .with_transistor_count_millions(count_millions);
            let result = compute(&spec).unwrap();
            assert_eq!(
                result.bound_transistor_count,
                result.transistor_count.min(result.tdp_transistor_count)
            );
        }
    }
}

#[test]
fn count_overrides_area() {
    let with_count = skylake_like();
    let with_both = skylake_like().with_die_area_mm2(10.0);
    let a = compute(&with_count).unwrap();
    let b = compute(&with_both).unwrap();
    assert_eq!(a, b);
    assert_relative_eq!(b.transistor_count, 2e9);
}

#[test]
fn fractional_count() {
    let spec = ChipSpec::new(28, 1000.0, 10.0).with_transistor_count_millions(0.5);
    let result = compute(&spec).unwrap();
    assert_relative_eq!(result.transistor_count, 5e5);
}

#[test]
fn idempotent() {
    let spec = ChipSpec::new(7, 2500.0, 150.0).with_die_area_mm2(350.0);
    let first = compute(&spec).unwrap();
    let second = compute(&spec).unwrap();
    assert_eq!(first.throughput.to_bits(), second.throughput.to_bits());
    assert_eq!(first.total_power_w.to_bits(), second.total_power_w.to_bits());
    assert_eq!(first, second);
}

#[test]
fn cost_only_when_defined() {
    for node_nm in supported_nodes() {
        let spec = ChipSpec::new(node_nm, 1000.0, 50.0).with_die_area_mm2(100.0);
        let result = compute(&spec).unwrap();
        let expect_cost = !matches!(node_nm, 180 | 80 | 12);
        assert_eq!(result.cost.is_some(), expect_cost, "{node_nm}nm");
    }
}

#[test]
fn oldest_node() {
    let spec = ChipSpec::new(180, 500.0, 50.0).with_die_area_mm2(200.0);
    let result = compute(&spec).unwrap();
    assert_eq!(result.power_bucket_nm, 150);
    assert_relative_eq!(result.transistor_count, 57714089.305723555, max_relative = 1e-6);
    assert_relative_eq!(result.throughput, 28857044652.86178, max_relative = 1e-6);
    assert_relative_eq!(result.total_power_w, 6853.553414750889, max_relative = 1e-6);
    assert_eq!(result.cost, None);
}

#[test]
fn unsupported_node() {
    let spec = ChipSpec::new(99, 1000.0, 50.0).with_transistor_count_millions(100.0);
    assert!(matches!(
        compute(&spec),
        Err(ModelError::UnsupportedNode { node_nm: 99, .. })
    ));
}

#[test]
#[should_panic(expected = "Error: please provide either chip transistor count or chip die area.")]
fn missing_count_and_area() {
    let spec = ChipSpec::new(14, 1000.0, 50.0);
    match compute(&spec) {
        Err(e @ ModelError::MissingRequiredInput(_)) => panic!("{e}"),
        other => println!("Unexpected {other:?}"),
    }
}

#[test]
fn invalid_numbers() {
    let specs = [
        ChipSpec::new(14, 0.0, 50.0).with_die_area_mm2(100.0),
        ChipSpec::new(14, 1000.0, -1.0).with_die_area_mm2(100.0),
        ChipSpec::new(14, f64::NAN, 50.0).with_die_area_mm2(100.0),
        ChipSpec::new(14, 1000.0, 50.0).with_die_area_mm2(0.0),
        ChipSpec::new(14, 1000.0, 50.0).with_transistor_count_millions(f64::INFINITY),
    ];
    for spec in specs {
        assert!(
            matches!(compute(&spec), Err(ModelError::InvalidInput(_))),
            "{spec:?}"
        );
    }
}

#[test]
#[should_panic(expected = "Error: chip frequency must be a positive number, got -5MHz")]
fn negative_frequency_message() {
    let spec = ChipSpec::new(14, -5.0, 50.0).with_die_area_mm2(100.0);
    if let Err(e) = compute(&spec) {
        panic!("{e}");
    }
}

#[test]
fn calculator_matches_compute() {
    let tracker = create_tracker(file!());
    let top = toplevel(&tracker, "rankine");
    let calculator = PotentialCalculator::new(&top);

    let spec = skylake_like();
    assert_eq!(calculator.compute(&spec), compute(&spec));
}

#[test]
fn calculator_logs_steps() {
    let (test_tracker, tracker) = test_init!(1);
    let top = toplevel(&tracker, "rankine");
    let calculator = PotentialCalculator::new(&top);
    check_and_clear(
        &test_tracker,
        &["1: rankine added", "2: rankine::potential added"],
    );

    calculator.compute(&skylake_like()).unwrap();
    check_and_clear(
        &test_tracker,
        &[
            "2:TRACE: evaluating ChipSpec",
            "2:DEBUG: using the given transistor count of 2000M",
            "2: transistor_count = 2e9",
            r"2: tdp_transistor_count = 1\.68030446",
            "2:DEBUG: power curve bucket 12nm",
            "2:DEBUG: power bound: only part of the die can switch at 3000MHz",
            r"2: bound_transistor_count = 1\.68030446",
            r"2: intrinsic_frequency_mhz = 2\.48756",
            r"2: dynamic_power_w = 4\.31989",
            r"2: static_power_w = 9\.9e-7",
            r"2: throughput = 5\.04091",
            r"2: total_power_w = 2\.70587",
            r"2: cost = 2\.86e9",
        ],
    );
}

#[test]
fn calculator_logs_missing_cost() {
    let (test_tracker, tracker) = test_init!(1);
    let top = toplevel(&tracker, "rankine");
    let calculator = PotentialCalculator::new(&top);
    check_and_clear(
        &test_tracker,
        &["1: rankine added", "2: rankine::potential added"],
    );

    let spec = ChipSpec::new(12, 1000.0, 1.0).with_die_area_mm2(600.0);
    calculator.compute(&spec).unwrap();
    let events = test_tracker.events();
    assert_eq!(
        events.first().map(String::as_str),
        Some("2:TRACE: evaluating ChipSpec { cmos_node_nm: 12, frequency_mhz: 1000.0, tdp_w: 1.0, die_area_mm2: Some(600.0), transistor_count_millions: None }")
    );
    assert!(events.contains(&"2:DEBUG: transistor count estimated from the die area".to_string()));
    assert_eq!(
        events.last().map(String::as_str),
        Some("2:DEBUG: no cost figure for 12nm")
    );
}

#[test]
fn calculator_propagates_errors() {
    let (test_tracker, tracker) = test_init!(1);
    let top = toplevel(&tracker, "rankine");
    let calculator = PotentialCalculator::new(&top);
    check_and_clear(
        &test_tracker,
        &["1: rankine added", "2: rankine::potential added"],
    );

    let spec = ChipSpec::new(14, 1000.0, 50.0);
    assert!(calculator.compute(&spec).is_err());
    check_and_clear(&test_tracker, &["2:TRACE: evaluating ChipSpec"]);
}
