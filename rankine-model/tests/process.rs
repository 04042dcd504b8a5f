// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use approx::assert_relative_eq;
use rankine_model::process::{is_supported, lookup, supported_nodes};
use rankine_model::types::ModelError;

const ALL_NODES: [u32; 20] = [
    5, 7, 10, 12, 14, 16, 20, 22, 28, 32, 40, 45, 55, 65, 80, 90, 110, 130, 150, 180,
];

#[test]
fn supported_nodes_sorted() {
    assert_eq!(supported_nodes(), ALL_NODES.to_vec());
}

#[test]
fn every_node_is_complete() {
    for node_nm in supported_nodes() {
        let c = lookup(node_nm).unwrap();
        assert_eq!(c.node_nm, node_nm);
        assert!(c.intrinsic_latency_ps > 0.0, "{node_nm}nm");
        assert!(c.switching_energy_fj > 0.0, "{node_nm}nm");
        assert!(c.dynamic_power_uw >= 0.0, "{node_nm}nm");
        assert!(c.leakage_power_uw >= 0.0, "{node_nm}nm");
        assert!(is_supported(node_nm));
    }
}

#[test]
fn node_14() {
    let c = lookup(14).unwrap();
    assert_relative_eq!(c.switching_energy_fj, 0.14);
    assert_relative_eq!(c.dynamic_power_uw, 35.82);
    assert_relative_eq!(c.leakage_power_uw, 0.99);
    assert_relative_eq!(c.intrinsic_latency_ps, 4.02);
    assert_eq!(c.supply_voltage_v, Some(0.86));
    assert_eq!(c.cost_per_transistor, Some(1.43));
    assert_relative_eq!(c.intrinsic_frequency_mhz(), 248756.21890547266, max_relative = 1e-12);
}

#[test]
fn node_180() {
    let c = lookup(180).unwrap();
    assert_relative_eq!(c.dynamic_power_uw, 356.22);
    assert_relative_eq!(c.leakage_power_uw, 105.0);
    assert_relative_eq!(c.intrinsic_latency_ps, 77.2);
    assert_eq!(c.cost_per_transistor, None);
}

#[test]
fn node_40_has_no_voltage() {
    let c = lookup(40).unwrap();
    assert_eq!(c.supply_voltage_v, None);
    assert_eq!(c.cost_per_transistor, Some(1.94));
}

#[test]
fn unsupported_nodes() {
    for node_nm in [0, 3, 6, 99, 100, 181, 250] {
        assert!(!is_supported(node_nm));
        match lookup(node_nm) {
            Err(ModelError::UnsupportedNode { node_nm: n, supported }) => {
                assert_eq!(n, node_nm);
                assert_eq!(supported, ALL_NODES.to_vec());
            }
            other => panic!("Expected UnsupportedNode for {node_nm}nm, got {other:?}"),
        }
    }
}

#[test]
#[should_panic(
    expected = "Error: Unsupported CMOS node 99nm. Supported nodes are: 5,7,10,12,14,16,20,22,28,32,40,45,55,65,80,90,110,130,150,180"
)]
fn unsupported_node_message() {
    if let Err(e) = lookup(99) {
        panic!("{e}");
    }
}
