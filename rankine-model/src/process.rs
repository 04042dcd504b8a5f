// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The process technology table.
//!
//! Device scaling figures combine the circuit-level characterisation of
//! Stillmaker and Baas ("Scaling equations for the accurate prediction of CMOS
//! device performance from 180 nm to 7 nm", Integration 2017) with projections
//! from the IRDS 2017 roadmap. Manufacturing costs come from the FD-SOI cost
//! study in EE Times and the Moonwalk ASIC cloud paper (ASPLOS 2017).
//!
//! Nodes are discrete: a lookup succeeds only for an exact key and there is no
//! interpolation between nodes.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::types::{ModelError, ModelResult, NodeNm};

/// Per-transistor electrical characteristics of one CMOS node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProcessCharacteristics {
    pub node_nm: NodeNm,

    /// Energy per transistor switching event.
    pub switching_energy_fj: f64,

    /// Dynamic power at the node's intrinsic frequency.
    pub dynamic_power_uw: f64,

    /// Leakage power, independent of frequency.
    pub leakage_power_uw: f64,

    /// Native gate delay of the node.
    pub intrinsic_latency_ps: f64,

    /// Informational only; not used by the calculator.
    pub supply_voltage_v: Option<f64>,

    /// Manufacturing cost per transistor where a figure is known.
    pub cost_per_transistor: Option<f64>,
}

impl ProcessCharacteristics {
    /// The frequency at which the node's power figures were characterised.
    #[must_use]
    pub fn intrinsic_frequency_mhz(&self) -> f64 {
        1e6 / self.intrinsic_latency_ps
    }
}

const fn node(
    node_nm: NodeNm,
    switching_energy_fj: f64,
    dynamic_power_uw: f64,
    leakage_power_uw: f64,
    intrinsic_latency_ps: f64,
    supply_voltage_v: Option<f64>,
    cost_per_transistor: Option<f64>,
) -> ProcessCharacteristics {
    ProcessCharacteristics {
        node_nm,
        switching_energy_fj,
        dynamic_power_uw,
        leakage_power_uw,
        intrinsic_latency_ps,
        supply_voltage_v,
        cost_per_transistor,
    }
}

#[rustfmt::skip]
const PROCESS_NODES: [ProcessCharacteristics; 20] = [
    //   nm    fJ     dyn uW  leak uW  ps     Vdd         cost
    node(180, 27.5,  356.22, 105.0,  77.2,  Some(1.8),  None),
    node(150, 11.96, 231.04, 50.0,   51.76, Some(1.47), Some(7.91)),
    node(130, 5.2,   149.86, 26.1,   34.7,  Some(1.2),  Some(5.63)),
    node(110, 3.69,  121.72, 18.42,  30.32, Some(1.15), Some(4.75)),
    node(90,  2.62,  98.87,  13.0,   26.5,  Some(1.1),  Some(4.01)),
    node(80,  2.12,  92.67,  10.56,  22.91, Some(1.1),  None),
    node(65,  1.72,  86.87,  8.58,   19.8,  Some(1.05), Some(2.82)),
    node(55,  1.34,  91.48,  6.67,   14.69, Some(1.01), Some(2.34)),
    node(45,  1.05,  96.33,  5.19,   10.9,  Some(0.97), Some(1.94)),
    node(40,  1.0,   94.34,  5.0,    10.6,  None,       Some(1.94)),
    node(32,  0.51,  52.04,  2.47,   9.8,   Some(0.97), Some(1.94)),
    node(28,  0.45,  46.39,  2.13,   9.7,   Some(0.93), Some(1.3)),
    node(22,  0.3,   30.84,  1.79,   9.68,  Some(0.92), Some(1.67)),
    node(20,  0.2,   20.5,   1.51,   9.66,  Some(0.9),  Some(1.54)),
    node(16,  0.18,  29.25,  1.28,   6.12,  Some(0.88), Some(1.43)),
    node(14,  0.14,  35.82,  0.99,   4.02,  Some(0.86), Some(1.43)),
    node(12,  0.13,  36.73,  0.93,   3.61,  Some(0.8),  None),
    node(10,  0.12,  37.65,  0.87,   3.24,  Some(0.75), Some(1.45)),
    node(7,   0.11,  44.94,  0.79,   2.47,  Some(0.7),  Some(1.52)),
    node(5,   0.1,   46.83,  0.72,   2.16,  Some(0.65), Some(1.65)),
];

/// The frozen node table, built on first use and never mutated.
static PROCESS_TABLE: LazyLock<BTreeMap<NodeNm, ProcessCharacteristics>> =
    LazyLock::new(|| PROCESS_NODES.iter().map(|c| (c.node_nm, *c)).collect());

/// Look up the characteristics of a node.
///
/// Fails with [`ModelError::UnsupportedNode`] unless `node_nm` is an exact key.
pub fn lookup(node_nm: NodeNm) -> ModelResult<&'static ProcessCharacteristics> {
    PROCESS_TABLE
        .get(&node_nm)
        .ok_or_else(|| ModelError::UnsupportedNode {
            node_nm,
            supported: supported_nodes(),
        })
}

/// All supported nodes, sorted ascending.
#[must_use]
pub fn supported_nodes() -> Vec<NodeNm> {
    PROCESS_TABLE.keys().copied().collect()
}

#[must_use]
pub fn is_supported(node_nm: NodeNm) -> bool {
    PROCESS_TABLE.contains_key(&node_nm)
}
