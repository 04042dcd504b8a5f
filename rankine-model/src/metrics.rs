// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Figures of merit derived from a potential result.
//!
//! Ratios that need an input the user did not supply (die area) or a figure
//! the node does not have (cost) are left out rather than defaulted.

use serde::Serialize;

use crate::potential::{ChipSpec, PotentialResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub delay: f64,
    pub energy: f64,
    pub throughput_per_power: f64,
    pub energy_delay_product: f64,
    pub energy_delay2_product: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_per_area: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_per_power_per_area: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_per_cost: Option<f64>,
}

impl DerivedMetrics {
    #[must_use]
    pub fn new(spec: &ChipSpec, result: &PotentialResult) -> Self {
        let delay = 1.0 / result.throughput;
        let energy = result.total_power_w * delay;
        let throughput_per_power = result.throughput / result.total_power_w;
        let energy_delay_product = energy * delay;
        let energy_delay2_product = energy_delay_product * delay;

        Self {
            delay,
            energy,
            throughput_per_power,
            energy_delay_product,
            energy_delay2_product,
            throughput_per_area: spec.die_area_mm2.map(|area| result.throughput / area),
            throughput_per_power_per_area: spec
                .die_area_mm2
                .map(|area| throughput_per_power / area),
            throughput_per_cost: result.cost.map(|cost| result.throughput / cost),
        }
    }
}
