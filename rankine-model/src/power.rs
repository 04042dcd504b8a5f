// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Effective transistor count under a thermal budget.
//!
//! Power-restricted transistor budgets follow a different power law in each
//! technology generation, so the curves are bucketed by node. A bucket covers
//! all nodes from its lower bound up to (but excluding) the next higher bound.

use serde::Serialize;

use crate::invariant_error;
use crate::regression::RegressionCurve;
use crate::types::{ModelResult, NodeNm};

/// A power-law curve and the smallest node it applies to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PowerBucket {
    pub lower_bound_nm: NodeNm,
    pub curve: RegressionCurve,
}

const fn bucket(lower_bound_nm: NodeNm, exponent: f64, log_coefficient: f64) -> PowerBucket {
    PowerBucket {
        lower_bound_nm,
        curve: RegressionCurve::new(exponent, log_coefficient),
    }
}

/// Buckets sorted by ascending lower bound.
#[rustfmt::skip]
pub const POWER_BUCKETS: [PowerBucket; 6] = [
    bucket(5,   0.401658287972, 21.4891760308), // 10nm-5nm
    bucket(12,  0.557376653843, 20.0141471218), // 22nm-12nm
    bucket(28,  0.728781502506, 18.4867193491), // 32nm-28nm
    bucket(40,  0.869396475567, 16.8439598602), // 55nm-40nm
    bucket(65,  1.0858064719,   15.4524644369), // 130nm-65nm
    bucket(150, 1.35608520112,  14.175921764),  // 180nm-150nm
];

/// Select the bucket with the largest lower bound that does not exceed
/// `node_nm`.
pub fn power_bucket_for(node_nm: NodeNm) -> ModelResult<&'static PowerBucket> {
    bucket_in(&POWER_BUCKETS, node_nm)
}

fn bucket_in(
    buckets: &'static [PowerBucket],
    node_nm: NodeNm,
) -> ModelResult<&'static PowerBucket> {
    let num_applicable = buckets.partition_point(|b| b.lower_bound_nm <= node_nm);
    match num_applicable.checked_sub(1) {
        Some(idx) => Ok(&buckets[idx]),
        None => invariant_error!(
            "no power curve covers {node_nm}nm (smallest bucket bound is {}nm)",
            buckets.first().map_or(0, |b| b.lower_bound_nm)
        ),
    }
}

/// Estimate how many transistors a thermal budget of `tdp_w` can keep active
/// at `frequency_mhz`.
///
/// Higher clock frequencies divide the budget: a design run faster needs
/// proportionally fewer transistors to reach the same thermal ceiling.
pub fn estimate_from_tdp(node_nm: NodeNm, frequency_mhz: f64, tdp_w: f64) -> ModelResult<f64> {
    debug_assert!(frequency_mhz > 0.0 && tdp_w > 0.0);
    let bucket = power_bucket_for(node_nm)?;
    let frequency_ghz = frequency_mhz / 1e3;
    Ok(bucket.curve.evaluate(tdp_w) / frequency_ghz)
}
