// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Transistor count estimated from die area.
//!
//! The number of transistors that fit on a die is taken to be a power law of
//! the density factor `die_area / feature_size²`.

use crate::regression::RegressionCurve;
use crate::types::NodeNm;

/// The single global density curve.
pub const DENSITY_CURVE: RegressionCurve = RegressionCurve::new(0.87650569, 22.33031902);

/// Die area divided by the square of the feature size.
#[must_use]
pub fn density_factor(die_area_mm2: f64, node_nm: NodeNm) -> f64 {
    let node_nm = f64::from(node_nm);
    die_area_mm2 / (node_nm * node_nm)
}

/// Estimate the total transistor count of a die.
///
/// The result is real-valued; fractional counts are kept until the estimates
/// are combined. `die_area_mm2` must be positive.
#[must_use]
pub fn estimate_from_area(die_area_mm2: f64, node_nm: NodeNm) -> f64 {
    debug_assert!(die_area_mm2 > 0.0);
    DENSITY_CURVE.evaluate(density_factor(die_area_mm2, node_nm))
}
