// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The potential calculator.
//!
//! Combines the process table with the density and power estimators into the
//! throughput, power and cost potential of a single monolithic chip.
//!
//! Only part of a chip can be active at once: the number of transistors that
//! switch is bounded by whichever is smaller of the transistors present on the
//! die and the transistors the thermal budget can sustain. Leakage and cost
//! however are paid for by every transistor present.
//!
//! # Example
//!
//! ```rust
//! use rankine_model::potential::{ChipSpec, compute};
//!
//! let spec = ChipSpec::new(14, 3000.0, 65.0).with_transistor_count_millions(2000.0);
//! let result = compute(&spec).unwrap();
//! assert!(result.bound_transistor_count < result.transistor_count);
//! ```

use std::rc::Rc;

use rankine_track::entity::Entity;
use rankine_track::{debug, trace, value};
use serde::Serialize;

use crate::types::{ModelError, ModelResult, NodeNm};
use crate::{density, model_error, power, process};

/// The description of a chip to evaluate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChipSpec {
    pub cmos_node_nm: NodeNm,
    pub frequency_mhz: f64,
    pub tdp_w: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub die_area_mm2: Option<f64>,

    /// Explicit transistor count in millions. Takes priority over the die
    /// area when both are given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transistor_count_millions: Option<f64>,
}

impl ChipSpec {
    #[must_use]
    pub fn new(cmos_node_nm: NodeNm, frequency_mhz: f64, tdp_w: f64) -> Self {
        Self {
            cmos_node_nm,
            frequency_mhz,
            tdp_w,
            die_area_mm2: None,
            transistor_count_millions: None,
        }
    }

    #[must_use]
    pub fn with_die_area_mm2(mut self, die_area_mm2: f64) -> Self {
        self.die_area_mm2 = Some(die_area_mm2);
        self
    }

    #[must_use]
    pub fn with_transistor_count_millions(mut self, count_millions: f64) -> Self {
        self.transistor_count_millions = Some(count_millions);
        self
    }

    /// Check that the spec can be evaluated.
    ///
    /// The node must be in the process table, every supplied number must be
    /// finite and strictly positive, and at least one of the transistor count
    /// or die area must be given.
    pub fn validate(&self) -> ModelResult<()> {
        if self.transistor_count_millions.is_none() && self.die_area_mm2.is_none() {
            return Err(ModelError::MissingRequiredInput(
                "please provide either chip transistor count or chip die area.".to_string(),
            ));
        }
        process::lookup(self.cmos_node_nm)?;

        check_positive("chip frequency", "MHz", self.frequency_mhz)?;
        check_positive("thermal design power", "W", self.tdp_w)?;
        if let Some(area) = self.die_area_mm2 {
            check_positive("chip die area", "mm^2", area)?;
        }
        if let Some(count) = self.transistor_count_millions {
            check_positive("chip transistor count", "M", count)?;
        }
        Ok(())
    }
}

fn check_positive(name: &str, units: &str, value: f64) -> ModelResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return model_error!("{name} must be a positive number, got {value}{units}");
    }
    Ok(())
}

/// The potential of a chip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PotentialResult {
    /// Transistor switches per second (transistors × MHz).
    pub throughput: f64,

    /// Transistors present on the die.
    pub transistor_count: f64,

    /// Manufacturing cost, absent when the node has no cost figure.
    pub cost: Option<f64>,

    pub total_power_w: f64,

    /// Transistors the thermal budget can keep switching.
    pub tdp_transistor_count: f64,

    /// Transistors actually switching.
    pub bound_transistor_count: f64,

    /// Lower bound of the power curve bucket used.
    pub power_bucket_nm: NodeNm,

    pub intrinsic_frequency_mhz: f64,

    /// Per-transistor dynamic power at the requested frequency.
    pub dynamic_power_w: f64,

    /// Per-transistor leakage power.
    pub static_power_w: f64,
}

/// Compute the potential of a chip.
///
/// The spec is validated first. The calculation has no side effects so
/// repeated calls return identical results.
pub fn compute(spec: &ChipSpec) -> ModelResult<PotentialResult> {
    spec.validate()?;
    let characteristics = process::lookup(spec.cmos_node_nm)?;
    let node_nm = spec.cmos_node_nm;

    let transistor_count = match (spec.transistor_count_millions, spec.die_area_mm2) {
        (Some(count_millions), _) => count_millions * 1e6,
        (None, Some(area)) => density::estimate_from_area(area, node_nm),
        (None, None) => {
            return Err(ModelError::MissingRequiredInput(
                "please provide either chip transistor count or chip die area.".to_string(),
            ));
        }
    };

    let power_bucket_nm = power::power_bucket_for(node_nm)?.lower_bound_nm;
    let tdp_transistor_count = power::estimate_from_tdp(node_nm, spec.frequency_mhz, spec.tdp_w)?;
    let bound_transistor_count = tdp_transistor_count.min(transistor_count);

    let intrinsic_frequency_mhz = characteristics.intrinsic_frequency_mhz();
    let throughput = bound_transistor_count * spec.frequency_mhz;

    let dynamic_power_w = characteristics.dynamic_power_uw
        * (spec.frequency_mhz / intrinsic_frequency_mhz)
        * 1e-6;
    let static_power_w = characteristics.leakage_power_uw * 1e-6;
    let total_power_w =
        bound_transistor_count * dynamic_power_w + transistor_count * static_power_w;

    let cost = characteristics
        .cost_per_transistor
        .map(|cost_per_transistor| transistor_count * cost_per_transistor);

    Ok(PotentialResult {
        throughput,
        transistor_count,
        cost,
        total_power_w,
        tdp_transistor_count,
        bound_transistor_count,
        power_bucket_nm,
        intrinsic_frequency_mhz,
        dynamic_power_w,
        static_power_w,
    })
}

/// A calculator that reports its intermediate figures through a tracker.
pub struct PotentialCalculator {
    pub entity: Rc<Entity>,
}

impl PotentialCalculator {
    #[must_use]
    pub fn new(parent: &Rc<Entity>) -> Self {
        Self {
            entity: Rc::new(Entity::new(parent, "potential")),
        }
    }

    /// Compute the potential as [`compute`] does, logging each step.
    pub fn compute(&self, spec: &ChipSpec) -> ModelResult<PotentialResult> {
        trace!(self.entity ; "evaluating {spec:?}");
        let result = compute(spec)?;

        match spec.transistor_count_millions {
            Some(count) => {
                debug!(self.entity ; "using the given transistor count of {count}M");
            }
            None => {
                debug!(self.entity ; "transistor count estimated from the die area");
            }
        }
        value!(self.entity ; "transistor_count", result.transistor_count);
        value!(self.entity ; "tdp_transistor_count", result.tdp_transistor_count);
        debug!(self.entity ; "power curve bucket {}nm", result.power_bucket_nm);
        if result.tdp_transistor_count < result.transistor_count {
            debug!(self.entity ; "power bound: only part of the die can switch at {}MHz", spec.frequency_mhz);
        }
        value!(self.entity ; "bound_transistor_count", result.bound_transistor_count);
        value!(self.entity ; "intrinsic_frequency_mhz", result.intrinsic_frequency_mhz);
        value!(self.entity ; "dynamic_power_w", result.dynamic_power_w);
        value!(self.entity ; "static_power_w", result.static_power_w);
        value!(self.entity ; "throughput", result.throughput);
        value!(self.entity ; "total_power_w", result.total_power_w);
        match result.cost {
            Some(cost) => value!(self.entity ; "cost", cost),
            None => {
                debug!(self.entity ; "no cost figure for {}nm", spec.cmos_node_nm);
            }
        }
        Ok(result)
    }
}
