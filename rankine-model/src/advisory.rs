// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Warnings for inputs outside the range of the fitted datasets.
//!
//! The regression curves were fitted on a finite set of processors. Inputs
//! outside that set are still evaluated, but the figures are extrapolated.

use std::fmt;

use serde::Serialize;

use crate::potential::ChipSpec;

/// The inclusive range of a quantity covered by the fitted datasets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SupportedRange {
    pub name: &'static str,
    pub units: &'static str,
    pub min: f64,
    pub max: f64,
}

impl SupportedRange {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const TDP_RANGE: SupportedRange = SupportedRange {
    name: "TDP",
    units: "W",
    min: 1.0,
    max: 300.0,
};

pub const NODE_RANGE: SupportedRange = SupportedRange {
    name: "CMOS node",
    units: "nm",
    min: 10.0,
    max: 180.0,
};

pub const FREQUENCY_RANGE: SupportedRange = SupportedRange {
    name: "frequency",
    units: "MHz",
    min: 50.0,
    max: 3000.0,
};

pub const DIE_AREA_RANGE: SupportedRange = SupportedRange {
    name: "die area",
    units: "mm2",
    min: 10.0,
    max: 600.0,
};

/// A supplied value that lies outside its supported range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeAdvisory {
    pub range: SupportedRange,
    pub value: f64,
}

impl fmt::Display for RangeAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "out of the evaluated processor datasheets, only few (or none) had a {} of {}{}. \
             The generated factors are the result of extrapolation (hence accuracy might be affected)",
            self.range.name, self.value, self.range.units
        )
    }
}

/// Return one advisory for each supplied value outside its range.
///
/// The die area is only checked when it was given.
#[must_use]
pub fn check_ranges(spec: &ChipSpec) -> Vec<RangeAdvisory> {
    let mut checks = vec![
        (TDP_RANGE, spec.tdp_w),
        (NODE_RANGE, f64::from(spec.cmos_node_nm)),
        (FREQUENCY_RANGE, spec.frequency_mhz),
    ];
    if let Some(area) = spec.die_area_mm2 {
        checks.push((DIE_AREA_RANGE, area));
    }

    checks
        .into_iter()
        .filter(|(range, value)| !range.contains(*value))
        .map(|(range, value)| RangeAdvisory { range, value })
        .collect()
}
