// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The Rankine command-line front end.
//!
//! Takes the chip description from the [configuration](crate::config), warns
//! about inputs outside the fitted datasets, evaluates the potential of the
//! chip and builds the [report](crate::report).

use rankine_model::advisory::check_ranges;
use rankine_model::potential::PotentialCalculator;
use rankine_model::types::ModelResult;
use rankine_track::entity::toplevel;
use rankine_track::{Tracker, info, warn};

pub mod config;
pub mod report;

use config::Config;
use report::Report;

/// Name of the top-level entity.
pub const TOP_ENTITY: &str = "rankine";

/// Evaluate the chip described by `config`.
pub fn run(config: &Config, tracker: &Tracker) -> ModelResult<Report> {
    let spec = config.to_chip_spec()?;
    let top = toplevel(tracker, TOP_ENTITY);
    info!(top ; "evaluating a {}nm chip at {}MHz and {}W", spec.cmos_node_nm, spec.frequency_mhz, spec.tdp_w);

    let advisories = check_ranges(&spec);
    for advisory in &advisories {
        warn!(top ; "{advisory}");
    }

    let calculator = PotentialCalculator::new(&top);
    let result = calculator.compute(&spec)?;
    Ok(Report::new(spec, result, advisories))
}
