// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! A closed-form model of the potential of a monolithic CMOS chip.
//!
//! Given a process node, a clock frequency, a thermal design power and either
//! a transistor count or a die area, the model estimates:
//!
//!  - the _throughput_: how many transistor switches per second the chip
//!    can sustain.
//!  - the _power_: the dynamic power of the switching transistors plus the
//!    leakage of every transistor on the die.
//!  - the _cost_: the manufacturing cost of the transistors, where known.
//!
//! From these a set of [derived metrics](crate::metrics) is computed. The
//! model is built from:
//!
//!  - a [process technology table](crate::process) of per-transistor figures.
//!  - a [density estimator](crate::density) mapping die area to transistors.
//!  - a [power estimator](crate::power) mapping a thermal budget to the
//!    transistors it can keep switching.
//!  - the [calculator](crate::potential) that combines them.
//!
//! Inputs outside the datasets the estimators were fitted on produce
//! [range advisories](crate::advisory).

pub mod advisory;
pub mod density;
pub mod metrics;
pub mod potential;
pub mod power;
pub mod process;
pub mod regression;
pub mod types;

/// Version of the model constants.
pub const RANKINE_VERSION: &str = "0.1";
