// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Power-law regression curves.
//!
//! The curves were fitted offline using linear regression in log space on
//! data points extracted from the datasheets of thousands of commercial
//! processors (CPU DB and the TechPowerUp CPU/GPU databases).

use serde::Serialize;

/// A curve of the form `count = exp(log_coefficient) * x^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegressionCurve {
    pub exponent: f64,
    pub log_coefficient: f64,
}

impl RegressionCurve {
    #[must_use]
    pub const fn new(exponent: f64, log_coefficient: f64) -> Self {
        Self {
            exponent,
            log_coefficient,
        }
    }

    /// Evaluate the curve at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.log_coefficient.exp() * x.powf(self.exponent)
    }
}
