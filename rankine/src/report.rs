// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Rendering of the potential report.

use rankine_model::RANKINE_VERSION;
use rankine_model::advisory::RangeAdvisory;
use rankine_model::metrics::DerivedMetrics;
use rankine_model::potential::{ChipSpec, PotentialResult};
use serde::Serialize;

use crate::config::OutputFormat;

const RULE: &str =
    "**************************************************************************";

/// Everything known about one evaluated chip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub version: &'static str,
    pub spec: ChipSpec,
    pub result: PotentialResult,
    pub metrics: DerivedMetrics,
    pub advisories: Vec<RangeAdvisory>,
}

impl Report {
    #[must_use]
    pub fn new(spec: ChipSpec, result: PotentialResult, advisories: Vec<RangeAdvisory>) -> Self {
        let metrics = DerivedMetrics::new(&spec, &result);
        Self {
            version: RANKINE_VERSION,
            spec,
            result,
            metrics,
            advisories,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_yaml::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Yaml => serde_yaml::to_string(self),
        }
    }

    /// The human-readable summary.
    ///
    /// Advisories are not included as they are emitted through the tracker.
    #[must_use]
    pub fn render_text(&self) -> String {
        let spec = &self.spec;
        let metrics = &self.metrics;

        let mut chip = String::new();
        if let Some(area) = spec.die_area_mm2 {
            chip.push_str(&format!("{area}mm^2 "));
        }
        chip.push_str(&format!(
            "{}nm chip with {} transistors clocked at: {}MHz.",
            spec.cmos_node_nm,
            format_count(self.result.transistor_count),
            spec.frequency_mhz
        ));

        let mut lines = vec![
            RULE.to_string(),
            format!("              RANKINE v{RANKINE_VERSION}: A CMOS Potential Modeling Tool"),
            RULE.to_string(),
            "                                 REPORT".to_string(),
            RULE.to_string(),
            chip,
            format!("The thermal design power is: {}W.", spec.tdp_w),
            RULE.to_string(),
            "                             Potential Factors".to_string(),
            RULE.to_string(),
        ];

        let factors = [
            ("Throughput", Some(self.result.throughput)),
            ("Throughput per Power", Some(metrics.throughput_per_power)),
            ("Throughput per Area", metrics.throughput_per_area),
            (
                "Throughput per Power per Area",
                metrics.throughput_per_power_per_area,
            ),
            ("Throughput per Cost", metrics.throughput_per_cost),
            ("Energy", Some(metrics.energy)),
            ("EDP", Some(metrics.energy_delay_product)),
            ("ED^2P", Some(metrics.energy_delay2_product)),
        ];
        for (name, value) in factors {
            if let Some(value) = value {
                lines.push(format!("{name}: {}", format_value(value)));
            }
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

/// Humanise a transistor count, for example `2.77 Billion`.
///
/// Counts are rounded to two decimal places.
#[must_use]
pub fn format_count(count: f64) -> String {
    let (scaled, suffix) = if count >= 1e9 {
        (count / 1e9, " Billion")
    } else if count >= 1e6 {
        (count / 1e6, " Million")
    } else if count >= 1e3 {
        (count / 1e3, "K")
    } else {
        (count, "")
    };
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded}{suffix}")
}

/// Very large and very small figures use scientific notation.
#[must_use]
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}
