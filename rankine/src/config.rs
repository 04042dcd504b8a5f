// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The application configuration.
//!
//! Settings are taken from three sources, each overriding the previous one:
//!
//!  1. the built-in defaults.
//!  2. environment variables prefixed with `RANKINE_` (for example
//!     `RANKINE_CMOS_NODE_NM=14` or `RANKINE_FORMAT=yaml`).
//!  3. the command line.
//!
//! Every field is optional so that a source which does not mention a field
//! leaves the value from the previous source in place.

use clap::{Parser, ValueEnum};
use figment::Figment;
use figment::providers::{Env, Serialized};
use rankine_model::potential::ChipSpec;
use rankine_model::process;
use rankine_model::types::{ModelError, ModelResult, NodeNm};
use rankine_track::builder::{TrackerConfig, TrackersConfig};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables that are read.
pub const ENV_PREFIX: &str = "RANKINE_";

/// How the report is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,

    /// Machine-readable YAML document
    Yaml,
}

#[derive(Clone, Debug, PartialEq, Parser, Serialize, Deserialize)]
#[command(
    name = "rankine",
    version,
    about = "RANKINE: A CMOS Potential Modeling Tool",
    long_about = "Estimate the throughput, power and cost potential of a monolithic chip \
                  from its CMOS node, frequency, thermal design power and either its \
                  transistor count or its die area."
)]
pub struct Config {
    /// CMOS technology node [nm]
    #[arg(short = 'n', long = "cmos-node-nm", value_name = "NODE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmos_node_nm: Option<NodeNm>,

    /// Chip transistor count [millions] (mandatory if die area is not provided)
    #[arg(short = 'c', long = "transistor-count", value_name = "COUNT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transistor_count: Option<f64>,

    /// Chip die area [mm^2] (mandatory if transistor count is not provided)
    #[arg(short = 'a', long = "die-area", value_name = "AREA")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub die_area: Option<f64>,

    /// Chip thermal design power (TDP) [W]
    #[arg(short = 't', long = "thermal-design-power", value_name = "POWER")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermal_design_power: Option<f64>,

    /// Chip frequency [MHz]
    #[arg(short = 'f', long = "chip-frequency", value_name = "FREQ")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip_frequency: Option<f64>,

    /// Format of the report [default: text]
    #[arg(long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Level of log message to display [default: warn]
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<log::Level>,

    /// Set a regular expression for which entities should have logging level
    /// set to `--log-level`. Others will have level set to `Warn`.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter_regex: Option<String>,

    /// Write log messages to this file instead of the console.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cmos_node_nm: None,
            transistor_count: None,
            die_area: None,
            thermal_design_power: None,
            chip_frequency: None,
            format: Some(OutputFormat::default()),
            log_level: Some(log::Level::Warn),
            log_filter_regex: Some(String::new()),
            log_file: None,
        }
    }
}

impl Config {
    /// Parse the command line and combine it with the other sources.
    pub fn parse_all_sources() -> Result<Self, figment::Error> {
        Self::from_sources(Self::parse())
    }

    /// Combine the defaults and environment with an already parsed command
    /// line.
    pub fn from_sources(cli: Self) -> Result<Self, figment::Error> {
        let config = Self::figment_to_config()?;
        Ok(Self::clap_merge(config, cli))
    }

    fn figment_to_config() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }

    fn clap_merge(mut config: Self, cli: Self) -> Self {
        if cli.cmos_node_nm.is_some() {
            config.cmos_node_nm = cli.cmos_node_nm;
        }
        if cli.transistor_count.is_some() {
            config.transistor_count = cli.transistor_count;
        }
        if cli.die_area.is_some() {
            config.die_area = cli.die_area;
        }
        if cli.thermal_design_power.is_some() {
            config.thermal_design_power = cli.thermal_design_power;
        }
        if cli.chip_frequency.is_some() {
            config.chip_frequency = cli.chip_frequency;
        }
        if cli.format.is_some() {
            config.format = cli.format;
        }
        if cli.log_level.is_some() {
            config.log_level = cli.log_level;
        }
        if cli.log_filter_regex.is_some() {
            config.log_filter_regex = cli.log_filter_regex;
        }
        if cli.log_file.is_some() {
            config.log_file = cli.log_file;
        }
        config
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Build the chip description from the configuration.
    ///
    /// The required inputs are checked first (node, TDP, frequency, then one
    /// of transistor count or die area), followed by node support and then
    /// the values themselves.
    pub fn to_chip_spec(&self) -> ModelResult<ChipSpec> {
        let cmos_node_nm = required(self.cmos_node_nm, "CMOS node")?;
        let tdp_w = required(self.thermal_design_power, "TDP")?;
        let frequency_mhz = required(self.chip_frequency, "Frequency")?;
        if self.transistor_count.is_none() && self.die_area.is_none() {
            return Err(ModelError::MissingRequiredInput(
                "please provide either chip transistor count or chip die area.".to_string(),
            ));
        }
        process::lookup(cmos_node_nm)?;

        let spec = ChipSpec {
            cmos_node_nm,
            frequency_mhz,
            tdp_w,
            die_area_mm2: self.die_area,
            transistor_count_millions: self.transistor_count,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Tracker settings: log to the file if one is given, otherwise to the
    /// console. Logs go to stderr when the report is YAML so that stdout
    /// remains a parseable document.
    #[must_use]
    pub fn trackers_config(&self) -> TrackersConfig<'_> {
        let level = self.log_level.unwrap_or(log::Level::Warn);
        let filter_regex = self.log_filter_regex.as_deref().unwrap_or("");
        let console = self.log_file.is_none();
        let yaml = self.output_format() == OutputFormat::Yaml;
        TrackersConfig {
            stdout: TrackerConfig {
                enable: console && !yaml,
                level,
                filter_regex,
                file: None,
            },
            stderr: TrackerConfig {
                enable: console && yaml,
                level,
                filter_regex,
                file: None,
            },
            file: TrackerConfig {
                enable: self.log_file.is_some(),
                level,
                filter_regex,
                file: self.log_file.as_deref(),
            },
        }
    }
}

fn required<T>(value: Option<T>, name: &str) -> ModelResult<T> {
    value.ok_or_else(|| ModelError::MissingRequiredInput(format!("{name} was not provided.")))
}
