// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Report the CMOS potential of a chip.
//!
//! For example, run using:
//!   cargo run --bin rankine -- -n 14 -f 3000 -t 65 -c 2000

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::CommandFactory;
use rankine::config::Config;
use rankine_model::types::ModelError;
use rankine_track::builder::setup_trackers;

fn main() -> Result<ExitCode> {
    let config = Config::parse_all_sources()?;
    let tracker = setup_trackers(&config.trackers_config())?;

    let outcome = rankine::run(&config, &tracker);

    // Flush log messages before the report is printed
    tracker.shutdown();

    match outcome {
        Ok(report) => {
            print!("{}", report.render(config.output_format())?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ ModelError::MissingRequiredInput(_)) => {
            eprintln!("{e}");
            Config::command().write_help(&mut io::stderr())?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
