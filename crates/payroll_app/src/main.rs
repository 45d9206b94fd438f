mod cli;
mod config;

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use log::LevelFilter;
use payroll_core::PayPeriod;
use payroll_engine::FetchSettings;
use payroll_logging::{payroll_error, payroll_info, LogDestination};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    payroll_logging::initialize(destination, level);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            payroll_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every desk completed.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = config::load_config(cli.config.as_deref())?;
    config::apply_overrides(&mut config, &cli)?;

    if cli.print_config {
        println!("{}", config::render_config(&config)?);
        return Ok(true);
    }

    let period = cli
        .period
        .unwrap_or_else(|| PayPeriod::previous_of(Local::now().date_naive()));
    payroll_info!("Computing pays for {} {}", period.month_name(), period.year());

    let settings = FetchSettings::with_api_base(config.api_base.clone());
    let results = payroll_engine::run_blocking(&config, period, cli.output_dir.clone(), settings)?;

    let mut all_ok = true;
    for result in results {
        match result {
            Ok(summary) => payroll_info!(
                "{} desk: {} posts, {} writers paid, total {}{}",
                summary.desk,
                summary.posts,
                summary.sheets,
                summary.total,
                summary
                    .output_path
                    .map(|p| format!(" -> {}", p.display()))
                    .unwrap_or_default()
            ),
            Err(err) => {
                payroll_error!("{}", err);
                all_ok = false;
            }
        }
    }

    if all_ok {
        payroll_info!("Done!");
    }
    Ok(all_ok)
}
