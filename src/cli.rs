use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, info, warn};

use crate::api::CalculateResponse;
use crate::calculator::{Calculation, RawDimensions, calculate};

#[derive(Parser, Debug)]
#[command(author, version, about = "Counts how many box nets can be cut from a sheet")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[arg(
        short,
        long,
        global = true,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API (default)
    Serve,
    /// Run a single calculation and print the result
    Calculate(CalculateArgs),
}

#[derive(Args, Debug)]
pub struct CalculateArgs {
    #[arg(allow_negative_numbers = true)]
    pub sheet_length: String,
    #[arg(allow_negative_numbers = true)]
    pub sheet_width: String,
    #[arg(allow_negative_numbers = true)]
    pub box_length: String,
    #[arg(allow_negative_numbers = true)]
    pub box_width: String,
    #[arg(allow_negative_numbers = true)]
    pub box_height: String,
    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CalculateArgs {
    fn raw_dimensions(&self) -> RawDimensions {
        RawDimensions {
            sheet_length: self.sheet_length.clone(),
            sheet_width: self.sheet_width.clone(),
            box_length: self.box_length.clone(),
            box_width: self.box_width.clone(),
            box_height: self.box_height.clone(),
        }
    }
}

pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Runs the `calculate` subcommand, writing the result to stdout.
pub fn run_calculate(args: &CalculateArgs) -> Result<()> {
    let calculation = match calculate(&args.raw_dimensions()) {
        Ok(calculation) => calculation,
        Err(err) => {
            warn!("⚠️ Invalid input: {}", err);
            return Err(err.into());
        }
    };
    info!(
        "📦 Result: {} nets ({})",
        calculation.total_nets(),
        calculation.plan.best.orientation
    );

    if args.json {
        let response = CalculateResponse::from_calculation(&calculation);
        let json =
            serde_json::to_string_pretty(&response).context("could not serialize result")?;
        println!("{json}");
    } else {
        print!("{}", format_report(&calculation));
    }
    Ok(())
}

/// Human-readable summary of a calculation, one item per line.
pub fn format_report(calculation: &Calculation) -> String {
    let mut report = format!(
        "Net size: {} × {}\n",
        calculation.net.width(),
        calculation.net.height()
    );
    for layout in calculation.plan.layouts() {
        report.push_str(&format!(
            "  {:<16} {} per row × {} rows = {}\n",
            layout.orientation.to_string(),
            layout.nets_per_row,
            layout.nets_per_col,
            layout.count
        ));
    }
    report.push_str(&format!("Total nets: {}\n", calculation.total_nets()));
    report.push_str(&format!(
        "Sheet utilization: {:.1}%\n",
        calculation.utilization_percent()
    ));
    if let Some(notice) = calculation.notice() {
        report.push_str(&format!("⚠️ {notice}\n"));
    }
    report
}
