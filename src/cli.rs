use clap::{Args, Parser, Subcommand};

use crate::plate::{DEFAULT_DROPLET_VOLUME, DEFAULT_THRESHOLD};

#[derive(Debug, Parser)]
#[command(name = "kira-dpcrqc", version, about = "Digital PCR plate QC")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Plate(PlateArgs),
    Estimate(EstimateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long = "well",
        value_name = "NAME=V1,V2,...",
        help = "Well readings (repeatable); the demo plate is used when omitted"
    )]
    pub wells: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_THRESHOLD, help = "Positive droplet intensity cutoff")]
    pub threshold: f64,

    #[arg(long, default_value_t = DEFAULT_DROPLET_VOLUME, help = "Droplet volume in liters")]
    pub droplet_volume: f64,

    #[arg(long, default_value_t = false, help = "Omit outliers from the output")]
    pub no_outliers: bool,

    #[arg(long, default_value_t = false, help = "Print the JSON report instead of the summary")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PlateArgs {
    #[command(subcommand)]
    pub command: PlateCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlateCommand {
    Show(PlateShowArgs),
}

#[derive(Debug, Args)]
pub struct PlateShowArgs {
    #[arg(long = "well", value_name = "NAME=V1,V2,...")]
    pub wells: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    #[arg(long, help = "Positive droplet count")]
    pub positive: u64,

    #[arg(long, help = "Total droplet count")]
    pub total: u64,

    #[arg(long, default_value_t = DEFAULT_DROPLET_VOLUME, help = "Droplet volume in liters")]
    pub droplet_volume: f64,
}
