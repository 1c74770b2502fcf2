use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_dpcrqc::cli::{Cli, Commands, PlateCommand, PlateShowArgs, RunArgs};
use kira_dpcrqc::ctx::Ctx;
use kira_dpcrqc::io;
use kira_dpcrqc::math::copy_number;
use kira_dpcrqc::pipeline::Pipeline;
use kira_dpcrqc::plate::{self, Plate};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Plate(args) => match args.command {
            PlateCommand::Show(show) => handle_plate_show(show)?,
        },
        Commands::Estimate(args) => {
            let estimate = copy_number::estimate(args.positive, args.total, args.droplet_volume)?;
            println!("lambda: {:.6}", estimate.lambda);
            println!("Copies/uL: {:.2}", estimate.copies_per_ul);
        }
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let plate = plate::plate_from_specs(&args.wells)?;
    let mut ctx = Ctx::new(
        plate,
        args.threshold,
        args.droplet_volume,
        !args.no_outliers,
        args.json,
        env!("CARGO_PKG_VERSION"),
    );

    Pipeline::standard().run(&mut ctx)?;

    if ctx.write_json {
        io::write_json(std::io::stdout().lock(), &ctx.report)?;
    } else {
        print!("{}", io::summary::format_summary(&ctx)?);
    }
    Ok(())
}

fn handle_plate_show(args: PlateShowArgs) -> Result<()> {
    let plate = plate::plate_from_specs(&args.wells)?;
    print_plate(&plate);
    Ok(())
}

fn print_plate(plate: &Plate) {
    println!(
        "plate ({} wells, {} readings):",
        plate.wells().len(),
        plate.total_values()
    );
    for well in plate.wells() {
        let min = well.values().iter().copied().reduce(f64::min);
        let max = well.values().iter().copied().reduce(f64::max);
        match (min, max) {
            (Some(min), Some(max)) => {
                println!("{}\t{}\t{}\t{}", well.name(), well.len(), min, max)
            }
            _ => println!("{}\t0\t-\t-", well.name()),
        }
    }
}
