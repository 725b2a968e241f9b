//! Command-line front end for libponto.

use anyhow::Result;
use clap::Parser;
use libponto::{run_file, Ledger, Minutes, Printer, Schedule};
use log::info;

use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ponto", version, about = "Interpret a Pontofile and report the hour bank")]
struct Cli {
    /// Ledger to interpret
    #[arg(default_value = "Pontofile")]
    file: PathBuf,

    /// Expected working time per day
    #[arg(long, value_name = "HH:MM", default_value = "08:00", value_parser = parse_minutes)]
    workday: Minutes,

    /// Lunch break, added to the workday
    #[arg(long, value_name = "HH:MM", default_value = "01:00", value_parser = parse_minutes)]
    lunch: Minutes,

    /// Days this close to a full day leave the bank untouched
    #[arg(long, value_name = "HH:MM", default_value = "00:10", value_parser = parse_minutes)]
    tolerance: Minutes,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn parse_minutes(s: &str) -> Result<Minutes, String> {
    s.parse::<Minutes>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let schedule = Schedule {
        workday: cli.workday,
        lunch: cli.lunch,
        tolerance: cli.tolerance,
    };
    info!("reading {} with {:?}", cli.file.display(), schedule);

    let mut printer = Printer::new(io::stdout().lock());
    printer.banner()?;
    let ledger = run_file(&cli.file, Some(Ledger::with_schedule(schedule)), &mut printer)?;
    printer.summary(&ledger.summary())?;

    Ok(())
}
