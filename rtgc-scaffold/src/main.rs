//! rtgc-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rtgc_scaffold::{observability, report, GenerateCommand, TerminalPrompter};

/// Interactively create the RTGC project directory layout
#[derive(Parser)]
#[command(name = "rtgc-scaffold")]
#[command(version)]
#[command(about = "Create the RTGC project structure", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::print_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    observability::init()?;

    let command = GenerateCommand::from_env()?;
    command.execute(&mut TerminalPrompter::new())?;

    Ok(())
}
