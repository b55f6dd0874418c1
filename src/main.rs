use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use domain::models::VersionInfo;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let version = VersionInfo::from_build_metadata();

    match commands::handle_compute(&cli, &version) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
