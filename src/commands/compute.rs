use crate::cli::Cli;
use crate::domain::models::{SqrtReport, VersionInfo};
use crate::services::math::sqrt_with;
use crate::services::output::print_one;
use std::process::ExitCode;

pub fn handle_compute(cli: &Cli, version: &VersionInfo) -> anyhow::Result<ExitCode> {
    // Missing argument is a usage exit, not an error.
    let Some(raw) = cli.values.first() else {
        let program = program_name();
        println!("Usage: {} number", program);
        println!("{} Version {}.{}", program, version.major, version.minor);
        return Ok(ExitCode::from(1));
    };

    let input: f64 = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("not a number: {}", raw))?;
    let root = sqrt_with(cli.method, input);

    print_one(
        cli.json,
        SqrtReport {
            input,
            root,
            method: cli.method,
        },
        |r| format!("The square root of {} is {}", r.input, r.root),
    )?;
    Ok(ExitCode::SUCCESS)
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
