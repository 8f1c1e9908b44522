use clap::Parser;
use georesolve::cli::{run, Cli};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(cli)
}
