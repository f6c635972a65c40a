use clap::Parser;
use portfel::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
