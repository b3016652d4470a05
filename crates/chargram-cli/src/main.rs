mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { grammar } => commands::check(&grammar),
        Command::Rules { grammar } => commands::rules(&grammar),
        Command::Test {
            grammar,
            rule,
            chars,
        } => commands::test(&grammar, &rule, &chars),
    }
}
