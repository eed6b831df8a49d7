mod cache;
mod cli;
mod commands;
mod dd;
mod tester;
mod util;

#[cfg(test)]
mod dd_tests;

use clap::Parser;

use cli::{Cli, Command};

fn init_logging(filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("error: invalid log filter: {err}");
        std::process::exit(2);
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Reduce { input, reduce } => commands::reduce::run(input, reduce),
        Command::Tree { input } => commands::tree::run(input),
        Command::Langs => commands::langs::run(),
    }
}
