use std::env;
use std::process::ExitCode;

use clap::Parser;
use header_count::constants::ENV_LOG;
use header_count::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    let ctx = cmd::context::Context::from_cli(&cli);

    let result = match cli.command {
        Command::Count { file, level, yes, remember } => {
            cmd::count::run(&ctx, file, level, yes, remember)
        }
        Command::Summary { file } => cmd::summary::run(&ctx, file),
        Command::Settings { default_level } => cmd::settings::run(&ctx, default_level),
        Command::Commands => cmd::commands::run(&ctx),
        Command::Run { id, file } => cmd::run::run(&ctx, &id, file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // already shown to the user as a notice
        Err(_) => ExitCode::FAILURE,
    }
}

fn init_logging() {
    let filter = env::var(ENV_LOG)
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

mod cmd {
    pub mod commands;
    pub mod context;
    pub mod count;
    pub mod run;
    pub mod settings;
    pub mod summary;
}
