//! This is the main entry point for the `variation-selector` binary.

use clap::{CommandFactory, Parser};
use miette::IntoDiagnostic;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use variation_selector::{
    console_utils::{TracingFormatter, get_default_env_filter},
    matches_from_args,
    opt::{App, ShellCompletion, SubCommands},
    select_from_args,
};

fn main() -> miette::Result<()> {
    let app = App::parse();

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => get_default_env_filter(app.verbose.tracing_level_filter()).into_diagnostic()?,
    };

    // Logs go to stderr, results to stdout
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(TracingFormatter),
        )
        .init();

    let output = match app.subcommand {
        SubCommands::Select(args) => select_from_args(args)?,
        SubCommands::Matches(args) => matches_from_args(args)?,
        SubCommands::Completion(ShellCompletion { shell }) => {
            let mut cmd = App::command();
            clap_complete::generate(shell, &mut cmd, "variation-selector", &mut std::io::stdout());
            return Ok(());
        }
    };
    println!("{output}");

    Ok(())
}
