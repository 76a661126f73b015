//! agenda CLI entry point.

use std::process::ExitCode;

use agenda_client::cli::Cli;
use agenda_client::commands::{run, Outcome};
use agenda_client::output::render;
use agenda_client::AgendaClient;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "agenda=debug" } else { "agenda=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = AgendaClient::new(&cli.base_url);
    let outcome = match run(cli.command, &client).await {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("{}", error.user_message());
            return ExitCode::FAILURE;
        }
    };

    if let Outcome::Deleted {
        error: Some(error), ..
    } = &outcome
    {
        eprintln!("An error occurred: {error}");
    }

    match render(&outcome, cli.format, cli.quiet) {
        Ok(Some(text)) => println!("{text}"),
        Ok(None) => {}
        Err(error) => {
            eprintln!("{}", error.user_message());
            return ExitCode::FAILURE;
        }
    }

    if outcome.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
