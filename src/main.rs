use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::runtime::Runtime;

use cocktails::api::{HttpCatalogClient, TimeoutConfig};
use cocktails::cli::{Cli, Command, SearchReport};
use cocktails::config::Config;
use cocktails::logging::{self, LogSink};
use cocktails::search::{SearchController, NO_RESULTS_MESSAGE};
use cocktails::ui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(&cli.overrides());
    config.validate()?;

    let sink = match cli.command {
        Some(_) => LogSink::Stderr,
        None => LogSink::File(config.logging.file_path()),
    };
    logging::init(&config.logging, sink)?;

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let client = HttpCatalogClient::new(
        config.api.parsed_base_url()?,
        TimeoutConfig::from(&config.api),
    )
    .context("Failed to build HTTP client")?;
    let controller = Arc::new(SearchController::new(Arc::new(client)));

    match cli.command {
        None => {
            ui::runtime::run(controller, runtime.handle().clone(), config.ui.tick_rate())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Search { query, json }) => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                anyhow::bail!("search query must not be blank");
            }
            runtime.block_on(controller.search_cocktails(&query));

            match SearchReport::from_state(&controller.state(), json)? {
                SearchReport::Results(output) => {
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                SearchReport::NoResults => {
                    eprintln!("{}", NO_RESULTS_MESSAGE);
                    Ok(ExitCode::SUCCESS)
                }
                SearchReport::Failed(message) => {
                    eprintln!("{}", message);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
