use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;

use gatos::cancel::CancelToken;
use gatos::catalog::{validate, Gato};
use gatos::cli::{Cli, Command};
use gatos::config::Config;
use gatos::logging::init_tracing;
use gatos::store::{CatalogState, CatalogStore};
use gatos::CatalogError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    init_tracing(&config.logging);

    match cli.command {
        Command::Validate(fields) => {
            let result = validate(&fields.into_draft());
            print_json(&result)?;
            Ok(exit_code(result.is_valid()))
        }
        Command::List => {
            let store = CatalogStore::from_config(&config)?;
            let state = load_catalog(&store).await?;
            print_json(state.gatos())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Add(fields) => {
            let store = CatalogStore::from_config(&config)?;
            finish(store.add(fields.into_draft()).await)
        }
        Command::Edit { id, fields } => {
            let store = CatalogStore::from_config(&config)?;
            load_catalog(&store).await?;
            finish(store.edit_by_id(&id, fields.into_changes()).await)
        }
    }
}

/// Loads the catalog, cancelling the fetch on Ctrl-C.
async fn load_catalog(store: &CatalogStore) -> anyhow::Result<CatalogState> {
    let cancel = CancelToken::new();
    let on_interrupt = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let state = store.load(&cancel).await;
    watcher.abort();

    if cancel.is_cancelled() {
        bail!("Interrupted");
    }
    if let Some(message) = state.error() {
        bail!("{}", message);
    }
    Ok(state)
}

/// Prints the stored item, or the validation errors for a rejected one.
fn finish(result: Result<Gato, CatalogError>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(gato) => {
            print_json(&gato)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(CatalogError::Invalid(validation)) => {
            print_json(&validation)?;
            Ok(exit_code(false))
        }
        Err(e) => Err(e.into()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
