//! CLI entrypoint for quote-sender
//!
//! Wires the layers together: `.env` overlay, logging, configuration
//! source, provider factory, and the send-quote use case. Exit status is 0
//! when every recipient received the quote and 1 otherwise.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, LogFormat};
use quote_sender_application::{RunOutcome, SendQuoteError, SendQuoteUseCase};
use quote_sender_domain::RunState;
use quote_sender_infrastructure::{
    AwsCredentialChain, DefaultProviderFactory, EnvConfigLoader, EnvSource, TracingProgress,
    load_dotenv,
};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The .env file is applied to the process environment before any
    // worker thread exists, so the AWS credential chain sees it too.
    let dotenv = if cli.no_env_file {
        None
    } else {
        Some(load_dotenv(&cli.env_file))
    };

    init_logging(cli.verbose, cli.log_format);

    match dotenv {
        Some(Ok(true)) => debug!(path = %cli.env_file.display(), "loaded .env file"),
        Some(Ok(false)) => debug!(path = %cli.env_file.display(), "no .env file found"),
        Some(Err(e)) => {
            error!(error = %e, "application error");
            return exit_status(RunState::Failed);
        }
        None => debug!("skipping .env file"),
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "failed to start async runtime");
            return exit_status(RunState::Failed);
        }
    };

    let result = runtime.block_on(run(&cli));
    report(&result);
    exit_status(terminal_state(&result))
}

/// Final state of a finished run
fn terminal_state(result: &Result<RunOutcome>) -> RunState {
    match result {
        Ok(_) => RunState::Done,
        Err(_) => RunState::Failed,
    }
}

fn exit_status(state: RunState) -> ExitCode {
    ExitCode::from(state.exit_code().unwrap_or(1))
}

fn report(result: &Result<RunOutcome>) {
    match result {
        Ok(outcome) => debug!(
            delivered = outcome.delivered.len(),
            "application run completed successfully"
        ),
        Err(e) => {
            let failure = e.downcast_ref::<SendQuoteError>();
            if failure.is_some_and(SendQuoteError::is_cancelled) {
                warn!("run interrupted before completion");
            }
            let recipient = failure.and_then(SendQuoteError::recipient);
            error!(error = %e, recipient, "application error");
        }
    }
}

fn init_logging(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn run(cli: &Cli) -> Result<RunOutcome> {
    let env = EnvSource::from_process();

    let mut loader = EnvConfigLoader::new(env.clone());
    if cli.skip_credential_check {
        warn!("backend credential check skipped");
    } else {
        loader = loader.with_credential_check(Arc::new(AwsCredentialChain::from_env(&env)));
    }

    // === Dependency Injection ===
    let use_case = SendQuoteUseCase::new(Arc::new(loader), Arc::new(DefaultProviderFactory::new()))
        .with_progress(Arc::new(TracingProgress));

    let cancellation = CancellationToken::new();
    let interrupt = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping");
            interrupt.cancel();
        }
    });

    info!("starting quote-sender");
    let outcome = use_case.execute(&cancellation).await?;
    Ok(outcome)
}
