//! `teamboard` entry-point: signs in, out, and inspects the persisted session.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use teamboard::TeamboardSettings;
use teamboard::domain::SessionService;
use teamboard::domain::ports::FixtureCredentialStore;
use teamboard::inbound::cli::{self, CliArgs};
use teamboard::outbound::FileSessionStore;

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let settings = TeamboardSettings::load_from_iter([OsString::from("teamboard")])
        .map_err(|error| eyre!("load teamboard settings: {error}"))?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args, settings))
}

async fn async_main(args: CliArgs, settings: TeamboardSettings) -> Result<()> {
    let session_dir = args.session_dir.unwrap_or_else(|| settings.session_dir());
    let credentials = FixtureCredentialStore::demo()
        .wrap_err("seed demo accounts")?
        .with_latency(settings.login_latency());
    let service = SessionService::new(
        Arc::new(credentials),
        Arc::new(FileSessionStore::new(session_dir)),
    );

    let mut stdout = io::stdout().lock();
    cli::run(&args.command, &service, &mut stdout).await?;
    Ok(())
}
