//! Command-line front end over the session model.
//!
//! Every invocation hydrates the persisted session first, runs one command,
//! and prints one line per fact to the supplied writer.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::domain::ports::{CredentialStore, SessionStore};
use crate::domain::{
    AuthDecision, AuthError, Capability, DenyReason, Identity, LoginCredentials,
    LoginValidationError, Session, SessionService,
};

use super::navigation::navigation_menu;
use super::routes::RouteGuard;

/// `teamboard` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "teamboard",
    about = "Sign in to the team dashboard and inspect what the session may see",
    version
)]
pub struct CliArgs {
    /// Directory holding the persisted session. Overrides `TEAMBOARD_SESSION_DIR`.
    #[arg(long = "session-dir", value_name = "dir", global = true)]
    pub session_dir: Option<PathBuf>,
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Sign in with a demo account.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the persisted session.
    Logout,
    /// Show who is signed in.
    Whoami,
    /// Show what navigating to a path would do.
    Visit {
        /// Request path such as `/users`.
        path: String,
    },
    /// List the navigation entries available to the session.
    Menu,
    /// Check whether the session may use a capability.
    Can {
        /// Capability name such as `export-reports`.
        capability: Capability,
    },
}

/// Failures reported by the front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Login input was blank.
    #[error(transparent)]
    InvalidInput(#[from] LoginValidationError),
    /// Login was rejected.
    #[error("login failed: {0}")]
    Auth(#[from] AuthError),
    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Hydrate the session, then run `command`.
///
/// # Errors
/// Returns [`CliError`] when login input is invalid, login is rejected, or
/// output cannot be written.
pub async fn run<C, S, W>(
    command: &Command,
    service: &SessionService<C, S>,
    out: &mut W,
) -> Result<(), CliError>
where
    C: CredentialStore,
    S: SessionStore,
    W: Write,
{
    service.hydrate().await;
    match command {
        Command::Login { email, password } => {
            let credentials = LoginCredentials::try_from_parts(email, password)?;
            let identity = service.login(&credentials).await?;
            writeln!(out, "signed in as {}", describe(&identity))?;
        }
        Command::Logout => {
            service.logout().await;
            writeln!(out, "signed out")?;
        }
        Command::Whoami => match service.current_session() {
            Session::Anonymous => writeln!(out, "anonymous")?,
            Session::Authenticated(identity) => writeln!(out, "{}", describe(&identity))?,
        },
        Command::Visit { path } => {
            let navigation = RouteGuard::resolve(path, &service.state());
            writeln!(out, "{navigation}")?;
        }
        Command::Menu => {
            for entry in navigation_menu(&service.current_session()) {
                writeln!(out, "{}\t{}", entry.route, entry.label)?;
            }
        }
        Command::Can { capability } => {
            let verdict = match service.authorize_capability(*capability) {
                AuthDecision::Allow => "allow",
                AuthDecision::Deny(DenyReason::Unauthenticated) => "deny: not signed in",
                AuthDecision::Deny(DenyReason::InsufficientRole) => "deny: role not permitted",
            };
            writeln!(out, "{capability}: {verdict}")?;
        }
    }
    Ok(())
}

fn describe(identity: &Identity) -> String {
    format!(
        "{} <{}> ({})",
        identity.display_name(),
        identity.email(),
        identity.role().label()
    )
}
