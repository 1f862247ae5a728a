//! Front-end configuration loaded via OrthoConfig.
//!
//! Values come from `TEAMBOARD_*` environment variables or a configuration
//! file; unset values fall back to the defaults below.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SESSION_DIR: &str = ".teamboard";

/// Settings for the `teamboard` command-line front end.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TEAMBOARD")]
pub struct TeamboardSettings {
    /// Directory holding persisted session files.
    pub session_dir: Option<PathBuf>,
    /// Artificial delay applied to credential lookups, in milliseconds.
    #[ortho_config(default = 800)]
    pub login_latency_ms: u64,
}

impl TeamboardSettings {
    /// Return the configured session directory, falling back to `.teamboard`.
    #[must_use]
    pub fn session_dir(&self) -> PathBuf {
        self.session_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_DIR))
    }

    /// Return the configured login latency.
    #[must_use]
    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for front-end configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> TeamboardSettings {
        TeamboardSettings::load_from_iter([OsString::from("teamboard")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("TEAMBOARD_SESSION_DIR", None::<String>),
            ("TEAMBOARD_LOGIN_LATENCY_MS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.session_dir(), PathBuf::from(".teamboard"));
        assert_eq!(settings.login_latency_ms, 800);
        assert_eq!(settings.login_latency(), Duration::from_millis(800));
    }

    #[rstest]
    fn session_dir_override_alone_keeps_latency_default() {
        let _guard = lock_env([
            ("TEAMBOARD_SESSION_DIR", Some("/tmp/teamboard-only-dir".to_owned())),
            ("TEAMBOARD_LOGIN_LATENCY_MS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.session_dir(), PathBuf::from("/tmp/teamboard-only-dir"));
        assert_eq!(settings.login_latency(), Duration::from_millis(800));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TEAMBOARD_SESSION_DIR", Some("/tmp/teamboard-sessions".to_owned())),
            ("TEAMBOARD_LOGIN_LATENCY_MS", Some("0".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.session_dir(),
            PathBuf::from("/tmp/teamboard-sessions")
        );
        assert_eq!(settings.login_latency(), Duration::ZERO);
    }
}
