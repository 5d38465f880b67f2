//! Harness configuration for driving a scaffold server and its CLI.
//!
//! Values come from `SCAFFOLD_*` environment variables and fall back to the
//! defaults of a local development deployment.

use std::env;
use std::path::PathBuf;

use dirs_next::home_dir;
use thiserror::Error;
use tracing::debug;

pub const PROTOCOL_ENV: &str = "SCAFFOLD_PROTOCOL";
pub const HOST_ENV: &str = "SCAFFOLD_HOST";
pub const PORT_ENV: &str = "SCAFFOLD_PORT";
pub const WS_PORT_ENV: &str = "SCAFFOLD_WS_PORT";
pub const AUTH_ENV: &str = "SCAFFOLD_AUTH";
pub const CLI_ENV: &str = "SCAFFOLD_CLI";
pub const USER_FIXTURE_ENV: &str = "SCAFFOLD_USER_FIXTURE";
pub const WORKFLOW_FIXTURE_ENV: &str = "SCAFFOLD_WORKFLOW_FIXTURE";

const DEFAULT_PROTOCOL: &str = "http";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 2997;
const DEFAULT_WS_PORT: u16 = 8080;
const DEFAULT_API_TOKEN: &str = "MyCoolPrimaryKey12345";
const DEFAULT_CLI_PATH: &str = "../../dist/linux/amd64/scaffold";
const DEFAULT_USER_FIXTURE: &str = "../fixtures/users/foo.json";
const DEFAULT_WORKFLOW_FIXTURE: &str = "../fixtures/workflows/foo.json";

/// Error surfaced when an environment override cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be 'http' or 'https', got '{value}'")]
    InvalidProtocol { var: &'static str, value: String },
}

/// Connection and fixture settings shared by harness runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub ws_port: u16,
    pub api_token: String,
    pub cli_path: PathBuf,
    pub user_fixture: PathBuf,
    pub workflow_fixture: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ws_port: DEFAULT_WS_PORT,
            api_token: DEFAULT_API_TOKEN.to_string(),
            cli_path: PathBuf::from(DEFAULT_CLI_PATH),
            user_fixture: PathBuf::from(DEFAULT_USER_FIXTURE),
            workflow_fixture: PathBuf::from(DEFAULT_WORKFLOW_FIXTURE),
        }
    }
}

impl HarnessConfig {
    /// Build a configuration from `SCAFFOLD_*` environment variables.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let protocol = match env_value(PROTOCOL_ENV) {
            Some(value) => {
                let lowered = value.to_ascii_lowercase();
                if lowered != "http" && lowered != "https" {
                    return Err(ConfigError::InvalidProtocol {
                        var: PROTOCOL_ENV,
                        value,
                    });
                }
                lowered
            }
            None => defaults.protocol,
        };

        let config = Self {
            protocol,
            host: env_value(HOST_ENV).unwrap_or(defaults.host),
            port: env_port(PORT_ENV)?.unwrap_or(defaults.port),
            ws_port: env_port(WS_PORT_ENV)?.unwrap_or(defaults.ws_port),
            api_token: env_value(AUTH_ENV).unwrap_or(defaults.api_token),
            cli_path: env_path(CLI_ENV).unwrap_or(defaults.cli_path),
            user_fixture: env_path(USER_FIXTURE_ENV).unwrap_or(defaults.user_fixture),
            workflow_fixture: env_path(WORKFLOW_FIXTURE_ENV).unwrap_or(defaults.workflow_fixture),
        };
        debug!(base_url = %config.base_url(), cli = %config.cli_path.display(), "loaded harness config");
        Ok(config)
    }

    /// Base URL of the HTTP API, e.g. `http://localhost:2997`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

fn env_value(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_port(var: &'static str) -> Result<Option<u16>, ConfigError> {
    env_value(var)
        .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { var, value }))
        .transpose()
}

fn env_path(var: &str) -> Option<PathBuf> {
    env_value(var).map(|value| expand_tilde(&value))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    let trimmed = path.trim();
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 8] = [
        PROTOCOL_ENV,
        HOST_ENV,
        PORT_ENV,
        WS_PORT_ENV,
        AUTH_ENV,
        CLI_ENV,
        USER_FIXTURE_ENV,
        WORKFLOW_FIXTURE_ENV,
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS.iter().map(|var| (*var, None)).collect()
    }

    #[test]
    fn defaults_match_local_deployment() {
        temp_env::with_vars(unset_all(), || {
            let config = HarnessConfig::from_env().unwrap();
            assert_eq!(config, HarnessConfig::default());
            assert_eq!(config.base_url(), "http://localhost:2997");
            assert_eq!(config.api_token, "MyCoolPrimaryKey12345");
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        let mut vars = unset_all();
        vars.retain(|(var, _)| *var != PROTOCOL_ENV && *var != PORT_ENV && *var != CLI_ENV);
        vars.push((PROTOCOL_ENV, Some("HTTPS")));
        vars.push((PORT_ENV, Some("8443")));
        vars.push((CLI_ENV, Some("/opt/scaffold/bin/scaffold")));
        temp_env::with_vars(vars, || {
            let config = HarnessConfig::from_env().unwrap();
            assert_eq!(config.base_url(), "https://localhost:8443");
            assert_eq!(config.cli_path, PathBuf::from("/opt/scaffold/bin/scaffold"));
        });
    }

    #[test]
    fn blank_values_keep_defaults() {
        temp_env::with_vars([(HOST_ENV, Some("   ")), (PORT_ENV, Some(""))], || {
            let config = HarnessConfig::from_env().unwrap();
            assert_eq!(config.host, "localhost");
            assert_eq!(config.port, 2997);
        });
    }

    #[test]
    fn invalid_port_is_rejected() {
        temp_env::with_var(PORT_ENV, Some("not-a-port"), || {
            let error = HarnessConfig::from_env().unwrap_err();
            assert!(matches!(error, ConfigError::InvalidPort { var: PORT_ENV, .. }));
        });
    }

    #[test]
    fn invalid_protocol_is_rejected() {
        temp_env::with_vars([(PROTOCOL_ENV, Some("ftp")), (PORT_ENV, None)], || {
            assert!(matches!(
                HarnessConfig::from_env().unwrap_err(),
                ConfigError::InvalidProtocol { .. }
            ));
        });
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~/fixtures/foo.json"), home.join("fixtures/foo.json"));
            assert_eq!(expand_tilde("~"), home);
        }
        assert_eq!(expand_tilde(" ./relative "), PathBuf::from("./relative"));
    }
}
