//! # sat-config
//!
//! Layered configuration loading for satwatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SATWATCH_*` prefix, `__` as separator)
//! 2. Legacy credential variables `SPACE_TRACK_USERNAME` / `SPACE_TRACK_PASSWORD`
//! 3. `env`, then `.env` in the working directory (only with
//!    [`SatConfig::load_with_dotenv`] / [`SatConfig::load_from`])
//! 4. Explicit `--config` file, or project-level `satwatch.toml`
//! 5. User-level `~/.config/satwatch/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SATWATCH_SPACETRACK__USERNAME` -> `spacetrack.username`,
//! `SATWATCH_SERVER__PORT` -> `server.port`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sat_config::SatConfig;
//!
//! // `env` / `.env` files + TOML + environment:
//! let config = SatConfig::load_with_dotenv().expect("config");
//!
//! if config.spacetrack.is_configured() {
//!     println!("Space-Track account: {}", config.spacetrack.username);
//! }
//! ```

mod error;
mod output;
mod server;
mod spacetrack;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use server::ServerConfig;
pub use spacetrack::SpaceTrackConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "satwatch.toml";

/// Plain `KEY=VALUE` credentials file; wins over `.env`.
pub const CREDENTIALS_FILE: &str = "env";

/// Conventional dotenv file.
pub const DOTENV_FILE: &str = ".env";

const ENV_PREFIX: &str = "SATWATCH_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SatConfig {
    #[serde(default)]
    pub spacetrack: SpaceTrackConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SatConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `env`/`.env` files -- use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration with `env` and `.env` file support.
    ///
    /// The files sit below the process environment: a variable that is
    /// already set always wins over the same key in a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::extract(Self::figment_with(None, true))
    }

    /// Like [`Self::load_with_dotenv`], but reads `path` instead of `satwatch.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment_with(Some(path), true))
    }

    /// Build the figment provider chain, without the dotenv files.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::figment_with(None, false)
    }

    fn figment_with(config_file: Option<&Path>, dotenv: bool) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Explicit file, else project-local config
        match config_file {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Credential files, `env` over `.env`
        if dotenv {
            figment = figment
                .merge(dotenv_file(Path::new(DOTENV_FILE)))
                .merge(dotenv_file(Path::new(CREDENTIALS_FILE)));
        }

        // Layer 4: Legacy credential variables
        figment = figment.merge(legacy_credentials_env());

        // Layer 5: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.spacetrack.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("satwatch").join("config.toml"))
    }
}

/// Config key for a legacy credential variable name.
fn legacy_key(name: &str) -> Option<&'static str> {
    if name.eq_ignore_ascii_case("SPACE_TRACK_USERNAME") {
        Some("spacetrack.username")
    } else if name.eq_ignore_ascii_case("SPACE_TRACK_PASSWORD") {
        Some("spacetrack.password")
    } else {
        None
    }
}

/// Config key for a variable name as the environment layers read it:
/// `SATWATCH_SERVER__PORT` -> `server.port`, legacy names as in [`legacy_key`].
fn env_key(name: &str) -> Option<String> {
    if let Some(key) = legacy_key(name) {
        return Some(key.to_string());
    }
    let prefix = name.get(..ENV_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(ENV_PREFIX) {
        return None;
    }
    let rest = &name[ENV_PREFIX.len()..];
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}

/// Keys from a `KEY=VALUE` file that map onto config, as a provider.
///
/// A missing file contributes nothing; so do lines dotenvy cannot parse.
fn dotenv_file(path: &Path) -> Figment {
    let Ok(entries) = dotenvy::from_path_iter(path) else {
        return Figment::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|(name, raw)| env_key(&name).map(|key| (key, raw)))
        .fold(Figment::new(), |figment, (key, raw)| {
            let value: Value = raw.parse().unwrap_or_else(|never| match never {});
            figment.merge(Serialized::default(&key, value))
        })
}

/// `SPACE_TRACK_USERNAME` / `SPACE_TRACK_PASSWORD`, as set by hosting
/// platforms that predate the `SATWATCH_` prefix.
fn legacy_credentials_env() -> Env {
    Env::raw().filter_map(|key| legacy_key(key.as_str()).map(Into::into))
}
