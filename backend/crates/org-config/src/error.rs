use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Problems loading or validating `config.toml` and its `ORG_*` overrides.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A value that parsed but is out of range. `section` names the table
    /// it belongs to.
    #[error("{section} error: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Config directory or file layout is unusable
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::in_section("Config", message)
    }

    /// `[database]`
    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::in_section("Database", message)
    }

    /// `[logging]`
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::in_section("Logging", message)
    }

    /// `[hierarchy]`
    #[track_caller]
    pub fn hierarchy<S: Into<String>>(message: S) -> Self {
        Self::in_section("Hierarchy", message)
    }

    #[track_caller]
    fn in_section<S: Into<String>>(section: &'static str, message: S) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
