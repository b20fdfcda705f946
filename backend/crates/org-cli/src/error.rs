use org_config::ConfigError;
use org_core::HierarchyError;
use org_db::DbError;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("{0}")]
    Hierarchy(#[from] HierarchyError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("--actor is required for {command}")]
    ActorRequired { command: &'static str },
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Hierarchy(e) => e.error_code(),
            Self::Json(_) => "SERIALIZATION_ERROR",
            Self::Logger { .. } => "LOGGER_ERROR",
            Self::ActorRequired { .. } => "ACTOR_REQUIRED",
        }
    }

    /// `{ "error": { "code", "message" } }`
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
