use airsig_config::ConfigError;
use airsig_core::AirsigError;
use airsig_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{}", .0.user_message())]
    App(#[from] AirsigError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Failed to create directory {path}: {source}")]
    DirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    /// Stable code for scripting against the CLI.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Store(_) => "PERSISTENCE_ERROR",
            Self::App(e) => e.error_code(),
            Self::Output(_) => "OUTPUT_ERROR",
            Self::DirCreation { .. } | Self::Logger { .. } => "STARTUP_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
