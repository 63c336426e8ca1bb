use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Config error: {0}")]
    Config(#[from] sd_config::ConfigError),

    #[error("{0}")]
    Auth(#[from] sd_auth::AuthError),

    #[error("{0}")]
    Store(#[from] sd_store::StoreError),

    #[error("{0}")]
    Core(#[from] sd_core::CoreError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    Usage { message: String },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Access to {path} is denied for the current role")]
    ViewDenied { path: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl ShellError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        ShellError::Usage {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
