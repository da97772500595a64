// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("expected element '{selector}' was not found on the page")]
    MissingElement { selector: String },
    #[error("failed to launch browser: {0}")]
    BrowserLaunch(String),
    #[error("browser protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),
    #[error("invalid cookie record '{name}': {reason}")]
    Cookie { name: String, reason: String },
    #[error("failed to parse cookie file '{path}': {source}")]
    CookieParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to persist manifest file: {0}")]
    TempFilePersist(#[from] tempfile::PersistError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("interrupted by user")]
    UserInterrupt,
    #[error("unexpected error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
