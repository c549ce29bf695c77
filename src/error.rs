//! Command-line error type.

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("http client build failed: {0}")]
    HttpClientBuild(String),

    #[error("no session token stored in {0}")]
    NoStoredToken(String),

    #[error(transparent)]
    Login(#[from] auth::LoginError),
}
