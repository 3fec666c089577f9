#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("http status {0}: {1}")]
    HttpStatus(reqwest::StatusCode, String),
    #[error("authentication required but no bearer token is set")]
    AuthRequired,
}
