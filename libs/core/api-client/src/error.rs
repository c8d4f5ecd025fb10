use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status; the message comes from
    /// the response's `error` field or a generic per-operation fallback.
    #[error("{0}")]
    Api(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
