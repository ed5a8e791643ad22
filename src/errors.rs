pub type CloudUriResult<T> = Result<T, CloudUriError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudUriError {
    #[error("Get malformed url error: {0}")]
    MalformedUrlError(String),
    #[error("Get unsupported url error: {0}")]
    UnsupportedUrlError(String),
    #[error("Get invalid argument error: {0}")]
    InvalidArgumentError(String),
}
