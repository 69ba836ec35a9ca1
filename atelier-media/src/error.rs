/// Errors produced while configuring the media engine.
///
/// Selection itself never fails; only constructors that validate caller
/// configuration return these.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("invalid resize proxy base URL: {0}")]
    InvalidProxyBase(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, MediaError>;
