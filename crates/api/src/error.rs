#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("url name must not be empty")]
    EmptySegment,
    #[error("url name {0:?} must not contain '/'")]
    EmbeddedSeparator(String),
    #[error("url name {0:?} is a relative path component")]
    RelativeComponent(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
