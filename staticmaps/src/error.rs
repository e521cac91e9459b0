/// Errors raised while building a static map request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Argument that can never produce a valid request, such as an empty address or an empty
    /// list of points.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Assembled string is not a valid absolute URL.
    #[error("malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),
}
