use thiserror::Error;

/// Reasons an attribute value was rejected or a header could not be built.
///
/// Parsing never surfaces these to the caller; they are logged and the
/// attribute is dropped. Only the header construction helpers return them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("attribute value is not valid utf-8")]
    NonUtf8,

    #[error("expires value is not an http date: {0}")]
    InvalidExpires(String),

    #[error("max-age value is not an integer: {0}")]
    InvalidMaxAge(String),

    #[error("max-age value has a leading zero: {0}")]
    LeadingZeroMaxAge(String),

    #[cfg(feature = "http")]
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(String),
}

#[cfg(feature = "http")]
impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeaderValue(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
