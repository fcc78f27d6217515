use std::fmt;

/// Convenience alias over the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while decoding a query string.
///
/// Parsing is fail-fast: the first error aborts the whole parse and no
/// partial result is returned. Unknown keys are never errors (they become
/// filter entries), and unbalanced brackets are tolerated silently, so in
/// practice [`Error::InvalidNumber`] is the only failure a bare query
/// string can produce.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A value expected to be an integer failed to parse as one. Raised
    /// for the top-level limit/page parameters and for `limit:`/`page:`
    /// overrides inside expand items.
    InvalidNumber {
        /// The parameter or override key the value belonged to.
        param: String,
        /// The offending text.
        value: String,
    },
    /// A full URL string could not be parsed. Only produced by
    /// [`Parser::parse_url_str`](crate::Parser::parse_url_str).
    Url(url::ParseError),
}

impl Error {
    pub(crate) fn invalid_number(param: &str, value: &str) -> Self {
        Error::InvalidNumber {
            param: param.to_owned(),
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNumber { param, value } => {
                write!(f, "invalid number for `{param}`: `{value}`")
            }
            Error::Url(err) => write!(f, "invalid url: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Url(err) => Some(err),
            _ => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err)
    }
}
