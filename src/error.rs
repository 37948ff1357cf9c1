// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Fetch(FetchError),
    Image(String),
}

/// Failures while retrieving a remote or local resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Status(u16),

    /// The request did not complete before its deadline.
    Timeout,

    /// Connection, TLS or body transfer failure.
    Transport(String),

    /// The resource location could not be parsed or joined.
    InvalidLocation(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Status(_) => "error-fetch-status",
            FetchError::Timeout => "error-fetch-timeout",
            FetchError::Transport(_) => "error-fetch-transport",
            FetchError::InvalidLocation(_) => "error-fetch-location",
        }
    }
}

impl Error {
    /// Returns the i18n key describing this error to users.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Catalog(_) => "error-catalog",
            Error::Fetch(e) => e.i18n_key(),
            Error::Image(_) => "error-image",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "server answered with status {}", code),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Transport(msg) => write!(f, "transport failure: {}", msg),
            FetchError::InvalidLocation(loc) => write!(f, "invalid location: {}", loc),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Error::Fetch(FetchError::Timeout);
        }
        if let Some(status) = err.status() {
            return Error::Fetch(FetchError::Status(status.as_u16()));
        }
        Error::Fetch(FetchError::Transport(err.to_string()))
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
