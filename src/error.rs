// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// No surface could be found to attach the overlay to.
    NoAnchor,
    Dispatch(DispatchError),
}

/// Failures of the UI-thread redirection helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The HUD session was dropped before the job could run.
    Disconnected,
    /// A synchronous hop was requested from the UI thread itself, which
    /// would block forever waiting on its own queue.
    OnUiThread,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Disconnected => write!(f, "HUD session is no longer running"),
            DispatchError::OnUiThread => {
                write!(f, "synchronous dispatch requested from the UI thread")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::NoAnchor => write!(f, "No anchor surface available"),
            Error::Dispatch(e) => write!(f, "Dispatch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DispatchError> for Error {
    fn from(err: DispatchError) -> Self {
        Error::Dispatch(err)
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

pub type Result<T> = std::result::Result<T, Error>;
