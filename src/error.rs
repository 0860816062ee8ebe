use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Hint shown when the editor CLI cannot produce an extension list.
pub const LISTING_HINT: &str = "ensure the editor and its CLI are installed and on PATH";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to list installed extensions: {hint}")]
    ListingUnavailable { hint: String },

    #[error("Download failed: {reason}")]
    DownloadFailed { reason: FailureReason },

    #[error("Unable to set up the HTTP client: {message}")]
    ClientSetup { message: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

/// Why a single package download did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The registry answered with something other than 200.
    Status(u16),
    /// DNS, connect, reset, or the body stream broke off.
    Transport(String),
    /// The destination file could not be created or written.
    Write(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Status(code) => write!(f, "status code {code}"),
            FailureReason::Transport(message) => write!(f, "{message}"),
            FailureReason::Write(message) => write!(f, "cannot write package: {message}"),
        }
    }
}

impl FetchError {
    pub fn listing_unavailable() -> Self {
        FetchError::ListingUnavailable {
            hint: LISTING_HINT.to_string(),
        }
    }

    pub fn status(code: u16) -> Self {
        FetchError::DownloadFailed {
            reason: FailureReason::Status(code),
        }
    }

    pub fn transport<S: Into<String>>(message: S) -> Self {
        FetchError::DownloadFailed {
            reason: FailureReason::Transport(message.into()),
        }
    }

    pub fn write<S: Into<String>>(message: S) -> Self {
        FetchError::DownloadFailed {
            reason: FailureReason::Write(message.into()),
        }
    }
}
