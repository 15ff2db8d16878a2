use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    // The persisted value exists but cannot be parsed. Callers fall back to
    // the empty library instead of failing.
    StorageCorrupt {
        message: String,
    },
    Network {
        message: String,
        retryable: bool,
    },
    RemoteRejected {
        message: String,
        status: u16,
    },
    // A removal happened locally while a user is signed in, but the book never
    // received a remote id, so the remote copy (if any) is left behind.
    ConsistencyGap {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn storage(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code }
    }

    pub fn storage_corrupt(message: &str) -> LibraryError {
        LibraryError::StorageCorrupt { message: message.to_string() }
    }

    pub fn network(message: &str, retryable: bool) -> LibraryError {
        LibraryError::Network { message: message.to_string(), retryable }
    }

    pub fn remote_rejected(message: &str, status: u16) -> LibraryError {
        LibraryError::RemoteRejected { message: message.to_string(), status }
    }

    pub fn consistency_gap(message: &str) -> LibraryError {
        LibraryError::ConsistencyGap { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Storage { .. } => { false }
            LibraryError::StorageCorrupt { .. } => { false }
            LibraryError::Network { retryable, .. } => { *retryable }
            LibraryError::RemoteRejected { status, .. } => { *status >= 500 }
            LibraryError::ConsistencyGap { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }

    // true for failures that only degrade syncing and leave local state intact
    pub fn is_remote(&self) -> bool {
        matches!(self, LibraryError::Network { .. } | LibraryError::RemoteRejected { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage(
            format!("storage io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::StorageCorrupt { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Network { message, retryable } => {
                write!(f, "{} {}", message, retryable)
            }
            LibraryError::RemoteRejected { message, status } => {
                write!(f, "{} {}", message, status)
            }
            LibraryError::ConsistencyGap { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shelf {
    Want,
    Current,
    Finished,
}

impl Shelf {
    // order used for persisted output and iteration
    pub const ALL: [Shelf; 3] = [Shelf::Current, Shelf::Want, Shelf::Finished];
}

impl FromStr for Shelf {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "want" => Ok(Shelf::Want),
            "current" => Ok(Shelf::Current),
            "finished" => Ok(Shelf::Finished),
            _ => Err(LibraryError::validation(
                format!("unknown shelf {}", s).as_str(), Some("shelf".to_string()))),
        }
    }
}

impl Display for Shelf {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Shelf::Want => write!(f, "want"),
            Shelf::Current => write!(f, "current"),
            Shelf::Finished => write!(f, "finished"),
        }
    }
}

// LocalOnly -> Syncing -> Synced | SyncFailed
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    LocalOnly,
    Syncing,
    Synced,
    SyncFailed,
}

impl Default for SyncStatus {
    fn default() -> Self {
        SyncStatus::LocalOnly
    }
}

impl Display for SyncStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SyncStatus::LocalOnly => write!(f, "local_only"),
            SyncStatus::Syncing => write!(f, "syncing"),
            SyncStatus::Synced => write!(f, "synced"),
            SyncStatus::SyncFailed => write!(f, "sync_failed"),
        }
    }
}
