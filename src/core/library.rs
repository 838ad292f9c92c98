use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
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
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
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
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
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
            LibraryError::DuplicateKey { message } => {
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

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

// MatchPolicy decides how a search string is compared against book fields.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum MatchPolicy {
    CaseSensitive,
    CaseInsensitive,
}

impl MatchPolicy {
    /// Returns true when `field` contains `search` as a substring.
    /// An empty search string matches every field.
    pub fn matches(&self, field: &str, search: &str) -> bool {
        match self {
            MatchPolicy::CaseSensitive => field.contains(search),
            MatchPolicy::CaseInsensitive => field.to_lowercase().contains(&search.to_lowercase()),
        }
    }
}

impl TryFrom<String> for MatchPolicy {
    type Error = LibraryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "CaseSensitive" => Ok(MatchPolicy::CaseSensitive),
            "CaseInsensitive" => Ok(MatchPolicy::CaseInsensitive),
            _ => Err(LibraryError::validation(
                format!("unknown match policy {:?}", s).as_str(), Some("match_policy".to_string()))),
        }
    }
}

impl Display for MatchPolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MatchPolicy::CaseSensitive => write!(f, "CaseSensitive"),
            MatchPolicy::CaseInsensitive => write!(f, "CaseInsensitive"),
        }
    }
}
