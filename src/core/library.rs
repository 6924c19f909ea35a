use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
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
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Category classifies a book by subject; the set only grows with a redeploy.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Technology,
    Fiction,
    History,
    Science,
    Biography,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Fiction,
        Category::History,
        Category::Science,
        Category::Biography,
    ];

    // parse accepts any letter case, e.g. "fiction" or "FICTION".
    pub fn parse(s: &str) -> LibraryResult<Category> {
        Category::ALL.iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| LibraryError::validation(
                format!("unknown category {}", s).as_str(), Some("category".to_string())))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Category::Technology => write!(f, "TECHNOLOGY"),
            Category::Fiction => write!(f, "FICTION"),
            Category::History => write!(f, "HISTORY"),
            Category::Science => write!(f, "SCIENCE"),
            Category::Biography => write!(f, "BIOGRAPHY"),
        }
    }
}
