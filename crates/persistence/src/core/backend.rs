//! Backend identification.

use std::fmt;
use std::str::FromStr;

/// Identifies the type of document store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Process-local maps, lost on restart.
    Memory,
    /// SQLite database (file-based or in-memory).
    Sqlite,
    /// MongoDB (document store).
    MongoDB,
}

impl BackendKind {
    /// Returns the lowercase name used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Memory => "memory",
            BackendKind::Sqlite => "sqlite",
            BackendKind::MongoDB => "mongodb",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(BackendKind::Memory),
            "sqlite" => Ok(BackendKind::Sqlite),
            "mongodb" | "mongo" => Ok(BackendKind::MongoDB),
            other => Err(format!(
                "Unknown storage backend '{}'. Valid values: memory, sqlite, mongodb",
                other
            )),
        }
    }
}
