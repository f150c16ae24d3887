//! Error taxonomy for bench setup.
//!
//! Every error here is a static defect in the setup (a bad pattern, a
//! missing file, a document that cannot be encoded). Nothing is retried.

use std::fmt;
use std::io;
use std::path::PathBuf;

use json_tb_value::EncodingError;
use thiserror::Error;

/// Kind of registry object a name or pattern refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Library,
    SourceFile,
    TestBench,
    Test,
    Configuration,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectKind::Library => "library",
            ObjectKind::SourceFile => "source file",
            ObjectKind::TestBench => "test bench",
            ObjectKind::Test => "test",
            ObjectKind::Configuration => "configuration",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no {kind} matches {pattern:?}")]
    NoMatch { kind: ObjectKind, pattern: String },
    #[error("{kind} pattern {pattern:?} is ambiguous, it matches {}", .matches.join(", "))]
    Ambiguous {
        kind: ObjectKind,
        pattern: String,
        matches: Vec<String>,
    },
    #[error("unknown library {0:?}")]
    UnknownLibrary(String),
    #[error("duplicate {kind} {name:?}")]
    Duplicate { kind: ObjectKind, name: String },
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{}: invalid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{}: invalid setup configuration: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize test plan: {0}")]
    Plan(#[source] serde_json::Error),
    #[error("engine {program:?}: {source}")]
    Engine { program: String, source: io::Error },
    #[error("{skipped} corpus entries could not be bound")]
    Incomplete { skipped: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
