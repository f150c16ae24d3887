//! Generic value shapes and the document loader that produces them.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use json_tb_value::{stringify, JsonValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// How a configuration document reaches the device under test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenericEncoding {
    /// Canonical compact serialization of the document.
    #[serde(rename = "stringified")]
    Stringified,
    /// Base16 of the canonical serialization.
    #[serde(rename = "b16encoded stringified")]
    B16Stringified,
    /// Path to the document; the device reads the file itself.
    #[default]
    #[serde(rename = "file")]
    File,
    /// Base16 of the path string.
    #[serde(rename = "b16encoded file")]
    B16File,
}

impl GenericEncoding {
    pub const ALL: [GenericEncoding; 4] = [
        GenericEncoding::Stringified,
        GenericEncoding::B16Stringified,
        GenericEncoding::File,
        GenericEncoding::B16File,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GenericEncoding::Stringified => "stringified",
            GenericEncoding::B16Stringified => "b16encoded stringified",
            GenericEncoding::File => "file",
            GenericEncoding::B16File => "b16encoded file",
        }
    }

    /// Whether the generic carries the document content rather than its path.
    pub fn reads_content(self) -> bool {
        matches!(
            self,
            GenericEncoding::Stringified | GenericEncoding::B16Stringified
        )
    }

    pub fn is_base16(self) -> bool {
        matches!(
            self,
            GenericEncoding::B16Stringified | GenericEncoding::B16File
        )
    }
}

impl fmt::Display for GenericEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads and parses a JSON document.
pub fn load_json(path: &Path) -> Result<JsonValue> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    JsonValue::parse(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads documents relative to a root directory and encodes them as
/// generic values.
///
/// A document is read at most once per loader, however many generics it
/// feeds; path-based shapes never read the content.
#[derive(Debug)]
pub struct Documents {
    root: PathBuf,
    cache: HashMap<PathBuf, JsonValue>,
}

impl Documents {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Documents {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// Joins relative paths onto the root; absolute paths are kept.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Returns the parsed document at `path`, loading it on first use.
    pub fn load(&mut self, path: &Path) -> Result<&JsonValue> {
        let path = self.resolve(path);
        if !self.cache.contains_key(&path) {
            let value = load_json(&path)?;
            debug!(path = %path.display(), "loaded document");
            self.cache.insert(path.clone(), value);
        }
        Ok(&self.cache[&path])
    }

    /// Encodes the document at `path` as a generic value.
    ///
    /// `annotate` length-prefixes integer arrays before serialization; it
    /// has no effect on path-based shapes.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file is missing or unreadable
    /// - [`Error::Json`] if a content-based shape meets invalid JSON
    /// - [`Error::Encoding`] if the document has no canonical form
    pub fn encode(
        &mut self,
        path: &Path,
        encoding: GenericEncoding,
        annotate: bool,
    ) -> Result<String> {
        let text = if encoding.reads_content() {
            let doc = self.load(path)?;
            if annotate {
                stringify(&json_tb_value::annotate_array_lengths(doc))?
            } else {
                stringify(doc)?
            }
        } else {
            if annotate {
                warn!(path = %path.display(), %encoding, "annotation ignored for path-based generic");
            }
            let path = self.resolve(path);
            fs::metadata(&path).map_err(|e| Error::io(&path, e))?;
            path.to_string_lossy().into_owned()
        };
        Ok(if encoding.is_base16() {
            json_tb_base16::encode_str(&text)
        } else {
            text
        })
    }
}
