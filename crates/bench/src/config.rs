//! Setup configuration, read from TOML.
//!
//! ```toml
//! root = "../.."
//! generic = "tb_cfg"
//!
//! [[library]]
//! name = "lib"
//! sources = ["examples/*_VUnit.vhdl"]
//!
//! [[library.bench]]
//! name = "tb_boards"
//! tests = ["stringified", "JSON file"]
//!
//! [[bind]]
//! bench = "*tb_boards*"
//!
//! [[bind.scenario]]
//! test = "stringified*"
//! encoding = "stringified"
//! document = "data/Boards1.json"
//!
//! [corpus]
//! bench = "*tb_suite*"
//! directory = "examples/JSONTestSuite/test_parsing"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::binder::BenchBinding;
use crate::corpus::CorpusSpec;
use crate::encoding::GenericEncoding;
use crate::error::{Error, Result};

pub const DEFAULT_GENERIC: &str = "tb_cfg";

fn default_generic() -> String {
    DEFAULT_GENERIC.to_owned()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupConfig {
    /// Base directory for every relative path below.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Generic name used when a binding does not name one.
    #[serde(default = "default_generic")]
    pub generic: String,
    #[serde(default, rename = "library")]
    pub libraries: Vec<LibraryConfig>,
    #[serde(default, rename = "global")]
    pub globals: Vec<GlobalGeneric>,
    #[serde(default, rename = "bind")]
    pub bindings: Vec<BenchBinding>,
    #[serde(default)]
    pub corpus: Option<CorpusSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    pub name: String,
    /// Source file patterns; wildcards only in the file name.
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default, rename = "bench")]
    pub benches: Vec<BenchConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    pub name: String,
    #[serde(default)]
    pub tests: Vec<String>,
}

/// A generic set on every bench of the project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalGeneric {
    #[serde(default)]
    pub generic: Option<String>,
    pub document: PathBuf,
    #[serde(default)]
    pub encoding: GenericEncoding,
    #[serde(default)]
    pub annotate: bool,
}

impl SetupConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads a configuration file.
    ///
    /// `root` is resolved against the file's directory, so the result does
    /// not depend on the working directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_toml_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let root = match config.root.take() {
            Some(root) if root.is_absolute() => root,
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        };
        config.root = Some(root);
        Ok(config)
    }

    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }
}
