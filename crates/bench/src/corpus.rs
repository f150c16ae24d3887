//! Corpus discovery: one test configuration per fixture file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::encoding::{Documents, GenericEncoding};
use crate::error::{Error, Result};
use crate::registry::{Configuration, Registry};

/// Where the corpus lives and which bench runs it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorpusSpec {
    #[serde(default)]
    pub library: Option<String>,
    /// Pattern that must match exactly one test bench.
    pub bench: String,
    /// Pattern for the test the configurations run; the whole bench when
    /// absent.
    #[serde(default)]
    pub test: Option<String>,
    pub directory: PathBuf,
    #[serde(default)]
    pub encoding: GenericEncoding,
    #[serde(default)]
    pub generic: Option<String>,
    /// Only files with this extension are considered.
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub annotate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// File name without its extension.
    pub name: String,
    pub path: PathBuf,
}

/// A corpus file that produced no configuration.
#[derive(Debug)]
pub struct SkippedEntry {
    pub entry: CorpusEntry,
    pub error: Error,
}

/// Outcome of a discovery pass.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Names of the configurations added, in listing order.
    pub configurations: Vec<String>,
    pub skipped: Vec<SkippedEntry>,
}

impl Discovery {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Lists the files directly under `dir`, in directory-listing order.
///
/// Subdirectories are ignored. With `extension` set, so are files with any
/// other extension.
///
/// # Errors
///
/// Returns [`Error::Io`] when the directory is missing or unreadable.
pub fn list_corpus(dir: &Path, extension: Option<&str>) -> Result<Vec<CorpusEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = extension {
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        entries.push(CorpusEntry {
            name: stem.to_string_lossy().into_owned(),
            path,
        });
    }
    Ok(entries)
}

/// Adds one configuration per corpus file to the bench `spec` designates.
///
/// A file whose value cannot be produced (only possible for content-based
/// encodings) is recorded in [`Discovery::skipped`] and the pass goes on.
///
/// # Errors
///
/// - [`Error::Io`] when the directory cannot be listed
/// - [`Error::Configuration`] when the bench or test pattern does not
///   resolve to exactly one object, or two files share a stem
pub fn discover(
    registry: &mut Registry,
    spec: &CorpusSpec,
    default_generic: &str,
    documents: &mut Documents,
) -> Result<Discovery> {
    let dir = documents.resolve(&spec.directory);
    let entries = list_corpus(&dir, spec.extension.as_deref())?;

    let bench = registry.test_bench_mut(spec.library.as_deref(), &spec.bench)?;
    let test = match &spec.test {
        Some(pattern) => Some(bench.test_mut(pattern)?.name().to_owned()),
        None => None,
    };
    let generic = spec.generic.as_deref().unwrap_or(default_generic);

    let mut discovery = Discovery::default();
    for entry in entries {
        // `entry.path` already carries the root; hand the loader the
        // root-relative form so the root is joined once.
        let document = match entry.path.file_name() {
            Some(file) => spec.directory.join(file),
            None => entry.path.clone(),
        };
        let value = match documents.encode(&document, spec.encoding, spec.annotate) {
            Ok(value) => value,
            Err(error) => {
                warn!(entry = %entry.name, %error, "skipping corpus entry");
                discovery.skipped.push(SkippedEntry { entry, error });
                continue;
            }
        };
        bench.add_config(
            Configuration::new(entry.name.clone())
                .for_test(test.clone())
                .with_generic(generic, value),
        )?;
        discovery.configurations.push(entry.name);
    }

    info!(
        bench = bench.name(),
        directory = %dir.display(),
        added = discovery.configurations.len(),
        skipped = discovery.skipped.len(),
        "discovered corpus"
    );
    Ok(discovery)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_ignores_subdirectories_and_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("y_a.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let all = list_corpus(dir.path(), None).unwrap();
        let mut names: Vec<&str> = all.iter().map(|e| e.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["notes", "y_a"]);

        let json = list_corpus(dir.path(), Some("json")).unwrap();
        assert_eq!(json.len(), 1);
        assert_eq!(json[0].name, "y_a");
        assert_eq!(json[0].path, dir.path().join("y_a.json"));
    }

    #[test]
    fn stem_strips_only_last_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("n_structure_100000_opening_arrays.json"), "").unwrap();
        fs::write(dir.path().join("i_number.huge.json"), "").unwrap();
        let mut names: Vec<String> = list_corpus(dir.path(), None)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["i_number.huge", "n_structure_100000_opening_arrays"]);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_corpus(&dir.path().join("absent"), None).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
