//! Explicit registry of libraries, test benches and tests.
//!
//! The registry stands in for the test-execution engine's object model:
//! objects are looked up with shell-style patterns, and a lookup that is
//! meant to pick one object fails unless exactly one object matches.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{ConfigurationError, Error, ObjectKind, Result};
use crate::glob::Pattern;

/// Generic name → generic value, in assignment order.
pub type Generics = IndexMap<String, String>;

#[derive(Debug, Default)]
pub struct Registry {
    libraries: Vec<Library>,
    globals: Generics,
}

#[derive(Debug)]
pub struct Library {
    name: String,
    source_files: Vec<PathBuf>,
    benches: Vec<TestBench>,
}

#[derive(Debug)]
pub struct TestBench {
    library: String,
    name: String,
    tests: Vec<TestCase>,
    generics: Generics,
    configurations: Vec<Configuration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    name: String,
    generics: Generics,
}

/// A named run of a test bench (or of one of its tests) with its own
/// generic values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub name: String,
    pub test: Option<String>,
    pub generics: Generics,
}

impl Configuration {
    pub fn new(name: impl Into<String>) -> Self {
        Configuration {
            name: name.into(),
            test: None,
            generics: Generics::new(),
        }
    }

    pub fn for_test(mut self, test: Option<String>) -> Self {
        self.test = test;
        self
    }

    pub fn with_generic(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.generics.insert(name.into(), value.into());
        self
    }
}

/// Picks the single item whose name matches `pattern`.
fn resolve_one<'a, T>(
    kind: ObjectKind,
    pattern: &str,
    items: impl Iterator<Item = &'a mut T>,
    name: impl Fn(&T) -> &str,
) -> Result<&'a mut T, ConfigurationError>
where
    T: 'a,
{
    let pattern = Pattern::new(pattern)?;
    let mut found: Vec<&'a mut T> = items.filter(|item| pattern.matches(name(&**item))).collect();
    match found.len() {
        0 => Err(ConfigurationError::NoMatch {
            kind,
            pattern: pattern.as_str().to_owned(),
        }),
        1 => Ok(found.remove(0)),
        _ => Err(ConfigurationError::Ambiguous {
            kind,
            pattern: pattern.as_str().to_owned(),
            matches: found.iter().map(|item| name(&**item).to_owned()).collect(),
        }),
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new, empty library.
    pub fn add_library(&mut self, name: &str) -> Result<&mut Library, ConfigurationError> {
        if self.libraries.iter().any(|l| l.name == name) {
            return Err(ConfigurationError::Duplicate {
                kind: ObjectKind::Library,
                name: name.to_owned(),
            });
        }
        info!(library = name, "registered library");
        self.libraries.push(Library {
            name: name.to_owned(),
            source_files: Vec::new(),
            benches: Vec::new(),
        });
        let last = self.libraries.len() - 1;
        Ok(&mut self.libraries[last])
    }

    pub fn library(&self, name: &str) -> Result<&Library, ConfigurationError> {
        self.libraries
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| ConfigurationError::UnknownLibrary(name.to_owned()))
    }

    pub fn library_mut(&mut self, name: &str) -> Result<&mut Library, ConfigurationError> {
        self.libraries
            .iter_mut()
            .find(|l| l.name == name)
            .ok_or_else(|| ConfigurationError::UnknownLibrary(name.to_owned()))
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    /// Resolves `pattern` to exactly one test bench, searching one library
    /// or, when `library` is `None`, all of them.
    pub fn test_bench_mut(
        &mut self,
        library: Option<&str>,
        pattern: &str,
    ) -> Result<&mut TestBench, ConfigurationError> {
        match library {
            Some(name) => self.library_mut(name)?.test_bench_mut(pattern),
            None => resolve_one(
                ObjectKind::TestBench,
                pattern,
                self.libraries.iter_mut().flat_map(|l| l.benches.iter_mut()),
                |b| b.name.as_str(),
            ),
        }
    }

    /// Sets a generic on every test bench of the project.
    pub fn set_global_generic(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        debug!(generic = %name, "set project-wide generic");
        self.globals.insert(name, value.into());
    }

    pub fn globals(&self) -> &Generics {
        &self.globals
    }
}

impl Library {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    pub fn test_benches(&self) -> &[TestBench] {
        &self.benches
    }

    /// Adds the files matching `pattern` to the library.
    ///
    /// Only the final path component may contain wildcards; matches are
    /// added in sorted order. Returns the number of files added.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] when the parent directory cannot be listed
    /// - [`ConfigurationError::NoMatch`] when nothing matches
    pub fn add_source_files(&mut self, pattern: &Path) -> Result<usize> {
        let file_pattern = pattern
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = match pattern.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let glob = Pattern::new(&file_pattern)?;

        let mut matched = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
            let entry = entry.map_err(|e| Error::io(&dir, e))?;
            let path = entry.path();
            if path.is_file() && glob.matches(&entry.file_name().to_string_lossy()) {
                matched.push(path);
            }
        }
        if matched.is_empty() {
            return Err(ConfigurationError::NoMatch {
                kind: ObjectKind::SourceFile,
                pattern: pattern.display().to_string(),
            }
            .into());
        }
        matched.sort();

        let count = matched.len();
        debug!(library = %self.name, pattern = %pattern.display(), count, "added source files");
        self.source_files.extend(matched);
        Ok(count)
    }

    /// Declares a test bench and the tests it contains.
    pub fn add_test_bench<S: AsRef<str>>(
        &mut self,
        name: &str,
        tests: &[S],
    ) -> Result<&mut TestBench, ConfigurationError> {
        if self.benches.iter().any(|b| b.name == name) {
            return Err(ConfigurationError::Duplicate {
                kind: ObjectKind::TestBench,
                name: name.to_owned(),
            });
        }
        let mut bench = TestBench {
            library: self.name.clone(),
            name: name.to_owned(),
            tests: Vec::with_capacity(tests.len()),
            generics: Generics::new(),
            configurations: Vec::new(),
        };
        for test in tests {
            let test = test.as_ref();
            if bench.tests.iter().any(|t| t.name == test) {
                return Err(ConfigurationError::Duplicate {
                    kind: ObjectKind::Test,
                    name: format!("{name}.{test}"),
                });
            }
            bench.tests.push(TestCase {
                name: test.to_owned(),
                generics: Generics::new(),
            });
        }
        self.benches.push(bench);
        let last = self.benches.len() - 1;
        Ok(&mut self.benches[last])
    }

    pub fn test_bench_mut(&mut self, pattern: &str) -> Result<&mut TestBench, ConfigurationError> {
        resolve_one(
            ObjectKind::TestBench,
            pattern,
            self.benches.iter_mut(),
            |b| b.name.as_str(),
        )
    }
}

impl TestBench {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    pub fn generics(&self) -> &Generics {
        &self.generics
    }

    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// Resolves `pattern` to exactly one test of this bench.
    pub fn test_mut(&mut self, pattern: &str) -> Result<&mut TestCase, ConfigurationError> {
        resolve_one(ObjectKind::Test, pattern, self.tests.iter_mut(), |t| {
            t.name.as_str()
        })
    }

    /// Sets a generic on the bench itself (all of its tests).
    pub fn set_generic(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.generics.insert(name.into(), value.into());
    }

    /// Adds a named configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Duplicate`] when the bench already has a
    /// configuration of that name.
    pub fn add_config(&mut self, config: Configuration) -> Result<(), ConfigurationError> {
        if self.configurations.iter().any(|c| c.name == config.name) {
            return Err(ConfigurationError::Duplicate {
                kind: ObjectKind::Configuration,
                name: format!("{}.{}", self.name, config.name),
            });
        }
        debug!(bench = %self.name, config = %config.name, "added configuration");
        self.configurations.push(config);
        Ok(())
    }
}

impl TestCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generics(&self) -> &Generics {
        &self.generics
    }

    pub fn set_generic(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        debug!(test = %self.name, generic = %name, "set generic");
        self.generics.insert(name, value.into());
    }
}
