//! Binds hand-named scenarios of one test bench to generic values.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info};

use crate::encoding::{Documents, GenericEncoding};
use crate::error::Result;
use crate::registry::Registry;

/// One test of a bench and the generic value it receives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Pattern that must match exactly one test of the bench.
    pub test: String,
    pub encoding: GenericEncoding,
    pub document: PathBuf,
    /// Overrides the binding's generic name.
    #[serde(default)]
    pub generic: Option<String>,
    #[serde(default)]
    pub annotate: bool,
}

/// A test bench and the scenarios bound on it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchBinding {
    /// Restricts the bench lookup to one library.
    #[serde(default)]
    pub library: Option<String>,
    /// Pattern that must match exactly one test bench.
    pub bench: String,
    /// Generic name used by scenarios that do not set their own.
    #[serde(default)]
    pub generic: Option<String>,
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

/// Applies `binding`: resolves its bench, then sets one generic on the test
/// each scenario resolves to. Nothing is run.
///
/// Returns the number of tests bound.
///
/// # Errors
///
/// Fails on the first pattern that matches zero or several objects, and on
/// any document that cannot be loaded or encoded. Tests bound before the
/// failure keep their generic.
pub fn bind(
    registry: &mut Registry,
    binding: &BenchBinding,
    default_generic: &str,
    documents: &mut Documents,
) -> Result<usize> {
    let bench = registry.test_bench_mut(binding.library.as_deref(), &binding.bench)?;
    let generic = binding.generic.as_deref().unwrap_or(default_generic);

    for scenario in &binding.scenarios {
        let test = bench.test_mut(&scenario.test)?;
        let value = documents.encode(&scenario.document, scenario.encoding, scenario.annotate)?;
        let name = scenario.generic.as_deref().unwrap_or(generic);
        debug!(
            bench = %binding.bench,
            test = test.name(),
            encoding = %scenario.encoding,
            generic = name,
            "bound scenario"
        );
        test.set_generic(name, value);
    }

    info!(bench = bench.name(), count = binding.scenarios.len(), "bound scenarios");
    Ok(binding.scenarios.len())
}
