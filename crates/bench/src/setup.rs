//! The setup routine: configuration in, bound registry out.

use std::path::Path;

use tracing::info;

use crate::binder::bind;
use crate::config::SetupConfig;
use crate::corpus::{discover, Discovery};
use crate::encoding::Documents;
use crate::error::{Error, Result};
use crate::plan::TestPlan;
use crate::registry::Registry;

/// A fully bound project, ready to hand to an engine.
#[derive(Debug)]
pub struct Setup {
    pub registry: Registry,
    /// Present when the configuration has a corpus.
    pub discovery: Option<Discovery>,
}

impl Setup {
    pub fn plan(&self) -> TestPlan {
        self.registry.plan()
    }

    /// Fails if any corpus entry was skipped.
    pub fn ensure_complete(&self) -> Result<()> {
        match &self.discovery {
            Some(d) if !d.is_complete() => Err(Error::Incomplete {
                skipped: d.skipped.len(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builds the registry described by `config` and binds every generic.
///
/// Steps run in this order: libraries and their sources, project-wide
/// generics, scenario bindings, corpus discovery. The first configuration,
/// encoding or I/O error aborts setup; only per-file corpus failures are
/// collected instead (see [`Discovery::skipped`]).
pub fn setup(config: &SetupConfig) -> Result<Setup> {
    let root = config.root();
    let mut documents = Documents::new(root);
    let mut registry = Registry::new();

    for lib in &config.libraries {
        let library = registry.add_library(&lib.name)?;
        for pattern in &lib.sources {
            library.add_source_files(&documents.resolve(Path::new(pattern)))?;
        }
        for bench in &lib.benches {
            library.add_test_bench(&bench.name, &bench.tests)?;
        }
    }

    for global in &config.globals {
        let value = documents.encode(&global.document, global.encoding, global.annotate)?;
        let name = global.generic.as_deref().unwrap_or(&config.generic);
        registry.set_global_generic(name, value);
    }

    for binding in &config.bindings {
        bind(&mut registry, binding, &config.generic, &mut documents)?;
    }

    let discovery = match &config.corpus {
        Some(spec) => Some(discover(&mut registry, spec, &config.generic, &mut documents)?),
        None => None,
    };

    info!(
        root = %root.display(),
        libraries = registry.libraries().len(),
        "setup complete"
    );
    Ok(Setup {
        registry,
        discovery,
    })
}
