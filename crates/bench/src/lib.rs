//! Test-bench parameterization for an HDL JSON parser.
//!
//! Configuration documents reach the device under test through string
//! generics of its test benches. This crate builds those generic values and
//! attaches them to the right tests before an external engine runs them:
//!
//! - [`registry`]: libraries, benches and tests, looked up by [`glob`]
//!   pattern with exact-one-match checks
//! - [`binder`]: hand-named scenarios, one generic per test
//! - [`corpus`]: one configuration per fixture file in a directory
//! - [`setup`]: the whole pass, driven by a TOML [`config`]
//! - [`engine`]: hands the resulting [`plan`] to the engine
//!
//! # Example
//!
//! ```
//! use json_tb_bench::{GenericEncoding, Registry};
//!
//! let mut registry = Registry::new();
//! registry
//!     .add_library("lib")?
//!     .add_test_bench("tb_boards", &["stringified", "JSON file"])?;
//!
//! let bench = registry.test_bench_mut(None, "*tb_boards*")?;
//! bench.test_mut("stringified*")?.set_generic("tb_cfg", r#"{"a":[1]}"#);
//!
//! let plan = registry.plan();
//! assert_eq!(plan.bindings[0].test.as_deref(), Some("stringified"));
//! assert!(GenericEncoding::Stringified.reads_content());
//! # Ok::<(), json_tb_bench::ConfigurationError>(())
//! ```

pub mod binder;
pub mod config;
pub mod corpus;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod glob;
pub mod plan;
pub mod registry;
pub mod setup;

pub use binder::{bind, BenchBinding, Scenario};
pub use config::{SetupConfig, DEFAULT_GENERIC};
pub use corpus::{discover, list_corpus, CorpusEntry, CorpusSpec, Discovery, SkippedEntry};
pub use encoding::{load_json, Documents, GenericEncoding};
pub use engine::{CommandEngine, Engine, RunOutcome};
pub use error::{ConfigurationError, Error, ObjectKind, Result};
pub use plan::{Binding, LibraryPlan, TestPlan};
pub use registry::{Configuration, Generics, Library, Registry, TestBench, TestCase};
pub use setup::{setup, Setup};
