//! The test plan: everything the engine needs, as one serializable value.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::registry::{Generics, Registry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestPlan {
    pub libraries: Vec<LibraryPlan>,
    /// Generics set on every bench.
    pub globals: Generics,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryPlan {
    pub name: String,
    pub sources: Vec<PathBuf>,
}

/// One generic value on one object.
///
/// With neither `test` nor `configuration` set the value applies to the
/// whole bench.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub library: String,
    pub bench: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    pub generic: String,
    pub value: String,
}

impl TestPlan {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Plan)
    }

    /// Bindings for one bench, in plan order.
    pub fn bindings_for<'a>(&'a self, bench: &'a str) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |b| b.bench == bench)
    }
}

impl Registry {
    /// Snapshots the registry. Per bench, bench generics come first, then
    /// test generics in test order, then configurations in the order they
    /// were added.
    pub fn plan(&self) -> TestPlan {
        let mut libraries = Vec::new();
        let mut bindings = Vec::new();

        for library in self.libraries() {
            libraries.push(LibraryPlan {
                name: library.name().to_owned(),
                sources: library.source_files().to_vec(),
            });

            for bench in library.test_benches() {
                let binding = |test: Option<&str>, config: Option<&str>, generic: &str, value: &str| Binding {
                    library: library.name().to_owned(),
                    bench: bench.name().to_owned(),
                    test: test.map(str::to_owned),
                    configuration: config.map(str::to_owned),
                    generic: generic.to_owned(),
                    value: value.to_owned(),
                };

                for (generic, value) in bench.generics() {
                    bindings.push(binding(None, None, generic, value));
                }
                for test in bench.tests() {
                    for (generic, value) in test.generics() {
                        bindings.push(binding(Some(test.name()), None, generic, value));
                    }
                }
                for config in bench.configurations() {
                    for (generic, value) in &config.generics {
                        bindings.push(binding(
                            config.test.as_deref(),
                            Some(&config.name),
                            generic,
                            value,
                        ));
                    }
                }
            }
        }

        TestPlan {
            libraries,
            globals: self.globals().clone(),
            bindings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Configuration;

    #[test]
    fn plan_orders_bench_test_then_configuration_bindings() {
        let mut registry = Registry::new();
        registry
            .add_library("lib")
            .unwrap()
            .add_test_bench("tb_suite", &["parse"])
            .unwrap();
        registry.set_global_generic("tb_cfg_file", "g.json");

        let bench = registry.test_bench_mut(None, "tb_suite").unwrap();
        bench
            .add_config(Configuration::new("y_a").with_generic("tb_cfg", "a.json"))
            .unwrap();
        bench.test_mut("parse").unwrap().set_generic("tb_cfg", "t.json");
        bench.set_generic("tb_mode", "strict");

        let plan = registry.plan();
        let order: Vec<(Option<&str>, Option<&str>, &str)> = plan
            .bindings
            .iter()
            .map(|b| (b.test.as_deref(), b.configuration.as_deref(), b.value.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (None, None, "strict"),
                (Some("parse"), None, "t.json"),
                (None, Some("y_a"), "a.json"),
            ]
        );
        assert_eq!(plan.globals.get("tb_cfg_file").map(String::as_str), Some("g.json"));
        assert_eq!(plan.bindings_for("tb_suite").count(), 3);
        assert_eq!(plan.bindings_for("tb_boards").count(), 0);
    }

    #[test]
    fn json_omits_absent_test_and_configuration() {
        let mut registry = Registry::new();
        registry
            .add_library("lib")
            .unwrap()
            .add_test_bench("tb", &["t"])
            .unwrap()
            .set_generic("g", "v");
        let json = registry.plan().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed["bindings"][0],
            serde_json::json!({"library": "lib", "bench": "tb", "generic": "g", "value": "v"})
        );
    }
}
