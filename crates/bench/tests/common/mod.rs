#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const BOARDS0: &str = r#"{
  "Boards": [{"Name": "KC705", "Clock": [200, 156]}],
  "Count": 1
}"#;

pub const BOARDS1: &str = r#"{"a": [1, 2, 3], "b": "x"}"#;

pub const BOARD_TESTS: [&str; 4] = [
    "stringified",
    "b16encoded stringified",
    "JSON file",
    "b16encoded JSON file",
];

/// Lays out a project tree: HDL sources, two board documents and a small
/// parsing corpus with one unparsable file.
pub fn project() -> TempDir {
    populate(tempfile::tempdir().expect("tempdir"))
}

/// Same tree, created under `base`.
pub fn project_in(base: &Path) -> TempDir {
    populate(tempfile::tempdir_in(base).expect("tempdir"))
}

fn populate(dir: TempDir) -> TempDir {
    let root = dir.path();
    write(root, "src/JSON.vhdl", "-- parser\n");
    write(root, "src/JSON_ctx.vhdl", "-- context\n");
    write(root, "examples/Boards_VUnit.vhdl", "-- tb_boards\n");
    write(root, "examples/TestSuite.vhdl", "-- tb_suite\n");
    write(root, "data/Boards0.json", BOARDS0);
    write(root, "data/Boards1.json", BOARDS1);
    write(root, "suite/y_array_empty.json", "[]");
    write(root, "suite/y_number_int.json", "[123]");
    write(root, "suite/n_array_unclosed.json", "[1,");
    dir
}

pub fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dir");
    }
    fs::write(&path, contents).unwrap_or_else(|e| panic!("failed to write {:?}: {e}", path));
}
