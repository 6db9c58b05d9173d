#![allow(unused)]

use std::path::PathBuf;

pub fn components_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/components.yaml")
}

pub fn config_constraint_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.join("model/tests/data/config_constraint.yaml")
}

pub fn invalid_names_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.join("model/tests/data/invalid_names.yaml")
}
