/*!

This library provides the manifest data sources of the `k8s` Terraform provider: the schemas of
the Kubernetes custom resources they render, the validation that runs before a read, and the read
itself, which turns a configuration into a YAML manifest.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use catalog::{Catalog, CatalogEntry};
pub use config::{parse_configs, read_configs};
pub use data_source::{DataSource, DataSourceInfo, ManifestDataSource, ReadRequest, ReadResponse};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
pub use manifest::{Manifest, TypeMeta};
pub use provider::Provider;
pub use schema::Schema;

pub mod apps_kubeblocks_io;
mod catalog;
mod config;
pub mod constants;
mod data_source;
mod diagnostics;
pub mod docs;
mod error;
mod manifest;
mod provider;
pub mod schema;
