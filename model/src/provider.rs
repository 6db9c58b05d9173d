use crate::apps_kubeblocks_io::{Component, ConfigConstraint};
use crate::catalog::{Catalog, CatalogEntry};
use crate::constants::PROVIDER_TYPE_NAME;
use crate::data_source::{DataSource, ManifestDataSource, ReadRequest, ReadResponse};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::manifest::Manifest;
use crate::schema::Schema;
use log::{debug, trace, warn};
use serde_json::Value;
use std::collections::BTreeMap;

/// The `k8s` provider. It holds every manifest data source, keyed by Terraform type name.
#[derive(Debug)]
pub struct Provider {
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider {
    /// Creates a provider with all manifest data sources registered.
    pub fn new() -> Self {
        let mut provider = Self {
            data_sources: BTreeMap::new(),
        };
        provider.register::<Component>();
        provider.register::<ConfigConstraint>();
        provider
    }

    fn register<M: Manifest>(&mut self) {
        let data_source = ManifestDataSource::<M>::new();
        let type_name = data_source.type_name(PROVIDER_TYPE_NAME);
        trace!("Registering data source '{}'", type_name);
        if self
            .data_sources
            .insert(type_name.clone(), Box::new(data_source))
            .is_some()
        {
            warn!(
                "Data source '{}' was registered twice, keeping the last one",
                type_name
            );
        }
    }

    pub fn type_name(&self) -> &'static str {
        PROVIDER_TYPE_NAME
    }

    /// The type names of all data sources, sorted.
    pub fn data_source_types(&self) -> Vec<&str> {
        self.data_sources.keys().map(String::as_str).collect()
    }

    pub fn data_source(&self, type_name: &str) -> Option<&dyn DataSource> {
        debug!("Looking up data source '{}'", type_name);
        self.data_sources.get(type_name).map(Box::as_ref)
    }

    pub fn schema(&self, type_name: &str) -> Option<Schema> {
        self.data_source(type_name).map(|data_source| data_source.schema())
    }

    /// Checks `config` against the schema of `type_name` without reading it.
    pub fn validate(&self, type_name: &str, config: &Value) -> Diagnostics {
        match self.data_source(type_name) {
            Some(data_source) => {
                let diagnostics = data_source.schema().validate(config);
                trace!(
                    "Validation of '{}' produced {} diagnostics",
                    type_name,
                    diagnostics.len()
                );
                diagnostics
            }
            None => not_found(type_name).into(),
        }
    }

    /// Validates `config` and, when there are no errors, reads the data source.
    pub fn read(&self, type_name: &str, config: &Value) -> ReadResponse {
        let data_source = match self.data_source(type_name) {
            Some(data_source) => data_source,
            None => {
                return ReadResponse {
                    state: None,
                    diagnostics: not_found(type_name).into(),
                }
            }
        };
        let diagnostics = data_source.schema().validate(config);
        if diagnostics.has_error() {
            debug!(
                "Not reading '{}', the configuration has {} errors",
                type_name,
                diagnostics.errors().count()
            );
            return ReadResponse {
                state: None,
                diagnostics,
            };
        }
        let mut response = data_source.read(ReadRequest { type_name, config });
        let mut all = diagnostics;
        all.extend(response.diagnostics);
        response.diagnostics = all;
        response
    }

    /// A listing of every data source for display.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(
            self.data_sources
                .iter()
                .map(|(type_name, data_source)| {
                    let info = data_source.info();
                    CatalogEntry {
                        type_name: type_name.clone(),
                        api_version: info.api_version.to_string(),
                        kind: info.kind.to_string(),
                        scope: info.scope,
                    }
                })
                .collect(),
        )
    }
}

fn not_found(type_name: &str) -> Diagnostic {
    Diagnostic::error(
        "Data Source Type Not Found",
        format!(
            "No data source named '{}' is registered with the {} provider.",
            type_name, PROVIDER_TYPE_NAME
        ),
    )
}
