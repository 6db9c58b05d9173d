use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::manifest::Manifest;
use crate::schema::metadata::{Scope, YAML};
use crate::schema::Schema;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// The input of `DataSource::read`.
#[derive(Debug, Clone, Copy)]
pub struct ReadRequest<'a> {
    /// The full Terraform type name the data source was registered under.
    pub type_name: &'a str,
    /// The configuration, keyed by Terraform attribute names. It has already been validated
    /// against the data source schema.
    pub config: &'a Value,
}

/// The output of `DataSource::read`. `state` is only present when `diagnostics` has no errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    pub(crate) fn from_diagnostics(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }

    /// The rendered manifest held in the `yaml` attribute of the state.
    pub fn yaml(&self) -> Option<&str> {
        self.state
            .as_ref()
            .and_then(|state| state.get(YAML))
            .and_then(Value::as_str)
    }
}

/// What kind of object a data source renders, for listings.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DataSourceInfo {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub scope: Scope,
}

/// A read-only Terraform data source.
pub trait DataSource: Debug + Send + Sync {
    /// The Terraform type name of this data source under the provider `provider_type_name`.
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> Schema;

    fn info(&self) -> DataSourceInfo;

    /// Computes the state from a validated configuration.
    fn read(&self, request: ReadRequest<'_>) -> ReadResponse;
}

/// The data source that renders a `Manifest` of type `M` as YAML.
pub struct ManifestDataSource<M> {
    _manifest: PhantomData<fn() -> M>,
}

impl<M: Manifest> ManifestDataSource<M> {
    pub fn new() -> Self {
        Self {
            _manifest: PhantomData,
        }
    }
}

impl<M: Manifest> Default for ManifestDataSource<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Manifest> Debug for ManifestDataSource<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestDataSource")
            .field("api_version", &M::API_VERSION)
            .field("kind", &M::KIND)
            .finish()
    }
}

impl<M: Manifest> DataSource for ManifestDataSource<M> {
    fn type_name(&self, provider_type_name: &str) -> String {
        M::data_source_type_name(provider_type_name)
    }

    fn schema(&self) -> Schema {
        M::schema()
    }

    fn info(&self) -> DataSourceInfo {
        DataSourceInfo {
            api_version: M::API_VERSION,
            kind: M::KIND,
            scope: M::SCOPE,
        }
    }

    fn read(&self, request: ReadRequest<'_>) -> ReadResponse {
        debug!("Read resource {}", request.type_name);

        let manifest_value = M::schema().to_manifest_value(request.config);
        let mut manifest: M = match serde_json::from_value(manifest_value) {
            Ok(manifest) => manifest,
            Err(e) => {
                return ReadResponse::from_diagnostics(
                    Diagnostic::error(
                        "Unable to decode configuration",
                        format!(
                            "The configuration of {} could not be converted into a {} object: {}",
                            request.type_name,
                            M::KIND,
                            e
                        ),
                    )
                    .into(),
                )
            }
        };
        manifest.stamp();

        let yaml = match manifest.to_yaml() {
            Ok(yaml) => yaml,
            Err(e) => {
                return ReadResponse::from_diagnostics(
                    Diagnostic::error(
                        "Unable to marshal YAML",
                        format!(
                            "An unexpected error occurred while marshalling the {} manifest \
                             '{}': {}",
                            M::KIND,
                            manifest.object_name(),
                            e
                        ),
                    )
                    .into(),
                )
            }
        };

        let mut state = match request.config {
            Value::Object(config) => config.clone(),
            _ => Map::new(),
        };
        state.insert(YAML.to_string(), Value::String(yaml));
        ReadResponse {
            state: Some(Value::Object(state)),
            diagnostics: Diagnostics::new(),
        }
    }
}
