use crate::schema::metadata::Scope;
use crate::schema::Schema;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The `apiVersion` and `kind` of a manifest. Both are left empty when a manifest is decoded from
/// configuration and are filled in by `Manifest::stamp`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A Kubernetes object that a manifest data source renders. The `k8s_openapi::Resource` constants
/// provide the identity that is stamped onto every rendered manifest, and `schema` declares the
/// Terraform attributes that populate it.
pub trait Manifest:
    k8s_openapi::Resource
    + k8s_openapi::Metadata<Ty = ObjectMeta>
    + Serialize
    + DeserializeOwned
    + Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Whether objects of this kind live in a namespace.
    const SCOPE: Scope;

    /// The data source schema.
    fn schema() -> Schema;

    fn type_meta(&self) -> &TypeMeta;

    fn type_meta_mut(&mut self) -> &mut TypeMeta;

    /// Sets `apiVersion` and `kind` to the constants of this kind, replacing whatever was there.
    fn stamp(&mut self) {
        let type_meta = self.type_meta_mut();
        type_meta.api_version = Some(Self::API_VERSION.to_string());
        type_meta.kind = Some(Self::KIND.to_string());
    }

    /// Returns the metadata.name field, unwrapping a potential `None` with `""`.
    fn object_name(&self) -> &str {
        self.metadata().name.as_deref().unwrap_or("")
    }

    /// Returns this object's YAML representation as a String.
    fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// The Terraform type name of the data source, e.g.
    /// `k8s_apps_kubeblocks_io_component_v1alpha1_manifest`.
    fn data_source_type_name(provider_type_name: &str) -> String {
        format!(
            "{}_{}_{}_{}_manifest",
            provider_type_name,
            Self::GROUP.replace('.', "_"),
            to_snake_case(Self::KIND),
            Self::VERSION
        )
    }
}

/// `ConfigConstraint` -> `config_constraint`.
fn to_snake_case(camel: &str) -> String {
    let mut snake = String::with_capacity(camel.len() + 4);
    for (i, c) in camel.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}
