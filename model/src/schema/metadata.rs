//! Attributes every manifest data source shares: `metadata` and the computed `yaml`.

use crate::schema::{Attribute, Attributes, ElementType, Validator};
use maplit::btreemap;

pub const YAML: &str = "yaml";
pub const METADATA: &str = "metadata";
pub const SPEC: &str = "spec";

const NAME_MAX_LENGTH: usize = 253;
const NAMESPACE_MAX_LENGTH: usize = 63;

/// Whether objects of a kind live in a namespace.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Scope {
    Namespaced,
    Cluster,
}

serde_plain::derive_display_from_serialize!(Scope);

/// The computed attribute that receives the rendered manifest.
pub fn yaml() -> Attribute {
    Attribute::string("The generated manifest in YAML format.").computed()
}

/// The `metadata` attribute. Cluster-scoped kinds have no `namespace`.
pub fn metadata(scope: Scope) -> Attribute {
    let mut attributes: Attributes = btreemap! {
        "name" => Attribute::string(
            "Unique identifier for this object. Name must be unique within a namespace. It is \
             primarily intended for creation idempotence and configuration definition. Cannot be \
             updated. More info: http://kubernetes.io/docs/user-guide/identifiers#names",
        )
        .required()
        .validator(Validator::LengthAtLeast(1))
        .validator(Validator::LengthAtMost(NAME_MAX_LENGTH))
        .validator(Validator::name()),
        "labels" => Attribute::map(
            ElementType::String,
            "Map of string keys and values that can be used to organize and categorize (scope and \
             select) objects. May match selectors of replication controllers and services. More \
             info: http://kubernetes.io/docs/user-guide/labels",
        )
        .optional()
        .validator(Validator::Labels),
        "annotations" => Attribute::map(
            ElementType::String,
            "Unstructured key value map stored with a resource that may be set by external tools \
             to store and retrieve arbitrary metadata. They are not queryable and should be \
             preserved when modifying objects. More info: \
             http://kubernetes.io/docs/user-guide/annotations",
        )
        .optional()
        .validator(Validator::Annotations),
    };
    if scope == Scope::Namespaced {
        attributes.insert(
            "namespace",
            Attribute::string(
                "Namespace defines the space within which each name must be unique. An empty \
                 namespace is equivalent to the 'default' namespace. Cannot be updated. More info: \
                 http://kubernetes.io/docs/user-guide/namespaces",
            )
            .required()
            .validator(Validator::LengthAtLeast(1))
            .validator(Validator::LengthAtMost(NAMESPACE_MAX_LENGTH))
            .validator(Validator::namespace()),
        );
    }
    Attribute::single_nested(
        "Data that helps uniquely identify the object, including a name string and optional \
         namespace.",
        attributes,
    )
    .required()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn namespace_only_for_namespaced_kinds() {
        let namespaced = metadata(Scope::Namespaced);
        let cluster = metadata(Scope::Cluster);
        let nested = |a: &Attribute| a.kind().nested().cloned().unwrap_or_default();
        assert!(nested(&namespaced).contains_key("namespace"));
        assert!(!nested(&cluster).contains_key("namespace"));
        assert!(nested(&cluster)["name"].is_required());
    }

    #[test]
    fn scope_display() {
        assert_eq!(Scope::Namespaced.to_string(), "Namespaced");
        assert_eq!(Scope::Cluster.to_string(), "Cluster");
    }
}
