/*!

The declarative schema of a data source: which attributes a configuration may set, their types,
whether they are required and the validators that run before the data source is read.

!*/

pub use attribute::{Attribute, AttributeKind, Attributes, ElementType};
pub use path::{AttributePath, PathStep};
pub use validator::Validator;

use crate::diagnostics::Diagnostics;
use crate::error::{self, Result};
use serde::Serialize;
use serde_json::Value;
use snafu::ResultExt;

mod attribute;
mod convert;
pub mod corev1;
pub mod metadata;
mod path;
mod validate;
mod validator;

/// The schema of a data source. The top level behaves like a single nested attribute without a
/// name.
#[derive(Clone, Debug, Serialize)]
pub struct Schema {
    description: &'static str,
    attributes: Attributes,
}

impl Schema {
    pub fn new(description: &'static str, attributes: Attributes) -> Self {
        Self {
            description,
            attributes,
        }
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Looks up a top-level attribute.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Checks `config` against the declared attributes and their validators.
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        validate::validate_object(
            &self.attributes,
            config,
            &AttributePath::root(),
            &mut diagnostics,
        );
        diagnostics
    }

    /// Rewrites `config`, which uses Terraform attribute names, into the JSON shape of the
    /// Kubernetes object. Nulls and read-only attributes are dropped. Map keys and dynamic values
    /// are passed through untouched.
    pub fn to_manifest_value(&self, config: &Value) -> Value {
        convert::convert_object(&self.attributes, config)
    }

    /// The schema as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)
            .context(error::JsonSerializeSnafu { what: "schema" })?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use maplit::btreemap;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new(
            "Test schema.",
            btreemap! {
                "yaml" => Attribute::string("Output.").computed(),
                "metadata" => Attribute::single_nested(
                    "Metadata.",
                    btreemap! {
                        "name" => Attribute::string("Name.")
                            .required()
                            .validator(Validator::LengthAtLeast(1))
                            .validator(Validator::name()),
                        "labels" => Attribute::map(ElementType::String, "Labels.")
                            .optional()
                            .validator(Validator::Labels),
                    },
                )
                .required(),
                "spec" => Attribute::single_nested(
                    "Spec.",
                    btreemap! {
                        "replicas" => Attribute::int64("Replicas.")
                            .required()
                            .validator(Validator::AtLeast(0)),
                        "node_selector" => Attribute::map(ElementType::String, "Selector.")
                            .optional(),
                        "cluster_ip" => Attribute::string("IP.").optional().json_name("clusterIP"),
                        "tolerations" => Attribute::list_nested(
                            "Tolerations.",
                            btreemap! {
                                "toleration_seconds" => Attribute::int64("Seconds.").optional(),
                                "effect" => Attribute::string("Effect.")
                                    .optional()
                                    .validator(Validator::one_of(["NoSchedule", "NoExecute"])),
                            },
                        )
                        .optional(),
                        "schema" => Attribute::dynamic("Anything.").optional(),
                        "port" => Attribute::int32("Port.").optional(),
                        "target_port" => Attribute::int_or_string("Target port.").optional(),
                        "templates" => Attribute::map_nested(
                            "Templates.",
                            btreemap! {
                                "config_map" => Attribute::string("Map.").optional(),
                            },
                        )
                        .optional(),
                    },
                )
                .optional(),
            },
        )
    }

    fn summaries(diagnostics: &Diagnostics) -> Vec<(String, String)> {
        diagnostics
            .iter()
            .map(|d| {
                (
                    d.summary.clone(),
                    d.attribute
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                )
            })
            .collect()
    }

    #[test]
    fn valid_config() {
        let config = json!({
            "metadata": { "name": "example", "labels": { "app": "db" } },
            "spec": {
                "replicas": 3,
                "tolerations": [{ "effect": "NoSchedule", "toleration_seconds": null }],
                "schema": { "anything": ["goes", 1, true] },
            },
            "yaml": null,
        });
        let diagnostics = schema().validate(&config);
        assert!(diagnostics.is_empty(), "{}", diagnostics);
    }

    #[test]
    fn missing_required_attributes() {
        let diagnostics = schema().validate(&json!({ "metadata": {}, "spec": {} }));
        assert_eq!(
            summaries(&diagnostics),
            vec![
                (
                    "Missing Configuration for Required Attribute".to_string(),
                    "metadata.name".to_string()
                ),
                (
                    "Missing Configuration for Required Attribute".to_string(),
                    "spec.replicas".to_string()
                ),
            ]
        );
    }

    #[test]
    fn optional_nested_attribute_may_be_absent() {
        let diagnostics = schema().validate(&json!({ "metadata": { "name": "a" } }));
        assert!(diagnostics.is_empty(), "{}", diagnostics);
    }

    #[test]
    fn read_only_and_unknown_attributes() {
        let config = json!({
            "metadata": { "name": "a", "uid": "1234" },
            "yaml": "apiVersion: v1",
        });
        assert_eq!(
            summaries(&schema().validate(&config)),
            vec![
                ("Unsupported argument".to_string(), "metadata.uid".to_string()),
                (
                    "Invalid Configuration for Read-Only Attribute".to_string(),
                    "yaml".to_string()
                ),
            ]
        );
    }

    #[test]
    fn wrong_types() {
        let config = json!({
            "metadata": { "name": "a", "labels": { "app": 1 } },
            "spec": {
                "replicas": "3",
                "tolerations": [{ "effect": "Sometimes" }, "nope"],
                "templates": { "x": { "config_map": true } },
            },
        });
        assert_eq!(
            summaries(&schema().validate(&config)),
            vec![
                (
                    "Incorrect attribute value type".to_string(),
                    "metadata.labels".to_string()
                ),
                (
                    "Incorrect attribute value type".to_string(),
                    "spec.replicas".to_string()
                ),
                (
                    "Incorrect attribute value type".to_string(),
                    r#"spec.templates["x"].config_map"#.to_string()
                ),
                (
                    "Invalid Attribute Value Match".to_string(),
                    "spec.tolerations[0].effect".to_string()
                ),
                (
                    "Incorrect attribute value type".to_string(),
                    "spec.tolerations[1]".to_string()
                ),
            ]
        );
    }

    #[test]
    fn validators_run_on_nested_values() {
        let config = json!({
            "metadata": { "name": "Not_Valid" },
            "spec": { "replicas": -1 },
        });
        assert_eq!(
            summaries(&schema().validate(&config)),
            vec![
                (
                    "Invalid Attribute Value Match".to_string(),
                    "metadata.name".to_string()
                ),
                ("Invalid Attribute Value".to_string(), "spec.replicas".to_string()),
            ]
        );
    }

    #[test]
    fn int32_range() {
        let config = |port: i64| json!({ "metadata": { "name": "a" }, "spec": { "port": port } });
        for port in [i64::from(i32::MIN), 0, i64::from(i32::MAX)] {
            let diagnostics = schema().validate(&config(port));
            assert!(diagnostics.is_empty(), "{}: {}", port, diagnostics);
        }
        for port in [i64::from(i32::MIN) - 1, i64::from(i32::MAX) + 1, 3_000_000_000] {
            assert_eq!(
                summaries(&schema().validate(&config(port))),
                vec![("Invalid Attribute Value".to_string(), "spec.port".to_string())],
                "{}",
                port
            );
        }
    }

    #[test]
    fn int_or_string_shapes() {
        let config = |target_port: Value| {
            json!({ "metadata": { "name": "a" }, "spec": { "target_port": target_port } })
        };
        for target_port in [json!("http"), json!("50%"), json!(8080), json!(i32::MAX)] {
            let diagnostics = schema().validate(&config(target_port.clone()));
            assert!(diagnostics.is_empty(), "{}: {}", target_port, diagnostics);
        }
        for target_port in [json!(true), json!(80.5), json!({ "port": 80 }), json!([80])] {
            assert_eq!(
                summaries(&schema().validate(&config(target_port.clone()))),
                vec![(
                    "Incorrect attribute value type".to_string(),
                    "spec.target_port".to_string()
                )],
                "{}",
                target_port
            );
        }
        assert_eq!(
            summaries(&schema().validate(&config(json!(2_147_483_648_i64)))),
            vec![("Invalid Attribute Value".to_string(), "spec.target_port".to_string())]
        );
    }

    #[test]
    fn root_must_be_an_object() {
        let diagnostics = schema().validate(&json!([]));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().all(|d| d.attribute.is_none()));
    }

    #[test]
    fn manifest_value() {
        let config = json!({
            "yaml": "ignored",
            "metadata": { "name": "a", "labels": { "app_name": "db" } },
            "spec": {
                "replicas": 1,
                "node_selector": { "disk_type": "ssd" },
                "cluster_ip": "None",
                "tolerations": [{ "toleration_seconds": 30, "effect": null }],
                "schema": { "snake_case": { "stays": true } },
                "templates": { "my_template": { "config_map": "cm" } },
            },
        });
        assert_eq!(
            schema().to_manifest_value(&config),
            json!({
                "metadata": { "name": "a", "labels": { "app_name": "db" } },
                "spec": {
                    "replicas": 1,
                    "nodeSelector": { "disk_type": "ssd" },
                    "clusterIP": "None",
                    "tolerations": [{ "tolerationSeconds": 30 }],
                    "schema": { "snake_case": { "stays": true } },
                    "templates": { "my_template": { "configMap": "cm" } },
                },
            })
        );
    }
}
