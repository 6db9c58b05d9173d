
use serde_json::{json, Value};
use std::path::Path;
use tfk8s_model::apps_kubeblocks_io::{Component, ConfigConstraint};
use tfk8s_model::schema::{Attribute, AttributeKind, Attributes, Validator};
use tfk8s_model::{read_configs, Manifest, Provider, TypeMeta};

const COMPONENT: &str = "k8s_apps_kubeblocks_io_component_v1alpha1_manifest";
const CONFIG_CONSTRAINT: &str = "k8s_apps_kubeblocks_io_config_constraint_v1beta1_manifest";

fn read_config(path: &Path) -> Value {
    let mut configs = read_configs(path).unwrap();
    assert_eq!(configs.len(), 1);
    configs.remove(0)
}

/// Reads `config` through the provider and returns the rendered YAML.
fn render(type_name: &str, config: &Value) -> String {
    let response = Provider::new().read(type_name, config);
    assert!(
        !response.diagnostics.has_error(),
        "{}",
        response.diagnostics
    );
    response.yaml().unwrap().to_string()
}

/// Builds the model the data source marshals, without going through YAML.
fn expected_model<M: Manifest>(config: &Value) -> M {
    let mut manifest: M =
        serde_json::from_value(M::schema().to_manifest_value(config)).unwrap();
    manifest.stamp();
    manifest
}

/// Counts the top-level lines of `yaml` that start with `key:`.
fn top_level_count(yaml: &str, key: &str) -> usize {
    yaml.lines()
        .filter(|line| line.starts_with(&format!("{}:", key)))
        .count()
}

#[test]
fn component_type_meta_is_fixed() {
    let yaml = render(COMPONENT, &read_config(&data::component_path()));
    let component: Component = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(
        component.types,
        TypeMeta {
            api_version: Some("apps.kubeblocks.io/v1alpha1".to_string()),
            kind: Some("Component".to_string()),
        }
    );
    assert_eq!(top_level_count(&yaml, "apiVersion"), 1);
    assert_eq!(top_level_count(&yaml, "kind"), 1);
    assert_eq!(top_level_count(&yaml, "yaml"), 0);
}

#[test]
fn config_constraint_type_meta_is_fixed() {
    let yaml = render(
        CONFIG_CONSTRAINT,
        &read_config(&data::config_constraint_path()),
    );
    let constraint: ConfigConstraint = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(
        constraint.types.api_version.as_deref(),
        Some("apps.kubeblocks.io/v1beta1")
    );
    assert_eq!(constraint.types.kind.as_deref(), Some("ConfigConstraint"));
    assert!(constraint.metadata.namespace.is_none());
}

#[test]
fn component_round_trip() {
    let config = read_config(&data::component_path());
    let yaml = render(COMPONENT, &config);
    let decoded: Component = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(decoded, expected_model::<Component>(&config));

    let spec = decoded.spec.unwrap();
    assert_eq!(spec.replicas, 2);
    assert_eq!(spec.service_version.as_deref(), Some("14.8.0"));
    assert_eq!(spec.volume_claim_templates.unwrap()[0].name, "data");
}

#[test]
fn config_constraint_round_trip() {
    let config = read_config(&data::config_constraint_path());
    let yaml = render(CONFIG_CONSTRAINT, &config);
    let decoded: ConfigConstraint = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(decoded, expected_model::<ConfigConstraint>(&config));

    let spec = decoded.spec.unwrap();
    let schema_in_json = spec.parameters_schema.unwrap().schema_in_json.unwrap();
    assert_eq!(schema_in_json["properties"]["maxclients"]["minimum"], 1);
}

#[test]
fn state_echoes_config() {
    let config = read_config(&data::component_path());
    let response = Provider::new().read(COMPONENT, &config);
    let mut state = response.state.unwrap();
    let object = state.as_object_mut().unwrap();
    assert!(object.remove("yaml").unwrap().is_string());
    assert_eq!(state, config);
}

#[test]
fn invalid_names_are_rejected_before_read() {
    let configs = read_configs(&data::invalid_names_path()).unwrap();
    assert_eq!(configs.len(), 3);
    let expected = [
        ("metadata.name", "Invalid Attribute Value Match"),
        ("metadata.namespace", "Invalid Attribute Value Length"),
        ("metadata.name", "Invalid Attribute Value Length"),
    ];
    let provider = Provider::new();
    for (config, (path, summary)) in configs.iter().zip(expected) {
        let response = provider.read(COMPONENT, config);
        assert!(response.state.is_none());
        assert!(response.yaml().is_none());
        let error = response.diagnostics.errors().next().unwrap();
        assert_eq!(error.attribute.as_ref().unwrap().to_string(), path);
        assert_eq!(error.summary, summary);
    }
}

/// The inclusive range the integer validators of `attribute` allow.
fn integer_range(attribute: &Attribute) -> (i64, i64) {
    attribute
        .validators()
        .iter()
        .fold((i64::MIN, i64::MAX), |(lo, hi), validator| match validator {
            Validator::AtLeast(min) => (lo.max(*min), hi),
            Validator::AtMost(max) => (lo, hi.min(*max)),
            _ => (lo, hi),
        })
}

/// A value that satisfies the type and the validators of `attribute`.
fn sample(attribute: &Attribute) -> Value {
    match attribute.kind() {
        AttributeKind::String => attribute
            .validators()
            .iter()
            .find_map(|validator| match validator {
                Validator::OneOf(values) => values.first().map(|value| json!(value)),
                _ => None,
            })
            .unwrap_or_else(|| json!("a")),
        AttributeKind::Bool => json!(true),
        AttributeKind::Int64 => {
            let (lo, hi) = integer_range(attribute);
            json!(0_i64.clamp(lo, hi))
        }
        AttributeKind::Float64 => json!(0.5),
        AttributeKind::IntOrString => json!("a"),
        AttributeKind::List(_) | AttributeKind::ListNested(_) => json!([]),
        AttributeKind::Map(_) | AttributeKind::MapNested(_) | AttributeKind::Dynamic => json!({}),
        AttributeKind::SingleNested(attributes) => minimal(attributes),
    }
}

/// An object holding only the required attributes.
fn minimal(attributes: &Attributes) -> Value {
    Value::Object(
        attributes
            .iter()
            .filter(|(_, attribute)| attribute.is_required())
            .map(|(name, attribute)| (name.to_string(), sample(attribute)))
            .collect(),
    )
}

/// The first and last values an integer or int-or-string attribute accepts, plus the string forms
/// of an int-or-string.
fn edge_values(attribute: &Attribute) -> Vec<Value> {
    let (lo, hi) = integer_range(attribute);
    let mut values = vec![json!(lo), json!(hi)];
    if let AttributeKind::IntOrString = attribute.kind() {
        values.extend([json!("a"), json!("50%"), json!("")]);
    }
    values
}

/// The integers just outside the range of an integer or int-or-string attribute.
fn outside_values(attribute: &Attribute) -> Vec<Value> {
    let (lo, hi) = integer_range(attribute);
    lo.checked_sub(1)
        .into_iter()
        .chain(hi.checked_add(1))
        .map(|value| json!(value))
        .collect()
}

/// Builds one configuration per integer attribute and value, each otherwise holding only required
/// attributes. Every entry carries the path of the attribute it sets.
fn configs_setting_integers(
    attributes: &Attributes,
    parent: &str,
    values: &dyn Fn(&Attribute) -> Vec<Value>,
    configs: &mut Vec<(String, Value)>,
) {
    for (name, attribute) in attributes {
        if attribute.is_read_only() {
            continue;
        }
        let path = if parent.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", parent, name)
        };
        let mut placed = Vec::new();
        match attribute.kind() {
            AttributeKind::Int64 | AttributeKind::IntOrString => {
                placed.extend(values(attribute).into_iter().map(|v| (path.clone(), v)));
            }
            AttributeKind::SingleNested(nested) => {
                configs_setting_integers(nested, &path, values, &mut placed)
            }
            AttributeKind::ListNested(nested) => {
                let mut items = Vec::new();
                configs_setting_integers(nested, &format!("{}[0]", path), values, &mut items);
                placed.extend(items.into_iter().map(|(p, item)| (p, json!([item]))));
            }
            AttributeKind::MapNested(nested) => {
                let mut entries = Vec::new();
                configs_setting_integers(nested, &format!("{}[\"k\"]", path), values, &mut entries);
                placed.extend(entries.into_iter().map(|(p, entry)| (p, json!({ "k": entry }))));
            }
            _ => {}
        }
        for (path, value) in placed {
            let mut object = minimal(attributes);
            object[*name] = value;
            configs.push((path, object));
        }
    }
}

const DATA_SOURCES: [(&str, &str, &str); 2] = [
    (COMPONENT, "apps.kubeblocks.io/v1alpha1", "Component"),
    (CONFIG_CONSTRAINT, "apps.kubeblocks.io/v1beta1", "ConfigConstraint"),
];

#[test]
fn integer_edges_render_fixed_type_meta() {
    let provider = Provider::new();
    for (type_name, api_version, kind) in DATA_SOURCES {
        let schema = provider.schema(type_name).unwrap();
        let mut configs = Vec::new();
        configs_setting_integers(schema.attributes(), "", &edge_values, &mut configs);
        assert!(!configs.is_empty(), "{}", type_name);
        for (path, config) in configs {
            let diagnostics = provider.validate(type_name, &config);
            assert!(diagnostics.is_empty(), "{} {}: {}", type_name, path, diagnostics);

            let response = provider.read(type_name, &config);
            assert!(
                !response.diagnostics.has_error(),
                "{} {}: {}",
                type_name,
                path,
                response.diagnostics
            );
            let manifest: serde_yaml::Value =
                serde_yaml::from_str(response.yaml().unwrap()).unwrap();
            assert_eq!(manifest["apiVersion"].as_str(), Some(api_version), "{}", path);
            assert_eq!(manifest["kind"].as_str(), Some(kind), "{}", path);
        }
    }
}

#[test]
fn integers_out_of_range_fail_validation() {
    let provider = Provider::new();
    for (type_name, _, _) in DATA_SOURCES {
        let schema = provider.schema(type_name).unwrap();
        let mut configs = Vec::new();
        configs_setting_integers(schema.attributes(), "", &outside_values, &mut configs);
        assert!(!configs.is_empty(), "{}", type_name);
        for (path, config) in configs {
            let response = provider.read(type_name, &config);
            assert!(response.state.is_none(), "{} {}", type_name, path);
            let errors: Vec<_> = response
                .diagnostics
                .errors()
                .map(|error| {
                    (
                        error.summary.as_str(),
                        error.attribute.as_ref().unwrap().to_string(),
                    )
                })
                .collect();
            assert_eq!(errors, vec![("Invalid Attribute Value", path.clone())], "{}", type_name);
        }
    }
}

#[test]
fn replicas_past_int32_are_rejected_before_read() {
    let config = json!({
        "metadata": {"name": "big", "namespace": "demo"},
        "spec": {"comp_def": "x", "replicas": 3_000_000_000_i64},
    });
    let provider = Provider::new();
    assert!(provider.validate(COMPONENT, &config).has_error());
    let response = provider.read(COMPONENT, &config);
    assert!(response.state.is_none());
    assert!(response
        .diagnostics
        .errors()
        .all(|error| error.summary != "Unable to decode configuration"));

    let mut config = config;
    config["spec"]["replicas"] = json!(i32::MAX);
    let component: Component = serde_yaml::from_str(&render(COMPONENT, &config)).unwrap();
    assert_eq!(component.spec.unwrap().replicas, i32::MAX);
}
