use crate::schema::{Attribute, AttributeKind, Attributes};
use serde_json::{Map, Value};

/// Rewrites a configuration object into the shape of a Kubernetes manifest: attribute names become
/// JSON names, unset values disappear and read-only attributes are left out.
pub(super) fn convert_object(attributes: &Attributes, value: &Value) -> Value {
    let mut manifest = Map::new();
    if let Value::Object(object) = value {
        for (name, attribute) in attributes {
            if attribute.is_read_only() {
                continue;
            }
            match object.get(*name) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    manifest.insert(
                        attribute.json_key(name).into_owned(),
                        convert_value(attribute, value),
                    );
                }
            }
        }
    }
    Value::Object(manifest)
}

fn convert_value(attribute: &Attribute, value: &Value) -> Value {
    match (attribute.kind(), value) {
        (AttributeKind::SingleNested(attributes), _) => convert_object(attributes, value),
        (AttributeKind::ListNested(attributes), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| convert_object(attributes, item))
                .collect(),
        ),
        // Map keys are user data, only the nested values are renamed.
        (AttributeKind::MapNested(attributes), Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), convert_object(attributes, item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}
