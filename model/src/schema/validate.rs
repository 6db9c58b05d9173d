use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::schema::{Attribute, AttributeKind, AttributePath, Attributes, ElementType};
use log::trace;
use serde_json::Value;

/// Checks an object value against `attributes`, descending into nested attributes.
pub(super) fn validate_object(
    attributes: &Attributes,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    let object = match value {
        Value::Object(object) => object,
        _ => {
            diagnostics.push(incorrect_type(path, "object"));
            return;
        }
    };

    for key in object.keys() {
        if !attributes.contains_key(key.as_str()) {
            diagnostics.push(
                Diagnostic::error(
                    "Unsupported argument",
                    format!("An argument named {:?} is not expected here.", key),
                )
                .with_attribute(&path.attribute(key.as_str())),
            );
        }
    }

    for (name, attribute) in attributes {
        let value = object.get(*name).unwrap_or(&Value::Null);
        validate_attribute(attribute, value, &path.attribute(*name), diagnostics);
    }
}

fn validate_attribute(
    attribute: &Attribute,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    if value.is_null() {
        if attribute.is_required() {
            diagnostics.push(
                Diagnostic::error(
                    "Missing Configuration for Required Attribute",
                    format!(
                        "Must set a configuration value for the {} attribute as the provider has \
                         marked it as required.",
                        path
                    ),
                )
                .with_attribute(path),
            );
        }
        return;
    }

    if attribute.is_read_only() {
        diagnostics.push(
            Diagnostic::error(
                "Invalid Configuration for Read-Only Attribute",
                "Cannot set value for this attribute as the provider has marked it as read-only. \
                 Remove the configuration line setting the value.",
            )
            .with_attribute(path),
        );
        return;
    }

    trace!("Validating attribute {}", path);
    let well_typed = match attribute.kind() {
        AttributeKind::String => value.is_string(),
        AttributeKind::Bool => value.is_boolean(),
        AttributeKind::Int64 => value.is_i64(),
        AttributeKind::Float64 => value.is_number(),
        AttributeKind::IntOrString => value.is_string() || value.is_i64(),
        AttributeKind::Dynamic => true,
        AttributeKind::List(element) => match value {
            Value::Array(items) => elements_match(*element, items.iter()),
            _ => false,
        },
        AttributeKind::Map(element) => match value {
            Value::Object(entries) => elements_match(*element, entries.values()),
            _ => false,
        },
        AttributeKind::SingleNested(attributes) => {
            if value.is_object() {
                validate_object(attributes, value, path, diagnostics);
            }
            value.is_object()
        }
        AttributeKind::ListNested(attributes) => match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    validate_object(attributes, item, &path.index(i), diagnostics);
                }
                true
            }
            _ => false,
        },
        AttributeKind::MapNested(attributes) => match value {
            Value::Object(entries) => {
                for (key, item) in entries {
                    validate_object(attributes, item, &path.key(key.as_str()), diagnostics);
                }
                true
            }
            _ => false,
        },
    };

    if !well_typed {
        diagnostics.push(incorrect_type(path, &attribute.kind().expectation()));
        return;
    }

    for validator in attribute.validators() {
        diagnostics.extend(validator.validate(path, value));
    }
}

/// Whether every element of a primitive collection is a non-null value of the element type.
fn elements_match<'a, I>(element: ElementType, mut items: I) -> bool
where
    I: Iterator<Item = &'a Value>,
{
    items.all(|item| match element {
        ElementType::String => item.is_string(),
        ElementType::Bool => item.is_boolean(),
        ElementType::Int64 => item.is_i64(),
        ElementType::Float64 => item.is_number(),
    })
}

fn incorrect_type(path: &AttributePath, expectation: &str) -> Diagnostic {
    let detail = if path.is_root() {
        format!("Inappropriate value for the configuration: {} required.", expectation)
    } else {
        format!(
            "Inappropriate value for attribute \"{}\": {} required.",
            path, expectation
        )
    };
    Diagnostic::error("Incorrect attribute value type", detail).with_attribute(path)
}
