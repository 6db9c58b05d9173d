use crate::diagnostics::Diagnostic;
use crate::schema::AttributePath;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

/// RFC 1123 subdomain, used for object names.
const NAME_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
/// RFC 1123 label, used for namespaces.
const NAMESPACE_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";
/// The name part of a qualified name, e.g. `name` in `example.com/name`.
const QUALIFIED_NAME_PATTERN: &str = r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$";
const LABEL_VALUE_PATTERN: &str = r"^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$";

const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
const QUALIFIED_NAME_PREFIX_MAX_LENGTH: usize = 253;
const LABEL_VALUE_MAX_LENGTH: usize = 63;

lazy_static! {
    static ref NAME_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(NAME_PATTERN).unwrap()
    };
    static ref NAMESPACE_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(NAMESPACE_PATTERN).unwrap()
    };
    static ref QUALIFIED_NAME_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(QUALIFIED_NAME_PATTERN).unwrap()
    };
    static ref LABEL_VALUE_REGEX: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(LABEL_VALUE_PATTERN).unwrap()
    };
}

/// A declarative check attached to an `Attribute`. Validators only look at values of the type they
/// understand: string validators ignore numbers, map validators ignore strings, and so on.
#[derive(Clone, Debug)]
pub enum Validator {
    /// The string must have at least this many characters.
    LengthAtLeast(usize),
    /// The string must have at most this many characters.
    LengthAtMost(usize),
    /// The string must match the expression. The message, when not empty, replaces the default
    /// description of the expression.
    RegexMatches(Regex, String),
    /// The string must be one of the given values.
    OneOf(Vec<String>),
    /// The integer must be at least this value.
    AtLeast(i64),
    /// The integer must be at most this value.
    AtMost(i64),
    /// Map keys must be qualified names and values must be valid label values.
    Labels,
    /// Map keys must be qualified names.
    Annotations,
}

impl Validator {
    /// The validator for `metadata.name`.
    pub fn name() -> Self {
        Self::RegexMatches(NAME_REGEX.clone(), String::new())
    }

    /// The validator for `metadata.namespace`.
    pub fn namespace() -> Self {
        Self::RegexMatches(NAMESPACE_REGEX.clone(), String::new())
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// A plain-English description of the check, as Terraform's validators provide.
    pub fn description(&self) -> String {
        match self {
            Validator::LengthAtLeast(min) => format!("string length must be at least {}", min),
            Validator::LengthAtMost(max) => format!("string length must be at most {}", max),
            Validator::RegexMatches(_, message) if !message.is_empty() => message.clone(),
            Validator::RegexMatches(regex, _) => {
                format!("value must match regular expression '{}'", regex.as_str())
            }
            Validator::OneOf(values) => format!("value must be one of: {}", quoted_list(values)),
            Validator::AtLeast(min) => format!("value must be at least {}", min),
            Validator::AtMost(max) => format!("value must be at most {}", max),
            Validator::Labels => {
                "keys must be qualified names and values must be valid label values".to_string()
            }
            Validator::Annotations => "keys must be qualified names".to_string(),
        }
    }

    /// Checks `value`, which was found at `path`, and returns every problem found.
    pub fn validate(&self, path: &AttributePath, value: &Value) -> Vec<Diagnostic> {
        match (self, value) {
            (Validator::LengthAtLeast(min), Value::String(s)) => {
                let length = s.chars().count();
                if length < *min {
                    return vec![invalid_length(path, &self.description(), length)];
                }
            }
            (Validator::LengthAtMost(max), Value::String(s)) => {
                let length = s.chars().count();
                if length > *max {
                    return vec![invalid_length(path, &self.description(), length)];
                }
            }
            (Validator::RegexMatches(regex, _), Value::String(s)) => {
                if !regex.is_match(s) {
                    return vec![invalid_match(path, &self.description(), s)];
                }
            }
            (Validator::OneOf(values), Value::String(s)) => {
                if !values.iter().any(|v| v == s) {
                    return vec![invalid_match(path, &self.description(), &format!("{:?}", s))];
                }
            }
            (Validator::AtLeast(min), Value::Number(n)) => {
                if let Some(n) = n.as_i64().filter(|n| n < min) {
                    return vec![invalid_value(path, &self.description(), n)];
                }
            }
            (Validator::AtMost(max), Value::Number(n)) => {
                if let Some(n) = n.as_i64().filter(|n| n > max) {
                    return vec![invalid_value(path, &self.description(), n)];
                }
            }
            (Validator::Labels, Value::Object(map)) => {
                return map
                    .iter()
                    .flat_map(|(key, value)| {
                        let entry = path.key(key.as_str());
                        let mut problems = check_qualified_name(&entry, key);
                        if let Some(value) = value.as_str() {
                            problems.extend(check_label_value(&entry, value));
                        }
                        problems
                    })
                    .collect();
            }
            (Validator::Annotations, Value::Object(map)) => {
                return map
                    .keys()
                    .flat_map(|key| check_qualified_name(&path.key(key.as_str()), key))
                    .collect();
            }
            _ => {}
        }
        Vec::new()
    }
}

fn quoted_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", quoted.join(" "))
}

fn invalid_length(path: &AttributePath, description: &str, length: usize) -> Diagnostic {
    Diagnostic::error(
        "Invalid Attribute Value Length",
        format!("Attribute {} {}, got: {}", path, description, length),
    )
    .with_attribute(path)
}

fn invalid_match(path: &AttributePath, description: &str, got: &str) -> Diagnostic {
    Diagnostic::error(
        "Invalid Attribute Value Match",
        format!("Attribute {} {}, got: {}", path, description, got),
    )
    .with_attribute(path)
}

fn invalid_value(path: &AttributePath, description: &str, got: i64) -> Diagnostic {
    Diagnostic::error(
        "Invalid Attribute Value",
        format!("Attribute {} {}, got: {}", path, description, got),
    )
    .with_attribute(path)
}

/// A qualified name is an optional DNS subdomain prefix and a `/`, followed by a name of at most
/// 63 characters, e.g. `app.kubernetes.io/name`.
fn check_qualified_name(path: &AttributePath, key: &str) -> Vec<Diagnostic> {
    let (prefix, name) = match key.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, key),
    };
    let mut problems = Vec::new();
    if let Some(prefix) = prefix {
        if prefix.is_empty()
            || prefix.len() > QUALIFIED_NAME_PREFIX_MAX_LENGTH
            || !NAME_REGEX.is_match(prefix)
        {
            problems.push(invalid_key(
                path,
                key,
                "the prefix must be a lowercase RFC 1123 subdomain of at most 253 characters",
            ));
        }
    }
    if name.is_empty() || name.len() > QUALIFIED_NAME_MAX_LENGTH {
        problems.push(invalid_key(
            path,
            key,
            "the name part must be between 1 and 63 characters",
        ));
    } else if !QUALIFIED_NAME_REGEX.is_match(name) {
        problems.push(invalid_key(
            path,
            key,
            "the name part must consist of alphanumeric characters, '-', '_' or '.', and must \
             start and end with an alphanumeric character",
        ));
    }
    problems
}

fn check_label_value(path: &AttributePath, value: &str) -> Vec<Diagnostic> {
    if value.len() > LABEL_VALUE_MAX_LENGTH || !LABEL_VALUE_REGEX.is_match(value) {
        vec![Diagnostic::error(
            "Invalid Attribute Value",
            format!(
                "Attribute {} value {:?} is not a valid label value: it must be at most 63 \
                 characters, consist of alphanumeric characters, '-', '_' or '.', and start and \
                 end with an alphanumeric character",
                path, value
            ),
        )
        .with_attribute(path)]
    } else {
        Vec::new()
    }
}

fn invalid_key(path: &AttributePath, key: &str, reason: &str) -> Diagnostic {
    Diagnostic::error(
        "Invalid Attribute Key",
        format!(
            "Attribute {} key {:?} is not a qualified name: {}",
            path, key, reason
        ),
    )
    .with_attribute(path)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn path() -> AttributePath {
        AttributePath::root().attribute("metadata").attribute("name")
    }

    #[test]
    fn length() {
        assert!(Validator::LengthAtLeast(1)
            .validate(&path(), &json!("a"))
            .is_empty());
        let problems = Validator::LengthAtLeast(1).validate(&path(), &json!(""));
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].summary, "Invalid Attribute Value Length");
        assert_eq!(
            problems[0].detail,
            "Attribute metadata.name string length must be at least 1, got: 0"
        );
        assert_eq!(
            Validator::LengthAtMost(3)
                .validate(&path(), &json!("abcd"))
                .len(),
            1
        );
        // Characters, not bytes.
        assert!(Validator::LengthAtMost(3)
            .validate(&path(), &json!("äöü"))
            .is_empty());
    }

    #[test]
    fn names() {
        for good in ["my-component", "a", "a.b-c.d", "0abc"] {
            assert!(
                Validator::name().validate(&path(), &json!(good)).is_empty(),
                "{}",
                good
            );
        }
        for bad in ["My-Component", "-a", "a-", "a..b", "a_b"] {
            assert_eq!(
                Validator::name().validate(&path(), &json!(bad)).len(),
                1,
                "{}",
                bad
            );
        }
        assert!(Validator::namespace()
            .validate(&path(), &json!("kube-system"))
            .is_empty());
        assert_eq!(
            Validator::namespace()
                .validate(&path(), &json!("kube.system"))
                .len(),
            1
        );
    }

    #[test]
    fn one_of() {
        let validator = Validator::one_of(["NoSchedule", "PreferNoSchedule", "NoExecute"]);
        assert!(validator.validate(&path(), &json!("NoExecute")).is_empty());
        let problems = validator.validate(&path(), &json!("Never"));
        assert_eq!(
            problems[0].detail,
            r#"Attribute metadata.name value must be one of: ["NoSchedule" "PreferNoSchedule" "NoExecute"], got: "Never""#
        );
    }

    #[test]
    fn integer_bounds() {
        assert!(Validator::AtLeast(0).validate(&path(), &json!(0)).is_empty());
        assert_eq!(Validator::AtLeast(0).validate(&path(), &json!(-1)).len(), 1);
        assert_eq!(Validator::AtMost(10).validate(&path(), &json!(11)).len(), 1);
    }

    #[test]
    fn validators_ignore_other_types() {
        assert!(Validator::LengthAtLeast(10)
            .validate(&path(), &json!(3))
            .is_empty());
        assert!(Validator::Labels.validate(&path(), &json!("x")).is_empty());
    }

    #[test]
    fn labels() {
        let labels = json!({
            "app.kubernetes.io/name": "mysql",
            "tier": "",
            "bad key": "ok",
            "ok": "not ok!",
        });
        let problems = Validator::Labels.validate(&path(), &labels);
        assert_eq!(problems.len(), 2);
        assert!(problems
            .iter()
            .any(|p| p.summary == "Invalid Attribute Key"
                && p.attribute.as_ref().unwrap().to_string()
                    == r#"metadata.name["bad key"]"#));
        assert!(problems
            .iter()
            .any(|p| p.summary == "Invalid Attribute Value"));
    }

    #[test]
    fn annotations() {
        let annotations = json!({
            "kubeblocks.io/restart": "2024-01-01T00:00:00Z",
            "Example.com/x": "anything goes",
            "/x": "",
        });
        let problems = Validator::Annotations.validate(&path(), &annotations);
        assert_eq!(problems.len(), 2);
    }
}
