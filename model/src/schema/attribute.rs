use crate::schema::Validator;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// The attributes of an object, keyed by their Terraform names.
pub type Attributes = BTreeMap<&'static str, Attribute>;

/// The type of the elements of a primitive collection attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElementType {
    String,
    Bool,
    Int64,
    Float64,
}

impl ElementType {
    fn type_name(self) -> &'static str {
        match self {
            ElementType::String => "string",
            ElementType::Bool => "bool",
            ElementType::Int64 | ElementType::Float64 => "number",
        }
    }
}

#[derive(Clone, Debug)]
pub enum AttributeKind {
    String,
    Bool,
    Int64,
    Float64,
    List(ElementType),
    Map(ElementType),
    /// A string or a 32-bit whole number, e.g. a port given by number or by name.
    IntOrString,
    /// Any value. Used for `x-kubernetes-preserve-unknown-fields`.
    Dynamic,
    SingleNested(Attributes),
    ListNested(Attributes),
    MapNested(Attributes),
}

impl AttributeKind {
    /// What a value of this kind looks like, for error messages.
    pub(crate) fn expectation(&self) -> Cow<'static, str> {
        match self {
            AttributeKind::String => "string".into(),
            AttributeKind::Bool => "bool".into(),
            AttributeKind::Int64 => "whole number".into(),
            AttributeKind::Float64 => "number".into(),
            AttributeKind::List(element) => format!("list of {}", element.type_name()).into(),
            AttributeKind::Map(element) => format!("map of {}", element.type_name()).into(),
            AttributeKind::IntOrString => "string or whole number".into(),
            AttributeKind::Dynamic => "any value".into(),
            AttributeKind::SingleNested(_) => "object".into(),
            AttributeKind::ListNested(_) => "list of object".into(),
            AttributeKind::MapNested(_) => "map of object".into(),
        }
    }

    /// The nested attributes, if this is a nested attribute.
    pub fn nested(&self) -> Option<&Attributes> {
        match self {
            AttributeKind::SingleNested(attributes)
            | AttributeKind::ListNested(attributes)
            | AttributeKind::MapNested(attributes) => Some(attributes),
            _ => None,
        }
    }
}

/// One attribute of a data source schema. Create it with one of the kind constructors, then chain
/// the modifiers:
///
/// ```
/// use tfk8s_model::schema::{Attribute, Validator};
///
/// let name = Attribute::string("Name of the component.")
///     .required()
///     .validator(Validator::LengthAtMost(64));
/// assert!(name.is_required());
/// ```
#[derive(Clone, Debug)]
pub struct Attribute {
    kind: AttributeKind,
    description: &'static str,
    required: bool,
    optional: bool,
    computed: bool,
    json_name: Option<&'static str>,
    validators: Vec<Validator>,
}

impl Attribute {
    pub fn new(kind: AttributeKind, description: &'static str) -> Self {
        Self {
            kind,
            description,
            required: false,
            optional: false,
            computed: false,
            json_name: None,
            validators: Vec::new(),
        }
    }

    pub fn string(description: &'static str) -> Self {
        Self::new(AttributeKind::String, description)
    }

    pub fn bool(description: &'static str) -> Self {
        Self::new(AttributeKind::Bool, description)
    }

    pub fn int64(description: &'static str) -> Self {
        Self::new(AttributeKind::Int64, description)
    }

    /// A whole number that Kubernetes stores as an `int32`.
    pub fn int32(description: &'static str) -> Self {
        Self::new(AttributeKind::Int64, description).int32_bounds()
    }

    pub fn float64(description: &'static str) -> Self {
        Self::new(AttributeKind::Float64, description)
    }

    pub fn list(element: ElementType, description: &'static str) -> Self {
        Self::new(AttributeKind::List(element), description)
    }

    pub fn map(element: ElementType, description: &'static str) -> Self {
        Self::new(AttributeKind::Map(element), description)
    }

    pub fn int_or_string(description: &'static str) -> Self {
        Self::new(AttributeKind::IntOrString, description).int32_bounds()
    }

    pub fn dynamic(description: &'static str) -> Self {
        Self::new(AttributeKind::Dynamic, description)
    }

    pub fn single_nested(description: &'static str, attributes: Attributes) -> Self {
        Self::new(AttributeKind::SingleNested(attributes), description)
    }

    pub fn list_nested(description: &'static str, attributes: Attributes) -> Self {
        Self::new(AttributeKind::ListNested(attributes), description)
    }

    pub fn map_nested(description: &'static str, attributes: Attributes) -> Self {
        Self::new(AttributeKind::MapNested(attributes), description)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.required = false;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self.required = false;
        self
    }

    /// Overrides the Kubernetes JSON name, for names that are not the plain camelCase form of the
    /// Terraform name (e.g. `clusterIP`).
    pub fn json_name(mut self, json_name: &'static str) -> Self {
        self.json_name = Some(json_name);
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    fn int32_bounds(self) -> Self {
        self.validator(Validator::AtLeast(i64::from(i32::MIN)))
            .validator(Validator::AtMost(i64::from(i32::MAX)))
    }

    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Computed attributes that cannot be configured at all.
    pub fn is_read_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// The name this attribute has in the Kubernetes manifest, given its Terraform name.
    pub fn json_key<'a>(&self, terraform_name: &'a str) -> Cow<'a, str> {
        match self.json_name {
            Some(json_name) => Cow::Borrowed(json_name),
            None => to_camel_case(terraform_name),
        }
    }
}

/// `node_selector` -> `nodeSelector`.
pub(crate) fn to_camel_case(snake: &str) -> Cow<'_, str> {
    if !snake.contains('_') {
        return Cow::Borrowed(snake);
    }
    let mut camel = String::with_capacity(snake.len());
    for (i, part) in snake.split('_').enumerate() {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) if i > 0 => {
                camel.extend(first.to_uppercase());
                camel.push_str(chars.as_str());
            }
            _ => camel.push_str(part),
        }
    }
    Cow::Owned(camel)
}

/// Serializes in the spirit of `terraform providers schema -json`.
impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match &self.kind {
            AttributeKind::String => map.serialize_entry("type", "string")?,
            AttributeKind::Bool => map.serialize_entry("type", "bool")?,
            AttributeKind::Int64 | AttributeKind::Float64 => {
                map.serialize_entry("type", "number")?
            }
            AttributeKind::List(element) => {
                map.serialize_entry("type", &["list", element.type_name()])?
            }
            AttributeKind::Map(element) => {
                map.serialize_entry("type", &["map", element.type_name()])?
            }
            AttributeKind::IntOrString | AttributeKind::Dynamic => {
                map.serialize_entry("type", "dynamic")?
            }
            AttributeKind::SingleNested(attributes) => {
                map.serialize_entry("nested_type", &NestedType::new("single", attributes))?
            }
            AttributeKind::ListNested(attributes) => {
                map.serialize_entry("nested_type", &NestedType::new("list", attributes))?
            }
            AttributeKind::MapNested(attributes) => {
                map.serialize_entry("nested_type", &NestedType::new("map", attributes))?
            }
        }
        map.serialize_entry("description", self.description)?;
        if self.required {
            map.serialize_entry("required", &true)?;
        }
        if self.optional {
            map.serialize_entry("optional", &true)?;
        }
        if self.computed {
            map.serialize_entry("computed", &true)?;
        }
        if !self.validators.is_empty() {
            let validators: Vec<String> = self.validators.iter().map(|v| v.description()).collect();
            map.serialize_entry("validators", &validators)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct NestedType<'a> {
    nesting_mode: &'static str,
    attributes: &'a Attributes,
}

impl<'a> NestedType<'a> {
    fn new(nesting_mode: &'static str, attributes: &'a Attributes) -> Self {
        Self {
            nesting_mode,
            attributes,
        }
    }
}
