use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// A single step into a configuration value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathStep {
    /// An attribute of an object, e.g. `metadata`.
    Attribute(String),
    /// A position in a list, e.g. `[0]`.
    Index(usize),
    /// A key of a map, e.g. `["app"]`.
    Key(String),
}

/// The location of a value inside a data source configuration. It is rendered the way Terraform
/// renders attribute paths, e.g. `spec.tolerations[0].effect` or `metadata.labels["app"]`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path that descends into the attribute `name`.
    pub fn attribute<S: Into<String>>(&self, name: S) -> Self {
        self.with(PathStep::Attribute(name.into()))
    }

    /// Returns a new path that descends into the list element at `index`.
    pub fn index(&self, index: usize) -> Self {
        self.with(PathStep::Index(index))
    }

    /// Returns a new path that descends into the map element at `key`.
    pub fn key<S: Into<String>>(&self, key: S) -> Self {
        self.with(PathStep::Key(key.into()))
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// The name of the innermost attribute on this path, if any.
    pub fn last_attribute(&self) -> Option<&str> {
        self.steps.iter().rev().find_map(|step| match step {
            PathStep::Attribute(name) => Some(name.as_str()),
            _ => None,
        })
    }

    fn with(&self, step: PathStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }
}

impl Display for AttributePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{}", name)?,
                PathStep::Attribute(name) => write!(f, ".{}", name)?,
                PathStep::Index(index) => write!(f, "[{}]", index)?,
                PathStep::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

impl Serialize for AttributePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
