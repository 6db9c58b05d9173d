use crate::schema::AttributePath;
use serde::{Deserialize, Serialize};
use serde_plain::derive_display_from_serialize;
use std::fmt::{Display, Formatter};

/// How bad a `Diagnostic` is. Any `Error` stops the data source from producing state.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

derive_display_from_serialize!(Severity);

/// A problem found while validating or reading a data source configuration. Mirrors the
/// diagnostics Terraform prints: a one-line summary, a longer detail and, when the problem can be
/// pinned to a value, the path of the offending attribute.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributePath>,
}

impl Diagnostic {
    pub fn error<S1, S2>(summary: S1, detail: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn warning<S1, S2>(summary: S1, detail: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    /// Pins the diagnostic to `path`. The root path is ignored.
    pub fn with_attribute(mut self, path: &AttributePath) -> Self {
        self.attribute = (!path.is_root()).then(|| path.clone());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        writeln!(f, "{}: {}", severity, self.summary)?;
        if let Some(attribute) = &self.attribute {
            writeln!(f)?;
            writeln!(f, "  with {}", attribute)?;
        }
        if !self.detail.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.detail)?;
        }
        Ok(())
    }
}

/// An ordered collection of `Diagnostic`s.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic)
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn warnings_are_not_errors() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::warning("Deprecated", "use something else"));
        assert!(!diagnostics.has_error());
        diagnostics.push(Diagnostic::error("Broken", ""));
        assert!(diagnostics.has_error());
        assert_eq!(diagnostics.errors().count(), 1);
    }

    #[test]
    fn display_with_attribute() {
        let path = AttributePath::root().attribute("metadata").attribute("name");
        let diagnostic = Diagnostic::error("Invalid Attribute Value Length", "too short")
            .with_attribute(&path);
        assert_eq!(
            diagnostic.to_string(),
            "Error: Invalid Attribute Value Length\n\n  with metadata.name\n\ntoo short\n"
        );
    }

    #[test]
    fn serializes_severity_in_lowercase() {
        let value = serde_json::to_value(Diagnostic::warning("a", "b")).unwrap();
        assert_eq!(value["severity"], "warning");
        assert!(value.get("attribute").is_none());
    }
}
