use crate::error::{self, Result};
use crate::schema::metadata::Scope;
use serde::Serialize;
use snafu::ResultExt;
use tabled::{Alignment, Full, MaxWidth, MinWidth, Modify, Style, Table, Tabled};

/// `Catalog` lists the data sources a provider serves. `Catalog::to_string()` creates a table
/// representation and `Catalog` can also be serialized to create a JSON representation.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// One registered data source.
#[derive(Tabled, Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[tabled(rename = "TYPE NAME")]
    pub type_name: String,
    #[tabled(rename = "API VERSION")]
    pub api_version: String,
    #[tabled(rename = "KIND")]
    pub kind: String,
    #[tabled(rename = "SCOPE")]
    pub scope: Scope,
}

impl Catalog {
    pub(crate) fn new(mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by(|a, b| a.type_name.cmp(&b.type_name));
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Create a table of all data sources that fits in `width` columns.
    pub fn to_string(&self, width: usize) -> String {
        let table: Table = self.into();
        table
            .with(MaxWidth::truncating(width))
            .with(MinWidth::new(width))
            .to_string()
    }

    /// The catalog as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)
            .context(error::JsonSerializeSnafu { what: "catalog" })?)
    }
}

impl From<&Catalog> for Table {
    fn from(catalog: &Catalog) -> Self {
        Table::new(catalog.entries.clone())
            .with(Style::blank())
            .with(Modify::new(Full).with(Alignment::left()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_is_sorted() {
        let catalog = Catalog::new(vec![
            CatalogEntry {
                type_name: "k8s_b_manifest".to_string(),
                api_version: "b.example.com/v1".to_string(),
                kind: "B".to_string(),
                scope: Scope::Cluster,
            },
            CatalogEntry {
                type_name: "k8s_a_manifest".to_string(),
                api_version: "a.example.com/v1".to_string(),
                kind: "A".to_string(),
                scope: Scope::Namespaced,
            },
        ]);
        let table = catalog.to_string(100);
        let a = table.find("k8s_a_manifest").unwrap();
        let b = table.find("k8s_b_manifest").unwrap();
        assert!(a < b);
        assert!(table.contains("TYPE NAME"));
        assert!(table.contains("Namespaced"));
    }
}
