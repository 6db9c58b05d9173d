use crate::find_data_source;
use anyhow::{Context, Result};
use clap::Parser;
use tfk8s_model::Provider;

/// Print the schema of a data source as JSON.
#[derive(Debug, Parser)]
pub(crate) struct Schema {
    /// The type name of the data source, e.g.
    /// `k8s_apps_kubeblocks_io_component_v1alpha1_manifest`.
    type_name: String,
}

impl Schema {
    pub(crate) fn run(self, provider: &Provider) -> Result<()> {
        let schema = find_data_source(provider, &self.type_name)?.schema();
        println!(
            "{}",
            schema
                .to_json()
                .context(format!("Unable to serialize the schema of '{}'", self.type_name))?
        );
        Ok(())
    }
}
