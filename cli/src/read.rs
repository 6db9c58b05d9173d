use crate::find_data_source;
use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use log::info;
use std::path::PathBuf;
use tfk8s_model::{read_configs, Provider};

/// Read a data source for every configuration in a file and print the generated manifests.
#[derive(Debug, Parser)]
pub(crate) struct Read {
    /// The type name of the data source.
    type_name: String,

    /// Path to the configuration file, or `-` to read stdin.
    #[clap(value_parser = value_parser!(PathBuf))]
    path: PathBuf,

    /// Print the full state as JSON instead of only the manifest.
    #[clap(long = "state")]
    state: bool,

    /// Write the output to this file instead of stdout.
    #[clap(long = "output", short = 'o', value_parser = value_parser!(PathBuf))]
    output: Option<PathBuf>,
}

impl Read {
    pub(crate) fn run(self, provider: &Provider) -> Result<()> {
        find_data_source(provider, &self.type_name)?;
        let configs = read_configs(&self.path).context("Unable to read configuration")?;
        if configs.is_empty() {
            anyhow::bail!(
                "No configuration documents found in '{}'",
                self.path.display()
            );
        }

        let mut documents = Vec::new();
        for (index, config) in configs.iter().enumerate() {
            let response = provider.read(&self.type_name, config);
            if !response.diagnostics.is_empty() {
                eprint!("{}", response.diagnostics);
            }
            let state = match response.state {
                Some(state) if !response.diagnostics.has_error() => state,
                _ => anyhow::bail!("Unable to read configuration document {}", index),
            };
            if self.state {
                documents.push(
                    serde_json::to_string_pretty(&state)
                        .context("Could not create string from state.")?
                        + "\n",
                );
            } else {
                let yaml = state
                    .get("yaml")
                    .and_then(|yaml| yaml.as_str())
                    .context("The state has no 'yaml' attribute")?;
                documents.push(yaml.to_string());
            }
        }

        let output = documents.join("---\n");
        match &self.output {
            Some(path) => {
                std::fs::write(path, output)
                    .context(format!("Unable to write '{}'", path.display()))?;
                info!("Wrote {} document(s) to '{}'", documents.len(), path.display());
            }
            None => print!("{}", output),
        }
        Ok(())
    }
}
