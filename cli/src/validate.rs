use crate::find_data_source;
use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use log::info;
use std::path::PathBuf;
use tfk8s_model::{read_configs, Diagnostics, Provider};

/// Validate the configurations in a YAML or JSON file. Each YAML document is one configuration.
#[derive(Debug, Parser)]
pub(crate) struct Validate {
    /// The type name of the data source.
    type_name: String,

    /// Path to the configuration file, or `-` to read stdin.
    #[clap(value_parser = value_parser!(PathBuf))]
    path: PathBuf,

    /// Print the diagnostics in JSON format.
    #[clap(long = "json")]
    json: bool,
}

impl Validate {
    pub(crate) fn run(self, provider: &Provider) -> Result<()> {
        find_data_source(provider, &self.type_name)?;
        let configs = read_configs(&self.path).context("Unable to read configuration")?;

        let mut diagnostics = Diagnostics::new();
        for config in &configs {
            diagnostics.extend(provider.validate(&self.type_name, config));
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&diagnostics)
                    .context("Could not create string from diagnostics.")?
            );
        } else if !diagnostics.is_empty() {
            print!("{}", diagnostics);
        }

        let errors = diagnostics.errors().count();
        if errors > 0 {
            anyhow::bail!("Validation failed with {} error(s)", errors);
        }
        info!(
            "{} configuration(s) are valid for '{}'",
            configs.len(),
            self.type_name
        );
        Ok(())
    }
}
