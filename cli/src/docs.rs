use crate::find_data_source;
use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use std::path::PathBuf;
use tfk8s_model::docs::render_markdown;
use tfk8s_model::Provider;

/// Print the Markdown documentation of a data source.
#[derive(Debug, Parser)]
pub(crate) struct Docs {
    /// The type name of the data source.
    type_name: String,

    /// Write the documentation to this file instead of stdout.
    #[clap(long = "output", short = 'o', value_parser = value_parser!(PathBuf))]
    output: Option<PathBuf>,
}

impl Docs {
    pub(crate) fn run(self, provider: &Provider) -> Result<()> {
        let schema = find_data_source(provider, &self.type_name)?.schema();
        let doc = render_markdown(&self.type_name, &schema);
        match &self.output {
            Some(path) => std::fs::write(path, doc)
                .context(format!("Unable to write '{}'", path.display()))?,
            None => print!("{}", doc),
        }
        Ok(())
    }
}
