use anyhow::{Context, Result};
use clap::Parser;
use terminal_size::{Height, Width};
use tfk8s_model::Provider;

/// List the data sources of the provider.
#[derive(Debug, Parser)]
pub(crate) struct List {
    /// Output the data sources in JSON format.
    #[clap(long = "json")]
    json: bool,
}

impl List {
    pub(crate) fn run(self, provider: &Provider) -> Result<()> {
        let catalog = provider.catalog();
        if self.json {
            println!(
                "{}",
                catalog
                    .to_json()
                    .context("Could not create string from catalog.")?
            );
        } else {
            let (terminal_size::Width(width), _) =
                terminal_size::terminal_size().unwrap_or((Width(120), Height(0)));
            println!("{}", catalog.to_string(width as usize));
        }
        Ok(())
    }
}
