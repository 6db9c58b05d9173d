/*!

This is the command line interface for the manifest data sources of the `k8s` Terraform provider.
It lists the data sources, prints their schemas and documentation, and validates or reads
configuration files the way Terraform would.

!*/

mod docs;
mod list;
mod read;
mod schema;
mod validate;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use tfk8s_model::Provider;

/// The command line interface for the `k8s` provider's manifest data sources.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// List the data sources of the provider.
    List(list::List),
    /// Print the schema of a data source.
    Schema(schema::Schema),
    /// Validate configuration files against the schema of a data source.
    Validate(validate::Validate),
    /// Read a data source and print the generated manifest.
    Read(read::Read),
    /// Print the Markdown documentation of a data source.
    Docs(docs::Docs),
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let provider = Provider::new();
    match args.command {
        Command::List(list) => list.run(&provider),
        Command::Schema(schema) => schema.run(&provider),
        Command::Validate(validate) => validate.run(&provider),
        Command::Read(read) => read.run(&provider),
        Command::Docs(docs) => docs.run(&provider),
    }
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate and the model.
            Builder::new()
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("tfk8s_model"), level)
                .init();
        }
    }
}

/// Finds the data source `type_name` or fails with the list of known type names.
pub(crate) fn find_data_source<'a>(
    provider: &'a Provider,
    type_name: &str,
) -> Result<&'a dyn tfk8s_model::DataSource> {
    provider.data_source(type_name).ok_or_else(|| {
        anyhow::anyhow!(
            "Data source '{}' does not exist, the known data sources are: {}",
            type_name,
            provider.data_source_types().join(", ")
        )
    })
}
