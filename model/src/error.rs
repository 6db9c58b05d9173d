use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display("Unable to read file '{}': {}", path.display(), source))]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Unable to read configuration from stdin: {}", source))]
    Stdin { source: std::io::Error },

    #[snafu(display("Unable to parse configuration document {}: {}", index, source))]
    ConfigParse {
        index: usize,
        source: serde_yaml::Error,
    },

    #[snafu(display(
        "Configuration document {} is not a mapping of attribute names to values",
        index
    ))]
    ConfigNotObject { index: usize },

    #[snafu(display("Unable to serialize {}: {}", what, source))]
    JsonSerialize {
        what: String,
        source: serde_json::Error,
    },
}
