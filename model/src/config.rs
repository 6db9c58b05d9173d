use crate::error::{self, Result};
use serde::Deserialize;
use serde_json::Value;
use snafu::{ensure, ResultExt};
use std::io::Read;
use std::path::Path;

/// Reads data source configurations from a YAML or JSON file. A path of `-` reads from stdin. A
/// YAML file may hold several documents separated by `---`, each one a configuration.
pub fn read_configs(path: &Path) -> Result<Vec<Value>> {
    let input = if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context(error::StdinSnafu)?;
        input
    } else {
        std::fs::read_to_string(path).context(error::FileSnafu { path })?
    };
    parse_configs(&input)
}

/// Parses every document in `input` into a configuration object. Empty documents are skipped.
pub fn parse_configs(input: &str) -> Result<Vec<Value>> {
    let mut configs = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(input).enumerate() {
        let config = Value::deserialize(document).context(error::ConfigParseSnafu { index })?;
        if config.is_null() {
            continue;
        }
        ensure!(config.is_object(), error::ConfigNotObjectSnafu { index });
        configs.push(config);
    }
    Ok(configs)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn multiple_documents() {
        let input = r#"
metadata:
  name: first
---
---
{"metadata": {"name": "second"}, "spec": {"replicas": 1}}
"#;
        let configs = parse_configs(input).unwrap();
        assert_eq!(
            configs,
            vec![
                json!({"metadata": {"name": "first"}}),
                json!({"metadata": {"name": "second"}, "spec": {"replicas": 1}}),
            ]
        );
    }

    #[test]
    fn document_must_be_a_mapping() {
        let error = parse_configs("metadata:\n  name: ok\n---\n- a\n- b\n").unwrap_err();
        assert!(error.to_string().contains("document 1"), "{}", error);
    }

    #[test]
    fn missing_file() {
        let error = read_configs(Path::new("/this/path/does/not/exist.yaml")).unwrap_err();
        assert!(error.to_string().contains("Unable to read file"));
    }
}
