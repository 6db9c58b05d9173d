mod data;
use assert_cmd::Command;

const COMPONENT: &str = "k8s_apps_kubeblocks_io_component_v1alpha1_manifest";
const CONFIG_CONSTRAINT: &str = "k8s_apps_kubeblocks_io_config_constraint_v1beta1_manifest";

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn list_json() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&["list", "--json"]);
    let parse: serde_json::Value = serde_json::from_str(&stdout(&mut cmd)).unwrap();
    let type_names: Vec<_> = parse
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["typeName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(type_names, vec![COMPONENT, CONFIG_CONSTRAINT]);
    assert_eq!(parse[1]["scope"], "Cluster");
}

#[test]
fn list_table() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.arg("list");
    let table = stdout(&mut cmd);
    assert!(table.contains("TYPE NAME"));
    assert!(table.contains("ConfigConstraint"));
}

#[test]
fn schema_json() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&["schema", CONFIG_CONSTRAINT]);
    let parse: serde_json::Value = serde_json::from_str(&stdout(&mut cmd)).unwrap();
    assert_eq!(parse["attributes"]["yaml"]["computed"], true);
    assert!(parse["attributes"]["metadata"]["nested_type"]["attributes"]["namespace"].is_null());
}

#[test]
fn unknown_data_source() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&["schema", "k8s_nothing_manifest"]);
    cmd.assert().failure().code(1);
}

#[test]
fn read_multiple_documents() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&["read", COMPONENT, data::components_path().to_str().unwrap()]);
    let yaml = stdout(&mut cmd);
    let documents: Vec<_> = yaml.split("---\n").collect();
    assert_eq!(documents.len(), 2);
    for document in documents {
        assert!(document.starts_with("apiVersion: apps.kubeblocks.io/v1alpha1\nkind: Component\n"));
    }
    assert!(yaml.contains("compDef: redis-sentinel-7"));
}

#[test]
fn read_state() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&[
        "read",
        CONFIG_CONSTRAINT,
        data::config_constraint_path().to_str().unwrap(),
        "--state",
    ]);
    let parse: serde_json::Value = serde_json::from_str(&stdout(&mut cmd)).unwrap();
    assert_eq!(parse["metadata"]["name"], "redis7-config-constraint");
    assert!(parse["yaml"]
        .as_str()
        .unwrap()
        .contains("kind: ConfigConstraint"));
}

#[test]
fn read_from_stdin() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&["read", CONFIG_CONSTRAINT, "-"])
        .write_stdin("metadata:\n  name: from-stdin\n");
    let yaml = stdout(&mut cmd);
    assert_eq!(
        yaml,
        "apiVersion: apps.kubeblocks.io/v1beta1\nkind: ConfigConstraint\nmetadata:\n  name: from-stdin\n"
    );
}

#[test]
fn read_without_documents_fails() {
    for input in ["", "---\n---\n"] {
        let mut cmd = Command::cargo_bin("tfk8s").unwrap();
        cmd.args(&["read", COMPONENT, "-"]).write_stdin(input);
        let output = cmd.output().unwrap();
        assert_eq!(output.status.code(), Some(1), "{:?}", input);
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("No configuration documents"));
    }
}

#[test]
fn invalid_names_fail_validation() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&[
        "validate",
        COMPONENT,
        data::invalid_names_path().to_str().unwrap(),
    ]);
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid Attribute Value Match"));
    assert!(stdout.contains("metadata.namespace"));
}

#[test]
fn invalid_names_are_not_read() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&["read", COMPONENT, data::invalid_names_path().to_str().unwrap()]);
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("metadata.name"));
}

#[test]
fn docs_markdown() {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.args(&["docs", COMPONENT]);
    let doc = stdout(&mut cmd);
    assert!(doc.contains(&format!("# {} (Data Source)", COMPONENT)));
    assert!(doc.contains("### Nested Schema for `spec.scheduling_policy.affinity`"));
}
