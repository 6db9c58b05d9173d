use crate::constants::{KUBEBLOCKS_APPS_GROUP, KUBEBLOCKS_APPS_V1BETA1};
use crate::manifest::{Manifest, TypeMeta};
use crate::schema::metadata::{self, Scope, METADATA, SPEC, YAML};
use crate::schema::{corev1, Attribute, Attributes, ElementType, Schema, Validator};
use k8s_openapi::api::core::v1::DownwardAPIVolumeFile;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use maplit::btreemap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NAMESPACE_MAX_LENGTH: usize = 63;

/// The signals a `unix_signal_trigger` may send.
const SIGNALS: [&str; 31] = [
    "SIGHUP", "SIGINT", "SIGQUIT", "SIGILL", "SIGTRAP", "SIGABRT", "SIGBUS", "SIGFPE", "SIGKILL",
    "SIGUSR1", "SIGSEGV", "SIGUSR2", "SIGPIPE", "SIGALRM", "SIGTERM", "SIGSTKFLT", "SIGCHLD",
    "SIGCONT", "SIGSTOP", "SIGTSTP", "SIGTTIN", "SIGTTOU", "SIGURG", "SIGXCPU", "SIGXFSZ",
    "SIGVTALRM", "SIGPROF", "SIGWINCH", "SIGIO", "SIGPWR", "SIGSYS",
];

const FILE_FORMATS: [&str; 10] = [
    "xml",
    "ini",
    "yaml",
    "json",
    "hcl",
    "dotenv",
    "toml",
    "properties",
    "redis",
    "props-plus",
];

/// A KubeBlocks `ConfigConstraint`. It tells KubeBlocks how to parse, validate and apply the
/// parameters of a configuration file. The kind is cluster-scoped.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ConfigConstraint {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ConfigConstraintSpec>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigConstraintSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload_action: Option<ReloadAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_reload_and_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload_static_params_before_restart: Option<bool>,
    #[serde(
        rename = "downwardAPIChangeTriggeredActions",
        skip_serializing_if = "Option::is_none"
    )]
    pub downward_api_change_triggered_actions: Option<Vec<DownwardApiChangeTriggeredAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<ParametersSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_parameters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_parameters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immutable_parameters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format_config: Option<FileFormatConfig>,
}

/// How a configuration change is applied without restarting. At most one trigger is expected.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unix_signal_trigger: Option<UnixSignalTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_trigger: Option<ShellTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tpl_script_trigger: Option<TplScriptTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_trigger: Option<AutoTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_pod_selector: Option<LabelSelector>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnixSignalTrigger {
    pub signal: String,
    pub process_name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellTrigger {
    pub command: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_reload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_params_formatter_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_setup: Option<ToolsSetup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_config: Option<ScriptConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsSetup {
    pub mount_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_configs: Option<Vec<ToolConfig>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptConfig {
    pub script_config_map_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A `ScriptConfig` whose script is rendered from a Go template, plus the `sync` switch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TplScriptTrigger {
    pub script_config_map_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownwardApiChangeTriggeredAction {
    pub name: String,
    pub mount_point: String,
    pub items: Vec<DownwardAPIVolumeFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_config: Option<ScriptConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametersSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cue: Option<String>,
    /// An OpenAPI v3 schema, kept as free-form JSON.
    #[serde(rename = "schemaInJSON", skip_serializing_if = "Option::is_none")]
    pub schema_in_json: Option<Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFormatConfig {
    pub format: FileFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ini_config: Option<IniConfig>,
}

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Xml,
    Ini,
    Yaml,
    Json,
    Hcl,
    Dotenv,
    Toml,
    Properties,
    Redis,
    #[serde(rename = "props-plus")]
    PropsPlus,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IniConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
}

impl k8s_openapi::Resource for ConfigConstraint {
    const API_VERSION: &'static str = KUBEBLOCKS_APPS_V1BETA1;
    const GROUP: &'static str = KUBEBLOCKS_APPS_GROUP;
    const KIND: &'static str = "ConfigConstraint";
    const VERSION: &'static str = "v1beta1";
    const URL_PATH_SEGMENT: &'static str = "configconstraints";
    type Scope = k8s_openapi::ClusterResourceScope;
}

impl k8s_openapi::Metadata for ConfigConstraint {
    type Ty = ObjectMeta;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl Manifest for ConfigConstraint {
    const SCOPE: Scope = Scope::Cluster;

    fn schema() -> Schema {
        Schema::new(
            "ConfigConstraint manages the parameters across multiple configuration files \
             contained in a single configure template. These configuration files should have the \
             same format (e.g. ini, xml, properties, json).",
            btreemap! {
                YAML => metadata::yaml(),
                METADATA => metadata::metadata(Scope::Cluster),
                SPEC => spec().optional(),
            },
        )
    }

    fn type_meta(&self) -> &TypeMeta {
        &self.types
    }

    fn type_meta_mut(&mut self) -> &mut TypeMeta {
        &mut self.types
    }
}

fn spec() -> Attribute {
    Attribute::single_nested(
        "ConfigConstraintSpec defines the desired state of ConfigConstraint",
        btreemap! {
            "reload_action" => reload_action(),
            "merge_reload_and_restart" => Attribute::bool(
                "Indicates whether to consolidate dynamic reload and restart actions into a \
                 single restart. If true, updates requiring both actions will result in only a \
                 restart, merging the actions. If false, updates will trigger both actions \
                 executed sequentially: first dynamic reload, then restart.",
            )
            .optional(),
            "reload_static_params_before_restart" => Attribute::bool(
                "Configures whether the dynamic reload specified in 'reloadAction' applies only \
                 to dynamic parameters or to all parameters (including static parameters).",
            )
            .optional(),
            "downward_api_change_triggered_actions" => Attribute::list_nested(
                "Specifies a list of actions to execute specified commands based on Pod labels. \
                 It utilizes the K8s Downward API to mount label information as a volume into \
                 the pod. The 'config-manager' sidecar container watches for changes in the role \
                 label and dynamically invoke registered commands (usually execute some SQL \
                 statements) when a change is detected.",
                btreemap! {
                    "name" => Attribute::string(
                        "Specifies the name of the field. It must be a string of maximum length \
                         63.",
                    )
                    .required()
                    .validator(Validator::LengthAtMost(63))
                    .validator(Validator::name()),
                    "mount_point" => Attribute::string(
                        "Specifies the mount point of the Downward API information.",
                    )
                    .required()
                    .validator(Validator::LengthAtMost(128)),
                    "items" => corev1::downward_api_volume_files(
                        "Represents a list of files under the Downward API volume.",
                    )
                    .required(),
                    "command" => Attribute::list(
                        ElementType::String,
                        "Specifies the command to be triggered when changes are detected in \
                         Downward API volume files. It relies on the inotify mechanism in the \
                         config-manager sidecar to monitor file changes.",
                    )
                    .optional(),
                    "script_config" => script_config(
                        "ScriptConfig object specifies a ConfigMap that contains script files \
                         that should be mounted inside the pod. The scripts are mounted as \
                         volumes and can be referenced and executed by the DownwardAction to \
                         perform specific tasks or configurations.",
                    ),
                },
            )
            .optional()
            .json_name("downwardAPIChangeTriggeredActions"),
            "parameters_schema" => Attribute::single_nested(
                "Defines a list of parameters including their names, default values, \
                 descriptions, types, and constraints (permissible values or the range of valid \
                 values).",
                btreemap! {
                    "top_level_key" => Attribute::string(
                        "Specifies the top-level key in the 'configSchema.cue' that organizes the \
                         validation rules for parameters. This key must exist within the CUE \
                         script defined in 'configSchema.cue'.",
                    )
                    .optional(),
                    "cue" => Attribute::string(
                        "Hold a string that contains a script written in CUE language that \
                         defines a list of configuration items. Each item is detailed with its \
                         name, default value, description, type (e.g. string, integer, float), \
                         and constraints (permissible values or the valid range of values).",
                    )
                    .optional(),
                    "schema_in_json" => Attribute::dynamic(
                        "Generated from the 'cue' field and transformed into a JSON format.",
                    )
                    .optional()
                    .json_name("schemaInJSON"),
                },
            )
            .optional(),
            "static_parameters" => Attribute::list(
                ElementType::String,
                "List static parameters. Modifications to any of these parameters require a \
                 restart of the process to take effect.",
            )
            .optional(),
            "dynamic_parameters" => Attribute::list(
                ElementType::String,
                "List dynamic parameters. Modifications to these parameters trigger a \
                 configuration reload without requiring a process restart.",
            )
            .optional(),
            "immutable_parameters" => Attribute::list(
                ElementType::String,
                "Lists the parameters that cannot be modified once set. Attempting to change any \
                 of these parameters will be ignored.",
            )
            .optional(),
            "file_format_config" => Attribute::single_nested(
                "Specifies the format of the configuration file and any associated parameters \
                 that are specific to the chosen format. Supported formats include 'ini', \
                 'xml', 'yaml', 'json', 'hcl', 'dotenv', 'properties', and 'toml'.",
                btreemap! {
                    "format" => Attribute::string(
                        "The config file format. Valid values are 'ini', 'xml', 'yaml', 'json', \
                         'hcl', 'dotenv', 'properties' and 'toml'. Each format has its own \
                         characteristics and use cases.",
                    )
                    .required()
                    .validator(Validator::one_of(FILE_FORMATS)),
                    "ini_config" => Attribute::single_nested(
                        "Holds options specific to the 'ini' file format.",
                        btreemap! {
                            "section_name" => Attribute::string(
                                "A string that describes the name of the ini section.",
                            )
                            .optional(),
                        },
                    )
                    .optional(),
                },
            )
            .optional(),
        },
    )
}

fn script_config(description: &'static str) -> Attribute {
    Attribute::single_nested(description, script_config_attributes()).optional()
}

fn script_config_attributes() -> Attributes {
    btreemap! {
        "script_config_map_ref" => Attribute::string(
            "Specifies the reference to the ConfigMap containing the scripts.",
        )
        .required(),
        "namespace" => Attribute::string(
            "Specifies the namespace for the ConfigMap. If not specified, it defaults to the \
             'default' namespace.",
        )
        .optional()
        .validator(Validator::LengthAtMost(NAMESPACE_MAX_LENGTH))
        .validator(Validator::namespace()),
    }
}

fn reload_action() -> Attribute {
    let mut tpl_script_trigger = script_config_attributes();
    tpl_script_trigger.insert(
        "sync",
        Attribute::bool(
            "Specifies whether to perform the reload operation synchronously or \
             asynchronously.",
        )
        .optional(),
    );

    Attribute::single_nested(
        "Specifies the dynamic reload (dynamic reconfiguration) actions supported by the engine. \
         When set, the controller executes the scripts defined in these actions to handle \
         dynamic parameter updates.",
        btreemap! {
            "unix_signal_trigger" => Attribute::single_nested(
                "Used to trigger a reload by sending a specific Unix signal to the process.",
                btreemap! {
                    "signal" => Attribute::string(
                        "Specifies a valid Unix signal to be sent. For a comprehensive list of \
                         all Unix signals, see: ../../pkg/configuration/configmap/handler.go:allUnixSignals",
                    )
                    .required()
                    .validator(Validator::one_of(SIGNALS)),
                    "process_name" => Attribute::string(
                        "Identifies the name of the process to which the Unix signal will be sent.",
                    )
                    .required(),
                },
            )
            .optional(),
            "shell_trigger" => Attribute::single_nested(
                "Allows to execute a custom shell script to reload the process.",
                btreemap! {
                    "command" => Attribute::list(
                        ElementType::String,
                        "Specifies the command to execute in order to reload the process. It \
                         should be a valid shell command.",
                    )
                    .required(),
                    "sync" => Attribute::bool(
                        "Determines the synchronization mode of parameter updates with \
                         'config-manager'.",
                    )
                    .optional(),
                    "batch_reload" => Attribute::bool(
                        "Controls whether parameter updates are processed individually or \
                         collectively in a batch: 'true': Processes all changes in one batch \
                         reload. 'false': Processes each change individually.",
                    )
                    .optional(),
                    "batch_params_formatter_template" => Attribute::string(
                        "Specifies a Go template string for formatting batch input data. It's \
                         used when 'batchReload' is 'True' to format data passed into STDIN of \
                         the script.",
                    )
                    .optional(),
                    "tools_setup" => Attribute::single_nested(
                        "Specifies the tools container image used by ShellTrigger for dynamic \
                         reload. If the dynamic reload action is triggered by a ShellTrigger, \
                         this field is required.",
                        btreemap! {
                            "mount_point" => Attribute::string(
                                "Specifies the directory path in the container where the \
                                 tools-related files are to be copied.",
                            )
                            .required()
                            .validator(Validator::LengthAtMost(128)),
                            "tool_configs" => Attribute::list_nested(
                                "Specifies a list of settings of init containers that prepare \
                                 tools for dynamic reload.",
                                btreemap! {
                                    "name" => Attribute::string(
                                        "Specifies the name of the init container.",
                                    )
                                    .optional()
                                    .validator(Validator::LengthAtMost(63)),
                                    "image" => Attribute::string(
                                        "Indicates the default image for the tool if it's not \
                                         specified in the ConfigMap.",
                                    )
                                    .optional(),
                                    "command" => Attribute::list(
                                        ElementType::String,
                                        "Specifies the command to be executed by the init \
                                         container.",
                                    )
                                    .optional(),
                                },
                            )
                            .optional(),
                        },
                    )
                    .optional(),
                    "script_config" => script_config(
                        "ScriptConfig object specifies a ConfigMap that contains script files \
                         that should be mounted inside the pod.",
                    ),
                },
            )
            .optional(),
            "tpl_script_trigger" => Attribute::single_nested(
                "Enables reloading process using a Go template script.",
                tpl_script_trigger,
            )
            .optional(),
            "auto_trigger" => Attribute::single_nested(
                "Automatically perform the reload when specified conditions are met.",
                btreemap! {
                    "process_name" => Attribute::string(
                        "The name of the process.",
                    )
                    .optional(),
                },
            )
            .optional(),
            "target_pod_selector" => corev1::label_selector(
                "Used to match labels on the pod to determine whether a dynamic reload should be \
                 performed.",
            )
            .optional(),
        },
    )
    .optional()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data_source::{DataSource, ManifestDataSource, ReadRequest};
    use serde_json::json;

    fn config() -> Value {
        json!({
            "metadata": {"name": "mysql8.0-config-constraints"},
            "spec": {
                "reload_action": {
                    "unix_signal_trigger": {"signal": "SIGHUP", "process_name": "mysqld"},
                    "target_pod_selector": {"match_labels": {"kubeblocks.io/role": "primary"}},
                },
                "downward_api_change_triggered_actions": [{
                    "name": "labels",
                    "mount_point": "/etc/podinfo",
                    "items": [{"path": "labels", "field_ref": {"field_path": "metadata.labels"}}],
                }],
                "parameters_schema": {
                    "top_level_key": "MysqlParameter",
                    "schema_in_json": {"type": "object", "properties": {"max_connections": {"type": "integer"}}},
                },
                "static_parameters": ["innodb_buffer_pool_size"],
                "dynamic_parameters": ["max_connections"],
                "file_format_config": {"format": "ini", "ini_config": {"section_name": "mysqld"}},
            },
        })
    }

    #[test]
    fn schema_has_no_namespace() {
        let schema = ConfigConstraint::schema();
        let metadata = schema.attribute(METADATA).unwrap().kind().nested().unwrap();
        assert!(!metadata.contains_key("namespace"));

        let mut config = config();
        config["metadata"]["namespace"] = json!("default");
        let diagnostics = schema.validate(&config);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.iter().next().unwrap().summary, "Unsupported argument");
    }

    #[test]
    fn read_renders_json_names() {
        let config = config();
        assert!(ConfigConstraint::schema().validate(&config).is_empty());
        let response = ManifestDataSource::<ConfigConstraint>::new().read(ReadRequest {
            type_name: "k8s_apps_kubeblocks_io_config_constraint_v1beta1_manifest",
            config: &config,
        });
        assert!(!response.diagnostics.has_error(), "{}", response.diagnostics);
        let yaml = response.yaml().unwrap();
        assert!(yaml.starts_with("apiVersion: apps.kubeblocks.io/v1beta1\nkind: ConfigConstraint\n"));
        assert!(yaml.contains("downwardAPIChangeTriggeredActions:"));
        assert!(yaml.contains("schemaInJSON:"));
        // Keys inside dynamic values are user data.
        assert!(yaml.contains("max_connections:"));
        assert!(yaml.contains("kubeblocks.io/role: primary"));

        let constraint: ConfigConstraint = serde_yaml::from_str(yaml).unwrap();
        let spec = constraint.spec.unwrap();
        assert_eq!(spec.file_format_config.unwrap().format, FileFormat::Ini);
        assert_eq!(
            spec.reload_action.unwrap().unix_signal_trigger.unwrap().signal,
            "SIGHUP"
        );
    }

    #[test]
    fn unknown_signal_is_rejected() {
        let mut config = config();
        config["spec"]["reload_action"]["unix_signal_trigger"]["signal"] = json!("SIGFOO");
        let diagnostics = ConfigConstraint::schema().validate(&config);
        let error = diagnostics.errors().next().unwrap();
        assert_eq!(error.summary, "Invalid Attribute Value Match");
        assert_eq!(
            error.attribute.as_ref().unwrap().to_string(),
            "spec.reload_action.unix_signal_trigger.signal"
        );
    }

    #[test]
    fn props_plus_format() {
        let format: FileFormat = serde_json::from_value(json!("props-plus")).unwrap();
        assert_eq!(format, FileFormat::PropsPlus);
        assert_eq!(serde_json::to_value(FileFormat::Dotenv).unwrap(), json!("dotenv"));
    }
}
