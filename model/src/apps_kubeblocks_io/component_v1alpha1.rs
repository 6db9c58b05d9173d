use crate::constants::{KUBEBLOCKS_APPS_GROUP, KUBEBLOCKS_APPS_V1ALPHA1};
use crate::manifest::{Manifest, TypeMeta};
use crate::schema::metadata::{self, Scope, METADATA, SPEC, YAML};
use crate::schema::{corev1, Attribute, ElementType, Schema, Validator};
use k8s_openapi::api::core::v1::{
    Affinity as PodAffinity, ConfigMapVolumeSource, EnvVar, PersistentVolumeClaimSpec,
    ResourceRequirements, ServiceSpec, Toleration, TopologySpreadConstraint, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use maplit::btreemap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const COMP_DEF_MAX_LENGTH: usize = 64;
const SERVICE_VERSION_MAX_LENGTH: usize = 32;
const INSTANCE_NAME_MAX_LENGTH: usize = 54;
const PASSWORD_MIN_LENGTH: i64 = 8;
const PASSWORD_MAX_LENGTH: i64 = 32;
const PASSWORD_MAX_DIGITS_OR_SYMBOLS: i64 = 8;

/// A KubeBlocks `Component`, the building block of a `Cluster`. Its `spec` references a
/// `ComponentDefinition` and overrides the parts of it that vary per deployment.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Component {
    #[serde(flatten)]
    pub types: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ComponentSpec>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// The name of the `ComponentDefinition` this component is built from.
    pub comp_def: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_refs: Option<Vec<ServiceRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_templates: Option<Vec<ClusterComponentVolumeClaimTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ComponentService>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_accounts: Option<Vec<ComponentSystemAccount>>,
    pub replicas: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ClusterComponentConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_logs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_pod_management_concurrency: Option<IntOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_update_policy: Option<PodUpdatePolicy>,
    /// Deprecated in favor of `scheduling_policy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduling_policy: Option<SchedulingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<InstanceTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_instances: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_exporter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<bool>,
}

/// A reference to a service provided by another cluster or an external `ServiceDescriptor`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Deprecated in favor of `cluster_service_selector`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_service_selector: Option<ServiceRefClusterSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_descriptor: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRefClusterSelector {
    pub cluster: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceRefServiceSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<ServiceRefCredentialSelector>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRefServiceSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRefCredentialSelector {
    pub component: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterComponentVolumeClaimTemplate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<PersistentVolumeClaimSpec>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentService {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ServiceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_auto_provision: Option<bool>,
}

/// A system account whose password KubeBlocks generates or copies from an existing secret.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSystemAccount {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_config: Option<PasswordConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<ProvisionSecretRef>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_digits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_symbols: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_case: Option<LetterCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum LetterCase {
    LowerCases,
    UpperCases,
    MixedCases,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionSecretRef {
    pub name: String,
    pub namespace: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterComponentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMapVolumeSource>,
}

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum PodUpdatePolicy {
    StrictInPlace,
    PreferInPlace,
}

/// The KubeBlocks shorthand for pod placement.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Affinity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity: Option<PodAntiAffinity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<TenancyType>,
}

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum PodAntiAffinity {
    Preferred,
    Required,
}

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum TenancyType {
    SharedNode,
    DedicatedNode,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<PodAffinity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_spread_constraints: Option<Vec<TopologySpreadConstraint>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Issuer>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub name: IssuerName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<TlsSecretRef>,
}

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum IssuerName {
    KubeBlocks,
    UserProvided,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsSecretRef {
    pub name: String,
    pub ca: String,
    pub cert: String,
    pub key: String,
}

/// Overrides applied to a subset of the component's replicas.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceTemplate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduling_policy: Option<SchedulingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mounts: Option<Vec<VolumeMount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_templates: Option<Vec<ClusterComponentVolumeClaimTemplate>>,
}

impl k8s_openapi::Resource for Component {
    const API_VERSION: &'static str = KUBEBLOCKS_APPS_V1ALPHA1;
    const GROUP: &'static str = KUBEBLOCKS_APPS_GROUP;
    const KIND: &'static str = "Component";
    const VERSION: &'static str = "v1alpha1";
    const URL_PATH_SEGMENT: &'static str = "components";
    type Scope = k8s_openapi::NamespaceResourceScope;
}

impl k8s_openapi::Metadata for Component {
    type Ty = ObjectMeta;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl Manifest for Component {
    const SCOPE: Scope = Scope::Namespaced;

    fn schema() -> Schema {
        Schema::new(
            "Component is a fundamental building block of a Cluster object. For example, a Redis \
             Cluster can include Components like 'redis', 'sentinel', and potentially a proxy like \
             'twemproxy'.",
            btreemap! {
                YAML => metadata::yaml(),
                METADATA => metadata::metadata(Scope::Namespaced),
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
        "ComponentSpec defines the desired state of Component.",
        btreemap! {
            "comp_def" => Attribute::string(
                "Specifies the name of the referenced ComponentDefinition.",
            )
            .required()
            .validator(Validator::LengthAtMost(COMP_DEF_MAX_LENGTH)),
            "service_version" => Attribute::string(
                "ServiceVersion specifies the version of the Service expected to be provisioned \
                 by this Component. The version should follow the syntax and semantics of the \
                 'Semantic Versioning' specification (http://semver.org/).",
            )
            .optional()
            .validator(Validator::LengthAtMost(SERVICE_VERSION_MAX_LENGTH)),
            "service_refs" => service_refs(),
            "labels" => Attribute::map(
                ElementType::String,
                "Specifies Labels to override or add for underlying Pods, PVCs, Account & TLS \
                 Secrets, Services Owned by Component.",
            )
            .optional(),
            "annotations" => Attribute::map(
                ElementType::String,
                "Specifies Annotations to override or add for underlying Pods, PVCs, Account & \
                 TLS Secrets, Services Owned by Component.",
            )
            .optional(),
            "env" => corev1::env(
                "List of environment variables to add. These environment variables will be \
                 placed after the environment variables declared in the Pod.",
            )
            .optional(),
            "resources" => corev1::resources(
                "Specifies the resources required by the Component. It allows defining the CPU, \
                 memory requirements and limits for the Component's containers.",
            )
            .optional(),
            "volume_claim_templates" => volume_claim_templates(
                "Specifies a list of PersistentVolumeClaim templates that define the storage \
                 requirements for the Component.",
            ),
            "volumes" => corev1::volumes(
                "List of volumes to override.",
            )
            .optional(),
            "services" => services(),
            "system_accounts" => system_accounts(),
            "replicas" => Attribute::int32(
                "Specifies the desired number of replicas in the Component for enhancing \
                 availability and durability, or load balancing.",
            )
            .required()
            .validator(Validator::AtLeast(0)),
            "configs" => Attribute::list_nested(
                "Specifies the configuration content of a config template.",
                btreemap! {
                    "name" => Attribute::string("The name of the config.").optional(),
                    "config_map" => corev1::config_map_volume_source(
                        "ConfigMap source for the config.",
                    )
                    .optional(),
                },
            )
            .optional(),
            "enabled_logs" => Attribute::list(
                ElementType::String,
                "Specifies which types of logs should be collected for the Cluster.",
            )
            .optional(),
            "service_account_name" => Attribute::string(
                "Specifies the name of the ServiceAccount required by the running Component. \
                 This ServiceAccount is used to grant necessary permissions for the Component's \
                 Pods to interact with other Kubernetes resources, such as modifying Pod labels \
                 or sending events.",
            )
            .optional(),
            "parallel_pod_management_concurrency" => Attribute::int_or_string(
                "Controls the concurrency of pods during initial scale up, when replacing pods on \
                 nodes, or when scaling down. It only used when 'PodManagementPolicy' is set to \
                 'Parallel'. The default Concurrency is 100%.",
            )
            .optional(),
            "pod_update_policy" => Attribute::string(
                "PodUpdatePolicy indicates how pods should be updated. 'StrictInPlace' indicates \
                 that only allows in-place upgrades. 'PreferInPlace' indicates that we will first \
                 attempt an in-place upgrade of the Pod. If that fails, it will fall back to the \
                 ReCreate, where pod will be recreated.",
            )
            .optional()
            .validator(Validator::one_of(["StrictInPlace", "PreferInPlace"])),
            "affinity" => kubeblocks_affinity(),
            "tolerations" => corev1::tolerations(
                "Allows Pods to be scheduled onto nodes with matching taints. Each toleration in \
                 the array allows the Pod to tolerate node taints based on specified 'key', \
                 'value', 'effect', and 'operator'.",
            )
            .optional(),
            "scheduling_policy" => scheduling_policy(
                "Specifies the scheduling policy for the Component.",
            ),
            "tls_config" => tls_config(),
            "instances" => instances(),
            "offline_instances" => Attribute::list(
                ElementType::String,
                "Specifies the names of instances to be transitioned to offline status. Marking \
                 an instance as offline results in the following: 1. The associated Pod is \
                 stopped, and its PersistentVolumeClaim (PVC) is retained for potential future \
                 reuse or data recovery, but it is no longer actively used. 2. The ordinal number \
                 assigned to this instance is preserved, ensuring it remains unique and avoiding \
                 conflicts with new instances.",
            )
            .optional(),
            "runtime_class_name" => Attribute::string(
                "Defines runtimeClassName for all Pods managed by this Component.",
            )
            .optional(),
            "disable_exporter" => Attribute::bool(
                "Determines whether metrics exporter information is annotated on the Component's \
                 headless Service. If set to true, the following annotations will not be patched \
                 into the Service: 'monitor.kubeblocks.io/path', 'monitor.kubeblocks.io/port', \
                 'monitor.kubeblocks.io/scheme'.",
            )
            .optional(),
            "stop" => Attribute::bool(
                "Stop the Component. If set, all the computing resources will be released.",
            )
            .optional(),
        },
    )
}

fn service_refs() -> Attribute {
    Attribute::list_nested(
        "Defines a list of ServiceRef for a Component, enabling access to both external services \
         and Services provided by other Clusters.",
        btreemap! {
            "name" => Attribute::string(
                "Specifies the identifier of the service reference declaration. It corresponds to \
                 the serviceRefDeclaration name defined in \
                 'componentDefinition.spec.serviceRefDeclarations[*].name'.",
            )
            .required(),
            "namespace" => Attribute::string(
                "Specifies the namespace of the referenced Cluster or the namespace of the \
                 referenced ServiceDescriptor object. If not provided, the referenced Cluster and \
                 ServiceDescriptor will be searched in the namespace of the current Cluster by \
                 default.",
            )
            .optional(),
            "cluster" => Attribute::string(
                "Specifies the name of the KubeBlocks Cluster being referenced. This is used when \
                 services from another KubeBlocks Cluster are consumed. Deprecated since v0.9.",
            )
            .optional(),
            "cluster_service_selector" => Attribute::single_nested(
                "References a service provided by another KubeBlocks Cluster. It specifies the \
                 ClusterService and the account credentials needed for access.",
                btreemap! {
                    "cluster" => Attribute::string(
                        "The name of the Cluster being referenced.",
                    )
                    .required(),
                    "service" => Attribute::single_nested(
                        "Identifies a ClusterService from the list of Services defined in \
                         'cluster.spec.services' of the referenced Cluster.",
                        btreemap! {
                            "component" => Attribute::string(
                                "The name of the Component where the Service resides in. It is \
                                 required when referencing a Component's Service.",
                            )
                            .optional(),
                            "service" => Attribute::string(
                                "The name of the Service to be referenced. Leave it empty to \
                                 reference the default Service.",
                            )
                            .required(),
                            "port" => Attribute::string(
                                "The port name of the Service to be referenced. If there is a \
                                 non-zero node-port exist for the matched Service port, the \
                                 node-port will be selected first.",
                            )
                            .optional(),
                        },
                    )
                    .optional(),
                    "credential" => Attribute::single_nested(
                        "Specifies the SystemAccount to authenticate and establish a connection \
                         with the referenced Cluster. The SystemAccount should be defined in \
                         'componentDefinition.spec.systemAccounts' of the Component providing \
                         the service in the referenced Cluster.",
                        btreemap! {
                            "component" => Attribute::string(
                                "The name of the Component where the credential resides in.",
                            )
                            .required(),
                            "name" => Attribute::string(
                                "The name of the credential (SystemAccount) to reference.",
                            )
                            .required(),
                        },
                    )
                    .optional(),
                },
            )
            .optional(),
            "service_descriptor" => Attribute::string(
                "Specifies the name of the ServiceDescriptor object that describes a service \
                 provided by external sources.",
            )
            .optional(),
        },
    )
    .optional()
}

fn volume_claim_templates(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "name" => Attribute::string(
                "Refers to the name of a volumeMount defined in \
                 'componentDefinition.spec.runtime.containers[*].volumeMounts'.",
            )
            .required(),
            "spec" => corev1::persistent_volume_claim_spec(
                "Defines the desired characteristics of a PersistentVolumeClaim that will be \
                 created for the volume with the mount name specified in the 'name' field.",
            )
            .optional(),
        },
    )
    .optional()
}

fn services() -> Attribute {
    Attribute::list_nested(
        "Overrides Services defined in referenced ComponentDefinition and exposes endpoints \
         that can be accessed by clients.",
        btreemap! {
            "name" => Attribute::string(
                "Name defines the name of the service. otherwise, it indicates the name of the \
                 service.",
            )
            .required()
            .validator(Validator::LengthAtMost(25)),
            "service_name" => Attribute::string(
                "ServiceName defines the name of the underlying service object. If not \
                 specified, the default service name with different patterns will be used.",
            )
            .optional()
            .validator(Validator::LengthAtMost(25)),
            "annotations" => Attribute::map(
                ElementType::String,
                "If ServiceType is LoadBalancer, cloud provider related parameters can be put \
                 here.",
            )
            .optional(),
            "spec" => corev1::service_spec(
                "Spec defines the behavior of a service. \
                 https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#spec-and-status",
            )
            .optional(),
            "role_selector" => Attribute::string(
                "Extends the above 'serviceSpec.selector' by allowing you to specify defined role \
                 as selector for the service. When 'roleSelector' is set, it adds a label \
                 selector 'kubeblocks.io/role: {roleSelector}' to the 'serviceSpec.selector'.",
            )
            .optional(),
            "pod_service" => Attribute::bool(
                "Indicates whether to create a corresponding Service for each Pod of the selected \
                 Component. When set to true, a set of Services will be automatically generated \
                 for each Pod, and the 'roleSelector' field will be ignored.",
            )
            .optional(),
            "disable_auto_provision" => Attribute::bool(
                "Indicates whether the automatic provisioning of the service should be disabled. \
                 If set to true, the service will not be automatically created at the component \
                 provisioning. Instead, you can enable the creation of this service by \
                 specifying it explicitly in the cluster API.",
            )
            .optional(),
        },
    )
    .optional()
}

fn system_accounts() -> Attribute {
    Attribute::list_nested(
        "Overrides system accounts defined in referenced ComponentDefinition.",
        btreemap! {
            "name" => Attribute::string("The name of the system account.").required(),
            "password_config" => Attribute::single_nested(
                "Specifies the policy for generating the account's password. This field is \
                 immutable once set.",
                btreemap! {
                    "length" => Attribute::int32("The length of the password. Defaults to 16.")
                        .optional()
                        .validator(Validator::AtLeast(PASSWORD_MIN_LENGTH))
                        .validator(Validator::AtMost(PASSWORD_MAX_LENGTH)),
                    "num_digits" => Attribute::int32(
                        "The number of digits in the password. Defaults to 4.",
                    )
                    .optional()
                    .validator(Validator::AtLeast(0))
                    .validator(Validator::AtMost(PASSWORD_MAX_DIGITS_OR_SYMBOLS)),
                    "num_symbols" => Attribute::int32(
                        "The number of symbols in the password. Defaults to 0.",
                    )
                    .optional()
                    .validator(Validator::AtLeast(0))
                    .validator(Validator::AtMost(PASSWORD_MAX_DIGITS_OR_SYMBOLS)),
                    "letter_case" => Attribute::string(
                        "The case of the letters in the password. Defaults to 'MixedCases'.",
                    )
                    .optional()
                    .validator(Validator::one_of(["LowerCases", "UpperCases", "MixedCases"])),
                    "seed" => Attribute::string(
                        "Seed to generate the account's password. Cannot be updated.",
                    )
                    .optional(),
                },
            )
            .optional(),
            "secret_ref" => Attribute::single_nested(
                "Refers to the secret from which data will be copied to create the new account. \
                 This field is immutable once set.",
                btreemap! {
                    "name" => Attribute::string("The unique identifier of the secret.")
                        .required(),
                    "namespace" => Attribute::string("The namespace where the secret is located.")
                        .required(),
                },
            )
            .optional(),
        },
    )
    .optional()
}

fn kubeblocks_affinity() -> Attribute {
    Attribute::single_nested(
        "Specifies a group of affinity scheduling rules for the Component. It allows users to \
         control how the Component's Pods are scheduled onto nodes in the Cluster. Deprecated \
         since v0.10, replaced by the 'schedulingPolicy' field.",
        btreemap! {
            "pod_anti_affinity" => Attribute::string(
                "Specifies the anti-affinity level of Pods within a Component. It determines how \
                 pods should be spread across nodes to improve availability and performance. It \
                 can have the following values: 'Preferred' and 'Required'. The default value is \
                 'Preferred'.",
            )
            .optional()
            .validator(Validator::one_of(["Preferred", "Required"])),
            "topology_keys" => Attribute::list(
                ElementType::String,
                "Represents the key of node labels used to define the topology domain for Pod \
                 anti-affinity and Pod spread constraints.",
            )
            .optional(),
            "node_labels" => Attribute::map(
                ElementType::String,
                "Indicates the node labels that must be present on nodes for pods to be \
                 scheduled on them. It is a map where the keys are the label keys and the values \
                 are the corresponding label values.",
            )
            .optional(),
            "tenancy" => Attribute::string(
                "Determines the level of resource isolation between Pods. It can have the \
                 following values: 'SharedNode' and 'DedicatedNode'.",
            )
            .optional()
            .validator(Validator::one_of(["SharedNode", "DedicatedNode"])),
        },
    )
    .optional()
}

fn scheduling_policy(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "scheduler_name" => Attribute::string(
                "If specified, the Pod will be dispatched by specified scheduler. If not \
                 specified, the Pod will be dispatched by default scheduler.",
            )
            .optional(),
            "node_selector" => Attribute::map(
                ElementType::String,
                "NodeSelector is a selector which must be true for the Pod to fit on a node. \
                 Selector which must match a node's labels for the Pod to be scheduled on that \
                 node. More info: \
                 https://kubernetes.io/docs/concepts/configuration/assign-pod-node/",
            )
            .optional(),
            "node_name" => Attribute::string(
                "NodeName is a request to schedule this Pod onto a specific node. If it is \
                 non-empty, the scheduler simply schedules this Pod onto that node, assuming that \
                 it fits resource requirements.",
            )
            .optional(),
            "affinity" => corev1::affinity(
                "Specifies a group of affinity scheduling rules of the Cluster, including \
                 NodeAffinity, PodAffinity, and PodAntiAffinity.",
            )
            .optional(),
            "tolerations" => corev1::tolerations(
                "Allows Pods to be scheduled onto nodes with matching taints. Each toleration in \
                 the array allows the Pod to tolerate node taints based on specified 'key', \
                 'value', 'effect', and 'operator'.",
            )
            .optional(),
            "topology_spread_constraints" => corev1::topology_spread_constraints(
                "TopologySpreadConstraints describes how a group of Pods ought to spread across \
                 topology domains. Scheduler will schedule Pods in a way which abides by the \
                 constraints. All topologySpreadConstraints are ANDed.",
            )
            .optional(),
        },
    )
    .optional()
}

fn tls_config() -> Attribute {
    Attribute::single_nested(
        "Specifies the TLS configuration for the Component, including: a boolean flag that \
         indicates whether the Component should use Transport Layer Security (TLS) for secure \
         communication, and an optional configuration for the TLS certificate issuer.",
        btreemap! {
            "enable" => Attribute::bool(
                "A boolean flag that indicates whether the Component should use Transport Layer \
                 Security (TLS) for secure communication. When set to true, the Component will be \
                 configured to use TLS encryption for its network connections.",
            )
            .optional(),
            "issuer" => Attribute::single_nested(
                "Specifies the configuration for the TLS certificates issuer. It allows defining \
                 the issuer name and the reference to the secret containing the TLS \
                 certificates and key. Required when TLS is enabled.",
                btreemap! {
                    "name" => Attribute::string(
                        "The issuer for TLS certificates. It only allows two enum values: \
                         'KubeBlocks' and 'UserProvided'. 'KubeBlocks' indicates that the \
                         self-signed TLS certificates generated by the KubeBlocks Operator will \
                         be used. 'UserProvided' means that the user is responsible for \
                         providing their own CA, Cert, and Key.",
                    )
                    .required()
                    .validator(Validator::one_of(["KubeBlocks", "UserProvided"])),
                    "secret_ref" => Attribute::single_nested(
                        "SecretRef is the reference to the secret that contains user-provided \
                         certificates. It is required when the issuer is set to 'UserProvided'.",
                        btreemap! {
                            "name" => Attribute::string("Name of the Secret that contains \
                                                         user-provided certificates.")
                                .required(),
                            "ca" => Attribute::string("Key of CA cert in Secret").required(),
                            "cert" => Attribute::string("Key of Cert in Secret").required(),
                            "key" => Attribute::string("Key of TLS private key in Secret")
                                .required(),
                        },
                    )
                    .optional(),
                },
            )
            .optional(),
        },
    )
    .optional()
}

fn instances() -> Attribute {
    Attribute::list_nested(
        "Allows for the customization of configuration values for each instance within a \
         Component. An instance represent a single replica (Pod and associated K8s resources \
         like PVCs, Services, and ConfigMaps).",
        btreemap! {
            "name" => Attribute::string(
                "Name specifies the unique name of the instance Pod created using this \
                 InstanceTemplate. This name is constructed by concatenating the Component's \
                 name, the template's name, and the instance's ordinal using the pattern: \
                 $(cluster.name)-$(component.name)-$(template.name)-$(ordinal).",
            )
            .required()
            .validator(Validator::LengthAtMost(INSTANCE_NAME_MAX_LENGTH))
            .validator(Validator::name()),
            "replicas" => Attribute::int32(
                "Specifies the number of instances (Pods) to create from this InstanceTemplate. \
                 This field allows setting how many replicated instances of the Component, with \
                 the specific overrides in the InstanceTemplate, are created. The default value \
                 is 1. A value of 0 disables instance creation.",
            )
            .optional()
            .validator(Validator::AtLeast(0)),
            "annotations" => Attribute::map(
                ElementType::String,
                "Specifies a map of key-value pairs to be merged into the Pod's existing \
                 annotations. Existing keys will have their values overwritten, while new keys \
                 will be added to the annotations.",
            )
            .optional(),
            "labels" => Attribute::map(
                ElementType::String,
                "Specifies a map of key-value pairs that will be merged into the Pod's existing \
                 labels. Values for existing keys will be overwritten, and new keys will be \
                 added.",
            )
            .optional(),
            "image" => Attribute::string(
                "Specifies an override for the first container's image in the Pod.",
            )
            .optional(),
            "scheduling_policy" => scheduling_policy(
                "Specifies the scheduling policy for the Component.",
            ),
            "resources" => corev1::resources(
                "Specifies an override for the resource requirements of the first container in \
                 the Pod. This field allows for customizing resource allocation (CPU, memory, \
                 etc.) for the container.",
            )
            .optional(),
            "env" => corev1::env(
                "Defines Env to override. Add new or override existing envs.",
            )
            .optional(),
            "volumes" => corev1::volumes(
                "Defines Volumes to override. Add new or override existing volumes.",
            )
            .optional(),
            "volume_mounts" => corev1::volume_mounts(
                "Defines VolumeMounts to override. Add new or override existing volume mounts of \
                 the first container in the Pod.",
            )
            .optional(),
            "volume_claim_templates" => volume_claim_templates(
                "Defines VolumeClaimTemplates to override. Add new or override existing volume \
                 claim templates.",
            ),
        },
    )
    .optional()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data_source::{DataSource, ManifestDataSource, ReadRequest};
    use serde_json::json;

    fn config() -> serde_json::Value {
        json!({
            "metadata": {
                "name": "mysql-cluster-mysql",
                "namespace": "demo",
                "labels": {"app.kubernetes.io/instance": "mysql-cluster"},
            },
            "spec": {
                "comp_def": "apecloud-mysql",
                "service_version": "8.0.30",
                "replicas": 3,
                "parallel_pod_management_concurrency": "50%",
                "pod_update_policy": "PreferInPlace",
                "resources": {"limits": {"cpu": "500m", "memory": "1Gi"}},
                "tolerations": [{"key": "kb-data", "operator": "Equal", "value": "true", "effect": "NoSchedule"}],
                "scheduling_policy": {
                    "node_selector": {"disktype": "ssd"},
                    "affinity": {
                        "node_affinity": {
                            "required_during_scheduling_ignored_during_execution": {
                                "node_selector_terms": [{
                                    "match_expressions": [{"key": "zone", "operator": "In", "values": ["a"]}],
                                    "match_fields": [{"key": "metadata.name", "operator": "NotIn", "values": ["n1"]}],
                                }],
                            },
                        },
                    },
                },
                "services": [{
                    "name": "vpc",
                    "spec": {"type": "LoadBalancer", "cluster_ip": "None", "ports": [{"port": 3306, "target_port": "mysql"}]},
                }],
                "tls_config": {"enable": true, "issuer": {"name": "KubeBlocks"}},
            },
        })
    }

    #[test]
    fn schema_accepts_full_config() {
        let diagnostics = Component::schema().validate(&config());
        assert!(diagnostics.is_empty(), "{}", diagnostics);
    }

    #[test]
    fn read_renders_kubernetes_names() {
        let config = config();
        let response = ManifestDataSource::<Component>::new().read(ReadRequest {
            type_name: "k8s_apps_kubeblocks_io_component_v1alpha1_manifest",
            config: &config,
        });
        assert!(!response.diagnostics.has_error(), "{}", response.diagnostics);
        let yaml = response.yaml().unwrap();
        let component: Component = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(component.types.api_version.as_deref(), Some("apps.kubeblocks.io/v1alpha1"));
        assert_eq!(component.types.kind.as_deref(), Some("Component"));
        let spec = component.spec.unwrap();
        assert_eq!(spec.comp_def, "apecloud-mysql");
        assert_eq!(spec.replicas, 3);
        assert_eq!(
            spec.parallel_pod_management_concurrency,
            Some(IntOrString::String("50%".to_string()))
        );
        assert_eq!(spec.pod_update_policy, Some(PodUpdatePolicy::PreferInPlace));
        let service_spec = spec.services.unwrap()[0].spec.clone().unwrap();
        assert_eq!(service_spec.cluster_ip.as_deref(), Some("None"));
        assert!(yaml.contains("clusterIP:"));
        assert!(yaml.contains("matchFields:"));
        assert!(yaml.contains("compDef: apecloud-mysql"));
    }

    #[test]
    fn replicas_must_not_be_negative() {
        let mut config = config();
        config["spec"]["replicas"] = json!(-1);
        let diagnostics = Component::schema().validate(&config);
        assert_eq!(diagnostics.errors().count(), 1);
        let error = diagnostics.errors().next().unwrap();
        assert_eq!(error.summary, "Invalid Attribute Value");
        assert_eq!(
            error.attribute.as_ref().unwrap().to_string(),
            "spec.replicas"
        );
    }

    #[test]
    fn replicas_must_fit_an_int32() {
        let mut config = config();
        config["spec"]["replicas"] = json!(3_000_000_000_i64);
        let diagnostics = Component::schema().validate(&config);
        assert_eq!(diagnostics.errors().count(), 1);
        let error = diagnostics.errors().next().unwrap();
        assert_eq!(error.summary, "Invalid Attribute Value");
        assert_eq!(
            error.attribute.as_ref().unwrap().to_string(),
            "spec.replicas"
        );

        config["spec"]["replicas"] = json!(i32::MAX);
        config["spec"]["instances"] = json!([{"name": "big", "replicas": 2_147_483_648_i64}]);
        let diagnostics = Component::schema().validate(&config);
        assert_eq!(diagnostics.errors().count(), 1);
        assert_eq!(
            diagnostics.errors().next().unwrap().attribute.as_ref().unwrap().to_string(),
            "spec.instances[0].replicas"
        );
    }

    #[test]
    fn int_or_string_rejects_other_shapes() {
        for value in [json!(true), json!(1.5), json!({"percent": 50})] {
            let mut config = config();
            config["spec"]["parallel_pod_management_concurrency"] = value.clone();
            config["spec"]["services"][0]["spec"]["ports"][0]["target_port"] = value;
            let diagnostics = Component::schema().validate(&config);
            let errors: Vec<_> = diagnostics
                .errors()
                .map(|e| (e.summary.as_str(), e.attribute.as_ref().unwrap().to_string()))
                .collect();
            assert_eq!(
                errors,
                vec![
                    (
                        "Incorrect attribute value type",
                        "spec.parallel_pod_management_concurrency".to_string()
                    ),
                    (
                        "Incorrect attribute value type",
                        "spec.services[0].spec.ports[0].target_port".to_string()
                    ),
                ]
            );
        }
    }

    #[test]
    fn volumes_and_system_accounts() {
        let mut config = config();
        config["spec"]["volumes"] = json!([
            {"name": "scripts", "config_map": {"name": "mysql-scripts", "default_mode": 0o555}},
            {"name": "meta", "downward_api": {"items": [{"path": "labels", "field_ref": {"field_path": "metadata.labels"}}]}},
            {"name": "ebs", "aws_elastic_block_store": {"volume_id": "vol-1"}},
        ]);
        config["spec"]["instances"] = json!([{
            "name": "primary",
            "volume_mounts": [{"name": "scripts", "mount_path": "/scripts", "read_only": true}],
        }]);
        config["spec"]["system_accounts"] = json!([{
            "name": "root",
            "password_config": {"length": 16, "num_digits": 4, "letter_case": "MixedCases"},
            "secret_ref": {"name": "root-password", "namespace": "demo"},
        }]);
        let diagnostics = Component::schema().validate(&config);
        assert!(diagnostics.is_empty(), "{}", diagnostics);

        let response = ManifestDataSource::<Component>::new().read(ReadRequest {
            type_name: "k8s_apps_kubeblocks_io_component_v1alpha1_manifest",
            config: &config,
        });
        assert!(!response.diagnostics.has_error(), "{}", response.diagnostics);
        let yaml = response.yaml().unwrap();
        assert!(yaml.contains("downwardAPI:"));
        assert!(yaml.contains("volumeID: vol-1"));
        assert!(yaml.contains("mountPath: /scripts"));
        let spec = serde_yaml::from_str::<Component>(yaml).unwrap().spec.unwrap();
        let account = &spec.system_accounts.unwrap()[0];
        assert_eq!(
            account.password_config.as_ref().unwrap().letter_case,
            Some(LetterCase::MixedCases)
        );
        assert_eq!(account.secret_ref.as_ref().unwrap().namespace, "demo");
        assert_eq!(spec.volumes.unwrap().len(), 3);
    }

    #[test]
    fn password_length_is_bounded() {
        let mut config = config();
        config["spec"]["system_accounts"] =
            json!([{"name": "root", "password_config": {"length": 4}}]);
        let diagnostics = Component::schema().validate(&config);
        assert_eq!(
            diagnostics.errors().next().unwrap().attribute.as_ref().unwrap().to_string(),
            "spec.system_accounts[0].password_config.length"
        );
    }

    #[test]
    fn issuer_name_is_an_enum() {
        let mut config = config();
        config["spec"]["tls_config"]["issuer"]["name"] = json!("SelfSigned");
        let diagnostics = Component::schema().validate(&config);
        assert!(diagnostics.has_error());
        assert_eq!(
            diagnostics.errors().next().unwrap().summary,
            "Invalid Attribute Value Match"
        );
    }
}
