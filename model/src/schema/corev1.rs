//! Schema fragments for the `core/v1` and `meta/v1` types that CRDs embed. Each function returns
//! an attribute without a required/optional flag so the caller can decide.

use crate::schema::{Attribute, Attributes, ElementType, Validator};
use maplit::btreemap;

const NODE_SELECTOR_OPERATORS: [&str; 6] = ["In", "NotIn", "Exists", "DoesNotExist", "Gt", "Lt"];
const LABEL_SELECTOR_OPERATORS: [&str; 4] = ["In", "NotIn", "Exists", "DoesNotExist"];
const TAINT_EFFECTS: [&str; 3] = ["NoSchedule", "PreferNoSchedule", "NoExecute"];

/// `metav1.LabelSelector`.
pub fn label_selector(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "match_expressions" => Attribute::list_nested(
                "matchExpressions is a list of label selector requirements. The requirements are \
                 ANDed.",
                btreemap! {
                    "key" => Attribute::string(
                        "key is the label key that the selector applies to.",
                    )
                    .required(),
                    "operator" => Attribute::string(
                        "operator represents a key's relationship to a set of values. Valid \
                         operators are In, NotIn, Exists and DoesNotExist.",
                    )
                    .required()
                    .validator(Validator::one_of(LABEL_SELECTOR_OPERATORS)),
                    "values" => Attribute::list(
                        ElementType::String,
                        "values is an array of string values. If the operator is In or NotIn, the \
                         values array must be non-empty. If the operator is Exists or \
                         DoesNotExist, the values array must be empty.",
                    )
                    .optional(),
                },
            )
            .optional(),
            "match_labels" => Attribute::map(
                ElementType::String,
                "matchLabels is a map of {key,value} pairs. A single {key,value} in the \
                 matchLabels map is equivalent to an element of matchExpressions, whose key field \
                 is 'key', the operator is 'In', and the values array contains only 'value'. The \
                 requirements are ANDed.",
            )
            .optional(),
        },
    )
}

fn node_selector_requirements(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "key" => Attribute::string("The label key that the selector applies to.").required(),
            "operator" => Attribute::string(
                "Represents a key's relationship to a set of values. Valid operators are In, \
                 NotIn, Exists, DoesNotExist, Gt, and Lt.",
            )
            .required()
            .validator(Validator::one_of(NODE_SELECTOR_OPERATORS)),
            "values" => Attribute::list(
                ElementType::String,
                "An array of string values. If the operator is In or NotIn, the values array must \
                 be non-empty. If the operator is Exists or DoesNotExist, the values array must be \
                 empty. If the operator is Gt or Lt, the values array must have a single element, \
                 which will be interpreted as an integer.",
            )
            .optional(),
        },
    )
    .optional()
}

fn node_selector_term() -> Attributes {
    btreemap! {
        "match_expressions" => node_selector_requirements(
            "A list of node selector requirements by node's labels.",
        ),
        "match_fields" => node_selector_requirements(
            "A list of node selector requirements by node's fields.",
        ),
    }
}

fn pod_affinity_term() -> Attributes {
    btreemap! {
        "label_selector" => label_selector(
            "A label query over a set of resources, in this case pods.",
        )
        .optional(),
        "namespace_selector" => label_selector(
            "A label query over the set of namespaces that the term applies to. The term is \
             applied to the union of the namespaces selected by this field and the ones listed in \
             the namespaces field. null selector and null or empty namespaces list means 'this \
             pod's namespace'. An empty selector ({}) matches all namespaces.",
        )
        .optional(),
        "namespaces" => Attribute::list(
            ElementType::String,
            "namespaces specifies a static list of namespace names that the term applies to.",
        )
        .optional(),
        "topology_key" => Attribute::string(
            "This pod should be co-located (affinity) or not co-located (anti-affinity) with the \
             pods matching the labelSelector in the specified namespaces, where co-located is \
             defined as running on a node whose value of the label with key topologyKey matches \
             that of any node on which any of the selected pods is running. Empty topologyKey is \
             not allowed.",
        )
        .required(),
    }
}

fn weighted_pod_affinity_terms(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "pod_affinity_term" => Attribute::single_nested(
                "Required. A pod affinity term, associated with the corresponding weight.",
                pod_affinity_term(),
            )
            .required(),
            "weight" => Attribute::int32(
                "weight associated with matching the corresponding podAffinityTerm, in the range \
                 1-100.",
            )
            .required()
            .validator(Validator::AtLeast(1))
            .validator(Validator::AtMost(100)),
        },
    )
    .optional()
}

fn pod_affinity(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "preferred_during_scheduling_ignored_during_execution" => weighted_pod_affinity_terms(
                "The scheduler will prefer to schedule pods to nodes that satisfy the affinity \
                 expressions specified by this field, but it may choose a node that violates one \
                 or more of the expressions.",
            ),
            "required_during_scheduling_ignored_during_execution" => Attribute::list_nested(
                "If the affinity requirements specified by this field are not met at scheduling \
                 time, the pod will not be scheduled onto the node. When there are multiple \
                 elements, the lists of nodes corresponding to each podAffinityTerm are \
                 intersected, i.e. all terms must be satisfied.",
                pod_affinity_term(),
            )
            .optional(),
        },
    )
    .optional()
}

/// `corev1.Affinity`: node affinity, pod affinity and pod anti-affinity.
pub fn affinity(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "node_affinity" => Attribute::single_nested(
                "Describes node affinity scheduling rules for the pod.",
                btreemap! {
                    "preferred_during_scheduling_ignored_during_execution" => Attribute::list_nested(
                        "The scheduler will prefer to schedule pods to nodes that satisfy the \
                         affinity expressions specified by this field, but it may choose a node \
                         that violates one or more of the expressions.",
                        btreemap! {
                            "preference" => Attribute::single_nested(
                                "A node selector term, associated with the corresponding weight.",
                                node_selector_term(),
                            )
                            .required(),
                            "weight" => Attribute::int32(
                                "Weight associated with matching the corresponding \
                                 nodeSelectorTerm, in the range 1-100.",
                            )
                            .required()
                            .validator(Validator::AtLeast(1))
                            .validator(Validator::AtMost(100)),
                        },
                    )
                    .optional(),
                    "required_during_scheduling_ignored_during_execution" => Attribute::single_nested(
                        "If the affinity requirements specified by this field are not met at \
                         scheduling time, the pod will not be scheduled onto the node.",
                        btreemap! {
                            "node_selector_terms" => Attribute::list_nested(
                                "Required. A list of node selector terms. The terms are ORed.",
                                node_selector_term(),
                            )
                            .required(),
                        },
                    )
                    .optional(),
                },
            )
            .optional(),
            "pod_affinity" => pod_affinity(
                "Describes pod affinity scheduling rules (e.g. co-locate this pod in the same \
                 node, zone, etc. as some other pod(s)).",
            ),
            "pod_anti_affinity" => pod_affinity(
                "Describes pod anti-affinity scheduling rules (e.g. avoid putting this pod in the \
                 same node, zone, etc. as some other pod(s)).",
            ),
        },
    )
}

/// `[]corev1.Toleration`.
pub fn tolerations(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "effect" => Attribute::string(
                "Effect indicates the taint effect to match. Empty means match all taint effects. \
                 When specified, allowed values are NoSchedule, PreferNoSchedule and NoExecute.",
            )
            .optional()
            .validator(Validator::one_of(TAINT_EFFECTS)),
            "key" => Attribute::string(
                "Key is the taint key that the toleration applies to. Empty means match all taint \
                 keys. If the key is empty, operator must be Exists.",
            )
            .optional(),
            "operator" => Attribute::string(
                "Operator represents a key's relationship to the value. Valid operators are \
                 Exists and Equal. Defaults to Equal.",
            )
            .optional()
            .validator(Validator::one_of(["Exists", "Equal"])),
            "toleration_seconds" => Attribute::int64(
                "TolerationSeconds represents the period of time the toleration (which must be of \
                 effect NoExecute, otherwise this field is ignored) tolerates the taint. By \
                 default, it is not set, which means tolerate the taint forever.",
            )
            .optional(),
            "value" => Attribute::string(
                "Value is the taint value the toleration matches to. If the operator is Exists, \
                 the value should be empty, otherwise just a regular string.",
            )
            .optional(),
        },
    )
}

/// `[]corev1.TopologySpreadConstraint`.
pub fn topology_spread_constraints(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "label_selector" => label_selector(
                "LabelSelector is used to find matching pods. Pods that match this label selector \
                 are counted to determine the number of pods in their corresponding topology \
                 domain.",
            )
            .optional(),
            "max_skew" => Attribute::int32(
                "MaxSkew describes the degree to which pods may be unevenly distributed. It's a \
                 required field. Default value is 1 and 0 is not allowed.",
            )
            .required()
            .validator(Validator::AtLeast(1)),
            "min_domains" => Attribute::int32(
                "MinDomains indicates a minimum number of eligible domains. When the number of \
                 eligible domains with matching topology keys is less than minDomains, Pod \
                 Topology Spread treats global minimum as 0.",
            )
            .optional(),
            "topology_key" => Attribute::string(
                "TopologyKey is the key of node labels. Nodes that have a label with this key and \
                 identical values are considered to be in the same topology.",
            )
            .required(),
            "when_unsatisfiable" => Attribute::string(
                "WhenUnsatisfiable indicates how to deal with a pod if it doesn't satisfy the \
                 spread constraint. DoNotSchedule (default) tells the scheduler not to schedule \
                 it. ScheduleAnyway tells the scheduler to schedule the pod in any location.",
            )
            .required()
            .validator(Validator::one_of(["DoNotSchedule", "ScheduleAnyway"])),
        },
    )
}

/// `corev1.ObjectFieldSelector`.
pub fn object_field_selector(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "api_version" => Attribute::string(
                "Version of the schema the FieldPath is written in terms of, defaults to 'v1'.",
            )
            .optional(),
            "field_path" => Attribute::string(
                "Path of the field to select in the specified API version.",
            )
            .required(),
        },
    )
}

/// `corev1.ResourceFieldSelector`.
pub fn resource_field_selector(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "container_name" => Attribute::string(
                "Container name: required for volumes, optional for env vars",
            )
            .optional(),
            "divisor" => Attribute::string(
                "Specifies the output format of the exposed resources, defaults to '1'",
            )
            .optional(),
            "resource" => Attribute::string("Required: resource to select").required(),
        },
    )
}

fn key_selector(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "key" => Attribute::string("The key to select.").required(),
            "name" => Attribute::string(
                "Name of the referent. More info: \
                 https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
            )
            .optional(),
            "optional" => Attribute::bool("Specify whether the referent or its key must be defined")
                .optional(),
        },
    )
    .optional()
}

/// `[]corev1.EnvVar`.
pub fn env(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "name" => Attribute::string(
                "Name of the environment variable. Must be a C_IDENTIFIER.",
            )
            .required(),
            "value" => Attribute::string(
                "Variable references $(VAR_NAME) are expanded using the previously defined \
                 environment variables in the container and any service environment variables. \
                 Defaults to ''.",
            )
            .optional(),
            "value_from" => Attribute::single_nested(
                "Source for the environment variable's value. Cannot be used if value is not \
                 empty.",
                btreemap! {
                    "config_map_key_ref" => key_selector("Selects a key of a ConfigMap."),
                    "field_ref" => object_field_selector(
                        "Selects a field of the pod: supports metadata.name, metadata.namespace, \
                         metadata.labels['<KEY>'], metadata.annotations['<KEY>'], spec.nodeName, \
                         spec.serviceAccountName, status.hostIP, status.podIP, status.podIPs.",
                    )
                    .optional(),
                    "resource_field_ref" => resource_field_selector(
                        "Selects a resource of the container: only resources limits and requests \
                         (limits.cpu, limits.memory, limits.ephemeral-storage, requests.cpu, \
                         requests.memory and requests.ephemeral-storage) are currently supported.",
                    )
                    .optional(),
                    "secret_key_ref" => key_selector(
                        "Selects a key of a secret in the pod's namespace",
                    ),
                },
            )
            .optional(),
        },
    )
}

/// `corev1.ResourceRequirements`.
pub fn resources(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "limits" => Attribute::map(
                ElementType::String,
                "Limits describes the maximum amount of compute resources allowed. More info: \
                 https://kubernetes.io/docs/concepts/configuration/manage-resources-containers/",
            )
            .optional(),
            "requests" => Attribute::map(
                ElementType::String,
                "Requests describes the minimum amount of compute resources required. If \
                 Requests is omitted for a container, it defaults to Limits if that is explicitly \
                 specified, otherwise to an implementation-defined value.",
            )
            .optional(),
        },
    )
}

/// `corev1.PersistentVolumeClaimSpec`.
pub fn persistent_volume_claim_spec(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "access_modes" => Attribute::list(
                ElementType::String,
                "Contains the desired access modes the volume should have. More info: \
                 https://kubernetes.io/docs/concepts/storage/persistent-volumes#access-modes-1",
            )
            .optional(),
            "data_source" => typed_local_object_reference(
                "Specifies an object to populate the volume from: either an existing \
                 VolumeSnapshot object (snapshot.storage.k8s.io/VolumeSnapshot) or an existing \
                 PVC (PersistentVolumeClaim).",
            )
            .optional(),
            "data_source_ref" => typed_local_object_reference(
                "Specifies the object from which to populate the volume with data, if a \
                 non-empty volume is desired. This may be any local object from a non-empty API \
                 group (non core object) or a PersistentVolumeClaim object.",
            )
            .optional(),
            "resources" => resources(
                "Represents the minimum resources the volume should have. More info: \
                 https://kubernetes.io/docs/concepts/storage/persistent-volumes#resources",
            )
            .optional(),
            "selector" => label_selector("A label query over volumes to consider for binding.")
                .optional(),
            "storage_class_name" => Attribute::string(
                "The name of the StorageClass required by the claim. More info: \
                 https://kubernetes.io/docs/concepts/storage/persistent-volumes#class-1",
            )
            .optional(),
            "volume_mode" => Attribute::string(
                "Defines what type of volume is required by the claim, either Block or \
                 Filesystem.",
            )
            .optional()
            .validator(Validator::one_of(["Block", "Filesystem"])),
            "volume_name" => Attribute::string(
                "The binding reference to the PersistentVolume backing this claim.",
            )
            .optional(),
        },
    )
}

/// `corev1.TypedLocalObjectReference`.
fn typed_local_object_reference(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "api_group" => Attribute::string(
                "APIGroup is the group for the resource being referenced. If APIGroup is not \
                 specified, the specified Kind must be in the core API group.",
            )
            .optional(),
            "kind" => Attribute::string("Kind is the type of resource being referenced")
                .required(),
            "name" => Attribute::string("Name is the name of resource being referenced")
                .required(),
        },
    )
}

/// `corev1.ServiceSpec`, restricted to the fields a managed service may set.
pub fn service_spec(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "allocate_load_balancer_node_ports" => Attribute::bool(
                "allocateLoadBalancerNodePorts defines if NodePorts will be automatically \
                 allocated for services with type LoadBalancer. Default is 'true'.",
            )
            .optional(),
            "cluster_ip" => Attribute::string(
                "clusterIP is the IP address of the service and is usually assigned randomly. If \
                 an address is specified manually, is in-range, and is not in use, it will be \
                 allocated to the service. 'None' can be specified for headless services.",
            )
            .optional()
            .json_name("clusterIP"),
            "cluster_ips" => Attribute::list(
                ElementType::String,
                "ClusterIPs is a list of IP addresses assigned to this service, and are usually \
                 assigned randomly.",
            )
            .optional()
            .json_name("clusterIPs"),
            "external_ips" => Attribute::list(
                ElementType::String,
                "externalIPs is a list of IP addresses for which nodes in the cluster will also \
                 accept traffic for this service.",
            )
            .optional()
            .json_name("externalIPs"),
            "external_name" => Attribute::string(
                "externalName is the external reference that discovery mechanisms will return as \
                 an alias for this service (e.g. a DNS CNAME record). Requires type to be \
                 ExternalName.",
            )
            .optional(),
            "external_traffic_policy" => Attribute::string(
                "externalTrafficPolicy describes how nodes distribute service traffic they \
                 receive on one of the Service's 'externally-facing' addresses.",
            )
            .optional()
            .validator(Validator::one_of(["Cluster", "Local"])),
            "health_check_node_port" => Attribute::int32(
                "healthCheckNodePort specifies the healthcheck nodePort for the service. This \
                 only applies when type is set to LoadBalancer and externalTrafficPolicy is set \
                 to Local.",
            )
            .optional(),
            "internal_traffic_policy" => Attribute::string(
                "InternalTrafficPolicy describes how nodes distribute service traffic they \
                 receive on the ClusterIP.",
            )
            .optional()
            .validator(Validator::one_of(["Cluster", "Local"])),
            "ip_families" => Attribute::list(
                ElementType::String,
                "IPFamilies is a list of IP families (e.g. IPv4, IPv6) assigned to this service.",
            )
            .optional(),
            "ip_family_policy" => Attribute::string(
                "IPFamilyPolicy represents the dual-stack-ness requested or required by this \
                 Service.",
            )
            .optional()
            .validator(Validator::one_of(["SingleStack", "PreferDualStack", "RequireDualStack"])),
            "load_balancer_class" => Attribute::string(
                "loadBalancerClass is the class of the load balancer implementation this Service \
                 belongs to.",
            )
            .optional(),
            "load_balancer_ip" => Attribute::string(
                "Only applies to Service Type: LoadBalancer. This feature depends on whether the \
                 underlying cloud-provider supports specifying the loadBalancerIP when a load \
                 balancer is created. Deprecated since Kubernetes v1.24.",
            )
            .optional()
            .json_name("loadBalancerIP"),
            "load_balancer_source_ranges" => Attribute::list(
                ElementType::String,
                "If specified and supported by the platform, traffic through the cloud-provider \
                 load-balancer will be restricted to the specified client IPs.",
            )
            .optional(),
            "ports" => Attribute::list_nested(
                "The list of ports that are exposed by this service.",
                btreemap! {
                    "app_protocol" => Attribute::string(
                        "The application protocol for this port.",
                    )
                    .optional(),
                    "name" => Attribute::string(
                        "The name of this port within the service. This must be a DNS_LABEL.",
                    )
                    .optional(),
                    "node_port" => Attribute::int32(
                        "The port on each node on which this service is exposed when type is \
                         NodePort or LoadBalancer.",
                    )
                    .optional(),
                    "port" => Attribute::int32("The port that will be exposed by this service.")
                        .required(),
                    "protocol" => Attribute::string(
                        "The IP protocol for this port. Supports 'TCP', 'UDP', and 'SCTP'. \
                         Default is TCP.",
                    )
                    .optional()
                    .validator(Validator::one_of(["TCP", "UDP", "SCTP"])),
                    "target_port" => Attribute::int_or_string(
                        "Number or name of the port to access on the pods targeted by the \
                         service. Number must be in the range 1 to 65535. Name must be an \
                         IANA_SVC_NAME.",
                    )
                    .optional(),
                },
            )
            .optional(),
            "publish_not_ready_addresses" => Attribute::bool(
                "publishNotReadyAddresses indicates that any agent which deals with endpoints for \
                 this Service should disregard any indications of ready/not-ready.",
            )
            .optional(),
            "selector" => Attribute::map(
                ElementType::String,
                "Route service traffic to pods with label keys and values matching this \
                 selector.",
            )
            .optional(),
            "session_affinity" => Attribute::string(
                "Supports 'ClientIP' and 'None'. Used to maintain session affinity.",
            )
            .optional()
            .validator(Validator::one_of(["ClientIP", "None"])),
            "session_affinity_config" => Attribute::single_nested(
                "sessionAffinityConfig contains the configurations of session affinity.",
                btreemap! {
                    "client_ip" => Attribute::single_nested(
                        "clientIP contains the configurations of Client IP based session \
                         affinity.",
                        btreemap! {
                            "timeout_seconds" => Attribute::int32(
                                "timeoutSeconds specifies the seconds of ClientIP type session \
                                 sticky time. The value must be >0 && <=86400(for 1 day) if \
                                 ServiceAffinity == 'ClientIP'. Default value is 10800(for 3 \
                                 hours).",
                            )
                            .optional(),
                        },
                    )
                    .optional()
                    .json_name("clientIP"),
                },
            )
            .optional(),
            "type" => Attribute::string(
                "type determines how the Service is exposed. Defaults to ClusterIP. Valid options \
                 are ExternalName, ClusterIP, NodePort, and LoadBalancer.",
            )
            .optional()
            .validator(Validator::one_of(["ClusterIP", "NodePort", "LoadBalancer", "ExternalName"])),
        },
    )
}

/// The inline `corev1.ConfigMapVolumeSource`.
pub fn config_map_volume_source(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "default_mode" => Attribute::int32(
                "Mode bits used to set permissions on created files by default. Must be an octal \
                 value between 0000 and 0777 or a decimal value between 0 and 511.",
            )
            .optional(),
            "items" => key_to_paths(
                "If unspecified, each key-value pair in the Data field of the referenced \
                 ConfigMap will be projected into the volume as a file whose name is the key and \
                 content is the value.",
            ),
            "name" => Attribute::string(
                "Name of the referent. More info: \
                 https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
            )
            .optional(),
            "optional" => Attribute::bool(
                "Specify whether the ConfigMap or its keys must be defined",
            )
            .optional(),
        },
    )
}

/// `[]corev1.KeyToPath`.
fn key_to_paths(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "key" => Attribute::string("Key is the key to project.").required(),
            "mode" => Attribute::int32("Mode bits used to set permissions on this file.")
                .optional(),
            "path" => Attribute::string(
                "Path is the relative path of the file to map the key to. May not be an absolute \
                 path. May not contain the path element '..'.",
            )
            .required(),
        },
    )
    .optional()
}

/// `[]corev1.DownwardAPIVolumeFile`.
pub fn downward_api_volume_files(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "field_ref" => object_field_selector(
                "Required: Selects a field of the pod: only annotations, labels, name and \
                 namespace are supported.",
            )
            .optional(),
            "mode" => Attribute::int32(
                "Optional: mode bits used to set permissions on this file, must be an octal value \
                 between 0000 and 0777 or a decimal value between 0 and 511.",
            )
            .optional()
            .validator(Validator::AtLeast(0))
            .validator(Validator::AtMost(0o777)),
            "path" => Attribute::string(
                "Required: Path is the relative path name of the file to be created. Must not be \
                 absolute or contain the '..' path. Must be utf-8 encoded. The first item of the \
                 relative path must not start with '..'",
            )
            .required(),
            "resource_field_ref" => resource_field_selector(
                "Selects a resource of the container: only resources limits and requests \
                 (limits.cpu, limits.memory, requests.cpu and requests.memory) are currently \
                 supported.",
            )
            .optional(),
        },
    )
}

/// `corev1.LocalObjectReference`.
fn local_object_reference(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "name" => Attribute::string(
                "Name of the referent. More info: \
                 https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
            )
            .optional(),
        },
    )
}

fn fs_type() -> Attribute {
    Attribute::string(
        "Filesystem type of the volume that you want to mount. Tip: Ensure that the filesystem \
         type is supported by the host operating system. Examples: 'ext4', 'xfs', 'ntfs'.",
    )
    .optional()
}

fn read_only() -> Attribute {
    Attribute::bool(
        "readOnly here will force the ReadOnly setting in VolumeMounts. Defaults to false.",
    )
    .optional()
}

fn default_mode() -> Attribute {
    Attribute::int32(
        "Mode bits used to set permissions on created files by default. Must be an octal value \
         between 0000 and 0777 or a decimal value between 0 and 511. Defaults to 0644.",
    )
    .optional()
}

fn projection(description: &'static str) -> Attribute {
    Attribute::single_nested(
        description,
        btreemap! {
            "items" => key_to_paths(
                "If unspecified, each key-value pair in the Data field of the referenced object \
                 will be projected into the volume as a file whose name is the key and content is \
                 the value.",
            ),
            "name" => Attribute::string(
                "Name of the referent. More info: \
                 https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
            )
            .optional(),
            "optional" => Attribute::bool("Specify whether the object or its keys must be defined")
                .optional(),
        },
    )
    .optional()
}

fn persistent_volume_claim_template() -> Attribute {
    Attribute::single_nested(
        "Will be used to create a stand-alone PVC to provision the volume. The pod in which this \
         EphemeralVolumeSource is embedded will be the owner of the PVC.",
        btreemap! {
            "metadata" => Attribute::single_nested(
                "May contain labels and annotations that will be copied into the PVC when \
                 creating it. No other fields are allowed and will be rejected during validation.",
                btreemap! {
                    "annotations" => Attribute::map(ElementType::String, "Annotations.")
                        .optional()
                        .validator(Validator::Annotations),
                    "labels" => Attribute::map(ElementType::String, "Labels.")
                        .optional()
                        .validator(Validator::Labels),
                },
            )
            .optional(),
            "spec" => persistent_volume_claim_spec(
                "The specification for the PersistentVolumeClaim. The entire content is copied \
                 unchanged into the PVC that gets created from this template.",
            )
            .required(),
        },
    )
}

/// The volume sources of `corev1.Volume`, one optional attribute each.
fn volume_sources() -> Attributes {
    btreemap! {
        "aws_elastic_block_store" => Attribute::single_nested(
            "AWSElasticBlockStore represents an AWS Disk resource that is attached to a kubelet's \
             host machine and then exposed to the pod.",
            btreemap! {
                "fs_type" => fs_type(),
                "partition" => Attribute::int32(
                    "The partition in the volume that you want to mount. If omitted, the default \
                     is to mount by volume name.",
                )
                .optional(),
                "read_only" => read_only(),
                "volume_id" => Attribute::string(
                    "Unique ID of the persistent disk resource in AWS (Amazon EBS volume).",
                )
                .required()
                .json_name("volumeID"),
            },
        )
        .optional(),
        "azure_disk" => Attribute::single_nested(
            "AzureDisk represents an Azure Data Disk mount on the host and bind mount to the pod.",
            btreemap! {
                "caching_mode" => Attribute::string(
                    "The host caching mode: None, Read Only, Read Write.",
                )
                .optional(),
                "disk_name" => Attribute::string("The name of the data disk in the blob storage")
                    .required(),
                "disk_uri" => Attribute::string("The URI of the data disk in the blob storage")
                    .required()
                    .json_name("diskURI"),
                "fs_type" => fs_type(),
                "kind" => Attribute::string(
                    "Expected values Shared: multiple blob disks per storage account, Dedicated: \
                     single blob disk per storage account, Managed: azure managed data disk \
                     (only in managed availability set). Defaults to shared.",
                )
                .optional(),
                "read_only" => read_only(),
            },
        )
        .optional(),
        "azure_file" => Attribute::single_nested(
            "AzureFile represents an Azure File Service mount on the host and bind mount to the \
             pod.",
            btreemap! {
                "read_only" => read_only(),
                "secret_name" => Attribute::string(
                    "The name of secret that contains Azure Storage Account Name and Key",
                )
                .required(),
                "share_name" => Attribute::string("The azure share Name").required(),
            },
        )
        .optional(),
        "cephfs" => Attribute::single_nested(
            "CephFS represents a Ceph FS mount on the host that shares a pod's lifetime",
            btreemap! {
                "monitors" => Attribute::list(
                    ElementType::String,
                    "Monitors is a collection of Ceph monitors.",
                )
                .required(),
                "path" => Attribute::string(
                    "Used as the mounted root, rather than the full Ceph tree, default is /",
                )
                .optional(),
                "read_only" => read_only(),
                "secret_file" => Attribute::string(
                    "The path to key ring for User, default is /etc/ceph/user.secret",
                )
                .optional(),
                "secret_ref" => local_object_reference(
                    "Reference to the authentication secret for User, default is empty.",
                )
                .optional(),
                "user" => Attribute::string("The rados user name, default is admin").optional(),
            },
        )
        .optional(),
        "cinder" => Attribute::single_nested(
            "Cinder represents a cinder volume attached and mounted on kubelets host machine.",
            btreemap! {
                "fs_type" => fs_type(),
                "read_only" => read_only(),
                "secret_ref" => local_object_reference(
                    "Points to a secret object containing parameters used to connect to \
                     OpenStack.",
                )
                .optional(),
                "volume_id" => Attribute::string("Used to identify the volume in cinder.")
                    .required()
                    .json_name("volumeID"),
            },
        )
        .optional(),
        "config_map" => config_map_volume_source(
            "ConfigMap represents a configMap that should populate this volume",
        )
        .optional(),
        "csi" => Attribute::single_nested(
            "CSI (Container Storage Interface) represents ephemeral storage that is handled by \
             certain external CSI drivers.",
            btreemap! {
                "driver" => Attribute::string(
                    "The name of the CSI driver that handles this volume.",
                )
                .required(),
                "fs_type" => fs_type(),
                "node_publish_secret_ref" => local_object_reference(
                    "A reference to the secret object containing sensitive information to pass \
                     to the CSI driver to complete the CSI NodePublishVolume and \
                     NodeUnpublishVolume calls.",
                )
                .optional(),
                "read_only" => read_only(),
                "volume_attributes" => Attribute::map(
                    ElementType::String,
                    "Driver-specific properties that are passed to the CSI driver.",
                )
                .optional(),
            },
        )
        .optional(),
        "downward_api" => Attribute::single_nested(
            "DownwardAPI represents downward API about the pod that should populate this volume",
            btreemap! {
                "default_mode" => default_mode(),
                "items" => downward_api_volume_files("Items is a list of downward API volume file")
                    .optional(),
            },
        )
        .optional()
        .json_name("downwardAPI"),
        "empty_dir" => Attribute::single_nested(
            "EmptyDir represents a temporary directory that shares a pod's lifetime.",
            btreemap! {
                "medium" => Attribute::string(
                    "What type of storage medium should back this directory. The default is '' \
                     which means to use the node's default medium. Must be an empty string \
                     (default) or Memory.",
                )
                .optional(),
                "size_limit" => Attribute::string(
                    "Total amount of local storage required for this EmptyDir volume.",
                )
                .optional(),
            },
        )
        .optional(),
        "ephemeral" => Attribute::single_nested(
            "Ephemeral represents a volume that is handled by a cluster storage driver. The \
             volume's lifecycle is tied to the pod that defines it.",
            btreemap! {
                "volume_claim_template" => persistent_volume_claim_template().optional(),
            },
        )
        .optional(),
        "fc" => Attribute::single_nested(
            "FC represents a Fibre Channel resource that is attached to a kubelet's host machine \
             and then exposed to the pod.",
            btreemap! {
                "fs_type" => fs_type(),
                "lun" => Attribute::int32("Optional: FC target lun number").optional(),
                "read_only" => read_only(),
                "target_wwns" => Attribute::list(
                    ElementType::String,
                    "Optional: FC target worldwide names (WWNs)",
                )
                .optional()
                .json_name("targetWWNs"),
                "wwids" => Attribute::list(
                    ElementType::String,
                    "Optional: FC volume world wide identifiers (wwids). Either wwids or \
                     combination of targetWWNs and lun must be set, but not both simultaneously.",
                )
                .optional(),
            },
        )
        .optional(),
        "flex_volume" => Attribute::single_nested(
            "FlexVolume represents a generic volume resource that is provisioned/attached using \
             an exec based plugin.",
            btreemap! {
                "driver" => Attribute::string("The name of the driver to use for this volume.")
                    .required(),
                "fs_type" => fs_type(),
                "options" => Attribute::map(
                    ElementType::String,
                    "Optional: Extra command options if any.",
                )
                .optional(),
                "read_only" => read_only(),
                "secret_ref" => local_object_reference(
                    "Optional: reference to the secret object containing sensitive information \
                     to pass to the plugin scripts.",
                )
                .optional(),
            },
        )
        .optional(),
        "flocker" => Attribute::single_nested(
            "Flocker represents a Flocker volume attached to a kubelet's host machine. This \
             depends on the Flocker control service being running",
            btreemap! {
                "dataset_name" => Attribute::string(
                    "Name of the dataset stored as metadata -> name on the dataset for Flocker",
                )
                .optional(),
                "dataset_uuid" => Attribute::string(
                    "UUID of the dataset. This is unique identifier of a Flocker dataset",
                )
                .optional()
                .json_name("datasetUUID"),
            },
        )
        .optional(),
        "gce_persistent_disk" => Attribute::single_nested(
            "GCEPersistentDisk represents a GCE Disk resource that is attached to a kubelet's \
             host machine and then exposed to the pod.",
            btreemap! {
                "fs_type" => fs_type(),
                "partition" => Attribute::int32(
                    "The partition in the volume that you want to mount.",
                )
                .optional(),
                "pd_name" => Attribute::string(
                    "Unique name of the PD resource in GCE. Used to identify the disk in GCE.",
                )
                .required(),
                "read_only" => read_only(),
            },
        )
        .optional(),
        "git_repo" => Attribute::single_nested(
            "GitRepo represents a git repository at a particular revision. Deprecated.",
            btreemap! {
                "directory" => Attribute::string(
                    "Target directory name. Must not contain or start with '..'.",
                )
                .optional(),
                "repository" => Attribute::string("Repository URL").required(),
                "revision" => Attribute::string("Commit hash for the specified revision.")
                    .optional(),
            },
        )
        .optional(),
        "glusterfs" => Attribute::single_nested(
            "Glusterfs represents a Glusterfs mount on the host that shares a pod's lifetime.",
            btreemap! {
                "endpoints" => Attribute::string(
                    "EndpointsName is the endpoint name that details Glusterfs topology.",
                )
                .required(),
                "path" => Attribute::string("Path is the Glusterfs volume path.").required(),
                "read_only" => read_only(),
            },
        )
        .optional(),
        "host_path" => Attribute::single_nested(
            "HostPath represents a pre-existing file or directory on the host machine that is \
             directly exposed to the container.",
            btreemap! {
                "path" => Attribute::string(
                    "Path of the directory on the host. If the path is a symlink, it will follow \
                     the link to the real path.",
                )
                .required(),
                "type" => Attribute::string(
                    "Type for HostPath Volume. Defaults to ''.",
                )
                .optional(),
            },
        )
        .optional(),
        "iscsi" => Attribute::single_nested(
            "ISCSI represents an ISCSI Disk resource that is attached to a kubelet's host machine \
             and then exposed to the pod.",
            btreemap! {
                "chap_auth_discovery" => Attribute::bool(
                    "Whether support iSCSI Discovery CHAP authentication",
                )
                .optional(),
                "chap_auth_session" => Attribute::bool(
                    "Whether support iSCSI Session CHAP authentication",
                )
                .optional(),
                "fs_type" => fs_type(),
                "initiator_name" => Attribute::string("Custom iSCSI Initiator Name.").optional(),
                "iqn" => Attribute::string("Target iSCSI Qualified Name.").required(),
                "iscsi_interface" => Attribute::string(
                    "iSCSI Interface Name that uses an iSCSI transport. Defaults to 'default' \
                     (tcp).",
                )
                .optional(),
                "lun" => Attribute::int32("iSCSI Target Lun number.").required(),
                "portals" => Attribute::list(
                    ElementType::String,
                    "iSCSI Target Portal List. The portal is either an IP or ip_addr:port if the \
                     port is other than default (typically TCP ports 860 and 3260).",
                )
                .optional(),
                "read_only" => read_only(),
                "secret_ref" => local_object_reference(
                    "CHAP Secret for iSCSI target and initiator authentication",
                )
                .optional(),
                "target_portal" => Attribute::string(
                    "iSCSI Target Portal. The Portal is either an IP or ip_addr:port if the port \
                     is other than default (typically TCP ports 860 and 3260).",
                )
                .required(),
            },
        )
        .optional(),
        "nfs" => Attribute::single_nested(
            "NFS represents an NFS mount on the host that shares a pod's lifetime",
            btreemap! {
                "path" => Attribute::string("Path that is exported by the NFS server.")
                    .required(),
                "read_only" => read_only(),
                "server" => Attribute::string(
                    "Server is the hostname or IP address of the NFS server.",
                )
                .required(),
            },
        )
        .optional(),
        "persistent_volume_claim" => Attribute::single_nested(
            "PersistentVolumeClaimVolumeSource represents a reference to a PersistentVolumeClaim \
             in the same namespace.",
            btreemap! {
                "claim_name" => Attribute::string(
                    "ClaimName is the name of a PersistentVolumeClaim in the same namespace as \
                     the pod using this volume.",
                )
                .required(),
                "read_only" => read_only(),
            },
        )
        .optional(),
        "photon_persistent_disk" => Attribute::single_nested(
            "PhotonPersistentDisk represents a PhotonController persistent disk attached and \
             mounted on kubelets host machine",
            btreemap! {
                "fs_type" => fs_type(),
                "pd_id" => Attribute::string(
                    "ID that identifies Photon Controller persistent disk",
                )
                .required()
                .json_name("pdID"),
            },
        )
        .optional(),
        "portworx_volume" => Attribute::single_nested(
            "PortworxVolume represents a portworx volume attached and mounted on kubelets host \
             machine",
            btreemap! {
                "fs_type" => fs_type(),
                "read_only" => read_only(),
                "volume_id" => Attribute::string("VolumeID uniquely identifies a Portworx volume")
                    .required()
                    .json_name("volumeID"),
            },
        )
        .optional(),
        "projected" => Attribute::single_nested(
            "Items for all in one resources secrets, configmaps, and downward API",
            btreemap! {
                "default_mode" => default_mode(),
                "sources" => Attribute::list_nested(
                    "list of volume projections",
                    btreemap! {
                        "config_map" => projection(
                            "information about the configMap data to project",
                        ),
                        "downward_api" => Attribute::single_nested(
                            "information about the downwardAPI data to project",
                            btreemap! {
                                "items" => downward_api_volume_files(
                                    "Items is a list of DownwardAPIVolume file",
                                )
                                .optional(),
                            },
                        )
                        .optional()
                        .json_name("downwardAPI"),
                        "secret" => projection("information about the secret data to project"),
                        "service_account_token" => Attribute::single_nested(
                            "information about the serviceAccountToken data to project",
                            btreemap! {
                                "audience" => Attribute::string(
                                    "Audience is the intended audience of the token. Defaults to \
                                     the identifier of the apiserver.",
                                )
                                .optional(),
                                "expiration_seconds" => Attribute::int64(
                                    "ExpirationSeconds is the requested duration of validity of \
                                     the service account token. Defaults to 1 hour and must be \
                                     at least 10 minutes.",
                                )
                                .optional(),
                                "path" => Attribute::string(
                                    "Path is the path relative to the mount point of the file to \
                                     project the token into.",
                                )
                                .required(),
                            },
                        )
                        .optional(),
                    },
                )
                .optional(),
            },
        )
        .optional(),
        "quobyte" => Attribute::single_nested(
            "Quobyte represents a Quobyte mount on the host that shares a pod's lifetime",
            btreemap! {
                "group" => Attribute::string("Group to map volume access to. Default is no group")
                    .optional(),
                "read_only" => read_only(),
                "registry" => Attribute::string(
                    "Registry represents a single or multiple Quobyte Registry services specified \
                     as a string as host:port pair (multiple entries are separated with commas) \
                     which acts as the central registry for volumes",
                )
                .required(),
                "tenant" => Attribute::string(
                    "Tenant owning the given Quobyte volume in the Backend. Used with dynamically \
                     provisioned Quobyte volumes, value is set by the plugin",
                )
                .optional(),
                "user" => Attribute::string(
                    "User to map volume access to. Defaults to serivceaccount user",
                )
                .optional(),
                "volume" => Attribute::string(
                    "Volume is a string that references an already created Quobyte volume by name.",
                )
                .required(),
            },
        )
        .optional(),
        "rbd" => Attribute::single_nested(
            "RBD represents a Rados Block Device mount on the host that shares a pod's lifetime.",
            btreemap! {
                "fs_type" => fs_type(),
                "image" => Attribute::string("The rados image name.").required(),
                "keyring" => Attribute::string(
                    "Keyring is the path to key ring for RBDUser. Default is /etc/ceph/keyring.",
                )
                .optional(),
                "monitors" => Attribute::list(
                    ElementType::String,
                    "A collection of Ceph monitors.",
                )
                .required(),
                "pool" => Attribute::string("The rados pool name. Default is rbd.").optional(),
                "read_only" => read_only(),
                "secret_ref" => local_object_reference(
                    "SecretRef is name of the authentication secret for RBDUser. If provided \
                     overrides keyring. Default is nil.",
                )
                .optional(),
                "user" => Attribute::string("The rados user name. Default is admin.").optional(),
            },
        )
        .optional(),
        "scale_io" => Attribute::single_nested(
            "ScaleIO represents a ScaleIO persistent volume attached and mounted on Kubernetes \
             nodes.",
            btreemap! {
                "fs_type" => fs_type(),
                "gateway" => Attribute::string("The host address of the ScaleIO API Gateway.")
                    .required(),
                "protection_domain" => Attribute::string(
                    "The name of the ScaleIO Protection Domain for the configured storage.",
                )
                .optional(),
                "read_only" => read_only(),
                "secret_ref" => local_object_reference(
                    "SecretRef references to the secret for ScaleIO user and other sensitive \
                     information. If this is not provided, Login operation will fail.",
                )
                .required(),
                "ssl_enabled" => Attribute::bool(
                    "Flag to enable/disable SSL communication with Gateway, default false",
                )
                .optional(),
                "storage_mode" => Attribute::string(
                    "Indicates whether the storage for a volume should be ThickProvisioned or \
                     ThinProvisioned. Default is ThinProvisioned.",
                )
                .optional(),
                "storage_pool" => Attribute::string(
                    "The ScaleIO Storage Pool associated with the protection domain.",
                )
                .optional(),
                "system" => Attribute::string(
                    "The name of the storage system as configured in ScaleIO.",
                )
                .required(),
                "volume_name" => Attribute::string(
                    "The name of a volume already created in the ScaleIO system that is \
                     associated with this volume source.",
                )
                .optional(),
            },
        )
        .optional()
        .json_name("scaleIO"),
        "secret" => Attribute::single_nested(
            "Secret represents a secret that should populate this volume.",
            btreemap! {
                "default_mode" => default_mode(),
                "items" => key_to_paths(
                    "If unspecified, each key-value pair in the Data field of the referenced \
                     Secret will be projected into the volume as a file whose name is the key and \
                     content is the value.",
                ),
                "optional" => Attribute::bool(
                    "Specify whether the Secret or its keys must be defined",
                )
                .optional(),
                "secret_name" => Attribute::string(
                    "Name of the secret in the pod's namespace to use.",
                )
                .optional(),
            },
        )
        .optional(),
        "storageos" => Attribute::single_nested(
            "StorageOS represents a StorageOS volume attached and mounted on Kubernetes nodes.",
            btreemap! {
                "fs_type" => fs_type(),
                "read_only" => read_only(),
                "secret_ref" => local_object_reference(
                    "SecretRef specifies the secret to use for obtaining the StorageOS API \
                     credentials. If not specified, default values will be attempted.",
                )
                .optional(),
                "volume_name" => Attribute::string(
                    "VolumeName is the human-readable name of the StorageOS volume. Volume names \
                     are only unique within a namespace.",
                )
                .optional(),
                "volume_namespace" => Attribute::string(
                    "VolumeNamespace specifies the scope of the volume within StorageOS. If no \
                     namespace is specified then the Pod's namespace will be used.",
                )
                .optional(),
            },
        )
        .optional(),
        "vsphere_volume" => Attribute::single_nested(
            "VsphereVolume represents a vSphere volume attached and mounted on kubelets host \
             machine",
            btreemap! {
                "fs_type" => fs_type(),
                "storage_policy_id" => Attribute::string(
                    "Storage Policy Based Management (SPBM) profile ID associated with the \
                     StoragePolicyName.",
                )
                .optional()
                .json_name("storagePolicyID"),
                "storage_policy_name" => Attribute::string(
                    "Storage Policy Based Management (SPBM) profile name.",
                )
                .optional(),
                "volume_path" => Attribute::string("Path that identifies vSphere volume vmdk")
                    .required(),
            },
        )
        .optional(),
    }
}

/// `[]corev1.Volume`.
pub fn volumes(description: &'static str) -> Attribute {
    let mut attributes = volume_sources();
    attributes.insert(
        "name",
        Attribute::string(
            "Volume's name. Must be a DNS_LABEL and unique within the pod. More info: \
             https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
        )
        .required(),
    );
    Attribute::list_nested(description, attributes)
}

/// `[]corev1.VolumeMount`.
pub fn volume_mounts(description: &'static str) -> Attribute {
    Attribute::list_nested(
        description,
        btreemap! {
            "mount_path" => Attribute::string(
                "Path within the container at which the volume should be mounted. Must not \
                 contain ':'.",
            )
            .required(),
            "mount_propagation" => Attribute::string(
                "mountPropagation determines how mounts are propagated from the host to \
                 container and the other way around. When not set, MountPropagationNone is used.",
            )
            .optional()
            .validator(Validator::one_of(["None", "HostToContainer", "Bidirectional"])),
            "name" => Attribute::string("This must match the Name of a Volume.").required(),
            "read_only" => Attribute::bool(
                "Mounted read-only if true, read-write otherwise (false or unspecified). Defaults \
                 to false.",
            )
            .optional(),
            "sub_path" => Attribute::string(
                "Path within the volume from which the container's volume should be mounted. \
                 Defaults to '' (volume's root).",
            )
            .optional(),
            "sub_path_expr" => Attribute::string(
                "Expanded path within the volume from which the container's volume should be \
                 mounted. SubPathExpr and SubPath are mutually exclusive.",
            )
            .optional(),
        },
    )
}
