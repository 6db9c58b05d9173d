/// Helper macro to avoid retyping the API group of the KubeBlocks apps resources when creating
/// further string constants from it. When given no parameters, this returns the group. When given
/// a string literal parameter it adds `/parameter` to the end.
macro_rules! kubeblocks_apps {
    () => {
        "apps.kubeblocks.io"
    };
    ($s:literal) => {
        concat!(kubeblocks_apps!(), "/", $s)
    };
}

/// The Terraform type name of the provider. Every data source type name starts with it.
pub const PROVIDER_TYPE_NAME: &str = "k8s";

// KubeBlocks API groups and versions
pub const KUBEBLOCKS_APPS_GROUP: &str = kubeblocks_apps!();
pub const KUBEBLOCKS_APPS_V1ALPHA1: &str = kubeblocks_apps!("v1alpha1");
pub const KUBEBLOCKS_APPS_V1BETA1: &str = kubeblocks_apps!("v1beta1");

#[test]
fn kubeblocks_constants_macro_test() {
    assert_eq!("apps.kubeblocks.io", kubeblocks_apps!());
    assert_eq!("apps.kubeblocks.io/v1alpha1", KUBEBLOCKS_APPS_V1ALPHA1);
    assert_eq!("apps.kubeblocks.io/v1beta1", KUBEBLOCKS_APPS_V1BETA1);
}
