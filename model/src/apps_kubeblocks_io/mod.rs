/*!

Manifest data sources for the `apps.kubeblocks.io` API group of KubeBlocks.

!*/

pub use component_v1alpha1::Component;
pub use config_constraint_v1beta1::ConfigConstraint;

pub mod component_v1alpha1;
pub mod config_constraint_v1beta1;
