use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{Intent, ListResponse, Reference};

pub type VmRecoveryPoint = Intent<VmRecoveryPointSpec>;
pub type VmRecoveryPointList = ListResponse<VmRecoveryPoint>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VmRecoveryPointSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<VmRecoveryPointResources>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VmRecoveryPointResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_vm_reference: Option<Reference>,
    /// `CRASH_CONSISTENT` or `APPLICATION_CONSISTENT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_point_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
