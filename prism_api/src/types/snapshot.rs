use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{Intent, ListResponse};

pub type VmSnapshot = Intent<VmSnapshotSpec>;
pub type VmSnapshotList = ListResponse<VmSnapshot>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VmSnapshotSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<VmSnapshotResources>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VmSnapshotResources {
    /// UUID of the VM the snapshot is taken from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_uuid: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
