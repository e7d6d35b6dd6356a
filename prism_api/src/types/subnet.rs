use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{Intent, ListResponse, Reference};

pub type Subnet = Intent<SubnetSpec>;
pub type SubnetList = ListResponse<Subnet>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SubnetSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_reference: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<SubnetResources>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SubnetResources {
    /// `VLAN` or `OVERLAY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
