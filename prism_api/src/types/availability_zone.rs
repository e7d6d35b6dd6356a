use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{Intent, ListResponse};

pub type AvailabilityZone = Intent<AvailabilityZoneSpec>;
pub type AvailabilityZoneList = ListResponse<AvailabilityZone>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AvailabilityZoneSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
