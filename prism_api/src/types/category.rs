//! Category keys and values. Categories are addressed by name, not UUID,
//! and do not use the intent envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{ListEntity, ListResponse};

pub type CategoryKeyList = ListResponse<CategoryKeyStatus>;
pub type CategoryValueList = ListResponse<CategoryValueStatus>;

/// Body of `PUT /categories/{name}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CategoryKey {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CategoryKeyStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_defined: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CategoryValueStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Name of the key this value belongs to.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_defined: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListEntity for CategoryKeyStatus {}
impl ListEntity for CategoryValueStatus {}
