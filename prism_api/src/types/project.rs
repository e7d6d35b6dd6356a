use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{Intent, ListResponse};

pub type Project = Intent<ProjectSpec>;
pub type ProjectList = ListResponse<Project>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProjectSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
