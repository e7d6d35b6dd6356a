//! Tasks track asynchronous operations started by other calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{null_as_empty, ListEntity, ListResponse, Reference};

pub type TaskList = ListResponse<Task>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// `QUEUED`, `RUNNING`, `SUCCEEDED`, `FAILED` or `ABORTED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_complete: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entity_reference_list: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// TODO: page task lists like every other list kind.
impl ListEntity for Task {
    const PAGINATED: bool = false;
}
