//! Envelopes shared by every resource kind: the intent wrapper returned by
//! single-item endpoints and the paged list returned by `*/list` endpoints.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Paging block of a list response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ListMetadata {
    /// Number of entities matching the query across all pages.
    #[serde(default)]
    pub total_matches: i64,
    /// Offset of the first entity of this page.
    #[serde(default)]
    pub offset: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// A page (or, after pagination, all pages) of a list query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default)]
    pub metadata: ListMetadata,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entities: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            api_version: None,
            metadata: ListMetadata::default(),
            entities: Vec::new(),
        }
    }
}

/// Entity kinds that appear inside list responses.
pub trait ListEntity: DeserializeOwned {
    /// Whether follow-up pages are fetched for lists of this kind.
    const PAGINATED: bool = true;
}

/// Reference to another entity, e.g. the cluster a VM runs on.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Reference {
    pub kind: String,
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Reference {
    pub fn new(kind: &str, uuid: &str) -> Self {
        Self {
            kind: kind.to_string(),
            uuid: uuid.to_string(),
            name: None,
        }
    }
}

/// Entity metadata. Fields the client does not model are kept in `extra`
/// so that a fetched entity can be sent back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_reference: Option<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Metadata {
    /// Metadata for a new entity of the given kind.
    pub fn of_kind(kind: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            ..Default::default()
        }
    }
}

/// The `{api_version, metadata, spec, status}` wrapper every v3 entity uses.
///
/// `spec` is the desired state sent by clients; `status` is owned by the
/// server and is cleared before updates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(
    serialize = "S: Serialize, St: Serialize",
    deserialize = "S: Deserialize<'de>, St: Deserialize<'de>"
))]
pub struct Intent<S, St = Value> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<St>,
}

impl<S, St> Intent<S, St> {
    /// Builds a create request for an entity of `kind`.
    pub fn new(kind: &str, spec: S) -> Self {
        Self {
            api_version: Some("3.1".to_string()),
            metadata: Metadata::of_kind(kind),
            spec: Some(spec),
            status: None,
        }
    }

    pub fn uuid(&self) -> Option<&str> {
        self.metadata.uuid.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }
}

impl<S: DeserializeOwned, St: DeserializeOwned> ListEntity for Intent<S, St> {}

/// Returned by asynchronous v3 actions; points at the task tracking the work.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExecutionContext {
    pub task_uuid: String,
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
