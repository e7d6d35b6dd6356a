//! Query options for the `POST /<resource>/list` endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Body of every list request: a filter expression plus the paging window.
///
/// Unset fields are omitted from the request so the server applies its own
/// defaults. `length` falls back to the client's page size when the request
/// is sent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    /// Entity kind, e.g. `vm`. Filled in by the resource client when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// FIQL filter expression such as `vm_name==web-01`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Number of entities per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    /// Offset of the first entity to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl ListOptions {
    /// Options matching entities by name with the given filter attribute,
    /// e.g. `name==web-01`.
    pub fn by_name(attribute: &str, name: &str) -> Self {
        Self::default().with_filter(&format!("{}=={}", attribute, name))
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sorts results by `attribute` in the given order.
    pub fn with_sort(mut self, attribute: &str, order: SortOrder) -> Self {
        self.sort_attribute = Some(attribute.to_string());
        self.sort_order = Some(order);
        self
    }

    pub(crate) fn with_default_kind(mut self, kind: &str) -> Self {
        if self.kind.is_none() {
            self.kind = Some(kind.to_string());
        }
        self
    }
}

/// Sort order for list results.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending order. This is the default.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ASCENDING"),
            SortOrder::Descending => write!(f, "DESCENDING"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}
