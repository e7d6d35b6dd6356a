use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{Intent, ListResponse};

pub type Image = Intent<ImageSpec>;
pub type ImageList = ListResponse<Image>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ImageSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ImageResources>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ImageResources {
    /// `DISK_IMAGE` or `ISO_IMAGE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    /// Remote location the server pulls the image from. Leave empty when
    /// the contents are uploaded afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
