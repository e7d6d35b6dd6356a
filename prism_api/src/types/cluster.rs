use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::meta::{Intent, ListResponse};

pub type Cluster = Intent<ClusterSpec>;
pub type ClusterList = ListResponse<Cluster>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ClusterSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ClusterResources>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ClusterResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<ClusterNetwork>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ClusterNetwork {
    /// Externally reachable address of the cluster's own management endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ip: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cluster {
    /// The cluster's externally reachable address, if the server reported one.
    pub fn external_ip(&self) -> Option<&str> {
        self.spec
            .as_ref()?
            .resources
            .as_ref()?
            .network
            .as_ref()?
            .external_ip
            .as_deref()
            .filter(|ip| !ip.is_empty())
    }
}
