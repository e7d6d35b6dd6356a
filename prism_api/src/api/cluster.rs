use super::{first_match, is_uuid};
use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{Cluster, ClusterList};
use crate::{Client, Error};

pub(crate) const CLUSTER_BASE_PATH: &str = "/clusters";
const CLUSTER_LIST_PATH: &str = "/clusters/list";

/// Cluster API. Clusters are read-only through this client.
pub struct ClusterApi<'a> {
    client: &'a Client,
}

impl<'a> ClusterApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, id_or_name: &str) -> Result<Cluster, Error> {
        if is_uuid(id_or_name) {
            self.get_by_uuid(id_or_name).await
        } else {
            self.get_by_name(id_or_name).await
        }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Cluster, Error> {
        self.client
            .execute(Request::get(CLUSTER_BASE_PATH).segment(uuid))
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Cluster, Error> {
        let clusters = self.list(ListOptions::by_name("name", name)).await?;
        first_match(clusters, "cluster", name)
    }

    pub async fn list(&self, options: ListOptions) -> Result<ClusterList, Error> {
        self.client
            .list(CLUSTER_LIST_PATH, options.with_default_kind("cluster"))
            .await
    }

    pub async fn all(&self) -> Result<ClusterList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }
}
