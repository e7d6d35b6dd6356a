//! Resolution of cluster-scoped endpoints.

use url::Url;

use crate::{api::cluster::CLUSTER_BASE_PATH, request::Request, types::Cluster, Client, Error};

impl Client {
    /// Looks up the cluster through the central endpoint and returns the
    /// base URL of its own management endpoint: the configured base URL
    /// with the host replaced by the cluster's external address.
    pub(crate) async fn cluster_base_url(&self, cluster_uuid: &str) -> Result<Url, Error> {
        let request = Request::get(CLUSTER_BASE_PATH).segment(cluster_uuid);
        let cluster: Cluster = self.dispatch(&self.config.base_url, request).await?;
        let address = cluster
            .external_ip()
            .ok_or_else(|| Error::MissingClusterAddress(cluster_uuid.to_string()))?;
        tracing::debug!("Resolved cluster {} to {}", cluster_uuid, address);
        with_host(&self.config.base_url, address)
    }
}

fn with_host(base: &Url, address: &str) -> Result<Url, Error> {
    let mut url = base.clone();
    url.set_host(Some(address))?;
    Ok(url)
}
