//! HTTP client for the Prism management API.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    api::{
        AvailabilityZoneApi, CategoryApi, ClusterApi, ImageApi, ProjectApi, RecoveryPointApi,
        SnapshotApi, SubnetApi, TaskApi, VmApi,
    },
    builder::{ClientBuilder, Config, Credentials},
    decode::decode_response,
    paging::{PageCursor, Pageable},
    query::ListOptions,
    request::{ApiVersion, Payload, Request, Target, MEDIA_TYPE_JSON},
    Error,
};

/// HTTP client for the Prism management API.
///
/// Every request carries HTTP Basic authentication and a fixed user agent.
/// The client holds no mutable state: clones share the configuration and
/// the connection pool and can be used from many tasks at once.
///
/// Each physical request is an `.await` point of the caller's future, so
/// dropping that future (or wrapping it in `tokio::time::timeout`) cancels
/// the request in flight, including cluster lookups and page fetches.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Arc<Config>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a client for the management endpoint at `host` with default
    /// settings.
    pub fn new(host: &str, credentials: Credentials) -> Result<Self, Error> {
        Self::builder().endpoint(host).credentials(credentials).build()
    }

    /// Base address of the configured endpoint.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Entities requested per list page.
    pub fn page_size(&self) -> i64 {
        self.config.page_size
    }

    pub fn vms(&self) -> VmApi<'_> {
        VmApi::new(self)
    }

    pub fn clusters(&self) -> ClusterApi<'_> {
        ClusterApi::new(self)
    }

    pub fn subnets(&self) -> SubnetApi<'_> {
        SubnetApi::new(self)
    }

    pub fn projects(&self) -> ProjectApi<'_> {
        ProjectApi::new(self)
    }

    pub fn categories(&self) -> CategoryApi<'_> {
        CategoryApi::new(self)
    }

    pub fn images(&self) -> ImageApi<'_> {
        ImageApi::new(self)
    }

    pub fn tasks(&self) -> TaskApi<'_> {
        TaskApi::new(self)
    }

    pub fn snapshots(&self) -> SnapshotApi<'_> {
        SnapshotApi::new(self)
    }

    pub fn availability_zones(&self) -> AvailabilityZoneApi<'_> {
        AvailabilityZoneApi::new(self)
    }

    pub fn recovery_points(&self) -> RecoveryPointApi<'_> {
        RecoveryPointApi::new(self)
    }

    /// Sends `request` and decodes the response into `T`.
    ///
    /// Cluster-targeted requests first resolve the cluster's address with a
    /// lookup against the central endpoint; a failed lookup is returned as is.
    pub async fn execute<T>(&self, request: Request) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let base = match &request.target {
            Target::Central => self.config.base_url.clone(),
            Target::Cluster(uuid) => self.cluster_base_url(uuid).await?,
        };
        self.dispatch(&base, request).await
    }

    /// Sends `request` against `base` without any endpoint resolution.
    pub(crate) async fn dispatch<T>(&self, base: &Url, request: Request) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.compose_url(base, &request)?;
        let method = request.method.clone();
        tracing::debug!("{} {}", method, url);

        let credentials: &Credentials = &self.config.credentials;
        let mut builder = self
            .http
            .request(method.clone(), url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header(USER_AGENT, &self.config.user_agent);
        builder = match request.payload {
            Payload::Empty => builder.header(ACCEPT, MEDIA_TYPE_JSON),
            Payload::Json(buf) => builder
                .header(CONTENT_TYPE, MEDIA_TYPE_JSON)
                .header(ACCEPT, MEDIA_TYPE_JSON)
                .body(buf),
            Payload::Raw(file) => builder
                .header(CONTENT_TYPE, &file.content_type)
                .header(ACCEPT, &file.content_type)
                .body(file.bytes),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send {} request: {}", method, e);
            Error::Transport(e)
        })?;
        decode_response(&method, response, self.config.max_body_size).await
    }

    /// Base + API version prefix + path, then each encoded segment.
    fn compose_url(&self, base: &Url, request: &Request) -> Result<Url, Error> {
        let prefix = match request.version {
            ApiVersion::V3 => &self.config.api_path,
            ApiVersion::V2 => &self.config.legacy_api_path,
        };
        let relative = format!(
            "{}/{}",
            prefix.trim_matches('/'),
            request.path.trim_start_matches('/')
        );
        let mut url = base.join(&relative)?;
        if !request.segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| Error::Config(format!("{} cannot be a base URL", base)))?
                .pop_if_empty()
                .extend(&request.segments);
        }
        Ok(url)
    }

    /// Runs a list query and, for paginated kinds, fetches every remaining
    /// page, appending entities in page order.
    ///
    /// The page length is `options.length`, or the client's page size when
    /// unset. A failure on any page fails the whole call.
    pub async fn list<L>(&self, path: &str, mut options: ListOptions) -> Result<L, Error>
    where
        L: Pageable,
    {
        let step = *options.length.get_or_insert(self.config.page_size);
        let mut list: L = self.execute(Request::post(path).json(&options)?).await?;
        if !L::PAGINATED {
            return Ok(list);
        }

        let cursor = PageCursor::after_first_page(list.metadata(), step)?;
        let total = list.metadata().total_matches;
        for offset in cursor {
            tracing::debug!("Fetching {} page at offset {} of {}", path, offset, total);
            options.offset = Some(offset);
            let page: L = self.execute(Request::post(path).json(&options)?).await?;
            list.append(page);
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Client {
        Client::builder()
            .base_url(base)
            .credentials(Credentials::new("u", "p"))
            .build()
            .unwrap()
    }

    #[test]
    fn v3_url_composition() {
        let client = client("https://prism:9440/");
        let req = Request::get("/vms").segment("abc-123");
        let url = client.compose_url(client.base_url(), &req).unwrap();
        assert_eq!(url.as_str(), "https://prism:9440/api/nutanix/v3/vms/abc-123");
    }

    #[test]
    fn v2_url_composition() {
        let client = client("https://prism:9440/");
        let req = Request::post("/vms")
            .segment("abc")
            .segment("set_power_state")
            .version(ApiVersion::V2);
        let url = client.compose_url(client.base_url(), &req).unwrap();
        assert_eq!(
            url.as_str(),
            "https://prism:9440/PrismGateway/services/rest/v2.0/vms/abc/set_power_state"
        );
    }

    #[test]
    fn segments_are_encoded() {
        let client = client("https://prism:9440/");
        let req = Request::get("/categories").segment("a/b?c d");
        let url = client.compose_url(client.base_url(), &req).unwrap();
        assert_eq!(
            url.as_str(),
            "https://prism:9440/api/nutanix/v3/categories/a%2Fb%3Fc%20d"
        );
        assert!(url.query().is_none());
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let client = client("http://127.0.0.1:8080/proxy/");
        let req = Request::post("/vms/list");
        let url = client.compose_url(client.base_url(), &req).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/api/nutanix/v3/vms/list");
    }
}
