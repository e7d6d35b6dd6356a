//! Client configuration and the options builder.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::{Client, Error};

/// Port of the management endpoint when only a host is given.
pub const DEFAULT_PORT: u16 = 9440;
/// Path prefix of the v3 API.
pub const DEFAULT_API_PATH: &str = "api/nutanix/v3";
/// Path prefix of the legacy v2 gateway API.
pub const DEFAULT_LEGACY_API_PATH: &str = "PrismGateway/services/rest/v2.0";
/// Entities requested per list page.
pub const DEFAULT_PAGE_SIZE: i64 = 500;
/// Largest response body the client will buffer.
pub const DEFAULT_MAX_BODY_SIZE: usize = 64 * 1024 * 1024;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

fn default_user_agent() -> String {
    format!("prism-api/{}", env!("CARGO_PKG_VERSION"))
}

/// True when `authority` ends in `:<digits>`. Bracketed IPv6 hosts such as
/// `[::1]` carry no port.
fn has_port(authority: &str) -> bool {
    match authority.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Username and password sent as HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Settings shared read-only by every call made through a [`Client`].
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) base_url: Url,
    pub(crate) credentials: Credentials,
    pub(crate) user_agent: String,
    pub(crate) api_path: String,
    pub(crate) legacy_api_path: String,
    pub(crate) page_size: i64,
    pub(crate) max_body_size: usize,
}

/// Builds a [`Client`] from a set of options.
///
/// An endpoint (or base URL) and credentials are required; everything else
/// has a default.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    insecure: bool,
    http_client: Option<reqwest::Client>,
    timeout: Duration,
    page_size: i64,
    api_path: String,
    legacy_api_path: String,
    max_body_size: usize,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            insecure: false,
            http_client: None,
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
            api_path: DEFAULT_API_PATH.to_string(),
            legacy_api_path: DEFAULT_LEGACY_API_PATH.to_string(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientBuilder {
    /// Management endpoint host, e.g. `prism.example.com`. Expands to
    /// `https://<host>:9440/`. A scheme or port already present in `host`
    /// is kept as given.
    pub fn endpoint(mut self, host: &str) -> Self {
        let host = host.trim_end_matches('/');
        let host = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };
        let authority = host
            .split_once("://")
            .map_or(host.as_str(), |(_, rest)| rest)
            .split('/')
            .next()
            .unwrap_or_default();
        self.base_url = Some(if has_port(authority) {
            format!("{}/", host)
        } else {
            format!("{}:{}/", host, DEFAULT_PORT)
        });
        self
    }

    /// Full base URL, used as given.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Skips TLS certificate verification, for self-signed deployments.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Uses a preconfigured HTTP client. Its own TLS and timeout settings
    /// replace [`insecure`](Self::insecure) and [`timeout`](Self::timeout).
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn api_path(mut self, api_path: &str) -> Self {
        self.api_path = api_path.to_string();
        self
    }

    pub fn legacy_api_path(mut self, legacy_api_path: &str) -> Self {
        self.legacy_api_path = legacy_api_path.to_string();
        self
    }

    pub fn max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("an endpoint is required".to_string()))?;
        let credentials = self
            .credentials
            .ok_or_else(|| Error::Config("credentials are required".to_string()))?;
        if self.page_size <= 0 {
            return Err(Error::Config(format!(
                "page size must be positive, got {}",
                self.page_size
            )));
        }

        let mut base_url = Url::parse(&base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("{} cannot be a base URL", base_url)));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = match self.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .danger_accept_invalid_certs(self.insecure)
                .build()
                .map_err(|e| {
                    tracing::error!("Failed to build HTTP client: {}", e);
                    Error::Transport(e)
                })?,
        };

        Ok(Client {
            http,
            config: Arc::new(Config {
                base_url,
                credentials,
                user_agent: self.user_agent,
                api_path: self.api_path,
                legacy_api_path: self.legacy_api_path,
                page_size: self.page_size,
                max_body_size: self.max_body_size,
            }),
        })
    }
}
