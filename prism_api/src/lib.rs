//! Typed async client for the Prism management REST API (v3, plus the v2
//! gateway for a few legacy actions).
//!
//! ```no_run
//! # async fn run() -> Result<(), prism_api::Error> {
//! use prism_api::{Client, Credentials};
//!
//! let client = Client::new("prism.example.com", Credentials::new("admin", "secret"))?;
//! let vm = client.vms().get_by_name("web-01").await?;
//! println!("{:?}", vm.uuid());
//! # Ok(())
//! # }
//! ```

pub mod api;
mod builder;
mod client;
mod decode;
mod endpoint;
mod errors;
mod paging;
mod query;
mod request;
pub mod types;
pub use self::api::{
    AvailabilityZoneApi, CategoryApi, ClusterApi, ImageApi, ProjectApi, RecoveryPointApi,
    SnapshotApi, SubnetApi, TaskApi, VmApi,
};
pub use self::builder::{
    ClientBuilder, Credentials, DEFAULT_API_PATH, DEFAULT_LEGACY_API_PATH, DEFAULT_MAX_BODY_SIZE,
    DEFAULT_PAGE_SIZE, DEFAULT_PORT,
};
pub use self::client::Client;
pub use self::errors::Error;
pub use self::paging::Pageable;
pub use self::query::{ListOptions, SortOrder};
pub use self::request::{ApiVersion, Request, Target};
