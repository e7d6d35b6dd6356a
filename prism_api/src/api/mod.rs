//! Resource clients. Each one borrows the [`Client`](crate::Client) and maps
//! its methods onto paths of one resource kind.

pub(crate) mod availability_zone;
pub(crate) mod category;
pub(crate) mod cluster;
pub(crate) mod image;
pub(crate) mod project;
pub(crate) mod recovery_point;
pub(crate) mod snapshot;
pub(crate) mod subnet;
pub(crate) mod task;
pub(crate) mod vm;

pub use self::availability_zone::AvailabilityZoneApi;
pub use self::category::CategoryApi;
pub use self::cluster::ClusterApi;
pub use self::image::ImageApi;
pub use self::project::ProjectApi;
pub use self::recovery_point::RecoveryPointApi;
pub use self::snapshot::SnapshotApi;
pub use self::subnet::SubnetApi;
pub use self::task::TaskApi;
pub use self::vm::VmApi;

use crate::types::{ListResponse, Metadata};
use crate::Error;

/// True when `id_or_name` should be looked up as a UUID rather than a name.
pub(crate) fn is_uuid(id_or_name: &str) -> bool {
    uuid::Uuid::parse_str(id_or_name).is_ok()
}

/// First entity of a by-name lookup, or the logical not-found error.
pub(crate) fn first_match<T>(
    list: ListResponse<T>,
    kind: &'static str,
    name: &str,
) -> Result<T, Error> {
    list.entities
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound {
            kind,
            name: name.to_string(),
        })
}

pub(crate) fn require_uuid<'a>(metadata: &'a Metadata, kind: &'static str) -> Result<&'a str, Error> {
    metadata.uuid.as_deref().ok_or(Error::MissingUuid(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_detection() {
        assert!(is_uuid("0f3c3a5e-7a9b-4b58-9a3f-2f6f0b1c7d11"));
        assert!(!is_uuid("web-01"));
        assert!(!is_uuid(""));
    }

    #[test]
    fn empty_lookup_is_not_found() {
        let list: ListResponse<String> = ListResponse::default();
        let err = first_match(list, "vm", "web-01").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "vm not found: web-01");
    }
}
