use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{VmRecoveryPoint, VmRecoveryPointList};
use crate::{Client, Error};

use super::require_uuid;

const RECOVERY_POINT_BASE_PATH: &str = "/vm_recovery_points";
const RECOVERY_POINT_LIST_PATH: &str = "/vm_recovery_points/list";

/// VM recovery point API. Recovery points are created through
/// [`VmApi::create_recovery_point`](super::VmApi::create_recovery_point).
pub struct RecoveryPointApi<'a> {
    client: &'a Client,
}

impl<'a> RecoveryPointApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VmRecoveryPoint, Error> {
        self.client
            .execute(Request::get(RECOVERY_POINT_BASE_PATH).segment(uuid))
            .await
    }

    pub async fn list(&self, options: ListOptions) -> Result<VmRecoveryPointList, Error> {
        self.client
            .list(
                RECOVERY_POINT_LIST_PATH,
                options.with_default_kind("vm_recovery_point"),
            )
            .await
    }

    pub async fn all(&self) -> Result<VmRecoveryPointList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }

    pub async fn delete(&self, recovery_point: &VmRecoveryPoint) -> Result<(), Error> {
        let uuid = require_uuid(&recovery_point.metadata, "VM recovery point")?;
        self.client
            .execute(Request::delete(RECOVERY_POINT_BASE_PATH).segment(uuid))
            .await
    }
}
