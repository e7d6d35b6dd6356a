use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{VmSnapshot, VmSnapshotList};
use crate::{Client, Error};

use super::require_uuid;

const SNAPSHOT_BASE_PATH: &str = "/vm_snapshots";
const SNAPSHOT_LIST_PATH: &str = "/vm_snapshots/list";

/// VM snapshot API.
pub struct SnapshotApi<'a> {
    client: &'a Client,
}

impl<'a> SnapshotApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<VmSnapshot, Error> {
        self.client
            .execute(Request::get(SNAPSHOT_BASE_PATH).segment(uuid))
            .await
    }

    pub async fn list(&self, options: ListOptions) -> Result<VmSnapshotList, Error> {
        self.client
            .list(SNAPSHOT_LIST_PATH, options.with_default_kind("vm_snapshot"))
            .await
    }

    pub async fn all(&self) -> Result<VmSnapshotList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }

    pub async fn create(&self, snapshot: &VmSnapshot) -> Result<VmSnapshot, Error> {
        self.client
            .execute(Request::post(SNAPSHOT_BASE_PATH).json(snapshot)?)
            .await
    }

    pub async fn delete(&self, snapshot: &VmSnapshot) -> Result<(), Error> {
        let uuid = require_uuid(&snapshot.metadata, "VM snapshot")?;
        self.client
            .execute(Request::delete(SNAPSHOT_BASE_PATH).segment(uuid))
            .await
    }
}
