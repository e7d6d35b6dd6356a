//! Virtual machine API: CRUD plus clone, recovery points and power state.

use serde_json::json;

use super::{first_match, is_uuid, require_uuid};
use crate::query::ListOptions;
use crate::request::{ApiVersion, Request};
use crate::types::{
    ExecutionContext, PowerState, PowerStateRequest, Vm, VmList, VmRevertRequest,
};
use crate::{Client, Error};

const VM_BASE_PATH: &str = "/vms";
const VM_LIST_PATH: &str = "/vms/list";

/// Virtual machine API.
pub struct VmApi<'a> {
    client: &'a Client,
}

impl<'a> VmApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches a VM by UUID when `id_or_name` parses as one, otherwise by name.
    pub async fn get(&self, id_or_name: &str) -> Result<Vm, Error> {
        if is_uuid(id_or_name) {
            self.get_by_uuid(id_or_name).await
        } else {
            self.get_by_name(id_or_name).await
        }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Vm, Error> {
        self.client
            .execute(Request::get(VM_BASE_PATH).segment(uuid))
            .await
    }

    /// Returns the first VM named `name`, or [`Error::NotFound`].
    pub async fn get_by_name(&self, name: &str) -> Result<Vm, Error> {
        let vms = self.list(ListOptions::by_name("vm_name", name)).await?;
        first_match(vms, "VM", name)
    }

    /// Lists VMs matching `options`, following every page.
    pub async fn list(&self, options: ListOptions) -> Result<VmList, Error> {
        self.client
            .list(VM_LIST_PATH, options.with_default_kind("vm"))
            .await
    }

    /// Lists every VM.
    pub async fn all(&self) -> Result<VmList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }

    pub async fn create(&self, vm: &Vm) -> Result<Vm, Error> {
        self.client
            .execute(Request::post(VM_BASE_PATH).json(vm)?)
            .await
    }

    /// Sends `vm` as the new desired state. The server-owned `status` is
    /// dropped from the request.
    pub async fn update(&self, vm: &Vm) -> Result<Vm, Error> {
        let uuid = require_uuid(&vm.metadata, "VM")?;
        let mut body = vm.clone();
        body.status = None;
        self.client
            .execute(Request::put(VM_BASE_PATH).segment(uuid).json(&body)?)
            .await
    }

    pub async fn delete(&self, vm: &Vm) -> Result<(), Error> {
        let uuid = require_uuid(&vm.metadata, "VM")?;
        self.client
            .execute(Request::delete(VM_BASE_PATH).segment(uuid))
            .await
    }

    /// Clones `vm` with the server's default clone spec.
    pub async fn clone_vm(&self, vm: &Vm) -> Result<ExecutionContext, Error> {
        let uuid = require_uuid(&vm.metadata, "VM")?;
        let request = Request::post(VM_BASE_PATH)
            .segment(uuid)
            .segment("clone")
            .json(&json!({}))?;
        self.client.execute(request).await
    }

    /// Takes a recovery point of `vm`.
    pub async fn create_recovery_point(&self, vm: &Vm) -> Result<ExecutionContext, Error> {
        let uuid = require_uuid(&vm.metadata, "VM")?;
        let request = Request::post(VM_BASE_PATH)
            .segment(uuid)
            .segment("snapshot")
            .json(&json!({}))?;
        self.client.execute(request).await
    }

    /// Reverts `vm` to a recovery point. Sent to the VM's own cluster.
    pub async fn revert_to_recovery_point(
        &self,
        vm: &Vm,
        recovery_point_uuid: &str,
    ) -> Result<ExecutionContext, Error> {
        let uuid = require_uuid(&vm.metadata, "VM")?;
        let cluster_uuid = cluster_uuid(vm, uuid)?;
        let request = Request::post(VM_BASE_PATH)
            .segment(uuid)
            .segment("revert")
            .on_cluster(cluster_uuid)
            .json(&VmRevertRequest {
                vm_recovery_point_uuid: recovery_point_uuid.to_string(),
            })?;
        self.client.execute(request).await
    }

    /// Changes the power state through the v2 API of the VM's own cluster.
    pub async fn set_power_state(
        &self,
        vm: &Vm,
        transition: PowerState,
    ) -> Result<ExecutionContext, Error> {
        let uuid = require_uuid(&vm.metadata, "VM")?;
        let cluster_uuid = cluster_uuid(vm, uuid)?;
        tracing::info!("Setting power state of VM {} to {}", uuid, transition);
        let request = Request::post(VM_BASE_PATH)
            .segment(uuid)
            .segment("set_power_state")
            .version(ApiVersion::V2)
            .on_cluster(cluster_uuid)
            .json(&PowerStateRequest { transition })?;
        self.client.execute(request).await
    }
}

fn cluster_uuid<'v>(vm: &'v Vm, uuid: &str) -> Result<&'v str, Error> {
    vm.spec
        .as_ref()
        .and_then(|spec| spec.cluster_reference.as_ref())
        .or_else(|| {
            vm.status
                .as_ref()
                .and_then(|status| status.cluster_reference.as_ref())
        })
        .map(|reference| reference.uuid.as_str())
        .ok_or_else(|| Error::MissingClusterReference(uuid.to_string()))
}
