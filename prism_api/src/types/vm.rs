//! Virtual machine schemas.

use std::collections::BTreeMap;

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

use super::meta::{Intent, ListResponse, Reference};

pub type Vm = Intent<VmSpec, VmStatus>;
pub type VmList = ListResponse<Vm>;

/// Desired state of a VM.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VmSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cluster hosting the VM. Cluster-scoped actions (revert, power state)
    /// are sent to this cluster's own address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_reference: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<VmResources>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Observed state of a VM, reported by the server.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VmStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_reference: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<VmResources>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VmResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_sockets: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_vcpus_per_socket: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_size_mib: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_state: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /vms/{uuid}/revert`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VmRevertRequest {
    pub vm_recovery_point_uuid: String,
}

/// Power transitions accepted by the v2 `set_power_state` action.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerState {
    On,
    Off,
    #[serde(rename = "POWERCYCLE")]
    PowerCycle,
    Reset,
    Pause,
    Suspend,
    Resume,
    AcpiShutdown,
    AcpiReboot,
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PowerState::On => "ON",
            PowerState::Off => "OFF",
            PowerState::PowerCycle => "POWERCYCLE",
            PowerState::Reset => "RESET",
            PowerState::Pause => "PAUSE",
            PowerState::Suspend => "SUSPEND",
            PowerState::Resume => "RESUME",
            PowerState::AcpiShutdown => "ACPI_SHUTDOWN",
            PowerState::AcpiReboot => "ACPI_REBOOT",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for PowerState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "ON" => Ok(PowerState::On),
            "OFF" => Ok(PowerState::Off),
            "POWERCYCLE" => Ok(PowerState::PowerCycle),
            "RESET" => Ok(PowerState::Reset),
            "PAUSE" => Ok(PowerState::Pause),
            "SUSPEND" => Ok(PowerState::Suspend),
            "RESUME" => Ok(PowerState::Resume),
            "ACPI_SHUTDOWN" => Ok(PowerState::AcpiShutdown),
            "ACPI_REBOOT" => Ok(PowerState::AcpiReboot),
            other => Err(format!("unknown power state: {}", other)),
        }
    }
}

/// Body of the v2 `POST /vms/{uuid}/set_power_state` action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PowerStateRequest {
    pub transition: PowerState,
}

/// Cloud-init `meta-data` document handed to a VM at first boot.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CloudInitMetadata {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub public_keys: BTreeMap<String, String>,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub availability_zone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,
}

impl CloudInitMetadata {
    /// JSON-encodes the document and returns it in standard base64, the form
    /// the guest customization `meta_data` field expects. An empty `uuid` is
    /// replaced with a random one first.
    pub fn to_base64(&mut self) -> Result<String, Error> {
        if self.uuid.is_empty() {
            self.uuid = uuid::Uuid::new_v4().to_string();
        }
        let json = serde_json::to_vec(self).map_err(Error::Encode)?;
        Ok(general_purpose::STANDARD.encode(json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(encoded: &str) -> Value {
        let raw = general_purpose::STANDARD.decode(encoded).unwrap();
        serde_json::from_slice(&raw).unwrap()
    }

    #[test]
    fn cloud_init_metadata_fills_a_random_uuid() {
        let mut meta = CloudInitMetadata {
            hostname: "web-01".into(),
            ..Default::default()
        };
        let doc = decode(&meta.to_base64().unwrap());
        assert_eq!(doc["hostname"], "web-01");
        assert_eq!(doc["uuid"], meta.uuid.as_str());
        assert!(uuid::Uuid::parse_str(&meta.uuid).is_ok());
    }

    #[test]
    fn cloud_init_metadata_keeps_a_given_uuid_and_omits_empty_fields() {
        let mut meta = CloudInitMetadata {
            hostname: "db".into(),
            uuid: "fixed-id".into(),
            ..Default::default()
        };
        let doc = decode(&meta.to_base64().unwrap());
        assert_eq!(
            doc,
            serde_json::json!({ "hostname": "db", "uuid": "fixed-id" })
        );
    }

    #[test]
    fn cloud_init_metadata_encodes_public_keys() {
        let mut meta = CloudInitMetadata {
            hostname: "h".into(),
            uuid: "u".into(),
            availability_zone: "az-1".into(),
            project_id: "p-9".into(),
            ..Default::default()
        };
        meta.public_keys.insert("admin".into(), "ssh-ed25519 AAAA".into());
        let encoded = meta.to_base64().unwrap();
        assert!(!encoded.contains('-') && !encoded.contains('_'));
        let doc = decode(&encoded);
        assert_eq!(doc["public_keys"]["admin"], "ssh-ed25519 AAAA");
        assert_eq!(doc["availability_zone"], "az-1");
        assert_eq!(doc["project_id"], "p-9");
    }
}
