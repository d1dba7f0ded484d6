//! Structured records produced by the format parsers.
//!
//! Every record is a plain value built fresh per parse call. Text fields that
//! a dialect does not report are left as the empty string.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of `show interfaces status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceSummary {
    pub name: String,
    pub description: String,
    pub status: String,
    pub vlan: String,
    pub duplex: String,
    pub speed: String,
    pub media_type: String,
}

/// One interface block of `show interfaces`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDetail {
    pub name: String,
    pub description: String,
    pub admin_status: String,
    pub protocol_status: String,
    pub hardware: String,
    pub mac_address: String,
    pub ip_address: String,
    pub duplex: String,
    pub speed: String,
    pub media_type: String,
    pub mtu: String,
    pub bandwidth_kbit: String,
    pub delay_usec: String,
    pub encapsulation: String,
    pub reliability: String,
    pub tx_load: String,
    pub rx_load: String,
    pub last_input: String,
    pub last_output: String,
    pub output_hang: String,
    pub queue_strategy: String,
    pub input_rate_bps: String,
    pub output_rate_bps: String,
    pub packets_in: String,
    pub bytes_in: String,
    pub packets_out: String,
    pub bytes_out: String,
    pub runts: String,
    pub giants: String,
    pub throttles: String,
    pub input_errors: String,
    pub crc_errors: String,
    pub output_errors: String,
    pub collisions: String,
}

/// A VLAN and its member ports from `show vlan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanMembership {
    pub id: String,
    pub name: String,
    pub status: String,

    /// Member ports in the order listed, duplicates kept.
    pub ports: Vec<String>,
}

/// A CDP or LLDP neighbor adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborRecord {
    pub local_interface: String,
    pub remote_device_id: String,
    pub remote_interface: String,

    /// Hold time as printed, in seconds.
    pub hold_time_seconds: String,
    pub capabilities: String,

    /// Remote platform; LLDP summaries do not report one.
    pub platform: Option<String>,
}

/// One entry of `show mac address-table`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacTableEntry {
    pub vlan: String,
    pub mac_address: String,

    /// `DYNAMIC`, `STATIC`, `dynamic`, ... as printed.
    pub entry_type: String,
    pub interface: String,
}

/// MAC table split into port-bound entries and control-plane (CPU) entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacAddressTable {
    pub entries: Vec<MacTableEntry>,
    pub cpu_entries: Vec<MacTableEntry>,
}

/// Device identity from `show version`, keyed by field name.
///
/// Keys appear in a fixed order (`hardware`, `version`, `release`,
/// `softwareImage`, `serialNumber`, `uptime`, `restarted`, `reloadReason`,
/// `rommon`); only keys that were found are present. `version` and
/// `serialNumber` are always present on a successfully parsed identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceIdentity {
    fields: IndexMap<String, String>,
}

impl DeviceIdentity {
    pub(crate) fn from_fields(fields: IndexMap<String, String>) -> Self {
        Self { fields }
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Software version string.
    pub fn version(&self) -> &str {
        self.get("version").unwrap_or_default()
    }

    /// Chassis serial number (or the dialect's stand-in for one).
    pub fn serial_number(&self) -> &str {
        self.get("serialNumber").unwrap_or_default()
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of populated keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no keys are populated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A PoE power module row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerModule {
    pub module_id: String,
    pub available_watts: String,
    pub used_watts: String,
    pub remaining_watts: String,
}

/// A PoE port row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoePort {
    pub interface: String,
    pub admin_state: String,
    pub oper_state: String,
    pub power_watts: String,
    pub device_description: String,
    pub class: String,
    pub max_watts: String,
}

/// Output of `show power inline`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerBudgetReport {
    pub modules: Vec<PowerModule>,
    pub poe_ports: Vec<PoePort>,
}

/// The configuration block of one interface from `show running-config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfigBlock {
    pub interface_name: String,

    /// Block lines; the first is the `interface ...` declaration itself.
    pub config_lines: Vec<String>,
}
