//! Dialect-aware format parsers.
//!
//! One module per `show` report. Each parser accepts the full captured blob of
//! a single command and returns its records in source order, or a typed
//! [`ParseError`]. Both IOS-style and Nexus-style phrasings of each report are
//! accepted.
//!
//! [`ShowCommand`] ties each parser to the CLI command that produces its
//! input, so a collector can dispatch captured output without knowing the
//! individual parsers.

pub mod cdp;
pub mod interface_status;
pub mod interfaces;
pub mod lldp;
pub mod mac_table;
pub mod power_inline;
pub mod running_config;
pub mod version;
pub mod vlan;

pub use cdp::parse_cdp_neighbors;
pub use interface_status::{parse_interface_status, parse_status_row};
pub use interfaces::parse_interfaces;
pub use lldp::parse_lldp_neighbors;
pub use mac_table::{parse_mac_address_table, parse_mac_table};
pub use power_inline::parse_power_inline;
pub use running_config::parse_running_config;
pub use version::parse_version;
pub use vlan::parse_vlans;

use std::fmt;

use serde::Serialize;

use crate::error::ParseError;
use crate::records::{
    DeviceIdentity, InterfaceConfigBlock, InterfaceDetail, InterfaceSummary, MacAddressTable,
    NeighborRecord, PowerBudgetReport, VlanMembership,
};

/// The supported `show` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowCommand {
    InterfacesStatus,
    Interfaces,
    Vlan,
    CdpNeighbors,
    LldpNeighbors,
    MacAddressTable,
    Version,
    RunningConfig,
    PowerInline,
}

impl ShowCommand {
    /// Every supported report.
    pub const ALL: [ShowCommand; 9] = [
        ShowCommand::Version,
        ShowCommand::InterfacesStatus,
        ShowCommand::Interfaces,
        ShowCommand::Vlan,
        ShowCommand::MacAddressTable,
        ShowCommand::CdpNeighbors,
        ShowCommand::LldpNeighbors,
        ShowCommand::PowerInline,
        ShowCommand::RunningConfig,
    ];

    /// The CLI command that produces this report.
    pub fn command(&self) -> &'static str {
        match self {
            ShowCommand::InterfacesStatus => "show interfaces status",
            ShowCommand::Interfaces => "show interfaces",
            ShowCommand::Vlan => "show vlan",
            ShowCommand::CdpNeighbors => "show cdp neighbors",
            ShowCommand::LldpNeighbors => "show lldp neighbors",
            ShowCommand::MacAddressTable => "show mac address-table",
            ShowCommand::Version => "show version",
            ShowCommand::RunningConfig => "show running-config",
            ShowCommand::PowerInline => "show power inline",
        }
    }

    /// Name used in errors and log lines.
    pub fn format(&self) -> &'static str {
        match self {
            ShowCommand::InterfacesStatus => interface_status::FORMAT,
            ShowCommand::Interfaces => interfaces::FORMAT,
            ShowCommand::Vlan => vlan::FORMAT,
            ShowCommand::CdpNeighbors => cdp::FORMAT,
            ShowCommand::LldpNeighbors => lldp::FORMAT,
            ShowCommand::MacAddressTable => mac_table::FORMAT,
            ShowCommand::Version => version::FORMAT,
            ShowCommand::RunningConfig => running_config::FORMAT,
            ShowCommand::PowerInline => power_inline::FORMAT,
        }
    }

    /// Parse a captured blob with this report's parser.
    pub fn parse(&self, blob: &str) -> Result<ParsedOutput, ParseError> {
        Ok(match self {
            ShowCommand::InterfacesStatus => {
                ParsedOutput::InterfacesStatus(parse_interface_status(blob)?)
            }
            ShowCommand::Interfaces => ParsedOutput::Interfaces(parse_interfaces(blob)),
            ShowCommand::Vlan => ParsedOutput::Vlans(parse_vlans(blob)?),
            ShowCommand::CdpNeighbors => ParsedOutput::CdpNeighbors(parse_cdp_neighbors(blob)?),
            ShowCommand::LldpNeighbors => ParsedOutput::LldpNeighbors(parse_lldp_neighbors(blob)?),
            ShowCommand::MacAddressTable => ParsedOutput::MacAddressTable(parse_mac_table(blob)),
            ShowCommand::Version => ParsedOutput::Version(parse_version(blob)?),
            ShowCommand::RunningConfig => ParsedOutput::RunningConfig(parse_running_config(blob)?),
            ShowCommand::PowerInline => ParsedOutput::PowerInline(parse_power_inline(blob)?),
        })
    }
}

impl fmt::Display for ShowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Records produced by [`ShowCommand::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", content = "records", rename_all = "snake_case")]
pub enum ParsedOutput {
    InterfacesStatus(Vec<InterfaceSummary>),
    Interfaces(Vec<InterfaceDetail>),
    Vlans(Vec<VlanMembership>),
    CdpNeighbors(Vec<NeighborRecord>),
    LldpNeighbors(Vec<NeighborRecord>),
    MacAddressTable(MacAddressTable),
    Version(DeviceIdentity),
    RunningConfig(Vec<InterfaceConfigBlock>),
    PowerInline(PowerBudgetReport),
}

impl ParsedOutput {
    /// Number of records carried.
    pub fn len(&self) -> usize {
        match self {
            ParsedOutput::InterfacesStatus(v) => v.len(),
            ParsedOutput::Interfaces(v) => v.len(),
            ParsedOutput::Vlans(v) => v.len(),
            ParsedOutput::CdpNeighbors(v) | ParsedOutput::LldpNeighbors(v) => v.len(),
            ParsedOutput::MacAddressTable(t) => t.entries.len() + t.cpu_entries.len(),
            ParsedOutput::Version(identity) => identity.len(),
            ParsedOutput::RunningConfig(v) => v.len(),
            ParsedOutput::PowerInline(r) => r.modules.len() + r.poe_ports.len(),
        }
    }

    /// Whether the report carried no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
