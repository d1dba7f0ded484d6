//! `show lldp neighbors` parser.
//!
//! One neighbor per fixed-width row:
//!
//! ```text
//! Device ID           Local Intf     Hold-time  Capability      Port ID
//! core-sw1            Gi1/0/48       120        B,R             Gi1/0/1
//! ```

use log::debug;

use crate::error::ParseError;
use crate::extract::{Column, ColumnLayout, lines};
use crate::normalize::normalize_interface_name;
use crate::records::NeighborRecord;

pub const FORMAT: &str = "lldp neighbors";

const COLUMNS: &[Column] = &[
    Column::new("device", &["Device ID"]),
    Column::new("local", &["Local Intf"]),
    Column::new("hold", &["Hold-time"]),
    Column::new("capability", &["Capability"]),
    Column::new("port", &["Port ID"]),
];

/// Parse `show lldp neighbors` output.
///
/// Output without a `Device ID` header yields an empty list. Rows too short
/// to reach the `Port ID` column are skipped. LLDP tables carry no platform,
/// so [`NeighborRecord::platform`] is always `None`.
pub fn parse_lldp_neighbors(blob: &str) -> Result<Vec<NeighborRecord>, ParseError> {
    let all: Vec<&str> = lines(blob).collect();

    let Some(header) = all.iter().position(|line| line.starts_with("Device ID")) else {
        debug!("{FORMAT}: header not found, returning no neighbors");
        return Ok(Vec::new());
    };

    let layout = ColumnLayout::locate(FORMAT, all[header], COLUMNS)?;
    let port_at = layout.offset("port").unwrap_or_default();

    let mut neighbors = Vec::new();
    for line in &all[header + 1..] {
        if line.trim().is_empty() || line.contains("Total entries displayed") {
            continue;
        }
        if line.len() < port_at {
            debug!("{FORMAT}: skipping short row: {line}");
            continue;
        }

        let row = layout.extract(line);
        neighbors.push(NeighborRecord {
            local_interface: normalize_interface_name(row.get("local")),
            remote_device_id: row.get("device").to_string(),
            remote_interface: normalize_interface_name(row.get("port")),
            hold_time_seconds: row.get("hold").to_string(),
            capabilities: row.get("capability").to_string(),
            platform: None,
        });
    }

    Ok(neighbors)
}
