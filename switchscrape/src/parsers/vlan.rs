//! `show vlan` parser.
//!
//! Long port lists wrap onto indented continuation lines:
//!
//! ```text
//! VLAN Name                             Status    Ports
//! ---- -------------------------------- --------- -------------------------------
//! 1    default                          active    Gi1/0/1, Gi1/0/2, Gi1/0/3
//!                                                 Gi1/0/4, Gi1/0/5
//! 10   DATA                             active
//!
//! VLAN Type  SAID       MTU   Parent RingNo BridgeNo Stp  BrdgMode Trans1 Trans2
//! ```
//!
//! Only the membership table is read; parsing stops at the `VLAN Type` table.

use log::debug;

use crate::error::ParseError;
use crate::extract::lines;
use crate::normalize::normalize_interface_name;
use crate::records::VlanMembership;

pub const FORMAT: &str = "vlan";

/// Parse `show vlan` (or `show vlan brief`) output.
///
/// Fails with [`ParseError::HeaderNotFound`] if no line starts with
/// `VLAN Name`.
pub fn parse_vlans(blob: &str) -> Result<Vec<VlanMembership>, ParseError> {
    let all: Vec<&str> = lines(blob).collect();

    let header = all
        .iter()
        .position(|line| line.starts_with("VLAN Name"))
        .ok_or(ParseError::HeaderNotFound { format: FORMAT })?;

    let mut vlans: Vec<VlanMembership> = Vec::new();

    for line in &all[header + 1..] {
        if line.starts_with("VLAN Type") {
            break;
        }
        if line.trim().is_empty() || line.trim_start().starts_with("---") {
            continue;
        }

        if line.starts_with(|c: char| c.is_ascii_digit()) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 {
                debug!("{FORMAT}: skipping malformed row: {line}");
                continue;
            }
            let mut vlan = VlanMembership {
                id: fields[0].to_string(),
                name: fields[1].to_string(),
                status: fields[2].to_string(),
                ports: Vec::new(),
            };
            extend_ports(&mut vlan.ports, &fields[3..].concat());
            vlans.push(vlan);
        } else if let Some(last) = vlans.last_mut() {
            extend_ports(&mut last.ports, line.trim());
        }
    }

    Ok(vlans)
}

fn extend_ports(ports: &mut Vec<String>, list: &str) {
    ports.extend(
        list.split(',')
            .map(str::trim)
            .filter(|port| !port.is_empty())
            .map(normalize_interface_name),
    );
}
