//! `show interfaces status` parser.
//!
//! The description and type columns are free text and may be blank or contain
//! spaces, so rows are not sliced by offset. Instead the status keyword acts
//! as a pivot: everything between the port and the status is the description,
//! the next three tokens are vlan, duplex and speed, and the rest is the type.
//!
//! # Example
//!
//! ```text
//! Port      Name               Status       Vlan       Duplex  Speed Type
//! Gi1/0/1   Uplink to core     connected    trunk      a-full a-1000 10/100/1000BaseTX
//! Gi1/0/2                      notconnect   10           auto   auto 10/100/1000BaseTX
//! ```

use log::debug;

use crate::error::ParseError;
use crate::extract::lines;
use crate::normalize::normalize_interface_name;
use crate::records::InterfaceSummary;

pub const FORMAT: &str = "interface status";

/// Status column values used as the row pivot.
const STATUS_KEYWORDS: &[&str] = &[
    "connected",
    "notconnect",
    "disabled",
    "err-disabled",
    "suspended",
    "monitoring",
];

/// Parse `show interfaces status` output.
///
/// Fails with [`ParseError::HeaderNotFound`] if no line carries both `Port`
/// and `Vlan`. Rows without a recognizable status are skipped.
pub fn parse_interface_status(blob: &str) -> Result<Vec<InterfaceSummary>, ParseError> {
    let all: Vec<&str> = lines(blob).collect();

    let header = all
        .iter()
        .position(|line| line.contains("Port") && line.contains("Vlan"))
        .ok_or(ParseError::HeaderNotFound { format: FORMAT })?;

    let mut interfaces = Vec::new();
    for line in &all[header + 1..] {
        let line = line.trim();
        if line.is_empty() || line.starts_with("----") || line.starts_with("Name") {
            continue;
        }

        match parse_status_row(line) {
            Some(row) => interfaces.push(row),
            None => debug!("{FORMAT}: skipping row without status pivot: {line}"),
        }
    }

    Ok(interfaces)
}

/// Parse a single status table row.
///
/// Returns `None` for rows with fewer than six tokens or no status keyword in
/// a position that leaves room for vlan, duplex, speed and type.
pub fn parse_status_row(line: &str) -> Option<InterfaceSummary> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 6 {
        return None;
    }

    let last_candidate = fields.len() - 5;
    let pivot = (1..=last_candidate).find(|&i| STATUS_KEYWORDS.contains(&fields[i]))?;

    Some(InterfaceSummary {
        name: normalize_interface_name(fields[0]),
        description: fields[1..pivot].join(" "),
        status: fields[pivot].to_string(),
        vlan: fields[pivot + 1].to_string(),
        duplex: fields[pivot + 2].to_string(),
        speed: fields[pivot + 3].to_string(),
        media_type: fields[pivot + 4..].join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const IOS_STATUS: &str = "\
switch#show interfaces status\r
\r
Port      Name               Status       Vlan       Duplex  Speed Type\r
Gi1/0/1   Uplink to core     connected    trunk      a-full a-1000 10/100/1000BaseTX\r
Gi1/0/2                      notconnect   10           auto   auto 10/100/1000BaseTX\r
Gi1/0/3   Printer 3rd floor  err-disabled 20           auto   auto 10/100/1000BaseTX\r
Te1/1/1                      connected    trunk        full    10G SFP-10GBase-SR\r
Po1       core-lag           connected    trunk      a-full a-1000 \r
switch#\r
";

    #[test]
    fn test_row_with_multiword_description() {
        let row =
            parse_status_row("Gi1/0/1  Uplink to core  connected  1  full  1000  10/100/1000BaseTX")
                .unwrap();
        assert_eq!(
            row,
            InterfaceSummary {
                name: "Gi1/0/1".into(),
                description: "Uplink to core".into(),
                status: "connected".into(),
                vlan: "1".into(),
                duplex: "full".into(),
                speed: "1000".into(),
                media_type: "10/100/1000BaseTX".into(),
            }
        );
    }

    #[test]
    fn test_ios_table() {
        let rows = parse_interface_status(IOS_STATUS).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Gi1/0/1", "Gi1/0/2", "Gi1/0/3", "Te1/1/1"]);

        assert_eq!(rows[1].description, "");
        assert_eq!(rows[1].status, "notconnect");
        assert_eq!(rows[1].vlan, "10");

        assert_eq!(rows[2].description, "Printer 3rd floor");
        assert_eq!(rows[2].status, "err-disabled");

        assert_eq!(rows[3].speed, "10G");
        assert_eq!(rows[3].media_type, "SFP-10GBase-SR");
    }

    #[test]
    fn test_nexus_table() {
        let blob = "\
--------------------------------------------------------------------------------
Port          Name               Status    Vlan      Duplex  Speed   Type
--------------------------------------------------------------------------------
mgmt0         --                 connected routed    full    1000    --
Eth1/1        server-01          connected 10        full    10G     10Gbase-SR
Eth1/2        --                 disabled  1         auto    auto    10Gbase-SR
";
        let rows = parse_interface_status(blob).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "mgmt0");
        assert_eq!(rows[0].description, "--");
        assert_eq!(rows[0].vlan, "routed");
        assert_eq!(rows[1].name, "Eth1/1");
        assert_eq!(rows[1].description, "server-01");
        assert_eq!(rows[2].status, "disabled");
    }

    #[test]
    fn test_verbose_port_name_is_normalized() {
        let row = parse_status_row(
            "GigabitEthernet1/0/9  ap-lobby  connected  30  a-full  a-1000  10/100/1000BaseTX",
        )
        .unwrap();
        assert_eq!(row.name, "Gi1/0/9");
    }

    #[test]
    fn test_short_or_unpivoted_rows_rejected() {
        assert!(parse_status_row("Gi1/0/1 connected 1 full 1000").is_none());
        assert!(parse_status_row("Gi1/0/1 desc unknownstate 1 full 1000 Type").is_none());
    }

    #[test]
    fn test_name_subheader_skipped() {
        let subheader = "Name      Description        connected    Vlan       Duplex  Speed Type";
        assert!(parse_status_row(subheader).is_some());

        let blob = format!(
            "Port      Vlan\n{subheader}\nGi1/0/1   Uplink to core     connected    trunk      a-full a-1000 10/100/1000BaseTX\n"
        );
        let rows = parse_interface_status(&blob).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Gi1/0/1");
    }

    #[test]
    fn test_missing_header() {
        let err = parse_interface_status("Gi1/0/1 desc connected 1 full 1000 T").unwrap_err();
        assert_eq!(err, ParseError::HeaderNotFound { format: FORMAT });
    }

    #[test]
    fn test_header_only_is_empty() {
        let rows = parse_interface_status("Port Name Status Vlan Duplex Speed Type\n").unwrap();
        assert!(rows.is_empty());
    }
}
