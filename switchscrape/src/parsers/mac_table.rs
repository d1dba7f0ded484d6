//! `show mac address-table` parser.
//!
//! IOS and Nexus print different column sets, and Nexus prefixes primary
//! entries with a marker that shifts every column, so rows are matched with a
//! pattern rather than sliced by header offsets:
//!
//! ```text
//!   10    0050.56aa.bbcc    DYNAMIC     Gi1/0/1
//! * 10     0050.56aa.bbcd   dynamic  0         F      F    Eth1/1
//!  All    0100.0ccc.cccc    STATIC      CPU
//! ```
//!
//! Rows bound to the CPU are kept apart from port-bound rows.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::lines;
use crate::normalize::normalize_interface_name;
use crate::records::{MacAddressTable, MacTableEntry};

pub const FORMAT: &str = "mac address-table";

/// Vlan, address and type up front, the port as the last token. Nexus puts
/// age and flag columns in between.
static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[*+]?\s*(\d+|All)\s+([\w.]+)\s+(\w+)(?:\s+\S+)*?\s+(\S+)$").expect("valid regex")
});

/// Banner, header, separator and summary lines.
const NOISE: &[&str] = &["Mac Address Table", "Vlan", "----", "Total Mac Addresses"];

/// Parse `show mac address-table` output into port-bound and CPU entries.
///
/// Output without any entry rows yields an empty table.
pub fn parse_mac_table(blob: &str) -> MacAddressTable {
    let mut table = MacAddressTable::default();

    for line in lines(blob).map(str::trim) {
        if line.is_empty() || NOISE.iter().any(|noise| line.contains(noise)) {
            continue;
        }
        let Some(caps) = ENTRY.captures(line) else {
            continue;
        };

        let entry = MacTableEntry {
            vlan: caps[1].to_string(),
            mac_address: caps[2].to_string(),
            entry_type: caps[3].to_string(),
            interface: normalize_interface_name(&caps[4]),
        };

        if entry.interface.eq_ignore_ascii_case("CPU") {
            table.cpu_entries.push(entry);
        } else {
            table.entries.push(entry);
        }
    }

    table
}

/// Parse `show mac address-table` output, keeping only port-bound entries.
pub fn parse_mac_address_table(blob: &str) -> Vec<MacTableEntry> {
    parse_mac_table(blob).entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const IOS_MAC: &str = "\
switch#show mac address-table\r
          Mac Address Table\r
-------------------------------------------\r
\r
Vlan    Mac Address       Type        Ports\r
----    -----------       --------    -----\r
 All    0100.0ccc.cccc    STATIC      CPU\r
 All    0100.0ccc.cccd    STATIC      CPU\r
  10    0050.56aa.bbcc    DYNAMIC     Gi1/0/1\r
  10    0050.56aa.bbcd    DYNAMIC     GigabitEthernet1/0/2\r
  20    a4b1.c2d3.e4f5    STATIC      Gi1/0/3\r
Total Mac Addresses for this criterion: 5\r
switch#\r
";

    const NEXUS_MAC: &str = "\
Legend:\r
        * - primary entry, G - Gateway MAC, (R) - Routed MAC, O - Overlay MAC\r
        age - seconds since last seen,+ - primary entry using vPC Peer-Link\r
   VLAN     MAC Address      Type      age     Secure NTFY Ports\r
---------+-----------------+--------+---------+------+----+------------------\r
* 10       0050.56aa.bbcc   dynamic  0         F      F    Eth1/1\r
* 10       0050.56aa.bbcd   dynamic  120       F      F    Eth1/2\r
+ 20       0050.56aa.bbce   dynamic  15        F      F    Po10\r
G -        00de.fb12.3456   static   -         F      F    sup-eth1(R)\r
";

    #[test]
    fn test_ios_table() {
        let table = parse_mac_table(IOS_MAC);
        assert_eq!(table.entries.len(), 3);
        assert_eq!(
            table.entries[0],
            MacTableEntry {
                vlan: "10".into(),
                mac_address: "0050.56aa.bbcc".into(),
                entry_type: "DYNAMIC".into(),
                interface: "Gi1/0/1".into(),
            }
        );
        assert_eq!(table.entries[1].interface, "Gi1/0/2");
        assert_eq!(table.entries[2].entry_type, "STATIC");
    }

    #[test]
    fn test_cpu_entries_kept_apart() {
        let table = parse_mac_table(IOS_MAC);
        assert_eq!(table.cpu_entries.len(), 2);
        assert_eq!(table.cpu_entries[0].vlan, "All");
        assert_eq!(table.cpu_entries[0].interface, "CPU");

        let flat = parse_mac_address_table(IOS_MAC);
        assert!(flat.iter().all(|entry| entry.interface != "CPU"));
        assert_eq!(flat.len(), 3);
    }

    #[test]
    fn test_nexus_marker_and_age_columns() {
        let entries = parse_mac_address_table(NEXUS_MAC);
        let ports: Vec<&str> = entries.iter().map(|e| e.interface.as_str()).collect();
        assert_eq!(ports, vec!["Eth1/1", "Eth1/2", "Po10"]);
        assert_eq!(entries[1].entry_type, "dynamic");
        assert_eq!(entries[2].vlan, "20");
    }

    #[test]
    fn test_no_entries() {
        let table = parse_mac_table("switch#show mac address-table\n% Invalid input\n");
        assert!(table.entries.is_empty());
        assert!(table.cpu_entries.is_empty());
    }
}
