//! Interface name normalization.
//!
//! Devices spell the same port several ways depending on the report:
//! `GigabitEthernet1/0/1` in `show interfaces`, `Gig 1/0/1` in CDP tables,
//! `Gi1/0/1` in status tables. Every interface-bearing field is reduced to the
//! short canonical form so records from different reports join cleanly.

/// Verbose spellings and their canonical prefixes.
///
/// At each position the first alias in this order that matches wins, so an
/// alias must come before any shorter alias it contains (`TenGigabitEthernet`
/// before `GigabitEthernet`, `AppGigabitEthernet` before `Gig`).
const ALIASES: &[(&str, &str)] = &[
    ("AppGigabitEthernet", "Ap"),
    ("FastEthernet", "Fa"),
    ("GigabitEthernet", "Gi"),
    ("FiveGigabitEthernet", "Fi"),
    ("FiveGi", "Fi"),
    ("TenGigabitEthernet", "Te"),
    ("TenGi", "Te"),
    ("Ten", "Te"),
    ("TwentyGigabitEthernet", "Twe"),
    ("TwentyFiveGigE", "Twe"),
    ("TwentyFigE", "Twe"),
    ("FortyGigabitEthernet", "Fo"),
    ("FortyGi", "Fo"),
    ("HundredGigE", "Hu"),
    ("Gig", "Gi"),
];

/// Reduce an interface name to its canonical short form.
///
/// Embedded whitespace is removed first. Names with no known alias come back
/// unchanged apart from that, and normalizing a canonical name is a no-op.
///
/// ```
/// use switchscrape::normalize_interface_name;
///
/// assert_eq!(normalize_interface_name("GigabitEthernet1/0/1"), "Gi1/0/1");
/// assert_eq!(normalize_interface_name("Ten 1/1/4"), "Te1/1/4");
/// assert_eq!(normalize_interface_name("Port-channel10"), "Port-channel10");
/// ```
pub fn normalize_interface_name(name: &str) -> String {
    let compact: String = name.chars().filter(|c| !c.is_whitespace()).collect();

    let mut out = String::with_capacity(compact.len());
    let mut rest = compact.as_str();

    'scan: while let Some(c) = rest.chars().next() {
        for (alias, canonical) in ALIASES {
            if let Some(tail) = rest.strip_prefix(alias) {
                out.push_str(canonical);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_names() {
        assert_eq!(normalize_interface_name("GigabitEthernet1/0/1"), "Gi1/0/1");
        assert_eq!(normalize_interface_name("FastEthernet0/24"), "Fa0/24");
        assert_eq!(normalize_interface_name("TenGigabitEthernet1/1/1"), "Te1/1/1");
        assert_eq!(normalize_interface_name("FiveGigabitEthernet2/0/3"), "Fi2/0/3");
        assert_eq!(normalize_interface_name("TwentyFiveGigE1/0/1"), "Twe1/0/1");
        assert_eq!(
            normalize_interface_name("TwentyGigabitEthernet1/0/2"),
            "Twe1/0/2"
        );
        assert_eq!(normalize_interface_name("FortyGigabitEthernet1/1/1"), "Fo1/1/1");
        assert_eq!(normalize_interface_name("HundredGigE1/0/49"), "Hu1/0/49");
        assert_eq!(normalize_interface_name("AppGigabitEthernet1/0/1"), "Ap1/0/1");
    }

    #[test]
    fn test_table_abbreviations_with_spaces() {
        assert_eq!(normalize_interface_name("Gig 1/0/24"), "Gi1/0/24");
        assert_eq!(normalize_interface_name("Ten 1/1/4"), "Te1/1/4");
        assert_eq!(normalize_interface_name("FortyGi 1/1/1"), "Fo1/1/1");
        assert_eq!(normalize_interface_name("  Fas 0/1 "), "Fas0/1");
    }

    #[test]
    fn test_specific_alias_wins_over_contained_alias() {
        // "AppGigabitEthernet" contains "GigabitEthernet" and "Gig".
        assert_eq!(normalize_interface_name("AppGigabitEthernet1/0/1"), "Ap1/0/1");
        // "TenGigabitEthernet" contains "Ten" and "GigabitEthernet".
        assert_eq!(normalize_interface_name("TenGigabitEthernet1/0/1"), "Te1/0/1");
    }

    #[test]
    fn test_unknown_names_unchanged() {
        assert_eq!(normalize_interface_name("Vlan10"), "Vlan10");
        assert_eq!(normalize_interface_name("Port-channel1"), "Port-channel1");
        assert_eq!(normalize_interface_name("Ethernet1/49"), "Ethernet1/49");
        assert_eq!(normalize_interface_name("mgmt0"), "mgmt0");
        assert_eq!(normalize_interface_name(""), "");
    }

    #[test]
    fn test_idempotent() {
        for name in [
            "GigabitEthernet1/0/1",
            "Gig 1/0/24",
            "TenGigabitEthernet1/1/1",
            "TwentyFiveGigE1/0/1",
            "HundredGigE1/0/49",
            "AppGigabitEthernet1/0/1",
            "Port-channel10",
        ] {
            let once = normalize_interface_name(name);
            assert_eq!(normalize_interface_name(&once), once, "{name}");
        }

        for canonical in ["Gi1/0/1", "Te1/1/1", "Fa0/1", "Twe1/0/1", "Hu1/0/49", "Ap1/0/1"] {
            assert_eq!(normalize_interface_name(canonical), canonical);
        }
    }
}
