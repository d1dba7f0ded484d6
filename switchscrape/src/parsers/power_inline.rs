//! `show power inline` parser.
//!
//! The report stacks a per-module budget table and a per-port table:
//!
//! ```text
//! Module   Available     Used     Remaining
//!           (Watts)     (Watts)    (Watts)
//! ------   ---------   --------   ---------
//! 1           740.0       45.4       694.6
//! Interface Admin  Oper       Power   Device              Class Max
//!                             (Watts)
//! --------- ------ ---------- ------- ------------------- ----- ----
//! Gi1/0/1   auto   on         15.4    IP Phone 8845       4     30.0
//! ```
//!
//! A small state machine tracks which table the current line belongs to.
//! Unit rows, separators and totals fail the row shape check of their section
//! and are ignored without leaving the section.

use log::debug;

use crate::error::ParseError;
use crate::extract::lines;
use crate::normalize::normalize_interface_name;
use crate::records::{PoePort, PowerBudgetReport, PowerModule};

pub const FORMAT: &str = "power inline";

/// The table the parser is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Module,
    Interface,
}

impl Section {
    /// The section a header line opens, keyed on its first token.
    fn opened_by(first: &str) -> Option<Self> {
        match first {
            "Module" => Some(Section::Module),
            "Interface" => Some(Section::Interface),
            _ => None,
        }
    }
}

/// Parse `show power inline` output.
///
/// Fails with [`ParseError::NoRecordsExtracted`] only if neither a module row
/// nor a port row was found.
pub fn parse_power_inline(blob: &str) -> Result<PowerBudgetReport, ParseError> {
    let mut report = PowerBudgetReport::default();
    let mut section = Section::None;

    for line in lines(blob) {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let Some(&first) = fields.first() else {
            section = Section::None;
            continue;
        };

        if let Some(next) = Section::opened_by(first) {
            section = next;
            continue;
        }

        match section {
            Section::Module => {
                if let Some(module) = module_row(&fields) {
                    report.modules.push(module);
                }
            }
            Section::Interface => {
                if let Some(port) = port_row(&fields) {
                    report.poe_ports.push(port);
                }
            }
            Section::None => {}
        }
    }

    if report.modules.is_empty() && report.poe_ports.is_empty() {
        return Err(ParseError::NoRecordsExtracted { format: FORMAT });
    }

    debug!(
        "{FORMAT}: {} modules, {} ports",
        report.modules.len(),
        report.poe_ports.len()
    );
    Ok(report)
}

fn module_row(fields: &[&str]) -> Option<PowerModule> {
    let [module_id, available, used, remaining] = fields else {
        return None;
    };
    if module_id.starts_with("---") {
        return None;
    }

    Some(PowerModule {
        module_id: module_id.to_string(),
        available_watts: available.to_string(),
        used_watts: used.to_string(),
        remaining_watts: remaining.to_string(),
    })
}

fn port_row(fields: &[&str]) -> Option<PoePort> {
    if fields.len() < 6 || !fields[0].contains('/') {
        return None;
    }
    let last = fields.len() - 1;

    Some(PoePort {
        interface: normalize_interface_name(fields[0]),
        admin_state: fields[1].to_string(),
        oper_state: fields[2].to_string(),
        power_watts: fields[3].to_string(),
        device_description: fields[4..last - 1].join(" "),
        class: fields[last - 1].to_string(),
        max_watts: fields[last].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const IOS_POWER: &str = "\
switch#show power inline\r
\r
Module   Available     Used     Remaining\r
          (Watts)     (Watts)    (Watts)\r
------   ---------   --------   ---------\r
1           740.0       45.4       694.6\r
2           740.0        0.0       740.0\r
Interface Admin  Oper       Power   Device              Class Max\r
                            (Watts)\r
--------- ------ ---------- ------- ------------------- ----- ----\r
Gi1/0/1   auto   on         15.4    IP Phone 8845       4     30.0\r
Gi1/0/2   auto   off        0.0     n/a                 n/a   30.0\r
Gi1/0/3   auto   on         30.0    AIR-AP2802I-B-K9    4     30.0\r
\r
Totals:          45.4\r
switch#\r
";

    #[test]
    fn test_modules_and_ports() {
        let report = parse_power_inline(IOS_POWER).unwrap();
        assert_eq!(report.modules.len(), 2);
        assert_eq!(
            report.modules[0],
            PowerModule {
                module_id: "1".into(),
                available_watts: "740.0".into(),
                used_watts: "45.4".into(),
                remaining_watts: "694.6".into(),
            }
        );

        assert_eq!(report.poe_ports.len(), 3);
        assert_eq!(
            report.poe_ports[0],
            PoePort {
                interface: "Gi1/0/1".into(),
                admin_state: "auto".into(),
                oper_state: "on".into(),
                power_watts: "15.4".into(),
                device_description: "IP Phone 8845".into(),
                class: "4".into(),
                max_watts: "30.0".into(),
            }
        );
        assert_eq!(report.poe_ports[1].device_description, "n/a");
        assert_eq!(report.poe_ports[1].class, "n/a");
        assert_eq!(report.poe_ports[2].device_description, "AIR-AP2802I-B-K9");
    }

    #[test]
    fn test_unit_row_keeps_section() {
        let blob = "\
Interface Admin  Oper       Power   Device              Class Max
                            (Watts)
Gi1/0/7   auto   on         6.5     Ieee PD             2     30.0
";
        let report = parse_power_inline(blob).unwrap();
        assert_eq!(report.poe_ports.len(), 1);
        assert_eq!(report.poe_ports[0].interface, "Gi1/0/7");
        assert_eq!(report.poe_ports[0].device_description, "Ieee PD");
    }

    #[test]
    fn test_blank_line_leaves_section() {
        let blob = "\
Interface Admin  Oper       Power   Device              Class Max
Gi1/0/7   auto   on         6.5     Ieee PD             2     30.0

Gi1/0/8   auto   on         6.5     Ieee PD             2     30.0
Module   Available     Used     Remaining
1           370.0       13.0       357.0
";
        let report = parse_power_inline(blob).unwrap();
        assert_eq!(report.poe_ports.len(), 1);
        assert_eq!(report.modules.len(), 1);
    }

    #[test]
    fn test_modules_without_ports() {
        let blob = "\
Module   Available     Used     Remaining
          (Watts)     (Watts)    (Watts)
------   ---------   --------   ---------
1           740.0        0.0       740.0
";
        let report = parse_power_inline(blob).unwrap();
        assert_eq!(report.modules.len(), 1);
        assert!(report.poe_ports.is_empty());
    }

    #[test]
    fn test_nothing_found() {
        let err = parse_power_inline("% Invalid input detected at '^' marker.\n").unwrap_err();
        assert_eq!(err, ParseError::NoRecordsExtracted { format: FORMAT });
    }
}
