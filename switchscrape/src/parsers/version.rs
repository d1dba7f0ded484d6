//! `show version` parser.
//!
//! IOS, IE-series and Nexus devices report the same identity facts in
//! unrelated layouts, so each key carries its own list of phrasings and is
//! filled from the first line that matches one.

use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;

use crate::error::ParseError;
use crate::extract::{FieldPatterns, lines};
use crate::records::DeviceIdentity;

pub const FORMAT: &str = "version";

/// Keys a parsed identity must carry.
const MANDATORY: &[&str] = &["version", "serialNumber"];

static FIELDS: Lazy<FieldPatterns> =
    Lazy::new(|| build_field_patterns().expect("valid version field patterns"));

fn build_field_patterns() -> Result<FieldPatterns, regex::Error> {
    FieldPatterns::new()
        .field(
            "hardware",
            &[
                r"(?i)cisco ([\w-]+[a-z\d\-]+) .* processor",
                r"(?i)Board Type\s*:\s*(\S+)",
                r"(?i)Product\s*:\s*Cisco ([\w\s]+) Switch",
                r"(?i)cisco (Nexus\S+ [\w-]+ Chassis)",
                r"(?i)cisco ([\w-]+ Chassis)",
            ],
        )?
        .field(
            "version",
            &[
                r"(?i)Version ([^,]+),",
                r"(?i)NXOS:\s*version\s*(\S+)",
                r"(?i)Software Version\s*:\s*(\S+)",
                r"(?i)system:\s*version\s*(\S+)",
            ],
        )?
        .field("release", &[r"(?i)Version [^,]+, (RELEASE SOFTWARE .*)"])?
        .field(
            "softwareImage",
            &[
                r#"(?i)System image file is "([^"]+)""#,
                r"(?i)NXOS image file is:\s*(\S+)",
                r"(?i)Active Image\s*:\s*([^\s(]+)",
                r"(?i)system image file is:\s*(\S+)",
            ],
        )?
        .field(
            "serialNumber",
            &[
                r"(?i)System serial number\s*:\s*(\S+)",
                r"(?i)Processor board ID\s*(\S+)",
                r"(?i)MAC Address\s*:\s*(\S+)",
            ],
        )?
        .field(
            "uptime",
            &[
                r"(?i)uptime is (.+)",
                r"(?i)System Uptime\s*:\s*(\S+)",
            ],
        )?
        .field(
            "restarted",
            &[
                r"(?i)System restarted at (.*)",
                r"(?i)Previous Restart\s*:\s*(.*)",
                r"(?i)^Last reset at (.*)",
            ],
        )?
        .field(
            "reloadReason",
            &[
                r"(?i)Last reload reason: (.*)",
                r"(?i)System returned to ROM by (.*)",
                r"(?i)^Reason:\s*(.*)",
            ],
        )?
        .field(
            "rommon",
            &[
                r"(?i)ROM: (.*)",
                r"(?i)Bootloader\s*:\s*(\S+)",
                r"(?i)BIOS:\s*version\s*(\S+)",
            ],
        )
}

/// Parse `show version` output into a [`DeviceIdentity`].
///
/// Fails with [`ParseError::MandatoryFieldMissing`] when the version or the
/// serial number cannot be found.
pub fn parse_version(blob: &str) -> Result<DeviceIdentity, ParseError> {
    let values = FIELDS.extract(lines(blob));

    let missing: Vec<&'static str> = MANDATORY
        .iter()
        .copied()
        .filter(|key| !values.is_set(key))
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MandatoryFieldMissing { fields: missing });
    }

    let fields: IndexMap<String, String> = values
        .found()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    debug!("{FORMAT}: extracted {} identity fields", fields.len());

    Ok(DeviceIdentity::from_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    const IOS_VERSION: &str = "\
switch#show version\r
Cisco IOS Software, C3750E Software (C3750E-UNIVERSALK9-M), Version 15.2(4)E10, RELEASE SOFTWARE (fc2)\r
Technical Support: http://www.cisco.com/techsupport\r
Copyright (c) 1986-2020 by Cisco Systems, Inc.\r
\r
ROM: Bootstrap program is C3750E boot loader\r
BOOTLDR: C3750E Boot Loader (C3750X-HBOOT-M) Version 15.2(3r)E, RELEASE SOFTWARE (fc1)\r
\r
switch uptime is 2 weeks, 3 days, 4 hours, 5 minutes\r
System returned to ROM by power-on\r
System restarted at 09:14:03 UTC Mon Mar 1 2021\r
System image file is \"flash:/c3750e-universalk9-mz.152-4.E10.bin\"\r
Last reload reason: power-on\r
\r
cisco WS-C3750X-48P (PowerPC405) processor (revision A0) with 262144K bytes of memory.\r
Processor board ID FDO1234X0AB\r
Base ethernet MAC Address       : 00:11:22:33:44:55\r
System serial number            : FDO1234X0CD\r
switch#\r
";

    const NEXUS_VERSION: &str = "\
Cisco Nexus Operating System (NX-OS) Software\r
TAC support: http://www.cisco.com/tac\r
Software\r
  BIOS: version 07.69\r
  NXOS: version 9.3(8)\r
  BIOS compile time:  04/08/2021\r
  NXOS image file is: bootflash:///nxos.9.3.8.bin\r
\r
Hardware\r
  cisco Nexus9000 C93180YC-EX chassis\r
  Processor Board ID FDO22334455\r
\r
Kernel uptime is 120 day(s), 4 hour(s), 12 minute(s), 1 second(s)\r
\r
Last reset at 123456 usecs after Mon Jan  4 10:11:12 2021\r
  Reason: Reset Requested by CLI command reload\r
  System version: 9.3(7)\r
";

    #[test]
    fn test_ios_identity() {
        let identity = parse_version(IOS_VERSION).unwrap();
        assert_eq!(identity.get("hardware"), Some("WS-C3750X-48P"));
        assert_eq!(identity.version(), "15.2(4)E10");
        assert_eq!(identity.get("release"), Some("RELEASE SOFTWARE (fc2)"));
        assert_eq!(
            identity.get("softwareImage"),
            Some("flash:/c3750e-universalk9-mz.152-4.E10.bin")
        );
        assert_eq!(identity.get("uptime"), Some("2 weeks, 3 days, 4 hours, 5 minutes"));
        assert_eq!(identity.get("restarted"), Some("09:14:03 UTC Mon Mar 1 2021"));
        assert_eq!(identity.get("reloadReason"), Some("power-on"));
        assert_eq!(identity.get("rommon"), Some("Bootstrap program is C3750E boot loader"));
    }

    #[test]
    fn test_first_serial_line_wins() {
        let identity = parse_version(IOS_VERSION).unwrap();
        // "Processor board ID" precedes "System serial number" in the output.
        assert_eq!(identity.serial_number(), "FDO1234X0AB");
    }

    #[test]
    fn test_keys_in_fixed_order() {
        let identity = parse_version(IOS_VERSION).unwrap();
        let keys: Vec<&str> = identity.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                "hardware",
                "version",
                "release",
                "softwareImage",
                "serialNumber",
                "uptime",
                "restarted",
                "reloadReason",
                "rommon",
            ]
        );
    }

    #[test]
    fn test_nexus_identity() {
        let identity = parse_version(NEXUS_VERSION).unwrap();
        assert_eq!(identity.version(), "9.3(8)");
        assert_eq!(identity.serial_number(), "FDO22334455");
        assert_eq!(identity.get("hardware"), Some("Nexus9000 C93180YC-EX chassis"));
        assert_eq!(identity.get("softwareImage"), Some("bootflash:///nxos.9.3.8.bin"));
        assert_eq!(identity.get("rommon"), Some("07.69"));
        assert_eq!(
            identity.get("uptime"),
            Some("120 day(s), 4 hour(s), 12 minute(s), 1 second(s)")
        );
        assert_eq!(
            identity.get("reloadReason"),
            Some("Reset Requested by CLI command reload")
        );
        assert_eq!(identity.get("release"), None);
    }

    #[test]
    fn test_missing_version_and_serial() {
        let err = parse_version("switch uptime is 1 day\nROM: Bootstrap\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MandatoryFieldMissing {
                fields: vec!["version", "serialNumber"],
            }
        );
    }

    #[test]
    fn test_missing_serial_only() {
        let err = parse_version("Cisco IOS Software, Version 15.2(4)E10, RELEASE SOFTWARE\n")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::MandatoryFieldMissing {
                fields: vec!["serialNumber"],
            }
        );
    }
}
