//! `show running-config` interface block parser.
//!
//! Only `interface NAME` blocks are kept. Sub-command indentation is not
//! tracked, so lines are trimmed and every non-declaration line after a
//! declaration belongs to that interface until the next declaration.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::extract::{lines, stitch_records};
use crate::normalize::normalize_interface_name;
use crate::records::InterfaceConfigBlock;

pub const FORMAT: &str = "running-config";

static INTERFACE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^interface\s+(\S+)$").expect("valid regex"));

/// Global lines that never belong to an interface block.
fn is_skipped(line: &str) -> bool {
    line.is_empty()
        || line.starts_with('!')
        || line.starts_with("version")
        || line.starts_with("hostname")
}

/// Extract per-interface configuration blocks from `show running-config`.
///
/// Fails with [`ParseError::NoRecordsExtracted`] if the output holds no
/// `interface` declaration.
pub fn parse_running_config(blob: &str) -> Result<Vec<InterfaceConfigBlock>, ParseError> {
    let kept = lines(blob).map(str::trim).filter(|line| !is_skipped(line));

    let blocks: Vec<InterfaceConfigBlock> =
        stitch_records(kept, |line| INTERFACE_START.is_match(line))
            .into_iter()
            .filter_map(|block| {
                let declaration = block.first()?;
                let name = INTERFACE_START.captures(declaration)?.get(1)?.as_str();
                Some(InterfaceConfigBlock {
                    interface_name: normalize_interface_name(name),
                    config_lines: block.iter().map(|line| line.to_string()).collect(),
                })
            })
            .collect();

    if blocks.is_empty() {
        return Err(ParseError::NoRecordsExtracted { format: FORMAT });
    }

    debug!("{FORMAT}: extracted {} interface blocks", blocks.len());
    Ok(blocks)
}
