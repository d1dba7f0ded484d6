//! `show cdp neighbors` parser.
//!
//! A neighbor normally occupies one fixed-width row, but a device ID longer
//! than its column pushes the rest of the entry onto the next line:
//!
//! ```text
//! Device ID        Local Intrfce     Holdtme    Capability  Platform  Port ID
//! sw-access1       Gig 1/0/1         155             S I    WS-C2960X Gig 0/1
//! core-sw1.campus.example.edu
//!                  Ten 1/1/1         131            R S I   C9500-40X Ten 1/0/1
//! ```
//!
//! Rows are classified by where their text falls relative to the header
//! offsets, and a pending device ID is carried to the continuation line that
//! completes it.

use log::{debug, warn};

use crate::error::ParseError;
use crate::extract::{Column, ColumnLayout, Row, lines};
use crate::normalize::normalize_interface_name;
use crate::records::NeighborRecord;

pub const FORMAT: &str = "cdp neighbors";

const COLUMNS: &[Column] = &[
    Column::new("device", &["Device ID", "Device-ID"]),
    Column::new("local", &["Local Intrfce", "Local Intf"]),
    Column::new("hold", &["Holdtme", "Hldtme"]),
    Column::new("capability", &["Capability"]),
    Column::new("platform", &["Platform"]),
    Column::new("port", &["Port ID"]),
];

/// Parse `show cdp neighbors` output.
///
/// Output without a header yields an empty list; a header missing any of the
/// expected columns fails with [`ParseError::IncompleteColumns`].
pub fn parse_cdp_neighbors(blob: &str) -> Result<Vec<NeighborRecord>, ParseError> {
    let all: Vec<&str> = lines(blob).collect();

    let Some(header) = all
        .iter()
        .position(|line| line.contains("Device") && line.contains("Port ID"))
    else {
        debug!("{FORMAT}: header not found, returning no neighbors");
        return Ok(Vec::new());
    };

    let layout = ColumnLayout::locate(FORMAT, all[header], COLUMNS)?;
    let mut stitcher = CdpStitcher::new(&layout);

    let neighbors = all[header + 1..]
        .iter()
        .copied()
        .filter(|line| !is_noise(line))
        .filter_map(|line| stitcher.push(line))
        .collect();

    Ok(neighbors)
}

fn is_noise(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.contains("Total cdp entries")
        || trimmed.contains("Device-ID")
        || trimmed.contains("---")
}

/// How a data line relates to the table columns.
#[derive(Debug)]
enum LineKind<'a> {
    /// Only a device ID; the rest of the entry is on the next line.
    IdentifierOnly(&'a str),

    /// A full entry on one line.
    Complete(Row<'a>),

    /// The rest of an entry whose device ID was on the previous line.
    Continuation(Row<'a>),

    /// A continuation line too short to reach the platform column.
    Truncated,
}

/// Line-by-line CDP entry assembly.
///
/// Holds the device ID of an identifier-only line until the continuation line
/// that completes it arrives.
struct CdpStitcher<'l, 'a> {
    layout: &'l ColumnLayout,
    local_at: usize,
    platform_at: usize,
    pending_device: Option<&'a str>,
}

impl<'l, 'a> CdpStitcher<'l, 'a> {
    fn new(layout: &'l ColumnLayout) -> Self {
        Self {
            layout,
            local_at: layout.offset("local").unwrap_or_default(),
            platform_at: layout.offset("platform").unwrap_or_default(),
            pending_device: None,
        }
    }

    fn classify(&self, line: &'a str) -> LineKind<'a> {
        let row = self.layout.extract(line);

        if line.len() > self.local_at && row.get("device").is_empty() {
            if line.len() < self.platform_at {
                return LineKind::Truncated;
            }
            return LineKind::Continuation(row);
        }

        if line.len() >= self.platform_at {
            LineKind::Complete(row)
        } else {
            LineKind::IdentifierOnly(line.trim())
        }
    }

    /// Feed one data line, returning a neighbor once an entry is complete.
    fn push(&mut self, line: &'a str) -> Option<NeighborRecord> {
        match self.classify(line) {
            LineKind::IdentifierOnly(device) => {
                self.pending_device = Some(device);
                None
            }
            LineKind::Complete(row) => {
                self.pending_device = None;
                Some(neighbor(row.get("device"), &row))
            }
            LineKind::Continuation(row) => match self.pending_device.take() {
                Some(device) => Some(neighbor(device, &row)),
                None => {
                    warn!("{FORMAT}: continuation line without a device ID: {line}");
                    None
                }
            },
            LineKind::Truncated => {
                warn!("{FORMAT}: continuation line too short to parse: {line}");
                None
            }
        }
    }
}

fn neighbor(device: &str, row: &Row<'_>) -> NeighborRecord {
    let platform = row.get("platform");
    NeighborRecord {
        local_interface: normalize_interface_name(row.get("local")),
        remote_device_id: device.to_string(),
        remote_interface: normalize_interface_name(row.get("port")),
        hold_time_seconds: row.get("hold").to_string(),
        capabilities: row.get("capability").to_string(),
        platform: (!platform.is_empty()).then(|| platform.to_string()),
    }
}
