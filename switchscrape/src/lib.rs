//! # Switchscrape
//!
//! Structured record extraction from Cisco IOS and NX-OS `show` command output.
//!
//! Switchscrape turns the text a switch prints for `show interfaces`,
//! `show vlan`, `show cdp neighbors` and friends into typed records, across
//! the phrasing differences between IOS, IOS-XE, IE-series and Nexus devices.
//!
//! ## Features
//!
//! - Nine report parsers built from shared primitives (column slicing, block
//!   stitching, per-field pattern alternation)
//! - Interface names normalized to one canonical short form in every record
//! - Typed errors separating "no data" from "unparseable" from transport failures
//! - An async collector that drives any transport through a list of reports
//!
//! ## Quick Start
//!
//! ```rust
//! use switchscrape::parsers::parse_cdp_neighbors;
//!
//! let output = "\
//! Device ID        Local Intrfce     Holdtme    Capability  Platform  Port ID
//! sw-access1       Gig 1/0/1         155             S I    WS-C2960X Gig 0/1
//! ";
//!
//! let neighbors = parse_cdp_neighbors(output)?;
//! assert_eq!(neighbors[0].remote_device_id, "sw-access1");
//! assert_eq!(neighbors[0].local_interface, "Gi1/0/1");
//! # Ok::<(), switchscrape::ParseError>(())
//! ```
//!
//! Collecting from a device goes through a [`CommandRunner`]:
//!
//! ```rust,no_run
//! use switchscrape::{CapturedRunner, CollectorBuilder, ShowCommand};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), switchscrape::Error> {
//!     let runner = CapturedRunner::new()
//!         .load("show version", "captures/show_version.txt")
//!         .await?;
//!
//!     // Replayed captures have no pager to disable.
//!     let mut collector = CollectorBuilder::new("sw1")
//!         .clear_on_open_commands()
//!         .command(ShowCommand::Version)
//!         .build(runner);
//!     for (command, result) in collector.collect_all().await {
//!         match result {
//!             Ok(records) => println!("{command}: {} records", records.len()),
//!             Err(err) if err.is_no_data() => println!("{command}: empty"),
//!             Err(err) => eprintln!("{command}: {err}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod collector;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod parsers;
pub mod records;

// Re-export main types for convenience
pub use collector::{Capture, CapturedRunner, Collector, CollectorBuilder, CommandRunner};
pub use error::{Error, ParseError, TransportError};
pub use normalize::normalize_interface_name;
pub use parsers::{ParsedOutput, ShowCommand};
pub use records::{
    DeviceIdentity, InterfaceConfigBlock, InterfaceDetail, InterfaceSummary, MacAddressTable,
    MacTableEntry, NeighborRecord, PoePort, PowerBudgetReport, PowerModule, VlanMembership,
};
