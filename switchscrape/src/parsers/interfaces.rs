//! `show interfaces` parser.
//!
//! Output is a sequence of multi-line blocks, one per interface, each opened by
//! a headline such as `GigabitEthernet1/0/1 is up, line protocol is up` (IOS)
//! or `Ethernet1/1 is up` (NX-OS). Blocks are stitched together first, then
//! every field is filled from its own list of dialect-specific patterns.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{FieldPatterns, active_window, lines, stitch_records};
use crate::normalize::normalize_interface_name;
use crate::records::InterfaceDetail;

pub const FORMAT: &str = "interfaces";

/// Marker for the echoed command that opens the report.
const COMMAND_ECHO: &str = "show interface";

/// First token contains a digit and is followed by ` is `.
static BLOCK_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+\d+\S*\s+is\s+").expect("valid regex"));

/// Interface headline; the protocol clause is absent on NX-OS.
static HEADLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\S+)\s+is\s+(administratively down|down|up|err-disabled|deleted)(?:,\s+line\s+protocol\s+is\s+(down \(disabled\)|down|up))?",
    )
    .expect("valid regex")
});

static FIELDS: Lazy<FieldPatterns> = Lazy::new(|| {
    build_field_patterns().expect("valid interface field patterns")
});

fn build_field_patterns() -> Result<FieldPatterns, regex::Error> {
    FieldPatterns::new()
        .field("description", &[r"^Description:\s*(.*)"])?
        .field("hardware", &[r"Hardware(?::| is)\s*([^,]+)"])?
        .field("mac_address", &[r"Hardware(?::| is)[^,]*,\s*address(?::| is)\s*([\w.]+)"])?
        .field("ip_address", &[r"Internet address is ([\d.]+/\d+)"])?
        .field("mtu", &[r"MTU (\d+) bytes"])?
        .field("bandwidth_kbit", &[r"BW (\d+) Kbit"])?
        .field("delay_usec", &[r"DLY (\d+) usec"])?
        .field("duplex", &[r"(\S+-duplex),"])?
        .field("speed", &[r"\S+-duplex,\s*([^,]+)"])?
        .field("media_type", &[r"media type is (.+)"])?
        .field("encapsulation", &[r"Encapsulation ([^,]+)"])?
        .field("reliability", &[r"reliability\s+(\d+/\d+)"])?
        .field("tx_load", &[r"txload\s+(\d+/\d+)"])?
        .field("rx_load", &[r"rxload\s+(\d+/\d+)"])?
        .field("last_input", &[r"Last input\s+([^,]+),"])?
        .field("last_output", &[r"Last input\s+[^,]+,\s+output\s+([^,]+),"])?
        .field("output_hang", &[r"output hang\s+(.+)"])?
        .field("queue_strategy", &[r"Queueing strategy:\s*(.+)"])?
        .field("input_rate_bps", &[r"(?:5 minute|30 seconds) input rate (\d+) bits/sec"])?
        .field("output_rate_bps", &[r"(?:5 minute|30 seconds) output rate (\d+) bits/sec"])?
        .field("packets_in", &[r"(\d+)\s+packets\s+input", r"(\d+)\s+input\s+packets"])?
        .field(
            "bytes_in",
            &[r"packets\s+input,?\s+(\d+)\s+bytes", r"input\s+packets,?\s+(\d+)\s+bytes"],
        )?
        .field("packets_out", &[r"(\d+)\s+packets\s+output", r"(\d+)\s+output\s+packets"])?
        .field(
            "bytes_out",
            &[r"packets\s+output,?\s+(\d+)\s+bytes", r"output\s+packets,?\s+(\d+)\s+bytes"],
        )?
        .field("runts", &[r"(\d+)\s+runts"])?
        .field("giants", &[r"(\d+)\s+giants"])?
        .field("throttles", &[r"(\d+)\s+throttles"])?
        .field("input_errors", &[r"(\d+)\s+input\s+errors?"])?
        .field("crc_errors", &[r"(\d+)\s+CRC"])?
        .field("output_errors", &[r"(\d+)\s+output\s+errors?"])?
        .field("collisions", &[r"(\d+)\s+collisions?"])
}

/// Parse `show interfaces` output into one record per interface block.
///
/// Parsing is confined to the output of the command: it starts after the
/// echoed `show interface...` line when one was captured and stops at the next
/// bare prompt. No block yields an empty list; blocks whose headline cannot be
/// read are dropped.
pub fn parse_interfaces(blob: &str) -> Vec<InterfaceDetail> {
    let all: Vec<&str> = lines(blob).collect();
    let window = active_window(&all, COMMAND_ECHO);

    stitch_records(window.iter().copied(), |line| BLOCK_START.is_match(line))
        .into_iter()
        .filter_map(|block| parse_block(&block))
        .collect()
}

fn parse_block(block: &[&str]) -> Option<InterfaceDetail> {
    let headline = block.first()?;
    let Some(caps) = HEADLINE.captures(headline) else {
        warn!("{FORMAT}: dropping block with unreadable headline: {headline}");
        return None;
    };

    let admin_status = caps.get(2).map_or("", |m| m.as_str()).to_string();
    let protocol_status = caps
        .get(3)
        .map_or_else(|| admin_status.clone(), |m| m.as_str().to_string());

    let values = FIELDS.extract(block.iter().copied());

    Some(InterfaceDetail {
        name: normalize_interface_name(&caps[1]),
        description: values.take("description"),
        admin_status,
        protocol_status,
        hardware: values.take("hardware"),
        mac_address: values.take("mac_address"),
        ip_address: values.take("ip_address"),
        duplex: values.take("duplex"),
        speed: values.take("speed"),
        media_type: values.take("media_type"),
        mtu: values.take("mtu"),
        bandwidth_kbit: values.take("bandwidth_kbit"),
        delay_usec: values.take("delay_usec"),
        encapsulation: values.take("encapsulation"),
        reliability: values.take("reliability"),
        tx_load: values.take("tx_load"),
        rx_load: values.take("rx_load"),
        last_input: values.take("last_input"),
        last_output: values.take("last_output"),
        output_hang: values.take("output_hang"),
        queue_strategy: values.take("queue_strategy"),
        input_rate_bps: values.take("input_rate_bps"),
        output_rate_bps: values.take("output_rate_bps"),
        packets_in: values.take("packets_in"),
        bytes_in: values.take("bytes_in"),
        packets_out: values.take("packets_out"),
        bytes_out: values.take("bytes_out"),
        runts: values.take("runts"),
        giants: values.take("giants"),
        throttles: values.take("throttles"),
        input_errors: values.take("input_errors"),
        crc_errors: values.take("crc_errors"),
        output_errors: values.take("output_errors"),
        collisions: values.take("collisions"),
    })
}
