//! Prompt and command-echo detection.
//!
//! Captured blobs frequently carry the interactive session around the report:
//! the echoed command, banner noise and the trailing prompt. These helpers
//! bound the part of a blob that belongs to one command's output.

use once_cell::sync::Lazy;
use regex::Regex;

/// A bare device prompt such as `switch#` or `core-sw1>`.
static PROMPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+[>#]\s*$").expect("valid regex"));

/// Check whether a line is nothing but a device prompt.
pub fn is_prompt_line(line: &str) -> bool {
    PROMPT.is_match(line)
}

/// Check whether a line is the echo of `command`, bare or after a prompt.
///
/// Report bodies may quote the command (`Last clearing of "show interface"
/// counters`), so only a line where the command follows nothing but a prompt
/// counts.
pub fn is_echo_line(line: &str, command: &str) -> bool {
    line.find(command).is_some_and(|at| {
        let before = line[..at].trim();
        before.is_empty() || before.ends_with(['#', '>'])
    })
}

/// Bound the output of one command inside a captured session.
///
/// The window opens after the first echo of `echo` (see [`is_echo_line`]),
/// or at the first line if no echo was captured, and closes before the next
/// bare prompt line.
pub fn active_window<'a, 'b>(lines: &'b [&'a str], echo: &str) -> &'b [&'a str] {
    let start = lines
        .iter()
        .position(|line| is_echo_line(line, echo))
        .map_or(0, |echo_at| echo_at + 1);

    let end = lines[start..]
        .iter()
        .position(|line| is_prompt_line(line))
        .map_or(lines.len(), |offset| start + offset);

    &lines[start..end]
}
