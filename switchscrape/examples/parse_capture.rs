//! Captured output parsing example
//!
//! This example replays `show` command output saved to a directory and
//! prints the parsed records as JSON. Each report is read from a file named
//! after its command with spaces replaced by underscores, e.g.
//! `show_cdp_neighbors.txt`. Missing files are reported and skipped.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example parse_capture -- --dir captures/sw1 --host sw1
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use switchscrape::{CapturedRunner, CollectorBuilder, ShowCommand};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    println!("=== Switchscrape Capture Replay ===\n");
    println!("Reading captures for {} from {}...", args.host, args.dir.display());

    let mut runner = CapturedRunner::new().with_output("terminal length 0", "");
    for command in ShowCommand::ALL {
        let path = args.dir.join(format!("{}.txt", command.command().replace(' ', "_")));
        if !path.exists() {
            println!("  (no capture for '{command}')");
            continue;
        }
        runner = runner.load(command.command(), &path).await?;
    }

    let mut collector = CollectorBuilder::new(&args.host)
        .timeout(Duration::from_secs(args.timeout))
        .build(runner);

    for (command, result) in collector.collect_all().await {
        println!("\n--- {command} ---");
        match result {
            Ok(records) => println!("{}", serde_json::to_string_pretty(&records)?),
            Err(err) if err.is_no_data() => println!("(no entries)"),
            Err(err) => println!("Error: {err}"),
        }
    }

    Ok(())
}

struct Args {
    host: String,
    dir: PathBuf,
    timeout: u64,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut host = "switch".to_string();
        let mut dir = PathBuf::from(".");
        let mut timeout = 30u64;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--host" | "-h" => {
                    i += 1;
                    if i < args.len() {
                        host = args[i].clone();
                    }
                }
                "--dir" | "-d" => {
                    i += 1;
                    if i < args.len() {
                        dir = PathBuf::from(&args[i]);
                    }
                }
                "--timeout" | "-t" => {
                    i += 1;
                    if i < args.len() {
                        timeout = args[i].parse().unwrap_or(30);
                    }
                }
                "--help" => {
                    println!("Usage: parse_capture [--host NAME] [--dir PATH] [--timeout SECS]");
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {other}");
                }
            }
            i += 1;
        }

        Self { host, dir, timeout }
    }
}
