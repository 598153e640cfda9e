//! CLI module for ssid-gbk
//!
//! This module handles command line argument parsing and query logic.

use crate::cache::SsidManager;
use crate::config::AppConfig;
use crate::entity::{formatter, parser};
use crate::error::{Result, SsidError};
use crate::utils::hex::{parse_hex, to_hex};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Read, Write};

#[derive(Parser, Debug)]
#[command(name = "ssid-gbk")]
#[command(version, about = "Detect, convert and look up GBK-encoded Wi-Fi SSIDs")]
#[command(long_about = "ssid-gbk converts GBK-encoded SSIDs to UTF-8 and maps them back\n\n\
    SSIDs are given escaped the way wpa_supplicant prints them, or as hex with --hex.\n\
    Without arguments, scan output is read from stdin and GBK SSIDs are annotated.\n\n\
    Examples:\n  \
    $ ssid-gbk '\\xd6\\xd0\\xb9\\xfa'\n  \
    $ ssid-gbk --hex d6d0b9fa --lookup e4b8ade59bbd\n  \
    $ wpa_cli scan_results | ssid-gbk\n  \
    $ ssid-gbk --json --history '\\xb2\\xe2\\xca\\xd4'")]
pub struct Cli {
    /// SSIDs to classify and convert
    #[arg(value_name = "SSID")]
    pub ssids: Vec<String>,

    /// Read SSID arguments as hex instead of escaped text
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Look up an SSID in the history after converting (repeatable)
    #[arg(short, long, value_name = "SSID")]
    pub lookup: Vec<String>,

    /// Print the conversion history at the end
    #[arg(long)]
    pub history: bool,

    /// Output JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Use a specific config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

/// Result of classifying and converting one SSID
#[derive(Debug, Serialize)]
struct SsidReport {
    input: String,
    hex: String,
    gbk: bool,
    utf8: Option<String>,
    error: Option<String>,
}

/// Result of one history lookup
#[derive(Debug, Serialize)]
struct LookupReport {
    query: String,
    found: Option<String>,
    display: Option<String>,
    error: Option<String>,
}

impl Cli {
    pub fn run(&self, mut config: AppConfig) -> Result<()> {
        // Apply CLI options to config
        if self.json {
            config.output.json = true;
        }
        if self.verbose {
            config.global.verbose = true;
        }

        let manager = SsidManager::new(&config);
        manager.init()?;

        if !self.ssids.is_empty() || !self.lookup.is_empty() {
            self.process_args(&manager, &config)?;
        } else {
            self.process_stdin(&manager, &config)?;
        }

        if self.history {
            self.print_history(&manager, &config)?;
        }

        manager.deinit()
    }

    /// Turn an SSID argument into bytes
    fn parse_ssid(&self, arg: &str) -> Result<Vec<u8>> {
        if self.hex {
            parse_hex(arg)
        } else {
            Ok(parser::unescape_ssid(arg))
        }
    }

    /// Process SSIDs and lookups from command line arguments
    fn process_args(&self, manager: &SsidManager, config: &AppConfig) -> Result<()> {
        for arg in &self.ssids {
            let ssid = self.parse_ssid(arg)?;
            let report = convert_report(manager, arg, &ssid);
            print_report(&report, config)?;
        }

        for arg in &self.lookup {
            let query = self.parse_ssid(arg)?;
            let report = lookup_report(manager, arg, &query);
            print_lookup(&report, config)?;
        }

        Ok(())
    }

    /// Process stdin (pipe or interactive mode)
    fn process_stdin(&self, manager: &SsidManager, config: &AppConfig) -> Result<()> {
        let stdin = io::stdin();

        if atty::is(atty::Stream::Stdin) {
            self.interactive(manager, config, stdin.lock())
        } else {
            let mut buffer = String::new();
            stdin.lock().read_to_string(&mut buffer)?;

            let mut stdout = io::stdout();
            for line in buffer.lines() {
                let result = process_line(line, manager, config)?;
                writeln!(stdout, "{}", result)?;
            }
            Ok(())
        }
    }

    /// Interactive mode: one command per line
    fn interactive<R: BufRead>(&self, manager: &SsidManager, config: &AppConfig, input: R) -> Result<()> {
        println!("ssid-gbk interactive mode (type help for commands, quit or Ctrl+D to exit)");

        let mut stdout = io::stdout();
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }

            let mut words = trimmed.split_whitespace();
            let command = words.next().unwrap_or_default();
            let args: Vec<&str> = words.collect();

            let outcome = match (command, args.as_slice()) {
                ("quit" | "exit", _) => break,
                ("classify", [ssid]) => self.parse_ssid(ssid).map(|bytes| {
                    let verdict = if manager.classify(&bytes) { "GBK" } else { "not GBK" };
                    println!("{} -> {}", ssid, verdict);
                }),
                ("convert", [ssid]) => self
                    .parse_ssid(ssid)
                    .and_then(|bytes| print_report(&convert_report(manager, ssid, &bytes), config)),
                ("lookup", [ssid]) => self
                    .parse_ssid(ssid)
                    .and_then(|bytes| print_lookup(&lookup_report(manager, ssid, &bytes), config)),
                ("record", [original, converted]) => self.parse_ssid(original).and_then(|o| {
                    let c = self.parse_ssid(converted)?;
                    manager.record(&o, &c)
                }),
                ("history", []) => self.print_history(manager, config),
                ("reset", []) => manager.deinit().and_then(|_| manager.init()),
                _ => {
                    println!("commands: classify <ssid> | convert <ssid> | lookup <ssid> | record <original> <converted> | history | reset | quit");
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                eprintln!("Error: {}", e);
            }
            stdout.flush()?;
        }

        Ok(())
    }

    /// Print every remembered conversion
    fn print_history(&self, manager: &SsidManager, config: &AppConfig) -> Result<()> {
        manager.dump_history();
        let history = manager.history()?;

        if config.output.json {
            let reports: Vec<_> = history.iter().map(|e| e.report()).collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for entry in &history {
                println!(
                    "{} <-> {} ({})",
                    to_hex(&entry.original),
                    to_hex(&entry.converted),
                    String::from_utf8_lossy(&entry.converted)
                );
            }
        }
        Ok(())
    }
}

/// Classify an SSID and convert it when it is GBK
fn convert_report(manager: &SsidManager, input: &str, ssid: &[u8]) -> SsidReport {
    let gbk = manager.classify(ssid);
    let mut report = SsidReport {
        input: input.to_string(),
        hex: to_hex(ssid),
        gbk,
        utf8: None,
        error: None,
    };

    if gbk {
        match manager.convert(ssid) {
            Ok(converted) => report.utf8 = Some(String::from_utf8_lossy(&converted).into_owned()),
            Err(e) => report.error = Some(e.to_string()),
        }
    }

    report
}

/// Look up either form of an SSID in the history
fn lookup_report(manager: &SsidManager, input: &str, query: &[u8]) -> LookupReport {
    let mut report = LookupReport {
        query: input.to_string(),
        found: None,
        display: None,
        error: None,
    };

    match manager.lookup(query) {
        Ok(found) => {
            report.display = std::str::from_utf8(&found).ok().map(str::to_string);
            report.found = Some(to_hex(&found));
        }
        Err(e) => report.error = Some(e.to_string()),
    }

    report
}

fn print_report(report: &SsidReport, config: &AppConfig) -> Result<()> {
    if config.output.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if let Some(ref utf8) = report.utf8 {
        println!("{} -> {}", report.input, utf8);
    } else if let Some(ref error) = report.error {
        println!("{} -> [{}]", report.input, error);
    } else {
        println!("{} -> [not GBK]", report.input);
    }
    Ok(())
}

fn print_lookup(report: &LookupReport, config: &AppConfig) -> Result<()> {
    if config.output.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        match (&report.found, &report.display, &report.error) {
            (Some(found), Some(display), _) => println!("{} -> {} ({})", report.query, found, display),
            (Some(found), None, _) => println!("{} -> {}", report.query, found),
            (None, _, Some(error)) => println!("{} -> [{}]", report.query, error),
            (None, _, None) => println!("{} -> [Not found]", report.query),
        }
    }
    Ok(())
}

/// Annotate one line of scan output
pub fn process_line(line: &str, manager: &SsidManager, config: &AppConfig) -> Result<String> {
    let mut entities = parser::parse_line(line);

    for entity in &mut entities.entities {
        if !entity.is_ssid() {
            continue;
        }
        let Some(ref bytes) = entity.bytes else {
            continue;
        };

        entity.gbk = manager.classify(bytes);
        if entity.gbk {
            match manager.convert(bytes) {
                Ok(converted) => entity.utf8 = String::from_utf8(converted).ok(),
                Err(e) => log::warn!("Keeping raw SSID {}: {}", entity.text, e),
            }
        }
        log::debug!("{}", formatter::format_entity(entity));
    }

    let complete = parser::build_complete_entities(line, entities);

    if config.output.json {
        formatter::format_json(&complete).map_err(SsidError::JsonError)
    } else {
        Ok(formatter::format_text(&complete, config.output.enable_colors))
    }
}
