// src/cli.rs

//! CLI argument parsing using `clap`.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::loader::DEFAULT_LIBRARY;

/// Command-line arguments for `shackles`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shackles",
    version,
    about = "Run named, parameterised commands from an action library.",
    long_about = None
)]
pub struct CliArgs {
    /// The library of actions that can be executed (YAML, or TOML by extension).
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_LIBRARY)]
    pub library: String,

    /// The call file to be executed. Reads stdin when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub call: Option<String>,

    /// Simulate what would be executed.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List the actions in the library and exit.
    #[arg(long)]
    pub list: bool,

    /// Kill an action that runs longer than this (e.g. `250ms`, `30s`, `5m`).
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHACKLES_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Parse a simple duration string like `"3s"`, `"250ms"`, `"1m"`, `"2h"`.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let idx = s
        .chars()
        .position(|c| !c.is_ascii_digit())
        .ok_or_else(|| "duration missing unit suffix".to_string())?;

    let (num_part, unit_part) = s.split_at(idx);
    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid duration number '{}': {}", num_part, e))?;
    let unit = unit_part.trim().to_lowercase();

    let secs_per_unit = match unit.as_str() {
        "ms" => return Ok(Duration::from_millis(value)),
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        _ => {
            return Err(format!(
                "unsupported duration unit '{}'; expected ms, s, m, or h",
                unit
            ));
        }
    };
    value
        .checked_mul(secs_per_unit)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("duration '{}' is too large", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["shackles"]).unwrap();
        assert_eq!(args.library, "~/.shackles.yaml");
        assert!(args.call.is_none());
        assert!(!args.dry_run);
        assert!(!args.list);
        assert!(args.timeout.is_none());
    }

    #[test]
    fn short_flags() {
        let args =
            CliArgs::try_parse_from(["shackles", "-l", "lib.yaml", "-c", "call.yaml", "-n"])
                .unwrap();
        assert_eq!(args.library, "lib.yaml");
        assert_eq!(args.call.as_deref(), Some("call.yaml"));
        assert!(args.dry_run);
    }

    #[test]
    fn timeout_is_parsed() {
        let args = CliArgs::try_parse_from(["shackles", "--timeout", "250ms"]).unwrap();
        assert_eq!(args.timeout, Some(Duration::from_millis(250)));
        assert!(CliArgs::try_parse_from(["shackles", "--timeout", "5"]).is_err());
    }

    #[test]
    fn duration_units() {
        assert_eq!(parse_duration("3s"), Ok(Duration::from_secs(3)));
        assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
        assert!(parse_duration("").is_err());
        assert!(parse_duration("3d").is_err());
    }

    #[test]
    fn oversized_duration_is_an_error() {
        let huge = format!("{}h", u64::MAX / 60);
        assert_eq!(
            parse_duration(&huge),
            Err(format!("duration '{huge}' is too large"))
        );
        assert_eq!(
            parse_duration(&format!("{}s", u64::MAX)),
            Ok(Duration::from_secs(u64::MAX))
        );
    }
}
