// src/lib.rs

pub mod action;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod exec;
pub mod logging;

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use crate::action::ActionLibrary;
use crate::cli::CliArgs;
use crate::config::{expand_home, load_call, load_call_from_reader, load_library};
use crate::exec::{Executor, NoopExecutor, ShellExecutor};

pub use crate::dispatch::dispatch;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - library loading
/// - call loading (file or stdin)
/// - executor selection (`--dry-run`)
/// - dispatch
///
/// Returns the status code the process should exit with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let library_path = expand_home(&args.library);
    let library = load_library(&library_path)?;

    let mut stdout = io::stdout();

    if args.list {
        write_listing(&library, &mut stdout)?;
        return Ok(0);
    }

    let request = match &args.call {
        Some(path) => load_call(expand_home(path))?,
        None => load_call_from_reader(io::stdin().lock())?,
    };

    let executor: Box<dyn Executor> = if args.dry_run {
        Box::new(NoopExecutor::default())
    } else {
        Box::new(ShellExecutor::new().with_timeout(args.timeout))
    };

    let status = dispatch(&library, executor.as_ref(), &request, &mut stdout).await?;
    stdout.flush()?;

    debug!(status, "dispatch complete");
    Ok(status)
}

/// Print every action with its command template, arguments and help text.
pub fn write_listing(library: &ActionLibrary, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "actions ({}):", library.len())?;
    for (name, action) in library.iter() {
        writeln!(out, "  - {name}")?;
        writeln!(out, "      cmd: {action}")?;

        let required = action.required_args();
        if !required.is_empty() {
            let keys: Vec<&str> = required.into_iter().collect();
            writeln!(out, "      args: {}", keys.join(", "))?;
        }
        if let Some(help) = action.help_text() {
            writeln!(out, "      help: {help}")?;
        }
    }
    Ok(())
}
