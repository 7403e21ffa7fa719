// src/exec/noop.rs

use std::io::Write;

use tracing::debug;

use crate::action::{Action, CallArgs};
use crate::errors::Result;
use crate::exec::backend::{ExecuteFuture, Executor};

/// Simulating executor: writes `Execute [...]` instead of spawning anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExecutor {
    result: i32,
}

impl NoopExecutor {
    /// Create a simulating executor that always reports `result`.
    pub fn new(result: i32) -> Self {
        Self { result }
    }
}

impl Executor for NoopExecutor {
    fn execute<'a>(
        &'a self,
        action: &'a Action,
        args: &'a CallArgs,
        out: &'a mut (dyn Write + Send),
    ) -> ExecuteFuture<'a> {
        Box::pin(self.report(action, args, out))
    }
}

impl NoopExecutor {
    async fn report(
        &self,
        action: &Action,
        args: &CallArgs,
        out: &mut (dyn Write + Send),
    ) -> Result<i32> {
        let exe = action.resolve(args)?;
        debug!(program = %action.program(), "simulating action");
        writeln!(out, "Execute {}", display_list(&exe))?;
        Ok(self.result)
    }
}

/// Render a command as a bracketed list of quoted items: `['ls', '-l']`.
///
/// Items are single-quoted unless they contain a single quote and no double
/// quote, in which case double quotes are used. Backslashes and the chosen
/// quote are escaped; control characters become `\n`, `\r`, `\t` or `\xNN`.
pub fn display_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote_item(s)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_item(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
