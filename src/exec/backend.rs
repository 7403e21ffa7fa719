// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! The dispatcher talks to an `Executor` instead of spawning processes
//! itself. Which implementation is used is decided by the caller and passed
//! in explicitly:
//!
//! - [`ShellExecutor`](super::ShellExecutor) runs the command for real.
//! - [`NoopExecutor`](super::NoopExecutor) writes what would run.
//! - Tests can provide their own implementation that records calls.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use crate::action::{Action, CallArgs};
use crate::errors::Result;

/// Future returned by [`Executor::execute`].
pub type ExecuteFuture<'a> = Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>>;

/// Turns an action plus call arguments into a status code.
pub trait Executor: Send + Sync {
    /// Resolve `action` with `args` and execute it.
    ///
    /// Resolution errors ([`ArgumentFormat`](crate::errors::ShacklesError::ArgumentFormat))
    /// are returned as-is and must happen before any side effect.
    fn execute<'a>(
        &'a self,
        action: &'a Action,
        args: &'a CallArgs,
        out: &'a mut (dyn Write + Send),
    ) -> ExecuteFuture<'a>;
}
