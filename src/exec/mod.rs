// src/exec/mod.rs

//! Execution layer.
//!
//! - [`backend`] defines the [`Executor`] capability the dispatcher drives.
//! - [`shell`] is the live implementation: it spawns the resolved command as
//!   a child process with `tokio::process::Command`.
//! - [`noop`] is the simulating implementation used for dry runs: it reports
//!   the resolved command instead of running it.

pub mod backend;
pub mod noop;
pub mod shell;

pub use backend::Executor;
pub use noop::{NoopExecutor, display_list};
pub use shell::{ShellExecutor, TIMEOUT_STATUS};
