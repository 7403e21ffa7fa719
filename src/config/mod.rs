// src/config/mod.rs

//! Library and call-request configuration.
//!
//! Responsibilities:
//! - Define the serde-backed data model (`model.rs`).
//! - Read library / call sources from disk or stdin (`loader.rs`).
//! - Normalise library entries into actions (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{expand_home, load_call, load_call_from_reader, load_library, parse_library};
pub use model::{ActionEntry, CallRequest, RawLibrary, SourceFormat};
pub use validate::build_library;
