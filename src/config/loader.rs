// src/config/loader.rs

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::action::ActionLibrary;
use crate::config::model::{CallRequest, RawLibrary, SourceFormat};
use crate::config::validate::build_library;
use crate::errors::{Result, ShacklesError};

/// Default library location, before `~` expansion.
pub const DEFAULT_LIBRARY: &str = "~/.shackles.yaml";

/// Expand a leading `~` or `~/` to the current user's home directory.
///
/// Paths without a leading tilde, and everything when no home directory is
/// known, are returned unchanged.
pub fn expand_home(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Parse library data in the given format into the raw entry map.
///
/// An empty or null document is rejected. An explicit empty mapping (`{}`)
/// is a valid library with no actions.
pub fn parse_library(contents: &str, format: SourceFormat) -> Result<RawLibrary> {
    let raw: Option<RawLibrary> = match format {
        _ if contents.trim().is_empty() => None,
        SourceFormat::Yaml => serde_yaml::from_str(contents)?,
        SourceFormat::Toml => Some(toml::from_str(contents)?),
    };
    raw.ok_or_else(|| ShacklesError::ConfigError("library document is empty".to_string()))
}

/// Read a library file and build the [`ActionLibrary`] from it.
///
/// A missing file is reported as [`ShacklesError::MissingFile`] before any
/// read is attempted.
pub fn load_library(path: impl AsRef<Path>) -> Result<ActionLibrary> {
    let path = path.as_ref();
    let contents = read_existing("library", path)?;
    let raw = parse_library(&contents, SourceFormat::from_path(path))?;
    let library = build_library(raw)?;
    debug!(path = %path.display(), actions = library.len(), "loaded action library");
    Ok(library)
}

/// Read a call request from a file.
pub fn load_call(path: impl AsRef<Path>) -> Result<CallRequest> {
    let path = path.as_ref();
    let contents = read_existing("call", path)?;
    parse_call(&contents, SourceFormat::from_path(path))
}

/// Read a YAML call request from any reader (typically stdin).
pub fn load_call_from_reader(mut reader: impl Read) -> Result<CallRequest> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_call(&contents, SourceFormat::Yaml)
}

fn parse_call(contents: &str, format: SourceFormat) -> Result<CallRequest> {
    let call: Option<CallRequest> = match format {
        _ if contents.trim().is_empty() => None,
        SourceFormat::Yaml => serde_yaml::from_str(contents)?,
        SourceFormat::Toml => Some(toml::from_str(contents)?),
    };
    call.ok_or_else(|| ShacklesError::MalformedRequest("call request is empty".to_string()))
}

fn read_existing(role: &str, path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ShacklesError::MissingFile {
            role: role.to_string(),
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}
