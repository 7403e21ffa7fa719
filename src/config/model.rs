// src/config/model.rs

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::action::CallArgs;

/// A library file as read from disk: action name to entry.
///
/// ```yaml
/// install:
///   cmd: yum install
///   arg: "%(pkg)s"
///   help: Install a package.
/// colors:
///   cmd: ls
///   args: ["--color", "%(color)s"]
/// ```
pub type RawLibrary = BTreeMap<String, ActionEntry>;

/// One entry of the library file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionEntry {
    /// Program, optionally followed by shell-style split tokens that become
    /// leading argument templates.
    pub cmd: String,

    /// Extra argument templates appended after the tokens of `cmd`.
    #[serde(default)]
    pub args: Option<Vec<String>>,

    /// Shorthand for a single-element `args`.
    #[serde(default)]
    pub arg: Option<String>,

    /// Free text reported verbatim to clients.
    #[serde(default)]
    pub help: Option<String>,

    /// Older spelling of `help`; used only when `help` is absent.
    #[serde(default)]
    pub desc: Option<String>,
}

/// A single call submitted to the dispatcher.
///
/// Either `help` (echo it back) or `exec` (run the named action with `args`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallRequest {
    #[serde(default)]
    pub help: Option<String>,

    #[serde(default)]
    pub exec: Option<String>,

    #[serde(default, deserialize_with = "deserialize_args")]
    pub args: CallArgs,
}

impl CallRequest {
    pub fn help(text: impl Into<String>) -> Self {
        Self {
            help: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn exec(action: impl Into<String>, args: CallArgs) -> Self {
        Self {
            exec: Some(action.into()),
            args,
            ..Self::default()
        }
    }
}

/// Scalars accepted as argument values; YAML users write `count: 3`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Null(()),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Str(s) => f.write_str(s),
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Int(i) => write!(f, "{i}"),
            // Debug keeps the decimal point: 2.0 stays "2.0".
            ScalarValue::Float(x) => write!(f, "{x:?}"),
            ScalarValue::Null(()) => Ok(()),
        }
    }
}

fn deserialize_args<'de, D>(deserializer: D) -> Result<CallArgs, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, ScalarValue>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|(k, v)| match v {
            ScalarValue::Null(()) => Err(<D::Error as serde::de::Error>::custom(format!(
                "argument `{k}` has no value"
            ))),
            v => Ok((k, v.to_string())),
        })
        .collect()
}

/// Serialization format of a library or call source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Toml,
}

impl SourceFormat {
    /// `.toml` files are TOML; everything else (including stdin) is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SourceFormat::Toml,
            _ => SourceFormat::Yaml,
        }
    }
}
