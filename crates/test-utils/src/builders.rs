#![allow(dead_code)]

use shackles::action::ActionLibrary;
use shackles::config::{build_library, ActionEntry, RawLibrary};

/// Builder for a raw library, so tests go through the same normalisation as
/// library files.
pub struct LibraryBuilder {
    raw: RawLibrary,
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawLibrary::new(),
        }
    }

    pub fn with_action(mut self, name: &str, entry: ActionEntry) -> Self {
        self.raw.insert(name.to_string(), entry);
        self
    }

    pub fn raw(self) -> RawLibrary {
        self.raw
    }

    pub fn build(self) -> ActionLibrary {
        build_library(self.raw).expect("Failed to build valid library from builder")
    }
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ActionEntry`.
pub struct ActionEntryBuilder {
    entry: ActionEntry,
}

impl ActionEntryBuilder {
    pub fn new(cmd: &str) -> Self {
        Self {
            entry: ActionEntry {
                cmd: cmd.to_string(),
                args: None,
                arg: None,
                help: None,
                desc: None,
            },
        }
    }

    pub fn arg(mut self, template: &str) -> Self {
        self.entry.arg = Some(template.to_string());
        self
    }

    pub fn args(mut self, templates: &[&str]) -> Self {
        let args = self.entry.args.get_or_insert(vec![]);
        args.extend(templates.iter().map(|t| t.to_string()));
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.entry.help = Some(text.to_string());
        self
    }

    pub fn build(self) -> ActionEntry {
        self.entry
    }
}
