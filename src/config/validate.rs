// src/config/validate.rs

use tracing::debug;

use crate::action::{Action, ActionLibrary};
use crate::config::model::{ActionEntry, RawLibrary};
use crate::errors::{Result, ShacklesError};

impl TryFrom<ActionEntry> for Action {
    type Error = ShacklesError;

    /// Normalise one library entry.
    ///
    /// `cmd` is split shell-style; the first token is the program and the rest
    /// become leading templates. `args` or `arg` (never both) are appended.
    fn try_from(entry: ActionEntry) -> std::result::Result<Self, Self::Error> {
        let ActionEntry {
            cmd,
            args,
            arg,
            help,
            desc,
        } = entry;

        let mut tokens = shell_words::split(&cmd)
            .map_err(|e| ShacklesError::ConfigError(format!("cannot split cmd '{cmd}': {e}")))?
            .into_iter();

        let program = tokens
            .next()
            .ok_or_else(|| ShacklesError::ConfigError("`cmd` must not be empty".to_string()))?;

        let mut templates: Vec<String> = tokens.collect();
        match (args, arg) {
            (Some(_), Some(_)) => {
                return Err(ShacklesError::ConfigError(format!(
                    "cmd '{cmd}' sets both `args` and `arg`"
                )));
            }
            (Some(list), None) => templates.extend(list),
            (None, Some(single)) => templates.push(single),
            (None, None) => {}
        }

        Action::new(program, templates, help.or(desc))
    }
}

/// Build an [`ActionLibrary`] from parsed library data.
///
/// Entry errors are reported with the name of the offending action.
pub fn build_library(raw: RawLibrary) -> Result<ActionLibrary> {
    let mut library = ActionLibrary::new();

    for (name, entry) in raw {
        let action = Action::try_from(entry).map_err(|e| match e {
            ShacklesError::ConfigError(msg) => {
                ShacklesError::ConfigError(format!("action '{name}': {msg}"))
            }
            other => other,
        })?;
        debug!(action = %name, command = %action, "registered action");
        library.insert(name, action);
    }

    Ok(library)
}
