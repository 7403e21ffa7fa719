// src/action/mod.rs

//! Actions and the library that names them.
//!
//! - [`Action`] is an immutable command template: a program plus ordered
//!   argument templates.
//! - [`ActionLibrary`] maps unique names to actions. It is built once (see
//!   [`crate::config`]) and only read afterwards.
//! - [`template`] implements the `%(key)s` substitution used by
//!   [`Action::resolve`].

pub mod template;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use crate::errors::{Result, ShacklesError};

/// Call-time arguments substituted into templates.
pub type CallArgs = BTreeMap<String, String>;

/// A named, reusable template for an external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    program: String,
    templates: Vec<String>,
    help_text: Option<String>,
}

impl Action {
    /// Create an action. `program` must be non-empty.
    pub fn new(
        program: impl Into<String>,
        templates: Vec<String>,
        help_text: Option<String>,
    ) -> Result<Self> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(ShacklesError::ConfigError(
                "action program must not be empty".to_string(),
            ));
        }
        Ok(Self {
            program,
            templates,
            help_text,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    /// Argument names referenced by this action's templates.
    pub fn required_args(&self) -> BTreeSet<&str> {
        self.templates
            .iter()
            .flat_map(|t| template::placeholders(t))
            .collect()
    }

    /// Resolve into `[program, arg...]`.
    ///
    /// Every template is resolved before anything is returned, so a failure
    /// leaves no partially built command behind. Extra keys in `args` are
    /// ignored.
    pub fn resolve(&self, args: &CallArgs) -> Result<Vec<String>> {
        let mut exe = Vec::with_capacity(self.templates.len() + 1);
        exe.push(self.program.clone());
        for t in &self.templates {
            exe.push(template::render(t, args)?);
        }
        Ok(exe)
    }
}

/// Shell-quoted command line; splitting it back yields the same tokens.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = std::iter::once(&self.program).chain(&self.templates);
        f.write_str(&shell_words::join(tokens))
    }
}

/// The set of actions that can be run on this system.
#[derive(Debug, Clone, Default)]
pub struct ActionLibrary {
    actions: BTreeMap<String, Action>,
}

impl ActionLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under `name`, replacing any earlier definition.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        program: impl Into<String>,
        templates: Vec<String>,
        help_text: Option<String>,
    ) -> Result<()> {
        let action = Action::new(program, templates, help_text)?;
        self.insert(name, action);
        Ok(())
    }

    /// Insert an already constructed action (last write wins).
    pub fn insert(&mut self, name: impl Into<String>, action: Action) {
        let name = name.into();
        if self.actions.insert(name.clone(), action).is_some() {
            debug!(action = %name, "replacing existing action definition");
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&Action> {
        self.actions
            .get(name)
            .ok_or_else(|| ShacklesError::ActionNotFound(name.to_string()))
    }

    /// Look up `name` and resolve it against `args`.
    pub fn resolve(&self, name: &str, args: &CallArgs) -> Result<Vec<String>> {
        self.lookup(name)?.resolve(args)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate actions in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Action)> {
        self.actions.iter().map(|(k, v)| (k.as_str(), v))
    }
}
