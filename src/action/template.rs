// src/action/template.rs

//! Named-placeholder substitution for argument templates.
//!
//! A template is a plain string that may embed `%(key)s` placeholders. `%%`
//! stands for a literal percent sign. Any other use of `%` is malformed.

use std::sync::LazyLock;

use regex::Regex;

use crate::action::CallArgs;
use crate::errors::{Result, ShacklesError};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:%|\(([^)]*)\)s)").expect("placeholder regex is valid")
});

/// Fill every placeholder in `template` from `args`.
///
/// Fails with [`ShacklesError::ArgumentFormat`] carrying the whole template
/// when a key is missing or the `%` syntax is malformed.
pub fn render(template: &str, args: &CallArgs) -> Result<String> {
    let malformed = || ShacklesError::ArgumentFormat(template.to_string());

    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let whole = caps.get(0).ok_or_else(malformed)?;

        let literal = &template[last..whole.start()];
        if literal.contains('%') {
            return Err(malformed());
        }
        out.push_str(literal);

        match caps.get(1) {
            Some(key) => {
                let value = args.get(key.as_str()).ok_or_else(malformed)?;
                out.push_str(value);
            }
            None => out.push('%'),
        }

        last = whole.end();
    }

    let rest = &template[last..];
    if rest.contains('%') {
        return Err(malformed());
    }
    out.push_str(rest);

    Ok(out)
}

/// Keys referenced by well-formed placeholders in `template`, in order of
/// appearance. Malformed fragments are skipped.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}
