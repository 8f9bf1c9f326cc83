use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Failure while substituting `{{ env.VAR }}` placeholders
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// Placeholder names a variable that is unset and has no default
    #[error("environment variable not found: `{0}`")]
    MissingVariable(String),

    /// Placeholder is not scoped with `env.`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.NAME }}` or `{{ env.NAME | default("value") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder regex is valid")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw configuration text
///
/// A placeholder may carry a fallback, `{{ env.VAR | default("x") }}`, used
/// when the variable is unset. Comment lines are copied through untouched
/// so commented-out secrets never have to exist in the environment.
///
/// # Errors
///
/// Returns an error when a referenced variable is unset without a default,
/// or when a placeholder uses a scope other than `env.`
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        lines.push(expand_line(line)?);
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, ExpandError> {
    let mut failure = None;

    let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
        if failure.is_some() {
            return String::new();
        }

        match resolve(&caps[1], caps.get(2).map(|m| m.as_str())) {
            Ok(value) => value,
            Err(e) => {
                failure = Some(e);
                String::new()
            }
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(expanded.into_owned()),
    }
}

fn resolve(key: &str, default: Option<&str>) -> Result<String, ExpandError> {
    let Some(name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_owned()));
    };

    std::env::var(name).or_else(|_| {
        default
            .map(str::to_owned)
            .ok_or_else(|| ExpandError::MissingVariable(name.to_owned()))
    })
}
