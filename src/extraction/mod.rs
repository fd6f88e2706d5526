use std::borrow::Cow;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

mod scanner;

use scanner::occurrences;

/// Positional marker written in place of each named parameter.
pub const POSITIONAL_MARKER: &str = "?";

/// Which character introduces a named parameter in query text.
///
/// # Examples
/// ```rust
/// use sql_binding::prelude::*;
///
/// assert_eq!(ParameterPrefix::Colon.resolve("select :a"), Some(':'));
/// assert_eq!(ParameterPrefix::Auto.resolve("select @a"), Some('@'));
/// assert_eq!(ParameterPrefix::Auto.resolve("select 1"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterPrefix {
    /// `:name`
    Colon,
    /// `@name`
    At,
    /// Pick `@` if the query contains one, otherwise `:`.
    ///
    /// Detection looks at the raw text, so an `@` inside a string literal
    /// (an email address, say) selects `@` for a `:`-style query, and binding
    /// then fails with `MissingField`. Pin `Colon` or `At` for such queries.
    #[default]
    Auto,
}

impl ParameterPrefix {
    #[must_use]
    pub fn resolve(self, query: &str) -> Option<char> {
        match self {
            ParameterPrefix::Colon => Some(':'),
            ParameterPrefix::At => Some('@'),
            ParameterPrefix::Auto => detect_prefix(query),
        }
    }
}

/// Guess the parameter prefix used by `query`: `@` wins over `:`.
///
/// Like extraction, this does not skip string literals or comments.
#[must_use]
pub fn detect_prefix(query: &str) -> Option<char> {
    if query.contains('@') {
        Some('@')
    } else if query.contains(':') {
        Some(':')
    } else {
        None
    }
}

/// Rewrite named parameters to positional markers.
///
/// Returns the rewritten query and the parameter names in source order, one
/// entry per occurrence. A name runs from just after `prefix` up to the next
/// comma, space, closing parenthesis, or the end of the text, and is trimmed of
/// surrounding whitespace.
///
/// The input is borrowed unchanged when it is blank or contains no `prefix`.
///
/// The scan is purely textual: a `prefix` inside a string literal or comment
/// is treated as a parameter, and so is the second colon of a `::type` cast.
///
/// ```rust
/// use sql_binding::prelude::*;
///
/// let (sql, names) =
///     extract_named_parameters("SELECT * FROM t WHERE a = :name AND b = :age", ':');
/// assert_eq!(sql, "SELECT * FROM t WHERE a = ? AND b = ?");
/// assert_eq!(names, vec!["name", "age"]);
/// ```
#[must_use]
pub fn extract_named_parameters(query: &str, prefix: char) -> (Cow<'_, str>, Vec<String>) {
    if query.trim().is_empty() || !query.contains(prefix) {
        return (Cow::Borrowed(query), Vec::new());
    }

    let found = occurrences(query, prefix);
    let mut names = Vec::with_capacity(found.len());
    let mut sql = String::with_capacity(query.len());
    let mut copied = 0;
    for occurrence in &found {
        sql.push_str(&query[copied..occurrence.start]);
        sql.push_str(POSITIONAL_MARKER);
        copied = occurrence.end;
        names.push(occurrence.raw.trim().to_string());
    }
    sql.push_str(&query[copied..]);

    (Cow::Owned(sql), names)
}

/// [`extract_named_parameters`] with the prefix picked by [`detect_prefix`].
#[must_use]
pub fn extract_named_parameters_auto(query: &str) -> (Cow<'_, str>, Vec<String>) {
    match detect_prefix(query) {
        Some(prefix) => extract_named_parameters(query, prefix),
        None => (Cow::Borrowed(query), Vec::new()),
    }
}
