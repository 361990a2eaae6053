//! Validated task text and its line-break rendering convention.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal two-character marker users type into a task for a line break.
const LINE_BREAK_MARKER: &str = "/n";

/// User-authored task text.
///
/// The text is stored verbatim; the only formatting convention is the
/// literal `/n` marker, rendered as a line break by [`TaskBody::to_html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskBody(String);

impl TaskBody {
    /// Creates validated task text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyBody`] if the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyBody);
        }
        Ok(Self(raw))
    }

    /// Returns the stored text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the text as an HTML fragment for the task list.
    ///
    /// The text is HTML-escaped and the FIRST `/n` marker becomes a
    /// `<br />`. Only the first occurrence is replaced; any later markers
    /// render literally. That is the shipped list-rendering behaviour,
    /// preserved as-is rather than extended to every occurrence.
    #[must_use]
    pub fn to_html(&self) -> String {
        escape_html(&self.0).replacen(LINE_BREAK_MARKER, "<br />", 1)
    }
}

impl AsRef<str> for TaskBody {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Escapes a value for safe inclusion in an HTML fragment.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
