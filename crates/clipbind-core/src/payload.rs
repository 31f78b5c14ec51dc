//! The markup contract: where a trigger's payload comes from.
//!
//! A trigger carries either its payload literally (`data-clipboard-text`)
//! or a reference to another element whose text content is the payload
//! (`data-clipboard-target`). The web crate resolves a target against the
//! live document at click time, so later page mutations are respected.

/// Declared source of a trigger's copy payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// Copy this string as-is.
    Literal(String),
    /// Copy the text content of the element with this id.
    TargetId(String),
}

impl PayloadSource {
    /// Build a source from the two markup attributes. A literal value wins
    /// over a target reference; `None` when the element declares neither.
    ///
    /// Target values may be written selector-style (`"#snippet"`) or as a
    /// bare id (`"snippet"`).
    pub fn from_attrs(text: Option<String>, target: Option<String>) -> Option<Self> {
        if let Some(text) = text {
            return Some(Self::Literal(text));
        }
        let target = target?;
        let id = target.strip_prefix('#').unwrap_or(&target);
        if id.is_empty() {
            return None;
        }
        Some(Self::TargetId(id.to_string()))
    }
}
