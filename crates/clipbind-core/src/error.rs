//! Copy error taxonomy.
//!
//! None of these are fatal or user-facing: a page with no clipboard
//! capability, or a trigger with nothing to copy, degrades to doing
//! nothing. The web layer logs at warn level and moves on.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CopyError {
    /// The platform exposes no clipboard capability (no window, or the
    /// Clipboard API is missing in this environment).
    #[error("clipboard capability unavailable")]
    ClipboardUnavailable,

    /// The clipboard denied or could not complete the write, e.g. a
    /// missing permission.
    #[error("clipboard write rejected: {0}")]
    WriteRejected(String),

    /// The trigger declares no literal payload and its target element
    /// could not be resolved at click time.
    #[error("no payload: {0}")]
    MissingPayload(String),
}
