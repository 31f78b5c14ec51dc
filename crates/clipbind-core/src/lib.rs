//! Platform-free core of clipbind: the per-trigger label state machine,
//! the payload-source model for the markup contract, binder configuration,
//! and the copy error taxonomy.
//!
//! Nothing in this crate touches the DOM or the clipboard. The web crate
//! drives [`trigger::Trigger`] with copy outcomes and applies the effects
//! it emits against the real page.

pub mod config;
pub mod error;
pub mod payload;
pub mod trigger;

pub use config::BinderConfig;
pub use error::CopyError;
pub use payload::PayloadSource;
pub use trigger::{Effect, LabelState, Trigger};
