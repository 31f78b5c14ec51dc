//! Per-trigger label state machine.
//!
//! Each copy trigger owns one `Trigger`. The platform layer feeds it copy
//! outcomes and timer expirations; the machine answers with the effects to
//! apply (label writes, selection clearing, timer scheduling). Keeping the
//! transitions here makes the "supersede, don't stack" revert rule a plain
//! generation check instead of incidental closure behavior.

use std::time::Duration;

/// Visible state of a trigger's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelState {
    /// Showing its default label.
    Idle,
    /// Showing the confirmation label, with a revert pending.
    Confirming,
}

/// Commands emitted by the machine for the platform layer to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set the trigger's visible label to the confirmation text.
    ShowConfirmation,
    /// Clear any text selection in the document.
    ClearSelection,
    /// Schedule a one-shot revert timer tagged with `generation`.
    ScheduleRevert { generation: u64, delay: Duration },
    /// Restore the trigger's default label.
    RestoreLabel,
}

/// State record for a single copy trigger.
///
/// The generation counter is the cancellable timer handle: every success
/// bumps it, so a revert scheduled under an older generation is stale and
/// ignored when it fires. Scheduling a new timer may also cancel the old
/// one eagerly; the generation check holds either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    state: LabelState,
    generation: u64,
}

impl Trigger {
    pub fn new() -> Self {
        Self {
            state: LabelState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> LabelState {
        self.state
    }

    /// Current revert generation. Only the matching expiration restores.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A copy write completed successfully.
    ///
    /// Effect order matches the observed behavior: confirmation label first,
    /// then selection clearing, then the revert timer.
    pub fn copy_succeeded(&mut self, delay: Duration) -> Vec<Effect> {
        self.state = LabelState::Confirming;
        self.generation += 1;
        vec![
            Effect::ShowConfirmation,
            Effect::ClearSelection,
            Effect::ScheduleRevert {
                generation: self.generation,
                delay,
            },
        ]
    }

    /// A copy write was rejected. No visible feedback; the caller may log.
    pub fn copy_failed(&mut self) -> Vec<Effect> {
        Vec::new()
    }

    /// A revert timer fired. Restores the label only if `generation` is
    /// still current; expirations superseded by a newer success are no-ops.
    pub fn revert_elapsed(&mut self, generation: u64) -> Vec<Effect> {
        if generation != self.generation || self.state != LabelState::Confirming {
            return Vec::new();
        }
        self.state = LabelState::Idle;
        vec![Effect::RestoreLabel]
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new()
    }
}
