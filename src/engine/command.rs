//! The coordinator's complete interactive vocabulary.
//!
//! Every user-facing operation is represented as a `Command`, whether it
//! comes from a click, a key press, a UI button or a programmatic call.
//! Consumers construct commands and pass them to
//! [`Coordinator::execute`](super::Coordinator::execute) or
//! [`Coordinator::queue`](super::Coordinator::queue).

use crate::state::{FormationMode, LocketId};

/// A discrete operation the coordinator can perform.
///
/// ```ignore
/// coordinator.execute(Command::FocusLocket { id: "locket-3".into() });
/// coordinator.execute(Command::ClearFocus);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ── Formation ───────────────────────────────────────────────────
    /// Flip between scattered and tree. Rejected while a locket is
    /// focused.
    ToggleFormation,

    /// Set the formation directly, regardless of focus.
    SetFormation {
        /// Mode to switch to.
        mode: FormationMode,
    },

    // ── Focus ───────────────────────────────────────────────────────
    /// Give a locket exclusive focus, replacing any previous focus.
    FocusLocket {
        /// Locket to focus.
        id: LocketId,
    },

    /// Release focus (click on empty space).
    ClearFocus,
}
