//! Coordinator state: which formation is active and which locket (if any)
//! holds exclusive focus.
//!
//! [`StateStore`] is the single owner of [`CoordinatorState`]. Everything
//! else reads a snapshot or a borrow and asks the store to mutate.

mod store;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
pub use store::{StateStore, SubscriptionId};

// ---------------------------------------------------------------------------
// FormationMode
// ---------------------------------------------------------------------------

/// Global arrangement of the decorative objects.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormationMode {
    /// Objects float at their scatter positions.
    #[default]
    Scattered,
    /// Objects gather into the tree shape.
    Assembled,
}

impl FormationMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Scattered => Self::Assembled,
            Self::Assembled => Self::Scattered,
        }
    }

    /// Whether this is the assembled (tree) arrangement.
    #[must_use]
    pub fn is_assembled(self) -> bool {
        self == Self::Assembled
    }
}

impl fmt::Display for FormationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scattered => f.write_str("scattered"),
            Self::Assembled => f.write_str("assembled"),
        }
    }
}

// ---------------------------------------------------------------------------
// LocketId
// ---------------------------------------------------------------------------

/// Stable identifier of one decorative object, e.g. `"locket-3"`.
///
/// Backed by an `Arc<str>` so state snapshots clone without allocating.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LocketId(Arc<str>);

impl LocketId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The conventional identifier of the `index`-th generated locket.
    #[must_use]
    pub fn indexed(index: usize) -> Self {
        Self::new(format!("locket-{index}"))
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocketId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LocketId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl fmt::Display for LocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// CoordinatorState
// ---------------------------------------------------------------------------

/// The whole coordinator state tuple.
///
/// Mutations always replace the entire value, so a reader can never see a
/// formation from one write paired with a focus from another.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CoordinatorState {
    /// Active arrangement.
    pub formation: FormationMode,
    /// Focused locket, if any. At most one by construction.
    pub focus: Option<LocketId>,
}

impl CoordinatorState {
    /// Whether some locket currently holds focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    /// Whether `id` is the focused locket.
    #[must_use]
    pub fn is_focused_on(&self, id: &LocketId) -> bool {
        self.focus.as_ref() == Some(id)
    }
}

impl fmt::Display for CoordinatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.focus {
            Some(id) => write!(f, "({}, {id})", self.formation),
            None => write!(f, "({}, none)", self.formation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formation_toggled_alternates() {
        use FormationMode::{Assembled, Scattered};
        assert_eq!(Scattered.toggled(), Assembled);
        assert_eq!(Assembled.toggled(), Scattered);
        assert_eq!(FormationMode::default(), Scattered);
    }

    #[test]
    fn locket_id_conversions_agree() {
        let a = LocketId::indexed(3);
        let b = LocketId::from("locket-3");
        let c = LocketId::from(String::from("locket-3"));
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_str(), "locket-3");
    }

    #[test]
    fn focus_queries() {
        let state = CoordinatorState {
            formation: FormationMode::Scattered,
            focus: Some("locket-1".into()),
        };
        assert!(state.is_focused());
        assert!(state.is_focused_on(&"locket-1".into()));
        assert!(!state.is_focused_on(&"locket-2".into()));
        assert_eq!(state.to_string(), "(scattered, locket-1)");
        let state = CoordinatorState::default();
        assert_eq!(state.to_string(), "(scattered, none)");
    }

    #[test]
    fn formation_serializes_snake_case() {
        let json = serde_json::to_string(&FormationMode::Assembled).unwrap();
        assert_eq!(json, "\"assembled\"");
    }
}
