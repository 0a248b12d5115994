#![forbid(unsafe_code)]

//! Drag session lifecycle types.
//!
//! One drag session per group at a time:
//!
//! ```text
//! Idle -> Dragging -> Idle
//! ```
//!
//! The session captures a [`DragSnapshot`] when the pointer goes down and
//! resolves every subsequent move against that snapshot, so moves carry
//! cumulative displacement and never compound rounding error. Release and
//! cancel are identical: the last resolved sizes stay in effect.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::region::HandleBinding;

/// Sizes and axis extent frozen at gesture start.
///
/// Lives for exactly one drag session and is discarded on release/cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSnapshot {
    /// Copy of the group's ordered sizes at gesture start.
    pub sizes: Vec<f32>,
    /// Main-axis pixel length at gesture start; the pixel→percent conversion
    /// factor for this whole session, even if the container resizes mid-drag.
    pub axis_extent_px: f32,
}

/// Lifecycle state of a group's drag session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Handle being dragged, in declaration order.
        handle_index: usize,
        /// Region pair the handle resizes.
        binding: HandleBinding,
        snapshot: DragSnapshot,
    },
}

impl DragState {
    /// Whether a drag session is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Why a drag event was safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    /// A press arrived while another handle's session is active; multi-touch
    /// on two handles is out of scope, so the second gesture is dropped.
    DragInProgress,
    /// The pressed handle has no adjacent region pair (edge handle or two
    /// handles back to back).
    InertHandle,
    /// The pressed handle index does not exist in this group.
    UnknownHandle,
    /// A move/release arrived with no active session.
    NotDragging,
    /// The snapshot's axis extent is zero or negative, so pixel displacement
    /// cannot be converted to a percentage.
    UnusableExtent,
}

impl fmt::Display for DragNoopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DragInProgress => write!(f, "another drag session is already active"),
            Self::InertHandle => write!(f, "handle has no adjacent region pair"),
            Self::UnknownHandle => write!(f, "handle index out of range"),
            Self::NotDragging => write!(f, "no drag session is active"),
            Self::UnusableExtent => write!(f, "axis extent unusable for pixel conversion"),
        }
    }
}

/// Effect of feeding one drag event to a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    /// A session started on `handle_index`.
    Started { handle_index: usize },
    /// The flanking pair was resolved to new sizes.
    Updated {
        left_index: usize,
        right_index: usize,
        left_pct: f32,
        right_pct: f32,
    },
    /// The session ended; last resolved sizes remain in effect.
    Ended { handle_index: usize },
    /// The event was ignored.
    Noop { reason: DragNoopReason },
}

impl DragEffect {
    /// Shorthand used by the group's event dispatch.
    #[must_use]
    pub const fn noop(reason: DragNoopReason) -> Self {
        Self::Noop { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default_and_not_dragging() {
        assert!(!DragState::default().is_dragging());
    }

    #[test]
    fn noop_reasons_render_for_host_logs() {
        let rendered = format!("{}", DragNoopReason::InertHandle);
        assert!(rendered.contains("no adjacent region pair"));
    }

    #[test]
    fn drag_state_snapshot_shape_is_stable() {
        let state = DragState::Dragging {
            handle_index: 0,
            binding: HandleBinding { left: 0, right: 1 },
            snapshot: DragSnapshot {
                sizes: vec![50.0, 50.0],
                axis_extent_px: 800.0,
            },
        };
        let json = serde_json::to_value(&state).expect("serialize");
        assert_eq!(json["state"], "dragging");
        assert_eq!(json["snapshot"]["axis_extent_px"], 800.0);
    }
}
