#![forbid(unsafe_code)]

//! Pointer drag events delivered by the host gesture runtime.
//!
//! The enclosing input layer (platform gesture recognizer, terminal mouse
//! decoder, test harness) is responsible for hit-testing handles and tracking
//! the raw pointer. It hands the panel group a small, already-classified
//! event stream.
//!
//! # Invariants
//!
//! 1. Every [`DragEvent::Move`] carries the *cumulative* displacement from
//!    the gesture origin, never a per-move increment. The engine resolves
//!    each move against a snapshot taken at [`DragEvent::Press`], so replaying
//!    the same move twice is idempotent and rounding error never compounds.
//! 2. Events for one group arrive in temporal order on a single thread; the
//!    engine performs no internal queuing or reordering.
//! 3. [`DragEvent::Cancel`] is delivered when the host reclaims the pointer
//!    (focus loss, OS gesture takeover). The engine treats it exactly like
//!    [`DragEvent::Release`]: no rollback.

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// Cumulative pointer displacement since the gesture origin, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerDelta {
    pub dx: f32,
    pub dy: f32,
}

impl PointerDelta {
    /// Zero displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a displacement from its components.
    #[inline]
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// The component of this displacement along a group's main axis.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f32 {
        axis.main_delta(self.dx, self.dy)
    }
}

/// One classified pointer event for a panel group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragEvent {
    /// Pointer went down on a handle. `handle_index` counts handles in the
    /// group's declaration order.
    Press { handle_index: usize },
    /// Pointer moved while down. Displacement is measured from the press
    /// position (see module invariants).
    Move { delta: PointerDelta },
    /// Pointer released normally.
    Release,
    /// Gesture terminated early by the host. Identical effect to `Release`.
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_projects_onto_main_axis() {
        let delta = PointerDelta::new(24.0, -6.0);
        assert_eq!(delta.along(Axis::Horizontal), 24.0);
        assert_eq!(delta.along(Axis::Vertical), -6.0);
    }

    #[test]
    fn zero_delta_is_zero_on_both_axes() {
        assert_eq!(PointerDelta::ZERO.along(Axis::Horizontal), 0.0);
        assert_eq!(PointerDelta::ZERO.along(Axis::Vertical), 0.0);
    }
}
