#![forbid(unsafe_code)]

//! Proportional panel-group layout: sizes, bounds, and drag resolution.
//!
//! # Role in sash
//! `sash-layout` owns the one piece of real machinery in the library: a group
//! of N adjacent regions whose percentage sizes always sum to 100, resized by
//! dragging the handles between them under per-region min/max bounds.
//!
//! # Primary responsibilities
//! - **Declaration model**: explicit ordered [`GroupItem`] list (regions and
//!   handles as tagged variants) with caller-supplied [`RegionId`]s.
//! - **Initialization**: [`init::initial_sizes`] derives sizes from partially
//!   specified defaults and normalizes the total to 100.
//! - **Drag resolution**: [`resolver::resolve_pair`] clamps exactly the two
//!   flanking regions with one slack-reconciliation pass.
//! - **Session lifecycle**: [`PanelGroup`] runs the Idle→Dragging→Idle
//!   machine against snapshots taken at gesture start.
//!
//! # How it fits in the system
//! Host input feeds [`sash_core::event::DragEvent`]s into
//! [`PanelGroup::apply`]; `sash-render` turns [`PanelGroup::sizes`] back into
//! pixel geometry every frame. All of it is synchronous and single-threaded.

pub mod drag;
pub mod group;
pub mod init;
pub mod region;
pub mod resolver;

pub use drag::{DragEffect, DragNoopReason, DragSnapshot, DragState};
pub use group::{DEFAULT_HANDLE_THICKNESS_PX, PanelGroup};
pub use region::{
    DEFAULT_MAX_SIZE_PCT, DEFAULT_MIN_SIZE_PCT, GroupItem, HandleBinding, HandleOptions,
    RegionDescriptor, RegionId, SizeBounds,
};
pub use resolver::ResolvedPair;
pub use sash_core::event::{DragEvent, PointerDelta};
pub use sash_core::geometry::{Axis, PCT_EPSILON};
