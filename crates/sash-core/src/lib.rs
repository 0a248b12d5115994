#![forbid(unsafe_code)]

//! Core: pointer event model and geometry primitives.
//!
//! # Role in sash
//! `sash-core` is the input-facing layer. It defines the typed drag events a
//! host gesture runtime delivers to a panel group, plus the small float
//! geometry vocabulary (axes, pixel rects, percentage normalization) shared
//! by the layout engine and the compositor adapter.
//!
//! # How it fits in the system
//! The layout engine (`sash-layout`) consumes [`event::DragEvent`] values and
//! mutates proportional sizes; the compositor adapter (`sash-render`) turns
//! those sizes back into pixel geometry using [`geometry::Axis`] and
//! [`geometry::RectF`]. Neither direction involves any I/O here.

pub mod event;
pub mod geometry;

pub use event::{DragEvent, PointerDelta};
pub use geometry::{Axis, RectF};
