//! Placement geometry for images and form objects on fixed-size page areas.
//!
//! Pure geometry — no drawing, no allocations in the core, `no_std` compatible.
//!
//! # Modules
//!
//! - [`transform`] — Affine transform accumulator and final placement matrix
//! - [`content`] — Intrinsic size and kind of placeable content
//! - [`area`] — Page rectangles, offered and occupied areas
//! - [`style`] — Style directives and default resolution
//! - [`layout`] — Single-node layout: scale, rotate, auto-scale, fit test
//! - [`emit`] — Draw-time position resolution and the backend sink

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod area;
pub mod content;
pub mod emit;
pub mod error;
pub mod layout;
pub mod style;
#[cfg(feature = "svg")]
pub mod svg;
pub mod transform;

pub use area::{LayoutArea, OccupiedArea, Rect};
pub use content::{ContentItem, ContentKind};
pub use emit::{PlacementInstruction, PlacementSink, Position, RelativeOffsets, emit};
pub use error::{LayoutError, StyleField};
pub use layout::{LayoutResult, PlacedContent, RotationFit, fit_rotated, layout};
pub use style::{ResolvedStyle, StyleDirectives};
pub use transform::{AffineTransform, Point, Transform2D};
