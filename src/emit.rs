//! Turning a placed node into one draw instruction.
//!
//! The backend receives the content handle, the final matrix, and the page
//! position. It draws with `a, b, c, d` from the matrix and the position as
//! the translation; `e, f` are already folded into the position whenever a
//! translation distance was set.
//!
//! # Example
//!
//! ```
//! use zenplace::{
//!     emit, layout, ContentItem, LayoutArea, PlacementInstruction, Position, Rect, StyleDirectives,
//! };
//!
//! let image = ContentItem::raster(100.0, 50.0).unwrap();
//! let area = LayoutArea::new(1, Rect::new(0.0, 0.0, 200.0, 200.0));
//! let result = layout(&image, &area, &StyleDirectives::new()).unwrap();
//! let placed = result.placed().unwrap();
//!
//! let mut drawn: Vec<PlacementInstruction> = Vec::new();
//! emit(placed, &"logo.png", Position::Static, &mut drawn).unwrap();
//! assert_eq!((drawn[0].x, drawn[0].y), (0.0, 150.0));
//! ```

use crate::layout::PlacedContent;
use crate::transform::Transform2D;

/// How the node relates to its flow position when drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Position {
    /// Draw where layout put it.
    #[default]
    Static,
    /// Offset from the laid-out position for this draw only.
    Relative(RelativeOffsets),
}

/// CSS-style offsets for [`Position::Relative`].
///
/// A non-zero `left` wins over `right`, a non-zero `top` over `bottom`.
/// `top` moves down, `bottom` moves up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RelativeOffsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RelativeOffsets {
    /// Translation `(dx, dy)` in y-up page coordinates.
    pub fn translation(&self) -> (f32, f32) {
        let dx = if self.left != 0.0 { self.left } else { -self.right };
        let dy = if self.top != 0.0 { -self.top } else { self.bottom };
        (dx, dy)
    }
}

/// One placement call for the drawing backend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementInstruction {
    pub transform: Transform2D,
    /// Final page X.
    pub x: f32,
    /// Final page Y.
    pub y: f32,
}

impl PlacementInstruction {
    /// The matrix the backend concatenates: `[a, b, c, d, x, y]`.
    pub fn matrix(&self) -> [f32; 6] {
        let [a, b, c, d, _, _] = self.transform.coefficients();
        [a, b, c, d, self.x, self.y]
    }
}

/// Drawing backend that accepts placements of content handles `H`.
pub trait PlacementSink<H: ?Sized> {
    /// Backend failure, returned from [`emit`] unchanged.
    type Error;

    /// Draw `content` with `transform` at `(x, y)`.
    fn add_content(
        &mut self,
        content: &H,
        transform: &Transform2D,
        x: f32,
        y: f32,
    ) -> Result<(), Self::Error>;
}

/// Records instructions without drawing; handy for tests and previews.
#[cfg(feature = "alloc")]
impl<H: ?Sized> PlacementSink<H> for alloc::vec::Vec<PlacementInstruction> {
    type Error = core::convert::Infallible;

    fn add_content(
        &mut self,
        _content: &H,
        transform: &Transform2D,
        x: f32,
        y: f32,
    ) -> Result<(), Self::Error> {
        self.push(PlacementInstruction {
            transform: *transform,
            x,
            y,
        });
        Ok(())
    }
}

impl PlacedContent {
    /// Resolve the final draw position.
    ///
    /// Unset coordinates come from the occupied area: X from its left edge,
    /// Y from its bottom edge plus [`pivot_y`](Self::pivot_y). A relative
    /// offset moves a copy of the occupied area first; pinned coordinates
    /// ignore it.
    pub fn instruction(&self, position: Position) -> PlacementInstruction {
        let mut bbox = self.occupied.bbox;
        if let Position::Relative(offsets) = position {
            let (dx, dy) = offsets.translation();
            bbox = bbox.translate(dx, dy);
        }
        PlacementInstruction {
            transform: self.transform,
            x: self.fixed_x.unwrap_or(bbox.x),
            y: self.fixed_y.unwrap_or(bbox.y + self.pivot_y),
        }
    }
}

/// Issue the placement for `placed` to `sink`.
pub fn emit<H, S>(
    placed: &PlacedContent,
    content: &H,
    position: Position,
    sink: &mut S,
) -> Result<(), S::Error>
where
    H: ?Sized,
    S: PlacementSink<H> + ?Sized,
{
    let instruction = placed.instruction(position);
    log::trace!("placing at ({}, {})", instruction.x, instruction.y);
    sink.add_content(content, &instruction.transform, instruction.x, instruction.y)
}
