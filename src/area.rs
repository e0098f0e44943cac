//! Page rectangles and layout areas.
//!
//! Coordinates are y-up: a rect's bottom edge is at `y` and its top edge at
//! `y + height`.

use crate::error::LayoutError;

/// Axis-aligned rectangle in page coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Move down by `distance`, keeping the size.
    pub fn move_down(mut self, distance: f32) -> Self {
        self.y -= distance;
        self
    }

    /// Move right by `distance`, keeping the size.
    pub fn move_right(mut self, distance: f32) -> Self {
        self.x += distance;
        self
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        self.move_right(dx).move_down(-dy)
    }

    /// Same origin, zero size.
    pub fn collapsed(self) -> Self {
        Self::new(self.x, self.y, 0.0, 0.0)
    }
}

/// A rectangle on a specific page.
///
/// Used both for the space offered to a node and for the space the node
/// ends up consuming ([`OccupiedArea`]).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayoutArea {
    /// 1-based page number.
    pub page: u32,
    pub bbox: Rect,
}

/// Space a placed node consumes in its page's flow.
pub type OccupiedArea = LayoutArea;

impl LayoutArea {
    /// Create a layout area.
    pub const fn new(page: u32, bbox: Rect) -> Self {
        Self { page, bbox }
    }

    /// Reject non-finite coordinates and negative sizes.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let r = &self.bbox;
        let finite = r.x.is_finite() && r.y.is_finite() && r.width.is_finite() && r.height.is_finite();
        if finite && r.width >= 0.0 && r.height >= 0.0 {
            Ok(())
        } else {
            Err(LayoutError::InvalidArea)
        }
    }
}
