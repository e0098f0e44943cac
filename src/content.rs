//! Placeable content: intrinsic size and kind.

use crate::error::LayoutError;

/// How a content item turns a transform into marks on the page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Raster image. Drawn into the unit square, so its final matrix carries
    /// the box size in its linear coefficients.
    RasterImage,
    /// Reusable form with its own coordinate system. Sizing goes through the
    /// transform's scale instead.
    ReusableForm,
}

/// Intrinsic geometry of a content item, in page units.
///
/// Only the geometry lives here; the object the backend draws is passed to
/// [`emit`](crate::emit) separately.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentItem {
    kind: ContentKind,
    width: f32,
    height: f32,
}

impl ContentItem {
    /// Create a content item. Both dimensions must be finite and positive.
    pub fn new(kind: ContentKind, width: f32, height: f32) -> Result<Self, LayoutError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidContentDimension);
        }
        Ok(Self {
            kind,
            width,
            height,
        })
    }

    /// Shorthand for a [`ContentKind::RasterImage`].
    pub fn raster(width: f32, height: f32) -> Result<Self, LayoutError> {
        Self::new(ContentKind::RasterImage, width, height)
    }

    /// Shorthand for a [`ContentKind::ReusableForm`].
    pub fn form(width: f32, height: f32) -> Result<Self, LayoutError> {
        Self::new(ContentKind::ReusableForm, width, height)
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Intrinsic width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Intrinsic height.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_form(&self) -> bool {
        self.kind == ContentKind::ReusableForm
    }

    /// Final matrix coefficients for an accumulated transform.
    ///
    /// Raster images scale the linear part by the drawn box so the unit
    /// square lands on it. Forms take the accumulator as is.
    pub(crate) fn matrix_coefficients(&self, coefficients: [f32; 6], box_w: f32, box_h: f32) -> [f32; 6] {
        let mut m = coefficients;
        if self.kind == ContentKind::RasterImage {
            m[0] *= box_w;
            m[1] *= box_w;
            m[2] *= box_h;
            m[3] *= box_h;
        }
        m
    }
}
