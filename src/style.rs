//! Style directives for a placed node and their resolution.
//!
//! Every directive is optional. [`StyleDirectives::resolve`] fills in the
//! defaults once, before layout starts:
//!
//! | Directive | Default |
//! |---|---|
//! | `width` | intrinsic width |
//! | `height` | ignored; derived from width and the intrinsic aspect ratio |
//! | `horizontal_scaling`, `vertical_scaling` | `1.0` |
//! | `rotation_angle` | `0.0` |
//! | `auto_scale` | `false` |
//! | `x`, `y`, `translation` | unset |
//!
//! # Example
//!
//! ```
//! use zenplace::{ContentItem, StyleDirectives};
//!
//! let image = ContentItem::raster(200.0, 100.0).unwrap();
//! let resolved = StyleDirectives::new()
//!     .width(100.0)
//!     .rotation_angle(0.5)
//!     .resolve(&image)
//!     .unwrap();
//!
//! assert_eq!(resolved.width, 100.0);
//! assert_eq!(resolved.height, 50.0);
//! assert_eq!(resolved.horizontal_scaling, 1.0);
//! ```

use crate::area::LayoutArea;
use crate::content::ContentItem;
use crate::error::{LayoutError, StyleField};

/// Style directives for one content node.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StyleDirectives {
    pub width: Option<f32>,
    /// Kept for callers that record it; layout derives height from width.
    pub height: Option<f32>,
    /// Fixed page X. With `y` also set the node leaves the flow.
    pub x: Option<f32>,
    /// Fixed page Y.
    pub y: Option<f32>,
    /// Counter-clockwise rotation in radians.
    pub rotation_angle: Option<f32>,
    pub horizontal_scaling: Option<f32>,
    pub vertical_scaling: Option<f32>,
    /// Shrink rotated content until it fits the available area.
    pub auto_scale: Option<bool>,
    /// Extra translation applied after the fit test.
    pub translation: Option<(f32, f32)>,
}

impl StyleDirectives {
    /// No directives; everything resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set explicit height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Pin to fixed page coordinates.
    pub fn fixed_position(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Pin only the X coordinate.
    pub fn fixed_x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    /// Pin only the Y coordinate.
    pub fn fixed_y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    /// Set rotation in radians, counter-clockwise.
    pub fn rotation_angle(mut self, radians: f32) -> Self {
        self.rotation_angle = Some(radians);
        self
    }

    /// Set both scaling factors.
    pub fn scale(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_scaling = Some(horizontal);
        self.vertical_scaling = Some(vertical);
        self
    }

    pub fn horizontal_scaling(mut self, factor: f32) -> Self {
        self.horizontal_scaling = Some(factor);
        self
    }

    pub fn vertical_scaling(mut self, factor: f32) -> Self {
        self.vertical_scaling = Some(factor);
        self
    }

    /// Enable or disable shrink-to-fit after rotation.
    pub fn auto_scale(mut self, enabled: bool) -> Self {
        self.auto_scale = Some(enabled);
        self
    }

    /// Translate the placed content by `(dx, dy)` after layout.
    pub fn translate(mut self, dx: f32, dy: f32) -> Self {
        self.translation = Some((dx, dy));
        self
    }

    /// Resolve defaults against the content's intrinsic size.
    pub fn resolve(&self, content: &ContentItem) -> Result<ResolvedStyle, LayoutError> {
        self.validate()?;

        let intrinsic_w = content.width();
        let intrinsic_h = content.height();
        let width = self.width.unwrap_or(intrinsic_w);
        let height = width / intrinsic_w * intrinsic_h;

        let mut horizontal_scaling = self.horizontal_scaling.unwrap_or(1.0);
        let mut vertical_scaling = self.vertical_scaling.unwrap_or(1.0);
        // Forms carry explicit sizing in their scale factors.
        if content.is_form() && width != intrinsic_w {
            horizontal_scaling *= width / intrinsic_w;
            vertical_scaling *= height / intrinsic_h;
        }

        let resolved = ResolvedStyle {
            width,
            height,
            horizontal_scaling,
            vertical_scaling,
            rotation_angle: self.rotation_angle.unwrap_or(0.0),
            auto_scale: self.auto_scale.unwrap_or(false),
            fixed_x: self.x,
            fixed_y: self.y,
            translation: self.translation,
        };
        log::trace!("resolved style {resolved:?} for {content:?}");
        Ok(resolved)
    }

    /// Copy with an explicit width that fits `area` horizontally.
    ///
    /// When the resolved width is wider than the area, width becomes the area
    /// width and height the matching aspect-ratio height. Otherwise the
    /// directives are returned unchanged.
    pub fn fit_width(&self, content: &ContentItem, area: &LayoutArea) -> Result<Self, LayoutError> {
        area.validate()?;
        let resolved = self.resolve(content)?;
        let available = area.bbox.width;
        let mut fitted = *self;
        if resolved.width > available {
            fitted.height = Some(available / resolved.width * content.height());
            fitted.width = Some(available);
        }
        Ok(fitted)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let floats = [
            (self.width, StyleField::Width),
            (self.height, StyleField::Height),
            (self.x, StyleField::X),
            (self.y, StyleField::Y),
            (self.rotation_angle, StyleField::RotationAngle),
            (self.horizontal_scaling, StyleField::HorizontalScaling),
            (self.vertical_scaling, StyleField::VerticalScaling),
        ];
        for (value, field) in floats {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(LayoutError::NonFiniteStyle(field));
            }
        }
        if self
            .translation
            .is_some_and(|(dx, dy)| !(dx.is_finite() && dy.is_finite()))
        {
            return Err(LayoutError::NonFiniteStyle(StyleField::Translation));
        }
        // Sizes and factors feed the occupied area, which can't go negative.
        let sizes = [
            (self.width, StyleField::Width),
            (self.horizontal_scaling, StyleField::HorizontalScaling),
            (self.vertical_scaling, StyleField::VerticalScaling),
        ];
        for (value, field) in sizes {
            if value.is_some_and(|v| v < 0.0) {
                return Err(LayoutError::NegativeStyle(field));
            }
        }
        Ok(())
    }
}

/// Style directives with every default filled in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Working width before scaling factors and rotation.
    pub width: f32,
    /// Working height before scaling factors and rotation.
    pub height: f32,
    /// Horizontal factor, including explicit sizing for forms.
    pub horizontal_scaling: f32,
    /// Vertical factor, including explicit sizing for forms.
    pub vertical_scaling: f32,
    pub rotation_angle: f32,
    pub auto_scale: bool,
    pub fixed_x: Option<f32>,
    pub fixed_y: Option<f32>,
    pub translation: Option<(f32, f32)>,
}
