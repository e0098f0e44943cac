//! Validation errors.

use core::fmt;

/// Style directive that carried a rejected value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleField {
    Width,
    Height,
    X,
    Y,
    RotationAngle,
    HorizontalScaling,
    VerticalScaling,
    Translation,
}

impl StyleField {
    fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::X => "x",
            Self::Y => "y",
            Self::RotationAngle => "rotation angle",
            Self::HorizontalScaling => "horizontal scaling",
            Self::VerticalScaling => "vertical scaling",
            Self::Translation => "translation distance",
        }
    }
}

/// Layout input rejected before any geometry runs.
///
/// Content that merely doesn't fit is not an error; see
/// [`LayoutResult::Nothing`](crate::LayoutResult::Nothing).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Intrinsic width or height is zero, negative, or not finite.
    InvalidContentDimension,
    /// Layout area has a non-finite coordinate or a negative/non-finite size.
    InvalidArea,
    /// A style directive is NaN or infinite.
    NonFiniteStyle(StyleField),
    /// A size or scaling directive is negative.
    NegativeStyle(StyleField),
    /// Scaled or rotated size no longer fits in `f32`.
    SizeOverflow,
    /// A transform coefficient is NaN or infinite.
    NonFiniteTransform,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContentDimension => {
                f.write_str("content dimensions must be finite and greater than zero")
            }
            Self::InvalidArea => f.write_str("layout area must be finite with non-negative size"),
            Self::NonFiniteStyle(field) => write!(f, "{} must be finite", field.name()),
            Self::NegativeStyle(field) => write!(f, "{} must not be negative", field.name()),
            Self::SizeOverflow => f.write_str("scaled content size overflows f32"),
            Self::NonFiniteTransform => f.write_str("transform coefficients must be finite"),
        }
    }
}

impl core::error::Error for LayoutError {}
