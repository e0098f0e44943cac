//! SVG visualization of a single placement.
//!
//! Draws the offered area, the occupied area, and the outline of the
//! transformed content in one annotated panel. Page coordinates are y-up;
//! the panel flips them so the top of the area is at the top of the image.
//!
//! # Example
//!
//! ```
//! use zenplace::{layout, ContentItem, LayoutArea, Rect, StyleDirectives};
//! use zenplace::svg::render_placement_svg;
//!
//! let image = ContentItem::raster(100.0, 50.0).unwrap();
//! let area = LayoutArea::new(1, Rect::new(0.0, 0.0, 200.0, 200.0));
//! let style = StyleDirectives::new().rotation_angle(0.5);
//! let result = layout(&image, &area, &style).unwrap();
//!
//! let svg = render_placement_svg(&area, &image, &result);
//! // svg is a complete SVG document string
//! ```

use crate::area::{LayoutArea, Rect};
use crate::content::{ContentItem, ContentKind};
use crate::emit::Position;
use crate::layout::LayoutResult;
use crate::transform::{Point, Transform2D};

/// Maximum pixel width of the panel.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height of the panel.
const MAX_PANEL_H: f64 = 300.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Room for the annotation below the panel.
const ANNOTATION_H: f64 = 30.0;

/// Render a complete SVG document for one layout result.
pub fn render_placement_svg(area: &LayoutArea, content: &ContentItem, result: &LayoutResult) -> String {
    let bbox = area.bbox;
    let (pw, ph, scale) = scale_to_fit(bbox);
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + MAX_PANEL_H + ANNOTATION_H + MARGIN_TOP;
    let panel_x = total_w / 2.0 - pw / 2.0;
    let panel_y = MARGIN_TOP + LABEL_H;

    // Page point to panel point, flipping y.
    let to_panel = |p: Point| -> (f64, f64) {
        (
            panel_x + (p.x - f64::from(bbox.x)) * scale,
            panel_y + (f64::from(bbox.top()) - p.y) * scale,
        )
    };

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .area { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .occupied { fill: none; stroke: #2c6faa; stroke-width: 1.5; stroke-dasharray: 4,2; }
  .content { fill: #6ba3d6; fill-opacity: 0.7; stroke: #2c6faa; stroke-width: 1.5; }
  .origin { fill: #c0392b; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .area { fill: #2d2d2d; stroke: #555; }
    .occupied { stroke: #5a9fd4; }
    .content { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##);

    let center_x = total_w / 2.0;
    let label = match result {
        LayoutResult::Full(_) => format!(
            "Full  {}×{} in {}×{}",
            content.width(),
            content.height(),
            bbox.width,
            bbox.height
        ),
        LayoutResult::Nothing { .. } => format!(
            "Nothing  {}×{} in {}×{}",
            content.width(),
            content.height(),
            bbox.width,
            bbox.height
        ),
    };
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&label)
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="area" rx="2"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    let mut annotation = format!("page {}", area.page);
    if let Some(placed) = result.placed() {
        let occ = placed.occupied.bbox;
        let (ox, oy) = to_panel(Point::new(f64::from(occ.x), f64::from(occ.top())));
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="occupied"/>"#,
            ox,
            oy,
            f64::from(occ.width) * scale,
            f64::from(occ.height) * scale
        ));
        svg.push('\n');

        let instruction = placed.instruction(Position::Static);
        let outline = content_outline(content, &instruction.transform, instruction.x, instruction.y);
        let points: Vec<String> = outline
            .iter()
            .map(|&p| {
                let (x, y) = to_panel(p);
                format!("{x:.1},{y:.1}")
            })
            .collect();
        svg.push_str(&format!(
            r#"<polygon points="{}" class="content"/>"#,
            points.join(" ")
        ));
        svg.push('\n');

        let (cx, cy) = to_panel(outline[0]);
        svg.push_str(&format!(
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="3" class="origin"/>"#
        ));
        svg.push('\n');

        annotation = format!(
            "{annotation}, at ({:.1}, {:.1}), scale {:.3}",
            instruction.x, instruction.y, placed.scale
        );
    }

    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        panel_y + ph + 16.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Page-space corners of the drawn content, origin first.
fn content_outline(content: &ContentItem, transform: &Transform2D, x: f32, y: f32) -> [Point; 4] {
    let [a, b, c, d, _, _] = transform.coefficients();
    let placed = Transform2D::new([a, b, c, d, x, y])
        .map(|t| t.to_affine())
        .unwrap_or_default();
    // Raster matrices already carry the box size; forms draw in their own units.
    let (w, h) = match content.kind() {
        ContentKind::RasterImage => (1.0, 1.0),
        ContentKind::ReusableForm => (f64::from(content.width()), f64::from(content.height())),
    };
    [
        placed.apply(Point::new(0.0, 0.0)),
        placed.apply(Point::new(w, 0.0)),
        placed.apply(Point::new(w, h)),
        placed.apply(Point::new(0.0, h)),
    ]
}

/// Scale the area to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(bbox: Rect) -> (f64, f64, f64) {
    let w = f64::from(bbox.width);
    let h = f64::from(bbox.height);
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
