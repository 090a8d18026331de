//! Freehand drawing capture for the user's memory card.
//!
//! The memory game seeds one pair with a picture the player draws. The
//! engine only needs to know whether anything was drawn and to get the
//! finished image, which is the [`DrawingCapture`] contract. [`StrokeCanvas`]
//! is a pointer-driven implementation that exports SVG.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::assets::AssetId;
use crate::interaction::Point;

/// Produces the still image for the user-drawn pair.
pub trait DrawingCapture {
    /// Has anything been drawn?
    fn has_content(&self) -> bool;

    /// Render what has been drawn.
    fn export_image(&self) -> ImageData;
}

/// An exported image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub mime: String,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl ImageData {
    /// An inline `data:` identifier the presentation layer can show directly.
    ///
    /// Only text formats are inlined as-is; the SVG export never contains
    /// `#`, so no escaping is needed.
    #[must_use]
    pub fn to_asset_id(&self) -> AssetId {
        AssetId::new(format!(
            "data:{};utf8,{}",
            self.mime,
            String::from_utf8_lossy(&self.bytes)
        ))
    }
}

/// Brush used for every stroke.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub width: f32,
    /// Stroke colour as RGB.
    pub color: [u8; 3],
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            width: 7.0,
            color: [0x2c, 0x2c, 0x2c],
        }
    }
}

/// A canvas that records polyline strokes.
///
/// Pointer-down starts a stroke, moves extend it while the pointer is down,
/// and up (or leaving the canvas) ends it. The canvas counts as drawn once a
/// stroke has at least one segment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StrokeCanvas {
    width: u32,
    height: u32,
    brush: Brush,
    strokes: Vec<Vec<Point>>,
    drawing: bool,
}

impl StrokeCanvas {
    /// A blank white canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            brush: Brush::default(),
            strokes: Vec::new(),
            drawing: false,
        }
    }

    #[must_use]
    pub fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }

    /// Begin a stroke at `at` (canvas coordinates).
    pub fn pointer_down(&mut self, at: Point) {
        self.drawing = true;
        self.strokes.push(vec![at]);
    }

    /// Extend the current stroke, if one is in progress.
    pub fn pointer_move(&mut self, at: Point) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(at);
        }
    }

    /// End the current stroke.
    pub fn pointer_up(&mut self) {
        self.drawing = false;
        // A tap with no movement leaves nothing visible.
        if self.strokes.last().is_some_and(|stroke| stroke.len() < 2) {
            self.strokes.pop();
        }
    }

    /// Wipe the canvas back to white.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    /// Strokes that have at least one segment.
    pub fn strokes(&self) -> impl Iterator<Item = &[Point]> {
        self.strokes
            .iter()
            .filter(|stroke| stroke.len() >= 2)
            .map(Vec::as_slice)
    }

    fn to_svg(&self) -> String {
        let [r, g, b] = self.brush.color;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="white"/>"#,
            w = self.width,
            h = self.height,
        );

        for stroke in self.strokes() {
            let points = stroke
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            // Writing to a String cannot fail.
            let _ = write!(
                svg,
                r#"<polyline points="{}" fill="none" stroke="rgb({},{},{})" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                points, r, g, b, self.brush.width
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

impl DrawingCapture for StrokeCanvas {
    fn has_content(&self) -> bool {
        self.strokes().next().is_some()
    }

    fn export_image(&self) -> ImageData {
        ImageData {
            mime: "image/svg+xml".to_string(),
            width: self.width,
            height: self.height,
            bytes: self.to_svg().into_bytes(),
        }
    }
}
