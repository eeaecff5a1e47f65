//! Banner rendering
//!
//! Three fixed text lines (title, summary, footer) drawn onto a small
//! transparent canvas and encoded as PNG. There is no wrapping or scaling:
//! anything wider than the canvas is clipped, which is why the extraction
//! stage bounds its output.

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use std::path::Path;

use crate::Result;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 450;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 68;

/// What goes on the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpec {
    pub title: String,
    pub summary: String,
    pub footer: String,
}

impl RenderSpec {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            footer: footer.into(),
        }
    }
}

/// An encoded image together with its dimensions.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Write the PNG to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png_data)?;
        Ok(())
    }
}

/// Lay out and rasterize `spec` at the fixed banner size.
pub fn render(spec: &RenderSpec) -> Result<Screenshot> {
    let runs = layout::layout_banner(spec);
    raster::rasterize(CANVAS_WIDTH, CANVAS_HEIGHT, &runs)
}
