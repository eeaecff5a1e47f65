/// Rasterizer: paints text runs onto a tiny-skia pixmap and encodes PNG

use tiny_skia::{ColorU8, Pixmap, PremultipliedColorU8};

use super::font::{self, GLYPH_SIZE};
use super::paint::{TextRun, TextStyle, Weight};
use super::Screenshot;
use crate::{Error, Result};

/// A transparent canvas with an opaque black pen.
pub struct Canvas {
    pixmap: Pixmap,
    ink: PremultipliedColorU8,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::RenderError(format!("Invalid canvas size {}x{}", width, height)))?;
        Ok(Self {
            pixmap,
            ink: ColorU8::from_rgba(0, 0, 0, 255).premultiply(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Draw `text` with its baseline starting at (`x`, `baseline`). Glyphs
    /// outside the canvas are clipped.
    pub fn draw_text(&mut self, x: i32, baseline: i32, text: &str, style: TextStyle) {
        let (cell_w, cell_h) = style.cell();
        let top = baseline - style.ascent() as i32;
        let mut pen = x;

        for c in text.chars() {
            if pen >= self.width() as i32 {
                break;
            }
            let rows = font::glyph(c);
            for py in 0..cell_h {
                let gy = py * GLYPH_SIZE / cell_h;
                for px in 0..cell_w {
                    let gx = px * GLYPH_SIZE / cell_w;
                    if !font::is_set(&rows, gx, gy) {
                        continue;
                    }
                    let (dx, dy) = (pen + px as i32, top + py as i32);
                    self.plot(dx, dy);
                    if style.weight == Weight::Bold {
                        self.plot(dx + 1, dy);
                    }
                }
            }
            pen += cell_w as i32;
        }
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let idx = y as usize * self.width() as usize + x as usize;
        let ink = self.ink;
        self.pixmap.pixels_mut()[idx] = ink;
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))
    }
}

/// Paint `runs` onto a fresh `width` x `height` canvas and encode it.
pub fn rasterize(width: u32, height: u32, runs: &[TextRun]) -> Result<Screenshot> {
    let mut canvas = Canvas::new(width, height)?;
    for run in runs {
        canvas.draw_text(run.x, run.y, &run.text, run.style);
    }
    Ok(Screenshot {
        width,
        height,
        png_data: canvas.encode_png()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inked(canvas: &Canvas) -> usize {
        canvas.pixmap.pixels().iter().filter(|p| p.alpha() == 255).count()
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(16, 8).unwrap();
        assert_eq!(inked(&canvas), 0);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(Canvas::new(0, 10), Err(Error::RenderError(_))));
    }

    #[test]
    fn bold_text_uses_more_ink() {
        let mut normal = Canvas::new(64, 16).unwrap();
        normal.draw_text(0, 12, "Hi", TextStyle::new(12, Weight::Normal));
        let mut bold = Canvas::new(64, 16).unwrap();
        bold.draw_text(0, 12, "Hi", TextStyle::new(12, Weight::Bold));
        assert!(inked(&normal) > 0);
        assert!(inked(&bold) > inked(&normal));
    }

    #[test]
    fn text_past_the_edge_is_clipped() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.draw_text(-4, 9, &"W".repeat(100), TextStyle::new(10, Weight::Bold));
        canvas.draw_text(5, 40, "offscreen", TextStyle::new(10, Weight::Normal));
        assert!(inked(&canvas) <= 100);
    }

    #[test]
    fn rasterize_returns_screenshot() {
        let s = rasterize(128, 64, &[]).unwrap();
        assert_eq!(s.width, 128);
        assert_eq!(s.height, 64);
        assert!(!s.png_data.is_empty());
    }
}
