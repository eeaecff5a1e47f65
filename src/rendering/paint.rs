/// Paint primitives handed from layout to the rasterizer

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

/// Pixel size and weight of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub size: u32,
    pub weight: Weight,
}

impl TextStyle {
    pub const fn new(size: u32, weight: Weight) -> Self {
        Self { size, weight }
    }

    /// Glyph cell as (advance width, height). Cells are narrower than tall,
    /// roughly the proportions of a sans face.
    pub fn cell(&self) -> (u32, u32) {
        ((self.size * 3 + 2) / 5, self.size)
    }

    /// Distance from the top of the cell to the baseline.
    pub fn ascent(&self) -> u32 {
        self.size * 7 / 8
    }
}

/// A single line of text anchored at its baseline origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub style: TextStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_sizes_for_banner_styles() {
        assert_eq!(TextStyle::new(14, Weight::Bold).cell(), (8, 14));
        assert_eq!(TextStyle::new(12, Weight::Normal).cell(), (7, 12));
        assert_eq!(TextStyle::new(10, Weight::Normal).cell(), (6, 10));
    }

    #[test]
    fn ascent_sits_above_descender_row() {
        assert_eq!(TextStyle::new(8, Weight::Normal).ascent(), 7);
        assert_eq!(TextStyle::new(14, Weight::Normal).ascent(), 12);
    }
}
