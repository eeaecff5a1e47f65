/// Fixed three-line banner layout

use super::paint::{TextRun, TextStyle, Weight};
use super::RenderSpec;

pub const TITLE_STYLE: TextStyle = TextStyle::new(14, Weight::Bold);
pub const SUMMARY_STYLE: TextStyle = TextStyle::new(12, Weight::Normal);
pub const FOOTER_STYLE: TextStyle = TextStyle::new(10, Weight::Normal);

/// Place title, summary and footer at their baseline positions.
pub fn layout_banner(spec: &RenderSpec) -> Vec<TextRun> {
    vec![
        TextRun {
            x: 5,
            y: 20,
            text: spec.title.clone(),
            style: TITLE_STYLE,
        },
        TextRun {
            x: 7,
            y: 40,
            text: spec.summary.clone(),
            style: SUMMARY_STYLE,
        },
        TextRun {
            x: 5,
            y: 62,
            text: spec.footer.clone(),
            style: FOOTER_STYLE,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_three_lines_top_to_bottom() {
        let spec = RenderSpec::new("Title", "Summary", "https://example.com/");
        let runs = layout_banner(&spec);
        assert_eq!(runs.len(), 3);
        assert_eq!((runs[0].x, runs[0].y), (5, 20));
        assert_eq!((runs[1].x, runs[1].y), (7, 40));
        assert_eq!((runs[2].x, runs[2].y), (5, 62));
        assert_eq!(runs[0].style.weight, Weight::Bold);
        assert_eq!(runs[2].text, "https://example.com/");
    }
}
