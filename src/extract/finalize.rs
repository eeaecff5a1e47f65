//! Turns flattened text into the summary shown on the banner.

use super::{BoundedText, Flattened};

/// Produce the final summary from a flatten result.
///
/// The ellipsis marker is applied iff the walk was cut short. Content longer
/// than `limit` is clamped to `limit` characters and treated as cut, so the
/// summary never exceeds `limit` characters plus the marker.
pub fn finalize(flattened: Flattened, limit: usize) -> BoundedText {
    let Flattened {
        mut text,
        mut truncated,
    } = flattened;

    if let Some((idx, _)) = text.char_indices().nth(limit) {
        text.truncate(idx);
        truncated = true;
    }

    BoundedText::new(text, truncated)
}
