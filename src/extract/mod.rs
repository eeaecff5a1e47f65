//! Markup-to-bounded-text extraction
//!
//! Turns a raw feed document into the two strings the banner shows: the
//! newest item's title and a short plain-text summary of its description.
//!
//! The work is split in three stages that each return fresh values:
//!
//! 1. [`locator`] anchors on `<item>`, `<title>` and `<description>` with plain
//!    substring search and copies out a bounded title plus the raw description
//!    markup.
//! 2. [`flatten`] parses that markup as an HTML fragment and collects its text
//!    depth-first, stopping as soon as the character budget is spent.
//! 3. [`finalize`] decides whether the result carries the ellipsis marker.
//!
//! # Example
//!
//! ```
//! let feed = "<rss><channel><item><title>Weekly Update</title>\
//!             <description><p>Short update with <b>bold</b> text and more</p></description>\
//!             </item></channel></rss>";
//! let item = rss2png::extract::extract(feed)?;
//! assert_eq!(item.title.to_string(), "Weekly Update");
//! assert_eq!(item.summary.to_string(), "Short update with bold text and more");
//! # Ok::<(), rss2png::Error>(())
//! ```

use std::fmt;

pub mod finalize;
pub mod flatten;
pub mod locator;

pub use finalize::finalize;
pub use flatten::{flatten_markup, Flattened};
pub use locator::{locate_item, FeedItem, Tag};

use crate::Result;

/// Character budget for both the title and the summary.
pub const MAX_TEXT_CHARS: usize = 50;

/// Suffix appended to any text that was cut short.
pub const ELLIPSIS: &str = " ...";

/// How far past `<description>` the locator is willing to look, in bytes.
pub const DESCRIPTION_LOOKAHEAD: usize = 4096;

pub(crate) const CDATA_OPEN: &str = "<![CDATA[";
pub(crate) const CDATA_CLOSE: &str = "]]>";

/// A string capped at [`MAX_TEXT_CHARS`] characters that remembers whether it
/// was cut.
///
/// The `Display` form is the content followed by [`ELLIPSIS`] when truncated,
/// which is what ends up on the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedText {
    text: String,
    truncated: bool,
}

impl BoundedText {
    pub fn new(text: impl Into<String>, truncated: bool) -> Self {
        Self {
            text: text.into(),
            truncated,
        }
    }

    /// The kept characters, without the ellipsis marker.
    pub fn content(&self) -> &str {
        &self.text
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.truncated {
            f.write_str(ELLIPSIS)?;
        }
        Ok(())
    }
}

/// Title and summary of the first item in a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub title: BoundedText,
    pub summary: BoundedText,
}

/// Run the full extraction pipeline over a raw feed document.
pub fn extract(feed: &str) -> Result<Extracted> {
    let item = locate_item(feed)?;
    let summary = summarize(item.description_markup, MAX_TEXT_CHARS);
    Ok(Extracted {
        title: item.title,
        summary,
    })
}

/// Flatten a piece of description markup and finalize it to `limit` characters.
pub fn summarize(markup: &str, limit: usize) -> BoundedText {
    finalize(flatten_markup(markup, limit), limit)
}

/// Split `s` after `limit` characters. The flag is set when anything was left
/// over.
pub(crate) fn take_chars(s: &str, limit: usize) -> (&str, bool) {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}
