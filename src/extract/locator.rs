//! Coarse anchoring on the outer feed structure.
//!
//! This stage does not parse XML. It searches for the literal `<item>`,
//! `<title>` and `<description>` delimiters in document order, which is enough
//! to pick out the newest entry of an RSS 2.0 feed.

use std::fmt;

use super::{take_chars, BoundedText, CDATA_CLOSE, CDATA_OPEN, DESCRIPTION_LOOKAHEAD, MAX_TEXT_CHARS};
use crate::{Error, Result};

const DESCRIPTION_CLOSE: &str = "</description>";

/// Feed delimiters the locator anchors on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Item,
    Title,
    Description,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Item => "item",
            Tag::Title => "title",
            Tag::Description => "description",
        }
    }

    /// The literal opening delimiter searched for in the feed.
    pub fn delimiter(self) -> &'static str {
        match self {
            Tag::Item => "<item>",
            Tag::Title => "<title>",
            Tag::Description => "<description>",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw fields of the first item, borrowed from the feed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem<'a> {
    /// Title text, at most [`MAX_TEXT_CHARS`] source characters.
    pub title: BoundedText,
    /// Description markup starting at `<description>`, still HTML-bearing.
    pub description_markup: &'a str,
}

/// Locate the first item in `feed` and pull out its title and description.
///
/// `<title>` is searched for after `<item>`, and `<description>` after the
/// copied title characters. Each missing delimiter is reported separately.
pub fn locate_item(feed: &str) -> Result<FeedItem<'_>> {
    let item_at = find_from(feed, 0, Tag::Item)?;
    let title_at = find_from(feed, item_at, Tag::Title)? + Tag::Title.delimiter().len();

    let (title, consumed) = read_title(&feed[title_at..], MAX_TEXT_CHARS);

    let description_at = find_from(feed, title_at + consumed, Tag::Description)?;
    let description_markup = description_slice(&feed[description_at..], DESCRIPTION_LOOKAHEAD);

    Ok(FeedItem {
        title,
        description_markup,
    })
}

fn find_from(feed: &str, from: usize, tag: Tag) -> Result<usize> {
    feed[from..]
        .find(tag.delimiter())
        .map(|offset| from + offset)
        .ok_or(Error::MissingTag(tag))
}

/// Copy title characters up to the next `<` (or `]]>` inside a CDATA wrapper).
/// Returns the title and the number of bytes consumed from `rest`.
fn read_title(rest: &str, limit: usize) -> (BoundedText, usize) {
    let (body, skipped, terminator) = match rest.strip_prefix(CDATA_OPEN) {
        Some(inner) => (inner, CDATA_OPEN.len(), CDATA_CLOSE),
        None => (rest, 0, "<"),
    };
    let field = &body[..body.find(terminator).unwrap_or(body.len())];
    let (kept, truncated) = take_chars(field, limit);

    (BoundedText::new(kept, truncated), skipped + kept.len())
}

/// Bound the description to its closing tag or the lookahead window, whichever
/// comes first.
fn description_slice(rest: &str, window: usize) -> &str {
    let mut end = rest.len().min(window);
    while !rest.is_char_boundary(end) {
        end -= 1;
    }
    let bounded = &rest[..end];
    match bounded.find(DESCRIPTION_CLOSE) {
        Some(close) => &bounded[..close],
        None => bounded,
    }
}
