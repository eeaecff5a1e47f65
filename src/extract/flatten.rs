//! Budgeted HTML-to-text flattening.
//!
//! The description is parsed as an HTML fragment (html5ever via `scraper`, so
//! unclosed and mismatched tags are repaired rather than rejected) and walked
//! depth-first in document order. Text is appended until the character budget
//! is spent; at that point the walk stops without visiting the rest of the
//! tree, so long articles cost no more than short ones.

use std::borrow::Cow;

use ego_tree::NodeRef;
use log::warn;
use quick_xml::escape::{resolve_predefined_entity, unescape_with};
use scraper::{Html, Node};

use super::{take_chars, CDATA_CLOSE, CDATA_OPEN};

const DESCRIPTION_OPEN: &str = "<description>";

/// Elements whose subtree never contributes text.
pub const NON_CONTENT_TAGS: &[&str] = &["script", "style"];

/// Output of one flatten call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flattened {
    /// Collected text, at most `limit` characters.
    pub text: String,
    /// Whether the walk stopped early because the budget ran out.
    pub truncated: bool,
}

/// Text collected so far, with its length in characters.
struct Budget {
    text: String,
    chars: usize,
    limit: usize,
}

impl Budget {
    fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            limit,
        }
    }

    /// Append as much of `contribution` as fits. Returns `true` when the
    /// contribution would have taken the buffer past the limit.
    fn push(&mut self, contribution: &str) -> bool {
        let (fits, overflow) = take_chars(contribution, self.limit - self.chars);
        self.text.push_str(fits);
        self.chars += fits.chars().count();
        overflow
    }
}

/// Flatten `markup` to at most `limit` characters of plain text.
///
/// A leading `<description>` tag is ignored, a CDATA wrapper is unwrapped and
/// entity-escaped markup is unescaped before parsing.
pub fn flatten_markup(markup: &str, limit: usize) -> Flattened {
    let body = prepare_markup(markup);
    let fragment = Html::parse_fragment(&body);

    let (budget, truncated) = flatten_node(fragment.tree.root(), Budget::new(limit));
    Flattened {
        text: budget.text,
        truncated,
    }
}

/// Visit `node` pre-order, threading the budget through. The returned flag
/// tells the caller to stop visiting siblings.
fn flatten_node(node: NodeRef<'_, Node>, mut budget: Budget) -> (Budget, bool) {
    match node.value() {
        // Inter-element whitespace is layout, not content.
        Node::Text(text) if text.trim_matches(|c: char| c.is_ascii_whitespace()).is_empty() => {
            (budget, false)
        }
        Node::Text(text) => {
            let done = budget.push(text);
            (budget, done)
        }
        Node::Element(element) if is_non_content(element.name()) => (budget, false),
        Node::Element(_) | Node::Document | Node::Fragment => {
            for child in node.children() {
                let (next, done) = flatten_node(child, budget);
                budget = next;
                if done {
                    return (budget, true);
                }
            }
            (budget, false)
        }
        _ => (budget, false),
    }
}

fn is_non_content(tag: &str) -> bool {
    NON_CONTENT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))
}

fn prepare_markup(markup: &str) -> Cow<'_, str> {
    let body = markup.strip_prefix(DESCRIPTION_OPEN).unwrap_or(markup);

    let body = match body.trim_start().strip_prefix(CDATA_OPEN) {
        Some(inner) => &inner[..inner.find(CDATA_CLOSE).unwrap_or(inner.len())],
        None => body,
    };

    if !body.contains('<') && body.contains("&lt;") {
        unescape_entities(body)
    } else {
        Cow::Borrowed(body)
    }
}

/// Undo one level of XML escaping so escaped HTML parses as markup.
///
/// Common HTML-only entities are re-emitted as-is for the HTML parser to
/// decode. Anything else unknown leaves the body untouched.
fn unescape_entities(s: &str) -> Cow<'_, str> {
    let resolve = |entity: &str| {
        resolve_predefined_entity(entity).or_else(|| html_passthrough(entity))
    };
    match unescape_with(s, resolve) {
        Ok(unescaped) => unescaped,
        Err(e) => {
            warn!("Leaving escaped description as-is: {}", e);
            Cow::Borrowed(s)
        }
    }
}

fn html_passthrough(entity: &str) -> Option<&'static str> {
    Some(match entity {
        "nbsp" => "&nbsp;",
        "hellip" => "&hellip;",
        "mdash" => "&mdash;",
        "ndash" => "&ndash;",
        "lsquo" => "&lsquo;",
        "rsquo" => "&rsquo;",
        "ldquo" => "&ldquo;",
        "rdquo" => "&rdquo;",
        "copy" => "&copy;",
        _ => return None,
    })
}
