//! Behavioural checks for the extraction pipeline through the public API

use rss2png::extract::{self, flatten_markup, locate_item, summarize, MAX_TEXT_CHARS};
use rss2png::{Error, Tag};

fn feed_with(description: &str) -> String {
    format!(
        "<rss><channel><item><title>Post</title><description>{}</description></item></channel></rss>",
        description
    )
}

#[test]
fn weekly_update_example() {
    let feed = "<item><title>Weekly Update</title><description><p>Short update with <b>bold</b> text and more</p></description></item>";
    let item = extract::extract(feed).unwrap();
    assert_eq!(item.title.to_string(), "Weekly Update");
    assert_eq!(item.summary.to_string(), "Short update with bold text and more");
    assert!(!item.summary.is_truncated());
}

#[test]
fn short_descriptions_pass_through_unchanged() {
    let long = "m".repeat(49);
    for text in ["", "a", "Just a sentence.", long.as_str()] {
        let item = extract::extract(&feed_with(&format!("<p>{}</p>", text))).unwrap();
        assert_eq!(item.summary.to_string(), text);
    }
}

#[test]
fn overlong_descriptions_get_fifty_chars_and_marker() {
    for n in [51usize, 60, 120, 5000] {
        let body: String = ('a'..='z').cycle().take(n).collect();
        let item = extract::extract(&feed_with(&format!("<div>{}</div>", body))).unwrap();
        assert_eq!(item.summary.content(), &body[..MAX_TEXT_CHARS], "n = {}", n);
        assert_eq!(item.summary.to_string(), format!("{} ...", &body[..MAX_TEXT_CHARS]));
    }
}

#[test]
fn text_split_across_nodes_is_cut_at_fifty() {
    let markup = format!(
        "<p>{}</p><ul><li>{}</li><li>{}</li></ul>",
        "a".repeat(20),
        "b".repeat(20),
        "c".repeat(20)
    );
    let summary = summarize(&markup, MAX_TEXT_CHARS);
    assert_eq!(
        summary.to_string(),
        format!("{}{}{} ...", "a".repeat(20), "b".repeat(20), "c".repeat(10))
    );
}

#[test]
fn non_content_subtrees_never_leak() {
    let noisy = "<script>document.write('x'.repeat(1000))</script>";
    let styled = "<style>.a { content: 'hidden text' }</style>";
    let markup = format!("{}<p>Visible{}</p>{} text", noisy, styled, noisy);
    let out = flatten_markup(&markup, MAX_TEXT_CHARS);
    assert_eq!(out.text, "Visible text");
    assert!(!out.truncated);
}

#[test]
fn script_text_does_not_count_against_the_budget() {
    let markup = format!("<script>{}</script><p>{}</p>", "s".repeat(100), "v".repeat(50));
    let summary = summarize(&markup, MAX_TEXT_CHARS);
    assert_eq!(summary.to_string(), "v".repeat(50));
}

#[test]
fn earlier_siblings_precede_later_ones() {
    let summary = summarize("<div><p>first <em>second</em></p></div><p> third</p>", 50);
    assert_eq!(summary.to_string(), "first second third");
}

#[test]
fn title_bound_holds() {
    let raw = "T".repeat(80);
    let doc = format!("<item><title>{}</title><description>d", raw);
    let item = locate_item(&doc).unwrap();
    assert_eq!(item.title.content().chars().count(), 50);
    assert!(item.title.to_string().ends_with(" ..."));
    assert_eq!(item.title.to_string().chars().count(), 54);
}

#[test]
fn each_missing_tag_is_identified() {
    let cases = [
        ("<rss></rss>", Tag::Item),
        ("<rss><item></item></rss>", Tag::Title),
        ("<rss><item><title>x</title></item></rss>", Tag::Description),
    ];
    for (feed, expected) in cases {
        match extract::extract(feed) {
            Err(Error::MissingTag(tag)) => assert_eq!(tag, expected),
            other => panic!("expected MissingTag({}), got {:?}", expected, other),
        }
    }
}

#[test]
fn huge_article_stops_early() {
    let article = format!("<article>{}</article>", "<p>paragraph of text</p>".repeat(20_000));
    let item = extract::extract(&feed_with(&article)).unwrap();
    assert!(item.summary.is_truncated());
    assert_eq!(item.summary.char_count(), 50);
}
