//! Sentence extraction from wiki pages.
use lazy_static::lazy_static;
use scraper::{Html, Selector};

use crate::filtering::{Filter, WordCount};
use crate::normalize::clean_scraped_sentence;

lazy_static! {
    /// Article paragraphs of a MediaWiki page.
    static ref PARAGRAPHS: Selector = Selector::parse("div#mw-content-text p").unwrap();
}

/// Text of the article paragraphs, joined by spaces.
///
/// Returns `None` if the page has no article content block.
pub fn article_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let mut paragraphs = document.select(&PARAGRAPHS).peekable();
    paragraphs.peek()?;

    let texts: Vec<String> = paragraphs.map(|p| p.text().collect()).collect();
    Some(texts.join(" "))
}

/// Splits `text` on sentence terminators, cleans each fragment and keeps those accepted by `filter`.
pub fn sentences<'a>(text: &'a str, filter: &'a WordCount) -> impl Iterator<Item = String> + 'a {
    text.split(|c: char| matches!(c, '.' | '?' | '!'))
        .map(clean_scraped_sentence)
        .filter(move |s| filter.detect(s.as_str()))
}
