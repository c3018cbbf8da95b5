//! Paragraph text extraction from raw page markup.
//!
//! Pulls only paragraph-level content out of a page: the text of each
//! `<p>` element, whitespace-collapsed, joined by single spaces. Markup,
//! scripts, and structural text outside paragraphs are discarded. This is
//! a pure function and never fails — malformed markup yields best-effort
//! or empty text.

use scraper::{Html, Selector};

/// Extract the visible paragraph text from raw HTML markup.
///
/// Each `<p>` element's text is collected, internal whitespace is
/// collapsed to single spaces, empty paragraphs are dropped, and the
/// remainder is joined with single spaces. A page with no paragraphs
/// yields an empty string.
pub fn paragraph_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|el| {
            el.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect();

    paragraphs.join(" ")
}
