/*! Plaintext extraction seam.

The core never parses markup itself: anything that can turn raw document
content into plaintext implements [Extract]. The shipped implementation
pulls paragraph text out of HTML documents.
!*/
use scraper::{Html, Selector};

use crate::error::Error;

/// Opaque "raw content to plaintext" step.
pub trait Extract {
    fn extract(&self, raw: &str) -> Result<String, Error>;
}

/// Extracts the paragraph text of an HTML document.
///
/// Each `<p>` element contributes its text content followed by a newline;
/// headers, scripts and attributes are ignored.
pub struct HtmlText {
    paragraphs: Selector,
}

impl HtmlText {
    pub fn new() -> Self {
        // "p" is a valid CSS selector
        Self {
            paragraphs: Selector::parse("p").unwrap(),
        }
    }
}

impl Default for HtmlText {
    fn default() -> Self {
        Self::new()
    }
}

impl Extract for HtmlText {
    fn extract(&self, raw: &str) -> Result<String, Error> {
        let doc = Html::parse_document(raw);
        let mut plaintext = String::new();
        for paragraph in doc.select(&self.paragraphs) {
            for piece in paragraph.text() {
                plaintext.push_str(piece);
            }
            plaintext.push('\n');
        }
        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text() {
        let html = "<html><body><h1>title</h1><p>first</p><p>second</p></body></html>";
        let text = HtmlText::new().extract(html).unwrap();
        assert_eq!(text, "first\nsecond\n");
    }

    #[test]
    fn test_nested_markup() {
        let html = "<p>one <b>bold</b> word</p>";
        let text = HtmlText::new().extract(html).unwrap();
        assert_eq!(text, "one bold word\n");
    }

    #[test]
    fn test_no_paragraphs() {
        let html = "<html><body><div>nothing here</div></body></html>";
        let text = HtmlText::new().extract(html).unwrap();
        assert_eq!(text, "");
    }
}
