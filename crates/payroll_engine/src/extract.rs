use payroll_core::TextExtractor;
use scraper::Html;

/// Collects the text nodes of an HTML fragment, entities decoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTextExtractor;

impl TextExtractor for HtmlTextExtractor {
    fn text(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        fragment.root_element().text().collect()
    }
}
