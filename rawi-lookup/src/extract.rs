//! Extraction contract for the scraped pages.
//!
//! The remote site is plain WordPress markup, so the contract is small: a
//! search page must yield the first section permalink, and a biography page
//! must yield its `<title>` text and the text of the definition container.

use scraper::{Html, Selector};

use crate::{client::Biography, error::LookupError};

/// Extract the first section-permalink href from a search results page.
///
/// Returns `None` when the page parsed but no matching anchor exists, which
/// callers surface as [`LookupError::PersonNotFound`].
pub fn search_permalink(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let anchor = Selector::parse("a.sectionpermaanchor[href]").unwrap();

    doc.select(&anchor)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(ToOwned::to_owned)
}

/// Extract the display title and body text from a biography detail page.
pub fn biography_page(html: &str) -> Result<Biography, LookupError> {
    let doc = Html::parse_document(html);
    let title_selector = Selector::parse("title").unwrap();
    let body_selector = Selector::parse("div.definition").unwrap();

    let title = doc
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .ok_or(LookupError::MissingElement("title"))?;

    let body = doc
        .select(&body_selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .ok_or(LookupError::MissingElement("div.definition"))?;

    Ok(Biography { title, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_HIT: &str = r#"
        <html><body>
            <article>
                <a class="sectionpermaanchor" href="https://example.org/entry/123">entry</a>
                <a class="sectionpermaanchor" href="https://example.org/entry/456">entry</a>
            </article>
        </body></html>
    "#;

    const SEARCH_MISS: &str = r#"
        <html><body><p>Nothing found for your search.</p></body></html>
    "#;

    const BIOGRAPHY: &str = r#"
        <html>
            <head><title>Ibn Abbas - Biographies</title></head>
            <body><div class="definition">He was <b>a companion</b> of the Prophet.</div></body>
        </html>
    "#;

    #[test]
    fn first_permalink_wins() {
        let href = search_permalink(SEARCH_HIT);
        assert_eq!(href.as_deref(), Some("https://example.org/entry/123"));
    }

    #[test]
    fn no_permalink_means_no_person() {
        assert_eq!(search_permalink(SEARCH_MISS), None);
    }

    #[test]
    fn anchor_without_href_is_skipped() {
        let html = r#"<a class="sectionpermaanchor">dead</a>"#;
        assert_eq!(search_permalink(html), None);
    }

    #[test]
    fn biography_extracts_title_and_body() {
        let biography = biography_page(BIOGRAPHY).unwrap();
        assert_eq!(biography.title, "Ibn Abbas - Biographies");
        assert_eq!(biography.body, "He was a companion of the Prophet.");
    }

    #[test]
    fn missing_definition_is_an_enumerated_failure() {
        let html = "<html><head><title>t</title></head><body><p>no card</p></body></html>";
        let err = biography_page(html).unwrap_err();
        assert!(matches!(err, LookupError::MissingElement("div.definition")));
    }

    #[test]
    fn missing_title_is_an_enumerated_failure() {
        // scraper only materializes a <title> node when the document has one.
        let html = r#"<div class="definition">text</div>"#;
        let err = biography_page(html).unwrap_err();
        assert!(matches!(err, LookupError::MissingElement("title")));
    }
}
