use tracing::debug;

use crate::{error::LookupError, extract};

/// Search endpoint for the hadith transmitters site.
const SEARCH_URL: &str = "http://hadithtransmitters.hawramani.com/";
/// Site category holding transmitter biographies.
const SEARCH_CATEGORY: &str = "5563";

/// A fetched biography: the page title and the raw body text.
#[derive(Debug, Clone)]
pub struct Biography {
    pub title: String,
    pub body: String,
}

/// Client for resolving a person's name to their biography page.
///
/// Cheap to clone; the inner reqwest client is reference counted.
#[derive(Clone)]
pub struct BiographyClient {
    http: reqwest::Client,
}

impl BiographyClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Resolve `name` to a biography.
    ///
    /// Two sequential fetches: the category search, then the first result's
    /// permalink. No retries; the caller surfaces every failure to the user.
    pub async fn fetch(&self, name: &str) -> Result<Biography, LookupError> {
        let search_html = self
            .http
            .get(SEARCH_URL)
            .query(&[("s", name), ("cat", SEARCH_CATEGORY)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let permalink =
            extract::search_permalink(&search_html).ok_or(LookupError::PersonNotFound)?;
        debug!(%permalink, "resolved biography permalink");

        let detail_html = self
            .http
            .get(&permalink)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        extract::biography_page(&detail_html)
    }
}

impl Default for BiographyClient {
    fn default() -> Self {
        Self::new()
    }
}
