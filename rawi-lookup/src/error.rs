use thiserror::Error;

/// Failure modes of a biography lookup.
///
/// Every way the remote site can disappoint us is enumerated here so command
/// handlers can pick a user-facing message instead of crashing on a missing
/// DOM node.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The search page contained no result permalink for the query.
    #[error("no result permalink found for the query")]
    PersonNotFound,

    /// The biography page did not contain an expected element.
    #[error("biography page is missing the `{0}` element")]
    MissingElement(&'static str),

    /// The outbound request itself failed.
    #[error("biography site request failed: {0}")]
    Http(#[from] reqwest::Error),
}
