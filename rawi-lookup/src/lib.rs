/// HTTP client for the hadith transmitters biography site.
mod client;
/// Lookup error taxonomy.
mod error;
/// HTML extraction contract for search and biography pages.
pub mod extract;

pub use client::{Biography, BiographyClient};
pub use error::LookupError;
