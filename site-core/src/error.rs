//! Errors raised while loading site configuration and content.

use thiserror::Error;

/// Failure to turn embedded site data into typed values.
#[derive(Debug, Error)]
pub enum SiteError {
    /// `site.toml` did not match [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    /// `catalog.json` did not match [`crate::content::ContentCatalog`].
    #[error("invalid content catalog: {0}")]
    Content(#[from] serde_json::Error),

    /// Content parsed but references something that does not exist.
    #[error("content catalog is missing section `{0}`")]
    MissingSection(String),

    /// A setting parsed but is outside the range the site can run with.
    #[error("`{key}` must be greater than zero")]
    ZeroSetting { key: &'static str },
}
