//! Canonical cache keys
//!
//! A key is the resource's absolute, scheme-qualified URI with query string
//! and fragment stripped, so `…/accounts/1?expand=customData` and
//! `…/accounts/1` share one entry.

use crate::error::{Error, Result};
use std::fmt;
use url::Url;

/// Canonical key of a cached resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    url: Url,
    key: String,
}

impl CacheKey {
    /// Canonicalize an absolute href
    pub fn parse(href: &str) -> Result<Self> {
        let url = Url::parse(href).map_err(|e| {
            Error::invalid_argument(format!("'{href}' is not an absolute resource href: {e}"))
        })?;
        Self::from_url(url)
    }

    /// Canonicalize `href`, qualifying it against `base` when it is relative
    pub fn qualify(href: &str, base: Option<&Url>) -> Result<Self> {
        match (Url::parse(href), base) {
            (Ok(url), _) => Self::from_url(url),
            (Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => {
                let joined = base.join(href).map_err(|e| {
                    Error::invalid_argument(format!(
                        "cannot qualify '{href}' against '{base}': {e}"
                    ))
                })?;
                Self::from_url(joined)
            }
            (Err(e), _) => Err(Error::invalid_argument(format!(
                "'{href}' is not an absolute resource href: {e}"
            ))),
        }
    }

    fn from_url(mut url: Url) -> Result<Self> {
        if url.cannot_be_a_base() {
            return Err(Error::invalid_argument(format!(
                "'{url}' is not a hierarchical resource href"
            )));
        }
        url.set_query(None);
        url.set_fragment(None);
        let mut key = url.as_str().to_string();
        if key.len() > 1 && key.ends_with('/') && url.path() != "/" {
            key.pop();
            url = Url::parse(&key)
                .map_err(|e| Error::invalid_argument(format!("'{key}' is not valid: {e}")))?;
        }
        Ok(Self { url, key })
    }

    /// The key string used inside a region
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// The parsed URI
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
