// src/url_utils.rs
//! Generic store-URL decomposition, shared by the storage layer and any
//! other caller that needs a (scheme, bucket, path) split.

use anyhow::{Context, Result};
use url::Url;

/// Parsed form of a store URL such as `s3://bucket/path/to/object`.
///
/// `path` keeps the leading separator the URL grammar gives it; store
/// keys never do, so use [`ObjectLocator::key`] when addressing the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocator {
    /// Store protocol identifier, e.g. `s3`.
    pub scheme: String,
    /// Bucket (namespace) name, never empty.
    pub bucket: String,
    /// Slash-delimited key or prefix; empty means the bucket root.
    pub path: String,
}

impl ObjectLocator {
    /// The store-key form of `path`: the leading separator stripped.
    pub fn key(&self) -> &str {
        self.path.strip_prefix('/').unwrap_or(&self.path)
    }
}

/// Split a store URL into (scheme, bucket, path).
///
/// Delegates entirely to the URL grammar parser; malformed input fails
/// with that parser's own error. The only check added on top is that
/// the bucket component is present and non-empty.
pub fn parse_object_url(store_url: &str) -> Result<ObjectLocator> {
    let parsed = Url::parse(store_url)
        .with_context(|| format!("invalid store URL: {store_url}"))?;
    let bucket = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .with_context(|| format!("store URL has no bucket component: {store_url}"))?
        .to_owned();
    Ok(ObjectLocator {
        scheme: parsed.scheme().to_owned(),
        bucket,
        path: parsed.path().to_owned(),
    })
}
