// src/s3_text.rs
//
// Copyright, 2025.  Signal65 / Futurum Group.
//
//! URL-addressed text operations: line-oriented reads, optionally
//! gzip-compressed writes, and directory-style listing over the store's
//! flat key namespace.

use std::collections::HashSet;
use std::io::Write;

use anyhow::{Context, Result};
use flate2::{Compression, GzBuilder};

use crate::constants::GZ_SUFFIX;
use crate::s3_client::{block_on, client};
use crate::s3_utils::{get_object, list_objects, put_object};
use crate::url_utils::parse_object_url;

// -----------------------------------------------------------------------------
// Read path
// -----------------------------------------------------------------------------

/// Fetch `store_url` and split its UTF-8 content on line feeds.
///
/// Every segment survives, including the trailing empty one a final
/// newline produces, so rejoining with `'\n'` reproduces the content
/// byte for byte.
pub async fn read_lines_async(store_url: &str) -> Result<Vec<String>> {
    let loc = parse_object_url(store_url)?;
    let client = client().await?;
    let bytes = get_object(&client, &loc.bucket, loc.key()).await?;
    let text = String::from_utf8(bytes.to_vec())
        .with_context(|| format!("object at {store_url} is not valid UTF-8"))?;
    Ok(text.split('\n').map(str::to_owned).collect())
}

/// Blocking wrapper around [`read_lines_async`].
pub fn read_lines(store_url: &str) -> Result<Vec<String>> {
    block_on(read_lines_async(store_url))
}

// -----------------------------------------------------------------------------
// Write path
// -----------------------------------------------------------------------------

/// Probe the fixed three-byte tail of `path` for the literal `.gz`.
///
/// A positional probe, not an extension check: paths shorter than three
/// bytes never match, and any path whose last three bytes happen to be
/// `.gz` always does.
pub fn has_gz_tail(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3 && &bytes[bytes.len() - 3..] == GZ_SUFFIX.as_bytes()
}

/// Gzip `data`, embedding the target path's final segment (minus its
/// trailing `.gz`) as the container's filename header.
pub fn gz_payload(data: &str, path: &str) -> Result<Vec<u8>> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let name = name.strip_suffix(GZ_SUFFIX).unwrap_or(name);
    let mut encoder = GzBuilder::new()
        .filename(name)
        .write(Vec::new(), Compression::default());
    encoder.write_all(data.as_bytes())?;
    Ok(encoder.finish()?)
}

/// Upload `data` as the object's full content at `store_url`.
///
/// With `is_gzip` set, a path that fails the `.gz` tail probe gains the
/// suffix and the payload is compressed; a path that passes it is
/// uploaded verbatim. A single full-content PUT replaces any existing
/// object at the key.
pub async fn write_data_async(data: &str, store_url: &str, is_gzip: bool) -> Result<()> {
    let loc = parse_object_url(store_url)?;
    let mut path = loc.path.clone();
    let payload = if is_gzip && !has_gz_tail(&path) {
        path.push_str(GZ_SUFFIX);
        gz_payload(data, &path)?
    } else {
        data.as_bytes().to_vec()
    };
    let key = path.strip_prefix('/').unwrap_or(&path);
    let client = client().await?;
    put_object(&client, &loc.bucket, key, payload).await
}

/// Blocking wrapper around [`write_data_async`].
pub fn write_data(data: &str, store_url: &str, is_gzip: bool) -> Result<()> {
    block_on(write_data_async(data, store_url, is_gzip))
}

// -----------------------------------------------------------------------------
// Hierarchical listing engine
// -----------------------------------------------------------------------------

/// Normalize a folder-style URL to end with exactly one trailing `/`.
pub fn normalize_folder_url(folder_url: &str) -> String {
    if folder_url.ends_with('/') {
        folder_url.to_owned()
    } else {
        format!("{folder_url}/")
    }
}

/// Reduce a flat key listing to the distinct immediate children of
/// `prefix`, returned as full URLs under `folder_url`.
///
/// `folder_url` must carry its trailing separator and `prefix` is its
/// key form (leading separator stripped). A key that is the folder
/// marker object itself collapses to the folder URL and is discarded —
/// the prefix is never its own child.
pub fn immediate_children_from_keys<'a>(
    folder_url: &str,
    prefix: &str,
    keys: impl IntoIterator<Item = &'a str>,
) -> HashSet<String> {
    let mut children = HashSet::new();
    for key in keys {
        let relative = key.strip_prefix(prefix).unwrap_or(key);
        let first_segment = match relative.split_once('/') {
            Some((head, _)) => head,
            None => relative,
        };
        let candidate = format!("{folder_url}{first_segment}");
        if candidate == folder_url {
            continue;
        }
        children.insert(candidate);
    }
    children
}

/// List everything exactly one level below `folder_url`.
///
/// The store has no native directories, so this prefix-scans the bucket
/// and reduces the key stream to one URL per distinct first segment.
/// Many keys under the same child collapse to a single entry; a prefix
/// with no matching keys yields an empty set, not an error.
pub async fn list_immediate_children_async(folder_url: &str) -> Result<HashSet<String>> {
    let folder = normalize_folder_url(folder_url);
    let loc = parse_object_url(&folder)?;
    let client = client().await?;
    let keys = list_objects(&client, &loc.bucket, loc.key()).await?;
    Ok(immediate_children_from_keys(
        &folder,
        loc.key(),
        keys.iter().map(String::as_str),
    ))
}

/// Blocking wrapper around [`list_immediate_children_async`].
pub fn list_immediate_children(folder_url: &str) -> Result<HashSet<String>> {
    block_on(list_immediate_children_async(folder_url))
}
