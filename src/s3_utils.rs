// src/s3_utils.rs
//
// Copyright, 2025.  Signal65 / Futurum Group.
//
//! Low-level object operations over an explicitly injected S3 client.
//! Failures from the SDK propagate unmodified: no retry, no translation,
//! no default substitution.

use anyhow::{Context, Result};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;

// ----------------------------
// Get operations
// ----------------------------

/// Download a single object into memory.
pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Bytes> {
    let resp = client.get_object().bucket(bucket).key(key).send().await?;
    let data = resp
        .body
        .collect()
        .await
        .context("collect body failed")?
        .into_bytes();
    Ok(data)
}

// ---------------------
// Put operations
// ---------------------

/// Upload an object's full content, replacing anything already at `key`.
pub async fn put_object(client: &Client, bucket: &str, key: &str, data: Vec<u8>) -> Result<()> {
    let body = ByteStream::from(data);
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .send()
        .await?;
    Ok(())
}

// ---------------------
// List operations
// ---------------------

/// List every key that starts with `prefix` (handles pagination).
pub async fn list_objects(client: &Client, bucket: &str, prefix: &str) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    let mut cont: Option<String> = None;
    loop {
        let mut req = client.list_objects_v2().bucket(bucket).prefix(prefix);
        if let Some(token) = &cont {
            req = req.continuation_token(token);
        }
        let resp = req.send().await?;
        for obj in resp.contents() {
            if let Some(k) = obj.key() {
                keys.push(k.to_owned());
            }
        }
        if let Some(token) = resp.next_continuation_token() {
            cont = Some(token.to_string());
        } else {
            break;
        }
    }
    Ok(keys)
}
