// src/s3_client.rs
//
// Copyright, 2025.  Signal65 / Futurum Group.
//
//! Thread-safe, blocking wrapper around the async AWS Rust SDK.
//! Owns the lazily created global S3 client every operation shares.

use anyhow::{bail, Result};
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::{config::Region, Client};
use once_cell::sync::Lazy;
use std::env;
use tokio::runtime::Handle;
use tokio::sync::OnceCell;
use tokio::task;

use crate::constants::DEFAULT_REGION;

// -----------------------------------------------------------------------------
// Global S3 client (lazy, thread-safe)
// -----------------------------------------------------------------------------
static CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Async getter for the global S3 client.
/// Safe to call from any async context; initializes once without blocking.
pub async fn client() -> Result<Client> {
    let client_ref = CLIENT
        .get_or_try_init(|| async {
            // Load .env first so AWS_* vars are available.
            dotenvy::dotenv().ok();

            if env::var("AWS_ACCESS_KEY_ID").is_err() || env::var("AWS_SECRET_ACCESS_KEY").is_err()
            {
                bail!("Missing AWS_ACCESS_KEY_ID or AWS_SECRET_ACCESS_KEY");
            }

            let region =
                RegionProviderChain::first_try(env::var("AWS_REGION").ok().map(Region::new))
                    .or_default_provider()
                    .or_else(Region::new(DEFAULT_REGION));

            let mut loader =
                aws_config::defaults(aws_config::BehaviorVersion::latest()).region(region);
            if let Ok(endpoint) = env::var("AWS_ENDPOINT_URL") {
                if !endpoint.is_empty() {
                    loader = loader.endpoint_url(endpoint);
                }
            }
            let cfg = loader.load().await;

            // Path-style addressing: virtual-hosted style (bucket.endpoint)
            // does not work with custom endpoints (MinIO, Ceph, etc.).
            let s3_config = aws_sdk_s3::config::Builder::from(&cfg)
                .force_path_style(true)
                .build();
            Ok::<_, anyhow::Error>(Client::from_conf(s3_config))
        })
        .await?;

    Ok(client_ref.clone())
}

// -----------------------------------------------------------------------------
// Helper: synchronously wait on a future
// -----------------------------------------------------------------------------

/// Run `fut` to completion on the current runtime, or on a lazily created
/// fallback runtime when called from plain synchronous code.
pub fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    if let Ok(handle) = Handle::try_current() {
        task::block_in_place(|| handle.block_on(fut))
    } else {
        static RT: Lazy<tokio::runtime::Runtime> =
            Lazy::new(|| tokio::runtime::Runtime::new().expect("tokio runtime"));
        RT.block_on(fut)
    }
}
