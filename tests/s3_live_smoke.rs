// Live round-trip smoke tests against a real endpoint.
//
// Set S3TEXTIO_TEST_BUCKET to a scratch bucket (plus the usual AWS_*
// variables, and AWS_ENDPOINT_URL for MinIO-style stores) to run; each
// test skips cleanly when the bucket is unset.

use std::io::Read;

use anyhow::Result;
use flate2::read::GzDecoder;
use s3textio::{
    client, get_object, list_immediate_children_async, parse_object_url, read_lines_async,
    write_data_async,
};

fn test_bucket() -> Option<String> {
    std::env::var("S3TEXTIO_TEST_BUCKET")
        .ok()
        .filter(|b| !b.is_empty())
}

#[tokio::test]
async fn plain_write_read_round_trip() -> Result<()> {
    let Some(bucket) = test_bucket() else {
        eprintln!("skipping: S3TEXTIO_TEST_BUCKET not set");
        return Ok(());
    };
    let url = format!("s3://{bucket}/s3textio-smoke/round_trip.txt");
    let content = "first\nsecond\n";

    write_data_async(content, &url, false).await?;

    let lines = read_lines_async(&url).await?;
    assert_eq!(lines, vec!["first", "second", ""]);
    assert_eq!(lines.join("\n"), content);
    Ok(())
}

#[tokio::test]
async fn gzip_write_stores_suffixed_compressed_object() -> Result<()> {
    let Some(bucket) = test_bucket() else {
        eprintln!("skipping: S3TEXTIO_TEST_BUCKET not set");
        return Ok(());
    };
    let url = format!("s3://{bucket}/s3textio-smoke/compressed.txt");
    let content = "compress me\n";

    write_data_async(content, &url, true).await?;

    // The stored key gained the .gz suffix; its bytes are a gzip container.
    let stored = parse_object_url(&format!("{url}.gz"))?;
    let client = client().await?;
    let bytes = get_object(&client, &stored.bucket, stored.key()).await?;

    let mut decoder = GzDecoder::new(&bytes[..]);
    let mut out = String::new();
    decoder.read_to_string(&mut out)?;
    assert_eq!(out, content);
    Ok(())
}

#[tokio::test]
async fn listing_returns_immediate_children() -> Result<()> {
    let Some(bucket) = test_bucket() else {
        eprintln!("skipping: S3TEXTIO_TEST_BUCKET not set");
        return Ok(());
    };
    let folder = format!("s3://{bucket}/s3textio-smoke/tree");
    for key in ["a/x.txt", "a/y.txt", "b.txt"] {
        write_data_async("data\n", &format!("{folder}/{key}"), false).await?;
    }

    let children = list_immediate_children_async(&folder).await?;

    assert!(children.contains(&format!("{folder}/a")));
    assert!(children.contains(&format!("{folder}/b.txt")));
    Ok(())
}
