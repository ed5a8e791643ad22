use log::{debug, error, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use crate::errors::CloudUriError::MalformedUrlError;
use crate::errors::{CloudUriError, CloudUriResult};
use crate::utils::classifier::HTTPS_SCHEME;

// These regexes split the input into the optional scheme, bucket, and key components.
// Both accept any input: without a known scheme the whole input is split on the first slash.
static GOOGLE_CLOUD_STORAGE_URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(gs://|https://storage\.cloud\.google\.com/)?([^/]*)(?:/(.*))?$").unwrap());
static AWS_S3_URI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(S3://)?([^/]*)(?:/(.*))?$").unwrap());

const AWS_S3_HOST_LABEL: &str = ".s3.";
const AWS_HOST_SUFFIX: &str = "amazonaws.com";

/// Parse a Google Cloud Storage URL to the bucket and key.
///
/// # Arguments
/// - `url`: `gs://<bucket>/<key>` or `https://storage.cloud.google.com/<bucket>/<key>`.
///
/// # Returns
/// `(bucket, key)`. The key is empty when the input has no slash after the bucket.
///
/// The input is not validated. When it has neither of the known prefixes,
/// the whole input is split on the first slash anyway.
pub fn parse_google_cloud_storage_url(url: &str) -> (String, String) {
    split_bucket_key(&GOOGLE_CLOUD_STORAGE_URL_REGEX, url)
}

/// Parse an Amazon S3 URI like `S3://<bucket>/<key>` to the bucket and key.
///
/// Same rules as [parse_google_cloud_storage_url], with the case-sensitive `S3://` prefix.
pub fn parse_aws_s3_uri(uri: &str) -> (String, String) {
    split_bucket_key(&AWS_S3_URI_REGEX, uri)
}

fn split_bucket_key(regex: &Regex, input: &str) -> (String, String) {
    // SAFETY: Every group after the anchor is optional or unbounded and `(?s)` lets `.` take newlines,
    // so the regex matches any input.
    let capture = regex.captures(input).unwrap();

    if capture.get(1).is_none() {
        debug!("No known scheme in {}. Split it on the first slash as is", input);
    }

    let bucket = capture.get(2)
        .map(|c| c.as_str().to_string())
        .unwrap_or_default();
    let key = capture.get(3)
        .map(|c| c.as_str().to_string())
        .unwrap_or_default();

    (bucket, key)
}

/// Parse an Amazon S3 virtual-hosted-style URL to the bucket, key, and region.
///
/// # Arguments
/// - `url`: `https://<bucket>.s3.amazonaws.com/<key>` or `https://<bucket>.s3.<region>.amazonaws.com/<key>`.
///
/// # Returns
/// - CloudUriResult<(bucket, key, region)>: The region is empty when the URL has none.
/// When `https://`, the `.` after the bucket, the `.` after the region or `amazonaws.com` is missing,
/// returns [MalformedUrlError].
///
/// Only the delimiters are looked for, the labels between them are not checked.
/// So a bucket name with a dot or a path-style URL (`https://s3.<region>.amazonaws.com/<bucket>/<key>`)
/// is parsed without error but to wrong components.
pub fn parse_aws_s3_url(url: &str) -> CloudUriResult<(String, String, String)> {
    let rest = skip_past(url, HTTPS_SCHEME, url)?;

    let bucket_end = rest.find('.')
        .ok_or_else(|| malformed(url, "no '.' after the bucket"))?;
    let bucket = &rest[..bucket_end];

    let after_bucket = &rest[bucket_end..];
    if !after_bucket.starts_with(AWS_S3_HOST_LABEL) {
        warn!("{} doesn't have '{}' after the bucket. The parsed components can be wrong", url, AWS_S3_HOST_LABEL);
    }
    if after_bucket.len() < AWS_S3_HOST_LABEL.len() {
        return Err(malformed(url, "no room for '.s3.' after the bucket"));
    }
    let rest = after_bucket.get(AWS_S3_HOST_LABEL.len()..)
        .ok_or_else(|| malformed(url, "'.s3.' skip splitting a character after the bucket"))?;

    let (region, rest) = if rest.starts_with(AWS_HOST_SUFFIX) {
        ("", rest)
    }
    else {
        let region_end = rest.find('.')
            .ok_or_else(|| malformed(url, "no '.' after the region"))?;
        (&rest[..region_end], &rest[region_end + 1..])
    };

    let rest = skip_past(rest, AWS_HOST_SUFFIX, url)?;
    let key = rest.strip_prefix('/').unwrap_or(rest);

    Ok((bucket.to_string(), key.to_string(), region.to_string()))
}

/// Get the rest of `input` after the first `delimiter`.
fn skip_past<'a>(input: &'a str, delimiter: &str, url: &str) -> CloudUriResult<&'a str> {
    match input.find(delimiter) {
        Some(index) => Ok(&input[index + delimiter.len()..]),
        None => Err(malformed(url, &format!("no '{}'", delimiter))),
    }
}

fn malformed(url: &str, reason: &str) -> CloudUriError {
    error!("Input url is malformed due to {}: {}", reason, url);
    MalformedUrlError(format!("Malformed S3 URL: {} has {}", url, reason))
}
