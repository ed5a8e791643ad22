pub(crate) const GOOGLE_CLOUD_STORAGE_SCHEME: &str = "gs://";
pub(crate) const GOOGLE_CLOUD_STORAGE_HOST: &str = "storage.cloud.google.com";
pub(crate) const HTTPS_SCHEME: &str = "https://";
pub(crate) const AWS_S3_URI_SCHEME: &str = "S3://";

/// Check the input is a Google Cloud Storage URL.
///
/// # Examples
/// - `gs://test-bucket/newfile.png`
/// - `https://storage.cloud.google.com/test-bucket/newfile.png`
///
/// The host check is not anchored, so `storage.cloud.google.com` anywhere in the input matches.
pub fn is_google_cloud_storage_url(url: &str) -> bool {
    url.starts_with(GOOGLE_CLOUD_STORAGE_SCHEME) || url.contains(GOOGLE_CLOUD_STORAGE_HOST)
}

/// Check the input is an Amazon S3 URL.
///
/// # Examples
/// - `https://test-bucket.s3.amazonaws.com/newfile.png`
/// - `https://test-bucket.s3.eu-central-1.amazonaws.com/newfile.png`
///
/// This is a heuristic, not a strict scheme check: any `https://` input containing `s3`
/// matches, e.g. `https://example.com/s3/file`.
pub fn is_aws_s3_url(url: &str) -> bool {
    url.starts_with(HTTPS_SCHEME) && url.contains("s3")
}

/// Check the input is an Amazon S3 URI like `S3://test-bucket/newfile.png`.
/// The prefix is case-sensitive, `s3://` doesn't match.
pub fn is_aws_s3_uri(uri: &str) -> bool {
    uri.starts_with(AWS_S3_URI_SCHEME)
}

pub fn is_aws_s3_url_or_uri(url_or_uri: &str) -> bool {
    is_aws_s3_url(url_or_uri) || is_aws_s3_uri(url_or_uri)
}

#[cfg(test)]
mod tests {
    use super::{is_aws_s3_uri, is_aws_s3_url, is_aws_s3_url_or_uri, is_google_cloud_storage_url};

    #[test]
    fn test_is_google_cloud_storage_url() {
        assert!(is_google_cloud_storage_url("gs://test-bucket/newfile.png"));
        assert!(is_google_cloud_storage_url("gs://"));
        assert!(is_google_cloud_storage_url("https://storage.cloud.google.com/test-bucket/newfile.png"));
        // Host match is not anchored to the start.
        assert!(is_google_cloud_storage_url("see storage.cloud.google.com for details"));

        assert!(!is_google_cloud_storage_url("GS://test-bucket/newfile.png"));
        assert!(!is_google_cloud_storage_url("https://test-bucket.s3.amazonaws.com/newfile.png"));
        assert!(!is_google_cloud_storage_url(""));
    }

    #[test]
    fn test_is_aws_s3_url() {
        assert!(is_aws_s3_url("https://test-bucket.s3.amazonaws.com/newfile.png"));
        assert!(is_aws_s3_url("https://test-bucket.s3.eu-central-1.amazonaws.com/newfile.png"));
        assert!(!is_aws_s3_url("http://test-bucket.s3.amazonaws.com/newfile.png"));
        assert!(!is_aws_s3_url("https://storage.cloud.google.com/test-bucket/newfile.png"));
    }

    #[test]
    fn test_is_aws_s3_url_false_positive() {
        assert!(is_aws_s3_url("https://example.com/s3/newfile.png"));
        assert!(is_aws_s3_url("https://storage.cloud.google.com/s3-backup/newfile.png"));
    }

    #[test]
    fn test_is_aws_s3_uri() {
        assert!(is_aws_s3_uri("S3://bucket/key"));
        assert!(!is_aws_s3_uri("s3://bucket/key"));
        assert!(!is_aws_s3_uri("https://test-bucket.s3.amazonaws.com/newfile.png"));
    }

    #[test]
    fn test_is_aws_s3_url_or_uri() {
        assert!(is_aws_s3_url_or_uri("S3://bucket/key"));
        assert!(is_aws_s3_url_or_uri("https://test-bucket.s3.amazonaws.com/newfile.png"));
        assert!(!is_aws_s3_url_or_uri("s3://bucket/key"));
        assert!(!is_aws_s3_url_or_uri("gs://test-bucket/newfile.png"));
    }
}
