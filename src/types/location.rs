use std::fmt::{Display, Formatter};
use std::str::FromStr;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use crate::errors::{CloudUriError, CloudUriResult};
use crate::errors::CloudUriError::UnsupportedUrlError;
use crate::utils::classifier::{
    is_aws_s3_uri, is_aws_s3_url_or_uri, is_google_cloud_storage_url,
    AWS_S3_URI_SCHEME, GOOGLE_CLOUD_STORAGE_SCHEME,
};
use crate::utils::parser::{parse_aws_s3_uri, parse_aws_s3_url, parse_google_cloud_storage_url};
use crate::utils::region::aws::AWSRegion;
use crate::utils::region::{NoneRegion, Region};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum StorageProvider {
    GoogleCloudStorage,
    AmazonS3,
}

impl StorageProvider {
    /// Get the URI scheme of the provider (`gs://` or `S3://`).
    pub fn get_scheme(&self) -> &'static str {
        match self {
            StorageProvider::GoogleCloudStorage => GOOGLE_CLOUD_STORAGE_SCHEME,
            StorageProvider::AmazonS3 => AWS_S3_URI_SCHEME,
        }
    }
}

impl Display for StorageProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageProvider::GoogleCloudStorage => write!(f, "Google Cloud Storage"),
            StorageProvider::AmazonS3 => write!(f, "Amazon S3"),
        }
    }
}

/// Detect the storage provider of the input with the classifiers.
/// Google Cloud Storage is checked first, so an input both classifiers accept is Google Cloud Storage.
pub fn detect_storage_provider(url: &str) -> Option<StorageProvider> {
    if is_google_cloud_storage_url(url) {
        Some(StorageProvider::GoogleCloudStorage)
    }
    else if is_aws_s3_url_or_uri(url) {
        Some(StorageProvider::AmazonS3)
    }
    else {
        None
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// Object location parsed from a storage URL or URI.
pub struct StorageLocation {
    provider: StorageProvider,
    bucket: String,
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
}

impl StorageLocation {
    pub fn new(provider: StorageProvider, bucket: &str, key: &str, region: Option<&str>) -> Self {
        Self {
            provider,
            bucket: bucket.to_string(),
            key: key.to_string(),
            region: region.filter(|r| !r.is_empty()).map(|r| r.to_string()),
        }
    }

    pub fn get_provider(&self) -> StorageProvider {
        self.provider
    }

    pub fn get_bucket(&self) -> &str {
        &self.bucket
    }

    /// Get the object key. Empty when the URL points to the bucket itself.
    pub fn get_key(&self) -> &str {
        &self.key
    }

    /// Get the region code. Only an S3 URL with a region segment has it.
    pub fn get_region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Get the region as [AWSRegion].
    ///
    /// # Returns
    /// - `Ok(None)`: The location has no region.
    /// - `Err(InvalidArgumentError)`: The region is not a known AWS region code.
    pub fn get_aws_region(&self) -> CloudUriResult<Option<AWSRegion>> {
        self.region.as_deref()
            .map(AWSRegion::from_region_code)
            .transpose()
    }

    /// Get the region through the [Region] trait.
    /// A location without region gives [NoneRegion], whose region code is empty.
    pub fn get_region_or_none(&self) -> CloudUriResult<Box<dyn Region>> {
        match self.get_aws_region()? {
            Some(region) => Ok(Box::new(region)),
            None => Ok(Box::new(NoneRegion)),
        }
    }
}

impl Display for StorageLocation {
    /// Render `gs://bucket/key` or `S3://bucket/key`.
    /// An S3 location with region is rendered as `https://bucket.s3.region.amazonaws.com/key` to keep the region.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.provider, self.region.as_deref()) {
            (StorageProvider::AmazonS3, Some(region)) => write!(f, "https://{}.s3.{}.amazonaws.com", self.bucket, region)?,
            (provider, _) => write!(f, "{}{}", provider.get_scheme(), self.bucket)?,
        }

        if self.key.is_empty() {
            Ok(())
        } else {
            write!(f, "/{}", self.key)
        }
    }
}

impl FromStr for StorageLocation {
    type Err = CloudUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_storage_url(s)
    }
}

/// Classify the input and parse it with the parser of the detected provider.
///
/// # Arguments
/// - `url`: Google Cloud Storage URL, Amazon S3 URL, or Amazon S3 URI.
///
/// # Returns
/// - CloudUriResult<[StorageLocation]>: When no classifier accepts the input, returns [UnsupportedUrlError].
/// When the input is an S3 URL without the required delimiters, returns the parser's `MalformedUrlError`.
pub fn parse_storage_url(url: &str) -> CloudUriResult<StorageLocation> {
    match detect_storage_provider(url) {
        Some(StorageProvider::GoogleCloudStorage) => {
            debug!("Parse {} as Google Cloud Storage URL", url);
            let (bucket, key) = parse_google_cloud_storage_url(url);

            Ok(StorageLocation::new(StorageProvider::GoogleCloudStorage, &bucket, &key, None))
        }
        Some(StorageProvider::AmazonS3) if is_aws_s3_uri(url) => {
            debug!("Parse {} as Amazon S3 URI", url);
            let (bucket, key) = parse_aws_s3_uri(url);

            Ok(StorageLocation::new(StorageProvider::AmazonS3, &bucket, &key, None))
        }
        Some(StorageProvider::AmazonS3) => {
            debug!("Parse {} as Amazon S3 URL", url);
            let (bucket, key, region) = parse_aws_s3_url(url)?;

            Ok(StorageLocation::new(StorageProvider::AmazonS3, &bucket, &key, Some(&region)))
        }
        None => {
            error!("Input url is not a storage url: {}", url);
            Err(UnsupportedUrlError(format!(
                "Unsupported URL: {} is not a storage url. Support only 'gs://', \
                'https://storage.cloud.google.com/', 'S3://', and 'https://<bucket>.s3[.<region>].amazonaws.com/'", url)))
        }
    }
}
