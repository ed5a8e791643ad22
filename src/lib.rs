//! Classify and parse Google Cloud Storage and Amazon S3 object URLs and URIs.
//!
//! ```
//! use cloud_uri::{is_aws_s3_url, parse_aws_s3_url};
//!
//! let url = "https://test-bucket.s3.eu-central-1.amazonaws.com/newfile.png";
//! assert!(is_aws_s3_url(url));
//!
//! let (bucket, key, region) = parse_aws_s3_url(url).unwrap();
//! assert_eq!((bucket.as_str(), key.as_str(), region.as_str()), ("test-bucket", "newfile.png", "eu-central-1"));
//! ```
pub mod errors;
pub mod types;
pub mod utils;

pub use errors::{CloudUriError, CloudUriResult};
pub use types::location::{detect_storage_provider, parse_storage_url, StorageLocation, StorageProvider};
pub use utils::classifier::{is_aws_s3_uri, is_aws_s3_url, is_aws_s3_url_or_uri, is_google_cloud_storage_url};
pub use utils::parser::{parse_aws_s3_uri, parse_aws_s3_url, parse_google_cloud_storage_url};
pub use utils::region::aws::AWSRegion;
pub use utils::region::Region;
