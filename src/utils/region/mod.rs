pub mod aws;

/// A storage location region which can be written as a region code.
pub trait Region {
    fn get_region(&self) -> &str;
}

/// Region of a location which has none, e.g. Google Cloud Storage or an S3 URI.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoneRegion;

impl Region for NoneRegion {
    fn get_region(&self) -> &str {
        ""
    }
}
