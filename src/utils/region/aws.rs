use std::fmt::{Display, Formatter};
use std::str::FromStr;
use log::error;
use crate::errors::{CloudUriError, CloudUriResult};
use crate::errors::CloudUriError::InvalidArgumentError;
use crate::utils::region::Region;

/// AWSRegion enumerates the regions which have an Amazon S3 endpoint, by their common name.
/// The region code in an S3 URL (e.g. `eu-central-1` in
/// `https://test-bucket.s3.eu-central-1.amazonaws.com/newfile.png`) is given by `get_region`.
/// (The region based on [Amazon S3 Service Endpoint](https://docs.aws.amazon.com/general/latest/gr/s3.html))
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AWSRegion {
    Ohio,
    NVirginia,
    NCalifornia,
    Oregon,
    CapeTown,
    HongKong,
    Hyderabad,
    Jakarta,
    Malaysia,
    Melbourne,
    Mumbai,
    Osaka,
    Seoul,
    Singapore,
    Sydney,
    Thailand,
    Tokyo,
    Canada,
    Calgary,
    Frankfurt,
    Ireland,
    London,
    Milan,
    Paris,
    Spain,
    Stockholm,
    Zurich,
    TelAviv,
    Mexico,
    Bahrain,
    UAE,
    SaoPaulo,
    USEastGovernment,
    USWestGovernment,
}

// (variant, region code, lower case common name). Government regions have no common name.
const AWS_REGIONS: [(AWSRegion, &str, Option<&str>); 34] = [
    (AWSRegion::Ohio, "us-east-2", Some("ohio")),
    (AWSRegion::NVirginia, "us-east-1", Some("virginia")),
    (AWSRegion::NCalifornia, "us-west-1", Some("california")),
    (AWSRegion::Oregon, "us-west-2", Some("oregon")),
    (AWSRegion::CapeTown, "af-south-1", Some("capetown")),
    (AWSRegion::HongKong, "ap-east-1", Some("hongkong")),
    (AWSRegion::Hyderabad, "ap-south-2", Some("hyderabad")),
    (AWSRegion::Jakarta, "ap-southeast-3", Some("jakarta")),
    (AWSRegion::Malaysia, "ap-southeast-5", Some("malaysia")),
    (AWSRegion::Melbourne, "ap-southeast-4", Some("melbourne")),
    (AWSRegion::Mumbai, "ap-south-1", Some("mumbai")),
    (AWSRegion::Osaka, "ap-northeast-3", Some("osaka")),
    (AWSRegion::Seoul, "ap-northeast-2", Some("seoul")),
    (AWSRegion::Singapore, "ap-southeast-1", Some("singapore")),
    (AWSRegion::Sydney, "ap-southeast-2", Some("sydney")),
    (AWSRegion::Thailand, "ap-southeast-7", Some("thailand")),
    (AWSRegion::Tokyo, "ap-northeast-1", Some("tokyo")),
    (AWSRegion::Canada, "ca-central-1", Some("canada")),
    (AWSRegion::Calgary, "ca-west-1", Some("calgary")),
    (AWSRegion::Frankfurt, "eu-central-1", Some("frankfurt")),
    (AWSRegion::Ireland, "eu-west-1", Some("ireland")),
    (AWSRegion::London, "eu-west-2", Some("london")),
    (AWSRegion::Milan, "eu-south-1", Some("milan")),
    (AWSRegion::Paris, "eu-west-3", Some("paris")),
    (AWSRegion::Spain, "eu-south-2", Some("spain")),
    (AWSRegion::Stockholm, "eu-north-1", Some("stockholm")),
    (AWSRegion::Zurich, "eu-central-2", Some("zurich")),
    (AWSRegion::TelAviv, "il-central-1", Some("telaviv")),
    (AWSRegion::Mexico, "mx-central-1", Some("mexico")),
    (AWSRegion::Bahrain, "me-south-1", Some("bahrain")),
    (AWSRegion::UAE, "me-central-1", Some("uae")),
    (AWSRegion::SaoPaulo, "sa-east-1", Some("saopaulo")),
    (AWSRegion::USEastGovernment, "us-gov-east-1", None),
    (AWSRegion::USWestGovernment, "us-gov-west-1", None),
];

impl AWSRegion {
    /// Look up the region only by its code, as written in an S3 URL host.
    /// Unlike [FromStr], common names like `tokyo` are refused and the match is case-sensitive.
    pub fn from_region_code(code: &str) -> CloudUriResult<Self> {
        AWS_REGIONS.iter()
            .find(|(_, region_code, _)| *region_code == code)
            .map(|(region, _, _)| *region)
            .ok_or_else(|| {
                error!("{} is not an AWS region code", code);
                InvalidArgumentError(format!("{} is not an AWS region code", code))
            })
    }
}

impl Region for AWSRegion {
    fn get_region(&self) -> &str {
        // SAFETY: Every variant has an entry in AWS_REGIONS.
        AWS_REGIONS.iter()
            .find(|(region, _, _)| region == self)
            .map(|(_, code, _)| *code)
            .unwrap()
    }
}

impl Display for AWSRegion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_region())
    }
}

impl FromStr for AWSRegion {
    type Err = CloudUriError;

    /// Accept the region code or the common name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region_str = s.to_lowercase();

        AWS_REGIONS.iter()
            .find(|(_, code, name)| *code == region_str || *name == Some(region_str.as_str()))
            .map(|(region, _, _)| *region)
            .ok_or_else(|| {
                error!("{} not exist in AWS region", region_str);
                InvalidArgumentError(format!("{} not exist in AWS region", region_str))
            })
    }
}

#[cfg(feature = "aws_config")]
impl aws_config::meta::region::ProvideRegion for AWSRegion {
    fn region(&self) -> aws_config::meta::region::future::ProvideRegion {
        let region = self.get_region().to_string();
        aws_config::meta::region::future::ProvideRegion::new(async move {
            Some(aws_config::Region::new(region))
        })
    }
}

#[cfg(feature = "aws_config")]
impl TryFrom<aws_config::Region> for AWSRegion {
    type Error = CloudUriError;

    fn try_from(value: aws_config::Region) -> Result<Self, Self::Error> {
        AWSRegion::from_region_code(value.as_ref())
    }
}

impl Default for AWSRegion {
    fn default() -> Self {
        AWSRegion::Ohio
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use crate::errors::CloudUriError::InvalidArgumentError;
    use crate::utils::region::Region;
    use super::{AWSRegion, AWS_REGIONS};

    #[test]
    fn test_region_table_is_complete() {
        for (region, code, _) in AWS_REGIONS {
            assert_eq!(region.get_region(), code);
        }
        let mut codes = AWS_REGIONS.iter().map(|(_, code, _)| *code).collect::<Vec<_>>();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), AWS_REGIONS.len());
    }

    #[test]
    fn test_region_valid_inputs() {
        for (region, code, name) in AWS_REGIONS {
            assert_eq!(AWSRegion::from_str(code).unwrap(), region);
            assert_eq!(AWSRegion::from_str(&code.to_uppercase()).unwrap(), region);
            assert_eq!(AWSRegion::from_region_code(code).unwrap(), region);
            if let Some(name) = name {
                assert_eq!(AWSRegion::from_str(name).unwrap(), region);
            }
        }
        assert_eq!(AWSRegion::from_str("Tokyo").unwrap(), AWSRegion::Tokyo);
        assert_eq!(AWSRegion::NVirginia.get_region(), "us-east-1");
        assert_eq!(AWSRegion::Frankfurt.to_string(), "eu-central-1");
    }

    #[test]
    fn test_region_invalid_inputs() {
        let region_str = "no-exist-1";
        let region_from_str = AWSRegion::from_str(region_str);
        assert!(region_from_str.is_err());
        assert_eq!(region_from_str.unwrap_err().to_string(), format!("Get invalid argument error: {} not exist in AWS region", region_str));
    }

    #[test]
    fn test_region_code_only() {
        assert_eq!(
            AWSRegion::from_region_code("tokyo").unwrap_err(),
            InvalidArgumentError("tokyo is not an AWS region code".to_string()));
        assert!(AWSRegion::from_region_code("EU-CENTRAL-1").is_err());
    }

    #[test]
    fn test_region_default() {
        let region = AWSRegion::default();
        assert_eq!(region.get_region(), "us-east-2");
    }

    #[cfg(feature = "aws_config")]
    #[tokio::test]
    async fn test_region_provider() {
        use aws_config::meta::region::ProvideRegion;

        let region = AWSRegion::Tokyo.region().await;
        assert_eq!(region, Some(aws_config::Region::new("ap-northeast-1")));
        assert_eq!(AWSRegion::try_from(aws_config::Region::new("eu-west-1")).unwrap(), AWSRegion::Ireland);
    }
}
