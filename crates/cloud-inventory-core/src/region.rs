//! Supported regions

use crate::error::{InventoryError, Result};
use std::fmt;

/// Regions this tool is allowed to query, in all-regions order.
pub const SUPPORTED_REGIONS: [&str; 6] = [
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "us-gov-west-1",
    "us-gov-east-1",
];

/// A region identifier from [`SUPPORTED_REGIONS`]
///
/// The only way to get a `Region` is through [`Region::parse`] or
/// [`Region::all`], so holding one means the allowlist check already passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(&'static str);

impl Region {
    pub fn parse(name: &str) -> Result<Self> {
        SUPPORTED_REGIONS
            .into_iter()
            .find(|r| *r == name)
            .map(Region)
            .ok_or_else(|| {
                InventoryError::Region(format!(
                    "Unsupported region '{}'. Supported regions: {}",
                    name,
                    SUPPORTED_REGIONS.join(", ")
                ))
            })
    }

    /// Every supported region
    pub fn all() -> Vec<Region> {
        SUPPORTED_REGIONS.into_iter().map(Region).collect()
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        self.0
    }
}
