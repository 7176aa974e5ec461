//! AWS instance source implementation

use crate::ec2::Ec2;
use async_trait::async_trait;
use cloud_inventory_core::{InstanceSource, ProviderFailure, RawReservation, Region};

/// AWS provider
///
/// Connects a fresh region-bound EC2 client on every call, so each region
/// queried by the aggregator resolves credentials independently.
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsProvider;

impl AwsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InstanceSource for AwsProvider {
    fn name(&self) -> &str {
        "aws"
    }

    async fn describe_instances(
        &self,
        region: &Region,
        profile: Option<&str>,
    ) -> Result<Vec<RawReservation>, ProviderFailure> {
        let ec2 = Ec2::connect(region, profile).await?;
        Ok(ec2.describe_instances().await?)
    }
}
