//! Instance source trait definition

use crate::error::ProviderFailure;
use crate::record::RawReservation;
use crate::region::Region;
use async_trait::async_trait;

/// Remote instance-description abstraction
///
/// Providers implement this trait to hand raw reservations to the
/// [`InventoryService`](crate::InventoryService). Implementations resolve
/// credentials for `profile` themselves and must follow every result page
/// before returning.
#[async_trait]
pub trait InstanceSource: Send + Sync {
    /// Returns the provider name (e.g., "aws")
    fn name(&self) -> &str;

    /// Describe every instance in `region`
    async fn describe_instances(
        &self,
        region: &Region,
        profile: Option<&str>,
    ) -> Result<Vec<RawReservation>, ProviderFailure>;
}
