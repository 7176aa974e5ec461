//! Region query and multi-region aggregation

use crate::error::{InventoryError, Result};
use crate::provider::InstanceSource;
use crate::record::{InstanceRecord, normalize};
use crate::region::Region;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Lists instances through an [`InstanceSource`]
///
/// Cheap to clone; clones share the same source.
#[derive(Clone)]
pub struct InventoryService {
    source: Arc<dyn InstanceSource>,
    profile: Option<String>,
}

impl InventoryService {
    pub fn new(source: Arc<dyn InstanceSource>, profile: Option<String>) -> Self {
        Self { source, profile }
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Fetch and normalize every instance in one region
    pub async fn list_instances(&self, region: &Region) -> Result<Vec<InstanceRecord>> {
        tracing::debug!(
            "Describing instances in {} via {}",
            region,
            self.source.name()
        );

        let reservations = self
            .source
            .describe_instances(region, self.profile())
            .await
            .map_err(|failure| {
                tracing::debug!(
                    "Describe failed in {} (code: {:?}): {}",
                    region,
                    failure.code,
                    failure.message
                );
                InventoryError::classify(&failure)
            })?;

        let records = normalize(&reservations);
        tracing::debug!(
            "{}: {} reservations, {} instances",
            region,
            reservations.len(),
            records.len()
        );
        Ok(records)
    }

    /// Query every region concurrently and concatenate in input order
    ///
    /// The first error aborts the remaining queries and is returned as is;
    /// results from other regions are dropped.
    pub async fn list_all_regions(&self, regions: &[Region]) -> Result<Vec<InstanceRecord>> {
        let mut tasks = JoinSet::new();
        for (index, region) in regions.iter().cloned().enumerate() {
            let service = self.clone();
            tasks.spawn(async move { (index, service.list_instances(&region).await) });
        }

        let mut slots: Vec<Option<Vec<InstanceRecord>>> = vec![None; regions.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| {
                InventoryError::Generic(format!("region query task failed: {}", e))
            })?;
            // Returning drops the JoinSet, which aborts the tasks still running.
            slots[index] = Some(result?);
        }

        Ok(slots.into_iter().flatten().flatten().collect())
    }
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryService")
            .field("source", &self.source.name())
            .field("profile", &self.profile)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderFailure;
    use crate::mock::MockSource;
    use crate::record::{RawInstance, RawReservation, RawTag};
    use std::time::Duration;

    fn instance(id: &str, name: Option<&str>, state: &str) -> RawInstance {
        RawInstance {
            instance_id: Some(id.to_string()),
            instance_type: Some("t3.micro".to_string()),
            state: Some(state.to_string()),
            tags: name.map(|n| vec![RawTag::new("Name", n)]).unwrap_or_default(),
        }
    }

    fn region(name: &str) -> Region {
        Region::parse(name).unwrap()
    }

    fn ids(records: &[InstanceRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_instances_normalizes() {
        let source = Arc::new(MockSource::new().with_reservations(
            "us-east-1",
            vec![RawReservation {
                instances: vec![
                    instance("i-1", Some("web-1"), "running"),
                    instance("i-2", None, "stopped"),
                ],
            }],
        ));
        let service = InventoryService::new(source.clone(), Some("dev".to_string()));

        let records = service.list_instances(&region("us-east-1")).await.unwrap();

        assert_eq!(
            records,
            vec![
                InstanceRecord::new("i-1", "web-1", "t3.micro", "running"),
                InstanceRecord::new("i-2", "", "t3.micro", "stopped"),
            ]
        );
        assert_eq!(
            source.calls(),
            vec![("us-east-1".to_string(), Some("dev".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_list_instances_classifies_failure() {
        let source = Arc::new(
            MockSource::new()
                .with_failure("us-west-2", ProviderFailure::new("AuthFailure", "bad sig")),
        );
        let service = InventoryService::new(source, None);

        let err = service
            .list_instances(&region("us-west-2"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::Authentication("Authentication failure".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_all_regions_keeps_input_order() {
        // The first region answers last.
        let source = Arc::new(
            MockSource::new()
                .with_reservations(
                    "us-east-1",
                    vec![RawReservation {
                        instances: vec![
                            instance("a1", None, "running"),
                            instance("a2", None, "running"),
                        ],
                    }],
                )
                .with_delay("us-east-1", Duration::from_millis(50))
                .with_reservations(
                    "us-east-2",
                    vec![RawReservation {
                        instances: vec![instance("b1", None, "running")],
                    }],
                )
                .with_reservations(
                    "us-west-1",
                    vec![RawReservation {
                        instances: vec![instance("c1", None, "running")],
                    }],
                )
                .with_delay("us-west-1", Duration::from_millis(20)),
        );
        let service = InventoryService::new(source.clone(), None);

        let records = service
            .list_all_regions(&[region("us-east-1"), region("us-east-2"), region("us-west-1")])
            .await
            .unwrap();

        assert_eq!(ids(&records), ["a1", "a2", "b1", "c1"]);
        assert_eq!(source.call_count(), 3);
    }

    #[tokio::test]
    async fn test_list_all_regions_fails_fast_on_rate_limit() {
        let mut source = MockSource::new();
        for name in crate::SUPPORTED_REGIONS {
            source = source.with_reservations(
                name,
                vec![RawReservation {
                    instances: vec![instance(&format!("i-{}", name), None, "running")],
                }],
            );
        }
        let source = Arc::new(source.with_failure(
            "us-west-2",
            ProviderFailure::new("ThrottlingException", "Rate exceeded"),
        ));
        let service = InventoryService::new(source, None);

        let err = service.list_all_regions(&Region::all()).await.unwrap_err();
        assert_eq!(
            err,
            InventoryError::RateLimit("Rate limit exceeded. Try again soon.".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_all_regions_does_not_wait_for_slow_siblings() {
        let source = Arc::new(
            MockSource::new()
                .with_delay("us-east-1", Duration::from_secs(30))
                .with_failure("us-east-2", ProviderFailure::uncoded("connection reset")),
        );
        let service = InventoryService::new(source, None);

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            service.list_all_regions(&[region("us-east-1"), region("us-east-2")]),
        )
        .await
        .expect("aggregation should abort on the first error");

        assert_eq!(
            result.unwrap_err(),
            InventoryError::Generic("connection reset".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_all_regions_empty() {
        let source = Arc::new(MockSource::new());
        let service = InventoryService::new(source.clone(), None);

        let records = service.list_all_regions(&[]).await.unwrap();
        assert!(records.is_empty());
        assert_eq!(source.call_count(), 0);
    }
}
