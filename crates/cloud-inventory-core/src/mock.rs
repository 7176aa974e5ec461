//! In-memory instance source
//!
//! Serves canned reservations or failures per region and records every call,
//! so the service and the CLI command can be tested without a provider
//! account.

use crate::error::ProviderFailure;
use crate::provider::InstanceSource;
use crate::record::RawReservation;
use crate::region::Region;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum MockResponse {
    Reservations(Vec<RawReservation>),
    Failure(ProviderFailure),
}

/// Canned [`InstanceSource`]
///
/// Regions without a configured response return no reservations.
#[derive(Debug, Default)]
pub struct MockSource {
    responses: HashMap<String, MockResponse>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reservations(
        mut self,
        region: impl Into<String>,
        reservations: Vec<RawReservation>,
    ) -> Self {
        self.responses
            .insert(region.into(), MockResponse::Reservations(reservations));
        self
    }

    pub fn with_failure(mut self, region: impl Into<String>, failure: ProviderFailure) -> Self {
        self.responses
            .insert(region.into(), MockResponse::Failure(failure));
        self
    }

    /// Delay the answer for `region`
    pub fn with_delay(mut self, region: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(region.into(), delay);
        self
    }

    /// `(region, profile)` of every call so far, in call order
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl InstanceSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn describe_instances(
        &self,
        region: &Region,
        profile: Option<&str>,
    ) -> Result<Vec<RawReservation>, ProviderFailure> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((region.to_string(), profile.map(str::to_string)));
        }

        if let Some(delay) = self.delays.get(region.as_str()) {
            tokio::time::sleep(*delay).await;
        }

        match self.responses.get(region.as_str()) {
            Some(MockResponse::Reservations(reservations)) => Ok(reservations.clone()),
            Some(MockResponse::Failure(failure)) => Err(failure.clone()),
            None => Ok(Vec::new()),
        }
    }
}
