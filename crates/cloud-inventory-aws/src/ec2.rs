//! EC2 client wrapper
//!
//! Builds a region-bound EC2 client for an optional profile and converts
//! `DescribeInstances` pages into provider-neutral raw records.

use crate::error::{AwsError, Result};
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_ec2::Client;
use aws_sdk_ec2::config::Region as AwsRegion;
use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ec2::types::{Instance, Reservation, Tag};
use cloud_inventory_core::{RawInstance, RawReservation, RawTag, Region};

/// EC2 client bound to one region
pub struct Ec2 {
    client: Client,
    region: Region,
}

impl Ec2 {
    /// Load shared AWS config for `region` and `profile` and check that the
    /// credential chain resolves before any API call is made.
    ///
    /// The check goes around the client's identity cache, so the first
    /// request resolves credentials a second time. With assume-role or SSO
    /// profiles that means two resolutions per region.
    pub async fn connect(region: &Region, profile: Option<&str>) -> Result<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(AwsRegion::new(region.as_str()));
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        let config = loader.load().await;

        let provider = config.credentials_provider().ok_or_else(|| {
            AwsError::Credentials("no credentials provider is configured".to_string())
        })?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| AwsError::Credentials(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(
            "Connected EC2 client for {} (profile: {})",
            region,
            profile.unwrap_or("default")
        );

        Ok(Self {
            client: Client::new(&config),
            region: region.clone(),
        })
    }

    /// Describe every instance in the region, following all result pages
    pub async fn describe_instances(&self) -> Result<Vec<RawReservation>> {
        let mut pages = self.client.describe_instances().into_paginator().send();
        let mut reservations = Vec::new();
        let mut page_count = 0usize;

        while let Some(page) = pages.next().await {
            let page = page.map_err(request_error)?;
            page_count += 1;
            reservations.extend(page.reservations().iter().map(convert_reservation));
        }

        tracing::debug!(
            "{}: fetched {} page(s), {} reservation(s)",
            self.region,
            page_count,
            reservations.len()
        );
        Ok(reservations)
    }
}

/// Service errors keep their EC2 error code; anything without one
/// (dispatch, timeout, malformed response) becomes a plain request error.
fn request_error<E, R>(err: SdkError<E, R>) -> AwsError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err.code() {
        Some(code) => AwsError::Service {
            code: code.to_string(),
            message: err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| DisplayErrorContext(&err).to_string()),
        },
        None => AwsError::Request(DisplayErrorContext(&err).to_string()),
    }
}

pub(crate) fn convert_reservation(reservation: &Reservation) -> RawReservation {
    RawReservation {
        instances: reservation.instances().iter().map(convert_instance).collect(),
    }
}

pub(crate) fn convert_instance(instance: &Instance) -> RawInstance {
    RawInstance {
        instance_id: instance.instance_id().map(str::to_string),
        instance_type: instance.instance_type().map(|t| t.as_str().to_string()),
        state: instance
            .state()
            .and_then(|s| s.name())
            .map(|n| n.as_str().to_string()),
        tags: instance.tags().iter().map(convert_tag).collect(),
    }
}

fn convert_tag(tag: &Tag) -> RawTag {
    RawTag {
        key: tag.key().map(str::to_string),
        value: tag.value().map(str::to_string),
    }
}
