//! AWS provider for cloud-inventory
//!
//! This crate implements the [`InstanceSource`](cloud_inventory_core::InstanceSource)
//! trait on top of the AWS SDK for Rust, listing EC2 instances per region.
//!
//! # Requirements
//!
//! - Credentials resolvable through the standard AWS chain (environment,
//!   shared config/credentials files, SSO, IMDS, ...)
//! - An optional profile name selects a section of the shared config files
//!
//! # Example
//!
//! ```ignore
//! use cloud_inventory_aws::AwsProvider;
//! use cloud_inventory_core::{InventoryService, Region};
//! use std::sync::Arc;
//!
//! let service = InventoryService::new(Arc::new(AwsProvider::new()), Some("dev".into()));
//! let records = service.list_instances(&Region::parse("us-east-1")?).await?;
//! ```

pub mod ec2;
pub mod error;
pub mod provider;

pub use ec2::Ec2;
pub use error::{AwsError, Result};
pub use provider::AwsProvider;
