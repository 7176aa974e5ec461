//! cloud-inventory core
//!
//! Provider-neutral half of the inventory tool: the error taxonomy, the
//! supported region list, instance records, the [`InstanceSource`] seam that
//! providers implement, single- and multi-region queries, and rendering.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              cloud-inventory CLI                │
//! │          (cloud-inventory ec2 ...)              │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │             cloud-inventory-core                │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │            InventoryService              │   │
//! │  │   list_instances / list_all_regions      │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐             │
//! │  │ normalize    │  │  render      │             │
//! │  └──────────────┘  └──────────────┘             │
//! └───────┬─────────────────────────────────────────┘
//!         │  trait InstanceSource
//! ┌───────▼───────┐ ┌───────────────┐
//! │  aws (EC2)    │ │  MockSource   │
//! └───────────────┘ └───────────────┘
//! ```

pub mod error;
pub mod mock;
pub mod output;
pub mod provider;
pub mod record;
pub mod region;
pub mod service;

// Re-exports
pub use error::{InventoryError, ProviderFailure, Result};
pub use mock::MockSource;
pub use output::{OutputFormat, render};
pub use provider::InstanceSource;
pub use record::{InstanceRecord, RawInstance, RawReservation, RawTag, normalize};
pub use region::{Region, SUPPORTED_REGIONS};
pub use service::InventoryService;
