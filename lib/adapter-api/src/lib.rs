//! Gateway adapter types shared by the marshaller and the notifier
//!
//! This library defines three families of types:
//! - `config`: the adapter configuration tree as the operator writes it
//! - `eventhub`: subscription state as delivered by the control plane
//! - `discovery`: the wire messages consumed by the enforcer

pub mod config;
pub mod discovery;
pub mod eventhub;

pub use config::{AdapterConfig, ConfigError, ControlPlaneConfig};
