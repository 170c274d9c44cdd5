//! Subscription state as published by the control plane event hub
//!
//! These are read-only snapshots. Collections arrive keyed by identifier; the
//! map types below name the key each collection is indexed by.

pub mod api;
pub mod application;
pub mod key_manager;
pub mod policy;
pub mod subscription;

pub use api::{Api, ApiList};
pub use application::{Application, ApplicationKeyMapping};
pub use key_manager::KeyManager;
pub use policy::{ApplicationPolicy, SubscriptionPolicy};
pub use subscription::Subscription;

use std::collections::HashMap;

/// Subscriptions keyed by subscription id
pub type SubscriptionMap = HashMap<i32, Subscription>;
/// Applications keyed by application UUID
pub type ApplicationMap = HashMap<String, Application>;
/// Application policies keyed by policy id
pub type ApplicationPolicyMap = HashMap<i32, ApplicationPolicy>;
/// Subscription policies keyed by policy id
pub type SubscriptionPolicyMap = HashMap<i32, SubscriptionPolicy>;
/// Key mappings keyed by consumer key
pub type KeyMappingMap = HashMap<String, ApplicationKeyMapping>;
