//! Translation of adapter state into enforcer wire messages
//!
//! Every function here is pure apart from logging. Map inputs become lists
//! whose order is unspecified; consumers must treat them as sets.

mod config;
mod key_manager;
mod subscription;

pub use config::marshal_config;
pub use key_manager::marshal_key_manager;
pub use subscription::{
    marshal_api_list, marshal_application_map, marshal_application_policy_map,
    marshal_key_mapping_map, marshal_subscription_map, marshal_subscription_policy_map,
};
