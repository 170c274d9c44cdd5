//! Wire messages served to the enforcer over the discovery protocol
//!
//! Field names follow the enforcer's JSON mapping (camelCase, with the
//! upper-case `UUID` suffixes it expects).

pub mod enforcer;
pub mod keymgt;
pub mod subscription;
