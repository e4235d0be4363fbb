//! Entitlement derivation configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EntitlementConfig {
    /// Seconds past `expiresAt` during which an active subscription still counts.
    pub expiry_grace_secs: u64,
}
