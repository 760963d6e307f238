// fan-token-core/src/snapshot.rs

use crate::types::{AccountId, Amount};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Errors raised while restoring or encoding ledger state
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("total supply {total_supply} does not match held tokens {held}")]
    ConservationViolated { total_supply: Amount, held: Amount },

    #[error("total supply {total_supply} exceeds cap {max_supply}")]
    SupplyAboveCap { total_supply: Amount, max_supply: Amount },

    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Point-in-time copy of the ledger state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub admin: AccountId,
    pub max_supply: Amount,
    pub paused: bool,
    pub total_supply: Amount,
    pub balances: BTreeMap<AccountId, Amount>,
    pub staked: BTreeMap<AccountId, Amount>,
}

impl LedgerSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// SHA-256 over the ordered, bincode-encoded contents
    pub fn state_root(&self) -> Result<[u8; 32], SnapshotError> {
        let encoded = bincode::serialize(self)?;
        Ok(Sha256::digest(&encoded).into())
    }

    pub fn state_root_hex(&self) -> Result<String, SnapshotError> {
        Ok(hex::encode(self.state_root()?))
    }
}
