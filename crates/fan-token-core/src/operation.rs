// fan-token-core/src/operation.rs

use crate::types::{AccountId, Amount};
use serde::{Deserialize, Serialize};

/// A ledger call in serialized form, as replayed from a batch file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    SetPaused {
        caller: AccountId,
        pause: bool,
    },
    Mint {
        caller: AccountId,
        recipient: AccountId,
        amount: Amount,
    },
    Transfer {
        caller: AccountId,
        recipient: AccountId,
        amount: Amount,
    },
    Stake {
        caller: AccountId,
        amount: Amount,
    },
    Unstake {
        caller: AccountId,
        amount: Amount,
    },
}

impl Operation {
    pub fn caller(&self) -> &AccountId {
        match self {
            Operation::SetPaused { caller, .. }
            | Operation::Mint { caller, .. }
            | Operation::Transfer { caller, .. }
            | Operation::Stake { caller, .. }
            | Operation::Unstake { caller, .. } => caller,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Operation::SetPaused { .. } => "set_paused",
            Operation::Mint { .. } => "mint",
            Operation::Transfer { .. } => "transfer",
            Operation::Stake { .. } => "stake",
            Operation::Unstake { .. } => "unstake",
        }
    }
}
