// fan-token-core/src/lib.rs

//! Fan token ledger state machine
//!
//! This crate provides:
//! - Liquid and staked balances per account
//! - Admin-gated minting under a fixed supply cap
//! - A ledger-wide pause switch for holder-initiated movement
//! - Snapshots and an event journal for an external persistence layer
//!
//! The ledger performs no I/O and no logging. Every operation either
//! applies fully or returns a [`LedgerError`] and leaves state untouched.

pub mod events;
pub mod ledger;
pub mod operation;
pub mod response;
pub mod snapshot;
pub mod types;

pub use events::LedgerEvent;
pub use ledger::Ledger;
pub use operation::Operation;
pub use response::Response;
pub use snapshot::{LedgerSnapshot, SnapshotError};
pub use types::*;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Rejections a ledger operation can produce.
///
/// The numeric codes are part of the external contract and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LedgerError {
    #[error("caller is not the ledger admin")]
    Unauthorized,

    #[error("insufficient liquid balance")]
    InsufficientBalance,

    #[error("insufficient staked balance")]
    InsufficientStake,

    #[error("mint would exceed the supply cap")]
    SupplyCapExceeded,

    #[error("ledger is paused")]
    Paused,
}

impl LedgerError {
    /// Stable numeric code
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::Unauthorized => 100,
            LedgerError::InsufficientBalance => 101,
            LedgerError::InsufficientStake => 102,
            LedgerError::SupplyCapExceeded => 103,
            LedgerError::Paused => 104,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            100 => Some(LedgerError::Unauthorized),
            101 => Some(LedgerError::InsufficientBalance),
            102 => Some(LedgerError::InsufficientStake),
            103 => Some(LedgerError::SupplyCapExceeded),
            104 => Some(LedgerError::Paused),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(LedgerError::Unauthorized.code(), 100);
        assert_eq!(LedgerError::InsufficientBalance.code(), 101);
        assert_eq!(LedgerError::InsufficientStake.code(), 102);
        assert_eq!(LedgerError::SupplyCapExceeded.code(), 103);
        assert_eq!(LedgerError::Paused.code(), 104);
    }

    #[test]
    fn test_error_code_lookup() {
        for code in 100..=104 {
            let err = LedgerError::from_code(code).unwrap();
            assert_eq!(err.code(), code);
        }
        assert_eq!(LedgerError::from_code(99), None);
        assert_eq!(LedgerError::from_code(105), None);
    }
}
