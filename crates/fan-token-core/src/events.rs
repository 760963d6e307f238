// fan-token-core/src/events.rs

use crate::types::{AccountId, Amount};
use serde::{Deserialize, Serialize};

/// Record of a successful ledger mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    PauseChanged {
        paused: bool,
    },
    Minted {
        recipient: AccountId,
        amount: Amount,
    },
    Transferred {
        from: AccountId,
        to: AccountId,
        amount: Amount,
    },
    Staked {
        account: AccountId,
        amount: Amount,
    },
    Unstaked {
        account: AccountId,
        amount: Amount,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = LedgerEvent::Transferred {
            from: "U".into(),
            to: "V".into(),
            amount: Amount::from_u64(200),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "transferred", "from": "U", "to": "V", "amount": "200"})
        );
    }
}
