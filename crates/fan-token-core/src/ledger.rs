// fan-token-core/src/ledger.rs

use crate::{
    events::LedgerEvent,
    operation::Operation,
    response::Response,
    snapshot::{LedgerSnapshot, SnapshotError},
    types::*,
    LedgerError, LedgerResult,
};
use std::collections::HashMap;

/// Single-asset ledger with a staking sub-ledger
///
/// Accounts missing from `balances` or `staked` hold zero. Entries are only
/// created by a credit, never by a read.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Sole identity allowed to mint and toggle pause
    admin: AccountId,
    /// Ceiling on `total_supply`
    max_supply: Amount,
    /// Blocks transfer, stake and unstake while set
    paused: bool,
    /// Liquid plus staked, across all accounts
    total_supply: Amount,
    /// Liquid balances
    balances: HashMap<AccountId, Amount>,
    /// Staked balances
    staked: HashMap<AccountId, Amount>,
    /// Successful mutations not yet drained
    events: Vec<LedgerEvent>,
}

impl Ledger {
    /// Create an empty, active ledger with the default supply cap
    pub fn new(admin: AccountId) -> Self {
        Self::with_max_supply(admin, Amount::from_u64(DEFAULT_MAX_SUPPLY))
    }

    /// Create an empty, active ledger with an explicit supply cap
    pub fn with_max_supply(admin: AccountId, max_supply: Amount) -> Self {
        Self {
            admin,
            max_supply,
            paused: false,
            total_supply: Amount::zero(),
            balances: HashMap::new(),
            staked: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn admin(&self) -> &AccountId {
        &self.admin
    }

    pub fn is_admin(&self, account: &AccountId) -> bool {
        *account == self.admin
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn total_supply(&self) -> &Amount {
        &self.total_supply
    }

    pub fn max_supply(&self) -> &Amount {
        &self.max_supply
    }

    /// Liquid balance (zero for unknown accounts)
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).cloned().unwrap_or_else(Amount::zero)
    }

    /// Staked balance (zero for unknown accounts)
    pub fn staked_of(&self, account: &AccountId) -> Amount {
        self.staked.get(account).cloned().unwrap_or_else(Amount::zero)
    }

    /// Number of accounts holding a liquid balance entry
    pub fn accounts(&self) -> usize {
        self.balances.len()
    }

    /// Set or clear the pause flag. Returns the new flag.
    pub fn set_paused(&mut self, caller: &AccountId, pause: bool) -> LedgerResult<bool> {
        self.ensure_admin(caller)?;

        self.paused = pause;
        self.events.push(LedgerEvent::PauseChanged { paused: pause });
        Ok(pause)
    }

    /// Issue new supply to `recipient`. Allowed while paused.
    pub fn mint(
        &mut self,
        caller: &AccountId,
        recipient: &AccountId,
        amount: &Amount,
    ) -> LedgerResult<()> {
        self.ensure_admin(caller)?;

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::SupplyCapExceeded)?;
        if new_supply > self.max_supply {
            return Err(LedgerError::SupplyCapExceeded);
        }

        credit(&mut self.balances, recipient, amount);
        self.total_supply = new_supply;
        self.events.push(LedgerEvent::Minted {
            recipient: recipient.clone(),
            amount: amount.clone(),
        });
        Ok(())
    }

    /// Move liquid tokens from `caller` to `recipient`
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        recipient: &AccountId,
        amount: &Amount,
    ) -> LedgerResult<()> {
        self.ensure_active()?;

        debit(&mut self.balances, caller, amount, LedgerError::InsufficientBalance)?;
        credit(&mut self.balances, recipient, amount);
        self.events.push(LedgerEvent::Transferred {
            from: caller.clone(),
            to: recipient.clone(),
            amount: amount.clone(),
        });
        Ok(())
    }

    /// Move liquid tokens into the caller's stake
    pub fn stake(&mut self, caller: &AccountId, amount: &Amount) -> LedgerResult<()> {
        self.ensure_active()?;

        debit(&mut self.balances, caller, amount, LedgerError::InsufficientBalance)?;
        credit(&mut self.staked, caller, amount);
        self.events.push(LedgerEvent::Staked {
            account: caller.clone(),
            amount: amount.clone(),
        });
        Ok(())
    }

    /// Move staked tokens back to the caller's liquid balance
    pub fn unstake(&mut self, caller: &AccountId, amount: &Amount) -> LedgerResult<()> {
        self.ensure_active()?;

        debit(&mut self.staked, caller, amount, LedgerError::InsufficientStake)?;
        credit(&mut self.balances, caller, amount);
        self.events.push(LedgerEvent::Unstaked {
            account: caller.clone(),
            amount: amount.clone(),
        });
        Ok(())
    }

    /// Dispatch a serialized operation and render its outcome
    pub fn apply(&mut self, op: &Operation) -> Response {
        match op {
            Operation::SetPaused { caller, pause } => self.set_paused(caller, *pause).into(),
            Operation::Mint {
                caller,
                recipient,
                amount,
            } => self.mint(caller, recipient, amount).into(),
            Operation::Transfer {
                caller,
                recipient,
                amount,
            } => self.transfer(caller, recipient, amount).into(),
            Operation::Stake { caller, amount } => self.stake(caller, amount).into(),
            Operation::Unstake { caller, amount } => self.unstake(caller, amount).into(),
        }
    }

    /// Journal of successful mutations since the last drain
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Take the journal, leaving it empty
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Verify conservation and the supply cap
    pub fn check_invariants(&self) -> Result<(), SnapshotError> {
        let mut held: Amount = self.balances.values().sum();
        held += &self.staked.values().sum::<Amount>();

        if held != self.total_supply {
            return Err(SnapshotError::ConservationViolated {
                total_supply: self.total_supply.clone(),
                held,
            });
        }
        if self.total_supply > self.max_supply {
            return Err(SnapshotError::SupplyAboveCap {
                total_supply: self.total_supply.clone(),
                max_supply: self.max_supply.clone(),
            });
        }
        Ok(())
    }

    /// Export state for an external store. The event journal is not included.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            admin: self.admin.clone(),
            max_supply: self.max_supply.clone(),
            paused: self.paused,
            total_supply: self.total_supply.clone(),
            balances: self.balances.clone().into_iter().collect(),
            staked: self.staked.clone().into_iter().collect(),
        }
    }

    /// Rebuild a ledger from a snapshot, rejecting inconsistent state
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Result<Self, SnapshotError> {
        let ledger = Self {
            admin: snapshot.admin,
            max_supply: snapshot.max_supply,
            paused: snapshot.paused,
            total_supply: snapshot.total_supply,
            balances: snapshot.balances.into_iter().collect(),
            staked: snapshot.staked.into_iter().collect(),
            events: Vec::new(),
        };
        ledger.check_invariants()?;
        Ok(ledger)
    }

    fn ensure_admin(&self, caller: &AccountId) -> LedgerResult<()> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }

    fn ensure_active(&self) -> LedgerResult<()> {
        if self.paused {
            Err(LedgerError::Paused)
        } else {
            Ok(())
        }
    }
}

// A zero credit never creates an entry, so it leaves snapshots untouched.
fn credit(book: &mut HashMap<AccountId, Amount>, account: &AccountId, amount: &Amount) {
    if amount.is_zero() {
        return;
    }
    *book.entry(account.clone()).or_insert_with(Amount::zero) += amount;
}

// An absent account can only be debited by zero, which leaves nothing to write.
fn debit(
    book: &mut HashMap<AccountId, Amount>,
    account: &AccountId,
    amount: &Amount,
    shortfall: LedgerError,
) -> LedgerResult<()> {
    let current = book.get(account).cloned().unwrap_or_else(Amount::zero);
    let remaining = current.checked_sub(amount).ok_or(shortfall)?;
    if let Some(entry) = book.get_mut(account) {
        *entry = remaining;
    }
    Ok(())
}
