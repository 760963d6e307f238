// fan-token-node/src/runtime.rs
use fan_token_core::{
    AccountId, Amount, Ledger, LedgerEvent, LedgerResult, LedgerSnapshot, Operation, Response,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Ledger behind a single lock, shareable across threads
///
/// Each call holds the lock for its whole check-then-write sequence, so
/// concurrent callers always see a consistent balance.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        tracing::info!(
            admin = %ledger.admin(),
            max_supply = %ledger.max_supply(),
            paused = ledger.is_paused(),
            "Ledger initialized"
        );
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn set_paused(&self, caller: &AccountId, pause: bool) -> LedgerResult<bool> {
        let result = self.inner.lock().set_paused(caller, pause);
        trace_outcome("set_paused", caller, &result);
        if result.is_ok() {
            tracing::info!(paused = pause, "Pause flag changed");
        }
        result
    }

    pub fn mint(
        &self,
        caller: &AccountId,
        recipient: &AccountId,
        amount: &Amount,
    ) -> LedgerResult<()> {
        let result = self.inner.lock().mint(caller, recipient, amount);
        trace_outcome("mint", caller, &result);
        result
    }

    pub fn transfer(
        &self,
        caller: &AccountId,
        recipient: &AccountId,
        amount: &Amount,
    ) -> LedgerResult<()> {
        let result = self.inner.lock().transfer(caller, recipient, amount);
        trace_outcome("transfer", caller, &result);
        result
    }

    pub fn stake(&self, caller: &AccountId, amount: &Amount) -> LedgerResult<()> {
        let result = self.inner.lock().stake(caller, amount);
        trace_outcome("stake", caller, &result);
        result
    }

    pub fn unstake(&self, caller: &AccountId, amount: &Amount) -> LedgerResult<()> {
        let result = self.inner.lock().unstake(caller, amount);
        trace_outcome("unstake", caller, &result);
        result
    }

    pub fn apply(&self, op: &Operation) -> Response {
        let response = self.inner.lock().apply(op);
        match response {
            Response::Value(_) => tracing::debug!(op = op.name(), caller = %op.caller(), "Applied"),
            Response::Error(code) => {
                tracing::warn!(op = op.name(), caller = %op.caller(), code, "Rejected")
            }
        }
        response
    }

    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.inner.lock().balance_of(account)
    }

    pub fn staked_of(&self, account: &AccountId) -> Amount {
        self.inner.lock().staked_of(account)
    }

    pub fn total_supply(&self) -> Amount {
        self.inner.lock().total_supply().clone()
    }

    pub fn is_paused(&self) -> bool {
        self.inner.lock().is_paused()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.inner.lock().snapshot()
    }

    pub fn drain_events(&self) -> Vec<LedgerEvent> {
        let events = self.inner.lock().drain_events();
        tracing::debug!(count = events.len(), "Drained ledger events");
        events
    }
}

fn trace_outcome<T>(op: &str, caller: &AccountId, result: &LedgerResult<T>) {
    match result {
        Ok(_) => tracing::debug!(op, caller = %caller, "Applied"),
        Err(e) => tracing::warn!(op, caller = %caller, code = e.code(), "Rejected: {}", e),
    }
}
