// fan-token-node/src/lib.rs
pub mod config;
pub mod journal;
pub mod runtime;

pub use config::{ConfigError, NodeConfig};
pub use journal::{write_journal, JournalError};
pub use runtime::SharedLedger;
