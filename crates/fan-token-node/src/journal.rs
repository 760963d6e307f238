// fan-token-node/src/journal.rs
use fan_token_core::LedgerEvent;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write events as JSON lines, one event per line
pub fn write_journal(path: impl AsRef<Path>, events: &[LedgerEvent]) -> Result<(), JournalError> {
    let mut journal = String::new();
    for event in events {
        journal.push_str(&serde_json::to_string(event)?);
        journal.push('\n');
    }
    std::fs::write(path, journal)?;
    Ok(())
}
