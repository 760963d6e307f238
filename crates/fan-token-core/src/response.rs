// fan-token-core/src/response.rs

use crate::LedgerResult;
use serde::{Deserialize, Serialize};

/// Discriminated operation outcome in its external form
///
/// Serializes as `{"value": true}` on success or `{"error": 104}` on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Value(bool),
    Error(u32),
}

impl Response {
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Value(_))
    }
}

impl From<LedgerResult<bool>> for Response {
    fn from(result: LedgerResult<bool>) -> Self {
        match result {
            Ok(value) => Response::Value(value),
            Err(err) => Response::Error(err.code()),
        }
    }
}

impl From<LedgerResult<()>> for Response {
    fn from(result: LedgerResult<()>) -> Self {
        result.map(|()| true).into()
    }
}
