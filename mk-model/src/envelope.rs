//! The `{status, data, msg}` wrapper every backend response uses.

use serde::Deserialize;

/// Response envelope. `status == 0` signals success.
///
/// ```json
/// { "status": 0, "data": [...], "msg": "optional" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: i64,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}
