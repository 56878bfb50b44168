use serde::{Deserialize, Serialize};

/// One stored record. A single `user_id` attribute, formatted as
/// dash-delimited groups of lowercase alphanumeric tokens
/// (e.g. `"aaa-bbb-ccc"`). Immutable once inserted for the duration of a
/// scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
}

impl UserRecord {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
