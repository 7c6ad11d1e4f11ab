//! Request and response models for namestore-server.

use serde::{Deserialize, Serialize};

/// A stored name with its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRecord {
    pub id: i64,
    pub name: String,
}

/// The list endpoint serializes records as positional `[id, value]` pairs.
impl From<NameRecord> for (i64, String) {
    fn from(record: NameRecord) -> Self {
        (record.id, record.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreNameRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreNameResponse {
    pub message: String,
}
