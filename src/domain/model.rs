use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered field-name to value mapping backing a [`Record`].
pub type FieldMap = serde_json::Map<String, Value>;

/// A single data record. Fields vary per record; there is no fixed schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: FieldMap,
}

impl Record {
    pub fn new(data: FieldMap) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<Value>,
    pub skipped_items: usize,
    pub removed_duplicates: usize,
}
