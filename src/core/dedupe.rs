use serde_json::Value;
use std::collections::HashSet;

/// Canonical seen-set encoding for a dedup key value. A missing field and an
/// explicit null collapse onto the same entry, while the string "null" stays
/// distinct because string values serialize with quotes.
fn canonical_key(value: Option<&Value>) -> String {
    value.unwrap_or(&Value::Null).to_string()
}

/// Drop every record whose `key_field` value has already been seen, keeping
/// the first occurrence verbatim and in place. Items that are not records
/// pass through unchanged and do not touch the seen set — the opposite of the
/// projector's skip policy.
pub fn dedupe_by_field(items: Vec<Value>, key_field: &str) -> (Vec<Value>, usize) {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(items.len());
    let mut removed = 0;

    for item in items {
        match &item {
            Value::Object(data) => {
                let key = canonical_key(data.get(key_field));
                if seen.contains(&key) {
                    tracing::debug!("Duplicate removed for {} = {}", key_field, key);
                    removed += 1;
                } else {
                    seen.insert(key);
                    unique.push(item);
                }
            }
            other => {
                tracing::warn!("Keeping a non-record item in the list as-is: {}", other);
                unique.push(item);
            }
        }
    }

    (unique, removed)
}
