use crate::domain::model::{FieldMap, Record};
use serde_json::Value;

/// Build a reduced copy of `record` keeping only the entries named in
/// `fields`. Fields absent from the source are omitted from the copy, never
/// filled with null. The copy carries the fields in `fields` order.
pub fn project_record(record: &Record, fields: &[String]) -> Record {
    let mut data = FieldMap::new();

    for field in fields {
        if let Some(value) = record.data.get(field) {
            data.insert(field.clone(), value.clone());
        }
    }

    Record::new(data)
}

/// Project every record in `items`, preserving input order. Items that are
/// not records are dropped with a warning; the second return value counts
/// them. A record projecting to an empty result is still kept.
pub fn project_all(items: Vec<Value>, fields: &[String]) -> (Vec<Value>, usize) {
    let mut kept = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for item in items {
        match item {
            Value::Object(data) => {
                let projected = project_record(&Record::new(data), fields);
                kept.push(Value::Object(projected.data));
            }
            other => {
                tracing::warn!(
                    "Skipping an item in the list that is not a record: {}",
                    other
                );
                skipped += 1;
            }
        }
    }

    (kept, skipped)
}
