//! Decoding of raw registration documents into typed records.
//!
//! Both the API body and the cache file are decoded here. Entries that do not
//! fit the `Registration` schema are skipped individually so one bad record
//! does not cost the whole list.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::Registration;

/// Extract the registrations from a `{ "result": [...] }` document.
///
/// A missing or non-array `result` yields an empty list.
pub fn decode_feed(doc: &Value) -> Vec<Registration> {
    let Some(entries) = doc.get("result").and_then(Value::as_array) else {
        warn!("registration document has no `result` array; treating it as empty");
        return Vec::new();
    };

    let mut out = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match Registration::deserialize(entry) {
            Ok(reg) => out.push(reg),
            Err(e) => {
                let id = entry.get("id").map(Value::to_string).unwrap_or_else(|| "?".to_string());
                warn!(index, id = %id, "skipping malformed registration: {e}");
            }
        }
    }

    debug!(decoded = out.len(), total = entries.len(), "decoded registration feed");
    out
}
