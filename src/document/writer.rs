//! Low-level construction helpers for the consumer's reference-tracking
//! JSON dialect.

use serde_json::{Map, Value};

pub(crate) const K_ID: &str = "$id";
pub(crate) const K_TYPE: &str = "$type";
pub(crate) const K_VALUES: &str = "$values";

/// Allocates document-local identity tags and builds tagged objects.
///
/// Tags are handed out in emission order starting at `"1"`, which is what
/// makes repeated serialization of the same graph byte-identical.
pub(crate) struct RefWriter {
    next: u64,
}

impl RefWriter {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    /// A fresh object already carrying its identity tag.
    pub(crate) fn object(&mut self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(K_ID.to_string(), Value::String(self.next_tag()));
        map
    }

    /// Ordered sequences are never bare arrays in this dialect; they are an
    /// identity-tagged object with a `$values` field.
    pub(crate) fn wrap_values(&mut self, values: Vec<Value>) -> Value {
        let mut map = self.object();
        map.insert(K_VALUES.to_string(), Value::Array(values));
        Value::Object(map)
    }

    fn next_tag(&mut self) -> String {
        let tag = self.next;
        self.next += 1;
        tag.to_string()
    }
}
