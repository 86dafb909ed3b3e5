//! Input fingerprinting
//!
//! A batch records the SHA-256 of its inputs so a result set can be tied
//! back to the exact WorldStates, seed and plant design that produced it.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::ModelError;

/// Compute deterministic SHA-256 hash of any serializable input
///
/// Uses canonical JSON serialization with sorted keys, so the hash does
/// not depend on field or map ordering.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, ModelError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config)
        .map_err(|e| ModelError::Serialization(format!("Input serialization failed: {}", e)))?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| ModelError::Serialization(format!("Input serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
