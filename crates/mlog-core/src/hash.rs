//! Content fingerprints recorded in run provenance.
//!
//! A fingerprint is the SHA-256 of the value's JSON form with object keys
//! sorted at every depth, so maps holding the same entries hash alike
//! whatever their insertion order.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::errors::MlogError;

/// Returns the lowercase hex fingerprint of `value`.
pub fn stable_hash_string<T: Serialize + ?Sized>(value: &T) -> Result<String, MlogError> {
    let mut tree =
        serde_json::to_value(value).map_err(|err| MlogError::serde("fingerprint-encode", err))?;
    sort_keys(&mut tree);
    let bytes =
        serde_json::to_vec(&tree).map_err(|err| MlogError::serde("fingerprint-write", err))?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|left, right| left.0.cmp(&right.0));
            for (_, nested) in &mut entries {
                sort_keys(nested);
            }
            map.extend(entries);
        }
        Value::Array(values) => values.iter_mut().for_each(sort_keys),
        _ => {}
    }
}
