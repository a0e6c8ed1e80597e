//! Flattening of one raw secret payload into dotted-path entries.

use serde_json::Value;
use tracing::{trace, warn};

use crate::core::domain::{NormalizedEntry, RawSecret};
use crate::core::types::SecretKey;
use crate::error::NormalizeError;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Expand one raw secret into flat entries.
///
/// A non-JSON payload yields exactly one entry under the secret's own key.
/// A JSON payload is walked with the secret's key as the starting prefix:
/// objects recurse, arrays and scalars are emitted as canonical JSON text.
/// Empty objects contribute nothing.
///
/// Entries come back in walk order (object members sorted by name) and may
/// contain duplicate keys when a member name itself contains the separator;
/// the normalizer resolves those like any other collision.
pub fn flatten(secret: &RawSecret) -> Vec<(SecretKey, NormalizedEntry)> {
    let mut out = Vec::new();

    match serde_json::from_str::<Value>(secret.value()) {
        Ok(value) => walk(secret.key().to_string(), &value, secret.origin_id(), &mut out),
        Err(_) => {
            trace!(key = secret.key(), "payload is not JSON, keeping raw value");
            out.push((
                secret.key().to_string(),
                NormalizedEntry::new(secret.value(), secret.origin_id()),
            ));
        }
    }

    out
}

fn walk(
    prefix: SecretKey,
    value: &Value,
    origin_id: &str,
    out: &mut Vec<(SecretKey, NormalizedEntry)>,
) {
    match value {
        Value::Object(members) => {
            for (name, child) in members {
                walk(join(&prefix, name), child, origin_id, out);
            }
        }
        leaf => match serde_json::to_string(leaf) {
            Ok(text) => out.push((prefix, NormalizedEntry::new(text, origin_id))),
            Err(source) => {
                let err = NormalizeError::MalformedPayload { key: prefix, source };
                warn!("skipping value: {}", err);
            }
        },
    }
}

fn join(prefix: &str, name: &str) -> SecretKey {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", prefix, SEPARATOR, name)
    }
}
