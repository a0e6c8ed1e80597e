//! Secret normalization.
//!
//! Merges the flattened output of many raw secrets into one
//! [`NormalizedSet`]. Nothing is ever overwritten: when a key is already
//! taken, the newcomer is renamed to `<key>_<fingerprint>`, where the
//! fingerprint is derived from the secret's origin id. The same secret
//! therefore always lands on the same disambiguated key.

mod flatten;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::core::domain::{NormalizedSet, RawSecret};
use crate::core::types::SecretKey;

pub use flatten::{flatten, SEPARATOR};

/// Hex characters of the origin fingerprint used in collision suffixes.
pub const FINGERPRINT_LEN: usize = 8;

/// Normalize raw secrets, in order, into a collision-free set.
///
/// Returns an empty set for empty input.
pub fn normalize<'a, I>(secrets: I) -> NormalizedSet
where
    I: IntoIterator<Item = &'a RawSecret>,
{
    let mut set = NormalizedSet::new();
    let mut count = 0usize;

    for secret in secrets {
        count += 1;
        let mut suffix: Option<String> = None;

        for (key, entry) in flatten(secret) {
            let key = if set.contains_key(&key) {
                let suffix = suffix.get_or_insert_with(|| fingerprint(secret.origin_id()));
                disambiguate(&set, key, suffix)
            } else {
                key
            };
            set.insert_vacant(key, entry);
        }
    }

    debug!(secrets = count, entries = set.len(), "normalized");
    set
}

/// Short deterministic fingerprint of an origin id.
pub fn fingerprint(origin_id: &str) -> String {
    let digest = Sha256::digest(origin_id.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(FINGERPRINT_LEN);
    hex
}

fn disambiguate(set: &NormalizedSet, key: SecretKey, suffix: &str) -> SecretKey {
    let renamed = format!("{}_{}", key, suffix);
    if !set.contains_key(&renamed) {
        debug!(key = %key, renamed = %renamed, "key collision");
        return renamed;
    }

    // Only reachable when one origin repeats a key or origin ids are reused.
    let mut n = 2usize;
    loop {
        let candidate = format!("{}_{}", renamed, n);
        if !set.contains_key(&candidate) {
            warn!(key = %key, renamed = %candidate, "repeated collision from one origin");
            return candidate;
        }
        n += 1;
    }
}
