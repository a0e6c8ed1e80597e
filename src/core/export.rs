//! Shell export formatting.
//!
//! Renders a [`NormalizedSet`] as POSIX `export NAME='value'` lines that can
//! be `eval`ed directly.

use std::collections::HashSet;
use std::fmt::Write;

use tracing::warn;

use crate::core::domain::NormalizedSet;
use crate::core::normalize::fingerprint;

/// Environment variable name for a flattened key.
///
/// Upper-cases ASCII letters and maps every character outside
/// `[A-Za-z0-9_]` to `_`. A leading digit gets a `_` prefix.
pub fn env_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Shell-ready value: JSON string literals are unquoted, then the result is
/// single-quoted with embedded quotes escaped.
pub fn shell_value(value: &str) -> String {
    let unquoted = match serde_json::from_str::<String>(value) {
        Ok(s) => s,
        Err(_) => value.to_string(),
    };
    format!("'{}'", unquoted.replace('\'', r"'\''"))
}

/// One `export` line per entry, in key order.
///
/// Distinct keys can map to the same variable name (`db.user` and
/// `db_user`). The later one is renamed with the upper-cased origin
/// fingerprint, then a counter, so no line shadows another after `eval`.
pub fn render(set: &NormalizedSet) -> String {
    let mut out = String::new();
    let mut emitted: HashSet<String> = HashSet::new();

    for (key, entry) in set {
        let mut name = env_name(key);
        if emitted.contains(&name) {
            let base = format!("{}_{}", name, fingerprint(entry.origin_id()).to_ascii_uppercase());
            let mut candidate = base.clone();
            let mut n = 2usize;
            while emitted.contains(&candidate) {
                candidate = format!("{}_{}", base, n);
                n += 1;
            }
            warn!(key = %key, name = %candidate, "variable name taken, renamed");
            name = candidate;
        }

        // Writing to a String cannot fail.
        let _ = writeln!(out, "export {}={}", name, shell_value(entry.value()));
        emitted.insert(name);
    }
    out
}
