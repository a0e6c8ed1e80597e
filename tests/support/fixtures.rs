//! Test fixtures and constants.

/// Password used by the standard fixtures.
pub const PASSWORD: &str = "correct horse battery staple";

/// Name of the secrets file written into the project dir.
pub const SECRETS_FILE: &str = "secrets.json";

/// Standard raw secrets: one nested JSON secret, one plain string, and a
/// key that collides across two origins.
pub const STANDARD_SECRETS: &str = r#"[
  {"key": "db", "value": "{\"user\":\"app\",\"pass\":\"s3cr3t\"}", "origin_id": "arn:aws:secretsmanager:eu-west-1:1:secret:db"},
  {"key": "token", "value": "abc123", "origin_id": "arn:aws:secretsmanager:eu-west-1:1:secret:token"},
  {"key": "port", "value": "5432", "origin_id": "arn:A"},
  {"key": "port", "value": "6543", "origin_id": "arn:B"}
]"#;

/// The exports [`STANDARD_SECRETS`] produce, sorted.
pub const STANDARD_EXPORTS: &[&str] = &[
    "export DB_PASS='s3cr3t'",
    "export DB_USER='app'",
    "export PORT='5432'",
    "export PORT_1DCF47A0='6543'",
    "export TOKEN='abc123'",
];

/// A value needing shell quoting.
pub const QUOTED_SECRETS: &str = r#"[
  {"key": "motd", "value": "it's fine", "origin_id": "local:motd"}
]"#;
