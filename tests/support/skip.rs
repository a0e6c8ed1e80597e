//! Skip macros for tests that need live cloud credentials.

/// Skip a test if AWS credentials are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() && std::env::var("AWS_PROFILE").is_err() {
            eprintln!("SKIPPED: no AWS credentials (AWS_ACCESS_KEY_ID or AWS_PROFILE)");
            return;
        }
        if std::env::var("SECEXPORT_TEST_FILTER").is_err() {
            eprintln!("SKIPPED: SECEXPORT_TEST_FILTER not set (a secret name to fetch)");
            return;
        }
    };
}
