//! AWS secret backends.
//!
//! Enable with `--features aws`. Credentials and region come from the
//! standard AWS provider chain (`AWS_PROFILE`, `AWS_REGION`, instance
//! metadata, ...) unless a region is set in the config file.
//!
//! The SDK is async; each `list` call spins up a current-thread runtime and
//! blocks on it, so the rest of the crate stays synchronous.

use ::base64::Engine;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::types::{Filter as SecretFilter, FilterNameStringType};
use aws_sdk_ssm::types::ParameterStringFilter;
use tracing::{trace, warn};

use super::SecretBackend;
use crate::core::domain::RawSecret;
use crate::core::types::Filter;
use crate::error::{Error, Result, RetrievalError};

/// `GetParameters` accepts at most this many names per call.
const GET_PARAMETERS_BATCH: usize = 10;

fn runtime(backend: &'static str) -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            RetrievalError::Backend {
                backend,
                message: format!("failed to create runtime: {}", e),
            }
            .into()
        })
}

async fn sdk_config(region: Option<&str>) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }
    loader.load().await
}

fn backend_error<E>(backend: &'static str, operation: &str, err: E) -> Error
where
    E: std::error::Error,
{
    RetrievalError::Backend {
        backend,
        message: format!("{} failed: {}", operation, DisplayErrorContext(&err)),
    }
    .into()
}

/// AWS Secrets Manager.
///
/// Secrets are matched with the `all` filter key, so a filter value hits
/// names, descriptions, tags and so on. `origin_id` is the secret ARN.
#[derive(Debug, Clone, Default)]
pub struct SecretsManager {
    region: Option<String>,
}

impl SecretsManager {
    const NAME: &'static str = "secrets manager";

    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }
}

impl SecretBackend for SecretsManager {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn list(&self, filters: &[Filter]) -> Result<Vec<RawSecret>> {
        let rt = runtime(Self::NAME)?;

        rt.block_on(async {
            let config = sdk_config(self.region.as_deref()).await;
            let client = aws_sdk_secretsmanager::Client::new(&config);

            let mut listed: Vec<(String, String)> = Vec::new();
            let mut token: Option<String> = None;
            loop {
                let mut request = client.list_secrets();
                if !filters.is_empty() {
                    let filter = SecretFilter::builder()
                        .key(FilterNameStringType::All)
                        .set_values(Some(filters.to_vec()))
                        .build();
                    request = request.filters(filter);
                }
                if let Some(next) = token.take() {
                    request = request.next_token(next);
                }

                let response = request
                    .send()
                    .await
                    .map_err(|e| backend_error(Self::NAME, "ListSecrets", e))?;

                for entry in response.secret_list() {
                    let (Some(arn), Some(name)) = (entry.arn(), entry.name()) else {
                        continue;
                    };
                    listed.push((arn.to_string(), name.to_string()));
                }

                match response.next_token() {
                    Some(next) => token = Some(next.to_string()),
                    None => break,
                }
            }
            trace!(count = listed.len(), "listed secrets");

            let mut secrets = Vec::with_capacity(listed.len());
            for (arn, name) in listed {
                let output = client
                    .get_secret_value()
                    .secret_id(&arn)
                    .send()
                    .await
                    .map_err(|e| backend_error(Self::NAME, "GetSecretValue", e))?;

                let value = if let Some(text) = output.secret_string() {
                    text.to_string()
                } else if let Some(blob) = output.secret_binary() {
                    ::base64::engine::general_purpose::STANDARD.encode(blob.as_ref())
                } else {
                    warn!(name = %name, "secret has no value, skipping");
                    continue;
                };

                secrets.push(RawSecret::new(name, value, arn));
            }

            Ok::<_, Error>(secrets)
        })
    }
}

/// AWS SSM Parameter Store.
///
/// Parameters are matched by exact name. SecureString values are decrypted.
/// `origin_id` is the parameter ARN.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    region: Option<String>,
}

impl ParameterStore {
    const NAME: &'static str = "parameter store";

    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }
}

impl SecretBackend for ParameterStore {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn list(&self, filters: &[Filter]) -> Result<Vec<RawSecret>> {
        let rt = runtime(Self::NAME)?;

        rt.block_on(async {
            let config = sdk_config(self.region.as_deref()).await;
            let client = aws_sdk_ssm::Client::new(&config);

            let mut names: Vec<String> = Vec::new();
            let mut token: Option<String> = None;
            loop {
                let mut request = client.describe_parameters();
                if !filters.is_empty() {
                    let filter = ParameterStringFilter::builder()
                        .key("Name")
                        .option("Equals")
                        .set_values(Some(filters.to_vec()))
                        .build()
                        .map_err(|e| backend_error(Self::NAME, "DescribeParameters", e))?;
                    request = request.parameter_filters(filter);
                }
                if let Some(next) = token.take() {
                    request = request.next_token(next);
                }

                let response = request
                    .send()
                    .await
                    .map_err(|e| backend_error(Self::NAME, "DescribeParameters", e))?;

                names.extend(
                    response
                        .parameters()
                        .iter()
                        .filter_map(|p| p.name())
                        .map(str::to_string),
                );

                match response.next_token() {
                    Some(next) => token = Some(next.to_string()),
                    None => break,
                }
            }
            trace!(count = names.len(), "described parameters");

            let mut secrets = Vec::with_capacity(names.len());
            for batch in names.chunks(GET_PARAMETERS_BATCH) {
                let response = client
                    .get_parameters()
                    .set_names(Some(batch.to_vec()))
                    .with_decryption(true)
                    .send()
                    .await
                    .map_err(|e| backend_error(Self::NAME, "GetParameters", e))?;

                for parameter in response.parameters() {
                    let (Some(name), Some(value), Some(arn)) =
                        (parameter.name(), parameter.value(), parameter.arn())
                    else {
                        continue;
                    };
                    secrets.push(RawSecret::new(name, value, arn));
                }
                for missing in response.invalid_parameters() {
                    warn!(name = %missing, "parameter disappeared before it could be read");
                }
            }

            Ok::<_, Error>(secrets)
        })
    }
}
