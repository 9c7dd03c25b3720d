use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use tracing::debug;

use crate::store::{SecretStore, StoreError};

const NOT_FOUND_CODE: &str = "ResourceNotFoundException";

const PERMISSION_CODES: &[&str] = &[
    "AccessDeniedException",
    "AccessDenied",
    "UnrecognizedClientException",
    "InvalidClientTokenId",
    "ExpiredTokenException",
    "InvalidSignatureException",
    "MissingAuthenticationToken",
];

const INVALID_VALUE_CODES: &[&str] = &[
    "InvalidParameterException",
    "InvalidRequestException",
    "ResourceExistsException",
    "LimitExceededException",
    "MalformedPolicyDocumentException",
    "ValidationException",
];

/// AWS Secrets Manager backend for one region.
#[derive(Debug, Clone)]
pub struct AwsSecretsManagerStore {
    client: SecretsManagerClient,
    region: String,
}

impl AwsSecretsManagerStore {
    /// Loads credentials from the default AWS provider chain and targets
    /// `region`. `endpoint_url` overrides the service endpoint, e.g. for a
    /// local emulator.
    pub async fn connect(region: &str, endpoint_url: Option<&str>) -> Self {
        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        let mut builder = aws_sdk_secretsmanager::config::Builder::from(&shared_config);
        if let Some(endpoint) = endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }
        Self::from_client(SecretsManagerClient::from_conf(builder.build()), region)
    }

    /// Wraps an already configured client, e.g. one with static credentials.
    #[must_use]
    pub fn from_client(client: SecretsManagerClient, region: &str) -> Self {
        Self {
            client,
            region: region.to_string(),
        }
    }
}

impl SecretStore for AwsSecretsManagerStore {
    async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        match self.client.describe_secret().secret_id(name).send().await {
            Ok(output) => {
                debug!("Found existing secret {name} ({:?})", output.arn());
                Ok(true)
            }
            Err(err) => {
                if service_error_code(&err) == Some(NOT_FOUND_CODE) {
                    return Ok(false);
                }
                Err(classify_sdk_error("describe_secret", &err))
            }
        }
    }

    async fn create(
        &self,
        name: &str,
        value: &str,
        description: &str,
    ) -> Result<String, StoreError> {
        let output = self
            .client
            .create_secret()
            .name(name)
            .secret_string(value)
            .description(description)
            .send()
            .await
            .map_err(|err| classify_sdk_error("create_secret", &err))?;
        output.arn().map(ToString::to_string).ok_or_else(|| {
            StoreError::Unavailable(format!("create_secret returned no ARN for {name}"))
        })
    }

    fn target(&self) -> String {
        format!("AWS Secrets Manager ({})", self.region)
    }
}

fn service_error_code<E, R>(err: &SdkError<E, R>) -> Option<&str>
where
    E: ProvideErrorMetadata,
{
    if let SdkError::ServiceError(context) = err {
        return context.err().code();
    }
    None
}

fn classify_sdk_error<E, R>(operation: &str, err: &SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    let message = match err {
        SdkError::ServiceError(context) => context
            .err()
            .message()
            .map_or_else(|| context.err().to_string(), ToString::to_string),
        other => DisplayErrorContext(other).to_string(),
    };
    classify_code(service_error_code(err), &format!("{operation} failed: {message}"))
}

fn classify_code(code: Option<&str>, detail: &str) -> StoreError {
    let detail = match code {
        Some(code) => format!("{detail} ({code})"),
        None => detail.to_string(),
    };
    match code {
        Some(code) if PERMISSION_CODES.contains(&code) => StoreError::PermissionDenied(detail),
        Some(code) if INVALID_VALUE_CODES.contains(&code) => StoreError::InvalidValue(detail),
        _ => StoreError::Unavailable(detail),
    }
}
