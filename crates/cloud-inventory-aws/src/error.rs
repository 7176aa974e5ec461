//! AWS provider error types

use cloud_inventory_core::ProviderFailure;
use thiserror::Error;

/// Discriminator used when the credential chain cannot produce credentials
pub const CREDENTIALS_PROVIDER_ERROR: &str = "CredentialsProviderError";

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("failed to load credentials: {0}")]
    Credentials(String),

    #[error("EC2 API error ({code}): {message}")]
    Service { code: String, message: String },

    #[error("EC2 request failed: {0}")]
    Request(String),
}

impl From<AwsError> for ProviderFailure {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Credentials(message) => {
                ProviderFailure::new(CREDENTIALS_PROVIDER_ERROR, message)
            }
            AwsError::Service { code, message } => ProviderFailure::new(code, message),
            AwsError::Request(message) => ProviderFailure::uncoded(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, AwsError>;
