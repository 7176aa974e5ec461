//! Inventory error taxonomy

use thiserror::Error;

/// Inventory errors
///
/// Every failure surfaced to the user is one of these kinds. Provider
/// failures are mapped into the first four through [`InventoryError::classify`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("CredentialError: {0}")]
    Credential(String),

    #[error("AuthenticationError: {0}")]
    Authentication(String),

    #[error("AccessDeniedError: {0}")]
    AccessDenied(String),

    #[error("RateLimitError: {0}")]
    RateLimit(String),

    #[error("RegionError: {0}")]
    Region(String),

    #[error("FormatError: {0}")]
    Format(String),

    #[error("OptionError: {0}")]
    Option(String),

    #[error("Error: {0}")]
    Generic(String),
}

impl InventoryError {
    /// Label printed in front of the message
    pub fn label(&self) -> &'static str {
        match self {
            InventoryError::Credential(_) => "CredentialError",
            InventoryError::Authentication(_) => "AuthenticationError",
            InventoryError::AccessDenied(_) => "AccessDeniedError",
            InventoryError::RateLimit(_) => "RateLimitError",
            InventoryError::Region(_) => "RegionError",
            InventoryError::Format(_) => "FormatError",
            InventoryError::Option(_) => "OptionError",
            InventoryError::Generic(_) => "Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            InventoryError::Credential(m)
            | InventoryError::Authentication(m)
            | InventoryError::AccessDenied(m)
            | InventoryError::RateLimit(m)
            | InventoryError::Region(m)
            | InventoryError::Format(m)
            | InventoryError::Option(m)
            | InventoryError::Generic(m) => m,
        }
    }

    /// Map a raw provider failure onto the taxonomy.
    ///
    /// Known discriminators become their dedicated kind with a fixed message;
    /// anything else (including a missing code) passes through as
    /// [`InventoryError::Generic`] carrying the provider message verbatim.
    pub fn classify(failure: &ProviderFailure) -> Self {
        match failure.code.as_deref() {
            Some("CredentialsProviderError") => {
                InventoryError::Credential("Invalid credentials!".to_string())
            }
            Some("AuthFailure") => {
                InventoryError::Authentication("Authentication failure".to_string())
            }
            Some("UnauthorizedOperation") => {
                InventoryError::AccessDenied("Access denied".to_string())
            }
            Some("ThrottlingException" | "RequestLimitExceeded") => {
                InventoryError::RateLimit("Rate limit exceeded. Try again soon.".to_string())
            }
            _ => InventoryError::Generic(failure.message.clone()),
        }
    }
}

impl From<ProviderFailure> for InventoryError {
    fn from(failure: ProviderFailure) -> Self {
        InventoryError::classify(&failure)
    }
}

/// A failure reported by the remote instance-description call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderFailure {
    /// Provider error code (e.g. "AuthFailure"), if the failure carried one
    pub code: Option<String>,

    /// Human-readable description from the provider or transport
    pub message: String,
}

impl ProviderFailure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// A failure with no discriminator (transport errors, timeouts, ...)
    pub fn uncoded(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_and_unknown_discriminators() {
        let cases = [
            (
                Some("CredentialsProviderError"),
                InventoryError::Credential("Invalid credentials!".to_string()),
            ),
            (
                Some("AuthFailure"),
                InventoryError::Authentication("Authentication failure".to_string()),
            ),
            (
                Some("UnauthorizedOperation"),
                InventoryError::AccessDenied("Access denied".to_string()),
            ),
            (
                Some("ThrottlingException"),
                InventoryError::RateLimit("Rate limit exceeded. Try again soon.".to_string()),
            ),
            (
                Some("RequestLimitExceeded"),
                InventoryError::RateLimit("Rate limit exceeded. Try again soon.".to_string()),
            ),
            (
                Some("InvalidParameterValue"),
                InventoryError::Generic("provider said no".to_string()),
            ),
            (None, InventoryError::Generic("provider said no".to_string())),
        ];

        for (code, expected) in cases {
            let failure = ProviderFailure {
                code: code.map(str::to_string),
                message: "provider said no".to_string(),
            };
            assert_eq!(InventoryError::classify(&failure), expected, "code {:?}", code);
        }
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        let failure = ProviderFailure::new("authfailure", "lowercase code");
        assert_eq!(
            InventoryError::from(failure),
            InventoryError::Generic("lowercase code".to_string())
        );
    }

    #[test]
    fn test_display_has_kind_prefix() {
        assert_eq!(
            InventoryError::Region("bad".to_string()).to_string(),
            "RegionError: bad"
        );
        assert_eq!(
            InventoryError::Generic("boom".to_string()).to_string(),
            "Error: boom"
        );
    }

    #[test]
    fn test_label_and_message() {
        let err = InventoryError::Option("pick one".to_string());
        assert_eq!(err.label(), "OptionError");
        assert_eq!(err.message(), "pick one");
        assert_eq!(format!("{}: {}", err.label(), err.message()), err.to_string());
    }
}
