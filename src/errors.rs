//! Error types for the Kaddex dashboard
//!
//! Each failure surface has its own error struct carrying a message plus
//! optional context. `DashboardError` unifies them for callers that only
//! need a single error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Data Service Errors
// =============================================================================

/// Error when a data service request fails
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("Service request error: {message}")]
pub struct ServiceRequestError {
    /// Detailed error message
    pub message: String,
    /// The endpoint that was requested
    pub endpoint: Option<String>,
    /// HTTP status code if a response was received
    pub status: Option<u16>,
}

impl ServiceRequestError {
    /// Create a new service request error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            endpoint: None,
            status: None,
        }
    }

    /// Create a new service request error with the endpoint
    pub fn with_endpoint(message: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            endpoint: Some(endpoint.into()),
            status: None,
        }
    }

    /// Create a new service request error with endpoint and status code
    pub fn with_status(
        message: impl Into<String>,
        endpoint: impl Into<String>,
        status: u16,
    ) -> Self {
        Self {
            message: message.into(),
            endpoint: Some(endpoint.into()),
            status: Some(status),
        }
    }

    /// Client errors will not succeed on retry
    pub fn is_permanent(&self) -> bool {
        matches!(self.status, Some(code) if (400..500).contains(&code) && code != 429)
    }
}

/// Error when a fetch step exceeds its time budget
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("Service timeout: {message}")]
pub struct ServiceTimeout {
    /// Detailed error message
    pub message: String,
    /// The step that timed out (e.g. "pair list")
    pub step: Option<String>,
    /// Timeout in seconds
    pub timeout_secs: Option<f64>,
}

impl ServiceTimeout {
    /// Create a new timeout error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            step: None,
            timeout_secs: None,
        }
    }

    /// Create a new timeout error for a named step
    pub fn for_step(message: impl Into<String>, step: impl Into<String>, timeout_secs: f64) -> Self {
        Self {
            message: message.into(),
            step: Some(step.into()),
            timeout_secs: Some(timeout_secs),
        }
    }
}

/// Error when a service response cannot be interpreted
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("Invalid response: {message}")]
pub struct InvalidResponse {
    /// Detailed error message
    pub message: String,
    /// The endpoint that returned the response
    pub endpoint: Option<String>,
}

impl InvalidResponse {
    /// Create a new invalid response error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            endpoint: None,
        }
    }

    /// Create a new invalid response error with the endpoint
    pub fn with_endpoint(message: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            endpoint: Some(endpoint.into()),
        }
    }
}

// =============================================================================
// Session / Governance Errors
// =============================================================================

/// Error when a vote control is used while it is disabled
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("Vote disabled: {message}")]
pub struct VoteDisabled {
    /// Detailed error message
    pub message: String,
    /// The choice already recorded for the account, if any
    pub recorded: Option<String>,
}

impl VoteDisabled {
    /// Create a new vote disabled error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            recorded: None,
        }
    }

    /// Create a new vote disabled error with the recorded choice
    pub fn with_recorded(message: impl Into<String>, recorded: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            recorded: Some(recorded.into()),
        }
    }
}

/// Error when an account name is not a valid Kadena account
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("Invalid account: {message}")]
pub struct InvalidAccount {
    /// Detailed error message
    pub message: String,
    /// The rejected account name
    pub account: Option<String>,
}

impl InvalidAccount {
    /// Create a new invalid account error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            account: None,
        }
    }

    /// Create a new invalid account error with the rejected name
    pub fn with_account(message: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            account: Some(account.into()),
        }
    }
}

// =============================================================================
// Catalog / Rendering Errors
// =============================================================================

/// Error when the token catalog cannot be loaded or queried
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("Catalog error: {message}")]
pub struct CatalogError {
    /// Detailed error message
    pub message: String,
    /// The token involved
    pub token: Option<String>,
}

impl CatalogError {
    /// Create a new catalog error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: None,
        }
    }

    /// Create a new catalog error for a token
    pub fn with_token(message: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: Some(token.into()),
        }
    }
}

/// Error when a view cannot be rendered or interacted with
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
#[error("Render error: {message}")]
pub struct RenderError {
    /// Detailed error message
    pub message: String,
    /// The component that failed
    pub component: Option<String>,
}

impl RenderError {
    /// Create a new render error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            component: None,
        }
    }

    /// Create a new render error for a component
    pub fn in_component(message: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            component: Some(component.into()),
        }
    }
}

// =============================================================================
// Unified Error Enum
// =============================================================================

/// Unified error type for all dashboard operations
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardError {
    #[error(transparent)]
    ServiceRequest(#[from] ServiceRequestError),
    #[error(transparent)]
    ServiceTimeout(#[from] ServiceTimeout),
    #[error(transparent)]
    InvalidResponse(#[from] InvalidResponse),
    #[error(transparent)]
    VoteDisabled(#[from] VoteDisabled),
    #[error(transparent)]
    InvalidAccount(#[from] InvalidAccount),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Render(#[from] RenderError),

    // External library errors (converted to String for Serialize/Deserialize)
    #[error("IO error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Json(err.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return DashboardError::ServiceTimeout(ServiceTimeout::new(err.to_string()));
        }
        match err.url() {
            Some(url) => {
                let endpoint = url.to_string();
                match err.status() {
                    Some(status) => DashboardError::ServiceRequest(ServiceRequestError::with_status(
                        err.to_string(),
                        endpoint,
                        status.as_u16(),
                    )),
                    None => DashboardError::ServiceRequest(ServiceRequestError::with_endpoint(
                        err.to_string(),
                        endpoint,
                    )),
                }
            }
            None => DashboardError::Http(err.to_string()),
        }
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    /// Create an unknown error from any error type
    pub fn unknown(err: impl std::fmt::Display) -> Self {
        DashboardError::Unknown(err.to_string())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, DashboardError::ServiceTimeout(_))
    }

    /// Check if this error came from talking to a data service
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            DashboardError::ServiceRequest(_)
                | DashboardError::ServiceTimeout(_)
                | DashboardError::InvalidResponse(_)
                | DashboardError::Http(_)
        )
    }

    /// Whether retrying the failed operation could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            DashboardError::ServiceRequest(err) => !err.is_permanent(),
            DashboardError::ServiceTimeout(_) | DashboardError::Http(_) => true,
            _ => false,
        }
    }
}
