use thiserror::Error;

pub const CATALOG_ALERT: &str = "Could not connect to API. Make sure the backend is running.";
pub const REQUEST_ALERT: &str = "Optimization failed. Try different cities.";

/// Why a call to the optimization service did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchFailure {
    #[error("failed to build request: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(String),
    #[error("malformed payload: {0}")]
    Payload(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select both Origin and Destination")]
    Missing,
    #[error("Origin and Destination cannot be the same")]
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("city list unavailable: {0}")]
    Fetch(#[from] FetchFailure),
    #[error("city {0} listed twice")]
    DuplicateCity(String),
    #[error("city {0} has invalid coordinates")]
    InvalidCoordinate(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("catalog load failed: {0}")]
    CatalogLoad(#[from] CatalogError),
    #[error("invalid selection: {0}")]
    Validation(#[from] ValidationError),
    #[error("optimization request failed: {0}")]
    Request(#[from] FetchFailure),
    #[error("no result to report on")]
    ReportUnavailable,
}

impl ClientError {
    /// Alert text shown to the user, `None` for errors that stay silent.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::CatalogLoad(_) => Some(CATALOG_ALERT.to_string()),
            Self::Validation(err) => Some(err.to_string()),
            Self::Request(_) => Some(REQUEST_ALERT.to_string()),
            Self::ReportUnavailable => None,
        }
    }
}
