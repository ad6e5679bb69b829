//! Common error types for the netops gateway

use thiserror::Error;

/// Result type for inventory and executor operations
pub type NetopsResult<T> = Result<T, NetopsError>;

/// Errors that can occur in the inventory and command-execution path.
///
/// Transport failures are deliberately absent here: the executor converts
/// them into a failed [`crate::CommandResult`] instead of an error, so a
/// remote fault on one device can never abort another request.
#[derive(Debug, Error)]
pub enum NetopsError {
    /// No device with the given uid or host
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// More than one device record shares the requested host
    #[error("Multiple devices found with host {0}")]
    AmbiguousHost(String),

    /// Platform tag not recognized by the descriptor resolver
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Missing or malformed required fields in a request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Bulk inventory file has an unexpected top-level shape
    #[error("Invalid inventory format: {0}")]
    InventoryFormat(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NetopsError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            NetopsError::DeviceNotFound(_) => 404,
            NetopsError::AmbiguousHost(_) => 404,
            // A record with an unknown platform is a server-side
            // configuration problem by the time a command reaches it.
            NetopsError::UnsupportedPlatform(_) => 500,
            NetopsError::InvalidRequest(_) => 400,
            NetopsError::InventoryFormat(_) => 400,
            NetopsError::Internal(_) => 500,
        }
    }
}
