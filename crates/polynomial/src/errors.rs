// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// Invalid argument (e.g., an empty coefficient list)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl PolynomialError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PolynomialError::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for polynomial operations
pub type Result<T> = std::result::Result<T, PolynomialError>;
