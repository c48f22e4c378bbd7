//! Error types for tile projection operations.

use thiserror::Error;

/// Result type alias using TileError.
pub type TileResult<T> = Result<T, TileError>;

/// Primary error type for coordinate parsing and checked transforms.
///
/// The core projection transforms never fail; these errors are produced only
/// by the parsing helpers and the opt-in checked transform variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileError {
    // === Parsing Errors ===
    #[error("Invalid format: {input}. Expected '{expected}'")]
    InvalidFormat { input: String, expected: &'static str },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    // === Transform Errors ===
    #[error("Non-finite {what}: {value}")]
    NonFiniteCoordinate { what: &'static str, value: f64 },

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },
}

impl TileError {
    /// Shorthand for a non-finite coordinate error.
    pub fn non_finite(what: &'static str, value: f64) -> Self {
        TileError::NonFiniteCoordinate { what, value }
    }

    /// Shorthand for a rejected argument.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        TileError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from parsing user input.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            TileError::InvalidFormat { .. } | TileError::InvalidNumber(_)
        )
    }
}

/// Split a comma-separated list into exactly `N` parsed numbers.
pub(crate) fn parse_components<T: std::str::FromStr, const N: usize>(
    s: &str,
    expected: &'static str,
) -> TileResult<[T; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(TileError::InvalidFormat {
            input: s.to_string(),
            expected,
        });
    }

    let mut values = Vec::with_capacity(N);
    for part in parts {
        values.push(
            part.parse::<T>()
                .map_err(|_| TileError::InvalidNumber(part.to_string()))?,
        );
    }

    values.try_into().map_err(|_| TileError::InvalidFormat {
        input: s.to_string(),
        expected,
    })
}
