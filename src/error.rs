//! Unified error handling for rink-engine
//!
//! The engine never panics in library code: anything that can fail returns
//! an `EngineResult`. Degenerate geometry (a ray parallel to the table
//! plane, a zero-length direction) is a documented precondition of the
//! raycast functions, not an error variant - callers guarantee
//! non-degenerate inputs by construction.

use thiserror::Error;

/// Main error type for rink-engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configuration field failed validation
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    /// A view-projection matrix could not be inverted
    #[error("Singular matrix: {context}")]
    SingularMatrix { context: String },

    /// TOML configuration could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Build an InvalidConfig error
/// Helper so call sites stay one line
pub fn invalid_config(field: &str, value: impl ToString, reason: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = invalid_config("puck.radius", -0.06, "must be positive");
        let msg = err.to_string();
        assert!(msg.contains("puck.radius"));
        assert!(msg.contains("-0.06"));
        assert!(msg.contains("must be positive"));
    }
}
