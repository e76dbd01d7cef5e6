//! Error types for share option decoding and assembly

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling share options
#[derive(Error, Debug)]
pub enum Error {
    /// A recognized parameter carried a value of the wrong type
    #[error("invalid value {value:?} for parameter {param:?}: expected {expected}")]
    InvalidParameter {
        param: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A parameter required under the active protocol/backend was absent
    #[error("missing required parameter {param:?}")]
    MissingParameter { param: &'static str },

    /// The parameter map contained keys no option group recognizes.
    /// Detected in aggregate after all groups have decoded.
    #[error("parameters contain {count} invalid field(s)")]
    UnrecognizedParameters { count: usize },

    /// The zones parameter yielded no availability zones to choose from
    #[error("zones parameter {zones:?} contains no availability zones")]
    EmptyZoneSet { zones: String },

    /// The credentials secret could not be fetched or parsed
    #[error("failed to resolve secret {namespace}/{name}: {reason}")]
    SecretResolution {
        name: String,
        namespace: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = Error::InvalidParameter {
            param: "grantDefaultAccess",
            value: "yes".to_string(),
            expected: "\"true\" or \"false\"",
        };
        let msg = err.to_string();
        assert!(msg.contains("grantDefaultAccess"));
        assert!(msg.contains("yes"));

        let err = Error::MissingParameter {
            param: "nfsShareClient",
        };
        assert!(err.to_string().contains("nfsShareClient"));

        let err = Error::SecretResolution {
            name: "os-creds".to_string(),
            namespace: "default".to_string(),
            reason: "not found".to_string(),
        };
        assert!(err.to_string().contains("default/os-creds"));
    }
}
