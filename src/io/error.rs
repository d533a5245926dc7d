//! Error types for engine and tooling operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine operations
///
/// The engine variants (`InvalidPlacement`, `InvalidTemplate`,
/// `InvalidExpansion`) are local contract violations surfaced to the
/// immediate caller; they are deterministic and never retried. The
/// remaining variants belong to the CLI tooling around the engine.
#[derive(Debug)]
pub enum EngineError {
    /// Placement committed without a prior successful `can_place`
    InvalidPlacement {
        /// Anchor coordinate of the attempted placement
        anchor: [i32; 2],
        /// Description of the violated precondition
        reason: String,
    },

    /// Malformed shape template
    InvalidTemplate {
        /// Description of what is wrong with the template
        reason: String,
    },

    /// Expansion attempted against inconsistent unit state
    ///
    /// Always a programming error, never a user-facing condition.
    InvalidExpansion {
        /// Target unit index
        unit: usize,
        /// Source unit index
        source: usize,
        /// Violated precondition
        reason: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a board snapshot to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlacement { anchor, reason } => {
                write!(
                    f,
                    "Invalid placement at ({}, {}): {reason}",
                    anchor[0], anchor[1]
                )
            }
            Self::InvalidTemplate { reason } => {
                write!(f, "Invalid shape template: {reason}")
            }
            Self::InvalidExpansion {
                unit,
                source,
                reason,
            } => {
                write!(
                    f,
                    "Invalid expansion into unit {unit} from unit {source}: {reason}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export snapshot to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed template error
pub fn template_error(reason: &str) -> EngineError {
    EngineError::InvalidTemplate {
        reason: reason.to_string(),
    }
}

/// Create an expansion contract violation error
pub const fn expansion_error(unit: usize, source: usize, reason: &'static str) -> EngineError {
    EngineError::InvalidExpansion {
        unit,
        source,
        reason,
    }
}
