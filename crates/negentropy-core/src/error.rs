//! Error types for Negentropy operations.
//!
//! The numeric core is infallible by design: exchanges, updates, and
//! mutations cannot fail on finite inputs. Errors arise only at the
//! boundaries — invalid configuration, lookups by unknown id, and I/O
//! during export.

use std::error::Error;
use std::fmt;

/// Result type for Negentropy operations.
pub type Result<T> = std::result::Result<T, NegentropyError>;

/// Errors that can occur during Negentropy operations.
#[derive(Debug, Clone)]
pub enum NegentropyError {
    /// Lattice-related errors.
    Lattice(LatticeError),
    /// Configuration errors.
    Config(ConfigError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for NegentropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegentropyError::Lattice(e) => write!(f, "Lattice error: {}", e),
            NegentropyError::Config(e) => write!(f, "Config error: {}", e),
            NegentropyError::Io(msg) => write!(f, "I/O error: {}", msg),
            NegentropyError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for NegentropyError {}

impl From<std::io::Error> for NegentropyError {
    fn from(e: std::io::Error) -> Self {
        NegentropyError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for NegentropyError {
    fn from(e: serde_json::Error) -> Self {
        NegentropyError::Serialization(e.to_string())
    }
}

/// Lattice-related errors.
#[derive(Debug, Clone)]
pub enum LatticeError {
    /// No cell with the given id.
    CellNotFound(String),
    /// The lattice has no cells.
    Empty,
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeError::CellNotFound(id) => write!(f, "Cell not found: {}", id),
            LatticeError::Empty => write!(f, "Lattice is empty"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Invalid value.
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
            ConfigError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
        }
    }
}

// Convenience constructors
impl NegentropyError {
    pub fn cell_not_found(id: impl fmt::Display) -> Self {
        NegentropyError::Lattice(LatticeError::CellNotFound(id.to_string()))
    }

    pub fn empty_lattice() -> Self {
        NegentropyError::Lattice(LatticeError::Empty)
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        NegentropyError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        NegentropyError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }
}
