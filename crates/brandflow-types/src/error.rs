use std::fmt;

/// Result type for brandflow-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when parsing or looking up domain values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Account mode string not recognised
    UnknownMode(String),

    /// Filter operator phrase not recognised
    UnknownOperator(String),

    /// Column preset name not recognised
    UnknownPreset(String),

    /// A registry lookup (filter, metric, column, channel...) failed
    UnknownKey { kind: &'static str, key: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownMode(mode) => write!(
                f,
                "Unknown account mode '{}' (expected seller, vendor, both or none)",
                mode
            ),
            Error::UnknownOperator(op) => write!(f, "Unknown filter operator '{}'", op),
            Error::UnknownPreset(name) => write!(f, "Unknown column preset '{}'", name),
            Error::UnknownKey { kind, key } => write!(f, "Unknown {} '{}'", kind, key),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn unknown(kind: &'static str, key: impl Into<String>) -> Self {
        Error::UnknownKey {
            kind,
            key: key.into(),
        }
    }
}
