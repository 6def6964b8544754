use std::fmt;
use std::path::PathBuf;

/// Result type for kontrol-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating archives
#[derive(Debug)]
pub enum Error {
    /// Reading agent data failed
    Provider(kontrol_providers::Error),

    /// A memory note could not be read (strict mode only)
    Memory {
        path: PathBuf,
        source: kontrol_providers::Error,
    },

    /// IO operation failed
    Io(std::io::Error),

    /// Archive serialization failed
    Json(serde_json::Error),

    /// Configuration error (bad config file, invalid redaction pattern)
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(err) => write!(f, "Provider error: {}", err),
            Error::Memory { path, source } => {
                write!(f, "Failed to read memory note {}: {}", path.display(), source)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Provider(err) => Some(err),
            Error::Memory { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<kontrol_providers::Error> for Error {
    fn from(err: kontrol_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
