use std::fmt;

/// Errors that can occur during object storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// An object already exists under the key; uploads never overwrite.
    AlreadyExists(String),
    /// The key is not a safe relative path.
    InvalidKey(String),
    /// An I/O error occurred.
    Io(std::io::Error),
    /// The object exceeds the configured size limit.
    SizeLimitExceeded { actual: u64, limit: u64 },
    /// The remote storage service rejected the request.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists(key) => write!(f, "object already exists: {key}"),
            Self::InvalidKey(msg) => write!(f, "invalid object key: {msg}"),
            Self::Io(err) => write!(f, "storage IO error: {err}"),
            Self::SizeLimitExceeded { actual, limit } => {
                write!(f, "object exceeds size limit ({actual} > {limit} bytes)")
            }
            Self::Backend(msg) => write!(f, "storage backend error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
