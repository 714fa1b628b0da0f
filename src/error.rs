//! Unified error type.

use std::path::PathBuf;

/// The error type returned by shopfront's fallible operations.
///
/// Application-level outcomes (404, 406, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: reading settings, loading the catalog file,
/// binding to a port or accepting a connection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid setting `{name}`: {reason}")]
    Config { name: String, reason: String },

    #[error("cannot read catalog `{}`: {source}", .path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    CatalogFormat(#[from] toml::de::Error),
}
