//! Error types for the sort order configuration

use std::path::PathBuf;
use thiserror::Error;

#[cfg(feature = "miette")]
use miette::Diagnostic;

/// Errors that can occur while loading a sort order configuration
#[derive(Debug, Error)]
#[cfg_attr(feature = "miette", derive(Diagnostic))]
pub enum SortOrderError {
    /// Failed to parse a sort order file
    #[error("Could not parse sort order file {}: {source}", path.display())]
    #[cfg_attr(
        feature = "miette",
        diagnostic(help("a sort order file maps attribute codes to lists of raw values"))
    )]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse a sort order document held in memory
    #[error("Could not parse sort order: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Failed to read file from disk
    #[error("Could not open file ({0}): {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    /// Structurally valid YAML that is not a usable sort order
    #[error("Invalid sort order configuration: {0}")]
    InvalidConfig(String),
}
