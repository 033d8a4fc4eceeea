//! Error types for the migration generator library.

use thiserror::Error;

/// Main error type for script catalog and DDL generation operations.
#[derive(Error, Debug)]
pub enum MigrateGenError {
    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed while discovering scripts
    #[error("Script discovery error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Two or more discovered scripts share a base filename
    #[error("Duplicate script filenames detected:\n{0}")]
    DuplicateFilename(String),
}

impl MigrateGenError {
    /// Format error with full details including error chain.
    ///
    /// Library code propagates errors unformatted; this is for binary
    /// callers that print a failure before exiting.
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        // Add error chain for wrapped errors
        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for migration generator operations.
pub type Result<T> = std::result::Result<T, MigrateGenError>;
