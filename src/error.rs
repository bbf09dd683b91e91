//! Error handling for gogen.
//! Defines the error taxonomy and result type used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors that can abort a generation run.
///
/// Every variant carries enough context (path, template id or command) for the
/// message printed by [`default_error_handler`] to be actionable on its own.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid module name, entity name or configuration file.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The filesystem refused to create a planned directory.
    #[error("Failed to create directory '{path}': {source}.")]
    DirectoryError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The template identifier is not present in the template store.
    #[error("Template '{template}' not found in the template store.")]
    TemplateNotFound { template: String },

    /// The template text could not be parsed.
    #[error("Failed to parse template '{template}': {source}.")]
    TemplateParseError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Substitution failed, usually because the template references data that
    /// is not available for the current file.
    #[error("Failed to render template '{template}': {source}.")]
    TemplateRenderError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write file '{path}': {source}.")]
    FileWriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Wraps any error raised while producing one planned file.
    #[error("Failed to generate '{path}': {source}")]
    FileGenerationError {
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// External module tooling exited unsuccessfully.
    #[error("Command '{command}' failed: {stderr}")]
    CommandError { command: String, stderr: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message prefixed with a failure marker to stderr and exits
/// with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("❌ Error: {err}");
    std::process::exit(1);
}
