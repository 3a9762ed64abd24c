//! Error types for module generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::templates::ArtifactKind;

/// Generator error type
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Module name does not match the accepted grammar
    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName {
        /// Offending module name
        name: String,
        /// Rule that was broken
        reason: &'static str,
    },

    /// Table name does not match the accepted grammar
    #[error("Invalid table name '{name}' for module '{module}': {reason}")]
    InvalidTableName {
        /// Module the table belongs to
        module: String,
        /// Offending table name
        name: String,
        /// Rule that was broken
        reason: &'static str,
    },

    /// The same module name appears twice in the list
    #[error("Duplicate module name: {0}")]
    DuplicateModule(String),

    /// A built-in template failed to compile
    #[error("Failed to compile {kind} template")]
    TemplateSyntax {
        /// Artifact whose template is broken
        kind: ArtifactKind,
        /// Underlying handlebars error
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// Template rendering failed
    #[error("Failed to render {kind} template")]
    Template {
        /// Artifact being rendered
        kind: ArtifactKind,
        /// Underlying handlebars error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// Writing a generated file failed
    #[error("Failed to write file: {}", path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The directory policy could not prepare a module directory
    #[error("Failed to create directory: {}", path.display())]
    CreateDir {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading an existing file for comparison failed
    #[error("Failed to read file: {}", path.display())]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for GenerateError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
