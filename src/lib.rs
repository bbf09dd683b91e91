//! gogen scaffolds Domain-Driven-Design Go projects.
//! It plans the directory and file layout of a microservice or a monolith of
//! bounded contexts, renders each file from embedded templates and finally
//! initializes the Go module.

/// Command-line interface module for the gogen application
pub mod cli;

/// Generation configuration, validation and configuration files
pub mod config;

/// Common constants
pub mod constants;

/// Bounded-context records the file plan is composed from
pub mod contexts;

/// Directory planning and creation
pub mod directory;

/// Error types and handling for the gogen application
pub mod error;

/// File planning and template selection
pub mod files;

/// Project generation orchestration
pub mod generator;

/// `go mod init` / `go mod tidy`
pub mod gomod;

/// Import path resolution and template data
pub mod imports;

pub mod logger;

/// Entity-name normalization and case helpers
pub mod naming;

/// Template rendering
pub mod renderer;

/// Embedded and in-memory template stores
pub mod templates;
