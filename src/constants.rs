//! Common constants used throughout gogen.

/// Module path used when neither the command line nor a config file sets one
pub const DEFAULT_MODULE: &str = "github.com/username/golang_project";

/// Bounded context generated for a monolith when no entity was requested
pub const EXAMPLE_ENTITY: &str = "example";

/// Root namespace of every template identifier
pub const TEMPLATE_DIR: &str = "templates";

/// Namespace of templates that render without an entity
pub const AUTH_TEMPLATE_DIR: &str = "templates/auth";

/// Descriptor produced by `go mod init`
pub const GO_MOD_FILE: &str = "go.mod";
