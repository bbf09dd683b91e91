//! Generation configuration.
//! Builds the immutable [`Config`] for one run from command-line arguments and
//! an optional JSON/YAML configuration file, and validates it before planning.

use crate::cli::Args;
use crate::constants::DEFAULT_MODULE;
use crate::error::{Error, Result};
use crate::naming::normalize_entity;
use indexmap::IndexSet;
use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MODULE_PATTERN: &str = r"^[A-Za-z0-9._~-]+(/[A-Za-z0-9._~-]+)*$";
const ENTITY_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_-]*$";

/// Describes what a single generation run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Go module path, e.g. `github.com/org/project`
    pub module_name: String,
    /// Bounded-context monolith instead of a flat microservice
    pub is_monolith: bool,
    /// Normalized entity names in request order, without duplicates
    pub entities: Vec<String>,
    /// Gin routing templates instead of chi
    pub use_gin: bool,
    /// Adds the auth, user, role and permission contexts
    pub use_auth: bool,
    /// Directory the project root is created in
    pub output_dir: PathBuf,
    /// Skips `go mod init` and `go mod tidy`
    pub skip_go_mod: bool,
}

/// Optional keys accepted in a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub module: Option<String>,
    #[serde(default)]
    pub monolith: bool,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub gin: bool,
    #[serde(default)]
    pub auth: bool,
}

impl Config {
    pub fn new<S: Into<String>>(module_name: S) -> Self {
        Self {
            module_name: module_name.into(),
            is_monolith: false,
            entities: Vec::new(),
            use_gin: false,
            use_auth: false,
            output_dir: PathBuf::from("."),
            skip_go_mod: false,
        }
    }

    pub fn monolith(mut self, is_monolith: bool) -> Self {
        self.is_monolith = is_monolith;
        self
    }

    /// Replaces the entity list, normalizing each name and dropping duplicates.
    pub fn entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: IndexSet<String> =
            entities.into_iter().map(|e| normalize_entity(e.as_ref())).collect();
        self.entities = unique.into_iter().collect();
        self
    }

    pub fn gin(mut self, use_gin: bool) -> Self {
        self.use_gin = use_gin;
        self
    }

    pub fn auth(mut self, use_auth: bool) -> Self {
        self.use_auth = use_auth;
        self
    }

    pub fn output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn skip_go_mod(mut self, skip: bool) -> Self {
        self.skip_go_mod = skip;
        self
    }

    /// Name of the generated project directory: the last module path segment.
    pub fn project_root(&self) -> &str {
        self.module_name.rsplit('/').next().unwrap_or_default()
    }

    /// Absolute or relative path of the generated project directory.
    pub fn project_dir(&self) -> PathBuf {
        self.output_dir.join(self.project_root())
    }

    /// Checks the module and entity names before anything touches the disk.
    ///
    /// # Errors
    /// * `Error::ConfigError` for an empty or malformed module name, or an
    ///   entity name that is not a plain identifier
    pub fn validate(&self) -> Result<()> {
        if self.module_name.trim().is_empty() {
            return Err(Error::ConfigError("module name must not be empty".to_string()));
        }

        let module_re = compile(MODULE_PATTERN)?;
        if !module_re.is_match(&self.module_name) {
            return Err(Error::ConfigError(format!(
                "invalid module name '{}', expected slash separated segments like 'github.com/org/project'",
                self.module_name
            )));
        }

        let entity_re = compile(ENTITY_PATTERN)?;
        if let Some(entity) = self.entities.iter().find(|e| !entity_re.is_match(e)) {
            return Err(Error::ConfigError(format!("invalid entity name '{entity}'")));
        }

        Ok(())
    }

    /// Builds the configuration from parsed arguments, merging in the
    /// configuration file when one was given.
    ///
    /// Explicit command-line values win over the file, the file wins over
    /// defaults. Boolean switches are enabled if either source enables them.
    pub fn from_args(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load_config_file(path)?,
            None => ConfigFile::default(),
        };

        let module = args
            .module
            .clone()
            .or(file.module)
            .unwrap_or_else(|| DEFAULT_MODULE.to_string());
        let entities = if args.entities.is_empty() { file.entities } else { args.entities.clone() };

        let config = Config::new(module)
            .monolith(args.monolith || file.monolith)
            .entities(entities)
            .gin(args.gin || file.gin)
            .auth(args.auth || file.auth)
            .output_dir(&args.output_dir)
            .skip_go_mod(args.skip_go_mod);

        config.validate()?;
        Ok(config)
    }
}

/// Reads a JSON or YAML configuration file.
///
/// JSON is tried first, then YAML.
///
/// # Errors
/// * `Error::ConfigError` if the file cannot be read or parsed
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("cannot read config file '{}': {e}", path.display()))
    })?;

    parse_config(&content)
}

/// Parses configuration file content, JSON first and YAML as a fallback.
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    match serde_json::from_str(content) {
        Ok(file) => Ok(file),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("invalid configuration format: {e}"))),
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::ConfigError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_is_last_segment() {
        let config = Config::new("github.com/test/project");
        assert_eq!(config.project_root(), "project");

        let config = Config::new("standalone");
        assert_eq!(config.project_root(), "standalone");
    }

    #[test]
    fn test_entities_are_normalized_and_deduplicated() {
        let config = Config::new("github.com/test/project").entities(["User", "user", "order-item"]);
        assert_eq!(config.entities, vec!["user", "orderItem"]);
    }

    #[test]
    fn test_validate_rejects_bad_modules() {
        assert!(Config::new("").validate().is_err());
        assert!(Config::new("  ").validate().is_err());
        assert!(Config::new("github.com//project").validate().is_err());
        assert!(Config::new("/github.com/project").validate().is_err());
        assert!(Config::new("github.com/project/").validate().is_err());
        assert!(Config::new("github.com/my project").validate().is_err());
        assert!(Config::new("github.com/test/project").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_entities() {
        let config = Config::new("github.com/test/project").entities(["9lives"]);
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }
}
