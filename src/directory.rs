//! Directory planning.
//! Computes which directories a project needs for the requested architecture
//! and creates them under the project directory.

use crate::constants::EXAMPLE_ENTITY;
use crate::contexts::AUTH_CONTEXTS;
use crate::error::{Error, Result};
use crate::naming::path_segment;
use indexmap::IndexSet;
use log::debug;
use std::path::Path;

/// Flat layout of a microservice, one implicit bounded context.
pub const MICROSERVICE_DIRECTORIES: &[&str] = &[
    "cmd",
    "docs",
    "docs/swagger",
    "docs/api",
    "internal/interface/http/v1/handlers",
    "internal/interface/http/v1/routes",
    "internal/interface/http/v1/dto",
    "internal/interface/http/middlewares",
    "internal/interface/grpc",
    "internal/application",
    "internal/domain/entity",
    "internal/domain/constants",
    "internal/domain/repository",
    "internal/infrastructure",
    "internal/infrastructure/postgres",
    "migrations",
    "config",
    "pkg/logger",
    "pkg/db",
];

/// Directories every monolith shares regardless of its bounded contexts.
pub const MONOLITH_SHARED_DIRECTORIES: &[&str] = &[
    "cmd",
    "docs",
    "docs/swagger",
    "docs/api",
    "config",
    "pkg/logger",
    "pkg/db",
    "internal/shared/middleware",
    "internal/shared/dto",
    "internal/shared/utils",
    "migrations",
    "scripts",
];

/// Layers of one bounded context, relative to `internal/<context>`.
pub const BOUNDED_CONTEXT_DIRECTORIES: &[&str] = &[
    "domain",
    "domain/constants",
    "domain/entity",
    "domain/repository",
    "interface",
    "interface/http",
    "interface/grpc",
    "interface/http/v1",
    "interface/http/v1/handlers",
    "interface/http/v1/routes",
    "interface/http/v1/dto",
    "interface/http/middlewares",
    "application",
    "infrastructure",
    "infrastructure/postgres",
];

/// Ordered, duplicate-free set of directories relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPlan {
    dirs: IndexSet<String>,
}

impl DirectoryPlan {
    /// Plans the directories for one entity.
    ///
    /// A microservice ignores the entity name. A monolith gets the shared
    /// directories plus the bounded context `internal/<entity>`, or
    /// `internal/example` when no entity was given.
    pub fn for_entity(entity: &str, is_monolith: bool) -> Self {
        let mut plan = Self::default();
        if !is_monolith {
            plan.extend(MICROSERVICE_DIRECTORIES.iter().copied());
            return plan;
        }

        plan.extend(MONOLITH_SHARED_DIRECTORIES.iter().copied());
        let context = if entity.is_empty() { EXAMPLE_ENTITY.to_string() } else { path_segment(entity) };
        plan.add_bounded_context(&context);
        plan
    }

    /// Plans the directories required by the auth module.
    pub fn for_auth(is_monolith: bool) -> Self {
        let mut plan = Self::default();
        plan.push("pkg/auth");
        if is_monolith {
            for context in &AUTH_CONTEXTS {
                plan.add_bounded_context(context.name);
            }
        }
        plan
    }

    fn add_bounded_context(&mut self, context: &str) {
        for layer in BOUNDED_CONTEXT_DIRECTORIES {
            self.push(format!("internal/{context}/{layer}"));
        }
    }

    pub fn push<S: Into<String>>(&mut self, dir: S) {
        self.dirs.insert(dir.into());
    }

    pub fn extend<I, S>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            self.push(dir);
        }
    }

    /// Appends every directory of `other` that is not planned yet.
    pub fn merge(&mut self, other: DirectoryPlan) {
        self.dirs.extend(other.dirs);
    }

    pub fn contains(&self, dir: &str) -> bool {
        self.dirs.contains(dir)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Creates every planned directory (with parents) below `project_dir`.
    ///
    /// Existing directories are left untouched.
    ///
    /// # Errors
    /// * `Error::DirectoryError` naming the first path that could not be created
    pub fn create<P: AsRef<Path>>(&self, project_dir: P) -> Result<()> {
        let project_dir = project_dir.as_ref();
        for dir in self.iter() {
            let path = project_dir.join(dir);
            debug!("Creating directory: {}", path.display());
            std::fs::create_dir_all(&path).map_err(|source| Error::DirectoryError {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }
}
