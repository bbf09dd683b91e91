//! File planning.
//! Decides which files a project consists of, which template renders each of
//! them and which ones only receive placeholder content.

use crate::config::Config;
use crate::constants::{AUTH_TEMPLATE_DIR, EXAMPLE_ENTITY, TEMPLATE_DIR};
use crate::contexts::{auth_support_files, entity_context_files, Layout, AUTH_CONTEXTS};
use indexmap::IndexSet;

/// One file to produce, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: String,
    /// Package written into placeholder content; empty for non-Go files
    pub package: String,
    /// Template identifier, `None` for placeholder files
    pub template: Option<String>,
}

impl FileSpec {
    pub fn templated<P, K, T>(path: P, package: K, template: T) -> Self
    where
        P: Into<String>,
        K: Into<String>,
        T: Into<String>,
    {
        Self { path: path.into(), package: package.into(), template: Some(template.into()) }
    }

    pub fn placeholder<P: Into<String>, K: Into<String>>(path: P, package: K) -> Self {
        Self { path: path.into(), package: package.into(), template: None }
    }

    /// Content written when the file is not rendered from a template:
    /// a bare package clause, or nothing for non-Go files.
    pub fn placeholder_content(&self) -> String {
        if self.package.is_empty() {
            String::new()
        } else {
            format!("package {}\n", self.package)
        }
    }
}

/// Entry-point template for the architecture and framework.
pub fn main_template(is_monolith: bool, use_gin: bool) -> &'static str {
    match (is_monolith, use_gin) {
        (true, true) => "gin_monolith_main.tmpl",
        (true, false) => "monolith_main.tmpl",
        (false, _) => "main.tmpl",
    }
}

pub fn handler_template(use_gin: bool) -> &'static str {
    if use_gin {
        "gin_handler.tmpl"
    } else {
        "handler.tmpl"
    }
}

pub fn routes_template(use_gin: bool) -> &'static str {
    if use_gin {
        "gin_routes.tmpl"
    } else {
        "routes.tmpl"
    }
}

/// Full store identifier of a top-level template.
pub fn template_id(name: &str) -> String {
    format!("{TEMPLATE_DIR}/{name}")
}

/// Templates that render meaningfully without an entity: database and logger
/// bootstrap, and everything in the auth namespace.
pub fn is_entity_independent(template: &str) -> bool {
    let Some(name) = template.strip_prefix(TEMPLATE_DIR).and_then(|n| n.strip_prefix('/')) else {
        return false;
    };
    matches!(name, "db.tmpl" | "logger.tmpl")
        || name.starts_with("jwt")
        || template.starts_with(&format!("{AUTH_TEMPLATE_DIR}/"))
}

/// Whether `file` is rendered from its template for `entity`, as opposed to
/// receiving placeholder content.
pub fn should_render(file: &FileSpec, entity: &str) -> bool {
    match &file.template {
        Some(template) => !entity.is_empty() || is_entity_independent(template),
        None => false,
    }
}

/// Entity a plan is built for: monoliths fall back to the example context.
pub fn effective_entity(entity: &str, is_monolith: bool) -> String {
    if is_monolith && entity.is_empty() {
        EXAMPLE_ENTITY.to_string()
    } else {
        entity.to_string()
    }
}

/// Files generated for one entity, not including the auth module.
pub fn plan_files(entity: &str, config: &Config) -> Vec<FileSpec> {
    if config.is_monolith {
        plan_monolith_files(entity, config)
    } else {
        plan_microservice_files(entity, config)
    }
}

fn bootstrap_files(config: &Config) -> Vec<FileSpec> {
    vec![
        FileSpec::templated(
            "cmd/main.go",
            "main",
            template_id(main_template(config.is_monolith, config.use_gin)),
        ),
        FileSpec::templated("config/config.go", "config", template_id("config.tmpl")),
        FileSpec::templated("pkg/logger/logger.go", "logger", template_id("logger.tmpl")),
        FileSpec::templated("pkg/db/db.go", "db", template_id("db.tmpl")),
    ]
}

fn packaging_files() -> Vec<FileSpec> {
    vec![
        FileSpec::placeholder(".gitignore", ""),
        FileSpec::templated("Dockerfile", "", template_id("docker.tmpl")),
        FileSpec::templated("Taskfile.yaml", "", template_id("taskfile.tmpl")),
    ]
}

fn plan_microservice_files(entity: &str, config: &Config) -> Vec<FileSpec> {
    let mut files = bootstrap_files(config);
    files.extend(entity_context_files(entity, Layout::Flat, config.use_gin));
    files.extend(packaging_files());
    files
}

fn plan_monolith_files(entity: &str, config: &Config) -> Vec<FileSpec> {
    let entity = effective_entity(entity, true);
    let mut files = bootstrap_files(config);
    files.extend([
        FileSpec::placeholder("internal/shared/middleware/auth.go", "middleware"),
        FileSpec::placeholder("internal/shared/dto/common.go", "dto"),
        FileSpec::placeholder("internal/shared/utils/utils.go", "utils"),
    ]);
    files.extend(packaging_files());
    files.extend(entity_context_files(&entity, Layout::Scoped, config.use_gin));
    files
}

/// Files of the auth module: the four auth bounded contexts (flattened for a
/// microservice) and the shared auth helpers.
pub fn plan_auth_files(config: &Config) -> Vec<FileSpec> {
    let layout = Layout::for_monolith(config.is_monolith);
    let mut files: Vec<FileSpec> = AUTH_CONTEXTS.iter().flat_map(|c| c.files(layout)).collect();
    files.extend(auth_support_files(layout));
    files
}

/// Files planned for one entity iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanBatch {
    /// Entity the batch is rendered for, after the example fallback
    pub entity: String,
    pub files: Vec<FileSpec>,
}

/// Every file of a generation run, grouped by entity iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    pub batches: Vec<PlanBatch>,
}

impl ProjectPlan {
    /// Builds the plan for all requested entities, or a single empty entity.
    ///
    /// The auth module is appended to the first batch only, and a path that an
    /// earlier batch already produces is not planned again.
    pub fn build(config: &Config) -> Self {
        let entities: Vec<&str> = if config.entities.is_empty() {
            vec![""]
        } else {
            config.entities.iter().map(String::as_str).collect()
        };

        let mut seen = IndexSet::new();
        let mut batches = Vec::with_capacity(entities.len());
        for (index, entity) in entities.into_iter().enumerate() {
            let mut files = plan_files(entity, config);
            if index == 0 && config.use_auth {
                files.extend(plan_auth_files(config));
            }
            files.retain(|file| seen.insert(file.path.clone()));
            batches.push(PlanBatch { entity: effective_entity(entity, config.is_monolith), files });
        }

        Self { batches }
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.batches.iter().flat_map(|batch| batch.files.iter())
    }

    pub fn len(&self) -> usize {
        self.batches.iter().map(|batch| batch.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
