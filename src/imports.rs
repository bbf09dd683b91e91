//! Import path resolution.
//! Builds the [`TemplateData`] substitution context, including the Go import
//! paths a rendered file may need for the current architecture.

use crate::config::Config;
use crate::naming::path_segment;
use serde::Serialize;

/// Substitution context for one rendered file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    pub package: String,
    pub project_root: String,
    pub module_name: String,
    pub entity_name: String,
    pub entities: Vec<String>,
    pub is_monolith: bool,
    pub use_gin: bool,
    pub use_auth: bool,
    pub handler_import: String,
    pub service_import: String,
    pub repository_import: String,
    pub entity_import: String,
    pub infra_import: String,
    pub routes_import: String,
    /// Only present for a monolith with the auth module
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub auth_imports: Option<AuthImports>,
}

/// Import paths of the auth bounded contexts in a monolith.
///
/// They depend on the module name only: the auth contexts exist once per
/// project, whatever entity is being generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthImports {
    pub auth_service_import: String,
    pub user_entity_import: String,
    pub user_repository_import: String,
    pub user_service_import: String,
    pub role_entity_import: String,
    pub role_repository_import: String,
    pub role_service_import: String,
    pub permission_entity_import: String,
    pub permission_repository_import: String,
}

impl AuthImports {
    pub fn for_module(module: &str) -> Self {
        let context = |name: &str, layer: &str| format!("{module}/internal/{name}/{layer}");
        Self {
            auth_service_import: context("auth", "application"),
            user_entity_import: context("user", "domain/entity"),
            user_repository_import: context("user", "domain/repository"),
            user_service_import: context("user", "application"),
            role_entity_import: context("role", "domain/entity"),
            role_repository_import: context("role", "domain/repository"),
            role_service_import: context("role", "application"),
            permission_entity_import: context("permission", "domain/entity"),
            permission_repository_import: context("permission", "domain/repository"),
        }
    }
}

/// Resolves the template data for a file of package `package` generated for
/// `entity`.
///
/// A monolith with an entity gets import paths inside `internal/<entity>`;
/// a microservice, or a monolith without an entity, uses the flat layout.
pub fn resolve(package: &str, entity: &str, config: &Config) -> TemplateData {
    let module = config.module_name.as_str();
    let base = if config.is_monolith && !entity.is_empty() {
        format!("{module}/internal/{}", path_segment(entity))
    } else {
        format!("{module}/internal")
    };

    let auth_imports =
        (config.is_monolith && config.use_auth).then(|| AuthImports::for_module(module));

    TemplateData {
        package: package.to_string(),
        project_root: config.project_root().to_string(),
        module_name: module.to_string(),
        entity_name: entity.to_string(),
        entities: config.entities.clone(),
        is_monolith: config.is_monolith,
        use_gin: config.use_gin,
        use_auth: config.use_auth,
        handler_import: format!("{base}/interface/http/v1/handlers"),
        service_import: format!("{base}/application"),
        repository_import: format!("{base}/domain/repository"),
        entity_import: format!("{base}/domain/entity"),
        infra_import: format!("{base}/infrastructure/postgres"),
        routes_import: format!("{base}/interface/http/v1/routes"),
        auth_imports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_imports_serialize_flat() {
        let config = Config::new("github.com/test/project").monolith(true).auth(true);
        let data = resolve("main", "user", &config);
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(
            value["user_repository_import"],
            "github.com/test/project/internal/user/domain/repository"
        );
        assert_eq!(value["auth_service_import"], "github.com/test/project/internal/auth/application");
        assert!(value.get("auth_imports").is_none());
    }

    #[test]
    fn test_auth_imports_absent_without_monolith() {
        let config = Config::new("github.com/test/project").auth(true);
        let value = serde_json::to_value(resolve("main", "user", &config)).unwrap();
        assert!(value.get("user_entity_import").is_none());
    }
}
