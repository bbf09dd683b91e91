//! Template stores.
//! The templates that ship with gogen are compiled into the binary and looked
//! up by forward-slash identifiers such as `templates/handler.tmpl`.

use indexmap::IndexMap;

/// Read-only lookup of template source by identifier.
pub trait TemplateStore: Send + Sync {
    /// Returns the template source for `id`, if the store has it.
    fn get(&self, id: &str) -> Option<String>;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// Converts host path separators to the forward slashes store keys use.
pub fn normalize_template_id(id: &str) -> String {
    id.replace('\\', "/")
}

macro_rules! embed_templates {
    ($($id:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!("../", $id)))),*]
    };
}

static EMBEDDED_TEMPLATES: &[(&str, &str)] = embed_templates![
    "templates/main.tmpl",
    "templates/monolith_main.tmpl",
    "templates/gin_monolith_main.tmpl",
    "templates/config.tmpl",
    "templates/logger.tmpl",
    "templates/db.tmpl",
    "templates/entity.tmpl",
    "templates/repository.tmpl",
    "templates/service.tmpl",
    "templates/handler.tmpl",
    "templates/gin_handler.tmpl",
    "templates/routes.tmpl",
    "templates/gin_routes.tmpl",
    "templates/postgres_repository.tmpl",
    "templates/docker.tmpl",
    "templates/taskfile.tmpl",
    "templates/auth/auth_service.tmpl",
    "templates/auth/auth_handler.tmpl",
    "templates/auth/auth_routes.tmpl",
    "templates/auth/auth_dto.tmpl",
    "templates/auth/_crud_entity.tmpl",
    "templates/auth/_crud_repository.tmpl",
    "templates/auth/_crud_service.tmpl",
    "templates/auth/_crud_handler.tmpl",
    "templates/auth/_crud_routes.tmpl",
    "templates/auth/_crud_postgres.tmpl",
    "templates/auth/_crud_dto.tmpl",
    "templates/auth/user_entity.tmpl",
    "templates/auth/user_repository.tmpl",
    "templates/auth/user_service.tmpl",
    "templates/auth/user_handler.tmpl",
    "templates/auth/user_routes.tmpl",
    "templates/auth/user_postgres.tmpl",
    "templates/auth/user_dto.tmpl",
    "templates/auth/role_entity.tmpl",
    "templates/auth/role_repository.tmpl",
    "templates/auth/role_service.tmpl",
    "templates/auth/role_handler.tmpl",
    "templates/auth/role_routes.tmpl",
    "templates/auth/role_postgres.tmpl",
    "templates/auth/role_dto.tmpl",
    "templates/auth/permission_entity.tmpl",
    "templates/auth/permission_repository.tmpl",
    "templates/auth/permission_service.tmpl",
    "templates/auth/permission_handler.tmpl",
    "templates/auth/permission_routes.tmpl",
    "templates/auth/permission_postgres.tmpl",
    "templates/auth/permission_dto.tmpl",
    "templates/auth/jwt.tmpl",
    "templates/auth/password.tmpl",
    "templates/auth/rbac.tmpl",
    "templates/auth/jwt_middleware.tmpl",
    "templates/auth/migration_up.tmpl",
    "templates/auth/migration_down.tmpl",
];

/// The templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Identifiers of every embedded template.
    pub fn ids() -> impl Iterator<Item = &'static str> {
        EMBEDDED_TEMPLATES.iter().map(|(id, _)| *id)
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn get(&self, id: &str) -> Option<String> {
        EMBEDDED_TEMPLATES
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, content)| (*content).to_string())
    }
}

/// In-memory template store, for custom template sets.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    templates: IndexMap<String, String>,
}

impl MemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I: Into<String>, C: Into<String>>(&mut self, id: I, content: C) {
        self.templates.insert(normalize_template_id(&id.into()), content.into());
    }
}

impl TemplateStore for MemoryTemplates {
    fn get(&self, id: &str) -> Option<String> {
        self.templates.get(id).cloned()
    }
}
