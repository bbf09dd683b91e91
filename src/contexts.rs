//! Bounded-context records.
//!
//! Each bounded context is described as data (which components it has, where
//! each component lives, which template renders it) and expanded into
//! [`FileSpec`]s for either layout. The file plan is composed from these
//! tables instead of one hand-written list per architecture.

use crate::constants::AUTH_TEMPLATE_DIR;
use crate::files::{handler_template, routes_template, template_id, FileSpec};
use crate::naming::path_segment;

/// Where a bounded context's layers live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `internal/<layer>`: microservice, one implicit context
    Flat,
    /// `internal/<context>/<layer>`: one subtree per context in a monolith
    Scoped,
}

impl Layout {
    pub fn for_monolith(is_monolith: bool) -> Self {
        if is_monolith {
            Layout::Scoped
        } else {
            Layout::Flat
        }
    }

    /// Root directory of `context` in this layout.
    pub fn root(self, context: &str) -> String {
        match self {
            Layout::Flat => "internal".to_string(),
            Layout::Scoped => format!("internal/{context}"),
        }
    }
}

/// One generated component of an auth bounded context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Entity,
    Repository,
    Service,
    Handler,
    Routes,
    Postgres,
    Dto,
}

impl Component {
    pub fn dir(self) -> &'static str {
        match self {
            Component::Entity => "domain/entity",
            Component::Repository => "domain/repository",
            Component::Service => "application",
            Component::Handler => "interface/http/v1/handlers",
            Component::Routes => "interface/http/v1/routes",
            Component::Postgres => "infrastructure/postgres",
            Component::Dto => "interface/http/v1/dto",
        }
    }

    pub fn package(self) -> &'static str {
        match self {
            Component::Entity => "entity",
            Component::Repository => "repository",
            Component::Service => "application",
            Component::Handler => "handlers",
            Component::Routes => "routes",
            Component::Postgres => "postgres",
            Component::Dto => "dto",
        }
    }

    fn stem(self) -> &'static str {
        match self {
            Component::Entity => "entity",
            Component::Repository => "repository",
            Component::Service => "service",
            Component::Handler => "handler",
            Component::Routes => "routes",
            Component::Postgres => "postgres",
            Component::Dto => "dto",
        }
    }

    fn file_name(self, context: &str) -> String {
        match self {
            Component::Entity => format!("{context}.go"),
            other => format!("{context}_{}.go", other.stem()),
        }
    }
}

/// A fixed bounded context shipped with the auth module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedContext {
    pub name: &'static str,
    pub components: &'static [Component],
}

const CRUD_COMPONENTS: &[Component] = &[
    Component::Entity,
    Component::Repository,
    Component::Service,
    Component::Handler,
    Component::Routes,
    Component::Postgres,
    Component::Dto,
];

/// The auth module: login/registration on top of three CRUD contexts.
pub const AUTH_CONTEXTS: [BoundedContext; 4] = [
    BoundedContext {
        name: "auth",
        components: &[Component::Service, Component::Handler, Component::Routes, Component::Dto],
    },
    BoundedContext { name: "user", components: CRUD_COMPONENTS },
    BoundedContext { name: "role", components: CRUD_COMPONENTS },
    BoundedContext { name: "permission", components: CRUD_COMPONENTS },
];

impl BoundedContext {
    /// Identifier of the template rendering `component` for this context.
    pub fn template(&self, component: Component) -> String {
        format!("{AUTH_TEMPLATE_DIR}/{}_{}.tmpl", self.name, component.stem())
    }

    pub fn files(&self, layout: Layout) -> Vec<FileSpec> {
        let root = layout.root(self.name);
        self.components
            .iter()
            .map(|&component| {
                FileSpec::templated(
                    format!("{root}/{}/{}", component.dir(), component.file_name(self.name)),
                    component.package(),
                    self.template(component),
                )
            })
            .collect()
    }
}

/// Project-wide files of the auth module: token, password and RBAC helpers,
/// the JWT middleware and the schema migrations.
pub fn auth_support_files(layout: Layout) -> Vec<FileSpec> {
    let middleware = match layout {
        Layout::Flat => FileSpec::templated(
            "internal/interface/http/middlewares/jwt_middleware.go",
            "middlewares",
            format!("{AUTH_TEMPLATE_DIR}/jwt_middleware.tmpl"),
        ),
        Layout::Scoped => FileSpec::templated(
            "internal/shared/middleware/jwt_middleware.go",
            "middleware",
            format!("{AUTH_TEMPLATE_DIR}/jwt_middleware.tmpl"),
        ),
    };

    vec![
        FileSpec::templated("pkg/auth/jwt.go", "auth", format!("{AUTH_TEMPLATE_DIR}/jwt.tmpl")),
        FileSpec::templated("pkg/auth/password.go", "auth", format!("{AUTH_TEMPLATE_DIR}/password.tmpl")),
        FileSpec::templated("pkg/auth/rbac.go", "auth", format!("{AUTH_TEMPLATE_DIR}/rbac.tmpl")),
        middleware,
        FileSpec::templated(
            "migrations/000001_create_auth_tables.up.sql",
            "",
            format!("{AUTH_TEMPLATE_DIR}/migration_up.tmpl"),
        ),
        FileSpec::templated(
            "migrations/000001_create_auth_tables.down.sql",
            "",
            format!("{AUTH_TEMPLATE_DIR}/migration_down.tmpl"),
        ),
    ]
}

enum FileName {
    Fixed(&'static str),
    /// `<entity>_<suffix>.go`, or `<suffix>.go` without an entity
    EntityPrefixed(&'static str),
}

enum TemplateChoice {
    Placeholder,
    Named(&'static str),
    Handler,
    Routes,
}

struct ContextFile {
    dir: &'static str,
    name: FileName,
    package: &'static str,
    template: TemplateChoice,
}

/// Layers generated for a requested entity, in either layout.
const ENTITY_CONTEXT_FILES: &[ContextFile] = &[
    ContextFile {
        dir: "domain/constants",
        name: FileName::Fixed("constants.go"),
        package: "constants",
        template: TemplateChoice::Placeholder,
    },
    ContextFile {
        dir: "domain/entity",
        name: FileName::Fixed("entity.go"),
        package: "entity",
        template: TemplateChoice::Named("entity.tmpl"),
    },
    ContextFile {
        dir: "domain/repository",
        name: FileName::Fixed("repository.go"),
        package: "repository",
        template: TemplateChoice::Named("repository.tmpl"),
    },
    ContextFile {
        dir: "application",
        name: FileName::EntityPrefixed("service"),
        package: "application",
        template: TemplateChoice::Named("service.tmpl"),
    },
    ContextFile {
        dir: "interface/http/v1/handlers",
        name: FileName::EntityPrefixed("handler"),
        package: "handlers",
        template: TemplateChoice::Handler,
    },
    ContextFile {
        dir: "interface/http/v1/routes",
        name: FileName::Fixed("routes.go"),
        package: "routes",
        template: TemplateChoice::Routes,
    },
    ContextFile {
        dir: "interface/http/v1/dto",
        name: FileName::Fixed("request.go"),
        package: "dto",
        template: TemplateChoice::Placeholder,
    },
    ContextFile {
        dir: "interface/http/v1/dto",
        name: FileName::Fixed("response.go"),
        package: "dto",
        template: TemplateChoice::Placeholder,
    },
    ContextFile {
        dir: "interface/http/middlewares",
        name: FileName::Fixed("middleware.go"),
        package: "middlewares",
        template: TemplateChoice::Placeholder,
    },
    ContextFile {
        dir: "infrastructure/postgres",
        name: FileName::Fixed("postgres.go"),
        package: "postgres",
        template: TemplateChoice::Named("postgres_repository.tmpl"),
    },
];

/// Files of the bounded context generated for `entity`.
pub fn entity_context_files(entity: &str, layout: Layout, use_gin: bool) -> Vec<FileSpec> {
    let segment = path_segment(entity);
    let root = layout.root(&segment);

    ENTITY_CONTEXT_FILES
        .iter()
        .map(|file| {
            let name = match file.name {
                FileName::Fixed(name) => name.to_string(),
                FileName::EntityPrefixed(suffix) if segment.is_empty() => format!("{suffix}.go"),
                FileName::EntityPrefixed(suffix) => format!("{segment}_{suffix}.go"),
            };
            let path = format!("{root}/{}/{name}", file.dir);
            match file.template {
                TemplateChoice::Placeholder => FileSpec::placeholder(path, file.package),
                TemplateChoice::Named(name) => FileSpec::templated(path, file.package, template_id(name)),
                TemplateChoice::Handler => {
                    FileSpec::templated(path, file.package, template_id(handler_template(use_gin)))
                }
                TemplateChoice::Routes => {
                    FileSpec::templated(path, file.package, template_id(routes_template(use_gin)))
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_auth_context_paths() {
        let files = AUTH_CONTEXTS[1].files(Layout::Scoped);
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"internal/user/domain/entity/user.go"));
        assert!(paths.contains(&"internal/user/domain/repository/user_repository.go"));
        assert!(paths.contains(&"internal/user/infrastructure/postgres/user_postgres.go"));
        assert_eq!(files.len(), CRUD_COMPONENTS.len());
    }

    #[test]
    fn test_flat_auth_context_paths() {
        let files = AUTH_CONTEXTS[0].files(Layout::Flat);
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "internal/application/auth_service.go",
                "internal/interface/http/v1/handlers/auth_handler.go",
                "internal/interface/http/v1/routes/auth_routes.go",
                "internal/interface/http/v1/dto/auth_dto.go",
            ]
        );
    }

    #[test]
    fn test_auth_templates_live_in_auth_namespace() {
        for context in &AUTH_CONTEXTS {
            for file in context.files(Layout::Scoped) {
                let template = file.template.unwrap_or_default();
                assert!(template.starts_with("templates/auth/"), "{template}");
            }
        }
    }

    #[test]
    fn test_entity_files_without_entity_drop_prefix() {
        let files = entity_context_files("", Layout::Flat, false);
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"internal/application/service.go"));
        assert!(paths.contains(&"internal/interface/http/v1/handlers/handler.go"));
    }

    #[test]
    fn test_entity_files_use_lowercase_segment() {
        let files = entity_context_files("orderItem", Layout::Scoped, true);
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"internal/orderitem/application/orderitem_service.go"));
        assert!(paths.contains(&"internal/orderitem/interface/http/v1/handlers/orderitem_handler.go"));
    }
}
