use std::collections::HashSet;

use gogen::config::Config;
use gogen::files::{
    handler_template, main_template, plan_files, routes_template, should_render, ProjectPlan,
};
use gogen::templates::EmbeddedTemplates;

const MODULE: &str = "github.com/test/project";

fn paths(plan: &ProjectPlan) -> Vec<&str> {
    plan.files().map(|f| f.path.as_str()).collect()
}

#[test]
fn test_template_selectors() {
    assert_eq!(main_template(false, false), "main.tmpl");
    assert_eq!(main_template(false, true), "main.tmpl");
    assert_eq!(main_template(true, false), "monolith_main.tmpl");
    assert_eq!(main_template(true, true), "gin_monolith_main.tmpl");
    assert_eq!(handler_template(false), "handler.tmpl");
    assert_eq!(handler_template(true), "gin_handler.tmpl");
    assert_eq!(routes_template(false), "routes.tmpl");
    assert_eq!(routes_template(true), "gin_routes.tmpl");
}

#[test]
fn test_microservice_plan() {
    let config = Config::new(MODULE).entities(["user"]);
    let plan = ProjectPlan::build(&config);
    let paths = paths(&plan);

    for expected in [
        "cmd/main.go",
        "internal/application/user_service.go",
        "internal/interface/http/v1/handlers/user_handler.go",
        "internal/infrastructure/postgres/postgres.go",
        "Dockerfile",
        "Taskfile.yaml",
    ] {
        assert_eq!(paths.iter().filter(|p| **p == expected).count(), 1, "{expected}");
    }
    assert!(!paths.iter().any(|p| p.starts_with("pkg/auth")));
}

#[test]
fn test_gin_selects_gin_templates() {
    let config = Config::new(MODULE).entities(["user"]).gin(true);
    let files = plan_files("user", &config);

    let handler = files.iter().find(|f| f.path.ends_with("user_handler.go")).unwrap();
    assert_eq!(handler.template.as_deref(), Some("templates/gin_handler.tmpl"));

    let routes = files.iter().find(|f| f.path.ends_with("routes.go")).unwrap();
    assert_eq!(routes.template.as_deref(), Some("templates/gin_routes.tmpl"));
}

#[test]
fn test_monolith_with_auth_plans_each_path_once() {
    let config = Config::new(MODULE).monolith(true).entities(["user", "product"]).auth(true);
    let plan = ProjectPlan::build(&config);
    let paths = paths(&plan);

    let unique: HashSet<&str> = paths.iter().copied().collect();
    assert_eq!(unique.len(), paths.len());

    assert_eq!(plan.batches.len(), 2);
    assert_eq!(plan.batches[0].entity, "user");
    assert!(plan.batches[0].files.iter().any(|f| f.path == "internal/auth/application/auth_service.go"));
    assert!(plan.batches[0].files.iter().any(|f| f.path == "pkg/auth/jwt.go"));

    let product: Vec<&str> = plan.batches[1].files.iter().map(|f| f.path.as_str()).collect();
    assert!(product.contains(&"internal/product/application/product_service.go"));
    assert!(!product.contains(&"cmd/main.go"));
    assert!(!product.iter().any(|p| p.starts_with("internal/auth/")));
}

#[test]
fn test_monolith_without_entity_uses_example() {
    let config = Config::new(MODULE).monolith(true);
    let plan = ProjectPlan::build(&config);

    assert_eq!(plan.batches.len(), 1);
    assert_eq!(plan.batches[0].entity, "example");
    assert!(paths(&plan).contains(&"internal/example/application/example_service.go"));
}

#[test]
fn test_microservice_without_entity_renders_only_bootstrap() {
    let config = Config::new(MODULE);
    let plan = ProjectPlan::build(&config);
    let batch = &plan.batches[0];

    assert_eq!(batch.entity, "");
    let rendered: Vec<&str> = batch
        .files
        .iter()
        .filter(|f| should_render(f, &batch.entity))
        .map(|f| f.path.as_str())
        .collect();
    assert_eq!(rendered, vec!["pkg/logger/logger.go", "pkg/db/db.go"]);
    assert!(paths(&plan).contains(&"internal/application/service.go"));
}

#[test]
fn test_microservice_auth_is_flattened() {
    let config = Config::new(MODULE).entities(["product"]).auth(true);
    let paths_owned: Vec<String> = ProjectPlan::build(&config).files().map(|f| f.path.clone()).collect();

    assert!(paths_owned.contains(&"internal/application/auth_service.go".to_string()));
    assert!(paths_owned.contains(&"internal/domain/entity/user.go".to_string()));
    assert!(paths_owned.contains(&"internal/interface/http/middlewares/jwt_middleware.go".to_string()));
    assert!(!paths_owned.iter().any(|p| p.starts_with("internal/user/")));
}

#[test]
fn test_every_planned_template_is_embedded() {
    let embedded: HashSet<&str> = EmbeddedTemplates::ids().collect();
    let configs = [
        Config::new(MODULE).entities(["user"]).auth(true),
        Config::new(MODULE).entities(["user"]).gin(true).auth(true),
        Config::new(MODULE).monolith(true).entities(["user"]).auth(true),
        Config::new(MODULE).monolith(true).gin(true).auth(true),
    ];

    for config in &configs {
        for file in ProjectPlan::build(config).files() {
            if let Some(template) = &file.template {
                assert!(embedded.contains(template.as_str()), "{template} is not embedded");
            }
        }
    }
}
