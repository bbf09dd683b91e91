//! Project generation orchestration.
//! Runs directory planning, file planning and rendering, then the Go module
//! tooling, strictly in sequence and stopping at the first error.

use crate::config::Config;
use crate::constants::GO_MOD_FILE;
use crate::directory::DirectoryPlan;
use crate::error::{Error, Result};
use crate::files::{should_render, FileSpec, ProjectPlan};
use crate::gomod::ModuleTool;
use crate::imports::resolve;
use crate::renderer::TemplateRenderer;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Generates one project from a [`Config`].
pub struct Generator<'a> {
    config: &'a Config,
    renderer: &'a dyn TemplateRenderer,
    module_tool: &'a dyn ModuleTool,
}

impl<'a> Generator<'a> {
    pub fn new(
        config: &'a Config,
        renderer: &'a dyn TemplateRenderer,
        module_tool: &'a dyn ModuleTool,
    ) -> Self {
        Self { config, renderer, module_tool }
    }

    /// Runs the whole generation and returns the project directory.
    ///
    /// # Flow
    /// 1. Validates the configuration
    /// 2. Creates the directories of every requested entity
    /// 3. Renders or writes every planned file
    /// 4. Initializes the Go module, unless `go.mod` already exists
    /// 5. Tidies the module
    ///
    /// Steps 4 and 5 are skipped when `skip_go_mod` is set. Files written
    /// before a failure stay on disk.
    pub fn generate(&self) -> Result<PathBuf> {
        self.config.validate()?;
        let project_dir = self.config.project_dir();

        info!("Generating '{}' in {}", self.config.module_name, project_dir.display());

        self.plan_directories().create(&project_dir)?;
        self.generate_files(&project_dir)?;

        if self.config.skip_go_mod {
            info!("Skipping Go module initialization");
            return Ok(project_dir);
        }

        if project_dir.join(GO_MOD_FILE).exists() {
            warn!("{} already exists, skipping 'go mod init'", GO_MOD_FILE);
        } else {
            self.module_tool.init(&project_dir, &self.config.module_name)?;
        }
        self.module_tool.tidy(&project_dir)?;

        Ok(project_dir)
    }

    /// Directories for every requested entity, or the default layout when
    /// there are none, plus the auth tree when enabled.
    pub fn plan_directories(&self) -> DirectoryPlan {
        let mut plan = if self.config.is_monolith && !self.config.entities.is_empty() {
            let mut plan = DirectoryPlan::default();
            for entity in &self.config.entities {
                plan.merge(DirectoryPlan::for_entity(entity, true));
            }
            plan
        } else {
            DirectoryPlan::for_entity("", self.config.is_monolith)
        };

        if self.config.use_auth {
            plan.merge(DirectoryPlan::for_auth(self.config.is_monolith));
        }
        plan
    }

    fn generate_files(&self, project_dir: &Path) -> Result<()> {
        let plan = ProjectPlan::build(self.config);
        info!("Writing {} files", plan.len());

        for batch in &plan.batches {
            debug!("Generating files for entity '{}'", batch.entity);
            for file in &batch.files {
                self.write_file(project_dir, file, &batch.entity).map_err(|source| {
                    Error::FileGenerationError { path: file.path.clone(), source: Box::new(source) }
                })?;
            }
        }
        Ok(())
    }

    fn write_file(&self, project_dir: &Path, file: &FileSpec, entity: &str) -> Result<()> {
        let output = project_dir.join(&file.path);
        match &file.template {
            Some(template) if should_render(file, entity) => {
                let data = resolve(&file.package, entity, self.config);
                self.renderer.render_to_file(template, &output, &data)
            }
            _ => {
                debug!("Writing placeholder: {}", output.display());
                std::fs::write(&output, file.placeholder_content()).map_err(|source| {
                    Error::FileWriteError { path: output.display().to_string(), source }
                })
            }
        }
    }
}
