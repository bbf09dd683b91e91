//! Template rendering for gogen.
//! Renders templates from a [`TemplateStore`] with MiniJinja and writes the
//! result to the planned output file.

use crate::error::{Error, Result};
use crate::imports::TemplateData;
use crate::naming;
use crate::templates::{normalize_template_id, EmbeddedTemplates, TemplateStore};
use log::debug;
use minijinja::{Environment, UndefinedBehavior};
use std::path::Path;
use std::sync::Arc;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template `template` with `data`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the store has no such template
    /// * `Error::TemplateParseError` if the template text is malformed
    /// * `Error::TemplateRenderError` if substitution fails
    fn render(&self, template: &str, data: &TemplateData) -> Result<String>;

    /// Renders `template` and writes the result to `output`.
    ///
    /// Nothing is written unless rendering succeeds. An existing file is
    /// replaced.
    fn render_to_file(&self, template: &str, output: &Path, data: &TemplateData) -> Result<()> {
        let content = self.render(template, data)?;
        debug!("Writing rendered '{}' to {}", template, output.display());
        std::fs::write(output, content).map_err(|source| Error::FileWriteError {
            path: output.display().to_string(),
            source,
        })
    }
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment, loading templates lazily from the store
    env: Environment<'static>,
    store: Arc<dyn TemplateStore>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer over the templates compiled into the binary.
    pub fn new() -> Self {
        Self::with_store(EmbeddedTemplates)
    }

    /// Creates a renderer over a custom template store.
    pub fn with_store<S: TemplateStore + 'static>(store: S) -> Self {
        let store: Arc<dyn TemplateStore> = Arc::new(store);

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_helpers(&mut env);

        let loader_store = Arc::clone(&store);
        env.set_loader(move |name| Ok(loader_store.get(&normalize_template_id(name))));

        Self { env, store }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

/// Case helpers available as filters in every template.
fn register_helpers(env: &mut Environment<'static>) {
    env.add_filter("to_lower", |s: String| s.to_lowercase());
    env.add_filter("to_upper", |s: String| s.to_uppercase());
    env.add_filter("to_camel_case", |s: String| naming::to_camel_case(&s));
    env.add_filter("to_pascal_case", |s: String| naming::to_pascal_case(&s));
    // legacy first-character helpers
    env.add_filter("lower_first", |s: String| naming::lower_first(&s));
    env.add_filter("upper_first", |s: String| naming::upper_first(&s));
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, data: &TemplateData) -> Result<String> {
        let template = normalize_template_id(template);
        if !self.store.contains(&template) {
            return Err(Error::TemplateNotFound { template });
        }

        let tmpl = self
            .env
            .get_template(&template)
            .map_err(|source| Error::TemplateParseError { template: template.clone(), source })?;

        tmpl.render(data).map_err(|source| Error::TemplateRenderError { template, source })
    }
}
