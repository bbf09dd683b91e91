//! Go module tooling run after the files are generated.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Initializes and tidies the module of a generated project.
pub trait ModuleTool {
    /// Creates the module descriptor for `module_name` in `project_dir`.
    fn init(&self, project_dir: &Path, module_name: &str) -> Result<()>;

    /// Resolves the dependencies of the generated code.
    fn tidy(&self, project_dir: &Path) -> Result<()>;
}

/// Runs `go mod init` and `go mod tidy`.
#[derive(Debug, Clone)]
pub struct GoModTool {
    program: String,
}

impl GoModTool {
    pub fn new() -> Self {
        Self::with_program("go")
    }

    /// Uses `program` instead of the `go` binary found on `PATH`.
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, project_dir: &Path, args: &[&str]) -> Result<()> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!("Running '{}' in {}", command, project_dir.display());

        let child = Command::new(&self.program)
            .args(args)
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::CommandError { command: command.clone(), stderr: e.to_string() })?;

        let output = child.wait_with_output().map_err(Error::IoError)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() { output.status.to_string() } else { stderr };
            return Err(Error::CommandError { command, stderr });
        }

        Ok(())
    }
}

impl Default for GoModTool {
    fn default() -> Self {
        GoModTool::new()
    }
}

impl ModuleTool for GoModTool {
    fn init(&self, project_dir: &Path, module_name: &str) -> Result<()> {
        self.run(project_dir, &["mod", "init", module_name])
    }

    fn tidy(&self, project_dir: &Path) -> Result<()> {
        self.run(project_dir, &["mod", "tidy"])
    }
}
