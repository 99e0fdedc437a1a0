//! Raw markdown generation through an external documentation generator.

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Renders a module's public API as markdown into a file.
pub trait DocGenerator {
    /// Writes the markdown for `module_path` to `out_file`.
    fn generate(&self, module_path: &str, out_file: &Path) -> Result<()>;
}

/// Runs a generator program as `<program> [args...] <module> -o <file>`.
#[derive(Debug)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandGenerator {
    /// Creates a new CommandGenerator instance.
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self { program: program.into(), args, working_dir: None }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    /// Runs the program from `dir`, so module paths resolve against it.
    pub fn working_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl DocGenerator for CommandGenerator {
    fn generate(&self, module_path: &str, out_file: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(module_path)
            .arg("-o")
            .arg(out_file)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!("Running {} for '{}'", self.program, module_path);

        let status = command.status().map_err(|e| Error::GeneratorError {
            module_path: module_path.to_string(),
            message: format!("failed to run '{}': {}", self.program, e),
        })?;

        if !status.success() {
            return Err(Error::GeneratorError {
                module_path: module_path.to_string(),
                message: format!("'{}' failed with status: {}", self.program, status),
            });
        }

        Ok(())
    }
}

/// Generates the markdown for `module_path` and reads it back.
///
/// Any existing `out_file` is removed first, so only output written by this
/// invocation is returned.
///
/// # Errors
/// * Whatever the generator reports
/// * `Error::MissingOutputError` if the generator succeeded without writing `out_file`
pub fn generate_raw_docs(
    generator: &dyn DocGenerator,
    module_path: &str,
    out_file: &Path,
) -> Result<String> {
    // A page left by an earlier run must not pass for fresh output.
    match fs::remove_file(out_file) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    generator.generate(module_path, out_file)?;

    if !out_file.exists() {
        return Err(Error::MissingOutputError { path: out_file.display().to_string() });
    }
    Ok(fs::read_to_string(out_file)?)
}
