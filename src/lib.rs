mod idents;
mod log;
pub mod model;
pub mod render;
mod scaffold;
pub mod writer;

pub use model::factory::StatementFactory;
pub use model::{
    CodeBlock, Expression, Statement, TryBlock, TryBlockBuilder, TryCatchDescriptor,
    VariableDeclaration, VariableDescriptor,
};
pub use render::ToCode;
pub use writer::CodeWriter;

use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum CodescribeError {
    /// A try block was built without a catch descriptor ever being attached.
    /// This is a bug in the code assembling the tree, not a runtime
    /// condition; retrying without changing the tree cannot succeed.
    #[error("Try block has no catch descriptor attached")]
    MissingCatchDescriptor,
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("Invalid type name: {0}")]
    InvalidTypeName(String),
    #[error("Failed to read statement file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output file {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CodescribeError>;

/// Codescribe wraps statement lines in a try/catch scaffold and renders the
/// result as indented source text. The underlying DSL is available through
/// the [`model`] and [`render`] modules for callers that build trees
/// themselves.
pub struct Codescribe {
    log: Option<log::Logger>,
    indent_width: usize,
    indent_level: usize,
    exception_type: String,
    exception_var: String,
    handler: Vec<String>,
    always_write: bool,
}

impl Codescribe {
    pub fn new() -> Self {
        Self {
            log: None,
            indent_width: 2,
            indent_level: 0,
            exception_type: "Throwable".to_string(),
            exception_var: "t".to_string(),
            handler: Vec::new(),
            always_write: false,
        }
    }

    /// Enables logging to the given sink. With `verbose` set, progress
    /// details are logged in addition to file write notices.
    pub fn log_to(mut self, write: Box<dyn Write>, verbose: bool) -> Self {
        self.log = Some(log::Logger::new(write, verbose));
        self
    }

    /// Number of spaces per indent level. Defaults to 2.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Base indent level of the rendered scaffold. Defaults to 0.
    pub fn indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// Type of the caught exception. Defaults to `Throwable`.
    pub fn exception_type(mut self, type_name: &str) -> Self {
        self.exception_type = type_name.to_string();
        self
    }

    /// Name of the caught exception variable. Defaults to `t`.
    pub fn exception_var(mut self, name: &str) -> Self {
        self.exception_var = name.to_string();
        self
    }

    /// Statements for the catch handler body. When empty, the handler prints
    /// the stack trace of the caught exception.
    pub fn handler_statements(mut self, statements: &[String]) -> Self {
        self.handler = statements.to_vec();
        self
    }

    /// Forces writing output files without checking whether the content has
    /// changed.
    pub fn always_write(mut self, always: bool) -> Self {
        self.always_write = always;
        self
    }

    /// Wraps each non-empty line of `content` in a try/catch scaffold and
    /// renders it with the configured indentation.
    pub fn scaffold_from_string(&self, content: &str) -> Result<String> {
        let statements = scaffold::statements_from_lines(content);
        crate::verbose!(
            self.log,
            "Wrapping {} statement(s) in a try/catch scaffold",
            statements.len()
        );
        let try_block = scaffold::wrap_in_try(
            statements,
            &self.exception_type,
            &self.exception_var,
            &self.handler,
        )?;
        let mut writer =
            CodeWriter::with_level(" ".repeat(self.indent_width), self.indent_level);
        try_block.emit(&mut writer);
        Ok(writer.build())
    }

    /// Reads statement lines from a file and scaffolds its content.
    pub fn scaffold_file(&self, path: &Path) -> Result<String> {
        crate::verbose!(self.log, "Reading statements from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| {
            CodescribeError::ReadError {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.scaffold_from_string(&content)
    }

    /// Writes rendered code to a file. The write is skipped when the file
    /// already has exactly this content, unless `always_write` is set.
    pub fn write_output_file(&self, path: &Path, code: &str) -> Result<()> {
        if !self.always_write
            && std::fs::read_to_string(path).is_ok_and(|existing| existing == code)
        {
            crate::info!(self.log, "Skipped writing unchanged file {}", path.display());
            return Ok(());
        }
        std::fs::write(path, code).map_err(|source| CodescribeError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
        crate::info!(self.log, "Wrote {}", path.display());
        Ok(())
    }
}

impl Default for Codescribe {
    fn default() -> Self {
        Self::new()
    }
}
