use clap::Parser;
use std::path::PathBuf;

/// Wraps statement lines in a try/catch scaffold and prints the generated
/// code. If no statement files are provided, stdin is read and the scaffold
/// is generated from the content.
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Arguments {
    /// Type of the caught exception in the generated catch clause.
    #[arg(short = 't', long, default_value = "Throwable")]
    pub(crate) exception_type: String,

    /// Name of the caught exception variable in the generated catch clause.
    #[arg(short = 'e', long, default_value = "t")]
    pub(crate) exception_var: String,

    /// Statement for the catch handler body. Can be given multiple times;
    /// statements are emitted in order. Defaults to printing the stack trace
    /// of the caught exception.
    #[arg(short = 'c', long = "handler")]
    pub(crate) handler: Vec<String>,

    /// Number of spaces per indent level.
    #[arg(long, default_value_t = 2)]
    pub(crate) indent_width: usize,

    /// Base indent level of the generated code, for embedding the scaffold in
    /// code that is already indented.
    #[arg(long, default_value_t = 0)]
    pub(crate) indent_level: usize,

    /// If set, the generated code is written to the specified file instead of
    /// stdout. The file is only rewritten when its content has changed. Input
    /// from stdin always generates output to stdout.
    #[arg(short = 'o', long, requires = "statement_files")]
    pub(crate) output_file: Option<PathBuf>,

    /// Forces writing the output file without checking if the content has
    /// changed.
    #[arg(short = 'w', long, requires = "output_file")]
    pub(crate) always_write: bool,

    /// Enables verbose output, printing debug information to stdout if
    /// writing the generated code to a file, otherwise to stderr.
    #[arg(short = 'v', long, group = "logging")]
    pub(crate) verbose: bool,

    /// Disables all log output, other than printing the reason for failure.
    #[arg(short = 's', long, group = "logging")]
    pub(crate) silent: bool,

    /// Paths to files with statements to wrap, one statement per line. If no
    /// files are provided, the program reads from stdin.
    #[arg(value_name = "STATEMENTS")]
    pub(crate) statement_files: Vec<PathBuf>,
}

pub(crate) fn arguments() -> Arguments {
    Arguments::parse()
}
