use anyhow::Context;
use std::io::Read;

mod args;

use codescribe::Codescribe;

fn main() -> anyhow::Result<()> {
    let arguments = args::arguments();

    let mut codescribe = Codescribe::new()
        .indent_width(arguments.indent_width)
        .indent_level(arguments.indent_level)
        .exception_type(&arguments.exception_type)
        .exception_var(&arguments.exception_var)
        .handler_statements(&arguments.handler)
        .always_write(arguments.always_write);
    if !arguments.silent {
        // Log to stdout when the generated code goes to a file, otherwise
        // keep stdout clean for the code itself
        let write: Box<dyn std::io::Write> = if arguments.output_file.is_some() {
            Box::new(std::io::stdout())
        } else {
            Box::new(std::io::stderr())
        };
        codescribe = codescribe.log_to(write, arguments.verbose);
    }

    if arguments.statement_files.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        print!(
            "{}",
            codescribe
                .scaffold_from_string(&content)
                .context("Could not generate scaffold")?
        );
    } else {
        let mut code = String::new();
        for file in &arguments.statement_files {
            code.push_str(&codescribe.scaffold_file(file).with_context(|| {
                format!("Could not generate scaffold from file {}", file.display())
            })?);
        }
        match &arguments.output_file {
            Some(output_file) => codescribe
                .write_output_file(output_file, &code)
                .context("Could not write generated code")?,
            None => print!("{}", code),
        }
    }

    Ok(())
}
