use crate::idents;
use crate::model::factory::StatementFactory;
use crate::model::{CodeBlock, Statement, TryBlock, TryCatchDescriptor, VariableDescriptor};

/// Turns raw text into expression statements, one per non-empty line. Lines
/// are not parsed; each becomes an opaque expression. A trailing semicolon is
/// stripped since rendering adds it back.
pub(crate) fn statements_from_lines(content: &str) -> Vec<Statement> {
    content
        .lines()
        .map(expression_text)
        .filter(|line| !line.is_empty())
        .map(StatementFactory::expression_statement)
        .collect()
}

/// Wraps statements in a try block with a catch clause for the given
/// exception variable and type. An empty handler list falls back to printing
/// the stack trace of the caught exception.
pub(crate) fn wrap_in_try(
    statements: Vec<Statement>,
    exception_type: &str,
    exception_var: &str,
    handler: &[String],
) -> crate::Result<TryBlock> {
    idents::validate_variable_name(exception_var)?;
    idents::validate_type_name(exception_type)?;

    let mut protected = CodeBlock::new();
    for statement in statements {
        protected.add_statement(statement);
    }

    let mut handler_block = CodeBlock::new();
    if handler.is_empty() {
        handler_block.add_expression(format!("{exception_var}.printStackTrace()"));
    } else {
        handler
            .iter()
            .map(|line| expression_text(line))
            .filter(|line| !line.is_empty())
            .for_each(|line| handler_block.add_expression(line));
    }

    StatementFactory::try_block(protected)
        .on_catch(TryCatchDescriptor::new(
            VariableDescriptor::new(exception_var, exception_type),
            handler_block,
        ))
        .build()
}

fn expression_text(line: &str) -> &str {
    let line = line.trim();
    line.strip_suffix(';').unwrap_or(line).trim_end()
}
