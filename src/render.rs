use crate::model::{CodeBlock, Statement, TryBlock, VariableDeclaration};
use crate::model::factory::StatementFactory;
use crate::writer::{CodeWriter, DEFAULT_INDENT_UNIT};

/// Contract implemented by every renderable node. Rendering is a pure
/// function of the node and the indent: no hidden state, byte-identical
/// output on every call.
pub trait ToCode {
    /// Renders the node into the writer at its current indent level,
    /// recursing into children one level deeper.
    fn emit(&self, writer: &mut CodeWriter);

    /// Renders the node to a string at the given indent level, using the
    /// default indent unit.
    fn to_code(&self, indent: usize) -> String {
        let mut writer = CodeWriter::with_level(DEFAULT_INDENT_UNIT, indent);
        self.emit(&mut writer);
        writer.build()
    }
}

impl ToCode for Statement {
    fn emit(&self, writer: &mut CodeWriter) {
        match self {
            Statement::Declaration(declaration) => declaration.emit(writer),
            Statement::Expression(expression) => {
                writer.line(&format!("{};", expression.text()));
            }
            Statement::Try(try_block) => try_block.emit(writer),
        }
    }
}

impl ToCode for VariableDeclaration {
    fn emit(&self, writer: &mut CodeWriter) {
        match self.initializer() {
            Some(initializer) => {
                writer.line(&format!("{} = {};", self.inline_code(), initializer.text()));
            }
            None => writer.line(&format!("{};", self.inline_code())),
        }
    }
}

impl ToCode for CodeBlock {
    fn emit(&self, writer: &mut CodeWriter) {
        for statement in self.statements() {
            statement.emit(writer);
        }
    }
}

impl ToCode for TryBlock {
    fn emit(&self, writer: &mut CodeWriter) {
        writer.line("try {");
        writer.push_indent();
        self.block().emit(writer);
        writer.pop_indent();
        // The caught variable is always declared final; it is never
        // reassigned in this construct.
        let caught =
            StatementFactory::declaration(self.catch_descriptor().variable().clone(), true);
        writer.line(&format!("}} catch({}) {{", caught.inline_code()));
        writer.push_indent();
        self.catch_descriptor().block().emit(writer);
        writer.pop_indent();
        writer.line("}");
    }
}
