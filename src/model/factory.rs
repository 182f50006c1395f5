use super::{
    CodeBlock, Expression, Statement, TryBlockBuilder, VariableDeclaration, VariableDescriptor,
};

/// Factory for creating primitive statement nodes. This is the single
/// construction point for the node shapes tied to the target syntax; the
/// rest of the model stays syntax-agnostic.
///
/// All constructors are pure and never fail. The factory does not interpret
/// names or types; see `idents` for the validation used by the CLI surface.
pub struct StatementFactory;

impl StatementFactory {
    /// Creates a variable declaration from a semantic descriptor and a
    /// finality flag.
    pub fn declaration(variable: VariableDescriptor, is_final: bool) -> VariableDeclaration {
        VariableDeclaration::new(variable, is_final)
    }

    /// Creates a variable declaration with an initializer expression.
    pub fn declaration_with_init(
        variable: VariableDescriptor,
        is_final: bool,
        initializer: Expression,
    ) -> VariableDeclaration {
        VariableDeclaration::with_initializer(variable, is_final, initializer)
    }

    /// Creates an opaque expression from its text.
    pub fn expression(text: impl Into<String>) -> Expression {
        Expression::new(text)
    }

    /// Creates an expression usable directly as a statement.
    pub fn expression_statement(text: impl Into<String>) -> Statement {
        Statement::Expression(Expression::new(text))
    }

    /// Starts building a try block around the given protected block.
    pub fn try_block(block: CodeBlock) -> TryBlockBuilder {
        TryBlockBuilder::new(block)
    }
}
