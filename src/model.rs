pub mod factory;

/// Semantic descriptor for a variable: its name and the name of its type.
/// Both come from the caller and are carried verbatim; uniqueness within the
/// enclosing scope is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDescriptor {
    name: String,
    type_name: String,
}

impl VariableDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// A variable declaration. Usable either as a standalone statement or as an
/// inline fragment, e.g. in a catch clause header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    variable: VariableDescriptor,
    is_final: bool,
    initializer: Option<Expression>,
}

impl VariableDeclaration {
    pub(crate) fn new(variable: VariableDescriptor, is_final: bool) -> Self {
        Self {
            variable,
            is_final,
            initializer: None,
        }
    }

    pub(crate) fn with_initializer(
        variable: VariableDescriptor,
        is_final: bool,
        initializer: Expression,
    ) -> Self {
        Self {
            variable,
            is_final,
            initializer: Some(initializer),
        }
    }

    pub fn variable(&self) -> &VariableDescriptor {
        &self.variable
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn initializer(&self) -> Option<&Expression> {
        self.initializer.as_ref()
    }

    /// Renders the declaration as a single inline fragment, without a
    /// trailing newline or semicolon. The initializer is not part of the
    /// inline form.
    pub fn inline_code(&self) -> String {
        if self.is_final {
            format!(
                "final {} {}",
                self.variable.type_name(),
                self.variable.name()
            )
        } else {
            format!("{} {}", self.variable.type_name(), self.variable.name())
        }
    }
}

/// An opaque expression. The text is not parsed or validated; it is emitted
/// verbatim, with the statement context supplying the trailing semicolon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    text: String,
}

impl Expression {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The closed set of statement variants. Rendering matches exhaustively on
/// this enum, so a new variant cannot compile until every renderer handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declaration(VariableDeclaration),
    Expression(Expression),
    Try(TryBlock),
}

/// Ordered sequence of statements. Insertion order is emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    statements: Vec<Statement>,
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Appends an opaque expression as a statement.
    pub fn add_expression(&mut self, text: impl Into<String>) {
        self.statements
            .push(Statement::Expression(Expression::new(text)));
    }

    pub fn add_declaration(&mut self, declaration: VariableDeclaration) {
        self.statements.push(Statement::Declaration(declaration));
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// The pieces unique to a catch clause: the caught variable and the handler
/// body, bundled so a try block can be configured in two phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryCatchDescriptor {
    variable: VariableDescriptor,
    block: CodeBlock,
}

impl TryCatchDescriptor {
    pub fn new(variable: VariableDescriptor, block: CodeBlock) -> Self {
        Self { variable, block }
    }

    pub fn variable(&self) -> &VariableDescriptor {
        &self.variable
    }

    pub fn block(&self) -> &CodeBlock {
        &self.block
    }
}

/// A try/catch construct. Both the protected block and the catch descriptor
/// are required at construction, so every `TryBlock` value is renderable.
/// Use [`TryBlockBuilder`] when the catch clause is only known later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryBlock {
    block: CodeBlock,
    catch: TryCatchDescriptor,
}

impl TryBlock {
    pub fn new(block: CodeBlock, catch: TryCatchDescriptor) -> Self {
        Self { block, catch }
    }

    pub fn block(&self) -> &CodeBlock {
        &self.block
    }

    pub fn catch_descriptor(&self) -> &TryCatchDescriptor {
        &self.catch
    }
}

/// Two-phase construction of a [`TryBlock`]: the protected block is fixed up
/// front, the catch descriptor attached later. Building without a descriptor
/// fails, so no half-configured try block can reach rendering.
#[derive(Debug, Clone)]
pub struct TryBlockBuilder {
    block: CodeBlock,
    catch: Option<TryCatchDescriptor>,
}

impl TryBlockBuilder {
    pub fn new(block: CodeBlock) -> Self {
        Self { block, catch: None }
    }

    /// Attaches the catch descriptor. Attaching twice keeps the last one.
    pub fn on_catch(mut self, descriptor: TryCatchDescriptor) -> Self {
        self.catch = Some(descriptor);
        self
    }

    pub fn build(self) -> crate::Result<TryBlock> {
        let catch = self
            .catch
            .ok_or(crate::CodescribeError::MissingCatchDescriptor)?;
        Ok(TryBlock::new(self.block, catch))
    }
}
