use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions always produce a value when evaluated. Every node owns its
/// children, so a tree is acyclic and never shares subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix sign applied to an operand (`-x`, `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

/// Represents a user-defined function definition.
///
/// The body is exactly one statement, evaluated each time the function is
/// called with the parameters bound to the call's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body statement evaluated when the function is called.
    pub body:   Box<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
///
/// Statements are the top-level units produced by the parser; a function
/// body is also a single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A function definition: `def name(params) = { statement }`.
    Definition(FunctionDef),
    /// A variable assignment binding a name to the value of an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number of the statement's first token.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Definition(FunctionDef { line, .. })
            | Self::Assignment { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Identity (e.g. `+x`).
    Plus,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Plus => write!(f, "+"),
        }
    }
}

/// Expressions print fully parenthesized so grouping is explicit.
///
/// ```
/// use reckon::ast::{BinaryOperator, Expr};
///
/// let two = || Box::new(Expr::Number { value: 2, line: 1 });
/// let expr = Expr::BinaryOp { left:  two(),
///                             op:    BinaryOperator::Pow,
///                             right: two(),
///                             line:  1, };
///
/// assert_eq!(expr.to_string(), "(2 ** 2)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition(FunctionDef { name, params, body, .. }) => {
                write!(f, "def {name}({}) = {{ {body} }}", params.join(", "))
            },
            Self::Assignment { name, value, .. } => write!(f, "{name} = {value}"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}
