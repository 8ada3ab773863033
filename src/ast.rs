/// A 1-based source location.
///
/// Every token and every AST node carries one so that later phases (and any
/// external backend consuming the tree) can map failures back to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Source line, starting at 1.
    pub line:   usize,
    /// Column in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A numeric literal as decided by the parser.
///
/// The lexer keeps the literal text; literals containing a decimal point or an
/// exponent become `Float`, everything else becomes `Int`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Stmt>,
}

/// An expression node.
///
/// Expressions produce values. Each variant stores the position of its
/// leftmost token.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `2.5`.
    Number {
        /// The literal value.
        value: Number,
        /// Source position.
        pos:   Position,
    },
    /// A string literal with its escapes already decoded.
    Str {
        /// The decoded text.
        value: String,
        /// Source position.
        pos:   Position,
    },
    /// A read of a name.
    Identifier {
        /// Name being read.
        name: String,
        /// Source position.
        pos:  Position,
    },
    /// A binary operation. Its position is the position of `left`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Source position.
        pos:   Position,
    },
    /// A call such as `add(1, 2)`.
    Call {
        /// The expression producing the function. The parser only ever
        /// produces an `Identifier` here.
        callee:    Box<Self>,
        /// Arguments in source order.
        arguments: Vec<Self>,
        /// Source position.
        pos:       Position,
    },
}

impl Expr {
    /// Gets the source position of the expression.
    /// ## Example
    /// ```
    /// use minipy::ast::{Expr, Position};
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               pos:  Position::new(5, 3), };
    ///
    /// assert_eq!(expr.pos().line, 5);
    /// ```
    #[must_use]
    pub const fn pos(&self) -> Position {
        match self {
            Self::Number { pos, .. }
            | Self::Str { pos, .. }
            | Self::Identifier { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::Call { pos, .. } => *pos,
        }
    }

    /// Number of levels in the expression tree; a leaf has depth 1.
    ///
    /// Walks the tree with an explicit worklist, so arbitrarily deep trees
    /// are measured without recursion.
    ///
    /// ## Example
    /// ```
    /// use minipy::ast::{BinaryOperator, Expr, Position};
    ///
    /// let leaf = |name: &str| Expr::Identifier { name: name.to_string(),
    ///                                            pos:  Position::new(1, 1), };
    /// let sum = Expr::BinaryOp { left:  Box::new(leaf("a")),
    ///                            op:    BinaryOperator::Add,
    ///                            right: Box::new(leaf("b")),
    ///                            pos:   Position::new(1, 1), };
    ///
    /// assert_eq!(leaf("a").depth(), 1);
    /// assert_eq!(sum.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((expr, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            match expr {
                Self::BinaryOp { left, right, .. } => {
                    pending.push((left.as_ref(), depth + 1));
                    pending.push((right.as_ref(), depth + 1));
                },
                Self::Call { callee, arguments, .. } => {
                    pending.push((callee.as_ref(), depth + 1));
                    pending.extend(arguments.iter().map(|argument| (argument, depth + 1)));
                },
                Self::Number { .. } | Self::Str { .. } | Self::Identifier { .. } => {},
            }
        }
        deepest
    }
}

/// A function definition: `def name(params): body`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name the function is bound to.
    pub name:   String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// Statements of the function body.
    pub body:   Vec<Stmt>,
    /// Position of the `def` keyword.
    pub pos:    Position,
}

/// A single `elif` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ElifClause {
    /// The clause condition.
    pub condition: Expr,
    /// Statements executed when the condition holds.
    pub body:      Vec<Stmt>,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `name = value`
    Assignment {
        /// Target name.
        name:  String,
        /// Assigned expression.
        value: Expr,
        /// Position of the target name.
        pos:   Position,
    },
    /// `if` with any number of `elif` clauses and an optional `else`.
    If {
        /// The first condition.
        condition: Expr,
        /// Statements executed when `condition` holds.
        then_body: Vec<Stmt>,
        /// `elif` clauses in declaration order.
        elifs:     Vec<ElifClause>,
        /// Statements of the `else` clause, if present.
        else_body: Option<Vec<Stmt>>,
        /// Position of the `if` keyword.
        pos:       Position,
    },
    /// `while condition: body`
    While {
        /// Loop condition, evaluated before every iteration.
        condition: Expr,
        /// Loop body.
        body:      Vec<Stmt>,
        /// Position of the `while` keyword.
        pos:       Position,
    },
    /// A function definition.
    FunctionDef(FunctionDef),
    /// `return` with an optional value.
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Position of the `return` keyword.
        pos:   Position,
    },
    /// An expression evaluated for its effect, usually a call.
    Expression(Expr),
}

impl Stmt {
    /// Gets the source position of the statement.
    #[must_use]
    pub const fn pos(&self) -> Position {
        match self {
            Self::Assignment { pos, .. }
            | Self::If { pos, .. }
            | Self::While { pos, .. }
            | Self::FunctionDef(FunctionDef { pos, .. })
            | Self::Return { pos, .. } => *pos,
            Self::Expression(expr) => expr.pos(),
        }
    }
}

/// Represents a binary operator.
///
/// The set is closed: arithmetic and comparisons only.
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
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
