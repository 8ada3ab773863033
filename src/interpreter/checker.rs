use std::collections::HashSet;

use crate::{
    ast::{Expr, FunctionDef, Program, Stmt},
    error::ScopeError,
    interpreter::evaluator::function::core::BUILTIN_FUNCTIONS,
};

/// A stack of lexical scopes holding declared names only.
///
/// The outermost scope belongs to the program and starts with every builtin
/// declared. Each function body pushes one scope; `if` and `while` bodies
/// share the scope they appear in.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<HashSet<String>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table with one scope containing the builtin names.
    #[must_use]
    pub fn new() -> Self {
        let globals = BUILTIN_FUNCTIONS.iter().map(ToString::to_string).collect();
        Self { scopes: vec![globals] }
    }

    /// Opens a new innermost scope.
    pub fn enter(&mut self) {
        self.scopes.push(HashSet::new());
    }

    /// Closes the innermost scope. The program scope is never removed.
    pub fn exit(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declares `name` in the innermost scope.
    pub fn insert(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string());
        }
    }

    /// Returns `true` if `name` is declared in any enclosing scope.
    ///
    /// # Example
    /// ```
    /// use minipy::interpreter::checker::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.insert("x");
    /// table.enter();
    /// table.insert("y");
    ///
    /// assert!(table.lookup("x"));
    /// assert!(table.lookup("print"));
    ///
    /// table.exit();
    /// assert!(!table.lookup("y"));
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains(name))
    }

    /// Number of open scopes, the program scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

/// Walks a program and records reads of undeclared names.
///
/// The checker mirrors the interpreter's scoping without evaluating anything.
/// Analysis is flow-insensitive: a name assigned anywhere earlier in an
/// enclosing scope counts as declared, including inside an `if` branch that
/// may not run.
#[derive(Debug, Default)]
pub struct ScopeChecker {
    symbols: SymbolTable,
    errors:  Vec<ScopeError>,
}

impl ScopeChecker {
    /// Creates a checker with only the builtins declared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a whole program and returns every undeclared read in source
    /// order.
    #[must_use]
    pub fn analyze(mut self, program: &Program) -> Vec<ScopeError> {
        self.check_block(&program.body);
        self.errors
    }

    fn check_block(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.check_statement(statement);
        }
    }

    fn check_statement(&mut self, statement: &Stmt) {
        match statement {
            Stmt::Assignment { name, value, .. } => {
                self.check_expr(value);
                self.symbols.insert(name);
            },
            Stmt::If { condition,
                       then_body,
                       elifs,
                       else_body,
                       .. } => {
                self.check_expr(condition);
                self.check_block(then_body);
                for clause in elifs {
                    self.check_expr(&clause.condition);
                    self.check_block(&clause.body);
                }
                if let Some(body) = else_body {
                    self.check_block(body);
                }
            },
            Stmt::While { condition, body, .. } => {
                self.check_expr(condition);
                self.check_block(body);
            },
            Stmt::FunctionDef(def) => self.check_function(def),
            Stmt::Return { value, .. } => {
                if let Some(value) = value {
                    self.check_expr(value);
                }
            },
            Stmt::Expression(expr) => self.check_expr(expr),
        }
    }

    fn check_function(&mut self, def: &FunctionDef) {
        self.symbols.insert(&def.name);
        self.symbols.enter();
        for param in &def.params {
            self.symbols.insert(param);
        }
        self.check_block(&def.body);
        self.symbols.exit();
    }

    fn check_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Number { .. } | Expr::Str { .. } => {},
            Expr::Identifier { name, pos } => {
                if !self.symbols.lookup(name) {
                    self.errors.push(ScopeError::UndeclaredName { name:   name.clone(),
                                                                  line:   pos.line,
                                                                  column: pos.column, });
                }
            },
            Expr::BinaryOp { left, right, .. } => {
                self.check_expr(left);
                self.check_expr(right);
            },
            Expr::Call { callee, arguments, .. } => {
                // Named callees may refer to functions defined later.
                if !matches!(**callee, Expr::Identifier { .. }) {
                    self.check_expr(callee);
                }
                for argument in arguments {
                    self.check_expr(argument);
                }
            },
        }
    }
}

/// Checks that every identifier read in `program` is declared.
///
/// # Errors
/// Returns the first [`ScopeError::UndeclaredName`] in source order.
///
/// # Example
/// ```
/// use minipy::{interpreter::checker::check, parse_source};
///
/// let ok = parse_source("x = 1\nprint(x)\n").unwrap();
/// assert!(check(&ok).is_ok());
///
/// let bad = parse_source("print(y)\n").unwrap();
/// assert!(check(&bad).is_err());
/// ```
pub fn check(program: &Program) -> Result<(), ScopeError> {
    match ScopeChecker::new().analyze(program).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Checks `program` and returns every undeclared read instead of only the
/// first.
#[must_use]
pub fn check_all(program: &Program) -> Vec<ScopeError> {
    ScopeChecker::new().analyze(program)
}
