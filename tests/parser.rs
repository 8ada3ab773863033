use minipy::{
    ast::{BinaryOperator, Expr, Number, Position, Stmt},
    error::{Error, ParseError},
    interpreter::{
        parser::core::{MAX_EXPRESSION_DEPTH, MAX_NESTING_DEPTH, parse as parse_tokens},
        tokenizer::tokenize_all,
    },
    parse_source,
};

fn parse(src: &str) -> Vec<Stmt> {
    parse_source(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
                     .body
}

fn parse_error(src: &str) -> ParseError {
    match parse_source(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

fn expression(src: &str) -> Expr {
    match parse(src).into_iter().next() {
        Some(Stmt::Expression(expr)) => expr,
        other => panic!("Expected an expression statement, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let Expr::BinaryOp { op, right, .. } = expression("2 + 3 * 4\n") else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(*right,
                     Expr::BinaryOp { op: BinaryOperator::Mul,
                                      .. }));
}

#[test]
fn subtraction_is_left_associative() {
    let Expr::BinaryOp { left, op, .. } = expression("1 - 2 - 3\n") else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(*left,
                     Expr::BinaryOp { op: BinaryOperator::Sub,
                                      .. }));
}

#[test]
fn comparison_binds_loosest() {
    let Expr::BinaryOp { op, .. } = expression("a + 1 < b * 2\n") else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Less);
}

#[test]
fn binary_node_takes_left_operand_position() {
    let expr = expression("(1 + 2) * 3\n");
    assert_eq!(expr.pos(), Position::new(1, 2));
}

#[test]
fn numbers_become_int_or_float() {
    assert!(matches!(expression("42\n"),
                     Expr::Number { value: Number::Int(42),
                                    .. }));
    assert!(matches!(expression("4.\n"),
                     Expr::Number { value: Number::Float(_),
                                    .. }));
    assert!(matches!(expression("1e2\n"),
                     Expr::Number { value: Number::Float(_),
                                    .. }));
}

#[test]
fn name_followed_by_paren_is_a_call() {
    let Expr::Call { callee, arguments, .. } = expression("f(1, g(2), x)\n") else {
        panic!("expected a call");
    };
    assert!(matches!(*callee, Expr::Identifier { ref name, .. } if name == "f"));
    assert_eq!(arguments.len(), 3);
    assert!(matches!(arguments[1], Expr::Call { .. }));
}

#[test]
fn assignment_is_chosen_by_lookahead() {
    assert!(matches!(&parse("x = 1\n")[0], Stmt::Assignment { name, .. } if name == "x"));
    assert!(matches!(&parse("x == 1\n")[0], Stmt::Expression(_)));
}

#[test]
fn if_with_elifs_and_else() {
    let src = "if a:\n    x = 1\nelif b:\n    x = 2\nelif c:\n    x = 3\nelse:\n    x = 4\n";
    let body = parse(src);
    let Stmt::If { elifs,
                   else_body,
                   pos,
                   .. } = &body[0]
    else {
        panic!("expected an if statement");
    };
    assert_eq!(elifs.len(), 2);
    assert!(matches!(&elifs[1].condition, Expr::Identifier { name, .. } if name == "c"));
    assert_eq!(else_body.as_ref().map(Vec::len), Some(1));
    assert_eq!(*pos, Position::new(1, 1));
}

#[test]
fn function_definition_with_parameters() {
    let body = parse("def add(a, b):\n    c = a + b\n    return c\n\ndef nothing():\n    return\n");
    let Stmt::FunctionDef(add) = &body[0] else {
        panic!("expected a function definition");
    };
    assert_eq!(add.name, "add");
    assert_eq!(add.params, ["a", "b"]);
    assert_eq!(add.body.len(), 2);

    let Stmt::FunctionDef(nothing) = &body[1] else {
        panic!("expected a function definition");
    };
    assert!(nothing.params.is_empty());
    assert!(matches!(nothing.body[0], Stmt::Return { value: None, .. }));
}

#[test]
fn nested_blocks() {
    let src = "while a:\n    if b:\n        c = 1\n    d = 2\ne = 3\n";
    let body = parse(src);
    assert_eq!(body.len(), 2);
    let Stmt::While { body: loop_body, .. } = &body[0] else {
        panic!("expected a while loop");
    };
    assert_eq!(loop_body.len(), 2);
}

#[test]
fn parsing_is_deterministic() {
    let src = "def f(x):\n    return x * 2\ny = f(3) + 1\nprint(y)\n";
    assert_eq!(parse(src), parse(src));
}

#[test]
fn missing_colon_is_reported_with_position() {
    let error = parse_error("while x\n    y = 1\n");
    assert!(matches!(error,
                     ParseError::UnexpectedToken { ref expected,
                                                   line: 1,
                                                   column: 8,
                                                   .. } if expected == "':'"));
}

#[test]
fn block_requires_indentation() {
    assert!(matches!(parse_error("if x:\ny = 1\n"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn simple_statement_requires_end_of_line() {
    let error = parse_error("x = 1 2\n");
    assert_eq!(error.to_string(), "Error on line 1: Expected end of line, found number 2.");
}

#[test]
fn unclosed_call_is_reported() {
    assert!(parse_source("f(1, 2\n").is_err());
}

#[test]
fn integer_literal_too_large() {
    assert!(matches!(parse_error("x = 99999999999999999999\n"),
                     ParseError::LiteralTooLarge { line: 1,
                                                   column: 5,
                                                   .. }));
}

#[test]
fn stray_operator_is_rejected() {
    assert!(matches!(parse_error("x = * 2\n"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("= 2\n"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn deeply_nested_parentheses_are_rejected() {
    let src = format!("x = {}1{}\n", "(".repeat(3000), ")".repeat(3000));
    assert_eq!(parse_error(&src),
               ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                            line:   1,
                                            column: 5 + MAX_NESTING_DEPTH, });
}

#[test]
fn parentheses_up_to_the_limit_are_accepted() {
    let depth = MAX_NESTING_DEPTH;
    let src = format!("x = {}1{}\n", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(parse(&src).as_slice(), [Stmt::Assignment { .. }]));
}

#[test]
fn long_operator_chain_is_rejected() {
    let src = format!("x = {}\n", vec!["1"; 20000].join(" + "));
    assert!(matches!(parse_error(&src),
                     ParseError::NestingTooDeep { limit: MAX_EXPRESSION_DEPTH,
                                                  line: 1,
                                                  .. }));
}

#[test]
fn operator_chain_below_the_limit_is_accepted() {
    let src = format!("x = {}\n", vec!["1"; 150].join(" * "));
    let body = parse(&src);
    let [Stmt::Assignment { value, .. }] = body.as_slice() else {
        panic!("expected one assignment");
    };
    assert_eq!(value.depth(), 150);
}

#[test]
fn deeply_nested_blocks_are_rejected() {
    let mut src = String::new();
    for level in 0..=MAX_NESTING_DEPTH {
        src.push_str(&format!("{}if 1:\n", "    ".repeat(level)));
    }
    src.push_str(&format!("{}x = 1\n", "    ".repeat(MAX_NESTING_DEPTH + 1)));
    assert!(matches!(parse_error(&src),
                     ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                  .. }));
}

#[test]
fn stream_without_eof_reports_its_last_token() {
    let mut tokens = tokenize_all("x = 1\ny = 2\n").unwrap();
    tokens.pop();
    let last = tokens.last().unwrap().pos;

    let error = parse_tokens(&tokens).unwrap_err();
    assert_eq!(error,
               ParseError::UnexpectedEndOfInput { expected: "end of input".to_string(),
                                                  line:     last.line,
                                                  column:   last.column, });
    assert!(error.line() >= 2);
    assert!(error.to_string().starts_with(&format!("Error on line {}:", last.line)));
}

#[test]
fn empty_token_stream_is_reported_at_the_start() {
    let error = parse_tokens(&[]).unwrap_err();
    assert_eq!((error.line(), error.column()), (1, 1));
}
