use minipy::{
    error::ScopeError,
    interpreter::checker::{SymbolTable, check, check_all},
    parse_source,
};

fn check_src(src: &str) -> Result<(), ScopeError> {
    let program = parse_source(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    check(&program)
}

fn undeclared(src: &str) -> Vec<String> {
    let program = parse_source(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    check_all(&program).into_iter()
                       .map(|ScopeError::UndeclaredName { name, .. }| name)
                       .collect()
}

#[test]
fn declared_names_pass() {
    assert!(check_src("x = 1\ny = x + 1\nprint(x, y)\n").is_ok());
}

#[test]
fn builtins_are_predeclared() {
    assert!(check_src("print(print)\n").is_ok());
}

#[test]
fn read_before_assignment_is_rejected() {
    assert_eq!(check_src("y = x\nx = 1\n"),
               Err(ScopeError::UndeclaredName { name:   "x".to_string(),
                                                line:   1,
                                                column: 5, }));
}

#[test]
fn assignment_value_is_checked_before_the_name_is_declared() {
    assert_eq!(undeclared("x = x + 1\n"), ["x"]);
}

#[test]
fn parameters_are_visible_in_the_body_only() {
    assert!(check_src("def f(a):\n    return a\n").is_ok());
    assert_eq!(undeclared("def f(a):\n    b = a\nprint(a, b)\n"), ["a", "b"]);
}

#[test]
fn function_bodies_see_enclosing_names() {
    assert!(check_src("x = 1\ndef f():\n    return x\n").is_ok());
}

#[test]
fn function_name_is_visible_to_its_body() {
    assert!(check_src("def loop(n):\n    return loop\n").is_ok());
}

#[test]
fn if_and_while_bodies_share_the_enclosing_scope() {
    assert!(check_src("if 1:\n    x = 1\nprint(x)\n").is_ok());
    assert!(check_src("while 0:\n    y = 2\nprint(y)\n").is_ok());
}

#[test]
fn named_callees_may_be_defined_later() {
    let src = "def a():\n    return b()\ndef b():\n    return 1\nprint(a())\n";
    assert!(check_src(src).is_ok());
    assert!(check_src("later()\n").is_ok());
}

#[test]
fn call_arguments_are_checked() {
    assert_eq!(undeclared("print(missing)\n"), ["missing"]);
}

#[test]
fn every_undeclared_read_is_collected_in_source_order() {
    assert_eq!(undeclared("print(a)\nif b:\n    print(c)\n"), ["a", "b", "c"]);
}

#[test]
fn symbol_table_never_closes_the_program_scope() {
    let mut table = SymbolTable::new();
    assert_eq!(table.depth(), 1);

    table.enter();
    table.enter();
    table.insert("inner");
    assert_eq!(table.depth(), 3);

    table.exit();
    assert_eq!(table.depth(), 2);
    assert!(!table.lookup("inner"));

    table.exit();
    table.exit();
    assert_eq!(table.depth(), 1);
    assert!(table.lookup("print"));
}
