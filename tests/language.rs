use std::fs::{self};

use minipy::{error::Error, run_source};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "mpy"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        let mut out = Vec::new();
        let result = run_source(&source, &mut out);

        if let Ok(expected) = fs::read_to_string(path.with_extension("out")) {
            if let Err(e) = result {
                panic!("Demo {path:?} failed:\n{source}\nError: {e:?}");
            }
            assert_eq!(String::from_utf8(out).unwrap(), expected, "output of {path:?}");
        } else {
            let kind = fs::read_to_string(path.with_extension("err"))
                .unwrap_or_else(|e| panic!("{path:?} has neither .out nor .err: {e}"));
            match result {
                Ok(()) => panic!("Demo {path:?} succeeded but was expected to fail"),
                Err(e) => assert!(format!("{e:?}").contains(kind.trim()),
                                  "{path:?} failed with {e:?}, expected {}",
                                  kind.trim()),
            }
        }
    }

    assert!(count > 0, "No demo programs found in demos");
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run_source(src, &mut out) {
        panic!("Script failed: {e}\n{src}");
    }
    String::from_utf8(out).unwrap()
}

fn failure_of(src: &str) -> Error {
    let mut out = Vec::new();
    match run_source(src, &mut out) {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

#[test]
fn write_inside_if_is_visible_after_the_block() {
    let src = "x = 10\nprint(x)\nif x > 1:\n    x = 5\nprint(x)\n";
    assert_eq!(output_of(src), "10\n5\n");
}

#[test]
fn function_call_returns_value() {
    let src = "def add(a, b):\n    return a + b\nprint(add(2, 3))\n";
    assert_eq!(output_of(src), "5\n");
}

#[test]
fn while_loop_accumulates() {
    let src = "s = 0\ni = 1\nwhile i < 5:\n    s = s + i\n    i = i + 1\nprint(s)\n";
    assert_eq!(output_of(src), "10\n");
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_eq!(output_of("print(2 + 3 * 4)\n"), "14\n");
    assert_eq!(output_of("print(8 - 3 - 2)\n"), "3\n");
    assert_eq!(output_of("print(16 / 4 / 2)\n"), "2.0\n");
    assert_eq!(output_of("print((1 + 2) * (3 + 4))\n"), "21\n");
}

#[test]
fn comparisons_produce_booleans() {
    assert_eq!(output_of("print(1 < 2, 2 <= 1, 3 == 3.0, 1 != 1)\n"),
               "True False True False\n");
    assert_eq!(output_of("print(\"abc\" < \"abd\")\n"), "True\n");
}

#[test]
fn comparisons_are_left_associative() {
    // (1 < 2) == 1
    assert_eq!(output_of("print(1 < 2 == 1)\n"), "True\n");
}

#[test]
fn strings_concatenate_and_repeat() {
    assert_eq!(output_of("print(\"foo\" + 'bar')\n"), "foobar\n");
    assert_eq!(output_of("print(\"-\" * 3, 2 * \"ab\")\n"), "--- abab\n");
    assert_eq!(output_of("print('it\\'s')\n"), "it's\n");
}

#[test]
fn floats_print_like_the_host() {
    assert_eq!(output_of("print(1 / 2)\n"), "0.5\n");
    assert_eq!(output_of("print(4 / 2)\n"), "2.0\n");
    assert_eq!(output_of("print(2.5e3)\n"), "2500.0\n");
    assert_eq!(output_of("print(.5 + 1)\n"), "1.5\n");
}

#[test]
fn elif_chain_runs_one_branch() {
    let src = "x = 2\nif x == 1:\n    print(\"one\")\nelif x == 2:\n    print(\"two\")\nelif x \
               == 2:\n    print(\"again\")\nelse:\n    print(\"other\")\n";
    assert_eq!(output_of(src), "two\n");
}

#[test]
fn else_branch_runs_when_nothing_matches() {
    let src = "x = 9\nif x == 1:\n    print(1)\nelse:\n    print(\"else\")\n";
    assert_eq!(output_of(src), "else\n");
}

#[test]
fn recursive_factorial() {
    let src = "def fact(n):\n    if n <= 1:\n        return 1\n    return n * \
               fact(n - 1)\nprint(fact(5))\n";
    assert_eq!(output_of(src), "120\n");
}

#[test]
fn closures_keep_definition_time_values() {
    let src = "x = 1\ndef f():\n    return x\nx = 2\nprint(f())\n";
    assert_eq!(output_of(src), "1\n");
}

#[test]
fn nested_function_captures_parameter() {
    let src = "def outer(n):\n    def inner():\n        return n * 2\n    return \
               inner\ng = outer(21)\nprint(g())\n";
    assert_eq!(output_of(src), "42\n");
}

#[test]
fn function_assignments_do_not_leak() {
    let src = "x = 1\ndef f():\n    x = 99\n    return x\nprint(f(), x)\n";
    assert_eq!(output_of(src), "99 1\n");
}

#[test]
fn closure_mutations_do_not_persist_between_calls() {
    let src = "n = 0\ndef bump():\n    n = n + 1\n    return n\nprint(bump(), bump())\n";
    assert_eq!(output_of(src), "1 1\n");
}

#[test]
fn missing_arguments_are_none() {
    let src = "def f(a, b):\n    return b\nprint(f(1))\n";
    assert_eq!(output_of(src), "None\n");
}

#[test]
fn function_without_return_yields_none() {
    let src = "def f():\n    x = 1\nprint(f())\n";
    assert_eq!(output_of(src), "None\n");
}

#[test]
fn bare_return_yields_none() {
    let src = "def f():\n    return\n    print(\"unreachable\")\nprint(f())\n";
    assert_eq!(output_of(src), "None\n");
}

#[test]
fn return_inside_loop_leaves_function() {
    let src = "def first_over(limit):\n    i = 0\n    while i < 100:\n        if i * i > \
               limit:\n            return i\n        i = i + 1\nprint(first_over(50))\n";
    assert_eq!(output_of(src), "8\n");
}

#[test]
fn print_without_arguments_prints_empty_line() {
    assert_eq!(output_of("print()\n"), "\n");
}

#[test]
fn functions_and_builtins_display() {
    let src = "def f():\n    return 1\nprint(f, print)\n";
    assert_eq!(output_of(src), "<function f> <built-in function print>\n");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = "# header\n\nx = 1  # trailing\n\n   # indented comment\nprint(x)\n";
    assert_eq!(output_of(src), "1\n");
}

#[test]
fn parenthesized_expressions_span_lines() {
    assert_eq!(output_of("x = (1 +\n     2)\nprint(x)\n"), "3\n");
}

#[test]
fn source_without_trailing_newline() {
    assert_eq!(output_of("x = 3\nif x:\n    print(x)"), "3\n");
}

#[test]
fn undeclared_name_is_rejected_before_running() {
    let mut out = Vec::new();
    let result = run_source("print(\"start\")\nprint(y)\n", &mut out);
    assert!(matches!(result, Err(Error::Scope(_))));
    assert!(out.is_empty());
}

#[test]
fn undeclared_name_reports_name_and_line() {
    let e = failure_of("x = 1\n\nprint(x + y)\n");
    assert_eq!(e.line(), 3);
    assert!(e.to_string().contains("'y'"));
}

#[test]
fn division_by_zero_is_error() {
    let e = failure_of("a = 1\nprint(a / 0)\n");
    assert!(matches!(e, Error::Runtime(minipy::error::RuntimeError::DivisionByZero { line: 2 })));
}

#[test]
fn output_before_runtime_error_is_kept() {
    let mut out = Vec::new();
    let result = run_source("print(\"before\")\nprint(1 / 0.0)\n", &mut out);
    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "before\n");
}

#[test]
fn type_errors_are_runtime_errors() {
    assert!(matches!(failure_of("print(\"a\" + 1)\n"), Error::Runtime(_)));
    assert!(matches!(failure_of("print(\"a\" < 1)\n"), Error::Runtime(_)));
    assert!(matches!(failure_of("print(\"a\" - \"b\")\n"), Error::Runtime(_)));
}

#[test]
fn calling_a_number_is_error() {
    assert!(matches!(failure_of("x = 3\nprint(x(1))\n"), Error::Runtime(_)));
}

#[test]
fn functions_compare_by_identity() {
    let src = "def make():\n    def inner():\n        return 1\n    return inner\n\
               a = make()\nb = make()\nprint(a == b, a == a, a != b)\nprint(print == print)\n";
    assert_eq!(output_of(src), "False True True\nTrue\n");
}

#[test]
fn surplus_arguments_are_ignored() {
    let src = "def f(a):\n    return a\nprint(f(1, 2))\n";
    assert_eq!(output_of(src), "1\n");
}

#[test]
fn calling_undefined_function_is_error() {
    assert!(matches!(failure_of("nothing(1)\n"), Error::Runtime(_)));
}

#[test]
fn return_outside_function_is_error() {
    assert!(matches!(failure_of("return 1\n"), Error::Runtime(_)));
}

#[test]
fn syntax_errors_are_parse_errors() {
    assert!(matches!(failure_of("x = = 1\n"), Error::Parse(_)));
    assert!(matches!(failure_of("if x\n    y = 1\n"), Error::Parse(_)));
    assert!(matches!(failure_of("x = 1 y = 2\n"), Error::Parse(_)));
    assert!(matches!(failure_of("def f(:\n    return 1\n"), Error::Parse(_)));
}

#[test]
fn lexical_errors_are_lex_errors() {
    assert!(matches!(failure_of("x = \"open\n"), Error::Lex(_)));
    assert!(matches!(failure_of("x = 1 $ 2\n"), Error::Lex(_)));
    assert!(matches!(failure_of("if 1:\n        x = 1\n    y = 2\n"), Error::Lex(_)));
}
