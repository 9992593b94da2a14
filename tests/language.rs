use std::fs;

use reckon::{
    Error, Session,
    error::{ParseError, RuntimeError},
    interpreter::value::Value,
    run_source,
};
use walkdir::WalkDir;

fn assert_success(src: &str) -> Option<Value> {
    run_source(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_failure(src: &str) -> Error {
    match run_source(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail\n{src}"),
        Err(e) => e,
    }
}

fn assert_runtime_failure(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Runtime(e) => e,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "rk"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let (header, script) = content.split_once('\n').unwrap_or((&content, ""));
        let expected = header.strip_prefix("# expect:")
                             .unwrap_or_else(|| panic!("{path:?} has no '# expect:' header"))
                             .trim();

        count += 1;
        match run_source(script) {
            Ok(Some(value)) => assert_eq!(value.to_string(), expected, "in {path:?}"),
            Ok(None) => panic!("Script {path:?} produced no value"),
            Err(e) => panic!("Script {path:?} failed:\n{script}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(assert_success("x = 1 + 2\nx"), Some(Value::Integer(3)));
    assert_eq!(assert_success("x = 7 * 9"), Some(Value::Integer(63)));
    assert_eq!(assert_success("x = 8 - 5"), Some(Value::Integer(3)));
    assert_eq!(assert_success("x = 10 / 2"), Some(Value::Real(5.0)));
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(assert_success("7 + 3 * (10 / (12 / (3 + 1) - 1))"), Some(Value::Real(22.0)));
    assert_eq!(assert_success("(1 + 2) * 3"), Some(Value::Integer(9)));
    assert_eq!(assert_success("1 - 2 - 3"), Some(Value::Integer(-4)));
}

#[test]
fn exponentiation() {
    assert_eq!(assert_success("2 ** 3 ** 2"), Some(Value::Integer(512)));
    assert_eq!(assert_success("-2 ** 2"), Some(Value::Integer(4)));
    assert_eq!(assert_success("0 ** 0"), Some(Value::Integer(1)));
    assert_eq!(assert_success("2 ** -1"), Some(Value::Real(0.5)));
    assert_eq!(assert_success("(8 / 2) ** 2"), Some(Value::Real(16.0)));
}

#[test]
fn unit_bases_accept_huge_exponents() {
    assert_eq!(assert_success("1 ** 4294967296"), Some(Value::Integer(1)));
    assert_eq!(assert_success("0 ** 4294967296"), Some(Value::Integer(0)));
    assert_eq!(assert_success("(-1) ** 4294967296"), Some(Value::Integer(1)));
    assert_eq!(assert_success("(-1) ** 4294967297"), Some(Value::Integer(-1)));
    assert_eq!(assert_success("1 ** 0"), Some(Value::Integer(1)));
    assert!(matches!(assert_runtime_failure("2 ** 4294967296"), RuntimeError::Overflow { .. }));
}

#[test]
fn sign_on_the_next_line_continues_the_statement() {
    let mut session = Session::new();

    assert_eq!(session.run("x = 5").unwrap(), Some(Value::Integer(5)));
    assert_eq!(session.run("x = 5\n--x").unwrap(), Some(Value::Integer(10)));

    let e = assert_runtime_failure("y = 5\n--y");
    assert!(matches!(e, RuntimeError::UndefinedVariable { ref name, .. } if name == "y"));
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let depth = 5_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert!(matches!(assert_failure(&src), Error::Parse(ParseError::NestingTooDeep { .. })));
}

#[test]
fn division_is_true_division() {
    assert_eq!(assert_success("10 / 4"), Some(Value::Real(2.5)));
    assert_eq!(assert_success("4 / 2"), Some(Value::Real(2.0)));
    assert_eq!(assert_success("10 / 4").map(|v| v.to_string()), Some("2.5".to_string()));
    assert_eq!(assert_success("4 / 2").map(|v| v.to_string()), Some("2".to_string()));
}

#[test]
fn unary_signs() {
    assert_eq!(assert_success("-3"), Some(Value::Integer(-3)));
    assert_eq!(assert_success("+3"), Some(Value::Integer(3)));
    assert_eq!(assert_success("x = 5\n(--x)"), Some(Value::Integer(5)));
    assert_eq!(assert_success("-(1 / 2)"), Some(Value::Real(-0.5)));
}

#[test]
fn user_defined_function_and_calls() {
    assert_eq!(assert_success("def add(a, b) = { a + b }\nadd(2, 3)"), Some(Value::Integer(5)));
    assert_eq!(assert_success("def square(x) = { x * x }\nsquare(square(3))"),
               Some(Value::Integer(81)));
    assert_eq!(assert_success("def seven() = { 7 }\nseven()"), Some(Value::Integer(7)));
}

#[test]
fn definition_yields_no_value() {
    assert_eq!(assert_success("def f(x) = { x }"), None);
    assert_eq!(assert_success(""), None);
}

#[test]
fn redefinition_replaces_function() {
    assert_eq!(assert_success("def f() = { 1 }\ndef f() = { 2 }\nf()"), Some(Value::Integer(2)));
}

#[test]
fn functions_see_globals_at_call_time() {
    assert_eq!(assert_success("def g() = { y * 2 }\ny = 4\ng()"), Some(Value::Integer(8)));
    assert_eq!(assert_success("def g() = { y }\ny = 1\ny = 5\ng()"), Some(Value::Integer(5)));
}

#[test]
fn parameters_do_not_leak() {
    assert_eq!(assert_success("x = 10\ndef f(x) = { x + 1 }\nf(5)"), Some(Value::Integer(6)));
    assert_eq!(assert_success("x = 10\ndef f(x) = { x + 1 }\nf(5)\nx"),
               Some(Value::Integer(10)));

    let e = assert_runtime_failure("def f(p) = { p }\nf(1)\np");
    assert!(matches!(e, RuntimeError::UndefinedVariable { ref name, .. } if name == "p"));
}

#[test]
fn assignments_in_body_do_not_leak() {
    assert_eq!(assert_success("def f(a) = { t = a * 2 }\nf(4)"), Some(Value::Integer(8)));

    let e = assert_runtime_failure("def f(a) = { t = a * 2 }\nf(4)\nt");
    assert!(matches!(e, RuntimeError::UndefinedVariable { ref name, .. } if name == "t"));

    assert_eq!(assert_success("t = 1\ndef f() = { t = 99 }\nf()\nt"), Some(Value::Integer(1)));
}

#[test]
fn arguments_evaluate_in_caller_environment() {
    let src = "x = 3\ndef f(x, y) = { x * 10 + y }\nf(x + 1, x)";
    assert_eq!(assert_success(src), Some(Value::Integer(43)));
}

#[test]
fn recursion_through_globals() {
    let src = "def count(n) = { count(n - 1) }\ncount(3)";
    assert!(matches!(assert_runtime_failure(src), RuntimeError::RecursionLimit { .. }));
}

#[test]
fn wrong_function_arity_is_error() {
    let e = assert_runtime_failure("def add(a, b) = { a + b }\nadd(1)");
    assert_eq!(e,
               RuntimeError::ArityMismatch { name:     "add".to_string(),
                                             expected: 2,
                                             found:    1,
                                             line:     2, });
}

#[test]
fn arity_is_checked_before_arguments_are_evaluated() {
    let e = assert_runtime_failure("def f(a) = { a }\nf(1, missing)");
    assert!(matches!(e, RuntimeError::ArityMismatch { .. }));
}

#[test]
fn unknown_function_is_error() {
    let e = assert_runtime_failure("nope(1)");
    assert_eq!(e,
               RuntimeError::UndefinedFunction { name: "nope".to_string(),
                                                 line: 1, });
}

#[test]
fn unknown_variable_is_error() {
    let e = assert_runtime_failure("y = x + 1");
    assert_eq!(e,
               RuntimeError::UndefinedVariable { name: "x".to_string(),
                                                 line: 1, });
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_runtime_failure("4 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(assert_runtime_failure("4 / (1 - 1)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(assert_runtime_failure("1 / (0 / 1)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(assert_runtime_failure("0 ** -1"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(assert_runtime_failure("9223372036854775807 + 1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(assert_runtime_failure("2 ** 64"), RuntimeError::Overflow { .. }));
    assert!(matches!(assert_runtime_failure("-9223372036854775807 - 2"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn definition_body_yields_no_value() {
    let e = assert_runtime_failure("def outer() = { def inner() = { 1 } }\nouter()");
    assert!(matches!(e, RuntimeError::MissingValue { ref name, .. } if name == "outer"));
}

#[test]
fn functions_defined_in_a_body_persist() {
    let mut session = Session::new();
    assert!(session.run("def outer() = { def inner() = { 1 } }\nouter()").is_err());
    assert_eq!(session.run("inner()").unwrap(), Some(Value::Integer(1)));
}

#[test]
fn parse_and_lex_errors_are_reported() {
    assert!(matches!(assert_failure("(1 + 2 * 3"), Error::Parse(_)));
    assert!(matches!(assert_failure("1 == 1"), Error::Parse(_)));
    assert!(matches!(assert_failure("1 $ 2"), Error::Lex(_)));
}

#[test]
fn error_messages_name_the_line() {
    let e = assert_failure("x = 1\ny = 2\nz = q");
    assert_eq!(e.to_string(), "Error on line 3: Undefined variable 'q'.");
}

#[test]
fn session_keeps_state_between_runs() {
    let mut session = Session::new();

    assert_eq!(session.run("x = 1 + 2").unwrap(), Some(Value::Integer(3)));
    assert_eq!(session.run("def double(n) = { n * 2 }").unwrap(), None);
    assert_eq!(session.run("double(x)").unwrap(), Some(Value::Integer(6)));
    assert_eq!(session.context().variable_names(), ["x"]);
    assert_eq!(session.context().function_names(), ["double"]);

    session.reset();
    assert!(session.run("x").is_err());
}

#[test]
fn parse_error_runs_nothing() {
    let mut session = Session::new();

    assert!(session.run("x = 1\n)").is_err());
    assert_eq!(session.context().get_variable("x"), None);
}

#[test]
fn runtime_error_keeps_earlier_statements() {
    let mut session = Session::new();

    assert!(session.run("x = 1\ny = 1 / 0\nz = 3").is_err());
    assert_eq!(session.context().get_variable("x"), Some(Value::Integer(1)));
    assert_eq!(session.context().get_variable("y"), None);
    assert_eq!(session.context().get_variable("z"), None);
}

#[test]
fn failed_call_restores_environment() {
    let mut session = Session::new();

    session.run("x = 10\ndef f(x) = { x / 0 }").unwrap();
    assert!(session.run("f(5)").is_err());
    assert_eq!(session.context().get_variable("x"), Some(Value::Integer(10)));

    session.run("def deep(x) = { deep(x + 1) }").unwrap();
    assert!(matches!(session.run("deep(0)"),
                     Err(Error::Runtime(RuntimeError::RecursionLimit { .. }))));
    assert_eq!(session.context().get_variable("x"), Some(Value::Integer(10)));
    assert_eq!(session.run("x").unwrap(), Some(Value::Integer(10)));
}

#[test]
fn failed_assignment_keeps_previous_value() {
    let mut session = Session::new();

    session.run("x = 2").unwrap();
    assert!(session.run("x = 1 / 0").is_err());
    assert_eq!(session.context().get_variable("x"), Some(Value::Integer(2)));
}
