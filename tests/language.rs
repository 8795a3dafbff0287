use std::fs;

use longcalc::{
    error::{CalcError, ParseError, RuntimeError},
    evaluate,
    interpreter::evaluator::core::Calculator,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let actual = match evaluate(expression) {
                Ok(value) => value.to_string(),
                Err(CalcError::Syntax(_)) => "syntax error".to_string(),
                Err(CalcError::Runtime(RuntimeError::DivisionByZero { .. })) => {
                    "division by zero".to_string()
                },
                Err(e) => format!("unexpected error: {e}"),
            };
            assert_eq!(actual, expected, "case {} in {path:?}: {expression:?}", line + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(&str, &str)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.rsplit_once(" => "))
           .map(|(expression, expected)| (expression, expected.trim()))
           .collect()
}

fn assert_value(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_syntax_error_at(src: &str, position: usize) {
    let mut calc = Calculator::new();
    match calc.process(src) {
        Err(CalcError::Syntax(err)) => {
            assert_eq!(err.position(), Some(position), "error for {src:?}: {err}");
            assert_eq!(calc.position(), position);
        },
        other => panic!("Expression {src:?} should be a syntax error, got {other:?}"),
    }
}

#[test]
fn documented_examples() {
    assert_value("2 + 3 * 4 - -2", "16");
    assert_value("-5 / 2", "-2");
    assert!(matches!(evaluate("10 / 0"),
                     Err(CalcError::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert_syntax_error_at("2 +", 3);
    assert_syntax_error_at("", 0);
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3", "7");
    assert_value("2 * 3 + 1", "7");
    assert_value("8 - 3 - 2", "3");
    assert_value("64 / 4 / 2", "8");
    assert_value("7 * 3 / 2", "10");
    assert_value("7 / 2 * 3", "9");
    assert_value("-2 * -3 - -4 / 2", "8");
}

#[test]
fn whitespace_is_only_spaces() {
    assert_value("   1+1   ", "2");
    assert_value("12", "12");
    assert_value("1 +2", "3");
    assert_syntax_error_at("1\t+ 2", 1);
    assert_syntax_error_at("1\n", 1);
}

#[test]
fn literals_keep_every_digit() {
    let fifty = "12345678901234567890123456789012345678901234567890";
    assert_value(&format!("{fifty} + {fifty}"),
                 "24691357802469135780246913578024691357802469135780");
    assert_value(&format!("{fifty} * {fifty}"),
                 "152415787532388367504953515625666819450083828733757049236500533455762536198787501905199875019052100");
    assert_value(&format!("{fifty} / -987654321987654321"), "-12499999874843750115314453008683");
    assert_value("000000000000000000000000000042", "42");
    assert_value("-0", "0");
    assert_value("9223372036854775807 + 1", "9223372036854775808");
    assert_value("-9223372036854775808 - 1", "-9223372036854775809");
}

#[test]
fn syntax_error_positions() {
    assert_syntax_error_at("44 d ddd+5666", 3);
    assert_syntax_error_at("1 2", 3);
    assert_syntax_error_at("2 + *", 5);
    assert_syntax_error_at("(1)", 0);
    assert_syntax_error_at("5 + ", 4);
    assert_syntax_error_at("--1", 2);
}

#[test]
fn unary_minus_needs_a_literal() {
    let mut calc = Calculator::new();
    assert_eq!(calc.process("--1"),
               Err(CalcError::Syntax(ParseError::ExpectedNumber { token:    "-".to_string(),
                                                                  position: 2, })));
    assert_eq!(calc.process("-"),
               Err(CalcError::Syntax(ParseError::UnexpectedEndOfInput { position: 1 })));
    assert_eq!(calc.process("3 * -*"),
               Err(CalcError::Syntax(ParseError::ExpectedNumber { token:    "*".to_string(),
                                                                  position: 6, })));
}

#[test]
fn division_by_zero_reports_position() {
    let mut calc = Calculator::new();
    let err = calc.process("7 / 0 + 1").unwrap_err();
    assert_eq!(err, CalcError::Runtime(RuntimeError::DivisionByZero { position: 5 }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.to_string(), "Division by zero at position 6.");
}

#[test]
fn session_state_does_not_leak() {
    let mut calc = Calculator::new();
    assert_eq!(calc.process("1+1").unwrap().to_string(), "2");
    assert_eq!(calc.process("bad"),
               Err(CalcError::Syntax(ParseError::UnexpectedCharacter { character: 'b',
                                                                        position:  0, })));
    assert_eq!(calc.position(), 0);

    // A pushed-back token from an aborted call must not reach the next one.
    assert!(calc.process("2 * 3 / 0 + 4").is_err());
    assert_eq!(calc.process("5").unwrap().to_string(), "5");
    assert_eq!(calc.position(), 1);
}

#[test]
fn error_messages_use_one_based_columns() {
    let err = evaluate("2 +").unwrap_err();
    assert_eq!(err.to_string(), "Syntax error at position 4: Unexpected end of input.");
    assert_eq!(err.exit_code(), 1);

    let err = evaluate("1 ? 2").unwrap_err();
    assert_eq!(err.to_string(), "Syntax error at position 3: Unexpected character '?'.");
    assert_eq!(err.position(), Some(2));
}
