use sciculate::{error::EvalError, evaluate, evaluator::function::Function};

const TOLERANCE: f64 = 1e-12;

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &EvalError) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong error"),
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_value("3+4*2", 11.0);
    assert_value("(3+4)*2", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("1+2*3-4/2", 5.0);
    assert_value("((2+3)*4)", 20.0);
    assert_value("(((7)))", 7.0);
    assert_value("2*(3+(4-1)*2)", 18.0);
}

#[test]
fn operand_order_is_preserved() {
    assert_value("10-4", 6.0);
    assert_value("8/2", 4.0);
    assert_value("10-4-3", 3.0);
    assert_value("100/10/5", 2.0);
    assert_value("2-(5-1)", -2.0);
}

#[test]
fn decimals() {
    assert_value("0.5+0.25", 0.75);
    assert_value(".5*4", 2.0);
    assert_value("7.", 7.0);
    assert_value("1.5/0.5", 3.0);
}

#[test]
fn whitespace_is_skipped() {
    assert_value(" 3 + 4 * 2 ", 11.0);
    assert_value("( 3 + 4 )\t* 2\n", 14.0);
    assert_value("sin 30", 0.5);
}

#[test]
fn functions_bind_to_the_following_literal() {
    assert_value("sin30", 0.5);
    assert_value("cos60", 0.5);
    assert_value("tan45", 1.0);
    assert_value("log100", 2.0);
    assert_value("sqrt9", 3.0);
    assert_value("√9", 3.0);
    assert_value("sin30+1", 1.5);
    assert_value("2*√16", 8.0);
    assert_value("(log1000-1)*sqrt4", 4.0);
    assert_value("sin0", 0.0);
}

#[test]
fn function_without_literal_is_malformed() {
    assert_failure("sin",
                   &EvalError::MalformedNumber { literal:  String::new(),
                                                 position: 3, });
    assert_failure("sin(30)",
                   &EvalError::MalformedNumber { literal:  String::new(),
                                                 position: 3, });
    assert_failure("√-4",
                   &EvalError::MalformedNumber { literal:  String::new(),
                                                 position: 1, });
    assert_failure("sqrtsqrt16",
                   &EvalError::MalformedNumber { literal:  String::new(),
                                                 position: 4, });
}

#[test]
fn malformed_numbers() {
    assert_failure("1.2.3",
                   &EvalError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                 position: 0, });
    assert_failure("2+.",
                   &EvalError::MalformedNumber { literal:  ".".to_string(),
                                                 position: 2, });
    assert_failure("log1..0",
                   &EvalError::MalformedNumber { literal:  "1..0".to_string(),
                                                 position: 3, });
}

#[test]
fn division_by_zero() {
    assert_failure("5/0", &EvalError::DivisionByZero { position: 1 });
    assert_failure("5/0.0", &EvalError::DivisionByZero { position: 1 });
    assert_failure("1+5/(2-2)", &EvalError::DivisionByZero { position: 3 });
}

#[test]
fn unbalanced_parentheses() {
    assert_failure("(3+4", &EvalError::UnbalancedParentheses { position: 0 });
    assert_failure("3+4)", &EvalError::UnbalancedParentheses { position: 3 });
    assert_failure(")", &EvalError::UnbalancedParentheses { position: 0 });
    assert_failure("((1)", &EvalError::UnbalancedParentheses { position: 0 });
}

#[test]
fn invalid_characters() {
    assert_failure("2+x", &EvalError::InvalidCharacter { character: 'x',
                                                          position:  2, });
    assert_failure("2^3", &EvalError::InvalidCharacter { character: '^',
                                                          position:  1, });
    assert_failure("√9+π", &EvalError::InvalidCharacter { character: 'π',
                                                           position:  3, });
}

#[test]
fn misspelled_keywords_are_rejected() {
    assert_failure("sxx30", &EvalError::InvalidCharacter { character: 's',
                                                            position:  0, });
    assert_failure("si30", &EvalError::InvalidCharacter { character: 's',
                                                           position:  0, });
    assert_failure("sine30", &EvalError::InvalidCharacter { character: 'e',
                                                             position:  3, });
    assert_failure("sqr9", &EvalError::InvalidCharacter { character: 's',
                                                           position:  0, });
}

#[test]
fn incomplete_expressions() {
    for src in ["", "   ", "+", "+5", "5+", "5 5", "2(3)", "()", "3*/2"] {
        assert_failure(src, &EvalError::IncompleteExpression);
    }
}

#[test]
fn tangent_near_a_pole_is_finite() {
    let value = evaluate("tan90").unwrap();
    assert!(value.is_finite() && value > 1e15, "tan90 evaluated to {value}");
}

#[test]
fn domain_errors() {
    assert_failure("log0",
                   &EvalError::DomainError { function: Function::Log,
                                             argument: 0.0,
                                             position: 0, });
    assert!(Function::Sqrt.apply(-4.0, 0).is_err());
}

#[test]
fn overflow_is_not_a_result() {
    let big = "9".repeat(300);
    assert_failure(&format!("{big}*{big}"),
                   &EvalError::NonFiniteResult { position: 300 });
}

#[test]
fn long_inputs_evaluate_in_one_pass() {
    let terms = 200_000;
    let src = "1+".repeat(terms) + "1";
    assert_value(&src, (terms + 1) as f64);

    let nested = "(".repeat(terms) + "2" + &")".repeat(terms);
    assert_value(&nested, 2.0);
}

#[test]
fn positions_count_characters_not_bytes() {
    let src = "√4+".repeat(1_000) + "x";
    assert_failure(&src, &EvalError::InvalidCharacter { character: 'x',
                                                         position:  3_000, });

    let src = "√4+".repeat(1_000) + "5/0";
    assert_failure(&src, &EvalError::DivisionByZero { position: 3_001 });

    assert_failure("√4+(1", &EvalError::UnbalancedParentheses { position: 3 });
    assert_failure("√√", &EvalError::MalformedNumber { literal:  String::new(),
                                                       position: 1, });
    assert_failure("2*√", &EvalError::MalformedNumber { literal:  String::new(),
                                                        position: 3, });
}

#[test]
fn evaluation_is_pure() {
    for src in ["3+4*2", "sin30", "5/0", "(1"] {
        assert_eq!(evaluate(src), evaluate(src));
    }

    std::thread::scope(|scope| {
        let handles = (1..=8).map(|n| scope.spawn(move || evaluate(&format!("{n}*(2+3)"))))
                             .collect::<Vec<_>>();
        for (n, handle) in (1..=8).zip(handles) {
            assert_eq!(handle.join().unwrap(), Ok(f64::from(n) * 5.0));
        }
    });
}

#[test]
fn errors_render_readably() {
    let e = evaluate("1.2.3").unwrap_err();
    assert_eq!(e.to_string(), "Malformed number '1.2.3' at position 0.");

    let e = evaluate("sin").unwrap_err();
    assert_eq!(e.to_string(), "Expected a number at position 3.");

    let e = evaluate("log0").unwrap_err();
    assert_eq!(e.to_string(), "log is undefined for 0 (position 0).");
}
