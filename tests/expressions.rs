use std::fs;

use exprtree::{
    ast::{BinaryOperator, Node},
    config::{Config, LexerConfig, TokenizeMode},
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, tokenize},
        parser::core::parse,
        renderer::render,
        transformer::transform,
    },
    read_expression, run, run_to_file, write_report,
};
use tempfile::TempDir;

fn tree(src: &str) -> Node {
    parse(src, &Config::default()).unwrap_or_else(|e| panic!("Failed to parse '{src}': {e}"))
}

fn assert_value(src: &str, x: i64, expected: i64) {
    match evaluate(&tree(src), x) {
        Ok(value) => assert_eq!(value, expected, "'{src}' with x = {x}"),
        Err(e) => panic!("Evaluating '{src}' failed: {e}"),
    }
}

fn assert_shape(src: &str, expected: &str) {
    assert_eq!(tree(src).to_string(), expected, "shape of '{src}'");
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match parse(src, &Config::default()) {
        Ok(tree) => panic!("'{src}' parsed as {tree} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "error for '{src}'"),
    }
}

fn assert_runtime_error(src: &str, x: i64, expected: &RuntimeError) {
    match evaluate(&tree(src), x) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "error for '{src}'"),
    }
}

fn sum_of_ones(terms: usize) -> String {
    vec!["1"; terms].join(" + ")
}

#[test]
fn reference_scenarios() {
    assert_value("3 + 4 * x", 5, 23);
    assert_value("2 ^ 3 ^ 2", 0, 512);
    assert_parse_error("(3 + 4", &ParseError::UnbalancedParentheses);
    assert_runtime_error("5 / 0", 0, &RuntimeError::DivisionByZero);
    assert_runtime_error("2 ^ (3 - 5)", 0, &RuntimeError::NegativeExponent { exponent: -2 });
}

#[test]
fn rewrite_keeps_value_of_reference_expression() {
    let mut tree = tree("x * 2 + 1");
    assert_eq!(tree.to_string(), "(+ (* x 2) 1)");
    assert_eq!(evaluate(&tree, 3), Ok(7));

    assert_eq!(transform(&mut tree), 1);
    assert_eq!(tree.to_string(), "(+ (* 2 x) 1)");
    assert_eq!(evaluate(&tree, 3), Ok(7));
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 0, 14);
    assert_value("(2 + 3) * 4", 0, 20);
    assert_value("2 * 3 ^ 2", 0, 18);
    assert_value("10 - 2 ^ 3", 0, 2);
    assert_value("7 % 4 * 2", 0, 6);
    assert_value("(((x)))", 9, 9);
    assert_value("x ^ 2 - 2 * x + 1", 4, 9);

    assert_shape("2 + 3 * 4", "(+ 2 (* 3 4))");
    assert_shape("(2 + 3) * 4", "(* (+ 2 3) 4)");
    assert_shape("2 * 3 ^ 2", "(* 2 (^ 3 2))");
}

#[test]
fn associativity() {
    assert_value("8 - 3 - 2", 0, 3);
    assert_value("64 / 4 / 2", 0, 8);
    assert_value("100 % 7 % 3", 0, 2);
    assert_value("2 ^ 2 ^ 3", 0, 256);
    assert_value("(2 ^ 2) ^ 3", 0, 64);

    assert_shape("8 - 3 - 2", "(- (- 8 3) 2)");
    assert_shape("2 ^ 3 ^ 2", "(^ 2 (^ 3 2))");
    assert_shape("2 ^ 3 ^ 2 * x", "(* (^ 2 (^ 3 2)) x)");
    assert_shape("x - 1 + 2", "(+ (- x 1) 2)");
}

#[test]
fn tokens_may_touch_in_scan_mode() {
    assert_value("3+4*x", 5, 23);
    assert_value("(x+1)*(x-1)", 6, 35);
    assert_value("\t2 ^\n10 ", 0, 1024);
}

#[test]
fn integer_division_truncates() {
    assert_value("7 / 2", 0, 3);
    assert_value("x / 2", -7, -3);
    assert_value("x % 3", -7, -1);
    assert_value("7 % x", -3, 1);
}

#[test]
fn zero_divisors_are_rejected_for_any_left_operand() {
    assert_runtime_error("0 / 0", 0, &RuntimeError::DivisionByZero);
    assert_runtime_error("x / 0", 42, &RuntimeError::DivisionByZero);
    assert_runtime_error("0 % 0", 0, &RuntimeError::ModuloByZero);
    assert_runtime_error("x % (x - x)", 17, &RuntimeError::ModuloByZero);
    assert_runtime_error("1 + 10 / (x - 3)", 3, &RuntimeError::DivisionByZero);
}

#[test]
fn exponentiation_is_exact_integer_arithmetic() {
    assert_value("0 ^ 0", 0, 1);
    assert_value("0 ^ 5", 0, 0);
    assert_value("x ^ 0", 12, 1);
    assert_value("3 ^ 39", 0, 4_052_555_153_018_976_267);
    assert_value("x ^ 3", -2, -8);
    assert_value("x ^ 1000000", 1, 1);
    assert_value("x ^ 1000001", -1, -1);
}

#[test]
fn negative_exponent_from_any_subtree() {
    assert_runtime_error("x ^ (x - 10)", 3, &RuntimeError::NegativeExponent { exponent: -7 });
    assert_runtime_error("2 ^ (1 - 2 * 3)", 0, &RuntimeError::NegativeExponent { exponent: -5 });
    assert_runtime_error("1 ^ (0 - 1)", 0, &RuntimeError::NegativeExponent { exponent: -1 });
}

#[test]
fn overflow_is_reported() {
    assert_runtime_error("2 ^ 63", 0, &RuntimeError::Overflow { op: BinaryOperator::Pow });
    assert_runtime_error("x * x", i64::MAX, &RuntimeError::Overflow { op: BinaryOperator::Mul });
    assert_runtime_error("x + 1", i64::MAX, &RuntimeError::Overflow { op: BinaryOperator::Add });
    assert_runtime_error("x - 1", i64::MIN, &RuntimeError::Overflow { op: BinaryOperator::Sub });
    assert_runtime_error("x / (0 - 1)", i64::MIN, &RuntimeError::Overflow { op: BinaryOperator::Div });
    assert_value("x % (0 - 1)", i64::MIN, 0);
    assert_value("2 ^ 62", 0, 1 << 62);
}

#[test]
fn evaluation_does_not_touch_the_tree() {
    let tree = tree("x * (x - 4) / 2");
    let before = tree.clone();

    assert_eq!(evaluate(&tree, 10), Ok(30));
    assert_eq!(evaluate(&tree, 4), Ok(0));
    assert!(evaluate(&tree, i64::MAX).is_err());
    assert_eq!(tree, before);
}

#[test]
fn tokenizer_errors() {
    assert_parse_error("", &ParseError::EmptyExpression);
    assert_parse_error("  \t ", &ParseError::EmptyExpression);
    assert_parse_error("3 + y",
                       &ParseError::InvalidToken { token:    "y".to_string(),
                                                   position: 4, });
    assert_parse_error("2.5 * x",
                       &ParseError::InvalidToken { token:    ".".to_string(),
                                                   position: 1, });
    assert_parse_error("99999999999999999999 + 1",
                       &ParseError::InvalidToken { token:    "99999999999999999999".to_string(),
                                                   position: 0, });
}

#[test]
fn builder_errors() {
    assert_parse_error("3 +", &ParseError::InsufficientOperands);
    assert_parse_error("+", &ParseError::InsufficientOperands);
    assert_parse_error("* 3", &ParseError::InsufficientOperands);
    assert_parse_error("3 4", &ParseError::MalformedExpression);
    assert_parse_error("x x * 2", &ParseError::MalformedExpression);
    assert_parse_error("()", &ParseError::MalformedExpression);
    assert_parse_error("3 + 4)", &ParseError::UnbalancedParentheses);
    assert_parse_error(")", &ParseError::UnbalancedParentheses);
    assert_parse_error("((3)", &ParseError::UnbalancedParentheses);
    assert_parse_error("(x * (2 + 1)", &ParseError::UnbalancedParentheses);
}

#[test]
fn literal_range() {
    let config = Config::default().with_literal_range(1, 30);

    assert!(parse("30 + 1 * x", &config).is_ok());

    let err = parse("x + 31", &config).unwrap_err();
    assert_eq!(err,
               ParseError::LiteralOutOfRange { value:    31,
                                               min:      1,
                                               max:      30,
                                               position: 4, });
    assert!(err.is_invalid_token());
    assert!(!matches!(err, ParseError::InvalidToken { .. }));

    let too_large = parse("99999999999999999999 + x", &config).unwrap_err();
    assert!(matches!(too_large, ParseError::InvalidToken { position: 0, .. }));
    assert!(too_large.is_invalid_token());

    assert!(parse("0 * x", &config).unwrap_err().is_invalid_token());
}

#[test]
fn strict_profile() {
    let config = Config::strict();

    let tree = parse("x * 2 + 1", &config).unwrap();
    assert_eq!(evaluate(&tree, 3), Ok(7));

    assert_eq!(parse("3+4", &config).unwrap_err(),
               ParseError::InvalidToken { token:    "3+4".to_string(),
                                          position: 0, });
    assert_eq!(parse("x + 45", &config).unwrap_err(),
               ParseError::LiteralOutOfRange { value:    45,
                                               min:      1,
                                               max:      30,
                                               position: 4, });
}

#[test]
fn field_mode_rejects_fields_with_several_tokens() {
    let fields = LexerConfig { mode:          TokenizeMode::Fields,
                               literal_range: None, };

    assert_eq!(tokenize("3 + ab", &fields).unwrap_err(),
               ParseError::InvalidToken { token:    "ab".to_string(),
                                          position: 4, });
    assert_eq!(tokenize("( 3 + 4)", &fields).unwrap_err(),
               ParseError::InvalidToken { token:    "4)".to_string(),
                                          position: 6, });
    assert_eq!(tokenize("2x", &fields).unwrap_err(),
               ParseError::InvalidToken { token:    "2x".to_string(),
                                          position: 0, });
    assert_eq!(tokenize(" \n ", &fields).unwrap_err(), ParseError::EmptyExpression);
}

#[test]
fn tokenize_modes_agree_on_space_separated_input() {
    let scan = LexerConfig::default();
    let fields = LexerConfig { mode:          TokenizeMode::Fields,
                               literal_range: None, };

    for src in ["3 + 4 * x",
                "( x + 1 ) ^ 2 % 7",
                "  12   /  x  -  0 ",
                "x",
                "( ( ( 5 ) ) )"]
    {
        assert_eq!(tokenize(src, &scan).unwrap(),
                   tokenize(src, &fields).unwrap(),
                   "modes disagree on '{src}'");
    }

    assert_eq!(tokenize("( x + 10 )", &fields).unwrap(),
               vec![Token::LParen,
                    Token::Variable,
                    Token::Plus,
                    Token::Integer(10),
                    Token::RParen]);
}

#[test]
fn tokenize_modes_agree_on_what_counts_as_whitespace() {
    let scan = LexerConfig::default();
    let fields = LexerConfig { mode:          TokenizeMode::Fields,
                               literal_range: None, };

    let src = "\t3\r\n+\x0C4 \n";
    assert_eq!(tokenize(src, &scan).unwrap(),
               vec![Token::Integer(3), Token::Plus, Token::Integer(4)]);
    assert_eq!(tokenize(src, &scan).unwrap(), tokenize(src, &fields).unwrap());

    for src in ["3\u{0B}+\u{0B}4", "3\u{A0}+\u{A0}4", "3\u{2003}+\u{2003}x"] {
        let scanned = tokenize(src, &scan).unwrap_err();
        let split = tokenize(src, &fields).unwrap_err();
        assert!(scanned.is_invalid_token(), "scan accepted '{src}': {scanned}");
        assert!(split.is_invalid_token(), "fields accepted '{src}': {split}");
    }

    assert_eq!(tokenize("3\u{0B}+\u{0B}4", &fields).unwrap_err(),
               ParseError::InvalidToken { token:    "3\u{0B}+\u{0B}4".to_string(),
                                          position: 0, });
    assert_eq!(tokenize("1\t\t+ ab", &fields).unwrap_err(),
               ParseError::InvalidToken { token:    "ab".to_string(),
                                          position: 5, });
}

#[test]
fn transform_rewrites_nested_products_bottom_up() {
    let mut tree = tree("x * (x * 3)");
    assert_eq!(transform(&mut tree), 2);
    assert_eq!(tree.to_string(), "(* (* 3 x) x)");
    assert_eq!(evaluate(&tree, 5), Ok(75));
}

#[test]
fn transform_leaves_other_shapes_alone() {
    for src in ["x * x", "2 * x", "x + 2", "x / 2", "x ^ 2", "(x + 1) * 3"] {
        let mut tree = tree(src);
        let before = tree.clone();
        assert_eq!(transform(&mut tree), 0, "'{src}'");
        assert_eq!(tree, before, "'{src}'");
    }
}

#[test]
fn transform_is_idempotent() {
    let mut once = tree("x * 2 + x * (x * 4) - 3 * x ^ x * x");
    transform(&mut once);

    let mut twice = once.clone();
    assert_eq!(transform(&mut twice), 0);
    assert_eq!(twice, once);
    assert!(!once.to_string().contains("(* x "));
}

#[test]
fn render_is_rotated_and_indented() {
    assert_eq!(render(&tree("x")), "x\n");
    assert_eq!(render(&tree("1 - x")), "    x\n-\n    1\n");
    assert_eq!(render(&tree("(1 + 2) * x")),
               "    x\n*\n        2\n    +\n        1\n");
}

#[test]
fn render_handles_trees_at_the_depth_limit() {
    let rendered = render(&tree(&sum_of_ones(512)));
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 1023);
    assert_eq!(lines[0], "    1");
    assert_eq!(lines[1], "+");
    assert_eq!(lines[lines.len() - 1], format!("{}1", " ".repeat(511 * 4)));
    assert!(rendered.ends_with('\n'));
}

#[test]
fn render_without_products_is_unchanged_by_transform() {
    let mut tree = tree("(x + 1) ^ 2 - x / 3 % 2");
    let before = render(&tree);
    transform(&mut tree);
    assert_eq!(render(&tree), before);
}

#[test]
fn deep_trees_are_rejected_before_evaluation() {
    let config = Config::default();

    let at_limit = parse(&sum_of_ones(512), &config).unwrap();
    assert_eq!(at_limit.height(), 512);
    assert_eq!(evaluate(&at_limit, 0), Ok(512));

    assert_eq!(parse(&sum_of_ones(513), &config).unwrap_err(),
               ParseError::TreeTooDeep { max_depth: 512 });
    assert_eq!(parse(&sum_of_ones(100_000), &config).unwrap_err(),
               ParseError::TreeTooDeep { max_depth: 512 });

    let shallow = Config::default().with_max_depth(3);
    assert!(parse("1 + 2 * 3", &shallow).is_ok());
    assert_eq!(parse("1 + 2 * 3 ^ 4", &shallow).unwrap_err(),
               ParseError::TreeTooDeep { max_depth: 3 });
}

#[test]
fn deep_parentheses_add_no_height() {
    let depth = 100_000;
    let src = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let tree = parse(&src, &Config::default()).unwrap();
    assert_eq!(tree, Node::variable());

    let unclosed = format!("{}x{}", "(".repeat(depth), ")".repeat(depth - 1));
    assert_eq!(parse(&unclosed, &Config::default()).unwrap_err(),
               ParseError::UnbalancedParentheses);
}

#[test]
fn run_produces_report() {
    let report = run("x * 2 + 1", 3, &Config::default(), true).unwrap();
    assert_eq!(report.result, 7);
    assert!(report.transformed);
    assert_eq!(report.to_string(),
               "Expression: x * 2 + 1\nx = 3\nResult: 7\n\nTransformed tree:\n    1\n+\n        \
                x\n    *\n        2\n");

    let untouched = run("x * 2 + 1", 3, &Config::default(), false).unwrap();
    assert_eq!(untouched.tree.to_string(), "(+ (* x 2) 1)");
    assert!(untouched.to_string().contains("\nTree:\n"));
}

#[test]
fn run_reports_typed_errors() {
    let err = run("5 / 0", 1, &Config::default(), true).unwrap_err();
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::DivisionByZero));

    let err = run("(3 + 4", 1, &Config::default(), true).unwrap_err();
    assert_eq!(err.downcast_ref::<ParseError>(),
               Some(&ParseError::UnbalancedParentheses));
    assert_eq!(err.to_string(), "Parse error: Unbalanced parentheses.");
}

#[test]
fn expression_file_contributes_only_its_first_line() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");

    fs::write(&path, "x * 2 + 1\n3\n").unwrap();
    assert_eq!(read_expression(&path).unwrap(), "x * 2 + 1");

    fs::write(&path, "3 + 4\r\n5 / 0\r\n").unwrap();
    assert_eq!(read_expression(&path).unwrap(), "3 + 4");

    assert!(read_expression(temp.path().join("missing.txt")).is_err());
}

#[test]
fn empty_first_line_is_an_empty_expression() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");

    for contents in ["", "\n3 + 4\n"] {
        fs::write(&path, contents).unwrap();
        let expression = read_expression(&path).unwrap();
        let err = run(&expression, 0, &Config::default(), true).unwrap_err();
        assert_eq!(err.downcast_ref::<ParseError>(),
                   Some(&ParseError::EmptyExpression),
                   "contents {contents:?}");
    }
}

#[test]
fn output_file_is_written_only_on_success() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.txt");

    let report = run_to_file("x * 2 + 1", 3, &Config::default(), true, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), report.to_string());

    for src in ["5 / 0", "(3 + 4", "3 # 4"] {
        let failed = temp.path().join("failed.txt");
        assert!(run_to_file(src, 0, &Config::default(), true, &failed).is_err());
        assert!(!failed.exists(), "'{src}' left an output file behind");
    }

    let missing_dir = temp.path().join("no-such-dir").join("report.txt");
    let err = run_to_file("1 + 1", 0, &Config::default(), true, &missing_dir).unwrap_err();
    assert!(err.to_string().starts_with("Failed to write the output file"));
}

#[test]
fn written_report_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.txt");
    fs::write(&path, "stale contents that are longer than the report itself\n".repeat(10)).unwrap();

    let report = run("3 + 4 * x", 5, &Config::default(), false).unwrap();
    write_report(&path, &report).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Expression: 3 + 4 * x\nx = 5\nResult: 23\n\nTree:\n"));
    assert!(!written.contains("stale"));
}
