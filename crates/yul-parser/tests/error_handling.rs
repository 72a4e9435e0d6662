//! Error handling tests for the Yul parser.
//!
//! This test suite verifies that the parser aborts with the right
//! diagnostic for grammar violations:
//! - Malformed switch statements
//! - Invalid literals and literal positions
//! - Statements that are neither calls nor assignments
//! - Builtin names used as variables
//! - Unexpected tokens and end of input

use yul_ast::Span;
use yul_parser::{
    parse_with_diagnostics, Diagnostic, DiagnosticKind, Dialect, InstructionTable,
    ParserConfig,
};

fn assembly() -> Dialect {
    Dialect::strict_assembly(&InstructionTable::new())
}

/// Helper to verify that parsing aborts, returning the diagnostics.
fn expect_error(source: &str, dialect: &Dialect) -> Vec<Diagnostic> {
    let (block, errors) = parse_with_diagnostics(source, 0, dialect, ParserConfig::default());
    assert!(block.is_none(), "Expected parse error, but parsing succeeded");
    assert!(!errors.is_empty(), "Expected at least one error");
    errors
}

/// Helper asserting the first fatal diagnostic carries `message`.
fn expect_fatal(source: &str, dialect: &Dialect, message: &str) -> Diagnostic {
    let errors = expect_error(source, dialect);
    let fatal = errors
        .iter()
        .find(|e| e.kind == DiagnosticKind::ParserError)
        .unwrap_or_else(|| panic!("No fatal error in {:?}", errors));
    assert_eq!(fatal.message, message, "source: {source}");
    fatal.clone()
}

// =============================================================================
// Switch
// =============================================================================

#[test]
fn test_switch_without_cases() {
    let error = expect_fatal("{ switch x }", &assembly(), "Switch statement without any cases.");
    // Reported at the token after the switch expression.
    assert_eq!(error.span, Span::new(0, 11, 12));
}

#[test]
fn test_switch_with_two_defaults() {
    expect_fatal(
        "{ switch x default { } default { } }",
        &assembly(),
        "Only one default case allowed.",
    );
}

#[test]
fn test_case_after_default() {
    expect_fatal(
        "{ switch x default { } case 1 { } }",
        &assembly(),
        "Case not allowed after default case.",
    );
}

#[test]
fn test_case_value_must_be_literal() {
    expect_fatal("{ switch x case y { } }", &assembly(), "Literal expected.");
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_invalid_number_literals() {
    for literal in ["0x1g", "1.5", "0123abc", "0X10", "089"] {
        let source = format!("{{ let x := {literal} }}");
        expect_fatal(&source, &assembly(), "Invalid number literal.");
    }
}

#[test]
fn test_number_literal_overflow() {
    let source = format!("{{ let x := 0x1{} }}", "0".repeat(64));
    expect_fatal(&source, &assembly(), "Invalid number literal.");
}

#[test]
fn test_booleans_rejected_in_untyped_flavour() {
    expect_fatal(
        "{ let x := true }",
        &assembly(),
        "True and false are not valid literals.",
    );
}

#[test]
fn test_typed_literal_requires_type() {
    expect_fatal(
        "{ let x:u256 := 1 }",
        &Dialect::yul(),
        "Expected ':' but got '}'",
    );
}

#[test]
fn test_typed_name_requires_type() {
    expect_fatal(
        "{ let x := 1:u256 }",
        &Dialect::yul(),
        "Expected ':' but got ':='",
    );
}

#[test]
fn test_missing_operand_wording_depends_on_flavour() {
    expect_fatal("{ let x:u256 := , }", &Dialect::yul(), "Literal or identifier expected.");
    expect_fatal(
        "{ let x := , }",
        &assembly(),
        "Literal, identifier or instruction expected.",
    );
}

#[test]
fn test_literal_cannot_be_called() {
    expect_fatal("{ 1:u256() }", &Dialect::yul(), "Function name expected.");
    expect_fatal(
        "{ 1() }",
        &assembly(),
        "Assembly instruction or function name required in front of \"(\")",
    );
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_bare_operand_is_not_a_statement() {
    expect_fatal("{ x }", &assembly(), "Call or assignment expected.");
    expect_fatal("{ 1 }", &assembly(), "Call or assignment expected.");
    expect_fatal("{ x y }", &assembly(), "Call or assignment expected.");
}

#[test]
fn test_assignment_target_must_be_identifier() {
    expect_fatal(
        "{ 1 := 2 }",
        &assembly(),
        "Variable name must precede \":=\" in assignment.",
    );
    expect_fatal(
        "{ 1, a := 2 }",
        &assembly(),
        "Variable name must precede \",\" in multiple assignment.",
    );
    expect_fatal(
        "{ a, 1 := 2 }",
        &assembly(),
        "Variable name must precede \":=\" in assignment.",
    );
}

#[test]
fn test_builtin_must_be_called() {
    expect_fatal("{ add := 1 }", &assembly(), "Expected '(' but got ':='");
    expect_fatal("{ let x := mload }", &assembly(), "Expected '(' but got '}'");
}

#[test]
fn test_builtin_name_as_variable() {
    expect_fatal(
        "{ let add := 1 }",
        &assembly(),
        "Cannot use builtin function name \"add\" as identifier name.",
    );
    expect_fatal(
        "{ function mstore() { } }",
        &assembly(),
        "Cannot use builtin function name \"mstore\" as identifier name.",
    );
}

#[test]
fn test_no_trailing_commas() {
    expect_fatal(
        "{ f(1,) }",
        &assembly(),
        "Literal, identifier or instruction expected.",
    );
    expect_fatal(
        "{ function f(a,) { } }",
        &assembly(),
        "Expected identifier but got ')'",
    );
}

#[test]
fn test_missing_comma_in_return_list() {
    expect_fatal(
        "{ function f() -> a b { } }",
        &assembly(),
        "Expected ',' but got identifier \"b\"",
    );
}

#[test]
fn test_split_arrow_is_rejected() {
    expect_fatal(
        "{ function f() - > a { } }",
        &assembly(),
        "Expected '{' but got illegal token \"-\"",
    );
}

// =============================================================================
// Unexpected end of input / trailing input
// =============================================================================

#[test]
fn test_unclosed_block() {
    let error = expect_fatal("{ let x := 1", &assembly(), "Expected '}' but got end of source");
    assert_eq!(error.span, Span::new(0, 12, 12));
}

#[test]
fn test_missing_opening_brace() {
    expect_fatal("let x := 1", &assembly(), "Expected '{' but got 'let'");
}

#[test]
fn test_trailing_tokens() {
    expect_fatal("{ } x", &assembly(), "Expected end of source but got identifier \"x\"");
}

#[test]
fn test_illegal_character() {
    let errors = expect_error("{ let x := # }", &assembly());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Literal, identifier or instruction expected."
    );
}

#[test]
fn test_unterminated_comment() {
    let error = expect_fatal(
        "{ let x := 1 /* open }",
        &assembly(),
        "Literal, identifier or instruction expected.",
    );
    assert_eq!(error.span.start, 13);
}

#[test]
fn test_fatal_error_keeps_earlier_recoverable_errors() {
    let errors = expect_error("{ break 1 }", &assembly());
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].kind, DiagnosticKind::SyntaxError);
    assert_eq!(errors[1].kind, DiagnosticKind::ParserError);
}
