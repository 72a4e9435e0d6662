// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Lexical analysis for Yul.
//!
//! This crate provides tokenization of Yul source code using logos.
//!
//! # Design
//!
//! - `Token`: all Yul token kinds; tokens carry no data, the text lives in
//!   the source and is handed out by the scanner as the current literal
//! - `Scanner`: one-token-lookahead cursor over a source with the
//!   "period inside identifier" lexical mode
//! - Comments and whitespace are stripped during lexing (not tokens)
//! - Display strings are defined once in `TOKEN_STRINGS`
//!
//! # Examples
//!
//! ```
//! # use yul_lexer::*;
//! # use logos::{FilterResult, Logos};
//! let source = "{ let x := add(1, 2) }";
//! let tokens: Vec<Result<Token, ()>> = Token::lexer(source).collect();
//! assert_eq!(tokens[0], Ok(Token::LBrace));
//! ```

use logos::{FilterResult, Logos};

mod scanner;

pub use scanner::{unescape_string, Scanner};

/// Yul token.
///
/// `Identifier`, `Number` and `StringLiteral` are classified here; their
/// text is available from [`Scanner::current_literal`].
///
/// # Layout
///
/// Uses `#[repr(u8)]` so the discriminant can index `TOKEN_STRINGS`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // === Keywords ===
    /// Keyword `let`
    #[token("let")]
    Let,
    /// Keyword `function`
    #[token("function")]
    Function,
    /// Keyword `if`
    #[token("if")]
    If,
    /// Keyword `switch`
    #[token("switch")]
    Switch,
    /// Keyword `case`
    #[token("case")]
    Case,
    /// Keyword `default`
    #[token("default")]
    Default,
    /// Keyword `for`
    #[token("for")]
    For,
    /// Keyword `break`
    #[token("break")]
    Break,
    /// Keyword `continue`
    #[token("continue")]
    Continue,

    // Reserved words that the assembly grammar accepts as plain names
    /// Keyword `return`
    #[token("return")]
    Return,
    /// Keyword `byte`
    #[token("byte")]
    Byte,
    /// Keyword `bool`
    #[token("bool")]
    Bool,
    /// Keyword `address`
    #[token("address")]
    Address,

    // Boolean literals
    /// Boolean literal `true`
    #[token("true")]
    TrueLiteral,
    /// Boolean literal `false`
    #[token("false")]
    FalseLiteral,

    // === Punctuation ===
    /// Delimiter `{`
    #[token("{")]
    LBrace,
    /// Delimiter `}`
    #[token("}")]
    RBrace,
    /// Delimiter `(`
    #[token("(")]
    LParen,
    /// Delimiter `)`
    #[token(")")]
    RParen,
    /// Separator `,`
    #[token(",")]
    Comma,
    /// Type annotation `:`
    #[token(":")]
    Colon,
    /// Assignment `:=`
    #[token(":=")]
    AssemblyAssign,
    /// Return list marker `->`
    #[token("->")]
    Arrow,
    /// Stray `.` outside an identifier
    #[token(".")]
    Period,

    // === Literals ===
    /// Number candidate (e.g. `42`, `0xff`).
    ///
    /// The pattern is deliberately loose (`1.5`, `0123abc`) so malformed
    /// numbers reach the parser, which owns number-literal validation.
    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9a-zA-Z_]+)?")]
    Number,

    /// String literal, double or single quoted.
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#)]
    StringLiteral,

    /// Identifier (e.g. `x`, `_tmp`, `$slot`).
    ///
    /// Dotted names (`a.b`) are stitched together by the scanner when the
    /// period mode is on.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,

    /// Block comment `/* ... */`; skipped, never produced.
    ///
    /// An unterminated comment lexes as an error covering the rest of the
    /// input.
    #[token("/*", block_comment)]
    BlockComment,

    // === Produced by the scanner only ===
    /// Text the lexer could not classify, or a string with a bad escape.
    Illegal,
    /// End of input.
    EndOfStream,
}

/// Token string lookup table, indexed by discriminant.
///
/// NOTE: The `#[token("...")]` attributes above must match these strings.
const TOKEN_STRINGS: &[&str] = &[
    "let",
    "function",
    "if",
    "switch",
    "case",
    "default",
    "for",
    "break",
    "continue", // keywords
    "return",
    "byte",
    "bool",
    "address", // reserved names
    "true",
    "false", // booleans
    "{",
    "}",
    "(",
    ")",
    ",",
    ":",
    ":=",
    "->",
    ".", // punctuation
    "number",
    "string literal",
    "identifier", // literals
    "comment",
    "illegal token",
    "end of source",
];

/// Consume a block comment body up to and including `*/`.
fn block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(())
        }
    }
}

impl Token {
    /// Display string for this token.
    pub fn as_str(self) -> &'static str {
        TOKEN_STRINGS[self as usize]
    }

    /// Whether the token is spelled as a word (identifier or keyword).
    ///
    /// Words are the tokens the scanner may extend with `.` parts.
    pub fn is_word(self) -> bool {
        matches!(
            self,
            Token::Identifier
                | Token::Let
                | Token::Function
                | Token::If
                | Token::Switch
                | Token::Case
                | Token::Default
                | Token::For
                | Token::Break
                | Token::Continue
                | Token::Return
                | Token::Byte
                | Token::Bool
                | Token::Address
                | Token::TrueLiteral
                | Token::FalseLiteral
        )
    }

    /// Whether the token carries source text worth echoing in diagnostics.
    pub fn has_literal(self) -> bool {
        matches!(
            self,
            Token::Identifier | Token::Number | Token::StringLiteral | Token::Illegal
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Identifier | Token::Number | Token::StringLiteral | Token::Illegal
            | Token::EndOfStream => f.write_str(self.as_str()),
            _ => write!(f, "'{}'", self.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test helper: lex source, failing on any lexer error.
    fn lex(source: &str) -> Vec<Token> {
        Token::lexer(source)
            .spanned()
            .map(|(result, span)| {
                result.unwrap_or_else(|()| panic!("Lex error at {:?} in {:?}", span, source))
            })
            .collect()
    }

    #[test]
    fn test_keywords() {
        let tokens = lex("let function if switch case default for break continue");
        assert_eq!(
            tokens,
            vec![
                Token::Let,
                Token::Function,
                Token::If,
                Token::Switch,
                Token::Case,
                Token::Default,
                Token::For,
                Token::Break,
                Token::Continue,
            ]
        );
    }

    #[test]
    fn test_leave_is_an_identifier() {
        assert_eq!(lex("leave"), vec![Token::Identifier]);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex("letter lets"), vec![Token::Identifier, Token::Identifier]);
    }

    #[test]
    fn test_identifiers() {
        let tokens = lex("x _tmp $slot a1");
        assert_eq!(tokens, vec![Token::Identifier; 4]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(lex("42 0x1A 1.5 0123abc"), vec![Token::Number; 4]);
    }

    #[test]
    fn test_strings() {
        let tokens = lex(r#""hello" 'world' "a\"b""#);
        assert_eq!(tokens, vec![Token::StringLiteral; 3]);
    }

    #[test]
    fn test_assignment_versus_colon() {
        assert_eq!(
            lex("x:u256 := 1:u256"),
            vec![
                Token::Identifier,
                Token::Colon,
                Token::Identifier,
                Token::AssemblyAssign,
                Token::Number,
                Token::Colon,
                Token::Identifier,
            ]
        );
    }

    #[test]
    fn test_function_header() {
        assert_eq!(
            lex("function f(a) -> r { }"),
            vec![
                Token::Function,
                Token::Identifier,
                Token::LParen,
                Token::Identifier,
                Token::RParen,
                Token::Arrow,
                Token::Identifier,
                Token::LBrace,
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let source = "{ // line\n /* block ** with stars */ x }";
        assert_eq!(
            lex(source),
            vec![Token::LBrace, Token::Identifier, Token::RBrace]
        );
    }

    #[test]
    fn test_block_comment_forms() {
        for source in ["/*a*/ x", "/* a\n b */ x", "/* a **/ x", "/**/ x", "/* // */ x"] {
            assert_eq!(lex(source), vec![Token::Identifier], "{source:?}");
        }
    }

    #[test]
    fn test_comment_ends_at_first_close() {
        assert_eq!(
            lex("/* /* */ x /**/ y"),
            vec![Token::Identifier, Token::Identifier]
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_error() {
        let results: Vec<_> = Token::lexer("x /* open").spanned().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, Ok(Token::Identifier));
        assert_eq!(results[1], (Err(()), 2..9));
    }

    #[test]
    fn test_lexer_error_detection() {
        let results: Vec<_> = Token::lexer("x @ y").collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    /// Verify that TOKEN_STRINGS matches token definitions.
    #[test]
    fn test_token_string_consistency() {
        assert_eq!(Token::Let.as_str(), "let");
        assert_eq!(Token::Continue.as_str(), "continue");
        assert_eq!(Token::Address.as_str(), "address");
        assert_eq!(Token::FalseLiteral.as_str(), "false");
        assert_eq!(Token::AssemblyAssign.as_str(), ":=");
        assert_eq!(Token::Period.as_str(), ".");
        assert_eq!(Token::EndOfStream.as_str(), "end of source");
        assert_eq!(TOKEN_STRINGS.len(), Token::EndOfStream as usize + 1);
    }

    #[test]
    fn test_display_quotes_punctuation() {
        assert_eq!(Token::LBrace.to_string(), "'{'");
        assert_eq!(Token::Identifier.to_string(), "identifier");
    }
}
