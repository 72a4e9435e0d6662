//! Token classification and description helpers shared across the parser.

use super::TokenSource;
use yul_lexer::Token;

/// Check whether a token can stand where an identifier is expected.
///
/// Besides plain identifiers, the reserved words `return`, `byte`, `bool`
/// and `address` are lexed as keywords but used as ordinary names (most
/// notably as instruction names in assembly dialects).
///
/// # Examples
/// ```
/// use yul_lexer::Token;
/// use yul_parser::parser::token_utils::is_identifier_like;
///
/// assert!(is_identifier_like(Token::Identifier));
/// assert!(is_identifier_like(Token::Return));
/// assert!(is_identifier_like(Token::Address));
/// assert!(!is_identifier_like(Token::Let));
/// assert!(!is_identifier_like(Token::TrueLiteral));
/// ```
pub fn is_identifier_like(token: Token) -> bool {
    matches!(
        token,
        Token::Identifier | Token::Return | Token::Byte | Token::Bool | Token::Address
    )
}

/// Check whether a token starts a literal.
pub fn is_literal_start(token: Token) -> bool {
    matches!(
        token,
        Token::StringLiteral | Token::Number | Token::TrueLiteral | Token::FalseLiteral
    )
}

/// Describe a token for a diagnostic, echoing its text when it has one.
///
/// # Examples
/// ```
/// use yul_lexer::Token;
/// use yul_parser::parser::token_utils::describe_token;
///
/// assert_eq!(describe_token(Token::RBrace, "}"), "'}'");
/// assert_eq!(describe_token(Token::Identifier, "foo"), "identifier \"foo\"");
/// assert_eq!(describe_token(Token::EndOfStream, ""), "end of source");
/// ```
pub fn describe_token(token: Token, literal: &str) -> String {
    if token.has_literal() {
        format!("{token} \"{literal}\"")
    } else {
        token.to_string()
    }
}

/// Describe the token under the cursor of `stream`.
pub fn describe_current(stream: &dyn TokenSource) -> String {
    describe_token(stream.current_token(), stream.current_literal())
}
