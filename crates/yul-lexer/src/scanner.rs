//! One-token-lookahead cursor over a Yul source.

use crate::Token;
use logos::Logos;
use smol_str::SmolStr;
use std::ops::Range;
use yul_ast::Span;

/// Scanner with a current token and a lexical mode toggle.
///
/// The scanner always holds the token under the cursor together with its
/// literal text and span. Once the end of the source is reached it keeps
/// reporting [`Token::EndOfStream`].
///
/// # Period mode
///
/// Yul names may contain dots (`abi.encode`, `x.slot`). While the mode is
/// on, a word followed directly by `.`-joined parts is scanned as a single
/// [`Token::Identifier`]. The mode affects tokens scanned after it is set,
/// never the current one.
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Token>,
    source_id: u16,
    period_in_identifier: bool,
    token: Token,
    literal: SmolStr,
    range: Range<usize>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned on the first token of `source`.
    pub fn new(source: &'src str, source_id: u16) -> Self {
        let mut scanner = Self {
            lexer: Token::lexer(source),
            source_id,
            period_in_identifier: false,
            token: Token::EndOfStream,
            literal: SmolStr::default(),
            range: 0..0,
        };
        scanner.advance();
        scanner
    }

    /// Kind of the current token.
    pub fn current_token(&self) -> Token {
        self.token
    }

    /// Text of the current token.
    ///
    /// For string literals this is the unescaped content without quotes.
    pub fn current_literal(&self) -> &str {
        &self.literal
    }

    /// Span of the current token.
    pub fn current_span(&self) -> Span {
        Span::new(self.source_id, self.range.start as u32, self.range.end as u32)
    }

    /// Full source text being scanned.
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    pub fn source_id(&self) -> u16 {
        self.source_id
    }

    pub fn supports_period_in_identifier(&self) -> bool {
        self.period_in_identifier
    }

    pub fn set_period_in_identifier(&mut self, enabled: bool) {
        self.period_in_identifier = enabled;
    }

    /// Move to the next token and return its kind.
    pub fn advance(&mut self) -> Token {
        let (token, literal) = match self.lexer.next() {
            None => {
                let end = self.lexer.source().len();
                self.range = end..end;
                (Token::EndOfStream, SmolStr::default())
            }
            Some(Err(())) => (Token::Illegal, SmolStr::new(self.lexer.slice())),
            Some(Ok(token)) => {
                let token = if token.is_word() && self.period_in_identifier {
                    self.extend_dotted_word(token)
                } else {
                    token
                };
                self.literal_for(token)
            }
        };
        if token != Token::EndOfStream {
            self.range = self.lexer.span();
        }
        self.token = token;
        self.literal = literal;
        token
    }

    /// Pull `.`-joined parts into the current word.
    ///
    /// Any extension turns the word into an identifier, so `let.x` names a
    /// variable rather than starting a declaration.
    fn extend_dotted_word(&mut self, token: Token) -> Token {
        let extra = self
            .lexer
            .remainder()
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'.'))
            .count();
        if extra == 0 {
            return token;
        }
        self.lexer.bump(extra);
        Token::Identifier
    }

    fn literal_for(&self, token: Token) -> (Token, SmolStr) {
        let slice = self.lexer.slice();
        match token {
            Token::StringLiteral => match unescape_string(&slice[1..slice.len() - 1]) {
                Some(content) => (token, SmolStr::new(content)),
                None => (Token::Illegal, SmolStr::new(slice)),
            },
            _ => (token, SmolStr::new(slice)),
        }
    }
}

/// Unescape string literal content.
///
/// Supports `\\ \" \' \n \r \t \b \f \v \0`, `\xNN` and `\uNNNN`.
/// Returns `None` for unknown escapes or truncated sequences.
pub fn unescape_string(s: &str) -> Option<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next()? {
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            'b' => result.push('\u{8}'),
            'f' => result.push('\u{c}'),
            'v' => result.push('\u{b}'),
            '0' => result.push('\0'),
            '\\' => result.push('\\'),
            '"' => result.push('"'),
            '\'' => result.push('\''),
            'x' => result.push(char::from_u32(hex_digits(&mut chars, 2)?)?),
            'u' => result.push(char::from_u32(hex_digits(&mut chars, 4)?)?),
            _ => return None,
        }
    }
    Some(result)
}

fn hex_digits(chars: &mut std::str::Chars<'_>, count: usize) -> Option<u32> {
    let mut value = 0;
    for _ in 0..count {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(scanner: &mut Scanner) -> Vec<(Token, String)> {
        let mut out = Vec::new();
        while scanner.current_token() != Token::EndOfStream {
            out.push((scanner.current_token(), scanner.current_literal().to_string()));
            scanner.advance();
        }
        out
    }

    #[test]
    fn test_current_token_and_span() {
        let scanner = Scanner::new("  { }", 3);
        assert_eq!(scanner.current_token(), Token::LBrace);
        assert_eq!(scanner.current_literal(), "{");
        assert_eq!(scanner.current_span(), Span::new(3, 2, 3));
    }

    #[test]
    fn test_end_of_stream_is_sticky() {
        let mut scanner = Scanner::new("x", 0);
        assert_eq!(scanner.advance(), Token::EndOfStream);
        assert_eq!(scanner.advance(), Token::EndOfStream);
        assert_eq!(scanner.current_span(), Span::new(0, 1, 1));
    }

    #[test]
    fn test_period_mode_off_splits_names() {
        let mut scanner = Scanner::new("a.b", 0);
        let tokens: Vec<Token> = collect(&mut scanner).into_iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Identifier, Token::Period, Token::Identifier]);
    }

    #[test]
    fn test_period_mode_on_joins_names() {
        let mut scanner = Scanner::new("{ a.b.c let.x x.1 }", 0);
        scanner.set_period_in_identifier(true);
        scanner.advance();
        assert_eq!(
            collect(&mut scanner),
            vec![
                (Token::Identifier, "a.b.c".to_string()),
                (Token::Identifier, "let.x".to_string()),
                (Token::Identifier, "x.1".to_string()),
                (Token::RBrace, "}".to_string()),
            ]
        );
    }

    #[test]
    fn test_period_mode_keeps_keywords() {
        let mut scanner = Scanner::new("{ let x", 0);
        scanner.set_period_in_identifier(true);
        assert_eq!(scanner.advance(), Token::Let);
    }

    #[test]
    fn test_string_literal_is_unescaped() {
        let scanner = Scanner::new(r#""a\n\x41B""#, 0);
        assert_eq!(scanner.current_token(), Token::StringLiteral);
        assert_eq!(scanner.current_literal(), "a\nAB");
        assert_eq!(scanner.current_span(), Span::new(0, 0, 10));
    }

    #[test]
    fn test_bad_escape_is_illegal() {
        let scanner = Scanner::new(r#""\q""#, 0);
        assert_eq!(scanner.current_token(), Token::Illegal);
    }

    #[test]
    fn test_unlexable_input_is_illegal() {
        let scanner = Scanner::new("@", 0);
        assert_eq!(scanner.current_token(), Token::Illegal);
        assert_eq!(scanner.current_literal(), "@");
    }

    #[test]
    fn test_block_comments_produce_no_tokens() {
        for source in ["/*a*/ x", "/* a\n b */ x", "/* a **/ x"] {
            let mut scanner = Scanner::new(source, 0);
            assert_eq!(
                collect(&mut scanner),
                vec![(Token::Identifier, "x".to_string())],
                "{source:?}"
            );
        }
    }

    #[test]
    fn test_unterminated_comment_is_illegal() {
        let mut scanner = Scanner::new("x /* open", 0);
        assert_eq!(scanner.advance(), Token::Illegal);
        assert_eq!(scanner.current_span(), Span::new(0, 2, 9));
        assert_eq!(scanner.advance(), Token::EndOfStream);
    }

    #[test]
    fn test_unescape_string() {
        assert_eq!(unescape_string(r"a\\b").as_deref(), Some("a\\b"));
        assert_eq!(unescape_string(r"\x4"), None);
        assert_eq!(unescape_string("trailing\\"), None);
    }
}
