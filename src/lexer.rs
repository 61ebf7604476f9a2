use crate::ast::{Keyword, Token};

/// Byte range of a token in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A token together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

/// Splits a query into words and single spaces.
///
/// Leading and trailing whitespace is skipped. Inside the query only the
/// ASCII space separates words; tabs and newlines are ordinary characters.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    end: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let start = input.len() - input.trim_start().len();
        let end = input.trim_end().len().max(start);
        Lexer {
            input,
            position: start,
            end,
        }
    }

    /// The full text being tokenized, spans index into it.
    pub fn source(&self) -> &'a str {
        self.input
    }

    /// The exact text a span covers.
    pub fn slice(&self, span: Span) -> &'a str {
        &self.input[span.start..span.end]
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..self.end].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn read_word(&mut self) -> Span {
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if ch == ' ' {
                break;
            }
            self.advance();
        }
        Span {
            start,
            end: self.position,
        }
    }

    pub fn next_token(&mut self) -> Spanned {
        let start = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some(' ') => {
                self.advance();
                Token::Space
            }
            Some(_) => {
                let span = self.read_word();
                let word = self.slice(span);
                match Keyword::lookup(word) {
                    Some(keyword) => Token::Keyword(keyword),
                    None => Token::Word(word.to_string()),
                }
            }
        };

        Spanned {
            token,
            span: Span {
                start,
                end: self.position,
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Spanned> {
        match self.next_token() {
            Spanned {
                token: Token::Eof, ..
            } => None,
            spanned => Some(spanned),
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("select FROM Where");
    assert_eq!(lexer.next_token().token, Token::Keyword(Keyword::Select));
    assert_eq!(lexer.next_token().token, Token::Space);
    assert_eq!(lexer.next_token().token, Token::Keyword(Keyword::From));
    assert_eq!(lexer.next_token().token, Token::Space);
    assert_eq!(lexer.next_token().token, Token::Keyword(Keyword::Where));
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_every_space_is_a_token() {
    let mut lexer = Lexer::new("  a  >\tb ");
    assert_eq!(lexer.next_token().token, Token::Word("a".to_string()));
    assert_eq!(lexer.next_token().token, Token::Space);
    assert_eq!(lexer.next_token().token, Token::Space);
    assert_eq!(lexer.next_token().token, Token::Word(">\tb".to_string()));
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_spans_are_byte_offsets() {
    let mut lexer = Lexer::new("héllo wörld");
    let first = lexer.next_token();
    lexer.next_token();
    let third = lexer.next_token();
    assert_eq!(first.span, Span { start: 0, end: 6 });
    assert_eq!(lexer.slice(third.span), "wörld");
}
