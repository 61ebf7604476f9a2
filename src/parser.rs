use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::{
    ast::{BinOp, Expr, Keyword, Query, Token},
    lexer::{Lexer, Spanned},
    value::Value,
};

/// Decimal number: optional sign, digits with an optional fraction (either
/// side of the dot may be empty, not both), optional exponent.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric literal pattern is valid")
});

/// Why a query string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("query is empty")]
    Empty,

    #[error("query must start with SELECT followed by a field list")]
    MissingSelect,

    #[error("missing FROM clause after the field list")]
    MissingFrom,
}

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Spanned>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let source = lexer.source();
        Parser {
            source,
            tokens: lexer.collect(),
        }
    }

    /// True when the token at `index` is `keyword` with exactly one space on
    /// each side, all before `limit`.
    fn is_delimiter(&self, index: usize, keyword: Keyword, limit: usize) -> bool {
        index > 0
            && index + 1 < limit
            && self.tokens[index - 1].token == Token::Space
            && self.tokens[index].token == Token::Keyword(keyword)
            && self.tokens[index + 1].token == Token::Space
    }

    fn find_delimiter(&self, keyword: Keyword, limit: usize) -> Option<usize> {
        (1..limit).find(|&i| self.is_delimiter(i, keyword, limit))
    }

    fn text(&self, start: usize, end: usize) -> &'a str {
        if start < end { &self.source[start..end] } else { "" }
    }

    /// Parse a complete query.
    ///
    /// Clauses are separated by ` FROM ` and ` WHERE ` with exactly one space
    /// on each side. Only a missing `SELECT` or `FROM` is an error; a WHERE
    /// clause that is not exactly `field operator literal` is dropped and the
    /// query runs unfiltered.
    pub fn parse(&mut self) -> Result<Query, ParseError> {
        let select = self.parse_select()?;
        let end = self.tokens.len();
        let last = self.tokens[end - 1].span.end;

        let where_at = self.find_delimiter(Keyword::Where, end);
        // The select clause stops before the space that opens ` WHERE `
        let clause_len = where_at.map_or(end, |i| i - 1);
        let clause_end = where_at.map_or(last, |i| self.tokens[i - 1].span.start);

        let from_at = self
            .find_delimiter(Keyword::From, clause_len)
            .ok_or(ParseError::MissingFrom)?;

        let fields = self.parse_field_list(select, self.tokens[from_at - 1].span.start);
        let source = self
            .text(self.tokens[from_at + 1].span.end, clause_end)
            .trim()
            .to_string();

        let predicate = where_at
            .and_then(|i| self.parse_predicate(self.text(self.tokens[i + 1].span.end, last)));

        Ok(Query {
            fields,
            source,
            predicate,
        })
    }

    /// Checks for a leading `SELECT ` and returns where the field list starts.
    fn parse_select(&self) -> Result<usize, ParseError> {
        match self.tokens.as_slice() {
            [] => Err(ParseError::Empty),
            [
                Spanned {
                    token: Token::Keyword(Keyword::Select),
                    ..
                },
                Spanned {
                    token: Token::Space,
                    span,
                },
                ..,
            ] => Ok(span.end),
            _ => Err(ParseError::MissingSelect),
        }
    }

    fn parse_field_list(&self, start: usize, end: usize) -> Vec<String> {
        // `SELECT FROM data` shares one space between the keywords
        self.text(start, end)
            .split(',')
            .map(|f| f.trim().to_string())
            .collect()
    }

    fn parse_predicate(&self, clause: &str) -> Option<Expr> {
        let words: Vec<&str> = clause.split(' ').collect();

        match words.as_slice() {
            [field, op, literal] => Some(Expr::binary(
                BinOp::from_token(op),
                Expr::field(*field),
                Expr::Literal(parse_literal(literal)),
            )),
            _ => {
                debug!(
                    tokens = words.len(),
                    clause,
                    "WHERE clause is not `field operator literal`; ignoring it"
                );
                None
            }
        }
    }
}

/// Turns a WHERE literal token into a value.
///
/// Decimal numbers become `Number`; everything else is a `String` with all
/// quote characters removed.
pub fn parse_literal(token: &str) -> Value {
    if NUMBER.is_match(token)
        && let Ok(n) = token.parse::<f64>()
    {
        return Value::Number(n);
    }
    Value::String(token.chars().filter(|c| !matches!(c, '"' | '\'')).collect())
}

/// Parses a query string, returning `None` when it is not a valid query.
///
/// # Examples
///
/// ```
/// use selq::parser::parse_query;
///
/// let query = parse_query("SELECT name, age FROM data WHERE age > 30").unwrap();
/// assert_eq!(query.fields, vec!["name", "age"]);
/// assert!(query.predicate.is_some());
///
/// assert!(parse_query("name FROM data").is_none());
/// ```
pub fn parse_query(text: &str) -> Option<Query> {
    match Parser::new(Lexer::new(text)).parse() {
        Ok(query) => Some(query),
        Err(e) => {
            debug!(error = %e, "query did not parse");
            None
        }
    }
}
