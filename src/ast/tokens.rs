/// Clause keywords. Matched case-insensitively, only as whole words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `SELECT`
    Select,
    /// `FROM`
    From,
    /// `WHERE`
    Where,
}

impl Keyword {
    pub fn lookup(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("select") {
            Some(Keyword::Select)
        } else if word.eq_ignore_ascii_case("from") {
            Some(Keyword::From)
        } else if word.eq_ignore_ascii_case("where") {
            Some(Keyword::Where)
        } else {
            None
        }
    }
}

/// Lexical tokens of a query string.
///
/// The grammar is word based: a word is a maximal run of characters other
/// than the ASCII space, and every single space is a token of its own so
/// clause boundaries can require exactly one space on each side. Commas and
/// operators stay inside the words they appear in; the parser slices the
/// clause text itself where it needs finer detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `SELECT`, `FROM` or `WHERE` in any letter case
    ///
    /// # Examples
    /// ```text
    /// SELECT
    /// from
    /// Where
    /// ```
    Keyword(Keyword),

    /// Any other word
    ///
    /// # Examples
    /// ```text
    /// name,score
    /// >
    /// "Alice"
    /// ```
    Word(String),

    /// One ASCII space
    Space,

    /// End of input
    Eof,
}
