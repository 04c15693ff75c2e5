//! Tokenizer for sprig source code
//!
//! Produces one [`Token`] at a time on demand. The remaining input is matched
//! against an ordered table of anchored regular expressions and the first rule
//! that matches wins, so the order of [`RULES`] is significant:
//!
//! - keywords are whole-word matches tried before the generic identifier rule
//! - the numeric rule precedes the identifier rule so `42` is a number
//! - `==`/`!=` precede `=` and `!`, compound assignments precede `+ - * /`
//!
//! Whitespace and `//` line comments match rules without a token kind and are
//! skipped. The cursor only moves forward.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::trace;

/// Token classes produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    LBrace,    // {
    RBrace,    // }
    LParen,    // (
    RParen,    // )
    Semicolon, // ;
    Comma,     // ,

    // Keywords
    Int,
    If,
    Else,
    True,
    False,
    Null,
    While,
    Do,
    For,

    // Literals
    Number,
    String,

    Identifier,

    // Operator classes
    Equality,          // == !=
    SimpleAssignment,  // =
    ComplexAssignment, // += -= *= /=
    Additive,          // + -
    Multiplicative,    // * /
    Relational,        // < > <= >=
    LogicalAnd,        // &&
    LogicalOr,         // ||
    LogicalNot,        // !
}

impl TokenKind {
    /// Whether this kind starts a `Literal` production.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Whether this kind is an assignment operator class.
    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            TokenKind::SimpleAssignment | TokenKind::ComplexAssignment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Int => write!(f, "'int'"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::Null => write!(f, "'null'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Do => write!(f, "'do'"),
            TokenKind::For => write!(f, "'for'"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Equality => write!(f, "equality operator"),
            TokenKind::SimpleAssignment => write!(f, "'='"),
            TokenKind::ComplexAssignment => write!(f, "compound assignment"),
            TokenKind::Additive => write!(f, "additive operator"),
            TokenKind::Multiplicative => write!(f, "multiplicative operator"),
            TokenKind::Relational => write!(f, "relational operator"),
            TokenKind::LogicalAnd => write!(f, "'&&'"),
            TokenKind::LogicalOr => write!(f, "'||'"),
            TokenKind::LogicalNot => write!(f, "'!'"),
        }
    }
}

/// A classified slice of source text.
///
/// `text` is the exact matched text; string literals keep their quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

/// Tokenizer error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("Unrecognized character '{character}' at offset {position}")]
    UnrecognizedCharacter { character: char, position: usize },
}

/// One lexical rule: an anchored pattern and the kind it produces.
/// Rules without a kind are skipped.
struct Rule {
    pattern: Regex,
    kind: Option<TokenKind>,
}

fn rule(pattern: &str, kind: Option<TokenKind>) -> Rule {
    Rule {
        pattern: Regex::new(pattern).unwrap(),
        kind,
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    use TokenKind::*;

    vec![
        // Whitespace and comments
        rule(r"^\s+", None),
        rule(r"^//.*", None),
        // Punctuation
        rule(r"^;", Some(Semicolon)),
        rule(r"^\{", Some(LBrace)),
        rule(r"^\}", Some(RBrace)),
        rule(r"^\(", Some(LParen)),
        rule(r"^\)", Some(RParen)),
        rule(r"^,", Some(Comma)),
        // Keywords
        rule(r"^\bint\b", Some(Int)),
        rule(r"^\bif\b", Some(If)),
        rule(r"^\belse\b", Some(Else)),
        rule(r"^\btrue\b", Some(True)),
        rule(r"^\bfalse\b", Some(False)),
        rule(r"^\bnull\b", Some(Null)),
        rule(r"^\bwhile\b", Some(While)),
        rule(r"^\bdo\b", Some(Do)),
        rule(r"^\bfor\b", Some(For)),
        // Numbers before identifiers
        rule(r"^[0-9]+", Some(Number)),
        rule(r"^[A-Za-z0-9_]+", Some(Identifier)),
        // Operators
        rule(r"^[=!]=", Some(Equality)),
        rule(r"^=", Some(SimpleAssignment)),
        rule(r"^[*/+\-]=", Some(ComplexAssignment)),
        rule(r"^[+\-]", Some(Additive)),
        rule(r"^[*/]", Some(Multiplicative)),
        rule(r"^[<>]=?", Some(Relational)),
        rule(r"^&&", Some(LogicalAnd)),
        rule(r"^\|\|", Some(LogicalOr)),
        rule(r"^!", Some(LogicalNot)),
        // Strings, no escapes
        rule(r#"^"[^"]*""#, Some(String)),
        rule(r"^'[^']*'", Some(String)),
    ]
});

/// On-demand tokenizer over a single source string
#[derive(Debug, Default)]
pub struct Tokenizer {
    source: String,
    cursor: usize,
    failed: bool,
}

impl Tokenizer {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        let mut tokenizer = Self::default();
        tokenizer.initialize(source);
        tokenizer
    }

    /// Reset the cursor to the start of `source`.
    pub fn initialize(&mut self, source: &str) {
        self.source.clear();
        self.source.push_str(source);
        self.cursor = 0;
        self.failed = false;
    }

    /// Whether any unscanned input remains (which may still be only
    /// whitespace or comments).
    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Byte offset of the next unscanned character
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Scan the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        'scan: while self.has_more_tokens() {
            let rest = &self.source[self.cursor..];

            for rule in RULES.iter() {
                let Some(matched) = rule.pattern.find(rest) else {
                    continue;
                };
                let text = matched.as_str();
                self.cursor += text.len();

                match rule.kind {
                    None => continue 'scan,
                    Some(kind) => {
                        trace!(?kind, text, "token");
                        return Ok(Some(Token::new(kind, text)));
                    }
                }
            }

            // Only reachable when no rule matched; rest is non-empty here
            let character = rest.chars().next().unwrap_or_default();
            return Err(LexError::UnrecognizedCharacter {
                character,
                position: self.cursor,
            });
        }

        Ok(None)
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.next_token().transpose();
        if matches!(result, Some(Err(_))) {
            self.failed = true;
        }
        result
    }
}
