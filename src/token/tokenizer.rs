use crate::error::LexicalError;
use crate::functions::{Constant, Function};
use crate::token::{Token, TokenKind};
use log::{debug, trace};

/// Splits expressions into [`Token`]s.
///
/// By default characters that cannot start any token are dropped without complaint, so
/// `"2 $+ 3"` tokenizes the same as `"2 + 3"`. A strict tokenizer rejects them instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    strict: bool,
}

/// Tokenizes with the default, lenient, policy.
pub fn tokenize(expression: &str) -> Vec<Token> {
    Scanner::new(expression).run().tokens
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { strict: false }
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn tokenize(&self, expression: &str) -> Result<Vec<Token>, LexicalError> {
        let scan = Scanner::new(expression).run();

        if let Some(&(position, character)) = scan.skipped.first() {
            if self.strict {
                return Err(LexicalError::UnexpectedCharacter {
                    character,
                    position,
                });
            }
        }

        debug!("Tokenized '{}' into {} tokens", expression, scan.tokens.len());
        Ok(scan.tokens)
    }
}

struct Scan {
    tokens: Vec<Token>,
    skipped: Vec<(usize, char)>,
}

struct Scanner {
    /// Non-whitespace characters paired with their byte offset in the source.
    chars: Vec<(usize, char)>,
    cursor: usize,
    source_len: usize,
}

impl Scanner {
    fn new(expression: &str) -> Self {
        Self {
            chars: expression
                .char_indices()
                .filter(|(_, c)| !c.is_whitespace())
                .collect(),
            cursor: 0,
            source_len: expression.len(),
        }
    }

    fn run(mut self) -> Scan {
        let mut tokens = Vec::new();
        let mut skipped = Vec::new();

        while let Some(c) = self.peek() {
            let start = self.cursor;

            let kind = if c.is_ascii_digit() || c == '.' {
                self.scan_number();
                TokenKind::Number
            } else if c.is_alphabetic() {
                self.scan_identifier();
                classify_identifier(&self.text(start))
            } else if c == '*' && self.peek_at(1) == Some('*') {
                self.cursor += 2;
                TokenKind::Operator
            } else {
                self.cursor += 1;
                match c {
                    '+' | '-' | '*' | '/' | '^' => TokenKind::Operator,
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    ',' => TokenKind::Comma,
                    _ => {
                        let position = self.position(start);
                        trace!("Skipping unrecognised character {:?} at {}", c, position);
                        skipped.push((position, c));
                        continue;
                    }
                }
            };

            tokens.push(Token::new(kind, self.text(start), self.position(start)));
        }

        tokens.push(Token::end(self.source_len));
        Scan { tokens, skipped }
    }

    /// Digits with at most one decimal point, optionally followed by an exponent.
    ///
    /// An `e` that is not the final character always starts an exponent, even when no digits
    /// follow it; the resulting lexeme is then rejected when it is converted to a number.
    fn scan_number(&mut self) {
        let mut has_decimal = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.cursor += 1;
            } else if c == '.' && !has_decimal {
                has_decimal = true;
                self.cursor += 1;
            } else if (c == 'e' || c == 'E') && self.cursor + 1 < self.chars.len() {
                self.cursor += 1;
                if matches!(self.peek(), Some('+') | Some('-')) {
                    self.cursor += 1;
                }
                while matches!(self.peek(), Some(d) if d.is_ascii_digit()) {
                    self.cursor += 1;
                }
                break;
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.cursor += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.cursor + offset).map(|&(_, c)| c)
    }

    fn text(&self, start: usize) -> String {
        self.chars[start..self.cursor].iter().map(|&(_, c)| c).collect()
    }

    fn position(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map_or(self.source_len, |&(offset, _)| offset)
    }
}

fn classify_identifier(identifier: &str) -> TokenKind {
    if Function::from_name(identifier).is_some() {
        TokenKind::Function
    } else if Constant::from_name(identifier).is_some() {
        TokenKind::Constant
    } else {
        TokenKind::Variable
    }
}
