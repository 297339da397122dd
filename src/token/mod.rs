use std::fmt;

mod tokenizer;

pub use tokenizer::{tokenize, Tokenizer};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Variable,
    Constant,
    Operator,
    Function,
    LeftParen,
    RightParen,
    Comma,
    End,
    /// A `+` or `-` in prefix position. Never produced by the tokenizer; the postfix converter
    /// rewrites prefix operators into signs.
    Sign,
}

impl TokenKind {
    /// Numbers, variables and constants: tokens that push a value in postfix form.
    pub fn is_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Variable | TokenKind::Constant
        )
    }
}

/// A single lexeme of an expression.
///
/// `position` is the byte offset of the lexeme in the original input, whitespace included,
/// so it can be pointed at directly when reporting errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn end(position: usize) -> Self {
        Self::new(TokenKind::End, "", position)
    }

    /// The same lexeme reinterpreted as a prefix sign.
    pub fn into_sign(self) -> Self {
        Self {
            kind: TokenKind::Sign,
            ..self
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The operator descriptor for an `Operator` token.
    pub fn operator(&self) -> Option<Operator> {
        if self.kind == TokenKind::Operator {
            Operator::try_from(self.text.as_str()).ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "END"),
            TokenKind::Sign => write!(f, "u{}", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Whether `self`, sitting on the operator stack, must be emitted before `incoming` is pushed.
    pub fn yields_to(&self, incoming: Operator) -> bool {
        self.precedence() > incoming.precedence()
            || (self.precedence() == incoming.precedence()
                && incoming.associativity() == Associativity::Left)
    }

    /// Division by zero and invalid powers follow IEEE semantics and are not errors.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => left.powf(right),
        }
    }

    /// Prefix application; only `+` and `-` can be used as signs.
    pub fn apply_sign(&self, operand: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(operand),
            Operator::Subtract => Some(-operand),
            _ => None,
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            "^" | "**" => Ok(Operator::Power),
            _ => Err(format!("Unknown operator: {}", value)),
        }
    }
}
