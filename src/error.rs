use thiserror::Error;

/// Raised only by a strict [`Tokenizer`](crate::token::Tokenizer); the default tokenizer skips
/// characters it does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Unmatched closing parenthesis at position {position}")]
    UnmatchedClosingParenthesis { position: usize },
    #[error("Unmatched parentheses")]
    UnmatchedParentheses { position: usize },
    #[error("Consecutive operators at position {position}")]
    ConsecutiveOperators { position: usize },
    #[error("Invalid function call at position {position}")]
    InvalidFunctionCall { position: usize },
    #[error("Expression cannot end with an operator")]
    TrailingOperator { position: usize },
}

impl SyntaxError {
    /// Byte offset of the offending token, if the error points at one.
    pub fn position(&self) -> Option<usize> {
        match self {
            SyntaxError::EmptyExpression => None,
            SyntaxError::UnmatchedClosingParenthesis { position }
            | SyntaxError::UnmatchedParentheses { position }
            | SyntaxError::ConsecutiveOperators { position }
            | SyntaxError::InvalidFunctionCall { position }
            | SyntaxError::TrailingOperator { position } => Some(*position),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("Unknown constant: {0}")]
    UnknownConstant(String),
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Insufficient operands for operator {0}")]
    InsufficientOperands(String),
    #[error("Insufficient arguments for function {0}")]
    InsufficientArguments(String),
    #[error("Invalid expression: {0}")]
    MalformedExpression(String),
}

/// Failure of a full parse/evaluate cycle, carrying the expression it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Failed to parse '{expression}': {source}")]
    Parse {
        expression: String,
        source: ParseError,
    },
    #[error("Failed to evaluate '{expression}': {source}")]
    Evaluation {
        expression: String,
        source: EvaluationError,
    },
}

impl Error {
    pub fn parse(expression: &str, source: impl Into<ParseError>) -> Self {
        Error::Parse {
            expression: expression.to_string(),
            source: source.into(),
        }
    }

    pub fn evaluation(expression: &str, source: EvaluationError) -> Self {
        Error::Evaluation {
            expression: expression.to_string(),
            source,
        }
    }

    pub fn expression(&self) -> &str {
        match self {
            Error::Parse { expression, .. } | Error::Evaluation { expression, .. } => expression,
        }
    }
}
