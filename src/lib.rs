pub mod error;
pub mod evaluator;
pub mod format;
pub mod functions;
pub mod numeric;
pub mod parser;
pub mod token;

use std::collections::HashMap;

pub use error::{Error, EvaluationError, LexicalError, ParseError, SyntaxError};
pub use evaluator::{evaluate_postfix, Evaluator};
pub use parser::{ParsedExpression, Parser};
pub use token::{tokenize, Token, TokenKind, Tokenizer};

/// Tokenizes, validates and converts `expression` to postfix form.
pub fn parse(expression: &str) -> Result<ParsedExpression, ParseError> {
    Parser::new().parse(expression)
}

/// Parses `expression` and evaluates it with the given variable bindings.
pub fn evaluate(expression: &str, variables: &HashMap<String, f64>) -> Result<f64, Error> {
    let parsed = parse(expression).map_err(|e| Error::parse(expression, e))?;
    evaluate_postfix(parsed.postfix(), variables).map_err(|e| Error::evaluation(expression, e))
}
