use crate::error::ParseError;
use crate::token::{Token, TokenKind, Tokenizer};
use log::debug;
use std::fmt;

mod shunting_yard;
mod validator;

pub use shunting_yard::to_postfix;
pub use validator::validate;

/// Result of a successful parse: the infix tokens (terminated by `End`) and their postfix form.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpression {
    tokens: Vec<Token>,
    postfix: Vec<Token>,
}

impl ParsedExpression {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Number of tokens excluding the trailing `End`.
    pub fn token_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| !t.is(TokenKind::End))
            .count()
    }

    pub fn postfix_len(&self) -> usize {
        self.postfix.len()
    }

    pub fn into_postfix(self) -> Vec<Token> {
        self.postfix
    }
}

/// Postfix form, space separated: `2 3 4 * +`.
impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.postfix.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    tokenizer: Tokenizer,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser that rejects characters the tokenizer does not recognise.
    pub fn strict() -> Self {
        Self::with_tokenizer(Tokenizer::strict())
    }

    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    pub fn parse(&self, expression: &str) -> Result<ParsedExpression, ParseError> {
        debug!("Parsing expression: {}", expression);
        let tokens = self.tokenizer.tokenize(expression)?;
        validate(&tokens)?;

        let postfix = to_postfix(&tokens);
        let parsed = ParsedExpression { tokens, postfix };
        debug!("Postfix: {}", parsed);

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, EvaluationError, LexicalError, SyntaxError};
    use std::collections::HashMap;

    #[test]
    fn test_parse_simple_arithmetic() {
        let parsed = Parser::new().parse("2 + 3 * 4").unwrap();

        let kinds: Vec<TokenKind> = parsed.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::End,
            ]
        );
        assert_eq!(parsed.to_string(), "2 3 4 * +");
        assert_eq!(parsed.token_count(), 5);
        assert_eq!(parsed.postfix_len(), 5);
    }

    #[test]
    fn test_postfix_length_counts_values_operators_and_functions() {
        // 3 operands, 2 operators, 2 functions; 4 parentheses disappear.
        let parsed = Parser::new().parse("sin(x) * cos(y) + 1").unwrap();
        assert_eq!(parsed.token_count(), 11);
        assert_eq!(parsed.postfix_len(), 3 + 2 + 2);
        assert_eq!(parsed.to_string(), "x sin y cos * 1 +");
    }

    #[test]
    fn test_parse_rejects_invalid_syntax() {
        assert_eq!(
            Parser::new().parse("2 + + 3"),
            Err(ParseError::Syntax(SyntaxError::ConsecutiveOperators {
                position: 4
            }))
        );
        assert_eq!(
            Parser::new().parse(""),
            Err(ParseError::Syntax(SyntaxError::EmptyExpression))
        );
    }

    #[test]
    fn test_strict_parser() {
        assert_eq!(
            Parser::strict().parse("2 # 3"),
            Err(ParseError::Lexical(LexicalError::UnexpectedCharacter {
                character: '#',
                position: 2
            }))
        );
        // Lenient parsing drops the '#' but the digits stay separate numbers.
        assert_eq!(Parser::new().parse("2 # 3").unwrap().to_string(), "2 3");
        assert!(matches!(
            crate::evaluate("2 # 3", &HashMap::new()),
            Err(Error::Evaluation {
                source: EvaluationError::MalformedExpression(_),
                ..
            })
        ));
    }

    #[test]
    fn test_into_postfix() {
        let postfix = Parser::new().parse("a ^ b").unwrap().into_postfix();
        let texts: Vec<&str> = postfix.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "^"]);
    }
}
