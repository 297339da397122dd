use crate::error::EvaluationError;
use crate::functions::{Constant, Function};
use crate::token::{Operator, Token, TokenKind};
use log::debug;
use std::collections::HashMap;

/// Reduces a postfix token sequence to a single value.
pub fn evaluate_postfix(
    postfix: &[Token],
    variables: &HashMap<String, f64>,
) -> Result<f64, EvaluationError> {
    PostfixExecutor::new(variables).execute(postfix)
}

struct PostfixExecutor<'a> {
    stack: Vec<f64>,
    variables: &'a HashMap<String, f64>,
}

impl<'a> PostfixExecutor<'a> {
    fn new(variables: &'a HashMap<String, f64>) -> Self {
        Self {
            stack: Vec::new(),
            variables,
        }
    }

    fn execute(mut self, postfix: &[Token]) -> Result<f64, EvaluationError> {
        for token in postfix {
            match token.kind {
                TokenKind::Number => {
                    let value = token
                        .text
                        .parse::<f64>()
                        .map_err(|_| EvaluationError::InvalidNumber(token.text.clone()))?;
                    self.stack.push(value);
                }

                TokenKind::Variable => {
                    let value = self
                        .variables
                        .get(&token.text)
                        .copied()
                        .ok_or_else(|| EvaluationError::UndefinedVariable(token.text.clone()))?;
                    debug!("Variable {} = {}", token.text, value);
                    self.stack.push(value);
                }

                TokenKind::Constant => {
                    let constant = Constant::from_name(&token.text)
                        .ok_or_else(|| EvaluationError::UnknownConstant(token.text.clone()))?;
                    self.stack.push(constant.value());
                }

                TokenKind::Operator => self.binary_op(token)?,

                TokenKind::Sign => self.sign(token)?,

                TokenKind::Function => self.unary_op(token)?,

                TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::Comma
                | TokenKind::End => {
                    return Err(EvaluationError::MalformedExpression(format!(
                        "unexpected '{}' at position {}",
                        token, token.position
                    )))
                }
            }
        }

        match self.stack.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvaluationError::MalformedExpression(
                "no value produced".to_string(),
            )),
            values => Err(EvaluationError::MalformedExpression(format!(
                "{} values remaining, expected 1",
                values.len()
            ))),
        }
    }

    fn binary_op(&mut self, token: &Token) -> Result<(), EvaluationError> {
        if self.stack.len() < 2 {
            return Err(EvaluationError::InsufficientOperands(token.text.clone()));
        }
        let operator = Operator::try_from(token.text.as_str())
            .map_err(|_| EvaluationError::UnknownOperator(token.text.clone()))?;

        let (b, a) = (self.pop()?, self.pop()?);
        self.stack.push(operator.apply(a, b));
        Ok(())
    }

    fn sign(&mut self, token: &Token) -> Result<(), EvaluationError> {
        let operand = self
            .stack
            .pop()
            .ok_or_else(|| EvaluationError::InsufficientOperands(token.text.clone()))?;
        let value = Operator::try_from(token.text.as_str())
            .ok()
            .and_then(|op| op.apply_sign(operand))
            .ok_or_else(|| EvaluationError::UnknownOperator(token.text.clone()))?;
        self.stack.push(value);
        Ok(())
    }

    /// Functions take exactly one argument; anything else left on the stack is reported once
    /// the whole sequence has been consumed.
    fn unary_op(&mut self, token: &Token) -> Result<(), EvaluationError> {
        let function = Function::from_name(&token.text)
            .filter(Function::is_evaluable)
            .ok_or_else(|| EvaluationError::UnknownFunction(token.text.clone()))?;

        let argument = self
            .stack
            .pop()
            .ok_or_else(|| EvaluationError::InsufficientArguments(token.text.clone()))?;

        let value = function
            .apply(argument)
            .ok_or_else(|| EvaluationError::UnknownFunction(token.text.clone()))?;
        self.stack.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<f64, EvaluationError> {
        self.stack
            .pop()
            .ok_or_else(|| EvaluationError::MalformedExpression("stack underflow".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> Token {
        Token::new(TokenKind::Number, text, 0)
    }

    fn operator(text: &str) -> Token {
        Token::new(TokenKind::Operator, text, 0)
    }

    fn function(text: &str) -> Token {
        Token::new(TokenKind::Function, text, 0)
    }

    fn run(postfix: &[Token]) -> Result<f64, EvaluationError> {
        evaluate_postfix(postfix, &HashMap::new())
    }

    #[test]
    fn test_operand_order() {
        assert_eq!(run(&[number("10"), number("4"), operator("-")]), Ok(6.0));
        assert_eq!(run(&[number("1"), number("4"), operator("/")]), Ok(0.25));
        assert_eq!(run(&[number("2"), number("10"), operator("^")]), Ok(1024.0));
        assert_eq!(run(&[number("2"), number("10"), operator("**")]), Ok(1024.0));
    }

    #[test]
    fn test_variables_and_constants() {
        let variables = HashMap::from([("x".to_string(), 3.0)]);
        let postfix = [
            Token::new(TokenKind::Variable, "x", 0),
            Token::new(TokenKind::Constant, "pi", 2),
            operator("*"),
        ];
        assert_eq!(
            evaluate_postfix(&postfix, &variables),
            Ok(3.0 * std::f64::consts::PI)
        );
    }

    #[test]
    fn test_undefined_variable() {
        let postfix = [Token::new(TokenKind::Variable, "y", 0)];
        assert_eq!(
            run(&postfix),
            Err(EvaluationError::UndefinedVariable("y".to_string()))
        );
    }

    #[test]
    fn test_unknown_constant() {
        let postfix = [Token::new(TokenKind::Constant, "tau", 0)];
        assert_eq!(
            run(&postfix),
            Err(EvaluationError::UnknownConstant("tau".to_string()))
        );
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            run(&[number("1"), function("max")]),
            Err(EvaluationError::UnknownFunction("max".to_string()))
        );
        assert_eq!(
            run(&[number("1"), function("integral")]),
            Err(EvaluationError::UnknownFunction("integral".to_string()))
        );
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(
            run(&[number("1"), number("2"), operator("%")]),
            Err(EvaluationError::UnknownOperator("%".to_string()))
        );
    }

    #[test]
    fn test_insufficient_operands() {
        assert_eq!(
            run(&[number("1"), operator("+")]),
            Err(EvaluationError::InsufficientOperands("+".to_string()))
        );
    }

    #[test]
    fn test_signs() {
        let negate = Token::new(TokenKind::Sign, "-", 0);
        let plus = Token::new(TokenKind::Sign, "+", 0);
        assert_eq!(run(&[number("3"), negate.clone()]), Ok(-3.0));
        assert_eq!(run(&[number("3"), plus]), Ok(3.0));
        assert_eq!(
            run(&[negate]),
            Err(EvaluationError::InsufficientOperands("-".to_string()))
        );
        assert_eq!(
            run(&[number("3"), Token::new(TokenKind::Sign, "*", 0)]),
            Err(EvaluationError::UnknownOperator("*".to_string()))
        );
    }

    #[test]
    fn test_insufficient_arguments() {
        assert_eq!(
            run(&[function("sqrt")]),
            Err(EvaluationError::InsufficientArguments("sqrt".to_string()))
        );
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            run(&[number("2e+")]),
            Err(EvaluationError::InvalidNumber("2e+".to_string()))
        );
        assert_eq!(
            run(&[number(".")]),
            Err(EvaluationError::InvalidNumber(".".to_string()))
        );
    }

    #[test]
    fn test_malformed_expression() {
        assert!(matches!(
            run(&[number("1"), number("2")]),
            Err(EvaluationError::MalformedExpression(_))
        ));
        assert!(matches!(
            run(&[]),
            Err(EvaluationError::MalformedExpression(_))
        ));
        assert!(matches!(
            run(&[number("1"), Token::new(TokenKind::LeftParen, "(", 1)]),
            Err(EvaluationError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_extra_function_arguments_rejected() {
        // sin(1, 2) converts to `1 2 sin`.
        assert!(matches!(
            run(&[number("1"), number("2"), function("sin")]),
            Err(EvaluationError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_non_finite_results_pass_through() {
        assert_eq!(
            run(&[number("1"), number("0"), operator("/")]),
            Ok(f64::INFINITY)
        );
        assert!(run(&[number("0"), number("1"), operator("-"), function("sqrt")])
            .unwrap()
            .is_nan());
        assert!(run(&[number("0"), number("0"), operator("/")]).unwrap().is_nan());
    }
}
