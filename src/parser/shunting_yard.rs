use crate::token::{Operator, Token, TokenKind};
use log::trace;

/// Signs bind tighter than `*` and `/` but looser than `^`, so `-2^2` is `-(2^2)`.
const SIGN_PRECEDENCE: u8 = 3;

/// Rewrites a validated infix token stream into postfix order.
///
/// Processing stops at the `End` token, which is not part of the output. Given a stream that
/// passed [`validate`](super::validate) every operand, operator and function appears in the
/// output exactly once and parentheses and commas are dropped.
///
/// A `+` or `-` at the start of the expression, after `(` or after `,` has no left operand; it
/// is emitted as a [`TokenKind::Sign`] instead of a binary operator.
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        match token.kind {
            TokenKind::Number | TokenKind::Variable | TokenKind::Constant => {
                output.push(token.clone())
            }

            TokenKind::Function | TokenKind::LeftParen => stack.push(token.clone()),

            TokenKind::Comma => drain_until_left_paren(&mut stack, &mut output),

            TokenKind::Operator if is_prefix_position(previous) => {
                stack.push(token.clone().into_sign())
            }

            TokenKind::Operator => {
                if let Some(incoming) = token.operator() {
                    while stack.last().map_or(false, |top| pops_before(top, incoming)) {
                        output.extend(stack.pop());
                    }
                }
                stack.push(token.clone());
            }

            TokenKind::RightParen => {
                drain_until_left_paren(&mut stack, &mut output);
                stack.pop();

                if stack.last().map_or(false, |t| t.is(TokenKind::Function)) {
                    output.extend(stack.pop());
                }
            }

            TokenKind::Sign => stack.push(token.clone()),

            TokenKind::End => break,
        }
        trace!("{} -> stack depth {}", token, stack.len());
        previous = Some(token.kind);
    }

    output.extend(stack.into_iter().rev());
    output
}

fn is_prefix_position(previous: Option<TokenKind>) -> bool {
    matches!(
        previous,
        None | Some(TokenKind::LeftParen) | Some(TokenKind::Comma)
    )
}

/// Whether `top` must be emitted before `incoming` is pushed.
fn pops_before(top: &Token, incoming: Operator) -> bool {
    match top.kind {
        TokenKind::Operator => top.operator().map_or(false, |op| op.yields_to(incoming)),
        TokenKind::Sign => incoming.precedence() < SIGN_PRECEDENCE,
        _ => false,
    }
}

fn drain_until_left_paren(stack: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(top) = stack.last() {
        if top.is(TokenKind::LeftParen) {
            break;
        }
        output.extend(stack.pop());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn postfix(expression: &str) -> String {
        to_postfix(&tokenize(expression))
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2 + 3 * 4"), "2 3 4 * +");
        assert_eq!(postfix("2 * 3 + 4"), "2 3 * 4 +");
        assert_eq!(postfix("2 + 3 ^ 2 * 4"), "2 3 2 ^ 4 * +");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix("8 - 3 - 2"), "8 3 - 2 -");
        assert_eq!(postfix("8 / 4 * 2"), "8 4 / 2 *");
    }

    #[test]
    fn test_right_associativity() {
        assert_eq!(postfix("2 ^ 3 ^ 2"), "2 3 2 ^ ^");
        assert_eq!(postfix("2 ** 3 ^ 2"), "2 3 2 ^ **");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(postfix("(2 + 3) * 4"), "2 3 + 4 *");
        assert_eq!(postfix("((1))"), "1");
        assert_eq!(postfix("(a + b) * (c - d)"), "a b + c d - *");
    }

    #[test]
    fn test_functions() {
        assert_eq!(postfix("sin(x)"), "x sin");
        assert_eq!(postfix("sin(pi / 2) + cos(0)"), "pi 2 / sin 0 cos +");
        assert_eq!(postfix("sqrt(abs(x - 1))"), "x 1 - abs sqrt");
        assert_eq!(postfix("2 * exp(1) ^ 2"), "2 1 exp 2 ^ *");
    }

    #[test]
    fn test_comma_drains_to_paren() {
        assert_eq!(postfix("sin(1 + 2, 3 * 4)"), "1 2 + 3 4 * sin");
    }

    #[test]
    fn test_signs() {
        assert_eq!(postfix("-1"), "1 u-");
        assert_eq!(postfix("sqrt(-1)"), "1 u- sqrt");
        assert_eq!(postfix("-2 ^ 2"), "2 2 ^ u-");
        assert_eq!(postfix("-2 * 3"), "2 u- 3 *");
        assert_eq!(postfix("-x + 1"), "x u- 1 +");
        assert_eq!(postfix("+x"), "x u+");
        assert_eq!(postfix("-sin(x)"), "x sin u-");
        // Not a prefix position: binary minus.
        assert_eq!(postfix("(1) - 2"), "1 2 -");
    }

    #[test]
    fn test_end_token_excluded() {
        let result = to_postfix(&tokenize("x"));
        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|t| !t.is(TokenKind::End)));
        assert!(to_postfix(&tokenize("")).is_empty());
    }
}
