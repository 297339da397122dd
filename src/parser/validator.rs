use crate::error::SyntaxError;
use crate::token::{Token, TokenKind};

/// Checks a token stream before conversion to postfix form.
///
/// Rules are applied in a single left-to-right pass and the first violation wins: a stray `)`,
/// two operators in a row and a misplaced function are reported at the token where they occur;
/// unbalanced `(` and a trailing operator are only known once the stream is exhausted.
pub fn validate(tokens: &[Token]) -> Result<(), SyntaxError> {
    if tokens.first().map_or(true, |t| t.is(TokenKind::End)) {
        return Err(SyntaxError::EmptyExpression);
    }

    let mut open_parens: Vec<usize> = Vec::new();
    let mut previous: Option<&Token> = None;

    for token in tokens.iter().take_while(|t| !t.is(TokenKind::End)) {
        match token.kind {
            TokenKind::LeftParen => open_parens.push(token.position),
            TokenKind::RightParen => {
                if open_parens.pop().is_none() {
                    return Err(SyntaxError::UnmatchedClosingParenthesis {
                        position: token.position,
                    });
                }
            }
            _ => {}
        }

        let previous_kind = previous.map(|t| t.kind);

        if token.is(TokenKind::Operator) && previous_kind == Some(TokenKind::Operator) {
            return Err(SyntaxError::ConsecutiveOperators {
                position: token.position,
            });
        }

        if token.is(TokenKind::Function)
            && !matches!(
                previous_kind,
                None | Some(TokenKind::Operator)
                    | Some(TokenKind::LeftParen)
                    | Some(TokenKind::Comma)
            )
        {
            return Err(SyntaxError::InvalidFunctionCall {
                position: token.position,
            });
        }

        previous = Some(token);
    }

    if let Some(&position) = open_parens.last() {
        return Err(SyntaxError::UnmatchedParentheses { position });
    }

    match previous {
        Some(token) if token.is(TokenKind::Operator) => Err(SyntaxError::TrailingOperator {
            position: token.position,
        }),
        _ => Ok(()),
    }
}
