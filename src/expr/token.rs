//! Tokenizer for equation expressions.

use crate::error::{QuiverError, Result};

/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal.
    Number(f64),
    /// Identifier: variable, constant or function name.
    Ident(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^` (also produced by `**`)
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// Tokenize an expression string.
pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            },
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            },
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            },
            '*' => {
                chars.next();
                // `**` is the power operator, as in the original notation.
                if chars.peek().map(|&(_, c)| c) == Some('*') {
                    chars.next();
                    tokens.push(Token::Caret);
                } else {
                    tokens.push(Token::Star);
                }
            },
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            },
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            },
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            },
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            },
            c if c.is_ascii_digit() || c == '.' => {
                let text = scan_number(src, &mut chars, start);
                let value = text
                    .parse::<f64>()
                    .map_err(|_| QuiverError::expr(format!("Bad number: {text}")))?;
                tokens.push(Token::Number(value));
            },
            c if c.is_alphabetic() || c == '_' => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(src[start..end].to_string()));
            },
            c => {
                return Err(QuiverError::expr(format!("Unexpected character '{c}'")));
            },
        }
    }

    Ok(tokens)
}

/// Scan one numeric literal: digits, optional fraction, optional exponent.
fn scan_number<'a>(
    src: &'a str,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'a>>,
    start: usize,
) -> &'a str {
    let mut end = start;
    let mut seen_dot = false;

    while let Some(&(i, c)) = chars.peek() {
        if c.is_ascii_digit() || (c == '.' && !seen_dot) {
            seen_dot |= c == '.';
            end = i + c.len_utf8();
            chars.next();
        } else {
            break;
        }
    }

    // Exponent part, only if followed by digits (else `e` is the constant).
    let mut lookahead = chars.clone();
    if matches!(lookahead.peek(), Some(&(_, 'e')) | Some(&(_, 'E'))) {
        lookahead.next();
        if matches!(lookahead.peek(), Some(&(_, '+')) | Some(&(_, '-'))) {
            lookahead.next();
        }
        if lookahead.peek().is_some_and(|&(_, d)| d.is_ascii_digit()) {
            chars.next();
            if matches!(chars.peek(), Some(&(_, '+')) | Some(&(_, '-'))) {
                chars.next();
            }
            while let Some(&(k, c)) = chars.peek() {
                if c.is_ascii_digit() {
                    end = k + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
        }
    }

    &src[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_arithmetic() {
        let tokens = tokenize("x**2 + 3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("x".to_string()),
                Token::Caret,
                Token::Number(2.0),
                Token::Plus,
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn caret_and_double_star_are_equivalent() {
        assert_eq!(tokenize("x^2").unwrap(), tokenize("x**2").unwrap());
    }

    #[test]
    fn tokenizes_call_and_fraction() {
        let tokens = tokenize("sin(.5)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("sin".to_string()),
                Token::LParen,
                Token::Number(0.5),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn exponent_literal_does_not_eat_constant_e() {
        // `2e3` is a literal, `2*e` involves the constant.
        assert_eq!(tokenize("2e3").unwrap(), vec![Token::Number(2000.0)]);
        assert_eq!(
            tokenize("2e").unwrap(),
            vec![Token::Number(2.0), Token::Ident("e".to_string())]
        );
        assert_eq!(tokenize("1.5e-2").unwrap(), vec![Token::Number(0.015)]);
    }

    #[test]
    fn rejects_stray_characters() {
        let err = tokenize("x $ 2").unwrap_err();
        assert!(err.to_string().contains("Unexpected character '$'"));
    }
}
