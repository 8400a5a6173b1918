//! Recursive descent selector parser.
//!
//! Parses selector text into a [`SelectorList`] using the logos-based
//! tokenizer from [`crate::selector::tokenizer`].

use super::model::*;
use super::tokenizer::{tokenize, SpannedToken, Token};

/// Errors from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("invalid character at byte {position}: {found:?}")]
    InvalidCharacter { position: usize, found: String },
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of selector: {0}")]
    UnexpectedEof(String),
}

/// Parse a selector string such as `a[href^="#"]` or `.filter-btn, .recipe-card`.
///
/// The whole input must be consumed; trailing tokens are an error.
pub fn parse_selector_list(input: &str) -> Result<SelectorList, SelectorError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(SelectorError::Empty);
    }

    let mut parser = Parser { tokens, cursor: 0 };
    let list = parser.parse_list()?;

    if let Some(tok) = parser.peek() {
        return Err(SelectorError::UnexpectedToken {
            position: tok.pos,
            message: format!("unexpected {:?} '{}'", tok.token, tok.text),
        });
    }

    Ok(list)
}

/// Recursive descent parser state.
struct Parser {
    tokens: Vec<SpannedToken>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.cursor)
    }

    fn peek_token(&self) -> Option<Token> {
        self.peek().map(|t| t.token)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn current_pos(&self) -> usize {
        self.peek().map(|t| t.pos).unwrap_or(self.tokens.len())
    }

    /// Returns `true` if the current token directly follows the previous one
    /// with no whitespace between them.
    fn is_adjacent(&self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = &self.tokens[self.cursor - 1];
        self.peek().is_some_and(|curr| curr.byte_start == prev.byte_end)
    }

    /// Consume an identifier, reporting `what` was expected otherwise.
    fn expect_ident(&mut self, what: &str) -> Result<String, SelectorError> {
        match self.advance() {
            Some(tok) if tok.token == Token::Ident => Ok(tok.text),
            Some(tok) => Err(SelectorError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {what}, got {:?} '{}'", tok.token, tok.text),
            }),
            None => Err(SelectorError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    fn parse_list(&mut self) -> Result<SelectorList, SelectorError> {
        let mut selectors = vec![self.parse_selector()?];

        while self.peek_token() == Some(Token::Comma) {
            self.advance();
            selectors.push(self.parse_selector()?);
        }

        Ok(SelectorList { selectors })
    }

    /// Parse compound selectors joined by combinators.
    fn parse_selector(&mut self) -> Result<Selector, SelectorError> {
        let mut parts = vec![SelectorPart::Compound(self.parse_compound()?)];

        loop {
            match self.peek_token() {
                Some(Token::GreaterThan) => {
                    self.advance();
                    parts.push(SelectorPart::Combinator(Combinator::Child));
                    parts.push(SelectorPart::Compound(self.parse_compound()?));
                }
                // A compound-starting token that was not absorbed by the
                // previous compound was separated by whitespace.
                Some(
                    Token::Ident | Token::Hash | Token::Dot | Token::Star | Token::BracketOpen,
                ) => {
                    parts.push(SelectorPart::Combinator(Combinator::Descendant));
                    parts.push(SelectorPart::Compound(self.parse_compound()?));
                }
                _ => break,
            }
        }

        Ok(Selector { parts })
    }

    /// Parse one compound selector such as `a.nav-link[href^="#"]`.
    ///
    /// `.class`, `#id` and `[attr]` only extend the compound when they touch
    /// the previous token.
    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut compound = CompoundSelector::new();

        match self.peek_token() {
            Some(Token::Ident) => {
                let name = self.expect_ident("tag name")?;
                compound.push(SelectorComponent::Type(name.to_ascii_lowercase()));
            }
            Some(Token::Star) => {
                self.advance();
                compound.push(SelectorComponent::Universal);
            }
            Some(Token::Dot | Token::Hash | Token::BracketOpen) => {
                compound.push(self.parse_subclass()?);
            }
            Some(_) => {
                return Err(SelectorError::UnexpectedToken {
                    position: self.current_pos(),
                    message: "expected selector".into(),
                });
            }
            None => return Err(SelectorError::UnexpectedEof("expected selector".into())),
        }

        while self.is_adjacent()
            && matches!(
                self.peek_token(),
                Some(Token::Dot | Token::Hash | Token::BracketOpen)
            )
        {
            compound.push(self.parse_subclass()?);
        }

        Ok(compound)
    }

    /// Parse `.class`, `#id` or `[attr...]`.
    fn parse_subclass(&mut self) -> Result<SelectorComponent, SelectorError> {
        let Some(tok) = self.advance() else {
            return Err(SelectorError::UnexpectedEof("expected selector".into()));
        };
        match tok.token {
            Token::Dot => Ok(SelectorComponent::Class(self.expect_ident("class name after '.'")?)),
            Token::Hash => Ok(SelectorComponent::Id(self.expect_ident("id after '#'")?)),
            Token::BracketOpen => self.parse_attribute(),
            other => Err(SelectorError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected '.', '#' or '[', got {other:?} '{}'", tok.text),
            }),
        }
    }

    /// Parse the rest of an attribute selector after `[`.
    fn parse_attribute(&mut self) -> Result<SelectorComponent, SelectorError> {
        let name = self.expect_ident("attribute name")?;

        let op = match self.advance() {
            Some(tok) => match tok.token {
                Token::BracketClose => {
                    return Ok(SelectorComponent::Attribute(AttributeSelector::present(name)));
                }
                Token::Equals => AttrOperator::Equals,
                Token::PrefixMatch => AttrOperator::Prefix,
                Token::SuffixMatch => AttrOperator::Suffix,
                Token::SubstringMatch => AttrOperator::Substring,
                Token::IncludesMatch => AttrOperator::Includes,
                other => {
                    return Err(SelectorError::UnexpectedToken {
                        position: tok.pos,
                        message: format!("expected attribute operator or ']', got {other:?}"),
                    });
                }
            },
            None => return Err(SelectorError::UnexpectedEof("expected ']'".into())),
        };

        let value = match self.advance() {
            Some(tok) => match tok.token {
                Token::Ident => tok.text,
                // Strip the surrounding quotes.
                Token::StringLiteral | Token::StringLiteralSingle => {
                    tok.text[1..tok.text.len() - 1].to_string()
                }
                other => {
                    return Err(SelectorError::UnexpectedToken {
                        position: tok.pos,
                        message: format!("expected attribute value, got {other:?}"),
                    });
                }
            },
            None => return Err(SelectorError::UnexpectedEof("expected attribute value".into())),
        };

        match self.advance() {
            Some(tok) if tok.token == Token::BracketClose => Ok(SelectorComponent::Attribute(
                AttributeSelector::with_value(name, op, value),
            )),
            Some(tok) => Err(SelectorError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected ']', got {:?} '{}'", tok.token, tok.text),
            }),
            None => Err(SelectorError::UnexpectedEof("expected ']'".into())),
        }
    }
}
