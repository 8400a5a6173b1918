//! logos-based selector tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `^=` as PrefixMatch, `*=` beats `*` as Star)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Whitespace is skipped; the parser recovers it from byte spans to tell a
//! descendant combinator from an adjacent compound part.

use logos::Logos;

use super::parser::SelectorError;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Attribute operators (two characters, defined first) ──────────

    /// `^=` prefix match.
    #[token("^=")]
    PrefixMatch,

    /// `$=` suffix match.
    #[token("$=")]
    SuffixMatch,

    /// `*=` substring match.
    #[token("*=")]
    SubstringMatch,

    /// `~=` whitespace-separated word match.
    #[token("~=")]
    IncludesMatch,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Identifier: tag names, class names, ids, attribute names and values.
    /// Any non-ASCII code point counts as a name character.
    #[regex(r"-?([a-zA-Z_]|[^\x00-\x7F])([a-zA-Z0-9_-]|[^\x00-\x7F])*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `=` exact match.
    #[token("=")]
    Equals,

    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `#`
    #[token("#")]
    Hash,

    /// `*`
    #[token("*")]
    Star,

    /// `>`
    #[token(">")]
    GreaterThan,
}

/// A token with its source text and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub text: String,
    /// Index in the token stream (for error reporting).
    pub pos: usize,
    pub byte_start: usize,
    pub byte_end: usize,
}

/// Tokenize a selector string.
///
/// Unlike a stylesheet, a selector has no recovery point, so the first
/// character the lexer rejects fails the whole input.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, SelectorError> {
    let mut tokens = Vec::new();

    for (idx, (result, span)) in Token::lexer(input).spanned().enumerate() {
        match result {
            Ok(token) => tokens.push(SpannedToken {
                token,
                text: input[span.clone()].to_string(),
                pos: idx,
                byte_start: span.start,
                byte_end: span.end,
            }),
            Err(()) => {
                return Err(SelectorError::InvalidCharacter {
                    position: span.start,
                    found: input[span].to_string(),
                })
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .expect("input should lex")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    fn tokens_with_text(input: &str) -> Vec<(Token, String)> {
        tokenize(input)
            .expect("input should lex")
            .into_iter()
            .map(|t| (t.token, t.text))
            .collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            tokens("[ ] , . # * > ="),
            vec![
                Token::BracketOpen,
                Token::BracketClose,
                Token::Comma,
                Token::Dot,
                Token::Hash,
                Token::Star,
                Token::GreaterThan,
                Token::Equals,
            ]
        );
    }

    #[test]
    fn test_attribute_operators() {
        assert_eq!(
            tokens("^= $= *= ~="),
            vec![
                Token::PrefixMatch,
                Token::SuffixMatch,
                Token::SubstringMatch,
                Token::IncludesMatch,
            ]
        );
    }

    #[test]
    fn test_substring_match_beats_star() {
        assert_eq!(tokens("*="), vec![Token::SubstringMatch]);
        assert_eq!(tokens("* ="), vec![Token::Star, Token::Equals]);
    }

    #[test]
    fn test_idents_with_dashes() {
        let result = tokens_with_text("recipe-card data-filter -webkit-x _private");
        assert_eq!(result[0], (Token::Ident, "recipe-card".into()));
        assert_eq!(result[1], (Token::Ident, "data-filter".into()));
        assert_eq!(result[2], (Token::Ident, "-webkit-x".into()));
        assert_eq!(result[3], (Token::Ident, "_private".into()));
    }

    #[test]
    fn test_anchor_selector() {
        let result = tokens_with_text(r##"a[href^="#"]"##);
        assert_eq!(
            result,
            vec![
                (Token::Ident, "a".into()),
                (Token::BracketOpen, "[".into()),
                (Token::Ident, "href".into()),
                (Token::PrefixMatch, "^=".into()),
                (Token::StringLiteral, "\"#\"".into()),
                (Token::BracketClose, "]".into()),
            ]
        );
    }

    #[test]
    fn test_single_quoted_string() {
        let result = tokens_with_text("[data-filter='mains']");
        assert_eq!(result[3], (Token::StringLiteralSingle, "'mains'".into()));
    }

    #[test]
    fn test_fragment_is_hash_then_ident() {
        assert_eq!(tokens("#recipes"), vec![Token::Hash, Token::Ident]);
    }

    #[test]
    fn test_non_ascii_ident() {
        let result = tokens_with_text("#jalapeño .crème-brûlée");
        assert_eq!(
            result,
            vec![
                (Token::Hash, "#".into()),
                (Token::Ident, "jalapeño".into()),
                (Token::Dot, ".".into()),
                (Token::Ident, "crème-brûlée".into()),
            ]
        );
    }

    #[test]
    fn test_spans_track_whitespace() {
        let toks = tokenize(".nav  a").unwrap();
        assert_eq!(toks[1].byte_end, 4);
        assert_eq!(toks[2].byte_start, 6);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(tokens("").is_empty());
        assert!(tokens("  \t\n ").is_empty());
    }

    #[test]
    fn test_invalid_character_is_an_error() {
        let err = tokenize("#1abc").unwrap_err();
        assert!(matches!(
            err,
            SelectorError::InvalidCharacter { position: 1, .. }
        ));
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        assert!(tokenize(r#"[href="x]"#).is_err());
    }
}
