//! Selector engine: tokenizer, parser, matcher.
//!
//! Covers the subset of CSS selectors the page behaviors need: type,
//! universal, `.class`, `#id`, attribute selectors with the `=`, `^=`, `$=`,
//! `*=` and `~=` operators, descendant and child combinators, and
//! comma-separated selector lists.

pub mod matching;
pub mod model;
pub mod parser;
pub mod tokenizer;

pub use matching::{matches_list, matches_selector};
pub use model::{AttrOperator, AttributeSelector, Selector, SelectorList};
pub use parser::{parse_selector_list, SelectorError};
