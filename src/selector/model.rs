//! Selector AST: SelectorList, Selector, CompoundSelector, components.

/// Attribute selector operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOperator {
    /// `[a=v]`: exact value.
    Equals,
    /// `[a^=v]`: value starts with `v`.
    Prefix,
    /// `[a$=v]`: value ends with `v`.
    Suffix,
    /// `[a*=v]`: value contains `v`.
    Substring,
    /// `[a~=v]`: value is a whitespace-separated list containing `v`.
    Includes,
}

impl AttrOperator {
    /// Test an attribute's actual value against the selector's expected value.
    ///
    /// The prefix, suffix, substring and word operators never match an empty
    /// expected value.
    pub fn matches(self, actual: &str, expected: &str) -> bool {
        match self {
            AttrOperator::Equals => actual == expected,
            AttrOperator::Prefix => !expected.is_empty() && actual.starts_with(expected),
            AttrOperator::Suffix => !expected.is_empty() && actual.ends_with(expected),
            AttrOperator::Substring => !expected.is_empty() && actual.contains(expected),
            AttrOperator::Includes => {
                !expected.is_empty()
                    && !expected.contains(char::is_whitespace)
                    && actual.split_whitespace().any(|word| word == expected)
            }
        }
    }
}

/// `[name]` or `[name <op> value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    /// Attribute name, lowercased.
    pub name: String,
    /// Operator and expected value; `None` tests presence only.
    pub matcher: Option<(AttrOperator, String)>,
}

impl AttributeSelector {
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            matcher: None,
        }
    }

    pub fn with_value(name: impl Into<String>, op: AttrOperator, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            matcher: Some((op, value.into())),
        }
    }
}

/// A single simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorComponent {
    /// Type selector: matches the element's tag name (e.g. `a`, `nav`).
    Type(String),
    /// Universal selector: `*`.
    Universal,
    /// Class selector: `.classname`.
    Class(String),
    /// ID selector: `#id`.
    Id(String),
    /// Attribute selector: `[href^="#"]`.
    Attribute(AttributeSelector),
}

/// A combinator between compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
}

/// Simple selectors with no combinator between them, e.g.
/// `button.filter-btn[data-filter="all"]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    pub components: Vec<SelectorComponent>,
}

impl CompoundSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, component: SelectorComponent) {
        self.components.push(component);
    }
}

/// One element in a selector chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPart {
    Compound(CompoundSelector),
    Combinator(Combinator),
}

/// A complex selector: compound selectors joined by combinators.
///
/// `nav > a.active` has parts
/// `[Compound(nav), Combinator(Child), Compound(a.active)]`. A parsed
/// selector always starts and ends with a compound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub parts: Vec<SelectorPart>,
}

/// Comma-separated selectors; an element matches the list if it matches any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorList {
    pub selectors: Vec<Selector>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_is_exact() {
        assert!(AttrOperator::Equals.matches("mains", "mains"));
        assert!(!AttrOperator::Equals.matches("mains", "main"));
        assert!(AttrOperator::Equals.matches("", ""));
    }

    #[test]
    fn prefix_matches_fragment_links() {
        assert!(AttrOperator::Prefix.matches("#recipes", "#"));
        assert!(AttrOperator::Prefix.matches("#", "#"));
        assert!(!AttrOperator::Prefix.matches("cooking.html#recipes", "#"));
    }

    #[test]
    fn empty_expected_never_matches_partial_operators() {
        for op in [
            AttrOperator::Prefix,
            AttrOperator::Suffix,
            AttrOperator::Substring,
            AttrOperator::Includes,
        ] {
            assert!(!op.matches("anything", ""), "{op:?}");
        }
    }

    #[test]
    fn suffix_and_substring() {
        assert!(AttrOperator::Suffix.matches("index.html", ".html"));
        assert!(AttrOperator::Substring.matches("cooking.html#top", "html#"));
        assert!(!AttrOperator::Substring.matches("abc", "d"));
    }

    #[test]
    fn includes_matches_whole_words() {
        assert!(AttrOperator::Includes.matches("filter-btn active", "active"));
        assert!(!AttrOperator::Includes.matches("filter-btn inactive", "active"));
        assert!(!AttrOperator::Includes.matches("a b", "a b"));
    }

    #[test]
    fn attribute_names_are_lowercased() {
        let sel = AttributeSelector::with_value("HREF", AttrOperator::Prefix, "#");
        assert_eq!(sel.name, "href");
        assert_eq!(AttributeSelector::present("Data-Filter").name, "data-filter");
    }
}
