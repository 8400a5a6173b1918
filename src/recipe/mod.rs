//! Recipes: CookLang source, rendered recipe pages, listing documents.
//!
//! [`parse`] reads the CookLang subset the site's recipes are written in.
//! [`html::render`] turns a [`Recipe`] into a standalone detail page, and
//! [`listing::build`] produces the listing [`Dom`](crate::dom::Dom) that the
//! page behaviors run against.

pub mod html;
pub mod listing;
mod parse;

use std::collections::BTreeMap;

pub use html::{render, RenderOptions};
pub use listing::ListingEntry;
pub use parse::parse;

pub const DEFAULT_TITLE: &str = "Recipe";
pub const DEFAULT_SERVINGS: &str = "2-4";
pub const DEFAULT_TOTAL_TIME: &str = "30 minutes";
pub const DEFAULT_PREP_TIME: &str = "15 minutes";

/// Errors from reading CookLang source.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    /// A `>>` line without a `key: value` separator.
    #[error("line {line}: metadata entry has no `:` separator")]
    Metadata { line: usize },
}

/// `## ` headers the parser collects. Anything else is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    PortioningGuide,
    Ingredients,
    Tools,
    Instructions,
    Tips,
    Other,
}

impl Section {
    pub fn from_header(header: &str) -> Self {
        match header {
            "Portioning Guide" => Section::PortioningGuide,
            "Ingredients" => Section::Ingredients,
            "Tools" => Section::Tools,
            "Instructions" => Section::Instructions,
            "Tips" => Section::Tips,
            _ => Section::Other,
        }
    }
}

/// One instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The line as written, markup included.
    pub source: String,
    /// The line with inline ingredients, tools and timers reduced to text.
    pub text: String,
}

/// A parsed recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    /// `>> key: value` entries, plus `title` from the `# ` line.
    pub metadata: BTreeMap<String, String>,
    /// Text before the first section, lines joined by single spaces.
    pub intro: String,
    pub portioning_guide: Vec<String>,
    /// Readable ingredient lines (`2 tbsp olive oil, extra virgin`).
    pub ingredients: Vec<String>,
    pub tools: Vec<String>,
    pub steps: Vec<Step>,
    pub tips: Vec<String>,
}

impl Recipe {
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn title(&self) -> &str {
        self.meta("title").unwrap_or(DEFAULT_TITLE)
    }

    /// The listing category (`>> category:`), if any.
    pub fn category(&self) -> Option<&str> {
        self.meta("category")
    }

    pub fn servings(&self) -> &str {
        self.meta("servings").unwrap_or(DEFAULT_SERVINGS)
    }

    /// `>> time:`
    pub fn total_time(&self) -> &str {
        self.meta("time").unwrap_or(DEFAULT_TOTAL_TIME)
    }

    pub fn prep_time(&self) -> &str {
        self.meta("prep_time").unwrap_or(DEFAULT_PREP_TIME)
    }

    /// `>> cook_time:`, falling back to the total time.
    pub fn cook_time(&self) -> &str {
        self.meta("cook_time").unwrap_or_else(|| self.total_time())
    }
}
