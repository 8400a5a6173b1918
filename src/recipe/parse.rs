//! CookLang subset parser.
//!
//! Line oriented. `>>` lines are metadata, `# ` is the title, `## ` opens a
//! section; blank lines are skipped everywhere. Text before the first
//! section is the intro.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{Recipe, RecipeError, Section, Step};

/// Compiled inline markup patterns.
struct Markup {
    /// `@name{qty%unit}{notes}`, both brace groups optional in content.
    ingredient: Regex,
    /// `#name{}`
    tool: Regex,
    /// `@name{..}` or `#name{..}` inside a step.
    braced: Regex,
    /// `@word` or `#word` inside a step.
    bare: Regex,
    /// `~{25%minutes}`, optionally named.
    timer: Regex,
}

/// Compiled once, shared by every [`parse`] call.
static MARKUP: LazyLock<Markup> = LazyLock::new(|| Markup {
    ingredient: pattern(r"@([^{]+)\{([^}]*)\}(?:\{([^}]*)\})?"),
    tool: pattern(r"#([^{]+)\{\}"),
    braced: pattern(r"[@#]([^@#~{}]+)\{[^}]*\}(?:\{[^}]*\})?"),
    bare: pattern(r"[@#]([^\W\d][\w-]*)"),
    timer: pattern(r"~[^@#~{}]*\{([^}]*)\}"),
});

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("markup patterns are literals")
}

impl Markup {
    fn ingredient(&self, line: &str) -> String {
        self.ingredient
            .replace_all(line, |caps: &Captures<'_>| format_ingredient(caps))
            .trim()
            .to_owned()
    }

    fn tool(&self, line: &str) -> Option<String> {
        self.tool
            .captures(line)
            .map(|caps| caps[1].trim().to_owned())
    }

    fn plain(&self, line: &str) -> String {
        let text = self
            .timer
            .replace_all(line, |caps: &Captures<'_>| join_words(caps[1].split('%')));
        let text = self
            .braced
            .replace_all(&text, |caps: &Captures<'_>| caps[1].trim().to_owned());
        self.bare.replace_all(&text, "$1").into_owned()
    }
}

/// Parse CookLang source into a [`Recipe`].
pub fn parse(source: &str) -> Result<Recipe, RecipeError> {
    let markup = &*MARKUP;
    let mut recipe = Recipe::default();
    let mut section: Option<Section> = None;
    let mut intro: Vec<&str> = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if let Some(entry) = line.strip_prefix(">>") {
            let (key, value) = entry
                .split_once(':')
                .ok_or(RecipeError::Metadata { line: idx + 1 })?;
            recipe
                .metadata
                .insert(key.trim().to_owned(), value.trim().to_owned());
            continue;
        }
        if let Some(title) = line.strip_prefix("# ") {
            recipe
                .metadata
                .insert("title".to_owned(), title.trim().to_owned());
            continue;
        }
        if let Some(header) = line.strip_prefix("## ") {
            section = Some(Section::from_header(header.trim()));
            continue;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match section {
            None => intro.push(text),
            Some(Section::PortioningGuide) => recipe.portioning_guide.push(text.to_owned()),
            Some(Section::Ingredients) => {
                let item = markup.ingredient(strip_bullet(text));
                if !item.is_empty() {
                    recipe.ingredients.push(item);
                }
            }
            Some(Section::Tools) => {
                if let Some(tool) = markup.tool(strip_bullet(text)) {
                    recipe.tools.push(tool);
                }
            }
            Some(Section::Instructions) => recipe.steps.push(Step {
                source: text.to_owned(),
                text: markup.plain(text),
            }),
            Some(Section::Tips) => {
                let tip = strip_bullet(text);
                if !tip.is_empty() {
                    recipe.tips.push(tip.to_owned());
                }
            }
            Some(Section::Other) => {}
        }
    }

    recipe.intro = intro.join(" ");
    tracing::debug!(
        title = recipe.title(),
        ingredients = recipe.ingredients.len(),
        tools = recipe.tools.len(),
        steps = recipe.steps.len(),
        "recipe parsed"
    );
    Ok(recipe)
}

/// Drop a leading list marker (`- `).
fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['-', ' ']).trim()
}

fn format_ingredient(caps: &Captures<'_>) -> String {
    let name = caps[1].trim();
    let amount = caps.get(2).map_or("", |m| m.as_str());
    let mut out = match amount.split_once('%') {
        Some((quantity, unit)) => join_words([quantity, unit, name]),
        None => join_words([amount, name]),
    };
    if let Some(notes) = caps.get(3).map(|m| m.as_str().trim()).filter(|n| !n.is_empty()) {
        out.push_str(", ");
        out.push_str(notes);
    }
    out
}

fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words
        .into_iter()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
