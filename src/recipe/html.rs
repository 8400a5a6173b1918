//! Recipe detail page rendering.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::Recipe;

/// Page chrome around a rendered recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shown in the navbar and appended to the `<title>`.
    pub site_name: String,
    /// Site home, linked from the navbar brand.
    pub home_link: String,
    /// Shared stylesheet href.
    pub stylesheet: String,
    /// The recipe listing page.
    pub back_link: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_name: "Recipes".to_owned(),
            home_link: "index.html".to_owned(),
            stylesheet: "styles.css".to_owned(),
            back_link: "cooking.html".to_owned(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    pub fn with_home_link(mut self, href: impl Into<String>) -> Self {
        self.home_link = href.into();
        self
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = href.into();
        self
    }

    pub fn with_back_link(mut self, href: impl Into<String>) -> Self {
        self.back_link = href.into();
        self
    }
}

const RECIPE_CSS: &str = "\
        .recipe-detail { max-width: 800px; margin: 0 auto; }
        .recipe-header { padding: 3rem 0 2rem; margin-bottom: 2rem; }
        .recipe-stats { display: flex; gap: 2rem; flex-wrap: wrap; padding: 1.5rem; }
        .stat { display: flex; flex-direction: column; }
        .stat-label { font-size: 0.85rem; text-transform: uppercase; }
        .stat-value { font-size: 1.1rem; font-weight: 600; }
        .recipe-section { margin: 3rem 0; }
        .ingredients-list, .instructions-list { list-style: none; padding: 0; }
        .instructions-list { counter-reset: step-counter; }
        .instructions-list li { counter-increment: step-counter; position: relative; padding: 1.5rem 0 1.5rem 4rem; }
        .instructions-list li:before { content: counter(step-counter); position: absolute; left: 0; }
        .recipe-notes, .portioning-guide { padding: 1.5rem; margin: 2rem 0; }
        .back-link { display: inline-block; margin-bottom: 2rem; }
";

/// Render `recipe` as a complete HTML document.
///
/// All recipe text is escaped; inline markup in instructions is rendered as
/// plain names.
pub fn render(recipe: &Recipe, options: &RenderOptions) -> String {
    let title = encode_text(recipe.title());
    let site = encode_text(&options.site_name);
    let home = encode_double_quoted_attribute(&options.home_link);
    let stylesheet = encode_double_quoted_attribute(&options.stylesheet);
    let back = encode_double_quoted_attribute(&options.back_link);

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {site}</title>
    <link rel="stylesheet" href="{stylesheet}">
    <style>
{RECIPE_CSS}    </style>
</head>
<body class="cooking-page">
    <nav class="navbar cooking-nav">
        <div class="nav-container">
            <div class="nav-brand"><a href="{home}">{site}</a></div>
            <ul class="nav-menu">
                <li><a href="{back}">&larr; Back to Cooking</a></li>
            </ul>
        </div>
    </nav>

    <div class="container">
        <article class="recipe-detail">
            <a href="{back}#recipes" class="back-link">&larr; All Recipes</a>

            <div class="recipe-header">
                <h1>{title}</h1>
                <p class="recipe-intro">{intro}</p>

                <div class="recipe-stats">
"#,
        intro = encode_text(&recipe.intro),
    );

    for (label, value) in [
        ("Prep Time", recipe.prep_time()),
        ("Cook Time", recipe.cook_time()),
        ("Total Time", recipe.total_time()),
        ("Servings", recipe.servings()),
    ] {
        let _ = write!(
            html,
            r#"                    <div class="stat">
                        <span class="stat-label">{label}</span>
                        <span class="stat-value">{}</span>
                    </div>
"#,
            encode_text(value)
        );
    }
    html.push_str("                </div>\n            </div>\n");

    if !recipe.portioning_guide.is_empty() {
        html.push_str(
            "\n            <div class=\"portioning-guide\">\n                <h3>Portioning Guide</h3>\n",
        );
        for line in &recipe.portioning_guide {
            let _ = writeln!(html, "                <p>{}</p>", encode_text(line));
        }
        html.push_str("            </div>\n");
    }

    html.push_str(
        "\n            <section class=\"recipe-section\">\n                <h2>Ingredients</h2>\n                <ul class=\"ingredients-list\">\n",
    );
    push_items(&mut html, recipe.ingredients.iter().map(String::as_str));
    html.push_str("                </ul>\n            </section>\n");

    html.push_str(
        "\n            <section class=\"recipe-section\">\n                <h2>Instructions</h2>\n                <ol class=\"instructions-list\">\n",
    );
    push_items(&mut html, recipe.steps.iter().map(|step| step.text.as_str()));
    html.push_str("                </ol>\n            </section>\n");

    if !recipe.tips.is_empty() {
        html.push_str(
            "\n            <div class=\"recipe-notes\">\n                <h3>Tips</h3>\n                <ul>\n",
        );
        push_items(&mut html, recipe.tips.iter().map(String::as_str));
        html.push_str("                </ul>\n            </div>\n");
    }

    let _ = write!(
        html,
        r#"        </article>
    </div>

    <footer class="cooking-footer">
        <div class="container">
            <p><a href="{back}">&larr; Back to all recipes</a></p>
        </div>
    </footer>
</body>
</html>
"#
    );
    html
}

fn push_items<'a>(html: &mut String, items: impl Iterator<Item = &'a str>) {
    for item in items {
        let _ = writeln!(html, "                    <li>{}</li>", encode_text(item));
    }
}
