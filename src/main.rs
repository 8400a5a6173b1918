use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use recipe_page::behavior::Filter;
use recipe_page::recipe::{self, listing, ListingEntry, RenderOptions};
use recipe_page::testing::outline;
use recipe_page::{Page, PageConfig};

#[derive(Parser, Debug)]
#[command(name = "recipe-page", about = "CookLang recipes to HTML, and a headless listing preview")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a .cook file to a recipe page.
    Convert {
        file: PathBuf,
        /// Output path. Defaults to the input with an .html extension.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value = "Recipes")]
        site_name: String,
        #[arg(long, default_value = "styles.css")]
        stylesheet: String,
        #[arg(long, default_value = "cooking.html")]
        back_link: String,
    },
    /// Build the listing page for some recipes, apply a filter and print the
    /// resulting document outline.
    Preview {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Category to filter by (`all` for every card).
        #[arg(long)]
        filter: Option<String>,
        /// Scroll offset to apply before printing.
        #[arg(long)]
        scroll: Option<i32>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            file,
            out,
            site_name,
            stylesheet,
            back_link,
        } => {
            let options = RenderOptions::new()
                .with_site_name(site_name)
                .with_stylesheet(stylesheet)
                .with_back_link(back_link);
            let out = out.unwrap_or_else(|| output_path(&file));
            convert(&file, &out, &options)?;
        }
        Command::Preview {
            files,
            filter,
            scroll,
        } => preview(&files, filter.as_deref(), scroll)?,
    }

    Ok(())
}

fn read_recipe(path: &Path) -> Result<recipe::Recipe> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    recipe::parse(&source).with_context(|| format!("parsing {}", path.display()))
}

fn convert(input: &Path, out: &Path, options: &RenderOptions) -> Result<()> {
    let recipe = read_recipe(input)?;
    let html = recipe::render(&recipe, options);
    fs::write(out, html).with_context(|| format!("writing {}", out.display()))?;

    println!("converted {} -> {}", input.display(), out.display());
    println!("ingredients: {}", recipe.ingredients.len());
    println!("tools: {}", recipe.tools.len());
    println!("steps: {}", recipe.steps.len());
    Ok(())
}

fn preview(files: &[PathBuf], filter: Option<&str>, scroll: Option<i32>) -> Result<()> {
    let entries = files
        .iter()
        .map(|path| {
            let recipe = read_recipe(path)?;
            Ok(ListingEntry::from_recipe(&recipe, page_href(path)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut page = Page::load(listing::build(&entries), PageConfig::default());

    if let Some(value) = filter {
        let wanted = Filter::parse(value);
        let button = page
            .controller()
            .filter()
            .buttons()
            .find(|(_, filter)| **filter == wanted)
            .map(|(node, _)| node);
        match button {
            Some(node) => {
                page.click(node);
            }
            None => bail!("no filter button for {value:?}"),
        }
    }
    if let Some(y) = scroll {
        page.scroll_to(y);
    }
    page.run_until_idle();

    println!("{}", outline(page.dom()));
    Ok(())
}

/// `dir/soup.cook` -> `dir/soup.html`
fn output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

/// The listing links to each converted page by file name.
fn page_href(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.html")
}
