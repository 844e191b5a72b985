use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use fencelines::app::render::do_format;
use fencelines::app::validate::{BaseValidator, SHOW_LINES, do_validate};
use fencelines::domain::model::{Attrs, Inputs, Options};
use fencelines::infra::config::Config;
use fencelines::infra::highlight::HtmlHighlighter;
use fencelines::infra::logging::TracingWarnings;

/// Render a source listing as highlighted HTML, keeping only selected lines.
#[derive(Parser)]
#[command(author, version, about = "Filter and highlight fenced code listings", long_about = None)]
struct Cli {
    /// File to render; reads stdin when omitted.
    file: Option<PathBuf>,
    /// Comma-separated line ranges to keep, e.g. "1:3,7,10:".
    #[arg(long)]
    lines: Option<String>,
    /// Language tag used for syntax lookup.
    #[arg(long)]
    language: Option<String>,
    /// CSS class applied to the wrapping element.
    #[arg(long)]
    class_name: Option<String>,
    /// Theme used for --emit-css.
    #[arg(long)]
    theme: Option<String>,
    /// Print the CSS for the configured theme and exit.
    #[arg(long)]
    emit_css: bool,
}

fn main() -> Result<()> {
    fencelines::init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let highlighter = HtmlHighlighter::new();

    if cli.emit_css {
        let theme = cli.theme.as_deref().unwrap_or(&config.defaults.theme);
        print!("{}", highlighter.theme_css(theme)?);
        return Ok(());
    }

    let src = read_source(cli.file.as_deref())?;
    let language = cli
        .language
        .unwrap_or_else(|| config.defaults.language.clone());
    let class_name = cli
        .class_name
        .unwrap_or_else(|| config.defaults.class_name.clone());

    let mut inputs = Inputs::new();
    if let Some(lines) = cli.lines {
        inputs.insert(SHOW_LINES.to_owned(), lines);
    }
    let mut options = Options::default();
    let attrs = Attrs::new();

    if !do_validate(
        &language,
        &mut inputs,
        &mut options,
        &attrs,
        &TracingWarnings,
        &BaseValidator::new(),
    ) {
        let unhandled: Vec<&String> = inputs.keys().collect();
        anyhow::bail!("unsupported fence options: {unhandled:?}");
    }

    let rendered = do_format(&src, &language, &class_name, &options, &attrs, &highlighter);
    print!("{}", rendered.0);
    Ok(())
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
