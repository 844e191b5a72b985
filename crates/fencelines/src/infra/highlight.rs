//! HTML syntax highlighting built on top of syntect.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::Lazy;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::app::render::{Highlight, HighlightRequest};
use crate::domain::model::Rendered;

const DEFAULT_THEME: &str = "base16-ocean.dark";
const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

static DEFAULT_ASSETS: Lazy<(Arc<SyntaxSet>, Arc<ThemeSet>)> = Lazy::new(|| {
    (
        Arc::new(SyntaxSet::load_defaults_newlines()),
        Arc::new(ThemeSet::load_defaults()),
    )
});

/// Syntect-backed highlighter producing class-annotated HTML.
///
/// Blocks whose language has no known syntax, or whose highlighting
/// fails, degrade to escaped plain text inside the same wrapper markup.
#[derive(Debug, Clone)]
pub struct HtmlHighlighter {
    syntax_set: Arc<SyntaxSet>,
    theme_set: Arc<ThemeSet>,
}

impl Default for HtmlHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlHighlighter {
    pub fn new() -> Self {
        let assets = &*DEFAULT_ASSETS;
        Self {
            syntax_set: Arc::clone(&assets.0),
            theme_set: Arc::clone(&assets.1),
        }
    }

    pub fn available_themes(&self) -> Vec<String> {
        let mut themes: Vec<_> = self.theme_set.themes.keys().cloned().collect();
        themes.sort();
        themes
    }

    /// CSS rules matching the classes emitted by [`Highlight::highlight`].
    ///
    /// Unknown theme names fall back to the default theme with a warning
    /// rather than failing.
    pub fn theme_css(&self, theme: &str) -> Result<String> {
        let resolved = self.resolve_theme(theme);
        tracing::debug!(theme = %resolved.name, "emitting theme css");
        Ok(css_for_theme_with_class_style(resolved.theme, CLASS_STYLE)?)
    }

    fn syntax_for_token(&self, token: &str) -> Option<&SyntaxReference> {
        if token.is_empty() {
            return None;
        }
        self.syntax_set.find_syntax_by_token(token)
    }

    fn highlight_html(&self, src: &str, syntax: &SyntaxReference) -> Result<String> {
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);
        for line in LinesWithEndings::from(src) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }

    fn resolve_theme<'a>(&'a self, requested: &'a str) -> ResolvedTheme<'a> {
        if let Some(theme) = self.theme_set.themes.get(requested) {
            return ResolvedTheme {
                name: Cow::Borrowed(requested),
                theme,
            };
        }

        if let Some(name) = self
            .theme_set
            .themes
            .keys()
            .find(|name| name.eq_ignore_ascii_case(requested))
            .cloned()
            && let Some(theme) = self.theme_set.themes.get(&name)
        {
            return ResolvedTheme {
                name: Cow::Owned(name),
                theme,
            };
        }

        let fallback_name = if self.theme_set.themes.contains_key(DEFAULT_THEME) {
            DEFAULT_THEME.to_string()
        } else {
            self.theme_set
                .themes
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(|| DEFAULT_THEME.to_string())
        };

        let theme = self
            .theme_set
            .themes
            .get(&fallback_name)
            .expect("fallback theme must exist");

        tracing::warn!(
            requested,
            fallback = %fallback_name,
            "theme not found"
        );

        ResolvedTheme {
            name: Cow::Owned(fallback_name),
            theme,
        }
    }
}

impl Highlight for HtmlHighlighter {
    fn highlight(&self, request: HighlightRequest<'_>) -> Rendered {
        let body = match self.syntax_for_token(request.language) {
            Some(syntax) => match self.highlight_html(request.src, syntax) {
                Ok(html) => html,
                Err(err) => {
                    tracing::warn!(language = %request.language, error = %err, "highlight failed");
                    html_escape::encode_text(request.src).into_owned()
                }
            },
            None => {
                tracing::debug!(language = %request.language, "no syntax for language");
                html_escape::encode_text(request.src).into_owned()
            }
        };
        Rendered(wrap(&body, request.language, request.class_name))
    }
}

#[derive(Debug, Clone)]
struct ResolvedTheme<'a> {
    name: Cow<'a, str>,
    theme: &'a Theme,
}

fn wrap(body: &str, language: &str, class_name: &str) -> String {
    let mut html = String::with_capacity(body.len() + 64);
    html.push_str("<pre");
    if !class_name.is_empty() {
        let _ = write!(html, " class=\"{class_name}\"");
    }
    html.push_str("><code");
    if !language.is_empty() {
        let _ = write!(html, " class=\"language-{language}\"");
    }
    html.push('>');
    html.push_str(body);
    html.push_str("</code></pre>\n");
    html
}
