//! End-to-end runs of the validation and format stages with the real
//! syntect highlighter.

use fencelines::app::render::do_format;
use fencelines::app::validate::{BaseValidator, SHOW_LINES, do_validate};
use fencelines::domain::model::{Attrs, Inputs, Options};
use fencelines::infra::highlight::HtmlHighlighter;
use fencelines::infra::logging::BufferedWarnings;

const SOURCE: &str = "\
let alpha = 1;
let bravo = 2;
let charlie = 3;
let delta = 4;
";

fn pipeline(expression: Option<&str>) -> (bool, Vec<String>, String) {
    let mut inputs = Inputs::new();
    if let Some(expression) = expression {
        inputs.insert(SHOW_LINES.to_owned(), expression.to_owned());
    }
    let mut options = Options::default();
    let attrs = Attrs::new();
    let warnings = BufferedWarnings::new();

    let verdict = do_validate(
        "rust",
        &mut inputs,
        &mut options,
        &attrs,
        &warnings,
        &BaseValidator::new(),
    );

    let rendered = do_format(
        SOURCE,
        "rust",
        "highlight",
        &options,
        &attrs,
        &HtmlHighlighter::new(),
    );

    (verdict, warnings.drain(), rendered.0)
}

#[test]
fn renders_everything_without_an_expression() {
    let (verdict, warnings, html) = pipeline(None);
    assert!(verdict);
    assert!(warnings.is_empty());
    for word in ["alpha", "bravo", "charlie", "delta"] {
        assert!(html.contains(word), "missing {word} in {html}");
    }
}

#[test]
fn filters_the_selected_lines_before_rendering() {
    let (verdict, warnings, html) = pipeline(Some("2:3"));
    assert!(verdict);
    assert!(warnings.is_empty());
    assert!(html.contains("bravo") && html.contains("charlie"));
    assert!(!html.contains("alpha") && !html.contains("delta"));
}

#[test]
fn bad_items_warn_but_the_good_ones_still_filter() {
    let (verdict, warnings, html) = pipeline(Some("oops,4:"));
    assert!(verdict);
    assert_eq!(warnings.len(), 1);
    assert!(
        warnings[0].starts_with(
            "Invalid `show_lines` option in \"oops,4:\", some lines will not be filtered: "
        ),
        "unexpected warning: {}",
        warnings[0]
    );
    assert!(warnings[0].contains("Range 1 (\"oops\")"));
    assert!(html.contains("delta"));
    assert!(!html.contains("alpha"));
}

#[test]
fn an_all_invalid_expression_degrades_to_no_filtering() {
    let (verdict, warnings, html) = pipeline(Some("0,x:y"));
    assert!(verdict);
    assert_eq!(warnings.len(), 2);
    for word in ["alpha", "bravo", "charlie", "delta"] {
        assert!(html.contains(word), "missing {word}");
    }
}
