//! CLI tests
//!
//! Parses real argument lists and runs them through the runner.

use clap::Parser;
use pagelinks::cli::{Cli, Runner};
use pretty_assertions::assert_eq;
use std::io::Write;

fn run(args: &[&str]) -> pagelinks::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("pagelinks").chain(args.iter().copied()))
        .expect("arguments should parse");
    Runner::new(cli).execute()
}

#[test]
fn test_render_html() {
    let output = run(&["render", "100", "--per-page", "10", "--link-cnt", "3"]).unwrap();
    assert_eq!(
        output,
        concat!(
            r#"<div id="pagination"><span>1</span><a href="?&offset=10" >2</a><a href="?&offset=20" >3</a>"#,
            r#"<a href="?&offset=10" >Next &rsaquo;</a><a href="?&offset=90" >Last &raquo;</a>"#,
            "<br/>Page 1 of 10<br/>Displaying records 1 thru 10 of 100</div>"
        )
    );
}

#[test]
fn test_render_by_page_number() {
    let by_page = run(&["render", "100", "--page", "3"]).unwrap();
    let by_offset = run(&["render", "100", "--offset", "50"]).unwrap();
    assert_eq!(by_page, by_offset);
    assert!(by_page.contains("Page 3 of 4"));
}

#[test]
fn test_offset_and_page_conflict() {
    let result = Cli::try_parse_from(["pagelinks", "render", "100", "--offset", "0", "--page", "1"]);
    assert!(result.is_err());
}

#[test]
fn test_render_json() {
    let output = run(&["render", "100", "--offset", "50", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["page_count"], 4);
    assert_eq!(value["current_page"], 3);
    assert_eq!(value["lowest_visible_page"], 1);
    assert_eq!(value["highest_visible_page"], 4);
    assert_eq!(value["links"][0]["role"], "first");
    assert_eq!(value["links"][1]["role"], "prev");
    assert_eq!(value["links"][1]["offset"], 25);
}

#[test]
fn test_render_rejects_counts_beyond_config_range() {
    let err = run(&["render", "100", "--per-page", "9223372036854775808"]).unwrap_err();
    assert!(err.is_invalid_configuration());
    assert_eq!(
        err.to_string(),
        "Invalid config value for 'per_page': 9223372036854775808 is larger than 9223372036854775807"
    );

    let err = run(&["render", "100", "--link-cnt", "18446744073709551615"]).unwrap_err();
    assert!(err.to_string().contains("'link_cnt'"));
    assert!(!err.to_string().contains("greater than 0"));

    let err = run(&["render", "100", "--jump-size", "9223372036854775808"]).unwrap_err();
    assert!(err.to_string().contains("'jump_size'"));
}

#[test]
fn test_render_accepts_largest_config_count() {
    let output = run(&["render", "100", "--per-page", "9223372036854775807"]).unwrap();
    assert_eq!(output, "");
}

#[test]
fn test_render_suppressed() {
    assert_eq!(run(&["render", "20"]).unwrap(), "");
    assert_eq!(run(&["render", "20", "--format", "json"]).unwrap(), "null");
}

#[test]
fn test_render_rejects_zero_settings() {
    for flag in ["--per-page", "--link-cnt", "--jump-size"] {
        let err = run(&["render", "100", flag, "0"]).unwrap_err();
        assert!(err.is_invalid_configuration(), "{flag}");
    }
}

#[test]
fn test_render_with_style_and_base_url() {
    let output = run(&[
        "render",
        "100",
        "--style",
        "raw",
        "--base-url",
        "/list?sort=name",
    ])
    .unwrap();
    assert!(output.starts_with(
        r#"<div class="raw_pagination"><em class="current">1</em><a href="/list?sort=name&offset=25" >2</a>"#
    ));
}

#[test]
fn test_render_with_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "per_page: 10\nlink_cnt: 3\ntemplates:\n  outer: '<nav>[+content+]</nav>'"
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let output = run(&["--config", path, "render", "100"]).unwrap();
    assert!(output.starts_with("<nav><span>1</span>"));
    assert!(output.contains(r#"<a href="?&offset=20" >3</a><a href="?&offset=10" >Next"#));

    // Command-line values override the file
    let output = run(&["render", "100", "-C", path, "--per-page", "50"]).unwrap();
    assert_eq!(
        output,
        r#"<nav><span>1</span><a href="?&offset=50" >2</a><a href="?&offset=50" >Next &rsaquo;</a><a href="?&offset=50" >Last &raquo;</a></nav>"#
    );
}

#[test]
fn test_missing_config_file() {
    let err = run(&["--config", "/nonexistent/pager.yaml", "render", "100"]).unwrap_err();
    assert!(matches!(err, pagelinks::Error::FileNotFound { .. }));
}

#[test]
fn test_styles_command() {
    let output = run(&["styles"]).unwrap();
    assert_eq!(output, "apple\ndefault\ndigg\nflickr\nraw");
}

#[test]
fn test_conversions() {
    assert_eq!(run(&["offset-to-page", "50", "--per-page", "25"]).unwrap(), "3");
    assert_eq!(run(&["page-to-offset", "3", "--per-page", "25"]).unwrap(), "50");
    assert_eq!(run(&["page-to-offset", "1", "--per-page", "25"]).unwrap(), "0");

    let err = run(&["offset-to-page", "50", "--per-page", "0"]).unwrap_err();
    assert!(err.is_invalid_configuration());
}
