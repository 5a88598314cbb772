//! Command-line runs against a temporary directory.

use calamine::{Reader, Xlsx, open_workbook};
use clap::Parser;
use tempfile::TempDir;
use transport_workbook::GeneratorError;
use transport_workbook::cli::{Layout, LocaleArg, TemplateApp, TemplateCli};

fn cli(args: &[&str]) -> TemplateCli {
    TemplateCli::parse_from(std::iter::once("transport-workbook").chain(args.iter().copied()))
}

#[test]
fn test_writes_workbook_to_output_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("out.xlsx");
    let path_arg = path.to_str().expect("utf-8 path");

    TemplateApp::new(cli(&["-o", path_arg, "-q"]))
        .run()
        .expect("run");

    let workbook: Xlsx<_> = open_workbook(&path).expect("open output");
    assert_eq!(workbook.sheet_names()[0], "ダッシュボード");
}

#[test]
fn test_english_source_layout() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("source.xlsx");
    let path_arg = path.to_str().expect("utf-8 path");

    let parsed = cli(&["-o", path_arg, "-l", "en", "--layout", "source", "-q"]);
    assert_eq!(parsed.locale, LocaleArg::En);
    assert_eq!(parsed.layout, Layout::Source);
    TemplateApp::new(parsed).run().expect("run");

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("open output");
    assert_eq!(workbook.sheet_names()[0], "Dashboard");
    let formulas = workbook
        .worksheet_formula("Profit-and-Loss")
        .expect("formulas");
    assert!(formulas.get_value((4, 2)).is_none_or(String::is_empty));
}

#[test]
fn test_month_out_of_range_fails() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("never.xlsx");
    let path_arg = path.to_str().expect("utf-8 path");

    let err = TemplateApp::new(cli(&["-o", path_arg, "-m", "13", "-q"]))
        .run()
        .expect_err("month 13");
    assert!(matches!(err, GeneratorError::Configuration(_)));
    assert!(!path.exists());
}

#[test]
fn test_entry_rows_flag() {
    let parsed = cli(&["--entry-rows", "20"]);
    let builder = parsed.builder();
    assert!(builder.entry_rows_enabled());

    let doc = builder.build().expect("build");
    let sales = doc.sheet("売上入力").expect("sales");
    assert!(sales.formula_at("B23").is_some());
    assert!(sales.formula_at("B24").is_none());
}

#[test]
fn test_dump_model_does_not_write_a_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("unused.xlsx");
    let path_arg = path.to_str().expect("utf-8 path");

    TemplateApp::new(cli(&["-o", path_arg, "--dump-model", "-q"]))
        .run()
        .expect("run");
    assert!(!path.exists());
}

#[test]
fn test_rejects_unknown_layout() {
    assert!(
        TemplateCli::try_parse_from(["transport-workbook", "--layout", "partial"]).is_err()
    );
}
