use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "tests/fixtures/sample_selection.tsv";
const PASTE: &str = "tests/fixtures/sample_paste.tsv";
const MISSING_OPACITY: &str = "tests/fixtures/missing_opacity.tsv";

fn gostyle() -> Command {
    let mut cmd = Command::cargo_bin("gostyle").unwrap();
    cmd.env_remove("GOSTYLE_TAX_ID")
        .env_remove("GOSTYLE_STROKE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn runs() {
    gostyle().assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = gostyle();
    cmd.arg("-V");
    cmd.assert().success().stdout("gostyle 0.1.0\n");
}

// Read-only commands

#[test]
fn ids_prints_comma_separated_list() {
    let mut cmd = gostyle();
    cmd.args(["ids", SAMPLE]);
    cmd.assert().success().stdout("5045,5634,5829\n");
}

#[test]
fn show_text_lists_records() {
    let mut cmd = gostyle();
    cmd.args(["show", SAMPLE]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#0000FF"))
        .stdout(predicate::str::contains("3 GO ID(s) selected"));
}

#[test]
fn show_json_output_format() {
    let mut cmd = gostyle();
    cmd.args(["show", SAMPLE, "--output", "json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 5045"))
        .stdout(predicate::str::contains("\"color\": \"#00FF00\""));
}

#[test]
fn css_prints_nine_rules_per_id() {
    let mut cmd = gostyle();
    cmd.args(["css", SAMPLE, "--stats"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "svg .part_GO5829 .coloured {stroke:black;}",
        ))
        .stdout(predicate::str::contains(
            "svg .mp_GO5634 *:not(text) {fill:#00FF00; opacity:0.8;}",
        ))
        .stderr(predicate::str::contains("27 rule(s) for 3 GO ID(s)"));
}

#[test]
fn css_stroke_from_env() {
    let mut cmd = gostyle();
    cmd.env("GOSTYLE_STROKE", "grey");
    cmd.args(["css", SAMPLE]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("svg .GO5045 .coloured {stroke:grey;}"));
}

#[test]
fn css_rejects_stroke_that_escapes_rule() {
    let mut cmd = gostyle();
    cmd.args(["css", SAMPLE, "--stroke", "black;}</style><script>alert(1)</script>"]);
    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid Stroke"));
}

#[test]
fn html_rejects_stroke_from_env() {
    let mut cmd = gostyle();
    cmd.env("GOSTYLE_STROKE", "red}</style>");
    cmd.args(["html", SAMPLE]);
    cmd.assert().failure().stdout("");
}

#[test]
fn css_empty_selection_warns() {
    let mut cmd = gostyle();
    cmd.args(["css", "-", "--stats"]).write_stdin("ID\tColor\tOpacity\n");
    cmd.assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No GO IDs selected"));
}

#[test]
fn ids_empty_selection_warns() {
    let mut cmd = gostyle();
    cmd.args(["ids", "-"]).write_stdin("ID\tColor\tOpacity\n");
    cmd.assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No GO IDs selected"));
}

#[test]
fn html_defaults_to_human() {
    let mut cmd = gostyle();
    cmd.args(["html", SAMPLE]);
    cmd.assert().success().stdout(predicate::str::contains(
        "<sib-swissbiopics-sl taxid=\"9606\" gos=\"5045,5634,5829\">",
    ));
}

#[test]
fn html_tax_id_flag_and_env() {
    let mut cmd = gostyle();
    cmd.args(["html", SAMPLE, "--tax-id", "10090"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("taxid=\"10090\""));

    let mut cmd = gostyle();
    cmd.env("GOSTYLE_TAX_ID", "7227");
    cmd.args(["html", SAMPLE]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("taxid=\"7227\""));
}

#[test]
fn html_empty_selection_fails() {
    let mut cmd = gostyle();
    cmd.args(["html", "-"]).write_stdin("ID\tColor\tOpacity\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No GO IDs selected"));
}

// Bulk import

#[test]
fn import_overwrites_and_moves_to_end() {
    let mut cmd = gostyle();
    cmd.args(["import", SAMPLE, PASTE, "--report"]);
    cmd.assert()
        .success()
        .stdout(
            "ID\tColor\tOpacity\n\
             5045\t#FF0000\t0.5\n\
             5829\t#0000FF\t1\n\
             5634\t#123456\t0.2\n\
             5739\t#ABCDEF\t0.3\n",
        )
        .stderr(predicate::str::contains("1 added, 1 replaced"));
}

#[test]
fn import_without_report_hints_at_notices() {
    let mut cmd = gostyle();
    cmd.args(["import", SAMPLE, PASTE]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "1 notice(s), rerun with --report for details",
        ))
        .stderr(predicate::str::contains("ReplacedExisting").not());
}

#[test]
fn import_clean_input_is_quiet() {
    let mut cmd = gostyle();
    cmd.args(["import", SAMPLE]);
    cmd.assert().success().stderr("");
}

#[test]
fn import_ragged_row_reports_line() {
    let mut cmd = gostyle();
    cmd.args(["import", "-"])
        .write_stdin("ID\tColor\tOpacity\n5045\t#FF0000\t0.5\n5634\t#00FF00\n");
    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Error reading data on line 3"));
}

#[test]
fn import_from_stdin() {
    let mut cmd = gostyle();
    cmd.args(["import", "-"])
        .write_stdin("ID\tColor\tOpacity\n5045\tFF0000\t0.5\n");
    cmd.assert()
        .success()
        .stdout("ID\tColor\tOpacity\n5045\t#FF0000\t0.5\n");
}

#[test]
fn import_missing_column_fails() {
    let mut cmd = gostyle();
    cmd.args(["import", MISSING_OPACITY]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing columns in input: Opacity"));
}

#[test]
fn import_empty_input_fails() {
    let mut cmd = gostyle();
    cmd.args(["import", "-"]).write_stdin("   \n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please enter valid GO ID data"));
}

#[test]
fn import_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("merged.tsv");

    let mut cmd = gostyle();
    cmd.args(["import", SAMPLE, "--output"]).arg(&out);
    cmd.assert().success().stdout("");

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("ID\tColor\tOpacity\n5045\t#FF0000\t0.5\n"));
}

// Single operations

#[test]
fn add_starts_from_empty_selection() {
    let mut cmd = gostyle();
    cmd.args([
        "add",
        "--id",
        "GO:0005634",
        "--color",
        "00ff00",
        "--opacity",
        "0.25",
    ]);
    cmd.assert()
        .success()
        .stdout("ID\tColor\tOpacity\n5634\t#00ff00\t0.25\n");
}

#[test]
fn add_duplicate_fails() {
    let mut cmd = gostyle();
    cmd.args(["add", "--input", SAMPLE, "--id", "5045"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("GO ID 5045 already exists"));
}

#[test]
fn add_rejects_out_of_range_opacity() {
    let mut cmd = gostyle();
    cmd.args(["add", "--id", "5045", "--opacity", "1.5"]);
    cmd.assert().failure();
}

#[test]
fn edit_keeps_position() {
    let mut cmd = gostyle();
    cmd.args([
        "edit",
        "--input",
        SAMPLE,
        "--id",
        "5045",
        "--color",
        "#FFFFFF",
        "--opacity",
        "0",
    ]);
    cmd.assert().success().stdout(
        "ID\tColor\tOpacity\n\
         5045\t#FFFFFF\t0\n\
         5634\t#00FF00\t0.8\n\
         5829\t#0000FF\t1\n",
    );
}

#[test]
fn edit_missing_id_fails() {
    let mut cmd = gostyle();
    cmd.args([
        "edit", "--input", SAMPLE, "--id", "1", "--color", "#FFFFFF", "--opacity", "0",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("GO ID 1 not found"));
}

#[test]
fn delete_absent_id_is_noop() {
    let mut cmd = gostyle();
    cmd.args(["delete", "--input", SAMPLE, "--id", "42"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5829\t#0000FF\t1"))
        .stderr(predicate::str::contains("Selection unchanged"));
}

#[test]
fn nonexistent_file_fails() {
    let mut cmd = gostyle();
    cmd.args(["ids", "nonexistent_file.tsv"]);
    cmd.assert().failure();
}
