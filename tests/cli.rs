//! End-to-end tests for the huepick binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn huepick() -> Command {
    Command::cargo_bin("huepick").unwrap()
}

#[test]
fn converts_hex_argument() {
    huepick()
        .arg("#abc")
        .arg("--no-copy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input (hex)"))
        // 0xaabbcc as a decimal packed value
        .stdout(predicate::str::contains("11189196"))
        .stdout(predicate::str::contains("#aabbcc"))
        .stdout(predicate::str::contains("170 187 204"))
        .stdout(predicate::str::contains("rgb(170, 187, 204)"))
        .stdout(predicate::str::contains("rgb(0.67, 0.73, 0.8)"));
}

#[test]
fn converts_rgb_argument() {
    huepick()
        .arg("rgb(255, 255, 255)")
        .arg("--no-copy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input (RGB)"))
        .stdout(predicate::str::contains("ffffff"))
        .stdout(predicate::str::contains("16777215"));
}

#[test]
fn rejects_unknown_format() {
    huepick()
        .arg("not a color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color format"));
}

#[test]
fn rejects_out_of_range_hex() {
    huepick()
        .arg("#1000000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds 0xffffff"));
}

#[test]
fn interactive_mode_reads_stdin() {
    huepick()
        .arg("--no-copy")
        .write_stdin("rgb(255, 255, 255)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input (RGB)"))
        .stdout(predicate::str::contains("ffffff"));
}

#[test]
fn interactive_mode_reprompts_on_parse_error() {
    huepick()
        .arg("--no-copy")
        .write_stdin("garbage\n#fff\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown color format"))
        .stdout(predicate::str::contains("Input (hex)"));
}

#[test]
fn copy_prompt_skips_quietly_on_eof() {
    // Without --no-copy the binary prompts for a selection; EOF skips it.
    huepick()
        .arg("#fff")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input (hex)"));
}
