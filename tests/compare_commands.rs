use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::command::{passages_dir, run_passdiff_command, stdout_of};

#[rstest]
fn compare_passages_with_markers(passages_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_passdiff_command(
        passages_dir.path(),
        &["compare", "old.txt", "new.txt", "--style", "markers"],
    ))?;

    assert_eq!(actual_output, "The [-cat-] [+dog+] sat on the mat\n");

    Ok(())
}

#[rstest]
fn compare_passages_with_forced_colours(
    passages_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_passdiff_command(
        passages_dir.path(),
        &["compare", "old.txt", "new.txt", "--color", "always"],
    ))?;

    assert_eq!(
        actual_output,
        "\x1b[93mThe \x1b[91mcat \x1b[32mdog \x1b[93msat on the mat \x1b[0m\n"
    );

    Ok(())
}

#[rstest]
fn compare_passages_without_terminal_drops_colours(
    passages_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_passdiff_command(
        passages_dir.path(),
        &["compare", "old.txt", "new.txt"],
    ))?;

    assert_eq!(actual_output, "The cat dog sat on the mat\n");

    Ok(())
}

#[rstest]
fn compare_passages_with_no_color_set(
    passages_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let auto_output = stdout_of(
        run_passdiff_command(
            passages_dir.path(),
            &["compare", "old.txt", "new.txt", "--color", "auto"],
        )
        .env("NO_COLOR", "1"),
    )?;
    let forced_output = stdout_of(
        run_passdiff_command(
            passages_dir.path(),
            &["compare", "old.txt", "new.txt", "--color", "always"],
        )
        .env("NO_COLOR", "1"),
    )?;

    assert_eq!(auto_output, "The cat dog sat on the mat\n");
    assert!(forced_output.contains("\x1b[91mcat"));

    Ok(())
}

#[rstest]
fn compare_passages_as_html(passages_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_passdiff_command(
        passages_dir.path(),
        &["compare", "old.txt", "new.txt", "-s", "html"],
    ))?;

    assert_eq!(
        actual_output,
        "<span>The</span> <del>cat</del> <ins>dog</ins> <span>sat on the mat</span>\n"
    );

    Ok(())
}

#[rstest]
fn compare_keeping_punctuation(passages_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_passdiff_command(
        passages_dir.path(),
        &[
            "compare",
            "old.txt",
            "new.txt",
            "--style",
            "markers",
            "--keep-punctuation",
        ],
    ))?;

    assert_eq!(
        actual_output,
        "The [-cat-] [+dog+] sat on the [-mat.-] [+mat!+]\n"
    );

    Ok(())
}

#[rstest]
fn compare_new_passage_from_stdin(passages_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(
        run_passdiff_command(
            passages_dir.path(),
            &["compare", "old.txt", "-", "--style", "brackets"],
        )
        .write_stdin("The cat sat on the rug"),
    )?;

    assert_eq!(actual_output, "The cat sat on the [-mat-] [+rug+]\n");

    Ok(())
}

#[rstest]
fn compare_identical_random_passages(
    passages_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = Words(5..20).fake::<Vec<String>>().join(" ");
    passages_dir.child("same.txt").write_str(&words)?;

    let actual_output = stdout_of(&mut run_passdiff_command(
        passages_dir.path(),
        &["compare", "same.txt", "same.txt", "--style", "markers"],
    ))?;

    assert_eq!(actual_output, format!("{words}\n"));

    Ok(())
}

#[rstest]
fn compare_empty_passages(passages_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    passages_dir.child("empty.txt").write_str("  \n ")?;

    let actual_output = stdout_of(&mut run_passdiff_command(
        passages_dir.path(),
        &["compare", "empty.txt", "old.txt", "--style", "markers"],
    ))?;

    assert_eq!(actual_output, "[+The cat sat on the mat+]\n");

    Ok(())
}

#[rstest]
fn compare_fails_for_missing_passage(passages_dir: TempDir) {
    run_passdiff_command(passages_dir.path(), &["compare", "old.txt", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read passage from"))
        .stderr(predicate::str::contains("nope.txt"));
}

#[rstest]
fn compare_fails_when_both_passages_come_from_stdin(passages_dir: TempDir) {
    run_passdiff_command(passages_dir.path(), &["compare", "-", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one passage can be read from stdin"));
}

#[rstest]
fn compare_fails_for_unknown_style(passages_dir: TempDir) {
    run_passdiff_command(
        passages_dir.path(),
        &["compare", "old.txt", "new.txt", "--style", "sepia"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown style 'sepia'"));
}
