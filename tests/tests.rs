/*!
Сквозные тесты, запускающие собранный бинарный файл hl с данными на
stdin и проверяющие stdout, stderr и код выхода.
*/

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

/// Запускает hl с данными аргументами, передавая `input` на stdin.
fn hl(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hl"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn hl");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write to stdin");
    child.wait_with_output().expect("failed to wait on hl")
}

/// Как `hl`, но требует успешного завершения и возвращает stdout.
fn stdout(args: &[&str], input: &str) -> String {
    let output = hl(args, input);
    assert!(
        output.status.success(),
        "hl {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr),
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn default_markers_are_inverse_video() {
    let got = stdout(&["bar"], "foobarbaz\n");
    assert_eq!("foo\x1b[7mbar\x1b[0mbaz\n", got);
}

#[test]
fn custom_markers() {
    let got = stdout(&["-b", "<", "-a", ">", "[0-9][0-9]*"], "a1b22c333d\n");
    assert_eq!("a<1>b<22>c<333>d\n", got);
}

#[test]
fn marker_escape_sequences() {
    let got = stdout(&["-b", r"\x1B[32m", "-a", r"\x1B[0m", "b"], "abc\n");
    assert_eq!("a\x1b[32mb\x1b[0mc\n", got);
}

#[test]
fn lines_without_matches_pass_through() {
    let input = "one\ntwo\nthree\n";
    let got = stdout(&["-b", "<", "-a", ">", "o"], input);
    assert_eq!("<o>ne\ntw<o>\nthree\n", got);
}

#[test]
fn line_count_is_preserved() {
    let input = "a\n\nb\n\n";
    let got = stdout(&["-b", "<", "-a", ">", "zzz"], input);
    assert_eq!(input, got);
}

#[test]
fn final_line_without_terminator() {
    let got = stdout(&["-b", "<", "-a", ">", "b"], "abc\nxbz");
    assert_eq!("a<b>c\nx<b>z", got);
}

#[test]
fn ignore_case() {
    let got = stdout(&["-b", "<", "-a", ">", "abc"], "ABCabc\n");
    assert_eq!("ABC<abc>\n", got);

    let got = stdout(&["-i", "-b", "<", "-a", ">", "abc"], "ABCabc\n");
    assert_eq!("<ABC><abc>\n", got);
}

#[test]
fn basic_grammar_is_default() {
    // В базовой грамматике `a{2,3}` — литерал.
    let got = stdout(&["-b", "<", "-a", ">", "a{2,3}"], "aaaa\n");
    assert_eq!("aaaa\n", got);

    let got = stdout(&["-e", "-b", "<", "-a", ">", "a{2,3}"], "aaaa\n");
    assert_eq!("<aaa>a\n", got);
}

#[test]
fn basic_grammar_groups() {
    let got = stdout(&["-b", "<", "-a", ">", r"x\(ab\)*y"], "xababy\n");
    assert_eq!("<xababy>\n", got);

    // Группа с `*` совпадает с пустой строкой уже на нулевом смещении:
    // это самое левое совпадение, оно печатается один раз и завершает
    // сканирование строки.
    let got = stdout(&["-b", "<", "-a", ">", r"\(ab\)*"], "xababy\n");
    assert_eq!("<>xababy\n", got);
}

#[test]
fn end_of_line_match() {
    let got = stdout(&["-b", "<", "-a", ">", "d$"], "abcd\n");
    assert_eq!("abc<d>\n", got);
}

#[test]
fn empty_pattern_match_terminates_scan() {
    let got = stdout(&["-e", "-b", "<", "-a", ">", "x*"], "aaa\n");
    assert_eq!("<>aaa\n", got);
}

#[test]
fn invalid_pattern_fails_before_any_output() {
    let output = hl(&["[abc"], "line one\nline two\n");
    assert!(!output.status.success());
    assert_eq!(Some(2), output.status.code());
    assert!(output.stdout.is_empty(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hl: "), "{stderr}");
    assert!(stderr.contains("[abc"), "{stderr}");
}

#[test]
fn missing_pattern_is_a_usage_error() {
    let output = hl(&[], "");
    assert!(!output.status.success());
    assert_eq!(Some(2), output.status.code());
}

#[test]
fn too_many_patterns_is_a_usage_error() {
    let output = hl(&["foo", "bar"], "");
    assert_eq!(Some(2), output.status.code());
}

#[test]
fn unrecognized_flag_is_reported() {
    let output = hl(&["--nonexistent", "foo"], "");
    assert_eq!(Some(2), output.status.code());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("нераспознанный флаг --nonexistent"),
        "{stderr}"
    );
}

#[test]
fn help_short_circuits() {
    // Справка выводится даже при невалидном шаблоне в аргументах.
    let output = hl(&["--help", "[abc"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ИСПОЛЬЗОВАНИЕ"), "{stdout}");
    assert!(stdout.contains("--extended-regexp"), "{stdout}");
}

#[test]
fn version() {
    let output = hl(&["-V"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("hl "), "{stdout}");
}

#[test]
fn pattern_may_start_with_dash_after_separator() {
    let got = stdout(&["-b", "<", "-a", ">", "--", "-foo"], "x-fooy\n");
    assert_eq!("x<-foo>y\n", got);
}
