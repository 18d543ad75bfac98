// tests/cli.rs
//
// Запуск бинарника render_svg как внешнего процесса: коды выхода и вывод.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_render_svg"))
        .args(args)
        .output()
        .expect("failed to spawn render_svg")
}

#[test]
fn default_format_is_builtin() {
    // без --format и без --props должен сработать встроенный MODULES
    let out = run(&["--value", "1101", "--paths"]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "M0,0h4v100h-4z\nM6,0h2v100h-2z\n");
}

#[test]
fn flags_without_value_are_usage_errors() {
    for flag in ["--out", "--props", "--value"] {
        let out = run(&[flag]);
        assert_eq!(out.status.code(), Some(2), "{flag}");
        assert!(String::from_utf8_lossy(&out.stderr).contains("нет значения"), "{flag}");
    }
}

#[test]
fn unknown_format_exits_with_error() {
    let out = run(&["--value", "1101", "--format", "CODE128"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid barcode format."));
}
