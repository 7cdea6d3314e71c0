//! End-to-end flows through the command layer with in-memory I/O.

use approx::assert_relative_eq;
use service_cli::commands::{interactive, solve};
use service_cli::config::{build_config_with_env, CliArgs, OutputFormat};
use service_cli::output::write_error;
use service_cli::CliError;
use std::io::Cursor;

/// Run a session the way `main` does, reporting any error on the same stream.
fn interactive_session(input: &str, format: OutputFormat) -> (bool, String) {
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let result = interactive::run(&mut reader, &mut out, format);
    let ok = result.is_ok();
    if let Err(err) = result {
        write_error(&mut out, format, &err).unwrap();
    }
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn test_interactive_quadratic() {
    let (ok, out) = interactive_session("1 -3 2\n", OutputFormat::Text);
    assert!(ok);
    assert_eq!(out, "Введите: \nКорни: \n2 + 0i\n1 + 0i\n");
}

#[test]
fn test_interactive_leading_zeros() {
    let (_, out) = interactive_session("0 0 1 -5\n", OutputFormat::Text);
    assert!(out.ends_with("Корни: \n5 + 0i\n"));
}

#[test]
fn test_interactive_all_zero_reports_single_error_line() {
    let (ok, out) = interactive_session("0 0 0\n", OutputFormat::Text);
    assert!(!ok);
    assert_eq!(
        out,
        "Введите: \nОшибка: Unsupported degree: 0 coefficients after normalisation, expected 2 or 3\n"
    );
    assert!(!out.contains("Корни"));
}

#[test]
fn test_interactive_cubic_rejected() {
    let (ok, out) = interactive_session("1 2 3 4\n", OutputFormat::Text);
    assert!(!ok);
    assert!(out.contains("Ошибка: Unsupported degree"));
}

#[test]
fn test_solve_json_conjugate_pair() {
    let mut out = Vec::new();
    solve::run(&["1", "2", "5"], OutputFormat::Json, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["strategy"], "quadratic");
    assert_eq!(value["degree"], 2);

    let roots = value["roots"].as_array().unwrap();
    assert_eq!(roots.len(), 2);
    assert_relative_eq!(roots[0]["re"].as_f64().unwrap(), -1.0);
    assert_relative_eq!(roots[0]["im"].as_f64().unwrap(), 2.0);
    assert_relative_eq!(roots[1]["im"].as_f64().unwrap(), -2.0);
}

#[test]
fn test_solve_negative_and_exponent_tokens() {
    let mut out = Vec::new();
    solve::run(&["-2e0", "8"], OutputFormat::Text, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Корни: \n4 + 0i\n");
}

#[test]
fn test_config_failure_reported_as_error_line() {
    let args = CliArgs {
        format: Some(OutputFormat::Text),
        ..CliArgs::default()
    };
    let err = build_config_with_env(&args, |key| {
        (key == "ROOTS_LOG_LEVEL").then(|| "loud".to_string())
    })
    .unwrap_err();

    let mut out = Vec::new();
    write_error(&mut out, args.format.unwrap_or_default(), &CliError::from(err)).unwrap();
    let line = String::from_utf8(out).unwrap();
    assert!(line.starts_with("Ошибка: Configuration error: Invalid log level: loud"));
    assert_eq!(line.lines().count(), 1);
}

#[test]
fn test_blank_line_is_unsupported_degree() {
    let (ok, out) = interactive_session("   \n", OutputFormat::Text);
    assert!(!ok);
    assert!(out.contains("Ошибка: Unsupported degree: 0 coefficients"));
    assert!(!out.contains("Корни"));
}
