//! One-shot CLI commands, run against the built binary.

use std::process::Command;

use strategio::models::*;

fn strategio(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_strategio"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run strategio")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

mod export {
    use super::*;

    #[test]
    fn writes_the_print_layout_to_a_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("strategy.md");

        let output = strategio(&["export", "--output", path.to_str().expect("utf-8 path")]);

        assert!(output.status.success());
        let text = std::fs::read_to_string(&path).expect("Export file missing");
        assert!(text.starts_with("# Маркетинговая Стратегия"));
        assert!(text.contains("## 1. Миссия и Цели"));
    }

    #[test]
    fn prints_json_to_stdout() {
        let output = strategio(&["export", "--format", "json"]);

        assert!(output.status.success());
        let document: StrategyDocument =
            serde_json::from_str(&stdout(&output)).expect("Expected JSON document");
        assert_eq!(document, seed_document());
    }
}

mod progress {
    use super::*;

    #[test]
    fn reports_the_sample_percentage() {
        let output = strategio(&["progress"]);

        assert!(output.status.success());
        assert!(stdout(&output).starts_with("Завершено на 90%"));
    }

    #[test]
    fn reads_a_document_from_a_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("empty.json");
        std::fs::write(&path, r#"{"projectName": "Пусто"}"#).expect("Failed to write input");

        let output = strategio(&["progress", "--input", path.to_str().expect("utf-8 path")]);

        assert!(output.status.success());
        assert!(stdout(&output).starts_with("Завершено на 0%"));
    }

    #[test]
    fn fails_on_a_missing_file() {
        let output = strategio(&["progress", "--input", "/nonexistent/strategy.json"]);

        assert!(!output.status.success());
    }
}

mod show {
    use super::*;

    #[test]
    fn prints_one_section() {
        let output = strategio(&["show", "swot"]);

        assert!(output.status.success());
        let view: serde_json::Value =
            serde_json::from_str(&stdout(&output)).expect("Expected JSON");
        assert_eq!(view["id"], "swot");
    }

    #[test]
    fn rejects_an_unknown_section() {
        let output = strategio(&["show", "budget"]);

        assert!(!output.status.success());
    }
}
