//! End-to-end tests of the generate command writing bulk action files.

use clap::{Command, CommandFactory, FromArgMatches, Parser};
use docgen::{run_generate, GenerateArgs, RunError};
use docgen_core::{BulkAction, Document};
use docgen_sink::SinkError;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    args: GenerateArgs,
}

/// Parser without environment fallbacks, so exported `ELASTIC_*`
/// variables do not leak into the tests.
fn command() -> Command {
    TestCli::command().mut_args(|arg| arg.env(None::<&'static str>))
}

fn parse(argv: Vec<String>) -> GenerateArgs {
    let matches = command().try_get_matches_from(argv).unwrap();
    TestCli::from_arg_matches(&matches).unwrap().args
}

fn args(out_file: &Path, extra: &[&str]) -> GenerateArgs {
    let mut argv = vec![
        "docgen".to_string(),
        "-o".to_string(),
        out_file.display().to_string(),
        "-i".to_string(),
        "articles".to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    parse(argv)
}

fn read_pairs(path: &Path) -> Vec<(BulkAction, Document, String)> {
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.ends_with('\n'));

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len() % 2, 0, "file must hold line pairs");

    lines
        .chunks(2)
        .map(|pair| {
            let action: BulkAction = serde_json::from_str(pair[0]).unwrap();
            let document: Document = serde_json::from_str(pair[1]).unwrap();
            (action, document, pair[1].to_string())
        })
        .collect()
}

#[tokio::test]
async fn test_file_output_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.ndjson");

    let config = args(&path, &["-l", "7", "-b", "3", "-s", "600", "--seed", "42"])
        .validate()
        .unwrap();
    let report = run_generate(&config).await.unwrap().unwrap();

    assert_eq!(report.documents, 7);
    assert_eq!(report.batches, 3);
    assert_eq!(report.document_size, 600);
    assert_eq!(report.sinks, vec!["file".to_string()]);

    let pairs = read_pairs(&path);
    assert_eq!(pairs.len(), 7);

    let mut ids = HashSet::new();
    for (action, document, line) in &pairs {
        assert_eq!(action.index.index, "articles");
        assert_eq!(action.index.id, document.id.to_string());
        assert_eq!(action.index.pipeline, None);
        assert_eq!(line, &document.to_json().unwrap());

        // Pipeline defaults to the index, so enrichment is on
        assert_eq!(document.inference_flag, Some(true));
        assert!(document.estimated_size() >= 600);
        assert!(!document.title.contains('.'));
        assert!(document.summary.chars().count() <= 200);

        assert!(ids.insert(document.id));
    }
}

#[tokio::test]
async fn test_skip_enrichment_omits_flag() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plain.ndjson");

    let config = args(&path, &["-l", "3", "--skip-enrichment"])
        .validate()
        .unwrap();
    run_generate(&config).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("_run_ml_inference"));
    assert_eq!(read_pairs(&path).len(), 3);
}

#[tokio::test]
async fn test_minimum_size_produces_empty_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("small.ndjson");

    let config = args(&path, &["-l", "4", "-s", "300"]).validate().unwrap();
    run_generate(&config).await.unwrap();

    for (_, document, _) in read_pairs(&path) {
        assert_eq!(document.text, "");
    }
}

#[tokio::test]
async fn test_same_seed_same_file() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.ndjson");
    let second = temp_dir.path().join("second.ndjson");

    for path in [&first, &second] {
        let config = args(path, &["-l", "5", "-b", "2", "--seed", "9"])
            .validate()
            .unwrap();
        run_generate(&config).await.unwrap();
    }

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_prefetch_matches_inline() {
    let temp_dir = TempDir::new().unwrap();
    let inline = temp_dir.path().join("inline.ndjson");
    let prefetch = temp_dir.path().join("prefetch.ndjson");

    let config = args(&inline, &["-l", "9", "-b", "2", "--seed", "3"])
        .validate()
        .unwrap();
    run_generate(&config).await.unwrap();

    let config = args(
        &prefetch,
        &["-l", "9", "-b", "2", "--seed", "3", "--prefetch-batches", "2"],
    )
    .validate()
    .unwrap();
    let report = run_generate(&config).await.unwrap().unwrap();
    assert_eq!(report.batches, 5);

    assert_eq!(
        std::fs::read_to_string(&inline).unwrap(),
        std::fs::read_to_string(&prefetch).unwrap()
    );
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dry.ndjson");

    let config = args(&path, &["--dry-run"]).validate().unwrap();
    let report = run_generate(&config).await.unwrap();

    assert!(report.is_none());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_unwritable_path_fails_before_generation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("out.ndjson");

    let config = args(&path, &[]).validate().unwrap();
    let err = run_generate(&config).await.unwrap_err();

    assert!(format!("{err:#}").contains("Failed to create output file"));
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_full_device_fails_at_close() {
    let config = args(Path::new("/dev/full"), &["-l", "2", "-b", "1", "-s", "300"])
        .validate()
        .unwrap();
    let err = run_generate(&config).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RunError>(),
        Some(RunError::Teardown(SinkError::Io(_)))
    ));
    let message = format!("{err:#}");
    assert!(message.contains("Failed to close sinks"), "unexpected error: {message}");
}
