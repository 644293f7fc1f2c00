//! Output serialization: path construction and the final JSON write.

use crate::error::{Result, ScrapeError};
use crate::types::RunResult;
use std::path::{Path, PathBuf};

/// Join the output folder and file name into the final path.
pub fn output_path(folder: &str, file: &str) -> PathBuf {
    Path::new(folder).join(file)
}

/// Write `result` to `path` as pretty-printed UTF-8 JSON.
///
/// Creates the parent directory if it does not exist. Non-ASCII text is
/// written as-is, not escaped.
///
/// # Errors
///
/// Returns [`ScrapeError::Io`] if the directory cannot be created or the
/// file cannot be written.
pub fn write_results(path: &Path, result: &RunResult) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(result)
        .map_err(|e| ScrapeError::Io(format!("serialization failed: {e}")))?;
    std::fs::write(path, json)?;

    tracing::info!(path = %path.display(), articles = result.articles.len(), "results saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Article;

    #[test]
    fn output_path_joins_folder_and_file() {
        let path = output_path("articles/", "azure_functions.json");
        assert_eq!(path, Path::new("articles/azure_functions.json"));
    }

    #[test]
    fn write_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out.json");
        let result = RunResult::default();

        write_results(&path, &result).expect("write should succeed");
        assert!(path.exists());
    }

    #[test]
    fn empty_run_serializes_to_empty_articles() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.json");
        write_results(&path, &RunResult::default()).expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        let parsed: RunResult = serde_json::from_str(&written).expect("parse");
        assert!(parsed.articles.is_empty());
        assert!(written.contains("\"articles\""));
    }

    #[test]
    fn written_file_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.json");
        let run = RunResult {
            articles: vec![Article {
                title: "Déploiement".into(),
                content: "# Déploiement\n\nContenu de l'article.".into(),
                reference: "https://learn.microsoft.com/fr-fr/deploy".into(),
            }],
        };

        write_results(&path, &run).expect("write");
        let written = std::fs::read_to_string(&path).expect("read back");
        // Pretty-printed, non-ASCII preserved.
        assert!(written.contains('\n'));
        assert!(written.contains("Déploiement"));

        let parsed: RunResult = serde_json::from_str(&written).expect("parse");
        assert_eq!(parsed, run);
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // The target's parent is a file, so create_dir_all must fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").expect("write blocker");
        let path = blocker.join("out.json");

        let err = write_results(&path, &RunResult::default()).unwrap_err();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
