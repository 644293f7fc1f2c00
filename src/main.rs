//! CLI binary for learn-scraper.

use clap::Parser;
use learn_scraper::{output, RunConfig};
use tracing_subscriber::EnvFilter;

/// Fetch articles from Microsoft Learn and save them as JSON.
#[derive(Debug, Parser)]
#[command(name = "learn-scraper", version, about)]
struct Cli {
    /// Search query.
    #[arg(long)]
    query: String,

    /// Maximum number of results to fetch.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u8).range(1..=30))]
    max_results: u8,

    /// Name of the output file; derived from the query if omitted.
    #[arg(long, value_parser = json_file)]
    output_file: Option<String>,

    /// Folder where the file will be saved.
    #[arg(long, default_value = "articles/", value_parser = folder)]
    output_folder: String,

    /// Maximum number of concurrent workers.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=30))]
    max_workers: u8,
}

/// clap value parser: output file names must end in `.json`.
fn json_file(value: &str) -> Result<String, String> {
    if value.ends_with(".json") {
        Ok(value.to_owned())
    } else {
        Err("output file must end with .json".into())
    }
}

/// clap value parser: folder paths must end in `/`.
fn folder(value: &str) -> Result<String, String> {
    if value.ends_with('/') {
        Ok(value.to_owned())
    } else {
        Err("folder path must end with /".into())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("learn_scraper=info")),
        )
        .init();

    // All top-level failures are logged rather than panicking; there is
    // no exit-code contract beyond completing.
    if let Err(err) = run(Cli::parse()).await {
        tracing::error!(error = %err, "run failed");
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = RunConfig::new(cli.query);
    config.max_results = usize::from(cli.max_results);
    config.max_workers = usize::from(cli.max_workers);
    config.output_folder = cli.output_folder;
    if let Some(file) = cli.output_file {
        config.output_file = file;
    }

    let result = learn_scraper::run(&config).await?;

    let path = output::output_path(&config.output_folder, &config.output_file);
    output::write_results(&path, &result)?;
    println!("Results saved to '{}'", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn minimal_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["learn-scraper", "--query", "azure functions"])
            .expect("should parse");
        assert_eq!(cli.query, "azure functions");
        assert_eq!(cli.max_results, 15);
        assert_eq!(cli.max_workers, 5);
        assert_eq!(cli.output_folder, "articles/");
        assert!(cli.output_file.is_none());
    }

    #[test]
    fn query_is_required() {
        let err = Cli::try_parse_from(["learn-scraper"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn max_results_range_enforced() {
        assert!(Cli::try_parse_from(["learn-scraper", "--query", "q", "--max-results", "0"])
            .is_err());
        assert!(Cli::try_parse_from(["learn-scraper", "--query", "q", "--max-results", "31"])
            .is_err());
        let cli = Cli::try_parse_from(["learn-scraper", "--query", "q", "--max-results", "30"])
            .expect("should parse");
        assert_eq!(cli.max_results, 30);
    }

    #[test]
    fn max_workers_range_enforced() {
        assert!(Cli::try_parse_from(["learn-scraper", "--query", "q", "--max-workers", "0"])
            .is_err());
        assert!(Cli::try_parse_from(["learn-scraper", "--query", "q", "--max-workers", "99"])
            .is_err());
    }

    #[test]
    fn output_file_must_be_json() {
        assert!(Cli::try_parse_from([
            "learn-scraper",
            "--query",
            "q",
            "--output-file",
            "out.txt"
        ])
        .is_err());
        let cli = Cli::try_parse_from([
            "learn-scraper",
            "--query",
            "q",
            "--output-file",
            "out.json",
        ])
        .expect("should parse");
        assert_eq!(cli.output_file.as_deref(), Some("out.json"));
    }

    #[test]
    fn output_folder_must_end_with_slash() {
        assert!(Cli::try_parse_from([
            "learn-scraper",
            "--query",
            "q",
            "--output-folder",
            "articles"
        ])
        .is_err());
    }
}
