//! Huematch command-line entrypoint.
//!
//! Logs go to stderr (`RUST_LOG` filter); stdout carries only JSON. The model and catalog come
//! from `HUEMATCH_MODEL_PATH` and `HUEMATCH_CATALOG_PATH`, see [`huematch::config::Config`].

use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing_subscriber::{EnvFilter, fmt};

use huematch::config::Config;
use huematch::embedding::{Embedder, load_embedder};
use huematch::scoring::{AnalysisResult, PersonalityAnalyzer, ScoringError, compatibility};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

type Analyzer = PersonalityAnalyzer<Box<dyn Embedder>>;

/// Colour-personality analysis and compatibility scoring
#[derive(Debug, Parser)]
#[command(name = "huematch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze TEXT (or stdin when omitted) and print the result as JSON
    Analyze {
        /// Text to analyze; several words are joined with spaces
        text: Vec<String>,
    },
    /// Analyze one text per stdin line and print one JSON line per input, in order
    Batch,
    /// Compatibility of two personality vectors given as JSON arrays, e.g. '[0.5,0.5]'
    Compat { a: String, b: String },
    /// Print the active category catalog as JSON
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Analyze { text } => {
            let analyzer = build_analyzer(&load_config()?)?;
            run_analyze(&analyzer, &text)
        }
        Command::Batch => {
            let analyzer = build_analyzer(&load_config()?)?;
            run_batch(Arc::new(analyzer)).await
        }
        Command::Compat { a, b } => run_compat(&a, &b),
        Command::Catalog => {
            let catalog = load_config()?.load_catalog()?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            Ok(())
        }
    }
}

fn load_config() -> anyhow::Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

fn build_analyzer(config: &Config) -> anyhow::Result<Analyzer> {
    let catalog = Arc::new(config.load_catalog()?);
    let embedder = load_embedder(config.embedder_config())?;

    tracing::info!(
        categories = catalog.len(),
        default_category = catalog.default_category(),
        stub = embedder.is_stub(),
        dim = embedder.embedding_dim(),
        "Huematch starting"
    );

    let analyzer = PersonalityAnalyzer::new(catalog, embedder, config.analyzer.clone())
        .context("failed to prepare category profiles")?;
    Ok(analyzer)
}

fn run_analyze(analyzer: &Analyzer, words: &[String]) -> anyhow::Result<()> {
    let text = if words.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read text from stdin")?;
        buf
    } else {
        words.join(" ")
    };

    match analyzer.analyze(&text) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "Analysis failed");
            bail!(err.user_message())
        }
    }
}

async fn run_batch(analyzer: Arc<Analyzer>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = JoinSet::new();
    let mut count = 0usize;

    while let Some(line) = lines.next_line().await? {
        let analyzer = Arc::clone(&analyzer);
        let index = count;
        tasks.spawn_blocking(move || (index, analyzer.analyze(&line)));
        count += 1;
    }

    let mut results: Vec<Option<Result<AnalysisResult, ScoringError>>> =
        (0..count).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined.context("analysis task panicked")?;
        results[index] = Some(result);
    }

    let mut failures = 0usize;
    for result in results.into_iter().flatten() {
        let line = match result {
            Ok(result) => serde_json::to_string(&result)?,
            Err(err) => {
                failures += 1;
                tracing::warn!(error = %err, "Batch item failed");
                json!({ "error": err.user_message() }).to_string()
            }
        };
        println!("{line}");
    }

    tracing::info!(total = count, failures, "Batch complete");
    Ok(())
}

fn run_compat(a: &str, b: &str) -> anyhow::Result<()> {
    let a: Vec<f64> = serde_json::from_str(a).context("first vector is not a JSON number array")?;
    let b: Vec<f64> =
        serde_json::from_str(b).context("second vector is not a JSON number array")?;

    println!("{}", compatibility(&a, &b)?);
    Ok(())
}
