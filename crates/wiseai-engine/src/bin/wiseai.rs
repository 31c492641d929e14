//! wiseai: operator command-line front end for the recommendation core.
//!
//! Configuration comes from the environment (see `EngineConfig`), with a
//! `.env` file honoured. Results are printed to stdout as JSON; logs go to
//! stderr or `LOG_FILE`.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wiseai_engine::{EngineConfig, RecommendationEngine};
use wiseai_inference::{HashingEmbedder, KeywordClassifier, KeywordModel};
use wiseai_store::{parse_records, IndexBuilder};

#[derive(Parser)]
#[command(name = "wiseai")]
#[command(author, version, about = "Emotion-aware quote recommendations")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend quotes for a piece of text
    Recommend {
        /// Text to respond to (read from stdin when omitted)
        text: Option<String>,

        /// Number of quotes to return (1-50)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List emotions with quote counts and problem categories
    Emotions,

    /// Print a random sample of quotes
    Quotes {
        /// Maximum number of quotes
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Print a health report
    Health,

    /// Build a quote-store artifact from raw quote records
    Index {
        /// JSON array of raw records
        #[arg(short, long)]
        input: PathBuf,

        /// Output artifact path
        #[arg(short, long)]
        output: PathBuf,

        /// Version string recorded in the artifact (default: build timestamp)
        #[arg(long = "artifact-version")]
        artifact_version: Option<String>,

        /// Drop quotes longer than this many words
        #[arg(long, default_value_t = wiseai_core::defaults::INDEX_MAX_QUOTE_WORDS)]
        max_words: usize,

        /// Attach hashing bag-of-words vectors
        #[arg(long)]
        vectors: bool,
    },

    /// Export the built-in classifier lexicon as a model artifact
    Lexicon {
        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let _guard = init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with configurable output.
///
/// Environment variables:
///   LOG_FORMAT  - "json" or "text" (default: "text")
///   LOG_FILE    - path to log file (optional, enables file logging)
///   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
///   RUST_LOG    - standard env filter (default: "wiseai=info,wiseai_engine=info")
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wiseai=info,wiseai_engine=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    let guard = if let Some(ref path) = log_file {
        let file_dir = Path::new(path).parent().unwrap_or(Path::new("."));
        let file_name = Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("wiseai.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(log_ansi.unwrap_or(false));
            registry.with(layer).init();
        }
        Some(guard)
    } else {
        // stdout carries command output, so console logs go to stderr
        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    };

    info!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stderr)"),
        "Logging initialized"
    );
    guard
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Recommend { text, limit } => cmd_recommend(text, limit),
        Commands::Emotions => {
            let engine = load_engine()?;
            print_json(&engine.emotion_catalog())
        }
        Commands::Quotes { count } => {
            let engine = load_engine()?;
            print_json(&engine.sample_quotes(count))
        }
        Commands::Health => {
            let engine = load_engine()?;
            print_json(&engine.health())
        }
        Commands::Index {
            input,
            output,
            artifact_version,
            max_words,
            vectors,
        } => cmd_index(&input, &output, artifact_version, max_words, vectors),
        Commands::Lexicon { output } => cmd_lexicon(output.as_deref()),
    }
}

fn load_engine() -> anyhow::Result<RecommendationEngine> {
    let config = EngineConfig::from_env();
    RecommendationEngine::from_config(config).context("failed to initialize engine")
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_recommend(text: Option<String>, limit: Option<usize>) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    let engine = load_engine()?;
    let response = match limit {
        Some(limit) => engine.recommend(&text, limit)?,
        None => engine.recommend_default(&text)?,
    };
    print_json(&response)
}

fn cmd_index(
    input: &Path,
    output: &Path,
    artifact_version: Option<String>,
    max_words: usize,
    vectors: bool,
) -> anyhow::Result<()> {
    if max_words == 0 {
        bail!("--max-words must be at least 1");
    }

    let config = EngineConfig::from_env();
    let classifier = match &config.classifier_path {
        Some(path) => KeywordClassifier::load(path)?,
        None => KeywordClassifier::builtin(),
    };
    let embedder = HashingEmbedder::new(config.embed_dimension);

    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let records = parse_records(&raw)?;

    let version = artifact_version
        .unwrap_or_else(|| chrono::Utc::now().format("%Y%m%d%H%M%S").to_string());
    let mut builder = IndexBuilder::new(&classifier, version).with_max_words(max_words);
    if vectors {
        builder = builder.with_embedder(&embedder);
    }
    let (artifact, report) = builder.build(records);

    std::fs::write(output, artifact.to_json_pretty()?)
        .with_context(|| format!("failed to write {}", output.display()))?;
    print_json(&report)
}

fn cmd_lexicon(output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&KeywordModel::builtin())?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", json),
    }
    Ok(())
}
