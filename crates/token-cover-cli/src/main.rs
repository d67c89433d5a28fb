//! token-cover: regroup subword attributions into word attributions.
//!
//! Logs go to stderr, results are printed to stdout as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use token_cover::TokenAligner;
use token_cover_cli::{Config, ExplainRequest, Explainer, FineTokens, WordTokenizer};
use tokenizer_adapters::SubwordTokenizer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "token-cover")]
#[command(about = "Cover subword tokens with words and regroup attributions")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to a HuggingFace tokenizer.json producing the subword tokens
    #[arg(long, global = true, env = "TOKEN_COVER_TOKENIZER")]
    tokenizer: Option<String>,

    /// Path to a JSON normalizer config
    #[arg(long, global = true, env = "TOKEN_COVER_NORMALIZER")]
    normalizer: Option<String>,

    /// Tokenizer producing the word tokens
    #[arg(long, global = true, value_enum, default_value = "basic")]
    word_tokenizer: WordTokenizer,

    /// How subword tokens are spelled: raw vocabulary entries, or decoded text
    #[arg(long, global = true, value_enum, default_value = "raw")]
    fine_tokens: FineTokens,

    /// Strip accents and special characters before tokenizing
    #[arg(long, global = true)]
    preprocess: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print how a text's subword tokens group into its words
    Cover {
        /// Text to tokenize
        text: String,
    },
    /// Regroup subword attributions from a JSON request into word attributions
    Explain {
        /// Request file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },
}

fn read_request(input: &str) -> Result<ExplainRequest> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };
    serde_json::from_str(&json).context("Failed to parse request")
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging - respects RUST_LOG env var, defaults to warn (or debug with --verbose)
    let default_filter = if args.verbose {
        "debug,token_cover=trace"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(args.tokenizer.as_deref(), args.normalizer.as_deref())?;
    info!("Tokenizer: {:?}", config.tokenizer_path);

    let subword = SubwordTokenizer::from_file(&config.tokenizer_path)?;
    let explainer = Explainer::new(
        TokenAligner::with_config(config.normalizer),
        subword,
        args.word_tokenizer,
        args.fine_tokens,
        args.preprocess,
    );

    let output = match args.command {
        Command::Cover { text } => serde_json::to_string_pretty(&explainer.cover(&text)?)?,
        Command::Explain { input } => {
            let request = read_request(&input)?;
            serde_json::to_string_pretty(&explainer.explain(&request)?)?
        }
    };
    println!("{}", output);

    Ok(())
}
