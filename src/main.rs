use anyhow::{Context, Result, bail};
use braillecorrect::{Autocorrect, Config, SuggestedCorrection, decode_str};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "braillecorrect",
    about = "Six-dot chord decoder with fuzzy autocorrect"
)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list, one word per line (overrides the config)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Correction log path (overrides the config)
    #[arg(long)]
    corrections: Option<PathBuf>,

    /// Largest edit distance for suggestions (overrides the config)
    #[arg(short, long)]
    max_distance: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode chords, e.g. `decode DK D WQKO`
    Decode { chords: Vec<String> },
    /// Decode chords and suggest the closest dictionary word
    Suggest { chords: Vec<String> },
    /// List every dictionary word within the edit distance of a query
    Search { query: String },
    /// Save a correction for future dictionary loads
    Learn { word: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(path) = &cli.dictionary {
        config.word_list = Some(path.clone());
    }
    if let Some(path) = &cli.corrections {
        config.correction_log = path.clone();
    }
    if let Some(max_distance) = cli.max_distance {
        config.max_distance = max_distance;
    }
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Command::Decode { chords } => {
            let decoded = decode_str(&chords.join(" "));
            if cli.json {
                println!("{}", serde_json::json!({ "decoded": decoded.to_string() }));
            } else {
                println!("Decoded: {decoded}");
            }
        }
        Command::Suggest { chords } => {
            if config.word_list.is_none() {
                bail!("no dictionary given; pass --dictionary or set word_list in the config");
            }
            let engine = Autocorrect::from_config(config).context("failed to load dictionary")?;
            let outcome = engine.process(&chords.join(" "))?;
            if cli.json {
                let value = serde_json::json!({
                    "decoded": outcome.decoded.to_string(),
                    "suggestion": outcome.suggestion,
                });
                println!("{value}");
            } else {
                println!("Decoded: {}", outcome.decoded);
                match outcome.suggestion {
                    SuggestedCorrection::Suggestion(s) => {
                        println!("Suggestion: {} (distance {})", s.word, s.distance)
                    }
                    SuggestedCorrection::NoMatch => println!("Suggestion: (no close match)"),
                }
            }
        }
        Command::Search { query } => {
            if config.word_list.is_none() {
                bail!("no dictionary given; pass --dictionary or set word_list in the config");
            }
            let max_distance = config.max_distance;
            let engine = Autocorrect::from_config(config).context("failed to load dictionary")?;
            let results = engine.search(query, max_distance)?;
            if cli.json {
                println!("{}", serde_json::to_string(&results)?);
            } else if results.is_empty() {
                println!("(no close match)");
            } else {
                for r in results {
                    println!("{}\t{}", r.distance, r.word);
                }
            }
        }
        Command::Learn { word } => {
            let engine = Autocorrect::new(config);
            let saved = engine.learn(word)?;
            println!(
                "Added '{}' to {}",
                saved,
                engine.correction_log().path().display()
            );
        }
    }
    Ok(())
}
