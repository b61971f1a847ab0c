use clap::{Args, Parser, Subcommand};
use hebrew_common::direction::TextDirection;
use hebrew_common::gematria::{compute_gematria, gematria_per_word};
use hebrew_common::hashing::word_id_hex;
use hebrew_common::normalization::normalize_passage;
use hebrew_common::tokenization::{extract_unique_words, strip_points};
use hebrew_common::types::GematriaValue;
use hebrew_common::vocabulary::build_vocabulary;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod config;

use config::{load_config, OutputFormat};

#[derive(Parser)]
#[command(name = "hebrew-tool")]
#[command(about = "Gematria and study-word extraction for Hebrew lesson texts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Output format (default from config, else text)
    #[arg(long, short, value_enum, global = true)]
    format: Option<OutputFormat>,
    /// NFC-normalize and collapse whitespace before processing
    #[arg(long, global = true)]
    normalize: bool,
    /// Config file (default: ~/.config/hebrew-study/hebrew-tool.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct TextSource {
    /// Text to process; read from --input or stdin when absent
    text: Option<String>,
    /// Read text from a file
    #[arg(long, short)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Gematria of the whole text
    Gematria {
        #[command(flatten)]
        source: TextSource,
        /// Report each word separately
        #[arg(long)]
        per_word: bool,
    },
    /// Distinct study words, in first-occurrence order
    Words {
        #[command(flatten)]
        source: TextSource,
        /// Strip vowel points from the listed words
        #[arg(long)]
        bare: bool,
    },
    /// Base text direction (rtl or ltr)
    Direction {
        #[command(flatten)]
        source: TextSource,
    },
    /// Study words with gematria and word ids
    Vocab {
        #[command(flatten)]
        source: TextSource,
        /// Write output here instead of stdout (required for cbor)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct WordGematria<'a> {
    word: &'a str,
    gematria: GematriaValue,
}

#[derive(Serialize)]
struct VocabRow {
    word: String,
    word_id: String,
    gematria: GematriaValue,
}

fn read_text(source: TextSource) -> Result<String, Box<dyn Error>> {
    if let Some(text) = source.text {
        return Ok(text);
    }
    if let Some(path) = source.input {
        tracing::debug!("reading text from {}", path.display());
        let text = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        return Ok(text);
    }
    tracing::debug!("reading text from stdin");
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn render_gematria(text: &str, per_word: bool, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    if per_word {
        let rows = gematria_per_word(text);
        return match format {
            OutputFormat::Json => {
                let rows: Vec<WordGematria> = rows
                    .into_iter()
                    .map(|(word, gematria)| WordGematria { word, gematria })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Text => Ok(rows
                .iter()
                .map(|(w, g)| format!("{}\t{}\t{}\t{}", w, g.simple, g.standard, g.ordinal))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Cbor => Err("cbor output is only supported by vocab".into()),
        };
    }
    let g = compute_gematria(text);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&g)?),
        OutputFormat::Text => Ok(format!(
            "simple: {}\nstandard: {}\nordinal: {}",
            g.simple, g.standard, g.ordinal
        )),
        OutputFormat::Cbor => Err("cbor output is only supported by vocab".into()),
    }
}

fn render_words(text: &str, bare: bool, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let mut words = extract_unique_words(text);
    if bare {
        let mut seen = HashSet::new();
        words = words
            .iter()
            .map(|w| strip_points(w))
            .filter(|w| seen.insert(w.clone()))
            .collect();
    }
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&words)?),
        OutputFormat::Text => Ok(words.join("\n")),
        OutputFormat::Cbor => Err("cbor output is only supported by vocab".into()),
    }
}

fn render_direction(text: &str, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let direction = TextDirection::of(text);
    match format {
        OutputFormat::Json => Ok(serde_json::json!({ "direction": direction.as_str() }).to_string()),
        OutputFormat::Text => Ok(direction.as_str().to_string()),
        OutputFormat::Cbor => Err("cbor output is only supported by vocab".into()),
    }
}

fn write_vocab(text: &str, output: Option<PathBuf>, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let vocab = build_vocabulary(text);
    tracing::info!("{} study words", vocab.len());

    if format == OutputFormat::Cbor {
        let path = output.ok_or("cbor output requires --output")?;
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(&vocab, &mut bytes)?;
        fs::write(&path, &bytes)?;
        println!("Vocabulary written to: {} ({} bytes)", path.display(), bytes.len());
        return Ok(());
    }

    let rendered = match format {
        OutputFormat::Json => {
            let rows: Vec<VocabRow> = vocab
                .into_iter()
                .map(|e| VocabRow {
                    word_id: word_id_hex(&e.word),
                    word: e.word,
                    gematria: e.gematria,
                })
                .collect();
            serde_json::to_string_pretty(&rows)?
        }
        _ => vocab
            .iter()
            .map(|e| {
                format!(
                    "{}\t{}\t{}\t{}",
                    e.word,
                    word_id_hex(&e.word),
                    e.gematria.simple,
                    e.gematria.ordinal
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    emit(&rendered, output)
}

fn emit(rendered: &str, output: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", rendered))?;
            println!("Written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.or(config.format).unwrap_or_default();
    let normalize = cli.normalize || config.normalize;

    let prepare = |source: TextSource| -> Result<String, Box<dyn Error>> {
        let text = read_text(source)?;
        Ok(if normalize { normalize_passage(&text) } else { text })
    };

    match cli.command {
        Commands::Gematria { source, per_word } => {
            emit(&render_gematria(&prepare(source)?, per_word, format)?, None)
        }
        Commands::Words { source, bare } => emit(&render_words(&prepare(source)?, bare, format)?, None),
        Commands::Direction { source } => emit(&render_direction(&prepare(source)?, format)?, None),
        Commands::Vocab { source, output } => write_vocab(&prepare(source)?, output, format),
    }
}
