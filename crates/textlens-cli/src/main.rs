use ai_text::{AiConfig, ArticleRequest, Language};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use converters::{handle_request, Services, TextRequest, TextResponse};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// textlens – text metrics locally, rewriting through a chat-completion service.
/// Every command prints JSON; text is read from STDIN when `--text` is omitted.
#[derive(Parser, Debug)]
#[command(name = "textlens", version, about = "Text metrics and AI text helpers")]
struct Cli {
    /// Write the JSON result to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Chat-completion endpoint used by the AI commands
    #[arg(long, global = true, env = ai_text::config::ENDPOINT_ENV)]
    ai_endpoint: Option<String>,

    /// AFINN-format word list for sentiment scoring (e.g. AFINN-165)
    #[arg(long, global = true, env = converters::LEXICON_ENV)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Counts, reading time, links, readability, sentiment and keywords
    Analyze {
        #[arg(long)]
        text: Option<String>,
        /// Reading speed in words per minute
        #[arg(long)]
        wpm: Option<f64>,
    },

    /// Fix punctuation and capitalisation
    Punctuate {
        #[arg(long)]
        text: Option<String>,
    },

    /// Translate into one of the supported languages
    Translate {
        #[arg(long)]
        text: Option<String>,
        /// Target language, e.g. "French" or "Persian (Farsi)"
        #[arg(long)]
        language: Language,
    },

    /// Turn loose data into an aligned markdown table
    Table {
        #[arg(long)]
        text: Option<String>,
    },

    /// Generate an article about a topic
    Article {
        #[arg(long)]
        topic: String,
        /// Upper bound on the article length
        #[arg(long, default_value_t = ai_text::article::DEFAULT_WORD_COUNT)]
        words: u32,
        #[arg(long)]
        markdown: bool,
    },
}

impl Commands {
    fn into_request(self) -> Result<TextRequest> {
        Ok(match self {
            Commands::Analyze { text, wpm } => {
                TextRequest::Analyze { text: Some(text_or_stdin(text)?), words_per_minute: wpm }
            }
            Commands::Punctuate { text } => TextRequest::Punctuate { text: text_or_stdin(text)? },
            Commands::Translate { text, language } => {
                TextRequest::Translate { text: text_or_stdin(text)?, language }
            }
            Commands::Table { text } => TextRequest::Table { text: text_or_stdin(text)? },
            Commands::Article { topic, words, markdown } => {
                TextRequest::Article(ArticleRequest { topic, word_count: words, markdown })
            }
        })
    }
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => read_stdin_string(),
    }
}

fn read_stdin_string() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("failed reading STDIN")?;
    Ok(buf)
}

fn write_output(out: Option<&Path>, resp: &TextResponse) -> Result<()> {
    let pretty = match resp {
        TextResponse::Analysis(r) => serde_json::to_string_pretty(r)?,
        TextResponse::Completion(r) => serde_json::to_string_pretty(r)?,
        TextResponse::Article(a) => serde_json::to_string_pretty(a)?,
    };
    match out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).with_context(|| format!("failed creating {}", dir.display()))?;
            }
            fs::write(path, pretty).with_context(|| format!("failed writing {}", path.display()))?;
            eprintln!("✓ wrote {}", path.display());
        }
        None => println!("{pretty}"),
    }
    Ok(())
}

fn init_tracing() {
    // logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let ai = match cli.ai_endpoint {
        Some(endpoint) => AiConfig { endpoint, ..AiConfig::from_env() },
        None => AiConfig::from_env(),
    };
    let mut services = Services::new(&ai)?;
    if let Some(path) = cli.lexicon.as_deref() {
        services = services.with_lexicon(path)?;
    }

    let req = cli.cmd.into_request()?;
    tracing::debug!(op = req.name(), endpoint = services.chat.endpoint(), "running command");
    let resp = handle_request(&services, req).await?;
    write_output(cli.out.as_deref(), &resp)?;

    if resp.status_code() >= 400 {
        tracing::warn!(status = resp.status_code(), "command failed");
        std::process::exit(1);
    }
    Ok(())
}
