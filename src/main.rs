use anyhow::{bail, Context, Result};
use anylang_translator::config::Config;
use anylang_translator::export::export_translation;
use anylang_translator::i18n::Language;
use anylang_translator::input::{clamp_to_limit, read_text_file};
use anylang_translator::preferences::{PreferencesStore, Theme};
use anylang_translator::status::StatusMessage;
use anylang_translator::translation::{TranslationResult, Translator};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "anylang", version, about = "Translate English text into other languages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate text given as arguments, from a file, or from stdin
    Translate {
        /// Target language code (see `anylang languages`)
        #[arg(short, long)]
        to: Option<Language>,

        /// Read the text from a .txt file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Also save the translation into this directory
        #[arg(long)]
        save_to: Option<PathBuf>,

        /// Text to translate
        text: Vec<String>,
    },

    /// List the languages you can translate into
    Languages,

    /// Check that the primary translation service is reachable
    Check,

    /// Show or change saved preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the current preferences
    Show,
    /// Store a RapidAPI key for the fallback provider
    SetKey { key: String },
    /// Remove the stored RapidAPI key
    ClearKey,
    /// Set the theme preference (light or dark)
    Theme { theme: Theme },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so translations on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("anylang_translator=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let store = PreferencesStore::new(&config.preferences_file);

    match cli.command {
        Command::Translate {
            to,
            file,
            save_to,
            text,
        } => {
            let preferences = store.load()?;
            let config = config.with_preferences(&preferences);
            let target = to.unwrap_or(config.default_target);
            let input = read_input(file, text)?;
            translate(&config, target, &input, save_to).await
        }
        Command::Languages => {
            for language in Language::targets() {
                println!("{}\t{}", language.code(), language.display_label());
            }
            Ok(())
        }
        Command::Check => {
            let preferences = store.load()?;
            let config = config.with_preferences(&preferences);
            let translator = Translator::from_config(reqwest::Client::new(), &config);

            info!("Testing {} connection", translator.primary_provider());
            let result = translator
                .check_connection()
                .await
                .context("API connection test failed")?;
            println!("API connection test successful: Hello -> {}", result);
            Ok(())
        }
        Command::Config { action } => run_config(&store, action),
    }
}

/// Collect input text from a file, the argument list, or stdin, clamped to the limit.
fn read_input(file: Option<PathBuf>, words: Vec<String>) -> Result<String> {
    let raw = if let Some(path) = file {
        read_text_file(&path)?
    } else if !words.is_empty() {
        words.join(" ")
    } else {
        debug!("No text arguments, reading stdin");
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read text from stdin")?;
        buffer
    };

    Ok(clamp_to_limit(&raw).to_string())
}

async fn translate(
    config: &Config,
    target: Language,
    input: &str,
    save_to: Option<PathBuf>,
) -> Result<()> {
    let translator = Translator::from_config(reqwest::Client::new(), config);
    if let Some(fallback) = translator.active_fallback() {
        debug!("Fallback provider available: {}", fallback);
    }

    let result = translator.translate(input, target).await;
    let message = StatusMessage::for_result(&result);
    eprintln!("{}", message.status);

    if let Some(text) = result.output_text() {
        println!("{}", text);
        if let Some(dir) = save_to {
            let path = export_translation(&dir, target, text, chrono::Utc::now())?;
            eprintln!("Saved to {}", path.display());
        }
    }

    match result {
        TranslationResult::Failure { error } => {
            bail!("{} ({})", message.notice, error)
        }
        TranslationResult::Empty | TranslationResult::Busy => {
            eprintln!("{}", message.notice);
            Ok(())
        }
        TranslationResult::Success { .. } | TranslationResult::Unchanged { .. } => Ok(()),
    }
}

fn run_config(store: &PreferencesStore, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let preferences = store.load()?;
            println!("file:    {}", store.path().display());
            println!("theme:   {}", preferences.theme);
            println!(
                "api key: {}",
                preferences
                    .masked_api_key()
                    .unwrap_or_else(|| "(not set, using free service only)".to_string())
            );
        }
        ConfigAction::SetKey { key } => {
            let preferences = store.update(|p| {
                p.set_api_key(&key);
            })?;
            if preferences.api_key.is_some() {
                println!("RapidAPI key saved");
            } else {
                println!("Empty key given; using the free service only");
            }
        }
        ConfigAction::ClearKey => {
            store.update(|p| p.clear_api_key())?;
            println!("RapidAPI key removed");
        }
        ConfigAction::Theme { theme } => {
            store.update(|p| p.theme = theme)?;
            println!("{} mode enabled", theme);
        }
    }
    Ok(())
}
