//! Main entry point for the BMO Translator CLI

#![forbid(unsafe_code)]

use clap::{CommandFactory, Parser};
use dotenvy::dotenv;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bmo_translator::cli::commands::{self, Commands, TranslateArgs};
use bmo_translator::{ApiConfiguration, TranslationError};

/// BMO Translator - Danish <-> English translation with IPA pronunciation
#[derive(Parser, Debug)]
#[command(name = "bmo", version, about, long_about = None)]
struct Args {
    /// DeepL API key (optional, defaults to DEEPL_API_KEY env var)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    translate: TranslateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Nothing to translate and nobody piping text in
    if args.command.is_none() && args.translate.text.is_empty() && std::io::stdin().is_terminal() {
        eprintln!("{}", Args::command().render_help());
        std::process::exit(2);
    }

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bmo_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        std::env::set_var("DEEPL_API_KEY", api_key);
    }

    let result = match args.command {
        Some(Commands::Pronounce { word }) => match ApiConfiguration::from_env_without_key() {
            Ok(config) => commands::handle_pronounce(config, word).await,
            Err(e) => Err(e),
        },
        None => match ApiConfiguration::from_env() {
            Ok(config) => commands::handle_translate(config, args.translate).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        match e.downcast_ref::<TranslationError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("{}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmo_translator::Language;

    #[test]
    fn test_text_translates_by_default() {
        let args = Args::try_parse_from(["bmo", "Hej", "verden"]).unwrap();

        assert!(args.command.is_none());
        assert_eq!(args.translate.text, vec!["Hej", "verden"]);
        assert_eq!(args.translate.from, Language::Danish);
        assert_eq!(args.translate.to, None);
    }

    #[test]
    fn test_translate_flags() {
        let args = Args::try_parse_from([
            "bmo",
            "--from",
            "en",
            "--to",
            "da",
            "--swap",
            "--no-pronunciation",
            "--api-key",
            "k",
            "-v",
            "Hello",
        ])
        .unwrap();

        assert_eq!(args.translate.from, Language::English);
        assert_eq!(args.translate.to, Some(Language::Danish));
        assert!(args.translate.swap);
        assert!(args.translate.no_pronunciation);
        assert_eq!(args.api_key.as_deref(), Some("k"));
        assert!(args.verbose);
    }

    #[test]
    fn test_pronounce_subcommand() {
        let args = Args::try_parse_from(["bmo", "pronounce", "hello"]).unwrap();

        assert_eq!(
            args.command,
            Some(Commands::Pronounce {
                word: vec!["hello".to_string()]
            })
        );
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Args::try_parse_from(["bmo", "--from", "de", "Hallo"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }
}
