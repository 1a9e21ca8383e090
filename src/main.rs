//! Quick Translate - terminal translation widget
//!
//! Entry point: parses arguments, sets up logging, loads configuration and
//! runs the selected command.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::BufReader;
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quick_translate::cli::{Args, Commands};
use quick_translate::config::Config;
use quick_translate::error::QuickTranslateError;
use quick_translate::language::{Language, LanguagePair};
use quick_translate::session::Session;
use quick_translate::translate::{Translator, TranslatorFactory};
use quick_translate::view::{self, View, LOADING_LABEL};
use quick_translate::widget::Widget;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    // Console logs would interleave with the widget, so they stay off there unless asked for
    let interactive = matches!(args.command, None | Some(Commands::Widget { .. }));
    setup_logging(&config.logging.directory, args.verbose, args.verbose || !interactive)?;

    match args.command {
        None => run_widget(&config, None, None).await?,
        Some(Commands::Widget { from, to }) => run_widget(&config, from, to).await?,
        Some(Commands::Translate { text, from, to, swap }) => {
            let pair = session_pair(&config, from, to);
            let translator = TranslatorFactory::create_translator(config.translate.clone())?;
            translate_once(translator.as_ref(), &text, pair, swap).await;
        }
        Some(Commands::Languages) => print!("{}", view::render_languages()),
        Some(Commands::InitConfig { output, force }) => {
            if output.exists() && !force {
                return Err(QuickTranslateError::Config(format!(
                    "{} already exists, pass --force to overwrite", output.display()
                )).into());
            }
            Config::default().save_to_file(&output)?;
            println!("Wrote default configuration to {}", output.display());
        }
    }

    Ok(())
}

async fn run_widget(config: &Config, from: Option<Language>, to: Option<Language>) -> Result<()> {
    let translator = TranslatorFactory::create_translator(config.translate.clone())?;
    let widget = Widget::new(translator, session_pair(config, from, to));

    let stdin = BufReader::new(tokio::io::stdin());
    widget.run(stdin, tokio::io::stdout()).await?;
    Ok(())
}

/// One translation through the session, optionally followed by swap-and-retranslate
async fn translate_once(translator: &dyn Translator, text: &str, pair: LanguagePair, swap: bool) {
    let mut session = Session::new(pair);
    session.set_input_text(text);

    if let Some(request) = session.request_translation() {
        with_spinner(session.perform(translator, request)).await;
    }

    if swap {
        if let Some(request) = session.swap_and_retranslate() {
            println!("{}", View::of(&session).render());
            with_spinner(session.perform(translator, request)).await;
        }
    }

    print!("{}", View::of(&session).render());
}

async fn with_spinner<F: std::future::Future<Output = ()>>(future: F) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner()));
    spinner.set_message(LOADING_LABEL);
    spinner.enable_steady_tick(Duration::from_millis(100));

    future.await;

    spinner.finish_and_clear();
}

fn session_pair(config: &Config, from: Option<Language>, to: Option<Language>) -> LanguagePair {
    LanguagePair::new(
        from.unwrap_or(config.session.source),
        to.unwrap_or(config.session.target),
    )
}

/// Setup logging to a daily rolling file and, optionally, the console (stderr)
fn setup_logging(log_dir: &Path, verbose: bool, console: bool) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = rolling::daily(log_dir, "quick-translate.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(guard);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
    });

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - level: {}, file: {}",
          log_level, log_dir.join("quick-translate.log").display());

    Ok(())
}
