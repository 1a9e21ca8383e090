use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::language::Language;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Defaults to the interactive widget
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive translation widget
    Widget {
        /// Source language (code or name)
        #[arg(short, long)]
        from: Option<Language>,

        /// Target language (code or name)
        #[arg(short, long)]
        to: Option<Language>,
    },

    /// Translate one text and print the result
    Translate {
        /// Text to translate
        text: String,

        /// Source language (code or name)
        #[arg(short, long)]
        from: Option<Language>,

        /// Target language (code or name)
        #[arg(short, long)]
        to: Option<Language>,

        /// Swap languages and translate the result back
        #[arg(long)]
        swap: bool,
    },

    /// List supported languages
    Languages,

    /// Write the default configuration file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
