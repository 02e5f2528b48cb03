//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Prompt used when `-p` is not given
pub const DEFAULT_PROMPT: &str = "Hello there";

/// Send a prompt to a chat completions API and print the answer
#[derive(Debug, Parser)]
#[command(name = "llmcli", version, about = "Send a prompt to an LLM and render the answer in the terminal")]
pub struct Args {
    /// Prompt to send
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Model name or alias (defaults to the configured default model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "LLMCLI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output width in columns (defaults to the terminal width)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Print the completion verbatim, without markdown rendering
    #[arg(long)]
    pub raw: bool,
}
