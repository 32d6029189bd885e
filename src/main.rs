use anyhow::{anyhow, Result};
use bat::PrettyPrinter;
use clap::{Parser, Subcommand};
use cliclack::spinner;
use console::style;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::debug;

use image_prompt::describe::{describe_image, ImagePrompt};
use image_prompt::encoder::{encode_file, ImageSource};
use image_prompt::payload::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_TEXT};
use image_prompt::providers::configs::{OpenAiProviderConfig, ProviderConfig};
use image_prompt::providers::openai::OpenAiProvider;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print an image file as base64 text
    Encode {
        /// Path to the image file
        #[arg(long)]
        image: PathBuf,
    },

    /// Ask a multimodal model what an image shows
    Ask {
        /// Path to the image file
        #[arg(long)]
        image: PathBuf,

        /// Image MIME type, guessed from the file extension when omitted
        #[arg(long)]
        mime: Option<String>,

        /// Question sent alongside the image
        #[arg(short, long, default_value = DEFAULT_USER_TEXT)]
        prompt: String,

        /// System prompt (defaults to a one-phrase image description)
        #[arg(long)]
        system: Option<String>,

        /// Model to use
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Maximum number of tokens in the reply
        #[arg(long, default_value_t = DEFAULT_MAX_TOKENS, allow_negative_numbers = true)]
        max_tokens: i32,

        /// Endpoint host (can also be set via OPENAI_API_HOST environment variable)
        #[arg(long)]
        host: Option<String>,

        /// API key (can also be set via OPENAI_API_KEY environment variable)
        #[arg(short, long)]
        api_key: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    if let Ok(path) = dotenv() {
        debug!("loaded environment from {:?}", path);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Encode { image } => {
            let base64_text = encode_file(&image)?;
            println!("Base64 Encoded Text:");
            println!("{}", base64_text);
        }
        Command::Ask {
            image,
            mime,
            prompt,
            system,
            model,
            max_tokens,
            host,
            api_key,
        } => {
            // Flags override the environment
            let mut config = OpenAiProviderConfig::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(api_key) = api_key {
                config.api_key = api_key;
            }

            eprintln!(
                "{}",
                style(format!("asking {} at {}", model, config.host)).dim()
            );
            let provider = OpenAiProvider::new(config)?;

            let prompt = ImagePrompt {
                mime_type: mime,
                system_prompt: system.unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
                user_text: prompt,
                model,
                max_tokens,
            };

            let spin = spinner();
            spin.start("awaiting reply");
            let reply = describe_image(&provider, &ImageSource::path(image), &prompt);
            spin.stop("");

            render(&reply?)?;
            println!();
        }
    }
    Ok(())
}

fn render(content: &str) -> Result<()> {
    PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print()
        .map_err(|e| anyhow!("Failed to render reply: {}", e))?;
    Ok(())
}
