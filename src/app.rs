//! Single-shot prompt flow
//!
//! Wires configuration, model resolution, invocation and rendering together

use crate::cli::Args;
use crate::config::AppConfig;
use crate::render::{detect_width, render_markdown, LEFT_PADDING};
use crate::services::CompletionClient;
use crate::utils::error::AppResult;
use tracing::{debug, info};

/// Run one prompt and return the text to print
pub async fn run(args: &Args) -> AppResult<String> {
    let config = AppConfig::load_from(args.config.as_deref())?;
    info!("Configuration loaded");

    let model = config.resolve_model(args.model.as_deref());
    info!("Using model {}", model);

    let client = CompletionClient::from_config(&config)?;
    let completion = client
        .invoke_with_config(&config, &model, &args.prompt)
        .await?;

    if args.raw {
        return Ok(completion);
    }

    let width = args.width.map(usize::from).unwrap_or_else(detect_width);
    debug!("Rendering completion for width {}", width);

    Ok(render_markdown(&completion, width, LEFT_PADDING))
}
