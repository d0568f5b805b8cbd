//! Handler shared by every operation subcommand.

use anyhow::Result;

use crate::cache::ResponseCache;
use crate::config::{ConfigManager, ResolveOptions, STARTER_API_KEY, resolve_config};
use crate::{debug, info, warn};
use crate::expert::{
    Expert, OpenAiClient, Operation, OperationRequest, PromptRenderer, resolve_language,
};
use crate::ui::Spinner;

pub struct QueryOptions<'a> {
    pub operation: Operation,
    pub payload: &'a str,
    pub languages: Vec<&'a str>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub no_cache: bool,
}

/// Answers one query and prints the answer to stdout.
pub async fn run_query(options: QueryOptions<'_>) -> Result<()> {
    // Reject bad codes before touching the configuration or the network
    for code in &options.languages {
        resolve_language(code)?;
    }

    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    if manager.exists() {
        debug!("using configuration file {}", manager.config_path().display());
    } else {
        debug!("no configuration file at {}", manager.config_path().display());
    }

    let resolve_options = ResolveOptions {
        model: options.model,
        endpoint: options.endpoint,
        no_cache: options.no_cache,
    };
    let config = resolve_config(&resolve_options, &config_file, manager.config_folder())?;

    if config.api_key == STARTER_API_KEY {
        warn!("openai_key still holds the placeholder written by 'word-guru setup init'");
    }

    let cache = match &config.cache_folder {
        Some(folder) => ResponseCache::open(folder)?,
        None => {
            if !options.no_cache {
                info!("No cache_folder configured, answers are not cached");
            }
            ResponseCache::disabled()
        }
    };
    let renderer = config
        .prompts_folder
        .as_ref()
        .map_or_else(PromptRenderer::new, PromptRenderer::with_override_dir);

    debug!("{} via {} ({})", options.operation, config.endpoint, config.model);
    let client = OpenAiClient::new(config.endpoint, config.api_key, config.model);
    let expert = Expert::new(client, renderer, &cache);

    let request = OperationRequest::new(options.operation, options.payload, &options.languages);

    let spinner = Spinner::new("Asking the language expert...");
    let answer = expert.execute(&request).await;
    spinner.stop();

    println!("{}", answer?);
    Ok(())
}
