//! Terminal front-end for the ideation pipeline.
//!
//! Runs the same scrape → prompt → generate → extract sequence as the
//! server, printing JSON (or raw draft text for `content`) to stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};

use hookline_core::{prompts, AppConfig, GeneratedIdea, SuggestedSource};
use hookline_firecrawl::{clean_markdown, truncate_chars, FirecrawlClient};
use hookline_gemini::{extract_json_array, GeminiClient, GenerationParams};

#[derive(Debug, Parser)]
#[command(name = "hookline-cli")]
#[command(about = "LinkedIn content ideation from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Suggest ranked content sources for a niche and persona.
    Discover {
        #[arg(long)]
        niche: String,
        #[arg(long)]
        persona: String,
    },
    /// Scrape a URL and turn it into post ideas.
    Ideas {
        #[arg(long)]
        url: String,
        #[arg(long)]
        niche: String,
        #[arg(long)]
        persona: String,
    },
    /// Expand one idea into a full post draft.
    Content {
        #[arg(long)]
        hook: String,
        #[arg(long)]
        why: String,
        #[arg(long, default_value = hookline_core::formats::DEFAULT_FORMAT)]
        format: String,
        #[arg(long)]
        niche: String,
        #[arg(long)]
        persona: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = hookline_core::load_app_config_from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Discover { niche, persona } => {
            let gemini = gemini_client(&config)?;
            let prompt = prompts::discover_sources(&niche, &persona);
            let text = gemini
                .generate(
                    &prompt,
                    GenerationParams {
                        temperature: 0.7,
                        top_k: None,
                        top_p: None,
                        max_output_tokens: 3072,
                    },
                )
                .await?;
            let items = extract_json_array(&text)
                .map_err(|e| anyhow::anyhow!("unparsable model output: {}", e.raw_text()))?;
            let mut sources: Vec<SuggestedSource> =
                serde_json::from_value(serde_json::Value::Array(items))
                    .context("model output did not match the source schema")?;
            sources.truncate(config.max_sources);
            println!("{}", serde_json::to_string_pretty(&sources)?);
        }
        Commands::Ideas {
            url,
            niche,
            persona,
        } => {
            let firecrawl = firecrawl_client(&config)?;
            let gemini = gemini_client(&config)?;
            let document = firecrawl.scrape(&url).await?;
            let cleaned = clean_markdown(&document.markdown);
            let excerpt = truncate_chars(&cleaned, config.excerpt_max_chars);
            let prompt = prompts::generate_ideas(&niche, &persona, &url, excerpt);
            let text = gemini
                .generate(
                    &prompt,
                    GenerationParams {
                        temperature: 0.9,
                        top_k: Some(40),
                        top_p: Some(0.95),
                        max_output_tokens: 2048,
                    },
                )
                .await?;
            let items = extract_json_array(&text)
                .map_err(|e| anyhow::anyhow!("unparsable model output: {}", e.raw_text()))?;
            let ideas: Vec<GeneratedIdea> = serde_json::from_value(serde_json::Value::Array(items))
                .context("model output did not match the idea schema")?;
            println!("{}", serde_json::to_string_pretty(&ideas)?);
        }
        Commands::Content {
            hook,
            why,
            format,
            niche,
            persona,
        } => {
            let gemini = gemini_client(&config)?;
            let prompt = prompts::generate_content(&hook, &why, &format, &niche, &persona);
            let content = gemini
                .generate(
                    &prompt,
                    GenerationParams {
                        temperature: 0.8,
                        top_k: Some(40),
                        top_p: Some(0.95),
                        max_output_tokens: 2048,
                    },
                )
                .await?;
            println!("{content}");
        }
    }

    Ok(())
}

fn firecrawl_client(config: &AppConfig) -> anyhow::Result<FirecrawlClient> {
    let key = config
        .firecrawl_api_key
        .as_deref()
        .context("FIRECRAWL_API_KEY not configured")?;
    Ok(FirecrawlClient::new(key, config.upstream_timeout_secs)?)
}

fn gemini_client(config: &AppConfig) -> anyhow::Result<GeminiClient> {
    let key = config
        .gemini_api_key
        .as_deref()
        .context("GEMINI_API_KEY not configured")?;
    Ok(GeminiClient::new(
        key,
        &config.gemini_model,
        config.upstream_timeout_secs,
    )?)
}
