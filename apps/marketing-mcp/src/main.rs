//! MCP stdio server and CLI for the marketing tools.

mod allowlist;

use std::sync::Arc;

use agentic_tools_core::ToolContext;
use agentic_tools_mcp::{RegistryServer, ServiceExt, stdio};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marketing_tools::types::{
    AdSetsInput, CampaignsInput, CatalogProductsInput, CatalogsInput, InterestSearchInput,
    WeatherInput,
};
use marketing_tools::{MarketingTools, build_registry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "marketing-mcp")]
#[command(about = "Facebook Marketing and weather tools via CLI or MCP")]
#[command(version)]
struct Args {
    /// Load environment variables from a .env file before starting
    #[arg(long, global = true)]
    dot_env: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP stdio server
    Mcp {
        /// Comma-separated tool allowlist. Example: fetch_ad_sets,search_interests
        #[arg(long, value_name = "NAMES")]
        allow: Option<String>,
        /// JSON config file path (supports { "allowlist": ["fetch_ad_sets"] })
        #[arg(long, value_name = "PATH")]
        config: Option<String>,
        /// List available tools and exit
        #[arg(long)]
        list_tools: bool,
    },
    #[command(flatten)]
    Cli(CliCommand),
}

#[derive(Subcommand)]
enum CliCommand {
    /// Fetch all products of a catalog
    Products {
        #[arg(long)]
        catalog_id: String,
    },
    /// Fetch ad sets of an ad account
    AdSets {
        #[arg(long)]
        ad_account_id: String,
        #[arg(long)]
        campaign_id: Option<String>,
    },
    /// List ad accounts of the access token's user
    Accounts,
    /// List campaigns of an ad account
    Campaigns {
        #[arg(long)]
        ad_account_id: String,
    },
    /// List product catalogs of a business
    Catalogs {
        #[arg(long)]
        business_id: String,
    },
    /// Search interest targeting options
    Interests {
        #[arg(long)]
        query: String,
    },
    /// Print the behavior targeting table
    Behaviors,
    /// Current weather for a city
    Weather {
        #[arg(long)]
        city: String,
    },
    /// Call any tool with JSON arguments
    Call {
        /// Tool name, as listed by `mcp --list-tools`
        tool: String,
        /// JSON object of arguments
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries MCP frames and CLI output, so logs always go to stderr.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "marketing_mcp=info,marketing_tools=info,graph_async=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.dot_env {
        let _ = dotenvy::dotenv();
    }

    // Install the rustls CryptoProvider before any HTTP clients are created.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let tools = Arc::new(MarketingTools::new());

    match args.command {
        Commands::Mcp {
            allow,
            config,
            list_tools,
        } => run_mcp_server(tools, allow.as_deref(), config.as_deref(), list_tools).await,
        Commands::Cli(command) => run_cli(tools, command).await,
    }
}

async fn run_mcp_server(
    tools: Arc<MarketingTools>,
    allow: Option<&str>,
    config: Option<&str>,
    list_tools: bool,
) -> Result<()> {
    let mut server = RegistryServer::new(Arc::new(build_registry(tools)))
        .with_info("marketing-mcp", env!("CARGO_PKG_VERSION"));
    if let Some(set) = allowlist::resolve(allow, config) {
        server = server.with_allowlist(set);
    }

    let mut names = server.effective_tool_names();
    names.sort();
    if list_tools {
        eprintln!("Available tools ({}):", names.len());
        for n in names {
            eprintln!("  - {n}");
        }
        return Ok(());
    }

    tracing::info!(tools = names.len(), "starting marketing-mcp");
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

async fn run_cli(tools: Arc<MarketingTools>, command: CliCommand) -> Result<()> {
    let out = match command {
        CliCommand::Products { catalog_id } => {
            marketing_tools::products::fetch_products_from_catalog(
                &tools,
                CatalogProductsInput { catalog_id },
            )
            .await
        }
        CliCommand::AdSets {
            ad_account_id,
            campaign_id,
        } => {
            marketing_tools::ad_sets::fetch_ad_sets(
                &tools,
                AdSetsInput {
                    ad_account_id,
                    campaign_id,
                },
            )
            .await
        }
        CliCommand::Accounts => marketing_tools::accounts::get_facebook_ad_accounts(&tools).await,
        CliCommand::Campaigns { ad_account_id } => {
            marketing_tools::accounts::get_facebook_campaigns(
                &tools,
                CampaignsInput { ad_account_id },
            )
            .await
        }
        CliCommand::Catalogs { business_id } => {
            marketing_tools::accounts::get_facebook_catalogs(&tools, CatalogsInput { business_id })
                .await
        }
        CliCommand::Interests { query } => {
            marketing_tools::targeting::search_interests(&tools, InterestSearchInput { query })
                .await
        }
        CliCommand::Behaviors => marketing_tools::targeting::get_behavior_ids(),
        CliCommand::Weather { city } => {
            marketing_tools::weather::get_weather_by_city(&tools, WeatherInput { city_name: city })
                .await
        }
        CliCommand::Call { tool, args } => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            match build_registry(tools)
                .dispatch_json(&tool, args, &ToolContext::default())
                .await?
            {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            }
        }
    };
    println!("{out}");
    Ok(())
}
