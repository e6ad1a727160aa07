//! Folio CLI - browse a portfolio from the terminal

use clap::{Parser, Subcommand};
use folio_core::api::{PortfolioApi, SimulatedApi};
use folio_core::config::{Config, LatencyConfig};
use folio_core::render::{self, DashboardStats, RenderOptions};
use folio_core::store::SkillFilter;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio and resume browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Skip the simulated api latency
    #[arg(long, global = true)]
    no_latency: bool,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the profile: contact, links, education, skills, work
    Profile,

    /// List projects, optionally filtered by one skill
    Projects {
        /// Skill tag to filter by (exact, case-sensitive), or "all"
        #[arg(short, long, default_value = "all")]
        skill: String,
    },

    /// Skills dashboard ranked by project usage
    Skills,

    /// Search name, skills, projects, and work history
    Search {
        /// Search text (case-insensitive)
        query: String,
    },

    /// Check api health
    Health,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("folio=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let (format, quiet, no_latency) = (cli.format, cli.quiet, cli.no_latency);

    let result = run(cli.command, format, quiet, no_latency).await;
    if let Err(e) = &result {
        if let Some(hint) = e.downcast_ref::<folio_core::Error>().and_then(|e| e.suggestion()) {
            eprintln!("Hint: try `{}`", hint);
        }
    }
    result
}

async fn run(
    command: Commands,
    format: OutputFormat,
    quiet: bool,
    no_latency: bool,
) -> anyhow::Result<()> {
    match command {
        Commands::Profile => cmd_profile(&Session::load(no_latency)?.api, format).await,
        Commands::Projects { skill } => {
            let session = Session::load(no_latency)?;
            cmd_projects(&session.api, SkillFilter::from(skill), format).await
        }
        Commands::Skills => cmd_skills(&Session::load(no_latency)?.api, format).await,
        Commands::Search { query } => {
            let session = Session::load(no_latency)?;
            cmd_search(&session.api, &query, &session.options, format).await
        }
        Commands::Health => cmd_health(&Session::load(no_latency)?.api, format, quiet).await,
        Commands::Config { action } => cmd_config(action, quiet),
    }
}

/// Api and display settings built from the loaded config
struct Session {
    api: SimulatedApi,
    options: RenderOptions,
}

impl Session {
    fn load(no_latency: bool) -> anyhow::Result<Self> {
        let config = Config::load()?;
        let latency = if no_latency {
            LatencyConfig::disabled()
        } else {
            config.latency.clone()
        };
        debug!(no_latency, "loaded session");
        Ok(Self {
            api: SimulatedApi::from_config(&config).with_latency(latency),
            options: RenderOptions::from(&config.display),
        })
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_profile(api: &dyn PortfolioApi, format: OutputFormat) -> anyhow::Result<()> {
    let profile = api.get_profile().await?;
    match format {
        OutputFormat::Json => print_json(&profile),
        OutputFormat::Text => {
            print!("{}", render::render_profile(&profile));
            Ok(())
        }
    }
}

async fn cmd_projects(
    api: &dyn PortfolioApi,
    filter: SkillFilter,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let projects = api.get_projects_by_skill(&filter).await?;
    match format {
        OutputFormat::Json => print_json(&projects),
        OutputFormat::Text => {
            let profile = api.get_profile().await?;
            let refs: Vec<_> = projects.iter().collect();
            print!("{}", render::render_projects(&refs, &profile.skills, &filter));
            Ok(())
        }
    }
}

async fn cmd_skills(api: &dyn PortfolioApi, format: OutputFormat) -> anyhow::Result<()> {
    let top_skills = api.get_top_skills().await?;
    match format {
        OutputFormat::Json => print_json(&top_skills),
        OutputFormat::Text => {
            let profile = api.get_profile().await?;
            print!(
                "{}",
                render::render_skills_dashboard(&top_skills, DashboardStats::from_profile(&profile))
            );
            Ok(())
        }
    }
}

async fn cmd_search(
    api: &dyn PortfolioApi,
    query: &str,
    options: &RenderOptions,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let query = query.trim();
    let results = if query.is_empty() {
        Vec::new()
    } else {
        api.search(query).await?
    };
    info!(query, count = results.len(), "search complete");

    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Text => {
            print!("{}", render::render_search_results(&results, query, options));
            Ok(())
        }
    }
}

async fn cmd_health(api: &dyn PortfolioApi, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    match api.check_health().await {
        Ok(report) => match format {
            OutputFormat::Json => print_json(&report),
            OutputFormat::Text => {
                if quiet {
                    println!("Online");
                } else {
                    println!("[OK] Api: Online");
                    println!("     Uptime: {}", report.uptime);
                    println!("     Checked: {}", report.timestamp);
                }
                Ok(())
            }
        },
        Err(e) => {
            if !quiet {
                println!("[!!] Api: Offline - {}", e);
            }
            Err(e.into())
        }
    }
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
