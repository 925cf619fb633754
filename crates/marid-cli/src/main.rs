use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod context;
mod output;

use context::AppContext;

#[derive(Parser)]
#[command(name = "marid")]
#[command(about = "Marid - Arabic content-marketing assistant", long_about = None)]
struct Cli {
    /// Configuration directory (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a post, platform versions and an image for an idea
    Generate(commands::content::GenerateArgs),
    /// Content ideas for a sector keyword (lists the catalog without one)
    Ideas {
        keyword: Option<String>,
    },
    /// Seven SCAMPER variations of a hook or idea
    Scamper {
        text: String,
    },
    /// Build a mind map and optionally expand some of its sub-topics
    Mindmap(commands::ideation::MindMapArgs),
    /// Trend radar suggestions
    Trend {
        #[command(subcommand)]
        action: TrendAction,
    },
    /// Analyze an Instagram profile (simulated metrics)
    Analyze {
        profile_url: String,
    },
    /// Generation history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Saved brand voices
    Voices {
        #[command(subcommand)]
        action: VoiceAction,
    },
    /// Scouting catalog of agency websites
    Agencies {
        #[command(subcommand)]
        action: AgencyAction,
    },
}

#[derive(Subcommand)]
enum TrendAction {
    /// Show the seed suggestions
    List,
    /// Draft a post for a trend
    Add(commands::ideation::TrendArgs),
}

#[derive(Subcommand)]
enum HistoryAction {
    List,
    Show { id: String },
    Delete { id: String },
    Clear,
}

#[derive(Subcommand)]
enum VoiceAction {
    List,
    Save(VoiceArgs),
    Delete { id: String },
}

#[derive(Args)]
pub struct VoiceArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    tone: String,
    #[arg(long)]
    audience: String,
    #[arg(long, default_value = "")]
    keywords: String,
    #[arg(long)]
    goals: String,
}

#[derive(Subcommand)]
enum AgencyAction {
    List,
    Add {
        name: String,
        website: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Delete { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .ok();

    let cli = Cli::parse();
    let ctx = AppContext::load(cli.config_dir.as_deref())?;

    match cli.command {
        Commands::Generate(args) => commands::content::generate(&ctx, args).await?,
        Commands::Ideas { keyword } => commands::ideation::ideas(&ctx, keyword.as_deref()).await?,
        Commands::Scamper { text } => commands::ideation::scamper(&ctx, &text).await?,
        Commands::Mindmap(args) => commands::ideation::mind_map(&ctx, args).await?,
        Commands::Trend { action } => match action {
            TrendAction::List => commands::ideation::trend_list()?,
            TrendAction::Add(args) => commands::ideation::trend_add(&ctx, args).await?,
        },
        Commands::Analyze { profile_url } => {
            commands::ideation::analyze(&ctx, &profile_url).await?
        }
        Commands::History { action } => match action {
            HistoryAction::List => commands::library::history_list(&ctx).await?,
            HistoryAction::Show { id } => commands::library::history_show(&ctx, &id).await?,
            HistoryAction::Delete { id } => commands::library::history_delete(&ctx, &id).await?,
            HistoryAction::Clear => commands::library::history_clear(&ctx).await?,
        },
        Commands::Voices { action } => match action {
            VoiceAction::List => commands::library::voice_list(&ctx).await?,
            VoiceAction::Save(args) => commands::library::voice_save(&ctx, args).await?,
            VoiceAction::Delete { id } => commands::library::voice_delete(&ctx, &id).await?,
        },
        Commands::Agencies { action } => match action {
            AgencyAction::List => commands::library::agency_list(&ctx).await?,
            AgencyAction::Add {
                name,
                website,
                description,
            } => commands::library::agency_add(&ctx, name, description, website).await?,
            AgencyAction::Delete { name } => commands::library::agency_delete(&ctx, &name).await?,
        },
    }

    Ok(())
}
