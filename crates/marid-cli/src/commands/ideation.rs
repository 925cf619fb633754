use crate::context::AppContext;
use crate::output::{print_json, user_facing};
use anyhow::{Result, bail};
use clap::Args;
use futures::future::join_all;
use marid_application::{
    IdeasBankService, MindMapWorkflow, ProfileAnalyzer, ScamperService, TrendRadar, VoiceLibrary,
};
use marid_core::ideas::IDEA_KEYWORDS;
use marid_core::trend::{TrendInfo, seed_suggestions};
use serde_json::json;

pub async fn ideas(ctx: &AppContext, keyword: Option<&str>) -> Result<()> {
    let Some(keyword) = keyword else {
        return print_json(&IDEA_KEYWORDS);
    };
    let service = IdeasBankService::new(ctx.client()?);
    let ideas = user_facing(service.generate(keyword).await)?;
    print_json(&json!({ "keyword": keyword, "ideas": ideas }))
}

pub async fn scamper(ctx: &AppContext, text: &str) -> Result<()> {
    let service = ScamperService::new(ctx.client()?);
    let suggestions = user_facing(service.generate(text).await)?;
    print_json(&suggestions)
}

#[derive(Args)]
pub struct MindMapArgs {
    topic: String,
    /// Saved brand voice to steer the map
    #[arg(long)]
    voice: Option<String>,
    /// 1-based positions of sub-topics to expand into ideas
    #[arg(long, value_delimiter = ',')]
    pub(crate) expand: Vec<usize>,
}

pub async fn mind_map(ctx: &AppContext, args: MindMapArgs) -> Result<()> {
    let voice = match args.voice.as_deref() {
        Some(id) => match VoiceLibrary::new(ctx.store()).get(id).await {
            Some(voice) => Some(voice),
            None => bail!("Brand voice '{id}' not found"),
        },
        None => None,
    };

    let workflow = MindMapWorkflow::new(ctx.client()?);
    let root = user_facing(workflow.generate_map(&args.topic, voice).await)?;

    let targets: Vec<String> = args
        .expand
        .iter()
        .filter_map(|&pos| pos.checked_sub(1).and_then(|i| root.children.get(i)))
        .map(|node| node.id.clone())
        .collect();
    if targets.len() != args.expand.len() {
        tracing::warn!(
            "[mindmap] Ignoring positions outside 1..={}",
            root.children.len()
        );
    }

    let results = join_all(targets.iter().map(|id| workflow.expand_node(id))).await;
    for result in results {
        if let Err(e) = result {
            eprintln!("{}", e.user_message());
        }
    }

    print_json(&workflow.snapshot().await)
}

#[derive(Args)]
pub struct TrendArgs {
    description: String,
    #[arg(long)]
    link: Option<String>,
    /// The trend comes with an image
    #[arg(long)]
    has_image: bool,
}

pub fn trend_list() -> Result<()> {
    print_json(&seed_suggestions())
}

pub async fn trend_add(ctx: &AppContext, args: TrendArgs) -> Result<()> {
    let radar = TrendRadar::new(ctx.client()?);
    let trend = TrendInfo {
        description: args.description,
        link: args.link,
        has_image: args.has_image,
    };
    let suggestion = user_facing(radar.add_trend(trend).await)?;
    print_json(&suggestion)
}

pub async fn analyze(ctx: &AppContext, profile_url: &str) -> Result<()> {
    let analyzer = ProfileAnalyzer::new(ctx.client()?);
    let analysis = user_facing(analyzer.analyze(profile_url).await)?;
    print_json(&analysis)
}
