//! Stored collections. None of these need the AI service.

use crate::VoiceArgs;
use crate::context::AppContext;
use crate::output::print_json;
use anyhow::{Result, anyhow};
use marid_application::{HistoryService, ScoutingCatalog, VoiceLibrary};
use marid_core::agency::Agency;
use marid_core::brand_voice::BrandVoice;
use serde_json::json;

pub async fn history_list(ctx: &AppContext) -> Result<()> {
    let items = HistoryService::new(ctx.store()).list().await;
    let summary: Vec<_> = items
        .iter()
        .map(|item| {
            json!({
                "id": item.id,
                "date": item.date,
                "userIdea": item.user_input.user_idea,
                "hasImage": item.generated_image.is_some(),
            })
        })
        .collect();
    print_json(&summary)
}

pub async fn history_show(ctx: &AppContext, id: &str) -> Result<()> {
    let item = HistoryService::new(ctx.store())
        .get(id)
        .await
        .ok_or_else(|| anyhow!("History item '{id}' not found"))?;
    print_json(&item)
}

pub async fn history_delete(ctx: &AppContext, id: &str) -> Result<()> {
    HistoryService::new(ctx.store()).delete(id).await?;
    eprintln!("Deleted history item {id}");
    Ok(())
}

pub async fn history_clear(ctx: &AppContext) -> Result<()> {
    HistoryService::new(ctx.store()).clear().await;
    eprintln!("History cleared");
    Ok(())
}

pub async fn voice_list(ctx: &AppContext) -> Result<()> {
    print_json(&VoiceLibrary::new(ctx.store()).list().await)
}

pub async fn voice_save(ctx: &AppContext, args: VoiceArgs) -> Result<()> {
    let voice = BrandVoice::new(args.tone, args.audience, args.keywords, args.goals);
    let saved = VoiceLibrary::new(ctx.store()).save(&voice, &args.name).await?;
    print_json(&saved)
}

pub async fn voice_delete(ctx: &AppContext, id: &str) -> Result<()> {
    VoiceLibrary::new(ctx.store()).delete(id).await?;
    eprintln!("Deleted voice {id}");
    Ok(())
}

pub async fn agency_list(ctx: &AppContext) -> Result<()> {
    print_json(&ScoutingCatalog::new(ctx.store()).list().await)
}

pub async fn agency_add(
    ctx: &AppContext,
    name: String,
    description: String,
    website: String,
) -> Result<()> {
    let agency = Agency::new(name, description, website);
    let added = ScoutingCatalog::new(ctx.store()).add(agency).await?;
    print_json(&added)
}

pub async fn agency_delete(ctx: &AppContext, name: &str) -> Result<()> {
    ScoutingCatalog::new(ctx.store()).delete(name).await?;
    eprintln!("Deleted agency {name}");
    Ok(())
}
