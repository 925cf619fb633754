use crate::context::AppContext;
use crate::output::{print_json, user_facing};
use anyhow::{Context as _, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use clap::Args;
use marid_application::{ContentWorkflow, GenerationPhase, HistoryService, VoiceLibrary};
use marid_core::brand_voice::{BrandVoice, UserInput};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct GenerateArgs {
    /// The idea to build content around
    #[arg(long)]
    idea: String,
    #[arg(long, default_value = "")]
    tone: String,
    #[arg(long, default_value = "")]
    audience: String,
    #[arg(long, default_value = "")]
    keywords: String,
    #[arg(long, default_value = "")]
    goals: String,
    /// Extra context (competitors, upcoming occasion, ...)
    #[arg(long, default_value = "")]
    context: String,
    /// Use a saved brand voice instead of the voice flags
    #[arg(long)]
    voice: Option<String>,
    /// Write the generated image here instead of printing it
    #[arg(long)]
    image_out: Option<PathBuf>,
}

pub async fn generate(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    let store = ctx.store();
    let workflow = ContentWorkflow::new(
        ctx.client()?,
        Arc::new(HistoryService::new(store.clone())),
        Arc::new(VoiceLibrary::new(store)),
    );

    let mut input = UserInput::new(
        args.idea,
        BrandVoice::new(args.tone, args.audience, args.keywords, args.goals),
    );
    input.context_vectors = args.context;
    workflow.set_user_input(input).await;
    if let Some(id) = args.voice.as_deref() {
        user_facing(workflow.load_voice(id).await)?;
    }

    let mut state = user_facing(workflow.generate().await)?;
    if state.phase == GenerationPhase::ImageFailed {
        if let Some(error) = state.error.as_deref() {
            eprintln!("{error}");
        }
    }

    if let (Some(path), Some(image)) = (args.image_out.as_ref(), state.image.take()) {
        let bytes = BASE64_STANDARD
            .decode(image.as_bytes())
            .context("Generated image is not valid base64")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("[generate] Image written to {}", path.display());
    }

    print_json(&state)
}
