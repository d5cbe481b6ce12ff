//! Stage 1, research: brand-fundamentals analysis plus campaign
//! recommendations.

use serde::Deserialize;

use brandcast_core::profile::{BrandProfile, Campaign};
use brandcast_core::session::SessionState;
use brandcast_model::{extract_payload, ModelClient};

use crate::error::PipelineError;
use crate::prompt;

/// Token budget for the brand-analysis call.
pub const BRAND_ANALYSIS_MAX_TOKENS: u32 = 5000;
/// Token budget for the campaign-recommendations call.
pub const CAMPAIGNS_MAX_TOKENS: u32 = 4000;

/// User input for the research stage.
#[derive(Debug, Clone)]
pub struct ResearchInput {
    pub website_url: String,
    pub vertical: String,
    /// Free-text notes; empty means no additional context.
    pub notes: String,
}

#[derive(Deserialize)]
struct CampaignsPayload {
    #[serde(default)]
    campaigns: Vec<Campaign>,
}

/// Run the research stage: two sequential model calls, committed atomically.
///
/// 1. Request a brand profile as JSON and parse it.
/// 2. Request 6-10 campaign recommendations seeded with the parsed profile.
/// 3. Commit both results to the session in one step.
///
/// The session is only mutated once both calls fully succeed; any transport
/// or parse failure discards partial results and surfaces the raw error. No
/// retry.
///
/// # Errors
///
/// - [`PipelineError::InvalidInput`] if the website URL or vertical is empty
///   (checked before any network call).
/// - [`PipelineError::Model`] on transport, API, or parse failure.
pub async fn analyze_website(
    client: &ModelClient,
    session: &mut SessionState,
    input: ResearchInput,
) -> Result<(BrandProfile, Vec<Campaign>), PipelineError> {
    if input.website_url.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "website URL is required".to_string(),
        ));
    }
    if input.vertical.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "business vertical is required".to_string(),
        ));
    }

    tracing::info!(url = %input.website_url, vertical = %input.vertical, "analyzing brand");

    let analysis_prompt =
        prompt::brand_analysis_prompt(&input.website_url, &input.vertical, &input.notes);
    let analysis_text = client
        .complete(&analysis_prompt, BRAND_ANALYSIS_MAX_TOKENS)
        .await?;
    let profile: BrandProfile = extract_payload(&analysis_text, "brand analysis")?;

    tracing::info!(mission = %profile.mission, "brand profile parsed, requesting campaigns");

    let campaigns_prompt = prompt::campaign_prompt(&profile, &input.vertical);
    let campaigns_text = client
        .complete(&campaigns_prompt, CAMPAIGNS_MAX_TOKENS)
        .await?;
    let payload: CampaignsPayload = extract_payload(&campaigns_text, "campaign recommendations")?;

    tracing::info!(campaigns = payload.campaigns.len(), "research stage complete");

    session.commit_research(
        input.website_url,
        input.vertical,
        input.notes,
        profile.clone(),
        payload.campaigns.clone(),
    );

    Ok((profile, payload.campaigns))
}
