//! Stage 2: content generation across selected kinds and platforms.

use brandcast_core::catalog::{content_kind, platform, ContentKind, Platform};
use brandcast_core::content::GeneratedItem;
use brandcast_core::session::SessionState;
use brandcast_model::{extract_payload, ModelClient};

use crate::error::PipelineError;
use crate::prompt;

/// Token budget per content-piece call.
pub const CONTENT_MAX_TOKENS: u32 = 3500;

/// User input for the generation stage.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub total: u32,
    /// Catalog ids of the selected content kinds, in selection order.
    pub kind_ids: Vec<String>,
    /// Catalog ids of the selected platforms, in selection order.
    pub platform_ids: Vec<String>,
}

/// One planned piece: its number, kind, and target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub number: u32,
    pub kind: &'a ContentKind,
    pub platform: &'a Platform,
}

/// Distribute `total` pieces across kinds and platforms.
///
/// `pieces_per_kind = ceil(total / kinds.len())`. Kinds are visited in
/// selection order; within each kind, platforms rotate round-robin with the
/// index resetting per kind (not a global rotation), and the whole nested
/// iteration stops the moment the running count reaches `total`. The last
/// kind may therefore receive fewer pieces than `pieces_per_kind`, an uneven
/// tie-break kept deliberately.
#[must_use]
pub fn plan_assignments<'a>(
    total: u32,
    kinds: &[&'a ContentKind],
    platforms: &[&'a Platform],
) -> Vec<Assignment<'a>> {
    if total == 0 || kinds.is_empty() || platforms.is_empty() {
        return Vec::new();
    }

    let pieces_per_kind = total.div_ceil(u32::try_from(kinds.len()).unwrap_or(u32::MAX));
    let mut assignments = Vec::with_capacity(total as usize);
    let mut number: u32 = 1;

    'kinds: for kind in kinds {
        for i in 0..pieces_per_kind {
            if number > total {
                break 'kinds;
            }
            let plat = platforms[(i as usize) % platforms.len()];
            assignments.push(Assignment {
                number,
                kind,
                platform: plat,
            });
            number += 1;
        }
    }

    assignments
}

/// Run the generation stage: one sequential model call per planned piece.
///
/// Each parsed item gets a locally assigned `content-N` id and content
/// number; thread items get their tweet character counts recomputed from the
/// returned text. One piece's failure aborts the whole batch with no partial
/// commit. On full success the session's stage-2 item list is replaced
/// wholesale.
///
/// # Errors
///
/// - [`PipelineError::InvalidInput`] if stage 1 has not been committed, the
///   quantity is zero, either selection is empty, or an id does not resolve
///   in the catalogs (all checked before any network call).
/// - [`PipelineError::Model`] on any transport, API, or parse failure.
pub async fn generate_content(
    client: &ModelClient,
    session: &mut SessionState,
    request: GenerationRequest,
) -> Result<usize, PipelineError> {
    let Some(profile) = session.stage1.profile.clone() else {
        return Err(PipelineError::InvalidInput(
            "complete the research stage first".to_string(),
        ));
    };
    if request.total < 1 {
        return Err(PipelineError::InvalidInput(
            "content quantity must be at least 1".to_string(),
        ));
    }
    if request.kind_ids.is_empty() {
        return Err(PipelineError::InvalidInput(
            "select at least one content type".to_string(),
        ));
    }
    if request.platform_ids.is_empty() {
        return Err(PipelineError::InvalidInput(
            "select at least one platform".to_string(),
        ));
    }

    let kinds = resolve_kinds(&request.kind_ids)?;
    let platforms = resolve_platforms(&request.platform_ids)?;
    let vertical = session.stage1.vertical.clone();

    let plan = plan_assignments(request.total, &kinds, &platforms);
    let mut items: Vec<GeneratedItem> = Vec::with_capacity(plan.len());

    for assignment in &plan {
        tracing::info!(
            piece = assignment.number,
            of = plan.len(),
            kind = assignment.kind.id,
            platform = assignment.platform.id,
            "generating content piece"
        );

        let piece_prompt = prompt::content_prompt(
            assignment.number,
            assignment.kind,
            assignment.platform,
            &profile,
            &vertical,
        );
        let text = client.complete(&piece_prompt, CONTENT_MAX_TOKENS).await?;

        let context = format!("content {} ({})", assignment.number, assignment.kind.id);
        let mut item: GeneratedItem = extract_payload(&text, &context)?;

        // Identity fields come from the plan, not the model's echo.
        item.id = format!("content-{}", assignment.number);
        item.content_number = assignment.number;
        item.content_type = assignment.kind.label.to_string();
        item.platform = assignment.platform.label.to_string();
        item.recount_thread_characters();

        items.push(item);
    }

    let produced = items.len();
    session.commit_generation(request.total, request.kind_ids, request.platform_ids, items);

    tracing::info!(pieces = produced, "generation stage complete");
    Ok(produced)
}

fn resolve_kinds(ids: &[String]) -> Result<Vec<&'static ContentKind>, PipelineError> {
    ids.iter()
        .map(|id| {
            content_kind(id)
                .ok_or_else(|| PipelineError::InvalidInput(format!("unknown content type '{id}'")))
        })
        .collect()
}

fn resolve_platforms(ids: &[String]) -> Result<Vec<&'static Platform>, PipelineError> {
    ids.iter()
        .map(|id| {
            platform(id)
                .ok_or_else(|| PipelineError::InvalidInput(format!("unknown platform '{id}'")))
        })
        .collect()
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
