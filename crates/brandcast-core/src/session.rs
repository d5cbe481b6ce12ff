//! In-memory session store.
//!
//! All pipeline output lives here for the duration of a run; nothing is
//! persisted. Mutation happens only through the explicit commit entry points,
//! which keeps the all-or-nothing-per-stage failure policy honest: a stage
//! that fails never touches the store, and a completed stage survives later
//! failures.

use serde::Serialize;
use thiserror::Error;

use crate::content::{ContentPatch, GeneratedItem};
use crate::profile::{BrandProfile, Campaign};

#[derive(Debug, Error)]
pub enum SessionError {
    /// An edit referenced a content id that is not in the store.
    #[error("no generated item with id '{0}'")]
    UnknownItem(String),
}

/// Stage-1 subtree: user input plus the committed analysis results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Stage1State {
    pub website_url: String,
    pub vertical: String,
    pub notes: String,
    pub profile: Option<BrandProfile>,
    pub campaigns: Vec<Campaign>,
}

/// Stage-2 subtree: generation request echo plus the committed items.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Stage2State {
    pub total_requested: u32,
    pub kind_ids: Vec<String>,
    pub platform_ids: Vec<String>,
    pub items: Vec<GeneratedItem>,
}

/// The session store. Stage-3 operations (edit, export) read and patch this
/// tree; they never rebuild it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    pub stage1: Stage1State,
    pub stage2: Stage2State,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether stage 1 has been committed.
    #[must_use]
    pub fn research_complete(&self) -> bool {
        self.stage1.profile.is_some()
    }

    /// Commit the research stage atomically: inputs, profile, and campaigns
    /// land together, replacing any previous run's results.
    pub fn commit_research(
        &mut self,
        website_url: String,
        vertical: String,
        notes: String,
        profile: BrandProfile,
        campaigns: Vec<Campaign>,
    ) {
        self.stage1 = Stage1State {
            website_url,
            vertical,
            notes,
            profile: Some(profile),
            campaigns,
        };
    }

    /// Commit the generation stage, replacing the item list wholesale.
    pub fn commit_generation(
        &mut self,
        total_requested: u32,
        kind_ids: Vec<String>,
        platform_ids: Vec<String>,
        items: Vec<GeneratedItem>,
    ) {
        self.stage2 = Stage2State {
            total_requested,
            kind_ids,
            platform_ids,
            items,
        };
    }

    /// Shallow-edit one generated item by id.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownItem`] if no item carries the id.
    pub fn edit_item(&mut self, id: &str, patch: &ContentPatch) -> Result<(), SessionError> {
        let item = self
            .stage2
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| SessionError::UnknownItem(id.to_string()))?;
        item.apply_patch(patch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentBody;
    use crate::profile::{BrandVoice, TargetAudience, UniqueValue};

    fn sample_profile() -> BrandProfile {
        BrandProfile {
            business_nature: String::new(),
            mission: "m".to_string(),
            vision: String::new(),
            values: vec![],
            target_audience: TargetAudience {
                demographic: String::new(),
                psychographic: String::new(),
                pain_points: vec![],
                aspirations: vec![],
                content_habits: String::new(),
                summary: "s".to_string(),
            },
            unique_value: UniqueValue {
                primary: "p".to_string(),
                supporting: vec![],
                proof_points: vec![],
            },
            brand_voice: BrandVoice {
                description: "d".to_string(),
                tone_attributes: vec![],
                do_statements: vec![],
                dont_statements: vec![],
                example: String::new(),
            },
            competitive_advantages: vec![],
            strategic_priorities: vec![],
            industry_context: crate::profile::IndustryContext::default(),
        }
    }

    fn sample_item(id: &str) -> GeneratedItem {
        GeneratedItem {
            id: id.to_string(),
            content_number: 1,
            content_type: "Social Posts".to_string(),
            platform: "LinkedIn".to_string(),
            title: "t".to_string(),
            caption: None,
            hashtags: vec![],
            body: ContentBody::Single {
                hook: "h".to_string(),
                body: "b".to_string(),
                cta: "c".to_string(),
            },
        }
    }

    #[test]
    fn fresh_session_has_no_research() {
        let session = SessionState::new();
        assert!(!session.research_complete());
        assert!(session.stage2.items.is_empty());
    }

    #[test]
    fn commit_research_sets_all_stage1_fields() {
        let mut session = SessionState::new();
        session.commit_research(
            "https://example.com".to_string(),
            "Food & Beverage".to_string(),
            String::new(),
            sample_profile(),
            vec![],
        );
        assert!(session.research_complete());
        assert_eq!(session.stage1.website_url, "https://example.com");
    }

    #[test]
    fn commit_generation_replaces_items_wholesale() {
        let mut session = SessionState::new();
        session.commit_generation(
            1,
            vec!["post".to_string()],
            vec!["linkedin".to_string()],
            vec![sample_item("content-1")],
        );
        session.commit_generation(
            1,
            vec!["ad".to_string()],
            vec!["twitter".to_string()],
            vec![sample_item("content-1"), sample_item("content-2")],
        );
        assert_eq!(session.stage2.items.len(), 2);
        assert_eq!(session.stage2.kind_ids, vec!["ad".to_string()]);
    }

    #[test]
    fn stage1_survives_stage2_recommit() {
        let mut session = SessionState::new();
        session.commit_research(
            "https://example.com".to_string(),
            "Retail".to_string(),
            String::new(),
            sample_profile(),
            vec![],
        );
        session.commit_generation(1, vec![], vec![], vec![]);
        assert!(session.research_complete());
    }

    #[test]
    fn edit_unknown_id_is_an_error() {
        let mut session = SessionState::new();
        let result = session.edit_item("content-404", &ContentPatch::default());
        assert!(matches!(result, Err(SessionError::UnknownItem(_))));
    }

    #[test]
    fn edit_patches_matching_item_only() {
        let mut session = SessionState::new();
        session.commit_generation(
            2,
            vec!["post".to_string()],
            vec!["linkedin".to_string()],
            vec![sample_item("content-1"), sample_item("content-2")],
        );
        session
            .edit_item(
                "content-2",
                &ContentPatch {
                    title: Some("edited".to_string()),
                    ..ContentPatch::default()
                },
            )
            .unwrap();
        assert_eq!(session.stage2.items[0].title, "t");
        assert_eq!(session.stage2.items[1].title, "edited");
    }
}
