//! Generated-content model: one tagged union variant per content structure.
//!
//! The model is instructed to emit a `contentStructure` tag alongside the
//! shape-specific fields; [`ContentBody`] makes that a sum type so exactly one
//! shape's fields exist per item, and every renderer dispatches through the
//! same enum instead of re-checking string tags. Fields the model omits
//! deserialize to empty defaults and are skipped at render time.

use serde::{Deserialize, Serialize};

use crate::catalog::Structure;

/// One produced content piece.
///
/// `id` and `content_number` are assigned locally by the generation loop
/// (`content-1`, `content-2`, ...), overriding whatever the model echoes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content_number: u32,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(flatten)]
    pub body: ContentBody,
}

/// Shape-specific payload, discriminated by the `contentStructure` JSON tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contentStructure")]
pub enum ContentBody {
    #[serde(rename = "single")]
    Single {
        #[serde(default)]
        hook: String,
        #[serde(default)]
        body: String,
        #[serde(default)]
        cta: String,
    },
    #[serde(rename = "multi-slide")]
    MultiSlide {
        #[serde(default)]
        slides: Vec<Slide>,
    },
    #[serde(rename = "data-visual", rename_all = "camelCase")]
    DataVisual {
        #[serde(default)]
        subtitle: String,
        #[serde(default)]
        data_points: Vec<DataPoint>,
        #[serde(default)]
        visual_structure: String,
        #[serde(default)]
        color_scheme: String,
    },
    #[serde(rename = "thread")]
    Thread {
        #[serde(default)]
        tweets: Vec<Tweet>,
    },
    #[serde(rename = "video-script")]
    VideoScript {
        #[serde(default)]
        script: Script,
    },
    #[serde(rename = "story-frames")]
    StoryFrames {
        #[serde(default)]
        frames: Vec<Frame>,
    },
    #[serde(rename = "email", rename_all = "camelCase")]
    Email {
        #[serde(default)]
        subject_line: String,
        #[serde(default)]
        preheader: String,
        #[serde(default)]
        body: EmailContent,
        #[serde(default)]
        ps: String,
    },
    #[serde(rename = "long-form", rename_all = "camelCase")]
    LongForm {
        #[serde(default)]
        meta_description: String,
        #[serde(default)]
        introduction: String,
        #[serde(default)]
        sections: Vec<ArticleSection>,
        #[serde(default)]
        conclusion: String,
        #[serde(default)]
        cta: String,
        #[serde(default)]
        keywords: Vec<String>,
    },
    #[serde(rename = "ad", rename_all = "camelCase")]
    Ad {
        #[serde(default)]
        headline: String,
        #[serde(default)]
        primary_text: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        cta: String,
        #[serde(default)]
        ad_format: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default)]
    pub slide_number: u32,
    /// `"cover"`, `"cta"`, or absent for body slides.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub visual_direction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    #[serde(default)]
    pub statistic: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    #[serde(default)]
    pub tweet_number: u32,
    #[serde(default)]
    pub content: String,
    /// Recomputed locally from `content` after parsing; the model's
    /// self-reported value is never trusted.
    #[serde(default)]
    pub character_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub hook: ScriptSegment,
    #[serde(default)]
    pub content: Vec<ScriptSegment>,
    #[serde(default)]
    pub cta: ScriptSegment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSegment {
    #[serde(default)]
    pub timing: String,
    #[serde(default)]
    pub voiceover: String,
    #[serde(default)]
    pub visual: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_overlay: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub frame_number: u32,
    /// `"opener"`, `"content"`, or `"cta"`.
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub visual: String,
    #[serde(default)]
    pub interactive: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContent {
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub opening: String,
    #[serde(default)]
    pub main_content: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub closing: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub key_points: Vec<String>,
}

/// Shallow edit applied through the review path.
///
/// Only flat top-level fields are editable; structured shapes (slides,
/// tweets, frames, script, sections) are not reachable from here.
#[derive(Debug, Clone, Default)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub hook: Option<String>,
    pub body: Option<String>,
    pub cta: Option<String>,
    pub hashtags: Option<Vec<String>>,
}

impl GeneratedItem {
    /// The structure tag this item's body carries.
    #[must_use]
    pub fn structure(&self) -> Structure {
        match self.body {
            ContentBody::Single { .. } => Structure::Single,
            ContentBody::MultiSlide { .. } => Structure::MultiSlide,
            ContentBody::DataVisual { .. } => Structure::DataVisual,
            ContentBody::Thread { .. } => Structure::Thread,
            ContentBody::VideoScript { .. } => Structure::VideoScript,
            ContentBody::StoryFrames { .. } => Structure::StoryFrames,
            ContentBody::Email { .. } => Structure::Email,
            ContentBody::LongForm { .. } => Structure::LongForm,
            ContentBody::Ad { .. } => Structure::Ad,
        }
    }

    /// Overwrite every tweet's `character_count` with the actual character
    /// count of its content. No-op for non-thread items.
    pub fn recount_thread_characters(&mut self) {
        if let ContentBody::Thread { tweets } = &mut self.body {
            for tweet in tweets {
                tweet.character_count = tweet.content.chars().count();
            }
        }
    }

    /// Apply a shallow patch. `hook`/`body`/`cta` only land on
    /// `single`-structure items; `title` and `hashtags` apply to any item.
    pub fn apply_patch(&mut self, patch: &ContentPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(hashtags) = &patch.hashtags {
            self.hashtags.clone_from(hashtags);
        }
        if let ContentBody::Single { hook, body, cta } = &mut self.body {
            if let Some(new_hook) = &patch.hook {
                hook.clone_from(new_hook);
            }
            if let Some(new_body) = &patch.body {
                body.clone_from(new_body);
            }
            if let Some(new_cta) = &patch.cta {
                cta.clone_from(new_cta);
            }
        }
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;
