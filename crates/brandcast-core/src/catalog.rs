//! Static content-kind and platform catalogs.
//!
//! These are configuration constants, not generated data: nine content kinds
//! each tagged with the JSON shape the model is asked to produce, and six
//! platforms each carrying character limits for the fields they constrain.

use serde::{Deserialize, Serialize};

/// The JSON shape a content kind asks the model to produce.
///
/// Serialized values match the `contentStructure` tag in model responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Structure {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "multi-slide")]
    MultiSlide,
    #[serde(rename = "data-visual")]
    DataVisual,
    #[serde(rename = "thread")]
    Thread,
    #[serde(rename = "video-script")]
    VideoScript,
    #[serde(rename = "story-frames")]
    StoryFrames,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "long-form")]
    LongForm,
    #[serde(rename = "ad")]
    Ad,
}

impl Structure {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Structure::Single => "single",
            Structure::MultiSlide => "multi-slide",
            Structure::DataVisual => "data-visual",
            Structure::Thread => "thread",
            Structure::VideoScript => "video-script",
            Structure::StoryFrames => "story-frames",
            Structure::Email => "email",
            Structure::LongForm => "long-form",
            Structure::Ad => "ad",
        }
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentKind {
    pub id: &'static str,
    pub label: &'static str,
    pub structure: Structure,
}

/// Per-field character limits a platform enforces.
///
/// `None` means the platform has no limit for that field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformLimits {
    pub post: Option<u32>,
    pub caption: Option<u32>,
    pub tweet: Option<u32>,
    pub description: Option<u32>,
}

/// One selectable target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub id: &'static str,
    pub label: &'static str,
    pub limits: PlatformLimits,
}

impl Platform {
    /// The limit applied to free-text captions, falling back from caption to
    /// post. 3000 when the platform declares neither.
    #[must_use]
    pub fn caption_limit(&self) -> u32 {
        self.limits
            .caption
            .or(self.limits.post)
            .unwrap_or(3000)
    }
}

pub const CONTENT_KINDS: [ContentKind; 9] = [
    ContentKind {
        id: "post",
        label: "Social Posts",
        structure: Structure::Single,
    },
    ContentKind {
        id: "carousel",
        label: "Carousels",
        structure: Structure::MultiSlide,
    },
    ContentKind {
        id: "infographic",
        label: "Infographics",
        structure: Structure::DataVisual,
    },
    ContentKind {
        id: "thread",
        label: "Twitter Threads",
        structure: Structure::Thread,
    },
    ContentKind {
        id: "reel",
        label: "Reels/Shorts",
        structure: Structure::VideoScript,
    },
    ContentKind {
        id: "story",
        label: "Stories",
        structure: Structure::StoryFrames,
    },
    ContentKind {
        id: "email",
        label: "Email Copy",
        structure: Structure::Email,
    },
    ContentKind {
        id: "blog",
        label: "Blog Articles",
        structure: Structure::LongForm,
    },
    ContentKind {
        id: "ad",
        label: "Ad Copy",
        structure: Structure::Ad,
    },
];

pub const PLATFORMS: [Platform; 6] = [
    Platform {
        id: "linkedin",
        label: "LinkedIn",
        limits: PlatformLimits {
            post: Some(3000),
            caption: Some(3000),
            tweet: None,
            description: None,
        },
    },
    Platform {
        id: "instagram",
        label: "Instagram",
        limits: PlatformLimits {
            post: None,
            caption: Some(2200),
            tweet: None,
            description: None,
        },
    },
    Platform {
        id: "facebook",
        label: "Facebook",
        limits: PlatformLimits {
            post: Some(63_206),
            caption: None,
            tweet: None,
            description: None,
        },
    },
    Platform {
        id: "twitter",
        label: "Twitter/X",
        limits: PlatformLimits {
            post: None,
            caption: None,
            tweet: Some(280),
            description: None,
        },
    },
    Platform {
        id: "tiktok",
        label: "TikTok",
        limits: PlatformLimits {
            post: None,
            caption: Some(2200),
            tweet: None,
            description: None,
        },
    },
    Platform {
        id: "youtube",
        label: "YouTube",
        limits: PlatformLimits {
            post: None,
            caption: None,
            tweet: None,
            description: Some(5000),
        },
    },
];

/// Look up a content kind by catalog id (e.g. `"carousel"`).
#[must_use]
pub fn content_kind(id: &str) -> Option<&'static ContentKind> {
    CONTENT_KINDS.iter().find(|k| k.id == id)
}

/// Look up a platform by catalog id (e.g. `"linkedin"`).
#[must_use]
pub fn platform(id: &str) -> Option<&'static Platform> {
    PLATFORMS.iter().find(|p| p.id == id)
}
