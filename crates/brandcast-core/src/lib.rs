//! Shared types and configuration for the brandcast pipeline.
//!
//! Holds the static content-kind and platform catalogs, the brand profile and
//! campaign types produced by stage 1, the generated-content model produced by
//! stage 2, and the in-memory session store that owns all of it for the
//! lifetime of a run.

pub mod catalog;
pub mod config;
pub mod content;
pub mod profile;
pub mod session;

pub use catalog::{content_kind, platform, ContentKind, Platform, Structure, CONTENT_KINDS, PLATFORMS};
pub use config::AppConfig;
pub use content::{ContentBody, ContentPatch, EmailContent, GeneratedItem, Tweet};
pub use profile::{BrandProfile, Campaign};
pub use session::{SessionError, SessionState};
