//! Client for the text-completion model endpoint, plus best-effort JSON
//! extraction from its responses.
//!
//! The endpoint is treated as an opaque capability: submit a prompt, receive
//! text. The text is expected to be a JSON document, optionally wrapped in
//! markdown code fences, sometimes with stray prose around it; the extractor
//! repairs what it can and fails loudly on the rest.

pub mod client;
pub mod error;
pub mod extract;

pub use client::ModelClient;
pub use error::ModelError;
pub use extract::{extract_json, extract_payload};
