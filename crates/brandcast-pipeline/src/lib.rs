//! Three-stage generation pipeline.
//!
//! Stage 1 (research) produces a brand profile and campaign recommendations
//! from two sequential model calls. Stage 2 (generation) fans a requested
//! quantity out across selected content kinds and platforms, one model call
//! per piece, strictly sequentially. Stage 3 (review) is the edit and export
//! surface over the committed session state.
//!
//! Every stage is all-or-nothing: a failed call discards the stage's partial
//! results and leaves the session untouched, while previously committed
//! stages survive.

pub mod error;
pub mod generate;
pub mod prompt;
pub mod research;

pub use error::PipelineError;
pub use generate::{generate_content, plan_assignments, Assignment, GenerationRequest};
pub use research::{analyze_website, ResearchInput};
