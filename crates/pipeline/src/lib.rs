//! Child-generation orchestration.
//!
//! Composes parent resolution, photo selection, the external synthesis
//! call, artifact download, and the family/child registry into the single
//! `generate_child` operation exposed at the HTTP boundary.

pub mod artifact;
pub mod error;
pub mod generate;
pub mod parents;
pub mod photos;
pub mod registry;

pub use error::PipelineError;
pub use generate::{ChildSummary, GenerateChildRequest, GenerationPipeline, GenerationResult};
