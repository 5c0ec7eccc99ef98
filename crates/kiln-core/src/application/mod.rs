//! Application layer for Kiln.
//!
//! This layer contains:
//! - **Services**: the generation pipeline
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactDescriptor, ArtifactPlan, Capabilities, DestinationProvider, GenerationPipeline,
    GenerationRequest, PipelineState,
};

pub use ports::{Filesystem, ProjectContext, StubStore, TemplateRenderer};

pub use error::{ApplicationError, RenderError};
