//! Application services - orchestrate use cases.

pub mod pipeline;

pub use pipeline::{
    ArtifactDescriptor, ArtifactPlan, Capabilities, DestinationProvider, GenerationPipeline,
    GenerationRequest, PipelineState,
};
