//! Kiln Core - naming and destination pipeline for generated artifacts.
//!
//! Given a resource name and an artifact kind, kiln derives the
//! convention-correct filename, finds the directory the host project uses for
//! that kind, and hands both to a stub renderer.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             kiln-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          GenerationPipeline             │
//! │  validate → transform → resolve → render│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ ProjectContext, TemplateRenderer, ...   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kiln-adapters (Infrastructure)      │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure): ArtifactKind, ArtifactLabel,
//!   naming::transform, DestinationResolver
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kiln_core::domain::{ArtifactKind, ArtifactLabel, transform};
//!
//! let label = ArtifactLabel::new("users", ArtifactKind::Controller).unwrap();
//! let name = transform(&label, &ArtifactKind::Controller.conventions()).unwrap();
//! assert_eq!(name.filename, "UserController.ts");
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactDescriptor, ArtifactPlan, Capabilities, DestinationProvider, GenerationPipeline,
        GenerationRequest,
        ports::{Filesystem, ProjectContext, StubStore, TemplateRenderer},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactLabel, CasePattern, Form, StubRef, TemplateData,
        TransformationConfig,
    };
    pub use crate::error::{KilnError, KilnResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
