//! Core domain layer for Kiln.
//!
//! Pure naming and lookup logic: no filesystem, no rendering, no globals.
//! Everything that touches the outside world goes through the ports in
//! `crate::application::ports`.
//!
//! ## Layout
//!
//! - **kind**: the closed artifact-kind registry and per-kind conventions
//! - **label**: a validated resource name bound to one kind
//! - **naming**: resource name → filename (form, casing, suffix, extension)
//! - **inflection**: English singular/plural rules used by `naming`
//! - **destination**: kind → directory lookup in a namespace table
//! - **template_data**: values substituted into stubs

pub mod destination;
pub mod error;
pub mod inflection;
pub mod kind;
pub mod label;
pub mod naming;
pub mod template_data;

pub use destination::{DestinationResolver, NamespaceMap};
pub use error::DomainError;
pub use kind::{ArtifactKind, all_kinds, is_valid_kind};
pub use label::ArtifactLabel;
pub use naming::{
    CasePattern, Form, TransformationConfig, TransformedName, apply_casing, apply_form,
    apply_suffix, build_filename, compose_exact, transform,
};
pub use template_data::{StubRef, TemplateData};
