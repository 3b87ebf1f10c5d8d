//! Artifact transforms, their registry, and resolved-artifact identities.
//!
//! A transform converts the files of one variant into the files of another,
//! changing the attribute profile along the way. This crate defines the
//! execution boundary ([`ArtifactTransform`]), the immutable registration
//! triple declared by build logic ([`TransformRegistration`]), the read-only
//! session registry ([`TransformRegistry`]), and the [`ResolvedArtifact`]
//! identity used to key transformed-output caches.

#![warn(missing_docs)]

pub mod artifact;
pub mod error;
pub mod registration;
pub mod registry;
pub mod transform;

pub use artifact::{ArtifactId, ResolvedArtifact};
pub use error::{TransformError, TransformResult};
pub use registration::TransformRegistration;
pub use registry::{InMemoryTransformRegistry, TransformRegistry};
pub use transform::{ArtifactTransform, ChainedTransform, FnTransform};
