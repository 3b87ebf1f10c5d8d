//! The session registry of transform registrations.

use crate::registration::TransformRegistration;
use crate::transform::ArtifactTransform;
use artifex_attributes::AttributeSet;
use std::sync::Arc;

/// Ordered, read-only access to the transforms registered for a session.
///
/// Registration order is significant: the chain resolver walks registrations
/// in order and earlier registrations win ties among direct matches. The
/// registry must not change while resolution is in progress — the matching
/// cache memoizes resolver output for the whole session.
pub trait TransformRegistry: Send + Sync {
    /// All registrations, in registration order.
    fn registrations(&self) -> &[TransformRegistration];
}

/// The standard registry: registrations are collected while build logic is
/// configured, then the registry is frozen behind an `Arc` for resolution.
#[derive(Default)]
pub struct InMemoryTransformRegistry {
    registrations: Vec<TransformRegistration>,
}

impl InMemoryTransformRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a registration.
    pub fn register(
        &mut self,
        from: AttributeSet,
        to: AttributeSet,
        transform: Arc<dyn ArtifactTransform>,
    ) {
        self.registrations
            .push(TransformRegistration::new(from, to, transform));
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl TransformRegistry for InMemoryTransformRegistry {
    fn registrations(&self) -> &[TransformRegistration] {
        &self.registrations
    }
}
