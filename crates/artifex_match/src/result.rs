//! Accumulated matches from transform-chain resolution.

use artifex_attributes::AttributeSet;
use artifex_transform::ArtifactTransform;
use std::fmt;
use std::sync::Arc;

/// One way to produce a requested variant from an actual one.
///
/// `depth` counts the composed transform steps: 1 is a direct transform,
/// N a chain of N registrations applied in sequence.
#[derive(Clone)]
pub struct ConsumerVariant {
    /// The attributes the produced variant will carry: the source variant's
    /// attributes with each chain step's produced attributes layered on top.
    pub attributes: AttributeSet,
    /// The composed file transformation realizing this variant.
    pub transform: Arc<dyn ArtifactTransform>,
    /// Number of transform steps in the chain.
    pub depth: usize,
}

impl fmt::Debug for ConsumerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumerVariant")
            .field("attributes", &self.attributes)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// Accumulator of [`ConsumerVariant`] matches for one resolution query.
///
/// Resolver output is cached as one of these per `(actual, requested)` pair;
/// a cached result is replayed into a caller's accumulator with
/// [`apply_to`](Self::apply_to). An empty result is itself a cacheable
/// answer ("no way to produce this variant").
#[derive(Clone, Default)]
pub struct ConsumerVariantMatchResult {
    matches: Vec<ConsumerVariant>,
}

impl ConsumerVariantMatchResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a match.
    pub fn matched(
        &mut self,
        attributes: AttributeSet,
        transform: Arc<dyn ArtifactTransform>,
        depth: usize,
    ) {
        self.matches.push(ConsumerVariant {
            attributes,
            transform,
            depth,
        });
    }

    /// Returns `true` if at least one match has been recorded.
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// The recorded matches, in discovery order.
    pub fn matches(&self) -> &[ConsumerVariant] {
        &self.matches
    }

    /// Appends all of this result's matches to `other`.
    pub fn apply_to(&self, other: &mut ConsumerVariantMatchResult) {
        other.matches.extend(self.matches.iter().cloned());
    }
}
