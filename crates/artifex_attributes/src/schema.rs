//! The attribute compatibility boundary.
//!
//! How two values of an attribute are judged compatible belongs to the
//! embedding tool's schema, not to the matching cache. The cache consumes the
//! schema through [`AttributeSchema`] and memoizes its answers, which is only
//! sound if implementations are deterministic and side-effect-free.

use crate::set::AttributeSet;
use serde::{Deserialize, Serialize};

/// Which side of a compatibility check is permitted to carry attributes
/// absent from the other side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ToleranceMode {
    /// Every requested attribute must be satisfied by the actual set; extra
    /// attributes present only on the actual (producer) side are ignored.
    IgnoreExtraOnProducer,
    /// Every actual attribute must be satisfied by the requested set; extra
    /// attributes present only on the requested (consumer) side are ignored.
    IgnoreExtraOnConsumer,
}

/// Judges attribute compatibility for a resolution session.
///
/// Implementations must be deterministic and side-effect-free: the matching
/// cache stores every answer and replays it for the rest of the session.
pub trait AttributeSchema: Send + Sync {
    /// Returns `true` if `actual` satisfies `requested` under the given
    /// tolerance mode.
    fn is_matching(
        &self,
        mode: ToleranceMode,
        actual: &AttributeSet,
        requested: &AttributeSet,
    ) -> bool;

    /// Batch form used by candidate selection: returns the subset of
    /// `candidates` whose attributes satisfy `requested` under
    /// [`ToleranceMode::IgnoreExtraOnProducer`], preserving candidate order.
    fn matches(&self, candidates: &[AttributeSet], requested: &AttributeSet) -> Vec<AttributeSet>;
}

/// Exact-equality schema: an attribute is satisfied only by an equal value
/// under the same name on the other side.
///
/// Embedding tools with richer compatibility rules (value coercion, ordered
/// preference, defaults) supply their own [`AttributeSchema`]; this one
/// covers exact-match pipelines and is what the test suites run against.
#[derive(Default)]
pub struct ValueEqualitySchema;

impl ValueEqualitySchema {
    /// Creates the schema.
    pub fn new() -> Self {
        Self
    }

    /// True if every attribute of `required` is present with an equal value
    /// in `available`.
    fn satisfied_by(required: &AttributeSet, available: &AttributeSet) -> bool {
        required
            .iter()
            .all(|(name, value)| available.get(name) == Some(value))
    }
}

impl AttributeSchema for ValueEqualitySchema {
    fn is_matching(
        &self,
        mode: ToleranceMode,
        actual: &AttributeSet,
        requested: &AttributeSet,
    ) -> bool {
        match mode {
            ToleranceMode::IgnoreExtraOnProducer => Self::satisfied_by(requested, actual),
            ToleranceMode::IgnoreExtraOnConsumer => Self::satisfied_by(actual, requested),
        }
    }

    fn matches(&self, candidates: &[AttributeSet], requested: &AttributeSet) -> Vec<AttributeSet> {
        candidates
            .iter()
            .filter(|candidate| {
                self.is_matching(ToleranceMode::IgnoreExtraOnProducer, candidate, requested)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::AttributesFactory;

    #[test]
    fn producer_mode_ignores_extra_actual() {
        let factory = AttributesFactory::new();
        let schema = ValueEqualitySchema::new();
        let actual = factory.of([("artifactType", "jar"), ("status", "release")]);
        let requested = factory.of([("artifactType", "jar")]);

        assert!(schema.is_matching(ToleranceMode::IgnoreExtraOnProducer, &actual, &requested));
        assert!(!schema.is_matching(ToleranceMode::IgnoreExtraOnConsumer, &actual, &requested));
    }

    #[test]
    fn consumer_mode_ignores_extra_requested() {
        let factory = AttributesFactory::new();
        let schema = ValueEqualitySchema::new();
        let actual = factory.of([("artifactType", "jar")]);
        let requested = factory.of([("artifactType", "jar"), ("status", "release")]);

        assert!(schema.is_matching(ToleranceMode::IgnoreExtraOnConsumer, &actual, &requested));
        assert!(!schema.is_matching(ToleranceMode::IgnoreExtraOnProducer, &actual, &requested));
    }

    #[test]
    fn value_mismatch_fails_both_modes() {
        let factory = AttributesFactory::new();
        let schema = ValueEqualitySchema::new();
        let actual = factory.of([("artifactType", "jar")]);
        let requested = factory.of([("artifactType", "classes")]);

        assert!(!schema.is_matching(ToleranceMode::IgnoreExtraOnProducer, &actual, &requested));
        assert!(!schema.is_matching(ToleranceMode::IgnoreExtraOnConsumer, &actual, &requested));
    }

    #[test]
    fn batch_matches_preserves_order() {
        let factory = AttributesFactory::new();
        let schema = ValueEqualitySchema::new();
        let requested = factory.of([("usage", "api")]);

        let hit_a = factory.of([("usage", "api"), ("format", "jar")]);
        let miss = factory.of([("usage", "runtime")]);
        let hit_b = factory.of([("usage", "api")]);

        let matched = schema.matches(
            &[hit_a.clone(), miss.clone(), hit_b.clone()],
            &requested,
        );
        assert_eq!(matched, vec![hit_a, hit_b]);
    }

    #[test]
    fn empty_requested_matches_everything_in_producer_mode() {
        let factory = AttributesFactory::new();
        let schema = ValueEqualitySchema::new();
        let actual = factory.of([("usage", "api")]);

        assert!(schema.is_matching(
            ToleranceMode::IgnoreExtraOnProducer,
            &actual,
            &factory.empty()
        ));
    }
}
