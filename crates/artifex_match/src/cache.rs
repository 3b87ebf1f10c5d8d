//! The variant matching cache orchestrator.
//!
//! One `VariantMatchingCache` lives per resolution session. It routes every
//! public operation through the bucket for the requested attribute set, so
//! all memoization is scoped by requested-set identity and buckets for
//! distinct requests never interfere.

use crate::bucket::RequestScopedCache;
use crate::result::ConsumerVariantMatchResult;
use artifex_attributes::{
    AttributeSchema, AttributeSet, AttributesFactory, HasAttributes, ToleranceMode,
};
use artifex_transform::{
    ArtifactTransform, ChainedTransform, ResolvedArtifact, TransformRegistry,
};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Session-scoped cache for variant selection and transform-chain resolution.
///
/// All lookups are memoized per requested attribute set. Misses recompute
/// through the schema, registry, and factory collaborators; because those are
/// deterministic, racing threads that recompute the same key produce equal
/// values and the duplicate write is harmless.
///
/// The cache holds no locks across collaborator calls or recursive
/// resolution, so worker threads never block each other beyond individual
/// map accesses.
pub struct VariantMatchingCache {
    registry: Arc<dyn TransformRegistry>,
    schema: Arc<dyn AttributeSchema>,
    factory: AttributesFactory,
    buckets: DashMap<AttributeSet, Arc<RequestScopedCache>>,
}

impl VariantMatchingCache {
    /// Creates a cache over the session's registry, schema, and factory.
    ///
    /// The registry and schema must not change for the lifetime of this
    /// cache; every memoized entry assumes their answers are stable.
    pub fn new(
        registry: Arc<dyn TransformRegistry>,
        schema: Arc<dyn AttributeSchema>,
        factory: AttributesFactory,
    ) -> Self {
        Self {
            registry,
            schema,
            factory,
            buckets: DashMap::new(),
        }
    }

    /// Selects the candidates whose attributes satisfy `requested`,
    /// preserving candidate order and identity.
    ///
    /// An empty request with exactly one candidate short-circuits to that
    /// candidate without consulting the schema. Otherwise the batch match is
    /// memoized under the exact ordered sequence of candidate attribute sets.
    pub fn select_matches<'a, T: HasAttributes>(
        &self,
        candidates: &'a [T],
        requested: &AttributeSet,
    ) -> Vec<&'a T> {
        if requested.is_empty() && candidates.len() == 1 {
            return vec![&candidates[0]];
        }

        let candidate_attributes: Vec<AttributeSet> = candidates
            .iter()
            .map(|candidate| candidate.attributes().clone())
            .collect();

        let bucket = self.bucket(requested);
        let cached = bucket
            .matching
            .get(&candidate_attributes)
            .map(|hit| hit.value().clone());
        let matching = match cached {
            Some(matching) => matching,
            None => {
                let matching = self.schema.matches(&candidate_attributes, requested);
                bucket
                    .matching
                    .insert(candidate_attributes, matching.clone());
                matching
            }
        };

        if matching.is_empty() {
            return Vec::new();
        }
        candidates
            .iter()
            .filter(|candidate| matching.contains(candidate.attributes()))
            .collect()
    }

    /// Collects every way to produce a variant satisfying `requested` from a
    /// variant carrying `actual`, appending the matches to `result`.
    ///
    /// The resolver output for each `(actual, requested)` pair is computed
    /// once per session and replayed from the bucket thereafter. An empty
    /// outcome ("no chain exists") is cached the same way.
    pub fn collect_consumer_variants(
        &self,
        actual: &AttributeSet,
        requested: &AttributeSet,
        result: &mut ConsumerVariantMatchResult,
    ) {
        let bucket = self.bucket(requested);
        let cached = bucket.transforms.get(actual).map(|hit| hit.value().clone());
        let resolved = match cached {
            Some(resolved) => resolved,
            None => {
                let mut computed = ConsumerVariantMatchResult::new();
                self.find_producers_for(actual, requested, &mut computed);
                bucket.transforms.insert(actual.clone(), computed.clone());
                computed
            }
        };
        resolved.apply_to(result);
    }

    /// Searches registered transforms for producers of `requested`.
    ///
    /// Direct transforms are preferred: if any registration applies to
    /// `actual` in one step, composed chains are not explored at all. The
    /// recursive case re-enters [`collect_consumer_variants`] with the
    /// candidate's source requirements as the new requested set, so
    /// sub-searches are memoized in their own buckets.
    ///
    /// Registrations forming a cycle with no terminating direct match will
    /// recurse until the stack is exhausted; the registry is trusted to be
    /// well-formed.
    fn find_producers_for(
        &self,
        actual: &AttributeSet,
        requested: &AttributeSet,
        result: &mut ConsumerVariantMatchResult,
    ) {
        // Prefer direct transformation over indirect transformation.
        let mut candidates = Vec::new();
        for registration in self.registry.registrations() {
            if self.matches_attributes(
                registration.to(),
                requested,
                ToleranceMode::IgnoreExtraOnConsumer,
            ) {
                if self.matches_attributes(
                    actual,
                    registration.from(),
                    ToleranceMode::IgnoreExtraOnProducer,
                ) {
                    let attributes = self.factory.concat(actual, registration.to());
                    result.matched(attributes, registration.transform().clone(), 1);
                }
                // Still a viable terminal step for a composed chain.
                candidates.push(registration);
            }
        }
        if result.has_matches() {
            return;
        }

        for candidate in candidates {
            let mut input_variants = ConsumerVariantMatchResult::new();
            self.collect_consumer_variants(actual, candidate.from(), &mut input_variants);
            for input_variant in input_variants.matches() {
                let attributes = self.factory.concat(&input_variant.attributes, candidate.to());
                let transform: Arc<dyn ArtifactTransform> = Arc::new(ChainedTransform::new(
                    input_variant.transform.clone(),
                    candidate.transform().clone(),
                ));
                result.matched(attributes, transform, input_variant.depth + 1);
            }
        }
    }

    /// Returns whether `actual` satisfies `requested` under the given
    /// tolerance mode, memoized per mode in the bucket for `requested`.
    ///
    /// The empty side of each mode short-circuits to `true` without touching
    /// the bucket or the schema.
    pub fn matches_attributes(
        &self,
        actual: &AttributeSet,
        requested: &AttributeSet,
        mode: ToleranceMode,
    ) -> bool {
        match mode {
            ToleranceMode::IgnoreExtraOnProducer => {
                if requested.is_empty() {
                    return true;
                }
            }
            ToleranceMode::IgnoreExtraOnConsumer => {
                if actual.is_empty() {
                    return true;
                }
            }
        }

        let bucket = self.bucket(requested);
        let table = match mode {
            ToleranceMode::IgnoreExtraOnProducer => &bucket.ignore_extra_actual,
            ToleranceMode::IgnoreExtraOnConsumer => &bucket.ignore_extra_requested,
        };

        let cached = table.get(actual).map(|hit| *hit);
        match cached {
            Some(matching) => matching,
            None => {
                let matching = self.schema.is_matching(mode, actual, requested);
                table.insert(actual.clone(), matching);
                matching
            }
        }
    }

    /// Looks up previously computed transform outputs for an artifact under
    /// `requested`. Returns `None` on a miss; the caller computes and stores.
    pub fn get_transformed_artifacts(
        &self,
        actual: &ResolvedArtifact,
        requested: &AttributeSet,
    ) -> Option<Vec<ResolvedArtifact>> {
        self.bucket(requested)
            .transformed_artifacts
            .get(actual.id())
            .map(|hit| hit.value().clone())
    }

    /// Stores transform outputs for an artifact under `requested`.
    pub fn put_transformed_artifacts(
        &self,
        actual: &ResolvedArtifact,
        requested: &AttributeSet,
        outputs: Vec<ResolvedArtifact>,
    ) {
        self.bucket(requested)
            .transformed_artifacts
            .insert(actual.id().clone(), outputs);
    }

    /// Looks up previously computed transform outputs for a file under
    /// `requested`. Returns `None` on a miss; the caller computes and stores.
    pub fn get_transformed_file(
        &self,
        file: &Path,
        requested: &AttributeSet,
    ) -> Option<Vec<PathBuf>> {
        self.bucket(requested)
            .transformed_files
            .get(file)
            .map(|hit| hit.value().clone())
    }

    /// Stores transform outputs for a file under `requested`.
    pub fn put_transformed_file(
        &self,
        file: &Path,
        requested: &AttributeSet,
        outputs: Vec<PathBuf>,
    ) {
        self.bucket(requested)
            .transformed_files
            .insert(file.to_path_buf(), outputs);
    }

    /// Fetches or lazily creates the bucket for a requested attribute set.
    ///
    /// Buckets are never removed during a session. Racing creators converge
    /// on one instance through the map's per-key insertion.
    fn bucket(&self, requested: &AttributeSet) -> Arc<RequestScopedCache> {
        let existing = self.buckets.get(requested).map(|hit| hit.value().clone());
        match existing {
            Some(bucket) => bucket,
            None => self
                .buckets
                .entry(requested.clone())
                .or_default()
                .clone(),
        }
    }
}
