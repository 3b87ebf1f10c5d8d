//! Per-requested-set memoization tables.

use crate::result::ConsumerVariantMatchResult;
use artifex_attributes::AttributeSet;
use artifex_transform::{ArtifactId, ResolvedArtifact};
use dashmap::DashMap;
use std::path::PathBuf;

/// The cache bucket scoped to one requested attribute set.
///
/// Six independent tables, all keyed on the actual-side identity of the
/// query. Every table tolerates racing misses: two threads may compute the
/// same pure value and both insert, with the last write winning. No table
/// pair needs cross-table atomicity.
#[derive(Default)]
pub struct RequestScopedCache {
    /// Consumer-tolerance outcomes: may the requested side carry extras.
    pub ignore_extra_requested: DashMap<AttributeSet, bool>,

    /// Producer-tolerance outcomes: may the actual side carry extras.
    pub ignore_extra_actual: DashMap<AttributeSet, bool>,

    /// Memoized transform-chain resolver output per actual attribute set.
    pub transforms: DashMap<AttributeSet, ConsumerVariantMatchResult>,

    /// Batch selection outcomes, keyed by the exact ordered sequence of
    /// candidate attribute sets. Reordered candidates are a legitimate miss.
    pub matching: DashMap<Vec<AttributeSet>, Vec<AttributeSet>>,

    /// Physical transform results per input file.
    pub transformed_files: DashMap<PathBuf, Vec<PathBuf>>,

    /// Physical transform results per resolved artifact identity.
    pub transformed_artifacts: DashMap<ArtifactId, Vec<ResolvedArtifact>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifex_attributes::AttributesFactory;

    #[test]
    fn tables_start_empty() {
        let bucket = RequestScopedCache::default();
        assert!(bucket.ignore_extra_requested.is_empty());
        assert!(bucket.ignore_extra_actual.is_empty());
        assert!(bucket.transforms.is_empty());
        assert!(bucket.matching.is_empty());
        assert!(bucket.transformed_files.is_empty());
        assert!(bucket.transformed_artifacts.is_empty());
    }

    #[test]
    fn tolerance_tables_are_independent() {
        let factory = AttributesFactory::new();
        let actual = factory.of([("usage", "api")]);
        let bucket = RequestScopedCache::default();

        bucket.ignore_extra_actual.insert(actual.clone(), true);
        assert!(bucket.ignore_extra_requested.get(&actual).is_none());
        assert_eq!(
            bucket.ignore_extra_actual.get(&actual).map(|hit| *hit),
            Some(true)
        );
    }

    #[test]
    fn ordered_selection_key_distinguishes_order() {
        let factory = AttributesFactory::new();
        let a = factory.of([("usage", "api")]);
        let b = factory.of([("usage", "runtime")]);
        let bucket = RequestScopedCache::default();

        bucket.matching.insert(vec![a.clone(), b.clone()], vec![a.clone()]);
        assert!(bucket.matching.get(&vec![b, a]).is_none());
    }
}
