//! The transform execution boundary and chain composition.

use crate::error::TransformResult;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Converts one input file into zero or more output files.
///
/// Implementations do the physical work (unzip, minify, recompile); the
/// matching engine only composes them and caches their declared attribute
/// effects. Implementations must be safe to call from multiple resolution
/// threads.
pub trait ArtifactTransform: Send + Sync {
    /// Transforms `input`, returning the produced files in order.
    fn transform(&self, input: &Path) -> TransformResult<Vec<PathBuf>>;
}

/// Adapts a closure into an [`ArtifactTransform`].
pub struct FnTransform<F> {
    f: F,
}

impl<F> FnTransform<F>
where
    F: Fn(&Path) -> TransformResult<Vec<PathBuf>> + Send + Sync,
{
    /// Wraps the given function.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ArtifactTransform for FnTransform<F>
where
    F: Fn(&Path) -> TransformResult<Vec<PathBuf>> + Send + Sync,
{
    fn transform(&self, input: &Path) -> TransformResult<Vec<PathBuf>> {
        (self.f)(input)
    }
}

/// Two transforms applied in sequence: `first`, then `then` on each
/// intermediate output.
///
/// Outputs are concatenated in order, so a chain's result is the in-order
/// flattening of the second step over the first step's fan-out. Errors from
/// either step propagate unchanged.
pub struct ChainedTransform {
    first: Arc<dyn ArtifactTransform>,
    then: Arc<dyn ArtifactTransform>,
}

impl ChainedTransform {
    /// Composes `first` followed by `then`.
    pub fn new(first: Arc<dyn ArtifactTransform>, then: Arc<dyn ArtifactTransform>) -> Self {
        Self { first, then }
    }
}

impl ArtifactTransform for ChainedTransform {
    fn transform(&self, input: &Path) -> TransformResult<Vec<PathBuf>> {
        let mut outputs = Vec::new();
        for intermediate in self.first.transform(input)? {
            outputs.extend(self.then.transform(&intermediate)?);
        }
        Ok(outputs)
    }
}
