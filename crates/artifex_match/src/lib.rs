//! Variant matching and transform-chain resolution, memoized per session.
//!
//! The [`VariantMatchingCache`] answers two questions for dependency
//! resolution: which candidate variants satisfy a requested attribute set,
//! and — when none do directly — which chain of registered transforms can
//! produce a satisfying variant from one that exists. Every expensive schema
//! check and every resolver run is memoized per requested-attribute identity,
//! so repeated queries over a long build session amortize to map lookups.

#![warn(missing_docs)]

mod bucket;
pub mod cache;
pub mod result;

pub use cache::VariantMatchingCache;
pub use result::{ConsumerVariant, ConsumerVariantMatchResult};
