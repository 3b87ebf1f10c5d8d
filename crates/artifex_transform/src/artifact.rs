//! Resolved artifacts and their cache identities.

use artifex_attributes::{AttributeSet, HasAttributes};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// The stable identity of a resolved artifact within a session.
///
/// Wraps the artifact's coordinates string (e.g. `"org:lib:1.2:sources"`).
/// Cheap to clone and usable as a cache key: two resolutions of the same
/// artifact carry equal ids even when the surrounding structs differ.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactId(Arc<str>);

impl ArtifactId {
    /// Creates an id from a coordinates string.
    pub fn new(coordinates: impl Into<Arc<str>>) -> Self {
        Self(coordinates.into())
    }

    /// The coordinates string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtifactId({})", self.0)
    }
}

/// An artifact produced by dependency resolution: an identity, the file it
/// resolved to, and the attributes describing its variant.
///
/// Equality and hashing follow the [`ArtifactId`] alone, so transformed-output
/// caches keyed on a `ResolvedArtifact`'s identity converge across repeated
/// resolutions of the same artifact.
#[derive(Clone, Debug)]
pub struct ResolvedArtifact {
    id: ArtifactId,
    file: PathBuf,
    attributes: AttributeSet,
}

impl ResolvedArtifact {
    /// Creates a resolved artifact.
    pub fn new(id: ArtifactId, file: PathBuf, attributes: AttributeSet) -> Self {
        Self {
            id,
            file,
            attributes,
        }
    }

    /// The artifact's identity.
    pub fn id(&self) -> &ArtifactId {
        &self.id
    }

    /// The file this artifact resolved to.
    pub fn file(&self) -> &PathBuf {
        &self.file
    }

    /// Returns a copy with a different file and attributes, keeping a derived
    /// identity. Used when a transform rewrites an artifact's content.
    pub fn transformed_to(&self, file: PathBuf, attributes: AttributeSet) -> Self {
        let id = ArtifactId::new(format!("{}@{}", self.id, file.display()));
        Self {
            id,
            file,
            attributes,
        }
    }
}

impl HasAttributes for ResolvedArtifact {
    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

impl PartialEq for ResolvedArtifact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ResolvedArtifact {}

impl std::hash::Hash for ResolvedArtifact {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifex_attributes::AttributesFactory;

    #[test]
    fn identity_follows_id() {
        let factory = AttributesFactory::new();
        let a = ResolvedArtifact::new(
            ArtifactId::new("org:lib:1.0"),
            PathBuf::from("/cache/lib-1.0.jar"),
            factory.of([("artifactType", "jar")]),
        );
        let b = ResolvedArtifact::new(
            ArtifactId::new("org:lib:1.0"),
            PathBuf::from("/other/location/lib-1.0.jar"),
            factory.of([("artifactType", "jar"), ("status", "release")]),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_ids_differ() {
        let factory = AttributesFactory::new();
        let a = ResolvedArtifact::new(
            ArtifactId::new("org:lib:1.0"),
            PathBuf::from("lib.jar"),
            factory.empty(),
        );
        let b = ResolvedArtifact::new(
            ArtifactId::new("org:lib:2.0"),
            PathBuf::from("lib.jar"),
            factory.empty(),
        );
        assert_ne!(a, b);
    }

    #[test]
    fn transformed_to_derives_new_identity() {
        let factory = AttributesFactory::new();
        let original = ResolvedArtifact::new(
            ArtifactId::new("org:lib:1.0"),
            PathBuf::from("lib.jar"),
            factory.of([("artifactType", "jar")]),
        );
        let transformed = original.transformed_to(
            PathBuf::from("lib-classes"),
            factory.of([("artifactType", "classes")]),
        );
        assert_ne!(original, transformed);
        assert_eq!(transformed.file(), &PathBuf::from("lib-classes"));
    }

    #[test]
    fn id_display() {
        let id = ArtifactId::new("org:lib:1.0:sources");
        assert_eq!(id.to_string(), "org:lib:1.0:sources");
        assert_eq!(format!("{id:?}"), "ArtifactId(org:lib:1.0:sources)");
    }
}
