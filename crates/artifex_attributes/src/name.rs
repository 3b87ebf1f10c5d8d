//! Interned attribute names for cheap cloning and O(1) equality comparison.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};

/// A unique identifier for an attribute name.
///
/// Attribute names are interned strings represented as a `u32` index into a
/// session-scoped interner. Names appear in every cache key the resolution
/// session computes, so O(1) equality, hashing, and cloning matter.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct AttributeName(u32);

impl AttributeName {
    /// Creates an `AttributeName` from a raw `u32` index.
    ///
    /// This is primarily intended for deserialization and testing. In normal
    /// use, names should be created through [`NameInterner::get_or_intern`].
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index of this name.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `AttributeName` wraps a `u32` which is always a valid `usize` on
// 32-bit and 64-bit platforms. `try_from_usize` rejects values that don't
// fit in `u32`.
unsafe impl lasso::Key for AttributeName {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(AttributeName)
    }
}

/// Thread-safe string interner backed by [`lasso::ThreadedRodeo`].
///
/// One interner lives for the duration of a resolution session, owned by the
/// [`AttributesFactory`](crate::AttributesFactory). All attribute names are
/// interned through it, so two sets that mention the same attribute always
/// carry the same `AttributeName` and compare in O(1).
pub struct NameInterner {
    rodeo: ThreadedRodeo<AttributeName>,
}

impl NameInterner {
    /// Creates a new empty interner.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Interns a string, returning its [`AttributeName`]. If the string was
    /// already interned, returns the existing name without allocating.
    pub fn get_or_intern(&self, s: &str) -> AttributeName {
        self.rodeo.get_or_intern(s)
    }

    /// Resolves an [`AttributeName`] back to its string value.
    ///
    /// # Panics
    ///
    /// Panics if the name was not created by this interner.
    pub fn resolve(&self, name: AttributeName) -> &str {
        self.rodeo.resolve(&name)
    }
}

impl Default for NameInterner {
    fn default() -> Self {
        Self::new()
    }
}
