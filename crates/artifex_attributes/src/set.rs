//! Immutable attribute sets with value-based equality and hashing.

use crate::name::AttributeName;
use crate::value::AttributeValue;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable, unordered mapping from attribute name to value.
///
/// Attribute sets are the cache keys of the entire resolution session: every
/// memoization table is keyed on them, so equality and hashing are value-based
/// and the contents can never change after construction. Cloning is cheap —
/// the underlying map is shared behind an [`Arc`].
#[derive(Clone, Debug)]
pub struct AttributeSet {
    entries: Arc<BTreeMap<AttributeName, AttributeValue>>,
}

impl AttributeSet {
    /// Creates an attribute set from a finished entry map.
    pub(crate) fn from_entries(entries: BTreeMap<AttributeName, AttributeValue>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Returns `true` if this set contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes in this set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value of the given attribute, if present.
    pub fn get(&self, name: AttributeName) -> Option<&AttributeValue> {
        self.entries.get(&name)
    }

    /// Returns `true` if this set carries the given attribute.
    pub fn contains(&self, name: AttributeName) -> bool {
        self.entries.contains_key(&name)
    }

    /// Iterates over `(name, value)` pairs in stable (interner-index) order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, &AttributeValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// Iterates over the attribute names in this set.
    pub fn names(&self) -> impl Iterator<Item = AttributeName> + '_ {
        self.entries.keys().copied()
    }
}

impl PartialEq for AttributeSet {
    fn eq(&self, other: &Self) -> bool {
        // Sets minted from the same factory call share the Arc.
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl Eq for AttributeSet {}

impl std::hash::Hash for AttributeSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

/// Accumulates attributes before freezing them into an [`AttributeSet`].
///
/// Inserting the same name twice keeps the later value.
#[derive(Default)]
pub struct AttributeSetBuilder {
    entries: BTreeMap<AttributeName, AttributeValue>,
}

impl AttributeSetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing any earlier value under the same name.
    pub fn attribute(mut self, name: AttributeName, value: impl Into<AttributeValue>) -> Self {
        self.entries.insert(name, value.into());
        self
    }

    /// Freezes the accumulated entries into an immutable [`AttributeSet`].
    pub fn build(self) -> AttributeSet {
        AttributeSet::from_entries(self.entries)
    }
}

/// The polymorphism seam of variant resolution: anything that carries an
/// attribute set can be a selection candidate.
///
/// The matching engine never inspects a candidate beyond its attributes, so
/// resolved artifacts, resolved variants, and test doubles all flow through
/// the same code paths.
pub trait HasAttributes {
    /// Returns the attribute set describing this entity.
    fn attributes(&self) -> &AttributeSet;
}

impl HasAttributes for AttributeSet {
    fn attributes(&self) -> &AttributeSet {
        self
    }
}
