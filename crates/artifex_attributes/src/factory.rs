//! Session-scoped factory for attribute names and sets.

use crate::name::{AttributeName, NameInterner};
use crate::set::{AttributeSet, AttributeSetBuilder};
use crate::value::AttributeValue;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

/// Mints attribute names and sets for one resolution session.
///
/// The factory owns the session's [`NameInterner`], so every set built
/// through it shares one name space and compares names in O(1). It also
/// implements the deterministic `concat` combinator used when a transform's
/// produced attributes are layered over a variant's actual attributes.
///
/// Cloning a factory is cheap and yields a handle to the same interner.
#[derive(Clone)]
pub struct AttributesFactory {
    interner: Arc<NameInterner>,
    empty: AttributeSet,
}

impl AttributesFactory {
    /// Creates a factory with a fresh interner.
    pub fn new() -> Self {
        Self {
            interner: Arc::new(NameInterner::new()),
            empty: AttributeSet::from_entries(BTreeMap::new()),
        }
    }

    /// Interns an attribute name.
    pub fn name(&self, s: &str) -> AttributeName {
        self.interner.get_or_intern(s)
    }

    /// Resolves an interned name back to its string.
    ///
    /// # Panics
    ///
    /// Panics if the name was minted by a different factory.
    pub fn resolve(&self, name: AttributeName) -> &str {
        self.interner.resolve(name)
    }

    /// Returns the canonical empty attribute set.
    ///
    /// All callers share one instance, so empty-set comparisons hit the
    /// pointer-equality fast path.
    pub fn empty(&self) -> AttributeSet {
        self.empty.clone()
    }

    /// Starts building an attribute set.
    pub fn builder(&self) -> AttributeSetBuilder {
        AttributeSetBuilder::new()
    }

    /// Builds an attribute set from `(name, value)` pairs, interning the names.
    pub fn of<V>(&self, pairs: impl IntoIterator<Item = (&'static str, V)>) -> AttributeSet
    where
        V: Into<AttributeValue>,
    {
        let mut builder = self.builder();
        for (name, value) in pairs {
            builder = builder.attribute(self.name(name), value);
        }
        builder.build()
    }

    /// Combines two attribute sets, with `overlay` taking precedence on any
    /// name collision.
    ///
    /// Deterministic: the result depends only on the two inputs. When either
    /// side is empty the other side is returned unchanged (shared storage, no
    /// rebuild).
    pub fn concat(&self, base: &AttributeSet, overlay: &AttributeSet) -> AttributeSet {
        if overlay.is_empty() {
            return base.clone();
        }
        if base.is_empty() {
            return overlay.clone();
        }
        let mut entries = BTreeMap::new();
        for (name, value) in base.iter() {
            entries.insert(name, value.clone());
        }
        for (name, value) in overlay.iter() {
            entries.insert(name, value.clone());
        }
        AttributeSet::from_entries(entries)
    }

    /// Renders an attribute set with resolved names, for debug output and
    /// test failure messages.
    pub fn display(&self, set: &AttributeSet) -> String {
        let mut out = String::from("{");
        for (i, (name, value)) in set.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", self.resolve(name), value);
        }
        out.push('}');
        out
    }
}

impl Default for AttributesFactory {
    fn default() -> Self {
        Self::new()
    }
}
