//! Attribute sets, interned attribute names, and the attribute schema boundary.
//!
//! This crate provides the immutable [`AttributeSet`] used throughout variant
//! resolution, the session-scoped [`AttributesFactory`] that mints and combines
//! sets, and the [`AttributeSchema`] contract through which attribute
//! compatibility is judged under the two [`ToleranceMode`]s.

#![warn(missing_docs)]

pub mod factory;
pub mod name;
pub mod schema;
pub mod set;
pub mod value;

pub use factory::AttributesFactory;
pub use name::{AttributeName, NameInterner};
pub use schema::{AttributeSchema, ToleranceMode, ValueEqualitySchema};
pub use set::{AttributeSet, AttributeSetBuilder, HasAttributes};
pub use value::AttributeValue;
