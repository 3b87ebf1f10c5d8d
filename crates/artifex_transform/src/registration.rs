//! Transform registrations declared by build logic.

use crate::transform::ArtifactTransform;
use artifex_attributes::AttributeSet;
use std::sync::Arc;

/// A declared rule converting one attribute profile into another.
///
/// Immutable once registered: `from` states what a variant must offer for
/// the transform to apply, `to` states what the transform produces, and the
/// transform itself does the file-level work. The chain resolver composes
/// registrations whose `to`/`from` profiles line up.
#[derive(Clone)]
pub struct TransformRegistration {
    from: AttributeSet,
    to: AttributeSet,
    transform: Arc<dyn ArtifactTransform>,
}

impl TransformRegistration {
    /// Creates a registration.
    pub fn new(
        from: AttributeSet,
        to: AttributeSet,
        transform: Arc<dyn ArtifactTransform>,
    ) -> Self {
        Self {
            from,
            to,
            transform,
        }
    }

    /// The attribute requirements a source variant must satisfy.
    pub fn from(&self) -> &AttributeSet {
        &self.from
    }

    /// The attributes this transform produces.
    pub fn to(&self) -> &AttributeSet {
        &self.to
    }

    /// The file-level transformation, shared across chains that embed it.
    pub fn transform(&self) -> &Arc<dyn ArtifactTransform> {
        &self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::FnTransform;
    use artifex_attributes::AttributesFactory;
    use std::path::Path;

    #[test]
    fn accessors_return_registered_parts() {
        let factory = AttributesFactory::new();
        let from = factory.of([("artifactType", "jar")]);
        let to = factory.of([("artifactType", "classes")]);
        let reg = TransformRegistration::new(
            from.clone(),
            to.clone(),
            Arc::new(FnTransform::new(|p: &Path| Ok(vec![p.to_path_buf()]))),
        );

        assert_eq!(reg.from(), &from);
        assert_eq!(reg.to(), &to);
        let out = reg.transform().transform(Path::new("a.jar")).unwrap();
        assert_eq!(out, vec![std::path::PathBuf::from("a.jar")]);
    }

    #[test]
    fn clone_shares_transform() {
        let factory = AttributesFactory::new();
        let reg = TransformRegistration::new(
            factory.empty(),
            factory.of([("unpacked", true)]),
            Arc::new(FnTransform::new(|_: &Path| Ok(Vec::new()))),
        );
        let copy = reg.clone();
        assert!(Arc::ptr_eq(reg.transform(), copy.transform()));
    }
}
