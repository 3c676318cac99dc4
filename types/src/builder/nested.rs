use super::Builder;
use core::fmt;

/// Access to the builder a fluent chain is currently editing.
///
/// Implemented by every builder for itself and by every [`Nested`] scope
/// for the child builder it holds, so the per-builder fluent traits work on
/// both.
pub trait Fluent<B>: Sized {
    fn staged(&mut self) -> &mut B;

    fn staged_ref(&self) -> &B;
}

/// A child builder scope opened from a parent chain.
///
/// The scope owns its parent. [`Nested::and`] builds the child, folds the
/// result into the parent collection it was opened from and hands the
/// parent back. Dropping a scope without closing it drops the parent too;
/// clone the parent first to keep working on it.
pub struct Nested<P, B: Builder> {
    parent: P,
    builder: B,
    fold: fn(P, B::Target) -> P,
}

impl<P, B: Builder> Nested<P, B> {
    pub fn new(parent: P, builder: B, fold: fn(P, B::Target) -> P) -> Self {
        Nested {
            parent,
            builder,
            fold,
        }
    }

    /// Close the scope and return to the parent.
    pub fn and(self) -> P {
        let value = self.builder.build();
        (self.fold)(self.parent, value)
    }

    /// Same as [`Nested::and`].
    pub fn end(self) -> P {
        self.and()
    }

    pub fn parent(&self) -> &P {
        &self.parent
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }
}

impl<P, B: Builder> Fluent<B> for Nested<P, B> {
    fn staged(&mut self) -> &mut B {
        &mut self.builder
    }

    fn staged_ref(&self) -> &B {
        &self.builder
    }
}

impl<P: fmt::Debug, B: Builder + fmt::Debug> fmt::Debug for Nested<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nested")
            .field("parent", &self.parent)
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{TypeDefBuilder, WildcardRefBuilder};
    use crate::prelude::*;
    use crate::{TypeParamRef, TypeRef};

    #[test]
    fn test_and_folds_into_parent() {
        let nested = WildcardRefBuilder::new()
            .add_new_type_param_ref_bound()
            .with_name("T")
            .and()
            .build();

        let direct = WildcardRefBuilder::new()
            .add_to_bounds([TypeRef::TypeParam(
                crate::TypeParamRefBuilder::new().with_name("T").build(),
            )])
            .build();

        assert_eq!(nested, direct);
    }

    #[test]
    fn test_end_is_and() {
        let a = TypeDefBuilder::new()
            .add_new_parameter()
            .with_name("E")
            .end()
            .build();
        let b = TypeDefBuilder::new()
            .add_new_parameter()
            .with_name("E")
            .and()
            .build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_named_closers_match_and() {
        let named = TypeDefBuilder::new()
            .add_new_property()
                .with_name("items")
                .with_new_class_ref_type()
                    .with_name("java.util.List")
                    .add_new_wildcard_ref_argument()
                        .add_new_class_ref_bound()
                            .with_name("p.Item")
                            .end_class_ref_bound()
                        .end_wildcard_ref_argument()
                    .end_class_ref_type()
                .end_property()
            .add_new_implements_list()
                .with_name("p.Entity")
                .end_implements_list()
            .build();
        let generic = TypeDefBuilder::new()
            .add_new_property()
                .with_name("items")
                .with_new_class_ref_type()
                    .with_name("java.util.List")
                    .add_new_wildcard_ref_argument()
                        .add_new_class_ref_bound()
                            .with_name("p.Item")
                            .and()
                        .and()
                    .and()
                .and()
            .add_new_implements_list()
                .with_name("p.Entity")
                .and()
            .build();

        assert_eq!(named, generic);
        assert_eq!(
            named.properties()[0].type_ref().to_string(),
            "java.util.List<? extends p.Item>"
        );
    }

    #[test]
    fn test_scope_exposes_staged_builder() {
        let scope = WildcardRefBuilder::new()
            .add_new_type_param_ref_bound()
            .with_name("U");
        assert_eq!(scope.builder().build(), TypeParamRef {
            name: "U".into(),
            ..TypeParamRef::default()
        });
        assert!(scope.parent().bounds().is_empty());
    }
}
