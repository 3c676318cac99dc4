//! One builder type for every [`TypeRef`] variant.

use super::{
    Builder, Children, ClassRefBuilder, Editable, PrimitiveRefBuilder, TypeParamRefBuilder,
    VoidRefBuilder, WildcardRefBuilder,
};
use crate::ir::{ClassRef, PrimitiveRef, RefKind, TypeParamRef, TypeRef, VoidRef, WildcardRef};

/// Builder for any [`TypeRef`], tagged with the variant it builds.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRefBuilder {
    Void(VoidRefBuilder),
    Primitive(PrimitiveRefBuilder),
    TypeParam(TypeParamRefBuilder),
    Class(ClassRefBuilder),
    Wildcard(WildcardRefBuilder),
}

impl TypeRefBuilder {
    pub fn kind(&self) -> RefKind {
        match self {
            TypeRefBuilder::Void(_) => RefKind::Void,
            TypeRefBuilder::Primitive(_) => RefKind::Primitive,
            TypeRefBuilder::TypeParam(_) => RefKind::TypeParam,
            TypeRefBuilder::Class(_) => RefKind::Class,
            TypeRefBuilder::Wildcard(_) => RefKind::Wildcard,
        }
    }
}

impl Default for TypeRefBuilder {
    fn default() -> Self {
        TypeRefBuilder::Void(VoidRefBuilder::default())
    }
}

impl Builder for TypeRefBuilder {
    type Target = TypeRef;

    fn build(&self) -> TypeRef {
        match self {
            TypeRefBuilder::Void(b) => TypeRef::Void(b.build()),
            TypeRefBuilder::Primitive(b) => TypeRef::Primitive(b.build()),
            TypeRefBuilder::TypeParam(b) => TypeRef::TypeParam(b.build()),
            TypeRefBuilder::Class(b) => TypeRef::Class(b.build()),
            TypeRefBuilder::Wildcard(b) => TypeRef::Wildcard(b.build()),
        }
    }
}

impl Editable for TypeRef {
    type Builder = TypeRefBuilder;

    fn edit(&self) -> TypeRefBuilder {
        match self {
            TypeRef::Void(r) => TypeRefBuilder::Void(r.edit()),
            TypeRef::Primitive(r) => TypeRefBuilder::Primitive(r.edit()),
            TypeRef::TypeParam(r) => TypeRefBuilder::TypeParam(r.edit()),
            TypeRef::Class(r) => TypeRefBuilder::Class(r.edit()),
            TypeRef::Wildcard(r) => TypeRefBuilder::Wildcard(r.edit()),
        }
    }
}

/// A concrete [`TypeRef`] variant.
pub trait RefVariant: Editable + Clone + Into<TypeRef> {
    const KIND: RefKind;

    /// Tag a builder of this variant.
    fn wrap(builder: Self::Builder) -> TypeRefBuilder;
}

impl RefVariant for VoidRef {
    const KIND: RefKind = RefKind::Void;

    fn wrap(builder: VoidRefBuilder) -> TypeRefBuilder {
        TypeRefBuilder::Void(builder)
    }
}

impl RefVariant for PrimitiveRef {
    const KIND: RefKind = RefKind::Primitive;

    fn wrap(builder: PrimitiveRefBuilder) -> TypeRefBuilder {
        TypeRefBuilder::Primitive(builder)
    }
}

impl RefVariant for TypeParamRef {
    const KIND: RefKind = RefKind::TypeParam;

    fn wrap(builder: TypeParamRefBuilder) -> TypeRefBuilder {
        TypeRefBuilder::TypeParam(builder)
    }
}

impl RefVariant for ClassRef {
    const KIND: RefKind = RefKind::Class;

    fn wrap(builder: ClassRefBuilder) -> TypeRefBuilder {
        TypeRefBuilder::Class(builder)
    }
}

impl RefVariant for WildcardRef {
    const KIND: RefKind = RefKind::Wildcard;

    fn wrap(builder: WildcardRefBuilder) -> TypeRefBuilder {
        TypeRefBuilder::Wildcard(builder)
    }
}

impl Children<TypeRefBuilder> {
    /// Append a child builder for one specific variant.
    pub fn push_variant<R: RefVariant>(&mut self, value: &R) {
        self.push_builder(R::wrap(value.edit()));
    }

    /// Remove the first element equal to `value`.
    pub fn remove_variant<R: RefVariant>(&mut self, value: &R) -> bool {
        self.remove(&value.clone().into())
    }
}
