//! Use-site references to types.

use super::{Attributes, TypeDef};
use crate::{Rc, String, Vec};

/// Variant tag of a [`TypeRef`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RefKind {
    Void,
    Primitive,
    TypeParam,
    Class,
    Wildcard,
}

/// A reference to a type at a use site.
///
/// The set of variants is closed. Code that behaves differently per variant
/// matches exhaustively, so a new variant is a compile error at every
/// dispatch site rather than a silent fallthrough.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// `void`
    Void(VoidRef),

    /// A primitive such as `int`, possibly as an array.
    Primitive(PrimitiveRef),

    /// A reference to a type parameter such as `T`.
    TypeParam(TypeParamRef),

    /// A reference to a declared class or interface, with type arguments.
    Class(ClassRef),

    /// `?`, optionally bounded.
    Wildcard(WildcardRef),
}

impl TypeRef {
    pub fn kind(&self) -> RefKind {
        match self {
            TypeRef::Void(_) => RefKind::Void,
            TypeRef::Primitive(_) => RefKind::Primitive,
            TypeRef::TypeParam(_) => RefKind::TypeParam,
            TypeRef::Class(_) => RefKind::Class,
            TypeRef::Wildcard(_) => RefKind::Wildcard,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            TypeRef::Void(r) => r.attributes(),
            TypeRef::Primitive(r) => r.attributes(),
            TypeRef::TypeParam(r) => r.attributes(),
            TypeRef::Class(r) => r.attributes(),
            TypeRef::Wildcard(r) => r.attributes(),
        }
    }

    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            TypeRef::Class(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, TypeRef::Class(_))
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Void(VoidRef::default())
    }
}

/// `void`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VoidRef {
    pub(crate) attributes: Attributes,
}

impl VoidRef {
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A primitive type such as `int` or `boolean[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PrimitiveRef {
    pub(crate) name: String,
    pub(crate) dimensions: u32,
    pub(crate) attributes: Attributes,
}

impl PrimitiveRef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A use of a declared type parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeParamRef {
    pub(crate) name: String,
    pub(crate) dimensions: u32,
    pub(crate) attributes: Attributes,
}

impl TypeParamRef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A reference to a declared type.
///
/// `name` is the name used at the reference site, which may differ from the
/// definition's simple name when the generator had to disambiguate it.
/// The definition is shared, never owned: many references may point at the
/// same declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef {
    pub(crate) name: String,
    pub(crate) definition: Rc<TypeDef>,
    pub(crate) arguments: Vec<TypeRef>,
    pub(crate) dimensions: u32,
    pub(crate) attributes: Attributes,
}

impl ClassRef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &Rc<TypeDef> {
        &self.definition
    }

    pub fn fully_qualified_name(&self) -> String {
        self.definition.fully_qualified_name()
    }

    pub fn arguments(&self) -> &[TypeRef] {
        &self.arguments
    }

    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// `?`, `? extends A & B`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WildcardRef {
    pub(crate) bounds: Vec<TypeRef>,
    pub(crate) attributes: Attributes,
}

impl WildcardRef {
    pub fn bounds(&self) -> &[TypeRef] {
        &self.bounds
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl From<VoidRef> for TypeRef {
    fn from(r: VoidRef) -> Self {
        TypeRef::Void(r)
    }
}

impl From<PrimitiveRef> for TypeRef {
    fn from(r: PrimitiveRef) -> Self {
        TypeRef::Primitive(r)
    }
}

impl From<TypeParamRef> for TypeRef {
    fn from(r: TypeParamRef) -> Self {
        TypeRef::TypeParam(r)
    }
}

impl From<ClassRef> for TypeRef {
    fn from(r: ClassRef) -> Self {
        TypeRef::Class(r)
    }
}

impl From<WildcardRef> for TypeRef {
    fn from(r: WildcardRef) -> Self {
        TypeRef::Wildcard(r)
    }
}
