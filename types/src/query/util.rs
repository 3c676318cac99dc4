use crate::builder::{TypeParamDefBuilder, TypeParamRefBuilder};
use crate::ir::{ClassRef, TypeDef, TypeParamDef, TypeParamRef};
use crate::Vec;
use crate::prelude::*;

/// A reference to the type parameter `letter`.
pub fn new_type_param_ref(letter: &str) -> TypeParamRef {
    TypeParamRefBuilder::new().with_name(letter).build()
}

/// An unbounded type parameter declaration `letter`.
pub fn new_type_param_def(letter: &str) -> TypeParamDef {
    TypeParamDefBuilder::new().with_name(letter).build()
}

/// `base` without its type parameters.
pub fn unwrap_generic(base: &TypeDef) -> TypeDef {
    base.edit().with_parameters(Vec::new()).build()
}

/// `base` with its type parameters replaced by `parameters`.
pub fn type_generic_of(
    base: &TypeDef,
    parameters: impl IntoIterator<Item = TypeParamDef>,
) -> TypeDef {
    base.edit().with_parameters(parameters).build()
}

/// `base` with `superclass` as its only superclass.
pub fn type_extends(base: &TypeDef, superclass: ClassRef) -> TypeDef {
    base.edit().with_extends_list([superclass]).build()
}

/// `base` with its interfaces replaced by `interfaces`.
pub fn type_implements(base: &TypeDef, interfaces: impl IntoIterator<Item = ClassRef>) -> TypeDef {
    base.edit().with_implements_list(interfaces).build()
}
