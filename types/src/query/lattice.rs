use crate::ir::{TypeDef, TypeParamDef, TypeRef};
use crate::ToString;
use alloc::borrow::Cow;

/// Whether `type_ref` is an instance of `target`.
///
/// Only class references can be. A class reference whose definition has the
/// same fully qualified name as `target` matches directly. Otherwise `equiv`
/// is asked about every implemented interface and then every superclass of
/// the definition, stopping at the first `true`.
///
/// `equiv` decides how deep the walk goes; typically it calls back into
/// `is_instance_of` with the same target. Nothing here guards against
/// cyclic declarations, so such a callback does not terminate on
/// `A implements B`, `B implements A`. Use
/// [`DefinitionRepository::is_subtype`](crate::DefinitionRepository::is_subtype)
/// for a walk that does.
pub fn is_instance_of<F>(type_ref: &TypeRef, target: &TypeDef, mut equiv: F) -> bool
where
    F: FnMut(&TypeRef) -> bool,
{
    match type_ref {
        TypeRef::Class(class) => {
            let definition = class.definition();
            if definition.fully_qualified_name() == target.fully_qualified_name() {
                return true;
            }
            let implements = definition.implements_list().iter();
            let extends = definition.extends_list().iter();
            implements
                .chain(extends)
                .any(|supertype| equiv(&TypeRef::Class(supertype.clone())))
        }
        TypeRef::Void(_) | TypeRef::Primitive(_) | TypeRef::TypeParam(_) | TypeRef::Wildcard(_) => {
            false
        }
    }
}

/// The parameter in `parameters` that `type_ref` names, if any.
///
/// Class, type parameter and primitive references are matched by name;
/// void and wildcard references by their rendered form.
pub fn parameter_definition<'a>(
    type_ref: &TypeRef,
    parameters: &'a [TypeParamDef],
) -> Option<&'a TypeParamDef> {
    let name: Cow<'_, str> = match type_ref {
        TypeRef::Class(r) => Cow::Borrowed(r.name()),
        TypeRef::TypeParam(r) => Cow::Borrowed(r.name()),
        TypeRef::Primitive(r) => Cow::Borrowed(r.name()),
        TypeRef::Void(_) | TypeRef::Wildcard(_) => Cow::Owned(type_ref.to_string()),
    };
    parameters.iter().find(|p| p.name() == name)
}
