//! Type declarations.

use super::{Attributes, ClassRef, Modifiers, TypeRef};
use crate::{Rc, String, Vec, format};

/// What kind of declaration a [`TypeDef`] is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

/// The declaration of a named type: a class, interface, enum or annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeDef {
    pub(crate) kind: Kind,
    pub(crate) modifiers: Modifiers,
    pub(crate) package_name: String,
    pub(crate) name: String,
    pub(crate) comments: Vec<String>,
    pub(crate) parameters: Vec<TypeParamDef>,
    pub(crate) extends_list: Vec<ClassRef>,
    pub(crate) implements_list: Vec<ClassRef>,
    pub(crate) properties: Vec<Property>,
    pub(crate) attributes: Attributes,
}

impl TypeDef {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_interface(&self) -> bool {
        self.kind == Kind::Interface
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `package_name.name`, or just `name` for the unnamed package.
    pub fn fully_qualified_name(&self) -> String {
        qualify(&self.package_name, &self.name)
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn parameters(&self) -> &[TypeParamDef] {
        &self.parameters
    }

    /// Superclasses.
    pub fn extends_list(&self) -> &[ClassRef] {
        &self.extends_list
    }

    /// Implemented interfaces.
    pub fn implements_list(&self) -> &[ClassRef] {
        &self.implements_list
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Reference a copy of this declaration by its simple name.
    ///
    /// The reference owns a fresh copy. For a declaration that is already
    /// shared, such as one returned by a repository, use
    /// [`TypeDef::shared_reference`].
    pub fn to_reference(&self, arguments: impl IntoIterator<Item = TypeRef>) -> ClassRef {
        Rc::new(self.clone()).shared_reference(arguments)
    }

    /// Reference this declaration by its simple name, sharing it.
    pub fn shared_reference(
        self: &Rc<Self>,
        arguments: impl IntoIterator<Item = TypeRef>,
    ) -> ClassRef {
        ClassRef {
            name: self.name.clone(),
            definition: Rc::clone(self),
            arguments: arguments.into_iter().collect(),
            dimensions: 0,
            attributes: Attributes::new(),
        }
    }

    /// Placeholder definition for a reference whose declaration is unknown.
    ///
    /// A dotted name is split into package and simple name.
    pub(crate) fn unresolved(qualified: &str) -> TypeDef {
        let (package_name, name) = match qualified.rfind('.') {
            Some(dot) => (&qualified[..dot], &qualified[dot + 1..]),
            None => ("", qualified),
        };
        TypeDef {
            package_name: String::from(package_name),
            name: String::from(name),
            ..TypeDef::default()
        }
    }
}

pub(crate) fn qualify(package_name: &str, name: &str) -> String {
    if package_name.is_empty() {
        String::from(name)
    } else {
        format!("{}.{}", package_name, name)
    }
}

/// A generic parameter declaration: `T extends Bound1 & Bound2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeParamDef {
    pub(crate) name: String,
    pub(crate) bounds: Vec<ClassRef>,
    pub(crate) attributes: Attributes,
}

impl TypeParamDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[ClassRef] {
        &self.bounds
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A named, typed member used to generate accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Property {
    pub(crate) name: String,
    pub(crate) type_ref: TypeRef,
    pub(crate) modifiers: Modifiers,
    pub(crate) attributes: Attributes,
}

impl Property {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_qualified_name() {
        let def = TypeDef {
            package_name: "java.util".into(),
            name: "List".into(),
            ..TypeDef::default()
        };
        assert_eq!(def.fully_qualified_name(), "java.util.List");

        let def = TypeDef {
            name: "Local".into(),
            ..TypeDef::default()
        };
        assert_eq!(def.fully_qualified_name(), "Local");
    }

    #[test]
    fn test_shared_reference_shares_definition() {
        let def = Rc::new(TypeDef {
            package_name: "a".into(),
            name: "Shared".into(),
            ..TypeDef::default()
        });
        let first = def.shared_reference([]);
        let second = def.shared_reference([TypeRef::default()]);

        assert!(Rc::ptr_eq(first.definition(), &def));
        assert!(Rc::ptr_eq(first.definition(), second.definition()));
        assert_eq!(first.name(), "Shared");
        assert_eq!(second.arguments().len(), 1);
    }

    #[test]
    fn test_to_reference_copies_definition() {
        let def = Rc::new(TypeDef {
            name: "Copied".into(),
            ..TypeDef::default()
        });
        let reference = def.to_reference([]);
        assert!(!Rc::ptr_eq(reference.definition(), &def));
        assert_eq!(**reference.definition(), *def);
    }

    #[test]
    fn test_unresolved_splits_package() {
        let def = TypeDef::unresolved("a.b.Foo");
        assert_eq!(def.package_name(), "a.b");
        assert_eq!(def.name(), "Foo");

        let def = TypeDef::unresolved("Foo");
        assert_eq!(def.package_name(), "");
        assert_eq!(def.fully_qualified_name(), "Foo");
    }
}
