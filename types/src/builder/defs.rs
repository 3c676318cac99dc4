//! Builders for declarations.

use super::{
    Builder, Children, ClassRefBuilder, Editable, Fluent, Nested, PrimitiveRefBuilder,
    TypeParamRefBuilder, TypeRefBuilder, VoidRefBuilder, WildcardRefBuilder,
};
use crate::ir::type_def::qualify;
use crate::ir::{
    AttributeValue, Attributes, ClassRef, Kind, Modifiers, PrimitiveRef, Property, TypeDef,
    TypeParamDef, TypeParamRef, TypeRef, VoidRef, WildcardRef,
};
use crate::{String, Vec};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeParamDefBuilder {
    pub(super) name: String,
    pub(super) bounds: Children<ClassRefBuilder>,
    pub(super) attributes: Attributes,
}

/// Builder for [`TypeDef`].
///
/// `build` drops any `extends_list` or `implements_list` entry naming the
/// declaration itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeDefBuilder {
    pub(super) kind: Kind,
    pub(super) modifiers: Modifiers,
    pub(super) package_name: String,
    pub(super) name: String,
    pub(super) comments: Vec<String>,
    pub(super) parameters: Children<TypeParamDefBuilder>,
    pub(super) extends_list: Children<ClassRefBuilder>,
    pub(super) implements_list: Children<ClassRefBuilder>,
    pub(super) properties: Children<PropertyBuilder>,
    pub(super) attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBuilder {
    pub(super) name: String,
    pub(super) type_ref: TypeRefBuilder,
    pub(super) modifiers: Modifiers,
    pub(super) attributes: Attributes,
}

impl TypeParamDefBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TypeDefBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn without_self_references(&self, list: Vec<ClassRef>, which: &str) -> Vec<ClassRef> {
        let own = qualify(&self.package_name, &self.name);
        list.into_iter()
            .filter(|supertype| {
                let is_self = supertype.fully_qualified_name() == own;
                if is_self {
                    debug!(name = %own, list = which, "Dropping self-inheritance");
                }
                !is_self
            })
            .collect()
    }
}

impl PropertyBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for TypeParamDefBuilder {
    type Target = TypeParamDef;

    fn build(&self) -> TypeParamDef {
        TypeParamDef {
            name: self.name.clone(),
            bounds: self.bounds.build(),
            attributes: self.attributes.clone(),
        }
    }
}

impl Builder for TypeDefBuilder {
    type Target = TypeDef;

    fn build(&self) -> TypeDef {
        TypeDef {
            kind: self.kind,
            modifiers: self.modifiers,
            package_name: self.package_name.clone(),
            name: self.name.clone(),
            comments: self.comments.clone(),
            parameters: self.parameters.build(),
            extends_list: self.without_self_references(self.extends_list.build(), "extends"),
            implements_list: self
                .without_self_references(self.implements_list.build(), "implements"),
            properties: self.properties.build(),
            attributes: self.attributes.clone(),
        }
    }
}

impl Builder for PropertyBuilder {
    type Target = Property;

    fn build(&self) -> Property {
        Property {
            name: self.name.clone(),
            type_ref: self.type_ref.build(),
            modifiers: self.modifiers,
            attributes: self.attributes.clone(),
        }
    }
}

impl Editable for TypeParamDef {
    type Builder = TypeParamDefBuilder;

    fn edit(&self) -> TypeParamDefBuilder {
        TypeParamDefBuilder {
            name: self.name.clone(),
            bounds: Children::from_values(&self.bounds),
            attributes: self.attributes.clone(),
        }
    }
}

impl Editable for TypeDef {
    type Builder = TypeDefBuilder;

    fn edit(&self) -> TypeDefBuilder {
        TypeDefBuilder {
            kind: self.kind,
            modifiers: self.modifiers,
            package_name: self.package_name.clone(),
            name: self.name.clone(),
            comments: self.comments.clone(),
            parameters: Children::from_values(&self.parameters),
            extends_list: Children::from_values(&self.extends_list),
            implements_list: Children::from_values(&self.implements_list),
            properties: Children::from_values(&self.properties),
            attributes: self.attributes.clone(),
        }
    }
}

impl Editable for Property {
    type Builder = PropertyBuilder;

    fn edit(&self) -> PropertyBuilder {
        PropertyBuilder {
            name: self.name.clone(),
            type_ref: self.type_ref.edit(),
            modifiers: self.modifiers,
            attributes: self.attributes.clone(),
        }
    }
}

impl_fluent!(TypeParamDefBuilder, TypeDefBuilder, PropertyBuilder);

pub trait TypeParamDefFluent: Fluent<TypeParamDefBuilder> {
    fn with_name(mut self, name: impl Into<String>) -> Self {
        self.staged().name = name.into();
        self
    }

    fn name(&self) -> &str {
        &self.staged_ref().name
    }

    child_list_methods! {
        field: bounds,
        item: ClassRef,
        builder: ClassRefBuilder,
        with: with_bounds,
        add: add_to_bounds,
        remove: remove_from_bounds,
        new: add_new_bound,
        new_like: add_new_bound_like,
    }

    attribute_methods!();
}

impl<T: Fluent<TypeParamDefBuilder>> TypeParamDefFluent for T {}

end_aliases! {
    TypeParamDefFluent:
    ClassRefBuilder => end_bound,
}

pub trait TypeDefFluent: Fluent<TypeDefBuilder> {
    fn with_kind(mut self, kind: Kind) -> Self {
        self.staged().kind = kind;
        self
    }

    fn kind(&self) -> Kind {
        self.staged_ref().kind
    }

    fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.staged().modifiers = modifiers;
        self
    }

    fn modifiers(&self) -> Modifiers {
        self.staged_ref().modifiers
    }

    fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.staged().package_name = package_name.into();
        self
    }

    fn package_name(&self) -> &str {
        &self.staged_ref().package_name
    }

    fn with_name(mut self, name: impl Into<String>) -> Self {
        self.staged().name = name.into();
        self
    }

    fn name(&self) -> &str {
        &self.staged_ref().name
    }

    fn with_comments<S: Into<String>>(mut self, comments: impl IntoIterator<Item = S>) -> Self {
        self.staged().comments.clear();
        self.add_to_comments(comments)
    }

    fn add_to_comments<S: Into<String>>(mut self, comments: impl IntoIterator<Item = S>) -> Self {
        for comment in comments {
            self.staged().comments.push(comment.into());
        }
        self
    }

    fn remove_from_comments<'a>(mut self, comments: impl IntoIterator<Item = &'a str>) -> Self {
        for comment in comments {
            let staged = self.staged();
            if let Some(index) = staged.comments.iter().position(|c| c == comment) {
                staged.comments.remove(index);
            }
        }
        self
    }

    fn comments(&self) -> &[String] {
        &self.staged_ref().comments
    }

    child_list_methods! {
        field: parameters,
        item: TypeParamDef,
        builder: TypeParamDefBuilder,
        with: with_parameters,
        add: add_to_parameters,
        remove: remove_from_parameters,
        new: add_new_parameter,
        new_like: add_new_parameter_like,
    }

    child_list_methods! {
        field: extends_list,
        item: ClassRef,
        builder: ClassRefBuilder,
        with: with_extends_list,
        add: add_to_extends_list,
        remove: remove_from_extends_list,
        new: add_new_extends_list,
        new_like: add_new_extends_list_like,
    }

    child_list_methods! {
        field: implements_list,
        item: ClassRef,
        builder: ClassRefBuilder,
        with: with_implements_list,
        add: add_to_implements_list,
        remove: remove_from_implements_list,
        new: add_new_implements_list,
        new_like: add_new_implements_list_like,
    }

    child_list_methods! {
        field: properties,
        item: Property,
        builder: PropertyBuilder,
        with: with_properties,
        add: add_to_properties,
        remove: remove_from_properties,
        new: add_new_property,
        new_like: add_new_property_like,
    }

    attribute_methods!();
}

impl<T: Fluent<TypeDefBuilder>> TypeDefFluent for T {}

end_aliases! {
    TypeDefFluent:
    TypeParamDefBuilder => end_parameter,
    ClassRefBuilder => end_extends_list,
    ClassRefBuilder => end_implements_list,
    PropertyBuilder => end_property,
}

pub trait PropertyFluent: Fluent<PropertyBuilder> {
    fn with_name(mut self, name: impl Into<String>) -> Self {
        self.staged().name = name.into();
        self
    }

    fn name(&self) -> &str {
        &self.staged_ref().name
    }

    fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.staged().modifiers = modifiers;
        self
    }

    fn modifiers(&self) -> Modifiers {
        self.staged_ref().modifiers
    }

    ref_field_methods! {
        field: type_ref,
        with: with_type_ref,
        variants: [
            VoidRef(VoidRefBuilder) => {
                new: with_new_void_ref_type,
                new_like: with_new_void_ref_type_like,
            },
            PrimitiveRef(PrimitiveRefBuilder) => {
                new: with_new_primitive_ref_type,
                new_like: with_new_primitive_ref_type_like,
            },
            TypeParamRef(TypeParamRefBuilder) => {
                new: with_new_type_param_ref_type,
                new_like: with_new_type_param_ref_type_like,
            },
            ClassRef(ClassRefBuilder) => {
                new: with_new_class_ref_type,
                new_like: with_new_class_ref_type_like,
            },
            WildcardRef(WildcardRefBuilder) => {
                new: with_new_wildcard_ref_type,
                new_like: with_new_wildcard_ref_type_like,
            },
        ],
    }

    attribute_methods!();
}

impl<T: Fluent<PropertyBuilder>> PropertyFluent for T {}

end_aliases! {
    PropertyFluent:
    VoidRefBuilder => end_void_ref_type,
    PrimitiveRefBuilder => end_primitive_ref_type,
    TypeParamRefBuilder => end_type_param_ref_type,
    ClassRefBuilder => end_class_ref_type,
    WildcardRefBuilder => end_wildcard_ref_type,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::ir::Modifier;
    use crate::test_utils::init_test_logging;
    use pretty_assertions::assert_eq;

    fn list_def() -> TypeDef {
        TypeDefBuilder::new()
            .with_kind(Kind::Interface)
            .with_modifiers(Modifiers::PUBLIC)
            .with_package_name("java.util")
            .with_name("List")
            .add_to_comments(["An ordered collection."])
            .add_new_parameter()
            .with_name("E")
            .and()
            .add_new_implements_list()
            .with_name("java.util.Collection")
            .add_new_type_param_ref_argument()
            .with_name("E")
            .and()
            .and()
            .build()
    }

    #[test]
    fn test_type_def_round_trip() {
        let def = list_def();
        assert_eq!(def.edit().build(), def);
    }

    #[test]
    fn test_property_round_trip() {
        let property = PropertyBuilder::new()
            .with_name("values")
            .with_modifiers(Modifiers::from_modifiers([Modifier::Private, Modifier::Final]))
            .with_new_primitive_ref_type()
            .with_name("int")
            .with_dimensions(1)
            .and()
            .add_to_attributes("getter", true)
            .build();
        assert_eq!(property.edit().build(), property);
        assert_eq!(property.type_ref().to_string(), "int[]");
    }

    #[test]
    fn test_type_param_def_round_trip() {
        let param = TypeParamDefBuilder::new()
            .with_name("T")
            .add_new_bound()
            .with_name("java.lang.Comparable")
            .add_new_type_param_ref_argument()
            .with_name("T")
            .and()
            .and()
            .build();
        assert_eq!(param.edit().build(), param);
        assert_eq!(param.to_string(), "T extends java.lang.Comparable<T>");
    }

    #[test]
    fn test_self_inheritance_is_dropped() {
        init_test_logging();

        let def = TypeDefBuilder::new()
            .with_package_name("a")
            .with_name("Loop")
            .add_new_extends_list()
            .with_name("a.Loop")
            .and()
            .add_new_implements_list()
            .with_name("a.Loop")
            .and()
            .add_new_implements_list()
            .with_name("a.Other")
            .and()
            .build();

        assert!(def.extends_list().is_empty());
        assert_eq!(def.implements_list().len(), 1);
        assert_eq!(def.implements_list()[0].fully_qualified_name(), "a.Other");
    }

    #[test]
    fn test_comments() {
        let b = TypeDefBuilder::new()
            .with_comments(["one", "two"])
            .add_to_comments([String::from("three")])
            .remove_from_comments(["two", "missing"]);
        assert_eq!(b.comments(), &["one", "three"]);
    }

    #[test]
    fn test_multi_level_nesting() {
        let def = TypeDefBuilder::new()
            .with_name("Holder")
            .add_new_property()
            .with_name("entries")
            .with_new_class_ref_type()
            .with_name("java.util.Map")
            .add_new_type_param_ref_argument()
            .with_name("K")
            .and()
            .add_new_class_ref_argument()
            .with_name("java.util.List")
            .add_new_wildcard_ref_argument()
            .add_new_type_param_ref_bound()
            .with_name("V")
            .and()
            .and()
            .and()
            .and()
            .and()
            .build();

        assert_eq!(def.properties().len(), 1);
        assert_eq!(
            def.properties()[0].type_ref().to_string(),
            "java.util.Map<K, java.util.List<? extends V>>"
        );
    }

    #[test]
    fn test_with_new_type_replaces_previous() {
        let property = PropertyBuilder::new()
            .with_new_class_ref_type()
            .with_name("x.A")
            .and()
            .with_new_type_param_ref_type()
            .with_name("T")
            .and()
            .build();
        assert_eq!(property.type_ref().to_string(), "T");
    }

    #[test]
    fn test_remove_parameter() {
        let def = list_def();
        let e = def.parameters()[0].clone();
        let edited = def.edit().remove_from_parameters([e.clone()]).build();
        assert!(edited.parameters().is_empty());

        let unchanged = edited.edit().remove_from_parameters([e]).build();
        assert_eq!(unchanged, edited);
    }
}
