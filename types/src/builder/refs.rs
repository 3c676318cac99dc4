//! Builders for the [`TypeRef`] variants.

use super::{Builder, Children, Editable, Fluent, Nested, TypeDefBuilder, TypeRefBuilder};
use crate::ir::{
    AttributeValue, Attributes, ClassRef, PrimitiveRef, TypeDef, TypeParamRef, TypeRef, VoidRef,
    WildcardRef,
};
use crate::{Rc, String, Vec};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoidRefBuilder {
    pub(super) attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveRefBuilder {
    pub(super) name: String,
    pub(super) dimensions: u32,
    pub(super) attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeParamRefBuilder {
    pub(super) name: String,
    pub(super) dimensions: u32,
    pub(super) attributes: Attributes,
}

/// Builder for [`ClassRef`].
///
/// Without an explicit definition the built reference points at an
/// unresolved placeholder named after the reference; without an explicit
/// name the reference uses its definition's simple name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassRefBuilder {
    pub(super) name: Option<String>,
    pub(super) definition: Option<Rc<TypeDef>>,
    pub(super) arguments: Children<TypeRefBuilder>,
    pub(super) dimensions: u32,
    pub(super) attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WildcardRefBuilder {
    pub(super) bounds: Children<TypeRefBuilder>,
    pub(super) attributes: Attributes,
}

impl VoidRefBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrimitiveRefBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TypeParamRefBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassRefBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WildcardRefBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for VoidRefBuilder {
    type Target = VoidRef;

    fn build(&self) -> VoidRef {
        VoidRef {
            attributes: self.attributes.clone(),
        }
    }
}

impl Builder for PrimitiveRefBuilder {
    type Target = PrimitiveRef;

    fn build(&self) -> PrimitiveRef {
        PrimitiveRef {
            name: self.name.clone(),
            dimensions: self.dimensions,
            attributes: self.attributes.clone(),
        }
    }
}

impl Builder for TypeParamRefBuilder {
    type Target = TypeParamRef;

    fn build(&self) -> TypeParamRef {
        TypeParamRef {
            name: self.name.clone(),
            dimensions: self.dimensions,
            attributes: self.attributes.clone(),
        }
    }
}

impl Builder for ClassRefBuilder {
    type Target = ClassRef;

    fn build(&self) -> ClassRef {
        let definition = match &self.definition {
            Some(definition) => Rc::clone(definition),
            None => Rc::new(TypeDef::unresolved(self.name.as_deref().unwrap_or(""))),
        };
        let name = match &self.name {
            Some(name) => name.clone(),
            None => definition.name.clone(),
        };
        ClassRef {
            name,
            definition,
            arguments: self.arguments.build(),
            dimensions: self.dimensions,
            attributes: self.attributes.clone(),
        }
    }
}

impl Builder for WildcardRefBuilder {
    type Target = WildcardRef;

    fn build(&self) -> WildcardRef {
        WildcardRef {
            bounds: self.bounds.build(),
            attributes: self.attributes.clone(),
        }
    }
}

impl Editable for VoidRef {
    type Builder = VoidRefBuilder;

    fn edit(&self) -> VoidRefBuilder {
        VoidRefBuilder {
            attributes: self.attributes.clone(),
        }
    }
}

impl Editable for PrimitiveRef {
    type Builder = PrimitiveRefBuilder;

    fn edit(&self) -> PrimitiveRefBuilder {
        PrimitiveRefBuilder {
            name: self.name.clone(),
            dimensions: self.dimensions,
            attributes: self.attributes.clone(),
        }
    }
}

impl Editable for TypeParamRef {
    type Builder = TypeParamRefBuilder;

    fn edit(&self) -> TypeParamRefBuilder {
        TypeParamRefBuilder {
            name: self.name.clone(),
            dimensions: self.dimensions,
            attributes: self.attributes.clone(),
        }
    }
}

impl Editable for ClassRef {
    type Builder = ClassRefBuilder;

    fn edit(&self) -> ClassRefBuilder {
        ClassRefBuilder {
            name: Some(self.name.clone()),
            definition: Some(Rc::clone(&self.definition)),
            arguments: Children::from_values(&self.arguments),
            dimensions: self.dimensions,
            attributes: self.attributes.clone(),
        }
    }
}

impl Editable for WildcardRef {
    type Builder = WildcardRefBuilder;

    fn edit(&self) -> WildcardRefBuilder {
        WildcardRefBuilder {
            bounds: Children::from_values(&self.bounds),
            attributes: self.attributes.clone(),
        }
    }
}

impl_fluent!(
    VoidRefBuilder,
    PrimitiveRefBuilder,
    TypeParamRefBuilder,
    ClassRefBuilder,
    WildcardRefBuilder,
);

pub trait VoidRefFluent: Fluent<VoidRefBuilder> {
    attribute_methods!();
}

impl<T: Fluent<VoidRefBuilder>> VoidRefFluent for T {}

pub trait PrimitiveRefFluent: Fluent<PrimitiveRefBuilder> {
    /// Keyword of the primitive, e.g. `int`.
    fn with_name(mut self, name: impl Into<String>) -> Self {
        self.staged().name = name.into();
        self
    }

    fn name(&self) -> &str {
        &self.staged_ref().name
    }

    fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.staged().dimensions = dimensions;
        self
    }

    fn dimensions(&self) -> u32 {
        self.staged_ref().dimensions
    }

    attribute_methods!();
}

impl<T: Fluent<PrimitiveRefBuilder>> PrimitiveRefFluent for T {}

pub trait TypeParamRefFluent: Fluent<TypeParamRefBuilder> {
    fn with_name(mut self, name: impl Into<String>) -> Self {
        self.staged().name = name.into();
        self
    }

    fn name(&self) -> &str {
        &self.staged_ref().name
    }

    fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.staged().dimensions = dimensions;
        self
    }

    fn dimensions(&self) -> u32 {
        self.staged_ref().dimensions
    }

    attribute_methods!();
}

impl<T: Fluent<TypeParamRefBuilder>> TypeParamRefFluent for T {}

pub trait ClassRefFluent: Fluent<ClassRefBuilder> {
    /// Name used at the reference site.
    fn with_name(mut self, name: impl Into<String>) -> Self {
        self.staged().name = Some(name.into());
        self
    }

    /// The explicit name, or empty when the definition's name will be used.
    fn name(&self) -> &str {
        self.staged_ref().name.as_deref().unwrap_or("")
    }

    fn with_definition(self, definition: TypeDef) -> Self {
        self.with_shared_definition(Rc::new(definition))
    }

    /// Point at a definition shared with other references.
    fn with_shared_definition(mut self, definition: Rc<TypeDef>) -> Self {
        self.staged().definition = Some(definition);
        self
    }

    fn definition(&self) -> Option<&Rc<TypeDef>> {
        self.staged_ref().definition.as_ref()
    }

    fn with_new_definition(self) -> Nested<Self, TypeDefBuilder> {
        Nested::new(self, TypeDefBuilder::default(), |parent, value| {
            parent.with_definition(value)
        })
    }

    fn with_new_definition_like(self, definition: &TypeDef) -> Nested<Self, TypeDefBuilder> {
        Nested::new(self, definition.edit(), |parent, value| {
            parent.with_definition(value)
        })
    }

    /// Edit the current definition, or start an empty one.
    fn edit_definition(self) -> Nested<Self, TypeDefBuilder> {
        let builder = match self.definition() {
            Some(definition) => definition.edit(),
            None => TypeDefBuilder::default(),
        };
        Nested::new(self, builder, |parent, value| parent.with_definition(value))
    }

    fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.staged().dimensions = dimensions;
        self
    }

    fn dimensions(&self) -> u32 {
        self.staged_ref().dimensions
    }

    ref_list_methods! {
        field: arguments,
        with: with_arguments,
        add: add_to_arguments,
        remove: remove_from_arguments,
        variants: [
            Void(VoidRef, VoidRefBuilder) => {
                add: add_to_void_ref_arguments,
                remove: remove_from_void_ref_arguments,
                new: add_new_void_ref_argument,
                new_like: add_new_void_ref_argument_like,
            },
            Primitive(PrimitiveRef, PrimitiveRefBuilder) => {
                add: add_to_primitive_ref_arguments,
                remove: remove_from_primitive_ref_arguments,
                new: add_new_primitive_ref_argument,
                new_like: add_new_primitive_ref_argument_like,
            },
            TypeParam(TypeParamRef, TypeParamRefBuilder) => {
                add: add_to_type_param_ref_arguments,
                remove: remove_from_type_param_ref_arguments,
                new: add_new_type_param_ref_argument,
                new_like: add_new_type_param_ref_argument_like,
            },
            Class(ClassRef, ClassRefBuilder) => {
                add: add_to_class_ref_arguments,
                remove: remove_from_class_ref_arguments,
                new: add_new_class_ref_argument,
                new_like: add_new_class_ref_argument_like,
            },
            Wildcard(WildcardRef, WildcardRefBuilder) => {
                add: add_to_wildcard_ref_arguments,
                remove: remove_from_wildcard_ref_arguments,
                new: add_new_wildcard_ref_argument,
                new_like: add_new_wildcard_ref_argument_like,
            },
        ],
    }

    attribute_methods!();
}

impl<T: Fluent<ClassRefBuilder>> ClassRefFluent for T {}

end_aliases! {
    ClassRefFluent:
    VoidRefBuilder => end_void_ref_argument,
    PrimitiveRefBuilder => end_primitive_ref_argument,
    TypeParamRefBuilder => end_type_param_ref_argument,
    ClassRefBuilder => end_class_ref_argument,
    WildcardRefBuilder => end_wildcard_ref_argument,
    TypeDefBuilder => end_definition,
}

pub trait WildcardRefFluent: Fluent<WildcardRefBuilder> {
    ref_list_methods! {
        field: bounds,
        with: with_bounds,
        add: add_to_bounds,
        remove: remove_from_bounds,
        variants: [
            Void(VoidRef, VoidRefBuilder) => {
                add: add_to_void_ref_bounds,
                remove: remove_from_void_ref_bounds,
                new: add_new_void_ref_bound,
                new_like: add_new_void_ref_bound_like,
            },
            Primitive(PrimitiveRef, PrimitiveRefBuilder) => {
                add: add_to_primitive_ref_bounds,
                remove: remove_from_primitive_ref_bounds,
                new: add_new_primitive_ref_bound,
                new_like: add_new_primitive_ref_bound_like,
            },
            TypeParam(TypeParamRef, TypeParamRefBuilder) => {
                add: add_to_type_param_ref_bounds,
                remove: remove_from_type_param_ref_bounds,
                new: add_new_type_param_ref_bound,
                new_like: add_new_type_param_ref_bound_like,
            },
            Class(ClassRef, ClassRefBuilder) => {
                add: add_to_class_ref_bounds,
                remove: remove_from_class_ref_bounds,
                new: add_new_class_ref_bound,
                new_like: add_new_class_ref_bound_like,
            },
            Wildcard(WildcardRef, WildcardRefBuilder) => {
                add: add_to_wildcard_ref_bounds,
                remove: remove_from_wildcard_ref_bounds,
                new: add_new_wildcard_ref_bound,
                new_like: add_new_wildcard_ref_bound_like,
            },
        ],
    }

    attribute_methods!();
}

impl<T: Fluent<WildcardRefBuilder>> WildcardRefFluent for T {}

end_aliases! {
    WildcardRefFluent:
    VoidRefBuilder => end_void_ref_bound,
    PrimitiveRefBuilder => end_primitive_ref_bound,
    TypeParamRefBuilder => end_type_param_ref_bound,
    ClassRefBuilder => end_class_ref_bound,
    WildcardRefBuilder => end_wildcard_ref_bound,
}
