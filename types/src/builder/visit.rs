//! In-place traversal of builder trees.

use super::{
    ClassRefBuilder, PrimitiveRefBuilder, PropertyBuilder, TypeDefBuilder, TypeParamDefBuilder,
    TypeParamRefBuilder, TypeRefBuilder, VoidRefBuilder, WildcardRefBuilder,
};

/// Trait for rewriting builder trees before they are built.
///
/// Every `visit_*_builder` hook defaults to its `super_visit_*_builder`
/// counterpart, which recurses into child builders in order. Override a
/// hook to rewrite that builder, and call the `super_` method to keep
/// descending.
///
/// Definitions attached to class reference builders are shared values and
/// are not entered.
///
/// # Example
///
/// ```
/// use codemodel_types::builder::BuilderVisitor;
/// use codemodel_types::prelude::*;
/// use codemodel_types::{PrimitiveRefBuilder, PropertyBuilder};
///
/// struct ToArray;
///
/// impl BuilderVisitor for ToArray {
///     fn visit_primitive_ref_builder(&mut self, builder: &mut PrimitiveRefBuilder) {
///         let dimensions = builder.dimensions() + 1;
///         *builder = core::mem::take(builder).with_dimensions(dimensions);
///     }
/// }
///
/// let mut property = PropertyBuilder::new()
///     .with_name("bytes")
///     .with_new_primitive_ref_type()
///         .with_name("byte")
///         .and();
/// ToArray.visit_property_builder(&mut property);
/// assert_eq!(property.build().type_ref().to_string(), "byte[]");
/// ```
pub trait BuilderVisitor {
    fn visit_type_def_builder(&mut self, builder: &mut TypeDefBuilder) {
        self.super_visit_type_def_builder(builder)
    }

    /// Visits parameters, superclasses, interfaces, then properties.
    fn super_visit_type_def_builder(&mut self, builder: &mut TypeDefBuilder) {
        for parameter in builder.parameters.iter_mut() {
            self.visit_type_param_def_builder(parameter);
        }
        for supertype in builder.extends_list.iter_mut() {
            self.visit_class_ref_builder(supertype);
        }
        for interface in builder.implements_list.iter_mut() {
            self.visit_class_ref_builder(interface);
        }
        for property in builder.properties.iter_mut() {
            self.visit_property_builder(property);
        }
    }

    fn visit_type_param_def_builder(&mut self, builder: &mut TypeParamDefBuilder) {
        self.super_visit_type_param_def_builder(builder)
    }

    fn super_visit_type_param_def_builder(&mut self, builder: &mut TypeParamDefBuilder) {
        for bound in builder.bounds.iter_mut() {
            self.visit_class_ref_builder(bound);
        }
    }

    fn visit_property_builder(&mut self, builder: &mut PropertyBuilder) {
        self.super_visit_property_builder(builder)
    }

    fn super_visit_property_builder(&mut self, builder: &mut PropertyBuilder) {
        self.visit_type_ref_builder(&mut builder.type_ref);
    }

    /// Visit a reference builder of any variant.
    ///
    /// Override this to act on every reference; `super_visit_type_ref_builder`
    /// dispatches to the variant hook.
    fn visit_type_ref_builder(&mut self, builder: &mut TypeRefBuilder) {
        self.super_visit_type_ref_builder(builder)
    }

    fn super_visit_type_ref_builder(&mut self, builder: &mut TypeRefBuilder) {
        match builder {
            TypeRefBuilder::Void(b) => self.visit_void_ref_builder(b),
            TypeRefBuilder::Primitive(b) => self.visit_primitive_ref_builder(b),
            TypeRefBuilder::TypeParam(b) => self.visit_type_param_ref_builder(b),
            TypeRefBuilder::Class(b) => self.visit_class_ref_builder(b),
            TypeRefBuilder::Wildcard(b) => self.visit_wildcard_ref_builder(b),
        }
    }

    fn visit_void_ref_builder(&mut self, _builder: &mut VoidRefBuilder) {}

    fn visit_primitive_ref_builder(&mut self, _builder: &mut PrimitiveRefBuilder) {}

    fn visit_type_param_ref_builder(&mut self, _builder: &mut TypeParamRefBuilder) {}

    fn visit_class_ref_builder(&mut self, builder: &mut ClassRefBuilder) {
        self.super_visit_class_ref_builder(builder)
    }

    fn super_visit_class_ref_builder(&mut self, builder: &mut ClassRefBuilder) {
        for argument in builder.arguments.iter_mut() {
            self.visit_type_ref_builder(argument);
        }
    }

    fn visit_wildcard_ref_builder(&mut self, builder: &mut WildcardRefBuilder) {
        self.super_visit_wildcard_ref_builder(builder)
    }

    fn super_visit_wildcard_ref_builder(&mut self, builder: &mut WildcardRefBuilder) {
        for bound in builder.bounds.iter_mut() {
            self.visit_type_ref_builder(bound);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::RefKind;
    use crate::prelude::*;
    use crate::{String, TypeDef, Vec, format};
    use pretty_assertions::assert_eq;

    struct Shade {
        prefix: &'static str,
    }

    impl BuilderVisitor for Shade {
        fn visit_class_ref_builder(&mut self, builder: &mut ClassRefBuilder) {
            let name = format!("{}{}", self.prefix, builder.name());
            *builder = core::mem::take(builder).with_name(name);
            self.super_visit_class_ref_builder(builder);
        }
    }

    #[derive(Default)]
    struct KindLog {
        kinds: Vec<RefKind>,
    }

    impl BuilderVisitor for KindLog {
        fn visit_type_ref_builder(&mut self, builder: &mut TypeRefBuilder) {
            self.kinds.push(builder.kind());
            self.super_visit_type_ref_builder(builder);
        }
    }

    fn repository_def() -> TypeDefBuilder {
        TypeDefBuilder::new()
            .with_package_name("p")
            .with_name("Repo")
            .add_new_parameter()
                .with_name("T")
                .add_new_bound()
                    .with_name("p.Entity")
                    .and()
                .and()
            .add_new_extends_list()
                .with_name("p.Base")
                .add_new_class_ref_argument()
                    .with_name("p.Id")
                    .and()
                .and()
            .add_new_property()
                .with_name("items")
                .with_new_class_ref_type()
                    .with_name("java.util.Map")
                    .add_new_class_ref_argument()
                        .with_name("java.lang.String")
                        .and()
                    .add_new_wildcard_ref_argument()
                        .add_new_class_ref_bound()
                            .with_name("p.Item")
                            .and()
                        .and()
                    .and()
                .and()
    }

    #[test]
    fn test_rewrites_every_class_ref_in_nested_def() {
        let mut builder = repository_def();
        Shade { prefix: "shaded." }.visit_type_def_builder(&mut builder);
        let def = builder.build();

        assert_eq!(def.fully_qualified_name(), "p.Repo");
        assert_eq!(def.parameters()[0].to_string(), "T extends shaded.p.Entity");
        assert_eq!(def.extends_list()[0].to_string(), "shaded.p.Base<shaded.p.Id>");
        assert_eq!(
            def.properties()[0].type_ref().to_string(),
            "shaded.java.util.Map<shaded.java.lang.String, ? extends shaded.p.Item>"
        );
    }

    #[test]
    fn test_rewrite_of_edited_value_leaves_value_alone() {
        let original: TypeDef = repository_def().build();
        let mut builder = original.edit();
        Shade { prefix: "x." }.visit_type_def_builder(&mut builder);

        assert_eq!(original.extends_list()[0].to_string(), "p.Base<p.Id>");
        assert_eq!(builder.build().extends_list()[0].name(), "x.p.Base");
    }

    #[test]
    fn test_type_ref_hook_sees_every_variant_in_order() {
        let mut builder = ClassRefBuilder::new()
            .with_name("Tuple")
            .add_new_void_ref_argument()
                .and()
            .add_new_primitive_ref_argument()
                .with_name("int")
                .and()
            .add_new_type_param_ref_argument()
                .with_name("T")
                .and()
            .add_new_wildcard_ref_argument()
                .add_new_class_ref_bound()
                    .with_name("Bound")
                    .and()
                .and();

        let mut log = KindLog::default();
        log.visit_class_ref_builder(&mut builder);
        assert_eq!(
            log.kinds,
            vec![
                RefKind::Void,
                RefKind::Primitive,
                RefKind::TypeParam,
                RefKind::Wildcard,
                RefKind::Class,
            ]
        );

        // Nothing was rewritten.
        let names: Vec<String> = builder
            .build()
            .arguments()
            .iter()
            .map(|argument| format!("{}", argument))
            .collect();
        assert_eq!(names, vec!["void", "int", "T", "? extends Bound"]);
    }
}
