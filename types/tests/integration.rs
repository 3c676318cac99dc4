//! Integration tests for codemodel-types.
//!
//! These tests drive the public builder surface end to end: construction,
//! editing, variant routing and nested scopes.

use codemodel_types::prelude::*;
use codemodel_types::{
    ClassRef, ClassRefBuilder, Kind, Modifiers, PrimitiveRefBuilder, PropertyBuilder, RefKind,
    TypeDef, TypeDefBuilder, TypeParamDef, TypeParamDefBuilder, TypeParamRef,
    TypeParamRefBuilder, TypeRef, VoidRef, WildcardRef, WildcardRefBuilder,
};
use pretty_assertions::assert_eq;

fn type_param(name: &str) -> TypeParamRef {
    TypeParamRefBuilder::new().with_name(name).build()
}

fn class(name: &str) -> ClassRef {
    ClassRefBuilder::new().with_name(name).build()
}

fn sample_def() -> TypeDef {
    TypeDefBuilder::new()
        .with_kind(Kind::Class)
        .with_modifiers(Modifiers::PUBLIC | Modifiers::FINAL)
        .with_package_name("com.acme")
        .with_name("Registry")
        .add_to_comments(["Generated."])
        .add_new_parameter()
            .with_name("K")
            .add_new_bound()
                .with_name("java.lang.Comparable")
                .add_new_type_param_ref_argument()
                    .with_name("K")
                    .and()
                .and()
            .and()
        .add_new_parameter()
            .with_name("V")
            .and()
        .add_new_extends_list()
            .with_name("com.acme.Base")
            .and()
        .add_new_implements_list()
            .with_name("java.io.Serializable")
            .and()
        .add_new_property()
            .with_name("entries")
            .with_modifiers(Modifiers::PRIVATE)
            .with_new_class_ref_type()
                .with_name("java.util.Map")
                .add_new_type_param_ref_argument()
                    .with_name("K")
                    .and()
                .add_new_wildcard_ref_argument()
                    .add_new_type_param_ref_bound()
                        .with_name("V")
                        .and()
                    .and()
                .and()
            .and()
        .add_new_property()
            .with_name("size")
            .with_new_primitive_ref_type()
                .with_name("int")
                .and()
            .add_to_attributes("readonly", true)
            .and()
        .add_to_attributes("origin", "test")
        .build()
}

#[test]
fn test_round_trip_every_value_kind() {
    let def = sample_def();
    assert_eq!(def.edit().build(), def);

    for param in def.parameters() {
        assert_eq!(param.edit().build(), *param);
    }
    for property in def.properties() {
        assert_eq!(property.edit().build(), *property);
        let type_ref = property.type_ref();
        assert_eq!(type_ref.edit().build(), *type_ref);
    }
    for supertype in def.extends_list().iter().chain(def.implements_list()) {
        assert_eq!(supertype.edit().build(), *supertype);
    }

    let void = VoidRef::default();
    assert_eq!(void.edit().build(), void);
    let ints = PrimitiveRefBuilder::new().with_name("int").with_dimensions(3).build();
    assert_eq!(ints.edit().build(), ints);
}

#[test]
fn test_build_is_repeatable_and_independent() {
    let builder = sample_def().edit();
    let first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);

    let changed = builder.with_name("Other").build();
    assert_eq!(first.name(), "Registry");
    assert_eq!(changed.name(), "Other");
}

#[test]
fn test_order_is_preserved_across_calls() {
    let def = TypeDefBuilder::new()
        .add_to_parameters([TypeParamDefBuilder::new().with_name("A").build()])
        .add_to_parameters([
            TypeParamDefBuilder::new().with_name("B").build(),
            TypeParamDefBuilder::new().with_name("C").build(),
        ])
        .add_to_parameters([TypeParamDefBuilder::new().with_name("A").build()])
        .build();

    let names: Vec<_> = def.parameters().iter().map(TypeParamDef::name).collect();
    assert_eq!(names, vec!["A", "B", "C", "A"]);
}

#[test]
fn test_removing_absent_elements_is_idempotent() {
    let def = sample_def();
    let missing = class("com.acme.Missing");
    let same = def
        .edit()
        .remove_from_implements_list([missing.clone()])
        .remove_from_extends_list([missing])
        .remove_from_parameters([TypeParamDefBuilder::new().with_name("Z").build()])
        .build();
    assert_eq!(same, def);
}

#[test]
fn test_remove_then_remove_again() {
    let def = sample_def();
    let serializable = def.implements_list()[0].clone();

    let once = def.edit().remove_from_implements_list([serializable.clone()]).build();
    let twice = once.edit().remove_from_implements_list([serializable]).build();
    assert!(once.implements_list().is_empty());
    assert_eq!(once, twice);
}

#[test]
fn test_variant_routing_over_all_variants() {
    let items = vec![
        TypeRef::from(VoidRef::default()),
        TypeRef::from(PrimitiveRefBuilder::new().with_name("long").build()),
        TypeRef::from(type_param("T")),
        TypeRef::from(class("java.lang.Number")),
        TypeRef::from(WildcardRef::default()),
    ];

    let dispatched = WildcardRefBuilder::new().add_to_bounds(items.clone()).build();
    let routed = WildcardRefBuilder::new()
        .add_to_void_ref_bounds([VoidRef::default()])
        .add_to_primitive_ref_bounds([PrimitiveRefBuilder::new().with_name("long").build()])
        .add_to_type_param_ref_bounds([type_param("T")])
        .add_to_class_ref_bounds([class("java.lang.Number")])
        .add_to_wildcard_ref_bounds([WildcardRef::default()])
        .build();

    assert_eq!(dispatched, routed);
    assert_eq!(dispatched.bounds(), items.as_slice());

    let kinds: Vec<_> = dispatched.bounds().iter().map(TypeRef::kind).collect();
    assert_eq!(
        kinds,
        vec![
            RefKind::Void,
            RefKind::Primitive,
            RefKind::TypeParam,
            RefKind::Class,
            RefKind::Wildcard,
        ]
    );

    let emptied = dispatched.edit().remove_from_bounds(items).build();
    assert_eq!(emptied, WildcardRef::default());
}

#[test]
fn test_nested_fold_equals_direct_add() {
    let nested = WildcardRefBuilder::new()
        .add_new_type_param_ref_bound()
            .with_name("T")
            .and()
        .build();
    let direct = WildcardRefBuilder::new()
        .add_to_bounds([TypeRef::from(type_param("T"))])
        .build();
    assert_eq!(nested, direct);
}

#[test]
fn test_nested_like_starts_from_seed() {
    let seed = class("java.util.List");
    let args = ClassRefBuilder::new()
        .with_name("java.util.Map")
        .add_new_class_ref_argument_like(&seed)
            .add_new_type_param_ref_argument()
                .with_name("E")
                .and()
            .and()
        .build();

    assert_eq!(args.arguments()[0].to_string(), "java.util.List<E>");
    assert!(seed.arguments().is_empty());
}

#[test]
fn test_three_levels_fold_in_order() {
    let def = TypeDefBuilder::new()
        .with_name("Outer")
        .add_new_implements_list()
            .with_name("x.Fn")
            .add_new_wildcard_ref_argument()
                .add_new_class_ref_bound()
                    .with_name("x.In")
                    .and()
                .add_new_class_ref_bound()
                    .with_name("x.Extra")
                    .and()
                .and()
            .add_new_primitive_ref_argument()
                .with_name("int")
                .and()
            .and()
        .build();

    assert_eq!(
        def.implements_list()[0].to_string(),
        "x.Fn<? extends x.In & x.Extra, int>"
    );
}

#[test]
fn test_property_type_setters() {
    let seed = PropertyBuilder::new()
        .with_name("id")
        .with_type_ref(TypeRef::from(class("java.util.UUID")))
        .build();
    assert_eq!(seed.type_ref().to_string(), "java.util.UUID");

    let array = seed
        .edit()
        .with_new_type_param_ref_type_like(&type_param("T"))
            .with_dimensions(2)
            .and()
        .build();
    assert_eq!(array.type_ref().to_string(), "T[][]");
    assert_eq!(array.name(), "id");
}

#[test]
fn test_references_collects_imports() {
    let refs: Vec<_> = sample_def().references().into_iter().collect();
    assert_eq!(
        refs,
        vec![
            "com.acme.Base",
            "java.io.Serializable",
            "java.lang.Comparable",
            "java.util.Map",
        ]
    );
}
