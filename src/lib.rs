//! Codemodel - type model and builder framework for code generators
//!
//! # Overview
//!
//! Codemodel describes the declarations a code generator emits (classes,
//! interfaces, generic parameters, properties) and the type references
//! between them. Declarations are assembled with fluent, nestable builders
//! and can be turned back into builders to derive variants.
//!
//! It also answers the structural questions a generator needs while
//! rendering:
//!
//! - Is this reference a subtype of that declaration?
//! - Which segment of a qualified name tells two same-named types apart?
//! - What is the integer mask for a set of modifiers?
//!
//! # Quick Start
//!
//! ```
//! use codemodel::prelude::*;
//! use codemodel::{Context, Kind, TypeDefBuilder, TypeRef};
//!
//! let mut context = Context::default();
//!
//! let comparable = context
//!     .register(
//!         TypeDefBuilder::new()
//!             .with_kind(Kind::Interface)
//!             .with_package_name("java.lang")
//!             .with_name("Comparable")
//!             .build(),
//!     )
//!     .unwrap();
//!
//! let version = context
//!     .register(
//!         TypeDefBuilder::new()
//!             .with_package_name("com.acme")
//!             .with_name("Version")
//!             .add_new_implements_list()
//!                 .with_shared_definition(comparable.clone())
//!                 .add_new_class_ref_argument()
//!                     .with_name("com.acme.Version")
//!                     .and()
//!                 .and()
//!             .build(),
//!     )
//!     .unwrap();
//!
//! // References to registered declarations share them.
//! let version_ref = version.shared_reference([]);
//! assert!(std::rc::Rc::ptr_eq(version_ref.definition(), &version));
//!
//! let version_ref = TypeRef::from(version_ref);
//! assert!(context.repository().is_subtype(&version_ref, &comparable));
//! ```
//!
//! # Builders
//!
//! Every collection field has `with_*`, `add_to_*` and `remove_from_*`
//! setters. Fields holding [`TypeRef`]s additionally have one setter pair
//! per reference variant, and `add_new_*` methods open a nested builder
//! that is folded back into the field by `and()`.

// Re-export the model, builders and queries
pub use codemodel_types::{
    AttributeValue, Attributes, Builder, BuilderVisitor, Children, ClassRef, ClassRefBuilder,
    Context, ContextOptions, DefinitionRepository, Editable, Error, Fluent, Kind, Modifier,
    Modifiers, Nested, PrimitiveRef, PrimitiveRefBuilder, Property, PropertyBuilder,
    RedefinitionPolicy, RefKind, RefVariant, ReferenceCollector, Result, TypeDef, TypeDefBuilder,
    TypeParamDef, TypeParamDefBuilder, TypeParamRef, TypeParamRefBuilder, TypeRef,
    TypeRefBuilder, TypeRefVisitor, VoidRef, VoidRefBuilder, WildcardRef, WildcardRefBuilder,
};

pub use codemodel_types::{builder, ir, prelude, query};
