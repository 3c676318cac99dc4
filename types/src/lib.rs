//! Type model and builder framework for code generators.
//!
//! This crate models type declarations ([`TypeDef`], [`TypeParamDef`]) and
//! use-site type references ([`TypeRef`]), and provides fluent builders to
//! construct and edit them. Built values are immutable; every value can be
//! turned back into a pre-populated builder with [`Editable::edit`].
//!
//! # Example
//!
//! ```
//! use codemodel_types::prelude::*;
//! use codemodel_types::{Kind, TypeDefBuilder};
//!
//! let list = TypeDefBuilder::new()
//!     .with_kind(Kind::Interface)
//!     .with_package_name("java.util")
//!     .with_name("List")
//!     .add_new_parameter()
//!         .with_name("E")
//!         .and()
//!     .build();
//!
//! assert_eq!(list.fully_qualified_name(), "java.util.List");
//! assert_eq!(list.edit().build(), list);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{
    boxed::Box, format, rc::Rc, string::String, string::ToString, vec, vec::Vec,
};

pub mod builder;
pub mod context;
pub mod error;
pub mod ir;
pub mod query;
pub mod repository;

pub use builder::{
    Builder, BuilderVisitor, Children, ClassRefBuilder, Editable, Fluent, Nested,
    PrimitiveRefBuilder, PropertyBuilder, RefVariant, TypeDefBuilder, TypeParamDefBuilder,
    TypeParamRefBuilder, TypeRefBuilder, VoidRefBuilder, WildcardRefBuilder,
};
pub use context::{Context, ContextOptions, RedefinitionPolicy};
pub use error::{Error, Result};
pub use ir::{
    AttributeValue, Attributes, ClassRef, Kind, Modifier, Modifiers, PrimitiveRef, Property,
    RefKind, ReferenceCollector, TypeDef, TypeParamDef, TypeParamRef, TypeRef, TypeRefVisitor,
    VoidRef, WildcardRef,
};
pub use repository::DefinitionRepository;

/// Fluent traits needed to chain builder calls and nested scopes.
pub mod prelude {
    pub use crate::builder::{
        Builder, ClassRefFluent, Editable, Fluent, PrimitiveRefFluent, PropertyFluent,
        TypeDefFluent, TypeParamDefFluent, TypeParamRefFluent, VoidRefFluent, WildcardRefFluent,
    };
}
