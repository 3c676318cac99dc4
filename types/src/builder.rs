//! Fluent builders for the type model.
//!
//! Every value in [`crate::ir`] has a builder. Builders are plain mutable
//! records; [`Builder::build`] produces a fresh immutable value and
//! [`Editable::edit`] turns a value back into a pre-populated builder.
//!
//! Setters live on per-builder fluent traits (`TypeDefFluent`,
//! `WildcardRefFluent`, ...) implemented for anything that stages that
//! builder: the builder itself and every [`Nested`] scope around it. Import
//! [`crate::prelude`] to bring them into scope.
//!
//! Collections of [`TypeRef`](crate::TypeRef) are stored as one ordered list
//! of [`TypeRefBuilder`]s and exposed through one add/remove pair per
//! variant plus a dispatching pair that routes on the variant.
//!
//! [`BuilderVisitor`] rewrites a builder tree in place before it is built.

#[macro_use]
mod macros;

mod adapter;
mod base;
mod defs;
mod nested;
mod refs;
mod visit;

pub use adapter::{RefVariant, TypeRefBuilder};
pub use base::{Builder, Children, Editable};
pub use defs::{
    PropertyBuilder, PropertyFluent, TypeDefBuilder, TypeDefFluent, TypeParamDefBuilder,
    TypeParamDefFluent,
};
pub use nested::{Fluent, Nested};
pub use refs::{
    ClassRefBuilder, ClassRefFluent, PrimitiveRefBuilder, PrimitiveRefFluent, TypeParamRefBuilder,
    TypeParamRefFluent, VoidRefBuilder, VoidRefFluent, WildcardRefBuilder, WildcardRefFluent,
};
pub use visit::BuilderVisitor;
