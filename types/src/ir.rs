//! Immutable type model consumed by code generators.
//!
//! ## Structure
//!
//! - **References**: `TypeRef` and its five variants - a type at a use site
//! - **Declarations**: `TypeDef`, `TypeParamDef`, `Property`
//! - **Metadata**: `Attributes` bag carried by every value, `Modifiers` bit set
//! - **Traversal**: `TypeRefVisitor` and the `ReferenceCollector` built on it
//! - **Display**: source-like rendering of references

pub mod attributes;
pub mod display;
pub mod modifiers;
pub mod type_def;
pub mod type_ref;
pub mod visit;

pub use attributes::{AttributeValue, Attributes};
pub use modifiers::{Modifier, Modifiers};
pub use type_def::{Kind, Property, TypeDef, TypeParamDef};
pub use type_ref::{ClassRef, PrimitiveRef, RefKind, TypeParamRef, TypeRef, VoidRef, WildcardRef};
pub use visit::{ReferenceCollector, TypeRefVisitor};
