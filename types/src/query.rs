//! Structural questions about the type model.
//!
//! - [`lattice`]: subtype conformance and parameter lookup
//! - [`naming`]: minimal disambiguating names
//! - [`util`]: small constructors and declaration rewrites
//!
//! Modifier masks live with the modifiers themselves, see
//! [`crate::ir::modifiers`].

pub mod lattice;
pub mod naming;
pub mod util;

pub use crate::ir::modifiers::{keywords_to_int, modifiers_to_int};
pub use lattice::{is_instance_of, parameter_definition};
pub use naming::{capitalize_first, fully_qualified_name_diff};
pub use util::{
    new_type_param_def, new_type_param_ref, type_extends, type_generic_of, type_implements,
    unwrap_generic,
};
