use super::{TypeDef, TypeRef};
use crate::String;
use alloc::collections::BTreeSet;

/// Trait for visiting type references.
///
/// Implement this trait to traverse a reference tree without mutation.
/// The default implementation handles recursion automatically.
///
/// # Example
///
/// ```
/// use codemodel_types::prelude::*;
/// use codemodel_types::{ClassRefBuilder, TypeRef, TypeRefVisitor};
///
/// struct DepthCalculator {
///     max_depth: usize,
///     current_depth: usize,
/// }
///
/// impl TypeRefVisitor for DepthCalculator {
///     fn visit_ref(&mut self, type_ref: &TypeRef) {
///         self.current_depth += 1;
///         self.max_depth = self.max_depth.max(self.current_depth);
///
///         self.super_visit_ref(type_ref);
///
///         self.current_depth -= 1;
///     }
/// }
///
/// let list = ClassRefBuilder::new()
///     .with_name("java.util.List")
///     .add_new_wildcard_ref_argument()
///         .add_new_type_param_ref_bound()
///             .with_name("T")
///             .and()
///         .and()
///     .build();
///
/// let mut calc = DepthCalculator { max_depth: 0, current_depth: 0 };
/// calc.visit_ref(&TypeRef::from(list));
/// assert_eq!(calc.max_depth, 3); // List -> ? -> T
/// ```
pub trait TypeRefVisitor {
    /// Visit a reference.
    ///
    /// Override this to customize behavior for all references.
    /// Call `super_visit_ref` to recurse into nested references.
    fn visit_ref(&mut self, type_ref: &TypeRef) {
        self.super_visit_ref(type_ref)
    }

    /// Default recursion into nested references.
    ///
    /// Definitions behind class references are not entered; a definition may
    /// refer back to the reference being visited.
    fn super_visit_ref(&mut self, type_ref: &TypeRef) {
        match type_ref {
            TypeRef::Void(_) | TypeRef::Primitive(_) | TypeRef::TypeParam(_) => {}

            TypeRef::Class(class) => {
                for argument in class.arguments() {
                    self.visit_ref(argument);
                }
            }

            TypeRef::Wildcard(wildcard) => {
                for bound in wildcard.bounds() {
                    self.visit_ref(bound);
                }
            }
        }
    }
}

/// Collects the fully qualified names of every class reference visited.
#[derive(Debug, Default)]
pub struct ReferenceCollector {
    pub references: BTreeSet<String>,
}

impl ReferenceCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TypeRefVisitor for ReferenceCollector {
    fn visit_ref(&mut self, type_ref: &TypeRef) {
        if let TypeRef::Class(class) = type_ref {
            self.references.insert(class.fully_qualified_name());
        }
        self.super_visit_ref(type_ref);
    }
}

impl TypeDef {
    /// Fully qualified names of all classes this declaration mentions.
    ///
    /// Covers supertypes, parameter bounds and property types, including
    /// references nested in type arguments. Renderers use it for imports.
    pub fn references(&self) -> BTreeSet<String> {
        let mut collector = ReferenceCollector::new();
        let supertypes = self.extends_list.iter().chain(&self.implements_list);
        let bounds = self.parameters.iter().flat_map(|p| p.bounds.iter());
        for class in supertypes.chain(bounds) {
            collector.visit_ref(&TypeRef::Class(class.clone()));
        }
        for property in &self.properties {
            collector.visit_ref(&property.type_ref);
        }
        collector.references
    }
}
