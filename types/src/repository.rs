//! Registry of known definitions for one generation run.

use crate::ir::{TypeDef, TypeRef};
use crate::query::{capitalize_first, fully_qualified_name_diff, is_instance_of};
use crate::{Rc, String};
use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};

/// Definitions keyed by fully qualified name, plus the map from simple
/// name to the fully qualified name it was first registered under.
///
/// The reference map records which declaration a bare simple name means in
/// generated source, the way a single import would.
#[derive(Debug, Clone, Default)]
pub struct DefinitionRepository {
    definitions: HashMap<String, Rc<TypeDef>>,
    references: HashMap<String, String>,
}

impl DefinitionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `definition`, replacing any previous one with the same fully
    /// qualified name.
    ///
    /// The first definition registered for a simple name keeps that name in
    /// the reference map.
    pub fn register(&mut self, definition: TypeDef) -> Rc<TypeDef> {
        let qualified = definition.fully_qualified_name();
        trace!(name = %qualified, "Registering definition");

        self.references
            .entry(definition.name().into())
            .or_insert_with(|| qualified.clone());

        let definition = Rc::new(definition);
        self.definitions.insert(qualified, Rc::clone(&definition));
        definition
    }

    pub fn definition(&self, qualified_name: &str) -> Option<Rc<TypeDef>> {
        self.definitions.get(qualified_name).cloned()
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.definitions.contains_key(qualified_name)
    }

    /// The fully qualified name a simple name refers to.
    pub fn reference(&self, simple_name: &str) -> Option<&str> {
        self.references.get(simple_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &Rc<TypeDef>> {
        self.definitions.values()
    }

    /// Whether `type_ref` is a subtype of `target`.
    ///
    /// Walks implemented interfaces, then superclasses, like
    /// [`is_instance_of`]. Supertypes are resolved through the repository
    /// when registered, so that references built before their definition
    /// was complete still see its supertypes. Each fully qualified name is
    /// entered once; reaching it again on a cyclic path counts as no match.
    pub fn is_subtype(&self, type_ref: &TypeRef, target: &TypeDef) -> bool {
        let mut visited = HashSet::new();
        self.is_subtype_guarded(type_ref, target, &mut visited)
    }

    fn is_subtype_guarded(
        &self,
        type_ref: &TypeRef,
        target: &TypeDef,
        visited: &mut HashSet<String>,
    ) -> bool {
        let TypeRef::Class(class) = type_ref else {
            return false;
        };
        let qualified = class.fully_qualified_name();
        if !visited.insert(qualified.clone()) {
            debug!(name = %qualified, "Cycle in supertype graph");
            return false;
        }

        let resolved = match self.definitions.get(&qualified) {
            Some(definition) if !Rc::ptr_eq(definition, class.definition()) => {
                let mut class = class.clone();
                class.definition = Rc::clone(definition);
                TypeRef::Class(class)
            }
            _ => type_ref.clone(),
        };

        is_instance_of(&resolved, target, |supertype| {
            self.is_subtype_guarded(supertype, target, visited)
        })
    }

    /// The capitalized segment that tells `type_ref` apart from the
    /// declaration its simple name refers to.
    ///
    /// Only class references whose name differs from their definition's
    /// simple name need one; for anything else, or when the simple name was
    /// never registered, the result is empty.
    pub fn name_diff(&self, type_ref: &TypeRef) -> String {
        let TypeRef::Class(class) = type_ref else {
            return String::new();
        };
        let definition = class.definition();
        if class.name() == definition.name() {
            return String::new();
        }
        match self.reference(definition.name()) {
            Some(imported) => {
                let qualified = class.fully_qualified_name();
                capitalize_first(fully_qualified_name_diff(imported, &qualified))
            }
            None => {
                debug!(name = definition.name(), "No reference registered");
                String::new()
            }
        }
    }
}
