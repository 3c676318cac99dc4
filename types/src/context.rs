//! Per-run generation context.

use crate::builder::{Editable, TypeDefBuilder};
use crate::error::{Error, Result};
use crate::ir::TypeDef;
use crate::repository::DefinitionRepository;
use crate::{Rc, ToString};
use tracing::warn;

/// What to do when a definition is registered under a fully qualified name
/// that is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedefinitionPolicy {
    /// Fail with [`Error::DuplicateDefinition`].
    Deny,
    /// Replace the previous definition and log a warning.
    #[default]
    Warn,
    /// Replace the previous definition silently.
    Allow,
}

/// Configuration options for a [`Context`].
///
/// # Example
///
/// ```
/// use codemodel_types::{ContextOptions, RedefinitionPolicy};
///
/// let options = ContextOptions {
///     redefinition: RedefinitionPolicy::Deny,
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Handling of repeated registrations.
    ///
    /// Default: `Warn`
    pub redefinition: RedefinitionPolicy,
}

/// State shared by everything generated in one run.
///
/// Independent runs use independent contexts; nothing is process-wide.
#[derive(Debug, Clone, Default)]
pub struct Context {
    options: ContextOptions,
    repository: DefinitionRepository,
}

impl Context {
    pub fn new(options: ContextOptions) -> Self {
        Context {
            options,
            repository: DefinitionRepository::new(),
        }
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    pub fn repository(&self) -> &DefinitionRepository {
        &self.repository
    }

    /// Register `definition` according to the redefinition policy.
    pub fn register(&mut self, definition: TypeDef) -> Result<Rc<TypeDef>> {
        let qualified = definition.fully_qualified_name();
        if self.repository.contains(&qualified) {
            match self.options.redefinition {
                RedefinitionPolicy::Deny => {
                    return Err(Error::DuplicateDefinition { name: qualified });
                }
                RedefinitionPolicy::Warn => {
                    warn!(name = %qualified, "Replacing existing definition");
                }
                RedefinitionPolicy::Allow => {}
            }
        }
        Ok(self.repository.register(definition))
    }

    /// A builder pre-populated from the registered definition.
    pub fn definition_builder(&self, qualified_name: &str) -> Result<TypeDefBuilder> {
        self.repository
            .definition(qualified_name)
            .map(|definition| definition.edit())
            .ok_or_else(|| Error::UnavailableContext {
                name: qualified_name.to_string(),
            })
    }
}
