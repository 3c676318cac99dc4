use crate::String;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A definition builder was requested for a name the context does not
    /// know.
    #[error("no definition registered for `{name}`")]
    UnavailableContext { name: String },

    /// A definition was registered twice under a policy that forbids it.
    #[error("definition `{name}` is already registered")]
    DuplicateDefinition { name: String },
}

pub type Result<T> = core::result::Result<T, Error>;
