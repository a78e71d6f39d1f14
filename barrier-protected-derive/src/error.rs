use thiserror::Error;

/// Why a declaration cannot be expanded.
///
/// Variants carrying a `String` hold the attribute text (`#[barrier_protected]`)
/// so the rendered message names the attribute the user wrote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("{0} only works on variables")]
    NotAVariable(String),

    #[error("{0} only works on stored properties")]
    HasExistingAccessor(String),

    #[error("Binding not found")]
    NoBindingFound,

    #[error("{0} only works on single-binding declarations")]
    MultipleBindings(String),

    #[error("{0} requires an explicit type annotation")]
    MissingTypeAnnotation(String),

    #[error("{0} requires an initial value")]
    MissingInitializer(String),
}

/// Error raised by an expansion entry point.
///
/// Only the message survives; the macro boundary attaches the span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct GenerationError {
    description: String,
}

impl GenerationError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl From<RejectionReason> for GenerationError {
    fn from(reason: RejectionReason) -> Self {
        Self::new(reason.to_string())
    }
}
