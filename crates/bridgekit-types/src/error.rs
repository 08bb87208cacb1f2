use thiserror::Error;
use uuid::Uuid;

/// Errors raised while declaring or finalizing a module definition.
///
/// Every variant aborts the declaration pass; none of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("the module definition defines more than one view with name '{0}'")]
    DuplicateView(String),

    #[error("module name is missing and cannot be derived from an owning type")]
    MissingName,
}

/// Errors from the host-side module registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("module '{0}' is already registered")]
    DuplicateModule(String),

    #[error("module '{0}' not found")]
    ModuleNotFound(String),

    #[error("no activity result launcher registered with key {0}")]
    UnknownLauncher(Uuid),

    #[error("invalid definition: {0}")]
    Definition(#[from] DefinitionError),
}

/// An error surfaced to the calling side of the bridge.
///
/// Carries a stable machine-readable `code` alongside the human message,
/// so callers can branch on the code without parsing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct CodedError {
    pub code: String,
    pub message: String,
}

impl CodedError {
    pub const ARGUMENT_COUNT: &'static str = "ERR_ARGUMENT_COUNT";
    pub const PROP_CONVERSION: &'static str = "ERR_PROP_CONVERSION";
    pub const UNKNOWN_PROP: &'static str = "ERR_UNKNOWN_PROP";
    pub const VIEW_TYPE: &'static str = "ERR_VIEW_TYPE";
    pub const PROPERTY_READ_ONLY: &'static str = "ERR_PROPERTY_READ_ONLY";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Wrong number of arguments passed to a function or constructor.
    pub fn argument_count(function: &str, expected_min: usize, expected_max: usize, got: usize) -> Self {
        let expected = if expected_min == expected_max {
            expected_max.to_string()
        } else {
            format!("{expected_min}..={expected_max}")
        };
        Self::new(
            Self::ARGUMENT_COUNT,
            format!("function '{function}' expects {expected} argument(s), got {got}"),
        )
    }
}
