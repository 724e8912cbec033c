//! Resolution error types.

use thiserror::Error;

/// Errors produced while resolving a schema against an environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// One or more required variables were absent from the environment.
    /// Names are fully qualified and listed in first-encounter order.
    #[error("Missing environment variable(s): {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    /// A leaf declared a kind the resolver does not recognize. Raised
    /// immediately, aborting the walk; never aggregated.
    #[error("Failed to cast configuration key \"{key}\" (Environment variable \"{var}\"): Unknown type in definition, the type \"{kind}\" is not valid")]
    UnknownKind {
        /// Schema key under which the offending leaf sits.
        key: String,
        /// Fully-qualified environment variable name.
        var: String,
        /// The unrecognized kind string.
        kind: String,
    },
}

impl ResolveError {
    /// The missing fully-qualified variable names, when aggregated.
    pub fn missing(&self) -> &[String] {
        match self {
            Self::MissingVariables(names) => names,
            Self::UnknownKind { .. } => &[],
        }
    }
}
