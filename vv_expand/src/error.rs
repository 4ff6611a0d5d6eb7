use thiserror::Error;

/// Failure of a single expansion call. No partial output is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    /// The scanner hit text it cannot read as a `$(identifier)` token.
    #[error("{reason}")]
    MalformedPlaceholder { input: String, reason: String },

    /// A caller supplied mapping refused to resolve `name`.
    #[error("$({name}): {reason}")]
    Mapping {
        input: String,
        name: String,
        reason: String,
    },
}

impl ExpansionError {
    pub(crate) fn malformed(input: &str, reason: String) -> Self {
        ExpansionError::MalformedPlaceholder {
            input: input.to_string(),
            reason,
        }
    }

    /// The text the failing expansion was asked to process.
    pub fn input(&self) -> &str {
        match self {
            ExpansionError::MalformedPlaceholder { input, .. } => input,
            ExpansionError::Mapping { input, .. } => input,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ExpansionError::MalformedPlaceholder { .. })
    }
}
