//! Prompts.

use serde::{Deserialize, Serialize};

use crate::core::ids::PromptId;

/// A prompt shown to the judge at the start of a round.
///
/// Immutable. Owned by the prompt pool until drawn, then by the round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique identity within a prompt source.
    pub id: PromptId,

    /// The prompt text.
    pub text: String,
}

impl Prompt {
    /// Create a prompt.
    #[must_use]
    pub fn new(id: PromptId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
