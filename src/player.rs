use crate::code::Code;
use crate::feedback::Feedback;

/// The party that creates the secret code. The computer generates it at
/// random; a human is prompted for it by the game flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeMaker {
    Computer,
    Human(String),
}

impl CodeMaker {
    pub fn name(&self) -> Option<&str> {
        match self {
            CodeMaker::Computer => None,
            CodeMaker::Human(name) => Some(name),
        }
    }

    pub fn is_computer(&self) -> bool {
        matches!(self, CodeMaker::Computer)
    }
}

/// A named human trying to reproduce the secret code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBreaker {
    name: String,
}

impl CodeBreaker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Submit one attempt and receive its scoring.
    pub fn guess(&self, attempt: &Code, secret: &Code) -> Feedback {
        Feedback::evaluate(attempt, secret)
    }
}
