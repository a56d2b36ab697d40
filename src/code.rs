use crate::peg::Peg;
use crate::rule::GameRule;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Why a raw input string could not become a [`Code`] under a given rule.
/// Always recoverable: the caller re-prompts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodeParsingError {
    #[error("`{0}` is not a peg code")]
    UnknownPegCode(char),
    #[error("expected {expected} pegs, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("blank pegs are not allowed in this game")]
    BlankNotAllowed,
    #[error("a code may contain at most one blank peg")]
    TooManyBlanks,
}

/// A fixed-length ordered sequence of pegs. Immutable once built; both
/// construction paths enforce the rule's length and blank policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pegs: Vec<Peg>,
}

impl Code {
    /// Parse an input string, one character per peg, case-insensitive.
    /// Spaces between pegs are permitted, so a rendered code parses back.
    ///
    /// Checks run in order: every character must be a peg code, the count
    /// must equal the rule's code length, and blanks must satisfy the rule
    /// (none when disallowed, at most one when allowed).
    pub fn parse(input: &str, rule: &GameRule) -> Result<Code, CodeParsingError> {
        let mut pegs = Vec::with_capacity(rule.code_length());
        for c in input.chars().filter(|&c| c != ' ') {
            pegs.push(Peg::from_code(c).ok_or(CodeParsingError::UnknownPegCode(c))?);
        }
        if pegs.len() != rule.code_length() {
            return Err(CodeParsingError::WrongLength {
                expected: rule.code_length(),
                actual: pegs.len(),
            });
        }
        let blanks = pegs.iter().filter(|&&p| p == Peg::Blank).count();
        if blanks > 0 && !rule.allow_blank() {
            return Err(CodeParsingError::BlankNotAllowed);
        }
        if blanks > 1 {
            return Err(CodeParsingError::TooManyBlanks);
        }
        Ok(Code { pegs })
    }

    /// Draw a random code satisfying the rule. A drawn blank is rejected and
    /// redrawn whenever blanks are disallowed or one is already placed, so
    /// the blank invariant holds during construction rather than after it.
    pub fn generate_random<R: Rng>(rule: &GameRule, rng: &mut R) -> Code {
        let mut pegs = Vec::with_capacity(rule.code_length());
        for _ in 0..rule.code_length() {
            let mut peg = Peg::random(rng);
            while peg == Peg::Blank && (!rule.allow_blank() || pegs.contains(&Peg::Blank)) {
                peg = Peg::random(rng);
            }
            pegs.push(peg);
        }
        Code { pegs }
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// The compact form accepted by [`Code::parse`].
    pub fn compact(&self) -> String {
        self.pegs.iter().map(|p| p.code()).collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.pegs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
