/// Immutable configuration for one game variant: who makes the code, how many
/// players break it, how many rounds they get, and what a legal code looks
/// like. Rules are predefined constants and never built at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRule {
    computer_code_maker: bool,
    breakers: usize,
    max_attempts: u32,
    allow_blank: bool,
    code_length: usize,
}

impl GameRule {
    const fn new(
        computer_code_maker: bool,
        breakers: usize,
        max_attempts: u32,
        allow_blank: bool,
        code_length: usize,
    ) -> Self {
        Self {
            computer_code_maker,
            breakers,
            max_attempts,
            allow_blank,
            code_length,
        }
    }

    pub fn is_computer_code_maker(&self) -> bool {
        self.computer_code_maker
    }

    pub fn breakers(&self) -> usize {
        self.breakers
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn allow_blank(&self) -> bool {
        self.allow_blank
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }
}

/// Original Mastermind, computer code maker, one human breaker.
pub const ORIGINAL_1P: GameRule = GameRule::new(true, 1, 12, false, 4);

/// Original Mastermind, human code maker against one human breaker.
pub const ORIGINAL_2P: GameRule = GameRule::new(false, 1, 12, false, 4);

/// Mastermind44: five pegs, one blank allowed, four breakers, five rounds.
pub const MASTERMIND44: GameRule = GameRule::new(true, 4, 5, true, 5);
