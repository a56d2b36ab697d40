use rand::Rng;
use std::fmt;

/// A single colour peg. `Blank` is a legal peg value in variants whose rule
/// allows it, and is scored like any other colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    Red,
    Black,
    Yellow,
    Green,
    Blue,
    White,
    Blank,
}

impl Peg {
    pub const ALL: [Peg; 7] = [
        Peg::Red,
        Peg::Black,
        Peg::Yellow,
        Peg::Green,
        Peg::Blue,
        Peg::White,
        Peg::Blank,
    ];

    /// Canonical single-character code. `L` stands for blue, `B` for black.
    pub fn code(self) -> char {
        match self {
            Peg::Red => 'R',
            Peg::Black => 'B',
            Peg::Yellow => 'Y',
            Peg::Green => 'G',
            Peg::Blue => 'L',
            Peg::White => 'W',
            Peg::Blank => '_',
        }
    }

    /// Look up a peg by its character code, case-insensitively.
    pub fn from_code(c: char) -> Option<Peg> {
        match c.to_ascii_uppercase() {
            'R' => Some(Peg::Red),
            'B' => Some(Peg::Black),
            'Y' => Some(Peg::Yellow),
            'G' => Some(Peg::Green),
            'L' => Some(Peg::Blue),
            'W' => Some(Peg::White),
            '_' => Some(Peg::Blank),
            _ => None,
        }
    }

    /// Draw one peg uniformly from the full set, blank included.
    pub fn random<R: Rng>(rng: &mut R) -> Peg {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Stable index into a per-colour count table.
    pub(crate) fn index(self) -> usize {
        match self {
            Peg::Red => 0,
            Peg::Black => 1,
            Peg::Yellow => 2,
            Peg::Green => 3,
            Peg::Blue => 4,
            Peg::White => 5,
            Peg::Blank => 6,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
