use crate::code::Code;
use crate::peg::Peg;
use std::fmt;

/// Aggregate scoring of one guess against the secret: how many pegs match in
/// both colour and position, and how many more match in colour only. Carries
/// no positional information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    exact: usize,
    color: usize,
}

impl Feedback {
    /// Score `guess` against `secret` with classic Mastermind rules.
    ///
    /// Pass one counts exact matches and pools the remaining secret pegs
    /// into a per-colour count table, preserving multiplicity. Pass two
    /// walks the non-exact guess positions in index order; each colour hit
    /// consumes one pool instance, so a colour can never score more often
    /// than the secret still holds it. Blanks score like any other peg.
    ///
    /// Panics if the codes have different lengths; both must come from the
    /// same rule.
    pub fn evaluate(guess: &Code, secret: &Code) -> Feedback {
        assert_eq!(
            guess.len(),
            secret.len(),
            "guess and secret must be built under the same rule"
        );

        let mut remaining = [0usize; Peg::ALL.len()];
        let mut exact = 0;
        for (g, s) in guess.pegs().iter().zip(secret.pegs()) {
            if g == s {
                exact += 1;
            } else {
                remaining[s.index()] += 1;
            }
        }

        let mut color = 0;
        for (g, s) in guess.pegs().iter().zip(secret.pegs()) {
            if g == s {
                continue;
            }
            if remaining[g.index()] > 0 {
                remaining[g.index()] -= 1;
                color += 1;
            }
        }

        Feedback { exact, color }
    }

    pub fn exact_count(&self) -> usize {
        self.exact
    }

    pub fn color_count(&self) -> usize {
        self.color
    }

    /// True when every position matched, i.e. the code is broken.
    /// `required` is the rule's code length.
    pub fn is_winning_state(&self, required: usize) -> bool {
        self.exact == required
    }
}

impl fmt::Display for Feedback {
    /// `B` per exact match, then `W` per colour match, space-joined.
    /// An empty feedback renders as `Nothing.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exact == 0 && self.color == 0 {
            return write!(f, "Nothing.");
        }
        let mut first = true;
        for mark in std::iter::repeat('B')
            .take(self.exact)
            .chain(std::iter::repeat('W').take(self.color))
        {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{mark}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{GameRule, MASTERMIND44, ORIGINAL_1P};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn code(s: &str, rule: &GameRule) -> Code {
        Code::parse(s, rule).unwrap()
    }

    #[test]
    fn test_self_match_is_perfect() {
        let c = code("RGLW", &ORIGINAL_1P);
        let fb = Feedback::evaluate(&c, &c);
        assert_eq!(fb.exact_count(), 4);
        assert_eq!(fb.color_count(), 0);
    }

    #[test]
    fn test_no_match_at_all() {
        let fb = Feedback::evaluate(&code("RRRR", &ORIGINAL_1P), &code("GGGG", &ORIGINAL_1P));
        assert_eq!(fb.exact_count(), 0);
        assert_eq!(fb.color_count(), 0);
    }

    #[test]
    fn test_all_colors_misplaced() {
        let fb = Feedback::evaluate(&code("GRWL", &ORIGINAL_1P), &code("RGLW", &ORIGINAL_1P));
        assert_eq!(fb.exact_count(), 0);
        assert_eq!(fb.color_count(), 4);
    }

    #[test]
    fn test_duplicate_color_pool_is_consumed() {
        // secret R R L G, guess R L L L: position 0 exact; pool is R, L, G;
        // guess position 1 takes the pooled L, positions 2 and 3 find none.
        let fb = Feedback::evaluate(&code("RLLL", &ORIGINAL_1P), &code("RRLG", &ORIGINAL_1P));
        assert_eq!(fb.exact_count(), 1);
        assert_eq!(fb.color_count(), 1);
    }

    #[test]
    fn test_guess_duplicates_capped_by_secret_multiplicity() {
        let fb = Feedback::evaluate(&code("RRRR", &ORIGINAL_1P), &code("RGGG", &ORIGINAL_1P));
        assert_eq!(fb.exact_count(), 1);
        assert_eq!(fb.color_count(), 0);
    }

    #[test]
    fn test_secret_duplicates_all_creditable() {
        let fb = Feedback::evaluate(&code("GRRG", &ORIGINAL_1P), &code("RGGR", &ORIGINAL_1P));
        assert_eq!(fb.exact_count(), 0);
        assert_eq!(fb.color_count(), 4);
    }

    #[test]
    fn test_blank_scores_as_ordinary_peg() {
        // secret R _ G Y, guess _ R G Y: two exacts, then the blank and the
        // red both score as colour matches from the pool.
        let fb = Feedback::evaluate(&code("_RGYW", &MASTERMIND44), &code("R_GYW", &MASTERMIND44));
        assert_eq!(fb.exact_count(), 3);
        assert_eq!(fb.color_count(), 2);
    }

    #[test]
    fn test_guessed_blank_with_no_secret_blank_scores_nothing() {
        let fb = Feedback::evaluate(&code("_RGYW", &MASTERMIND44), &code("LRGYW", &MASTERMIND44));
        assert_eq!(fb.exact_count(), 4);
        assert_eq!(fb.color_count(), 0);
    }

    #[test]
    fn test_exact_plus_color_bounded_by_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..300 {
            let guess = Code::generate_random(&MASTERMIND44, &mut rng);
            let secret = Code::generate_random(&MASTERMIND44, &mut rng);
            let fb = Feedback::evaluate(&guess, &secret);
            assert!(fb.exact_count() + fb.color_count() <= secret.len());
        }
    }

    #[test]
    fn test_exact_count_is_symmetric() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        for _ in 0..300 {
            let a = Code::generate_random(&ORIGINAL_1P, &mut rng);
            let b = Code::generate_random(&ORIGINAL_1P, &mut rng);
            assert_eq!(
                Feedback::evaluate(&a, &b).exact_count(),
                Feedback::evaluate(&b, &a).exact_count()
            );
        }
    }

    #[test]
    fn test_is_winning_state() {
        let win = Feedback::evaluate(&code("RGLW", &ORIGINAL_1P), &code("RGLW", &ORIGINAL_1P));
        assert!(win.is_winning_state(4));

        let close = Feedback::evaluate(&code("RGLY", &ORIGINAL_1P), &code("RGLW", &ORIGINAL_1P));
        assert_eq!(close.exact_count(), 3);
        assert!(!close.is_winning_state(4));
    }

    #[test]
    fn test_display_exact_before_color() {
        let fb = Feedback::evaluate(&code("RGWL", &ORIGINAL_1P), &code("RGLW", &ORIGINAL_1P));
        assert_eq!(fb.to_string(), "B B W W");
    }

    #[test]
    fn test_display_empty_feedback() {
        let fb = Feedback::evaluate(&code("RRRR", &ORIGINAL_1P), &code("GGGG", &ORIGINAL_1P));
        assert_eq!(fb.to_string(), "Nothing.");
    }

    #[test]
    #[should_panic(expected = "same rule")]
    fn test_mismatched_lengths_panic() {
        let guess = code("RGLW", &ORIGINAL_1P);
        let secret = code("RGLWW", &MASTERMIND44);
        let _ = Feedback::evaluate(&guess, &secret);
    }
}
