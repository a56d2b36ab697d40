use crate::cli;
use crate::code::Code;
use crate::messages;
use crate::player::{CodeBreaker, CodeMaker};
use crate::rule::{self, GameRule};
use crossterm::{cursor, execute, terminal};
use log::{debug, info};
use rand::Rng;
use std::io::{self, BufRead};

/// The three playable rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Original2P,
    Original1P,
    Mastermind44,
}

impl Variant {
    pub fn rule(self) -> &'static GameRule {
        match self {
            Variant::Original2P => &rule::ORIGINAL_2P,
            Variant::Original1P => &rule::ORIGINAL_1P,
            Variant::Mastermind44 => &rule::MASTERMIND44,
        }
    }

    fn code_maker_guide(self, maker: &CodeMaker, breakers: &[CodeBreaker]) -> String {
        match self {
            Variant::Original2P => messages::code_maker_guide_2p(
                maker.name().unwrap_or_default(),
                breakers[0].name(),
                self.rule().code_length(),
            ),
            Variant::Original1P => messages::CODE_MAKER_GUIDE_1P.to_string(),
            Variant::Mastermind44 => messages::CODE_MAKER_GUIDE_44.to_string(),
        }
    }

    fn start_guessing(self, first_breaker: &CodeBreaker) -> String {
        match self {
            Variant::Original2P | Variant::Original1P => messages::original_start_guessing(
                first_breaker.name(),
                self.rule().code_length(),
            ),
            Variant::Mastermind44 => messages::MASTERMIND44_START_GUESSING.to_string(),
        }
    }
}

/// Run games of the chosen variant until the player declines to continue.
/// Each pass prompts play-or-quit, builds fresh players, produces a secret,
/// runs the variant's pre-game reveal if it has one, then plays guessing
/// rounds to a win or to round exhaustion.
pub fn play<R: BufRead, G: Rng>(variant: Variant, reader: &mut R, rng: &mut G) -> io::Result<()> {
    let rule = variant.rule();
    while prompt_play_again(reader)? {
        let (maker, breakers) = create_players(rule, reader)?;
        println!("{}", variant.code_maker_guide(&maker, &breakers));
        let secret = make_final_code(&maker, rule, reader, rng)?;
        if variant == Variant::Mastermind44 {
            reveal_code(&breakers, &secret, reader, rng)?;
        }
        println!("{}", variant.start_guessing(&breakers[0]));
        run_rounds(variant, rule, &breakers, &secret, reader)?;
    }
    println!("{}", messages::GOODBYE);
    Ok(())
}

fn prompt_play_again<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    println!("{}", messages::PLAY_OR_QUIT);
    loop {
        match cli::prompt_line(reader)?.to_lowercase().as_str() {
            "p" => {
                println!();
                return Ok(true);
            }
            "q" => {
                println!();
                return Ok(false);
            }
            _ => println!("{}", messages::INVALID_SELECTION),
        }
    }
}

fn prompt_player_name<R: BufRead>(player_number: usize, reader: &mut R) -> io::Result<String> {
    println!("{}", messages::player_name_prompt(player_number));
    let name = cli::prompt_line(reader)?;
    println!();
    Ok(name)
}

/// Build the code maker and the rule's number of code breakers. Breakers are
/// numbered from 2 when a human makes the code, since the maker is player 1.
fn create_players<R: BufRead>(
    rule: &GameRule,
    reader: &mut R,
) -> io::Result<(CodeMaker, Vec<CodeBreaker>)> {
    let (maker, mut player_number) = if rule.is_computer_code_maker() {
        (CodeMaker::Computer, 1)
    } else {
        (CodeMaker::Human(prompt_player_name(1, reader)?), 2)
    };
    let mut breakers = Vec::with_capacity(rule.breakers());
    for _ in 0..rule.breakers() {
        breakers.push(CodeBreaker::new(prompt_player_name(player_number, reader)?));
        player_number += 1;
    }
    Ok((maker, breakers))
}

fn make_final_code<R: BufRead, G: Rng>(
    maker: &CodeMaker,
    rule: &GameRule,
    reader: &mut R,
    rng: &mut G,
) -> io::Result<Code> {
    match maker {
        CodeMaker::Computer => {
            let code = Code::generate_random(rule, rng);
            debug!("computer secret code: {code}");
            Ok(code)
        }
        CodeMaker::Human(_) => prompt_final_code(rule, reader),
    }
}

/// A human code maker enters the code twice. Both entries must parse and
/// match character-for-character, otherwise the whole entry restarts.
fn prompt_final_code<R: BufRead>(rule: &GameRule, reader: &mut R) -> io::Result<Code> {
    loop {
        println!("{}", messages::FINAL_CODE_ENTER);
        let first = cli::prompt_line(reader)?;
        let code = match Code::parse(&first, rule) {
            Ok(code) => code,
            Err(e) => {
                debug!("secret code rejected: {e}");
                println!(
                    "{}",
                    messages::unparsable_code(rule.code_length(), rule.allow_blank())
                );
                continue;
            }
        };
        println!("{}", messages::FINAL_CODE_REENTER);
        if cli::prompt_line(reader)? != first {
            println!("{}", messages::REENTER_MISMATCH);
            continue;
        }
        println!("{}", messages::FINAL_CODE_STORED);
        return Ok(code);
    }
}

/// Mastermind44 pre-game phase: each breaker in turn is shown one secret
/// position nobody else has seen, then the screen is cleared before the next
/// player steps up.
fn reveal_code<R: BufRead, G: Rng>(
    breakers: &[CodeBreaker],
    secret: &Code,
    reader: &mut R,
    rng: &mut G,
) -> io::Result<()> {
    let mut positions: Vec<usize> = (0..secret.len()).collect();
    for breaker in breakers {
        println!("{}", messages::reveal_ready(breaker.name()));
        cli::prompt_line(reader)?;
        let position = positions.swap_remove(rng.gen_range(0..positions.len()));
        println!(
            "{}",
            messages::reveal_position(position + 1, secret.pegs()[position].code())
        );
        println!("{}", messages::REVEAL_CLEAR_SCREEN);
        cli::prompt_line(reader)?;
        clear_screen()?;
    }
    Ok(())
}

fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

fn run_rounds<R: BufRead>(
    variant: Variant,
    rule: &GameRule,
    breakers: &[CodeBreaker],
    secret: &Code,
    reader: &mut R,
) -> io::Result<()> {
    for round in 1..=rule.max_attempts() {
        if let Some(winner) = play_round(variant, rule, breakers, secret, round, reader)? {
            let who = match variant {
                Variant::Original2P | Variant::Original1P => "You",
                Variant::Mastermind44 => winner.name(),
            };
            info!("code broken by {who} in round {round}");
            println!("{}", messages::correct_attempt(who, round));
            return Ok(());
        }
    }
    info!("round limit reached without a winner");
    println!(
        "{}",
        messages::game_over(rule.max_attempts(), &secret.to_string())
    );
    Ok(())
}

/// One full round: every breaker gets a guess, in seating order. Returns the
/// first breaker whose feedback is a win, if any.
fn play_round<'a, R: BufRead>(
    variant: Variant,
    rule: &GameRule,
    breakers: &'a [CodeBreaker],
    secret: &Code,
    round: u32,
    reader: &mut R,
) -> io::Result<Option<&'a CodeBreaker>> {
    for breaker in breakers {
        match variant {
            Variant::Original2P | Variant::Original1P => {
                println!("{}", messages::attempt_header(round));
            }
            Variant::Mastermind44 => {
                println!(
                    "{}",
                    messages::player_turn(breaker.name(), round, rule.code_length())
                );
            }
        }
        let attempt = prompt_guess(rule, reader)?;
        let feedback = breaker.guess(&attempt, secret);
        match variant {
            Variant::Original2P | Variant::Original1P => {
                println!("{}{feedback}", messages::attempt_feedback(round));
            }
            Variant::Mastermind44 => {
                println!(
                    "{}{feedback}\n",
                    messages::player_attempt_feedback(breaker.name(), round)
                );
            }
        }
        if feedback.is_winning_state(rule.code_length()) {
            return Ok(Some(breaker));
        }
    }
    Ok(None)
}

/// Keep prompting until the input parses as a code under the rule. Parse
/// failures are recoverable by definition; only reader failures propagate.
fn prompt_guess<R: BufRead>(rule: &GameRule, reader: &mut R) -> io::Result<Code> {
    loop {
        match Code::parse(&cli::prompt_line(reader)?, rule) {
            Ok(code) => return Ok(code),
            Err(e) => {
                debug!("guess rejected: {e}");
                println!(
                    "{}",
                    messages::unparsable_code(rule.code_length(), rule.allow_blank())
                );
            }
        }
    }
}
