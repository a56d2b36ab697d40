use crate::game::Variant;
use crate::messages;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};

/// Mastermind console game options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Game variant to start directly, skipping the selection menu
    #[arg(short, long, value_enum)]
    pub game: Option<GameChoice>,

    /// Seed for the computer code maker's generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameChoice {
    Original2p,
    Original1p,
    Mastermind44,
}

impl From<GameChoice> for Variant {
    fn from(choice: GameChoice) -> Self {
        match choice {
            GameChoice::Original2p => Variant::Original2P,
            GameChoice::Original1p => Variant::Original1P,
            GameChoice::Mastermind44 => Variant::Mastermind44,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Print the `>` prompt and read one trimmed line. A closed reader is an
/// error rather than an empty answer, so scripted input can never spin a
/// re-prompt loop forever.
pub fn prompt_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    print!("> ");
    io::stdout().flush()?;
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while the game was waiting for a line",
        ));
    }
    Ok(input.trim().to_string())
}

/// Show the variant menu and keep prompting until the selection is one of
/// A, B, or C (case-insensitive).
pub fn select_variant<R: BufRead>(reader: &mut R) -> io::Result<Variant> {
    println!("{}", messages::GAME_OPTIONS);
    loop {
        match prompt_line(reader)?.to_lowercase().as_str() {
            "a" => return Ok(Variant::Original2P),
            "b" => return Ok(Variant::Original1P),
            "c" => return Ok(Variant::Mastermind44),
            _ => println!("{}", messages::INVALID_SELECTION),
        }
    }
}
