//! User-facing text. The game flow owns the wording; the core types only
//! report error kinds and counts.

pub const WELCOME: &str = "Welcome to Mastermind!";

pub const GAME_OPTIONS: &str = "Select which game you want to play:\n   \
    (A) Original Mastermind for 2 Players\n   \
    (B) Original Mastermind for 1 Player\n   \
    (C) Mastermind44 for 4 Players\n\
    *Enter A, B, or C to continue*";

pub const INVALID_SELECTION: &str = "Invalid selection.";

pub const PLAY_OR_QUIT: &str =
    "What would you like to do?\n   (p)lay the game again\n   (q)uit";

pub const GOODBYE: &str = "Goodbye!";

pub const FINAL_CODE_ENTER: &str = "Enter the code now:";
pub const FINAL_CODE_REENTER: &str = "Enter the same code again:";
pub const FINAL_CODE_STORED: &str = "The code was stored.\n";
pub const REENTER_MISMATCH: &str = "The re-entered code does not match.";

pub const MASTERMIND44_START_GUESSING: &str = "Each player can now start to guess the code.";

pub const REVEAL_CLEAR_SCREEN: &str = "Press <enter> to clear the screen";

pub fn player_name_prompt(player_number: usize) -> String {
    format!("Player {player_number}: What is your name?")
}

pub fn unparsable_code(code_length: usize, allow_blank: bool) -> String {
    let blank = if allow_blank { "_, " } else { "" };
    format!(
        "This attempt is incorrect. You must provide exactly {code_length} characters \
         and they can only be {blank}R, L, G, Y, W or B."
    )
}

pub fn original_start_guessing(player_name: &str, code_length: usize) -> String {
    format!(
        "Welcome {player_name}. You can now start to play by guessing the code.\n\
         Enter a guess by providing {code_length} characters and press Enter."
    )
}

pub fn attempt_header(round: u32) -> String {
    format!("Attempt #{round}: ")
}

pub fn attempt_feedback(round: u32) -> String {
    format!("Feedback on Attempt #{round}: ")
}

pub fn player_turn(player_name: &str, round: u32, code_length: usize) -> String {
    format!(
        "{player_name}, Attempt #{round}: Enter {code_length} colours using \
         (R)ed, b(L)ue, (G)reen, (Y)ellow, (W)hite, or (B)lack:"
    )
}

pub fn player_attempt_feedback(player_name: &str, round: u32) -> String {
    format!("Feedback on {player_name}, Attempt #{round}: ")
}

pub fn correct_attempt(who: &str, attempts: u32) -> String {
    format!("\nCongratulations! {who} broke the code in {attempts} attempts.")
}

pub fn game_over(max_attempts: u32, final_code: &str) -> String {
    format!("\nExceeded {max_attempts} attempts. Game over! The correct code was {final_code}")
}

pub fn code_maker_guide_2p(
    code_maker_name: &str,
    code_breaker_name: &str,
    code_length: usize,
) -> String {
    format!(
        "Welcome {code_maker_name}, you need to create a code that consists of \
         {code_length} pegs. Each peg can be of the colour (R)ed, b(L)ue, (G)reen, \
         (Y)ellow, (W)hite, or (B)lack. Specify the code with {code_length} characters \
         where each character indicates a colour as above. For example, WWRG \
         represents the code White-White-Red-Green. You need to enter the code \
         twice. {code_breaker_name} must not watch the screen while you type."
    )
}

pub const CODE_MAKER_GUIDE_1P: &str =
    "The computer will create the secret code that consists of four pegs. Each peg \
     can be of the colour (R)ed, b(L)ue, (G)reen, (Y)ellow, (W)hite, or (B)lack.";

pub const CODE_MAKER_GUIDE_44: &str =
    "Welcome to Mastermind44! The computer will create the secret code and reveal \
     four of the five positions one-by-one individually to each player. During \
     each reveal only the requested player should look at the screen. Pegs can be \
     (R)ed, b(L)ue, (G)reen, (Y)ellow, (W)hite, (B)lack, or blank (_).";

pub fn reveal_ready(player_name: &str) -> String {
    format!(
        "Player {player_name}: When you are ready for one position of the code \
         to be revealed on the screen press <enter>."
    )
}

pub fn reveal_position(position: usize, color: char) -> String {
    format!("Position: {position} Colour: {color}")
}
