//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole word per line.

use crate::game::{GameError, GameSession, GuessResult, WordSelector};
use crate::output::{print_board, print_finale, print_keyboard};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// secret word can be selected.
pub fn run_simple<S: WordSelector>(dictionary: &Dictionary, selector: S) -> Result<(), String> {
    let stdin = io::stdin();
    play_lines(dictionary, selector, &mut stdin.lock())
}

/// Play games reading one command or word per line from `input`
///
/// End of input counts as `quit`.
///
/// # Errors
///
/// Returns an error on I/O failure or if the selector cannot produce a secret.
pub fn play_lines<S: WordSelector, R: BufRead>(
    dictionary: &Dictionary,
    selector: S,
    input: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Line Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries. After each guess:\n");
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is in the word elsewhere", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " X ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::start(dictionary, selector).map_err(|e| e.to_string())?;

    loop {
        let prompt = format!("Guess {}", session.guesses_used() + 1);
        let Some(line) = get_user_input(input, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.restart().map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "" => continue,
            word => match play_word(&mut session, word) {
                Ok(_) => {
                    print_board(session.board(), None);
                    print_keyboard(session.key_statuses());
                }
                Err(e) if e.is_fatal() => return Err(e.to_string()),
                Err(e) => {
                    println!("{}\n", format!("❌ {e}").red());
                    continue;
                }
            },
        }

        if let (Some(finale), Some(share)) = (session.finale(), session.share_grid()) {
            print_finale(&finale, &share);

            if play_again(input)? == Flow::Quit {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            session.restart().map_err(|e| e.to_string())?;
            println!("\n🔄 New game started!\n");
        }
    }
}

/// Type `word` into the active row and submit it
///
/// On any error the row is cleared again, so the next line starts fresh.
fn play_word<S: WordSelector>(
    session: &mut GameSession<'_, S>,
    word: &str,
) -> Result<GuessResult, GameError> {
    let result = word
        .chars()
        .try_for_each(|c| session.enter_letter(c))
        .and_then(|()| session.submit_guess());

    if result.is_err() && !session.is_game_over() {
        while session.delete_letter()?.is_some() {}
    }
    result
}

fn play_again<R: BufRead>(input: &mut R) -> Result<Flow, String> {
    match get_user_input(input, "Play again? (yes/no)")?
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => Ok(Flow::Continue),
        _ => Ok(Flow::Quit),
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
