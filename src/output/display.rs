//! Display functions for line-mode play and command results

use super::formatters::{KEYBOARD_ROWS, colored_tile, create_progress_bar};
use crate::commands::{ScoreResult, SimulationResult};
use crate::game::{Board, Finale, KeyStatusMap, MAX_GUESSES};
use colored::Colorize;

/// Print the played rows of the board, plus the row being typed
pub fn print_board(board: &Board, active_row: Option<usize>) {
    for (i, row) in board.rows().enumerate() {
        let scored = row.iter().all(|cell| cell.status().is_some());
        if !scored && Some(i) != active_row {
            continue;
        }

        let tiles: Vec<String> = row
            .iter()
            .map(|cell| colored_tile(cell.letter().unwrap_or('_'), cell.status()).to_string())
            .collect();
        println!("  {}", tiles.join(" "));
    }
}

/// Print the keyboard with each letter colored by its best status
pub fn print_keyboard(keys: &KeyStatusMap) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| colored_tile(c, keys.get(c)).to_string())
            .collect();
        println!("{}{}", "  ".repeat(indent + 1), keys.join(""));
    }
    println!();
}

/// Print the end of a game
pub fn print_finale(finale: &Finale, share: &str) {
    println!();
    if finale.won {
        println!("{}", "🎉 You Win!".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ Game Over! Word was {}", finale.secret).red().bold()
        );
    }
    println!("\n{share}\n");
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    let tiles: Vec<String> = result
        .guess
        .to_string()
        .chars()
        .zip(result.feedback.statuses())
        .map(|(c, &status)| colored_tile(c, Some(status)).to_string())
        .collect();

    println!(
        "\n{} vs {}",
        result.guess.to_string().bright_white().bold(),
        result.secret.to_string().bright_yellow().bold()
    );
    println!("  {}", tiles.join(" "));
    println!("  {}", result.feedback.to_emoji());

    let names: Vec<&str> = result.feedback.statuses().iter().map(|s| s.name()).collect();
    println!("  {}", names.join(" "));

    if !result.in_dictionary {
        println!(
            "{}",
            format!("  note: {} is not in the word list", result.guess).yellow()
        );
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Losses:           {}", result.losses());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_GUESSES {
        let count = result.distribution[guess_count - 1];
        let pct = if result.total_games == 0 {
            0.0
        } else {
            count as f64 / result.total_games as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        let words: Vec<String> = result.hardest.iter().take(10).map(ToString::to_string).collect();
        println!("\n❌ {} {}", "Missed:".red().bold(), words.join(", "));
    }
}
