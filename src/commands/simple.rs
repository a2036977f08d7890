//! Simple interactive CLI mode
//!
//! Line-oriented game loop without the TUI: type a word to submit it, or a
//! dot-command for everything else.

use crate::output::formatters::{letter_row, score_bar};
use crate::output::print_outcome;
use crate::session::{Session, WordStore};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: WordStore>(session: &mut Session<'_, S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spelling Bee - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words from the letters below. Every word must:");
    println!("  - be at least 4 letters long");
    println!("  - use the center letter (shown in brackets)");
    println!("  - use only the available letters (repeats allowed)\n");
    println!("Commands: .found  .tiers  .shuffle  .help  .quit\n");

    print_board(session);

    loop {
        let input = match get_user_input("word")? {
            Some(line) => line,
            None => break, // EOF
        };

        match input.as_str() {
            "" => continue,
            ".quit" | ".q" | ".exit" => break,
            ".help" | ".h" => {
                println!("Type a word to submit it.");
                println!("  .found    list words you have found");
                println!("  .tiers    show the tier ladder");
                println!("  .shuffle  rearrange the letters");
                println!("  .quit     leave the game\n");
            }
            ".found" | ".f" => {
                if session.found().is_empty() {
                    println!("Nothing found yet.\n");
                } else {
                    for word in session.found() {
                        println!("  • {word}");
                    }
                    println!();
                }
            }
            ".tiers" | ".t" => {
                let score = session.score();
                for tier in session.puzzle().tiers().iter().rev() {
                    let marker = if score >= tier.threshold { "✓" } else { " " };
                    println!("  {marker} {:<12} {:>4}", tier.title, tier.threshold);
                }
                println!();
            }
            ".shuffle" | ".s" => {
                print_board(session);
            }
            word if word.starts_with('.') => {
                println!("Unknown command '{word}'. Try .help\n");
            }
            word => {
                let outcome = session.submit_word(word);
                print_outcome(&outcome);

                if outcome.is_accepted() {
                    print_score(session);

                    if session.found().len() == session.puzzle().word_count() {
                        println!("\n🎉 You found every word! 🎉\n");
                        break;
                    }
                }
                println!();
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_board<S: WordStore>(session: &Session<'_, S>) {
    // Fresh random arrangement each time, center pinned to the middle
    let display_seed = rand::random::<f64>().to_string();
    let order = session
        .puzzle()
        .display_order(&display_seed)
        .unwrap_or_else(|_| session.puzzle().letters().letters().to_vec());

    println!("  {}\n", letter_row(&order, session.puzzle().center()));
    print_score(session);
    println!();
}

fn print_score<S: WordStore>(session: &Session<'_, S>) {
    let score = session.score();
    let max = session.puzzle().max_score();
    println!(
        "Score: {score}/{max} ({}) [{}]  {} of {} words",
        session.title(),
        score_bar(score, max, 20),
        session.found().len(),
        session.puzzle().word_count()
    );
}

/// Get user input with a prompt; `None` on EOF
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}
