//! Simple interactive CLI mode
//!
//! Text-based module host without TUI: type `press A B C` to press buttons.

use super::session::Session;
use crate::output::display::{print_board, print_facts, print_press_events};
use crate::puzzle::{Outcome, PressCommand, command::help_message};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Alphabet Buttons - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Press the buttons whose rules apply to this bomb.");
    println!("Type 'press A B C' to press the buttons with those labels.");
    println!("Commands: 'board', 'facts', 'new', 'help', 'quit'\n");
    println!("Seed: {}\n", session.seed());

    print_facts(session.facts());
    print_board(session.puzzle(), false);

    loop {
        let input = get_user_input("Command")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "board" | "b" => print_board(session.puzzle(), false),
            "colors" | "c" => print_board(session.puzzle(), true),
            "facts" | "f" => print_facts(session.facts()),
            "new" | "n" => {
                session.new_puzzle();
                println!("\n🔄 New module {}!\n", session.puzzle().id());
                print_facts(session.facts());
                print_board(session.puzzle(), false);
            }
            "help" | "h" | "?" => {
                println!("  press <labels>  press buttons by label, e.g. 'press a q z'");
                println!("  board / colors  show the buttons (colors adds colorblind labels)");
                println!("  facts           show the bomb");
                println!("  new             start a new module");
                println!("  quit            exit");
                println!("\n  {}\n", help_message(session.puzzle().id().value()));
            }
            "" => {}
            _ => {
                let Some(command) = PressCommand::parse(&input) else {
                    println!("❌ Unknown command! Try 'press A B C' or 'help'\n");
                    continue;
                };

                let events = session.run_command(&command);
                if events.is_empty() {
                    println!("No button has that label.\n");
                    continue;
                }
                print_press_events(&events);

                if events
                    .iter()
                    .any(|e| e.outcome == Outcome::CorrectAndSolved)
                {
                    println!("\n{}", "═".repeat(70).bright_cyan());
                    println!(
                        "{}",
                        "      🎉 ✨  M O D U L E   D I S A R M E D !  ✨ 🎉      "
                            .bright_green()
                            .bold()
                    );
                    println!("{}", "═".repeat(70).bright_cyan());
                    println!(
                        "\n  Strikes: {}\n",
                        session.strikes().to_string().bright_yellow().bold()
                    );

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session.new_puzzle();
                            println!("\n🔄 New module {}!\n", session.puzzle().id());
                            print_facts(session.facts());
                            print_board(session.puzzle(), false);
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                } else {
                    println!("Strikes: {}\n", session.strikes());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
