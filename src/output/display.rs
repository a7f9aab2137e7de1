//! Display functions for command results

use super::formatters::{button_face, create_progress_bar, describe_event};
use crate::commands::{SolveResult, SurveyResult};
use crate::core::{Letter, Slot};
use crate::facts::{BombFacts, BombInfo};
use crate::puzzle::{Outcome, PressEvent, Puzzle};
use colored::Colorize;

/// Buttons per row on the module face, top to bottom
pub const BOARD_ROWS: [usize; 4] = [7, 7, 6, 6];

/// Print the module's buttons, marking pressed ones
pub fn print_board(puzzle: &Puzzle, colorblind: bool) {
    println!(
        "\n{} {}",
        "Module".bright_cyan().bold(),
        puzzle.id().to_string().bright_yellow()
    );

    let mut slot_iter = Slot::ALL.into_iter();
    for width in BOARD_ROWS {
        let mut line = String::from("  ");
        for slot in slot_iter.by_ref().take(width) {
            let face = button_face(
                puzzle.letter_at(slot).to_char(),
                puzzle.color_at(slot),
                colorblind,
            );
            if puzzle.state().is_pressed(slot) {
                line.push_str(&format!("{} ", face.strikethrough().dimmed()));
            } else {
                line.push_str(&format!("{face} "));
            }
        }
        println!("{line}");
    }

    println!(
        "  Pressed: {}/{}\n",
        puzzle.state().pressed_count(),
        puzzle.solution().count()
    );
}

/// Print the bomb's widgets
pub fn print_facts(facts: &BombFacts) {
    println!("{}", "Bomb".bright_cyan().bold());
    println!(
        "  Serial:     {}",
        facts.serial_number().as_str().bright_yellow().bold()
    );
    println!(
        "  Batteries:  {} in {} holder(s)",
        facts.battery_count(),
        facts.battery_holder_count()
    );

    if facts.indicators.is_empty() {
        println!("  Indicators: none");
    } else {
        let indicators: Vec<String> = facts
            .indicators
            .iter()
            .map(|i| {
                if i.lit {
                    format!("*{}", i.label)
                } else {
                    i.label.clone()
                }
            })
            .collect();
        println!("  Indicators: {} (* = lit)", indicators.join(" "));
    }

    if facts.port_plates.is_empty() {
        println!("  Ports:      none");
    } else {
        let plates: Vec<String> = facts
            .port_plates
            .iter()
            .map(|plate| {
                if plate.is_empty() {
                    "[empty]".to_string()
                } else {
                    let names: Vec<&str> = plate.ports().iter().map(|p| p.name()).collect();
                    format!("[{}]", names.join(", "))
                }
            })
            .collect();
        println!("  Ports:      {}", plates.join(" "));
    }
}

/// Print press outcomes, one per line
pub fn print_press_events(events: &[PressEvent]) {
    for event in events {
        let text = describe_event(event);
        let line = match event.outcome {
            Outcome::Incorrect => format!("✗ {text}").red(),
            _ if event.repeat => format!("• {text}").bright_black(),
            Outcome::Correct => format!("✓ {text}").green(),
            Outcome::CorrectAndSolved => format!("✓ {text}").bright_green().bold(),
        };
        println!("  {line}");
    }
}

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Seed: {}",
        result.seed.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_facts(&result.facts);
    print_board(&result.puzzle, verbose);

    if verbose {
        println!("{}", "Rules".bright_cyan().bold());
        for verdict in &result.verdicts {
            let mark = if verdict.holds {
                "✓".green()
            } else {
                "·".bright_black()
            };
            println!("  {mark} {}: {}", verdict.letter, verdict.description);
        }
        println!();
    }

    let solution = result.puzzle.solution();
    if let Some(letter) = solution.fallback() {
        println!(
            "No rule applies; falling back to the serial number's first letter {}.",
            letter.to_string().bright_yellow()
        );
    }
    println!(
        "{} {}",
        "Press:".bright_cyan().bold(),
        solution.describe().bright_green().bold()
    );

    if !result.events.is_empty() {
        println!();
        print_press_events(&result.events);
        println!("  Strikes: {}", result.strikes);
        if result.puzzle.is_solved() {
            println!("{}", "✅ Module solved!".green().bold());
        }
    }
}

/// Print aggregate survey statistics
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    println!("   Base seed:        {}", result.base_seed);
    println!(
        "   Average presses:  {}",
        format!("{:.2}", result.average_size).bright_yellow().bold()
    );
    println!(
        "   Fewest / most:    {} / {}",
        result.min_size.to_string().green(),
        result.max_size.to_string().yellow()
    );
    println!(
        "   Fallback rate:    {:.1}%",
        result.fallback_rate() * 100.0
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.total_puzzles == 0 {
        return;
    }

    println!("\n📈 {}", "Solution sizes:".bright_cyan().bold());
    let mut sizes: Vec<_> = result.size_distribution.iter().collect();
    sizes.sort_unstable_by_key(|(size, _)| **size);
    for (size, &count) in sizes {
        let pct = (count as f64 / result.total_puzzles as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {size:2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }

    println!("\n🔤 {}", "Rule hit rates:".bright_cyan().bold());
    for letter in Letter::ALL {
        let pct = result.hit_rate(letter) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 30);
        println!("   {letter}: {} {pct:5.1}%", bar.cyan());
    }
}
