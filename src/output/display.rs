//! Display functions for command results

use crate::commands::{ClueEntry, GridView, PuzzleSummary};
use crate::core::Square;
use colored::Colorize;

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

/// Print a puzzle's metadata and clue lists
pub fn print_puzzle_info(summary: &PuzzleSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", or_dash(&summary.title).bright_yellow().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Author:      {}", or_dash(&summary.author));
    println!("   Copyright:   {}", or_dash(&summary.copyright));
    println!("   Version:     {}", or_dash(&summary.version));
    println!("   Size:        {}x{}", summary.cols, summary.rows);
    println!(
        "   Progress:    {}/{} squares filled",
        summary.filled, summary.playable
    );
    let checksums = if summary.checksums_valid {
        "valid".green()
    } else {
        "MISMATCH".red().bold()
    };
    println!("   Checksums:   {checksums}");

    if !summary.notes.is_empty() {
        println!("\n{}", "Notes:".bright_cyan().bold());
        println!("   {}", summary.notes);
    }

    print_clue_list("Across", &summary.across);
    print_clue_list("Down", &summary.down);
}

fn print_clue_list(title: &str, clues: &[ClueEntry]) {
    println!("\n{}", title.bright_cyan().bold());
    for clue in clues {
        println!(
            "   {:>3}. {} {}",
            clue.number,
            clue.text,
            format!("({})", clue.length).bright_black()
        );
    }
}

/// Print a grid with clue numbers
///
/// Each square takes two lines: its number, then its letter.
pub fn print_grid(view: &GridView) {
    if !view.title.is_empty() {
        println!("{}", view.title.bright_yellow().bold());
    }
    for row in &view.rows {
        let mut numbers = String::new();
        let mut letters = String::new();
        for cell in row {
            match cell.square {
                Square::Black => {
                    numbers.push_str(&"████".bright_black().to_string());
                    letters.push_str(&"████".bright_black().to_string());
                }
                square => {
                    let number = cell.number.map_or_else(String::new, |n| n.to_string());
                    numbers.push_str(&format!("{number:<4}").bright_black().to_string());
                    let letter = square.letter().unwrap_or(' ');
                    letters.push_str(&format!(" {letter}  ").bold().to_string());
                }
            }
        }
        println!("{numbers}");
        println!("{letters}");
    }
}
