//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use super::{GameOptions, now_ms};
use crate::core::{Roster, Schema};
use crate::error::GameError;
use crate::game::{GameSession, GameStatus};
use crate::output::{print_feedback_row, print_legend};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What the player chose at the end of a game
enum Next {
    PlayAgain,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// roster is empty.
pub fn run_simple(roster: &Roster, schema: &Schema, options: &GameOptions) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Iteradle - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess today's person! Type a name (or email) from the roster.");
    println!("Every guess shows how each attribute compares:\n");
    print_legend();
    println!("\nCommands: 'hint' for a hint, 'share' for your result, 'quit' to exit\n");

    loop {
        match play_one(roster, schema, options)? {
            Next::PlayAgain => println!("\n🔄 New game started!\n"),
            Next::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn play_one(roster: &Roster, schema: &Schema, options: &GameOptions) -> Result<Next> {
    let target = options.pick_target(roster)?;
    let mut session = GameSession::new(roster, schema, target, options.limits, Some(now_ms()));

    while !session.status().is_over() {
        let turn = session.guesses().len() + 1;
        let prompt = format!("Guess {turn}/{}", options.limits.max_guesses);
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Next::Quit),
            "hint" | "h" => match session.take_hint() {
                Ok(hint) => println!(
                    "💡 {} {}\n",
                    hint.bright_yellow(),
                    format!("({} left)", session.hints_left()).bright_black()
                ),
                Err(e) => println!("❌ {e}\n"),
            },
            "share" => println!("Finish the game first!\n"),
            "" => {}
            _ => {
                let resolved = roster.resolve(&input);
                match session.submit_guess(&input, Some(now_ms())) {
                    Ok(result) => {
                        if resolved.is_none() {
                            println!("{}", "Nobody by that name - that costs a guess!".yellow());
                        }
                        print_feedback_row(schema, resolved, result);
                        println!();
                    }
                    Err(GameError::BlankGuess) => {}
                    Err(e) => println!("❌ {e}\n"),
                }
            }
        }
    }

    print_game_over(&session);

    loop {
        match get_user_input("Play again? (yes/no/share)")?
            .to_lowercase()
            .as_str()
        {
            "share" | "s" => {
                if let Some(text) = session.share_text(options.date, options.glyphs) {
                    println!("\n{text}\n");
                }
            }
            "yes" | "y" => return Ok(Next::PlayAgain),
            _ => return Ok(Next::Quit),
        }
    }
}

fn print_game_over(session: &GameSession<'_>) {
    let name = session.target().name();
    let tries = session.guesses().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    if session.status() == GameStatus::Won {
        println!(
            "{}",
            "    🎉 🎊 ✨  Y O U   G O T   I T !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );
        println!(
            "\n  It was {} - found in {} {}",
            name.bright_white().bold(),
            tries.to_string().bright_cyan().bold(),
            if tries == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("{}", "    💀  G A M E   O V E R  💀    ".bright_red().bold());
        println!("\n  The answer was {}", name.bright_white().bold());
    }
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
