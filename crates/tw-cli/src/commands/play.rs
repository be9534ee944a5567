//! Interactive REPL for the bundled adventure.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use tw_fiction::{Ending, Line, Narrator, Outcome, Tint};

/// Renders narration to the terminal through `colored`.
struct Terminal;

impl Narrator for Terminal {
    fn say(&mut self, line: &Line) {
        let mut text = match line.tint {
            Some(Tint::Green) => line.text.green(),
            Some(Tint::Red) => line.text.red(),
            None => line.text.normal(),
        };
        if line.emphasis {
            text = text.bold().italic();
        }
        println!("{text}");
    }

    fn end_game(&mut self) {
        println!();
    }
}

pub fn run() -> Result<(), String> {
    let mut session = super::load_story()?;
    let mut narrator = Terminal;

    println!("  {} {}", "Playing".bold(), session.scenario().title);
    println!("  Type 'help' for commands, 'quit' to leave.\n");

    session.start(&mut narrator);
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match session.handle(input, &mut narrator) {
            Outcome::Continue => println!(),
            Outcome::Ended(Ending::Won) => {
                println!("{}", "You won. The journey is complete.".green().bold());
                break;
            }
            Outcome::Ended(Ending::Lost) => {
                println!("{}", "The adventure ends here.".red().bold());
                break;
            }
        }
    }

    Ok(())
}
