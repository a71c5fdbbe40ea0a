//! Shows which game actions the terminal reports as held.
//!
//! Useful for checking key release support before playing. Hold `q` to exit.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::terminal;

use not_flappy_bird::core::InputPort;
use not_flappy_bird::input::TerminalInput;
use not_flappy_bird::types::{GameAction, PHYSICS_PERIOD_MS};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut input = TerminalInput::new();
    let result = run(&mut input);
    let _ = input.exit();
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn run(input: &mut TerminalInput) -> Result<()> {
    input.enter()?;
    let mut stdout = io::stdout();
    write!(
        stdout,
        "release events: {}\r\n",
        if input.reports_releases() { "yes" } else { "no (timeout)" }
    )?;

    loop {
        input.refresh()?;
        let held: Vec<&str> = GameAction::ALL
            .iter()
            .filter(|&&a| input.is_held(a))
            .map(|a| a.as_str())
            .collect();
        write!(stdout, "\r\x1b[2Kheld: {}", held.join(" "))?;
        stdout.flush()?;

        if input.is_held(GameAction::Quit) {
            return Ok(());
        }
        std::thread::sleep(Duration::from_millis(PHYSICS_PERIOD_MS));
    }
}
