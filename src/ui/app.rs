use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};
use serde::{Deserialize, Serialize};

use crate::config::GameMode;
use crate::error::PlayError;
use crate::game::{GameState, Player};
use crate::players::{BotConfig, HeuristicBot, HumanInput, LineSource, MoveSource, SharedStdin};

use super::render;

/// Console presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clear the terminal before drawing each frame.
    pub clear_screen: bool,
    /// Mark the current player's legal moves with `*`.
    pub show_hints: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            clear_screen: true,
            show_hints: true,
        }
    }
}

/// Build the pair of move sources for a mode. Black is always a human
/// seat; White is a second human or the bot.
pub fn sources_for_mode(
    mode: GameMode,
    bot: &BotConfig,
) -> (Box<dyn MoveSource>, Box<dyn MoveSource>) {
    let black: Box<dyn MoveSource> = Box::new(HumanInput::new(SharedStdin::new(), io::stdout()));
    let white: Box<dyn MoveSource> = match mode {
        GameMode::HumanVsHuman => Box::new(HumanInput::new(SharedStdin::new(), io::stdout())),
        GameMode::HumanVsBot => Box::new(HeuristicBot::from_config(bot)),
    };
    (black, white)
}

/// Show the mode menu and keep asking until a valid selection is entered.
pub fn prompt_mode<R: LineSource, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<GameMode, PlayError> {
    writeln!(writer, "Select Game Mode:")?;
    writeln!(writer, "1. Player vs Player")?;
    writeln!(writer, "2. Player vs Bot")?;

    loop {
        write!(writer, "Enter mode (1 or 2): ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }

        match line.trim() {
            "1" => return Ok(GameMode::HumanVsHuman),
            "2" => return Ok(GameMode::HumanVsBot),
            _ => writeln!(writer, "Invalid selection. Please enter 1 or 2.")?,
        }
    }
}

/// The game loop: draws frames, pulls moves from the sources, and applies
/// them until the game reaches a terminal state.
pub struct App {
    state: GameState,
    display: DisplayConfig,
    black: Box<dyn MoveSource>,
    white: Box<dyn MoveSource>,
    status: Option<String>,
}

impl App {
    pub fn new(
        display: DisplayConfig,
        black: Box<dyn MoveSource>,
        white: Box<dyn MoveSource>,
    ) -> Self {
        App {
            state: GameState::initial(),
            display,
            black,
            white,
            status: None,
        }
    }

    /// Main application loop
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), PlayError> {
        loop {
            self.draw(out)?;

            if let Some(outcome) = self.state.outcome() {
                write!(out, "{}", render::game_over_text(self.state.score(), outcome))?;
                out.flush()?;
                return Ok(());
            }

            let mover = self.state.current_player();
            let source = match mover {
                Player::Black => self.black.as_mut(),
                Player::White => self.white.as_mut(),
            };
            let coord = source.next_move(&self.state)?;

            match self.state.apply_move_mut(coord) {
                Ok(flipped) => {
                    self.status = Some(format!(
                        "{} played {}, flipping {}.",
                        mover.glyph(),
                        coord,
                        flipped
                    ));
                }
                // Sources only hand out legal moves, but a rejection must
                // not corrupt the game: report it and prompt again.
                Err(_) => {
                    self.status = Some("Invalid move. Please try again.".to_string());
                }
            }
        }
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> Result<(), PlayError> {
        if self.display.clear_screen {
            execute!(
                out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        write!(out, "{}", render::board_text(&self.state, self.display.show_hints))?;
        if let Some(status) = self.status.take() {
            writeln!(out, "{status}")?;
        }
        out.flush()?;
        Ok(())
    }
}
