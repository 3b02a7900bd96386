//! Line-based play loop: paint the board, read a command, run it.

use std::io::{BufRead, Write};
use std::thread;

use tracing::{debug, warn};

use super::command::Command;
use super::session::GameSession;
use crate::error::AppError;
use crate::render::{paint, BoardView, Screen};

pub const PROMPT: &str = "> ";
pub const CONFIRM_REDEAL: &str = "Collect all cards and deal again for -100 points? [y/n] ";

/// Play until the player quits or the input ends.
pub fn run<R, W>(session: &mut GameSession, mut input: R, output: &mut W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let config = session.config().clone();
    let mut screen = Screen::new(config.screen_width, config.screen_height);
    let mut status = "type h for help".to_string();
    let mut notes: Option<String> = None;

    loop {
        draw_frame(&mut screen, session, &status, output)?;
        if let Some(text) = notes.take() {
            writeln!(output, "{text}")?;
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            debug!("input closed");
            break;
        };
        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(e) => {
                status = e.to_string();
                continue;
            }
        };

        if command == Command::RedealAll && !confirm(&mut input, output)? {
            status = "kept the current deal".to_string();
            continue;
        }

        let result = if command == Command::AutoComplete {
            session.auto_complete_with(|state| {
                let view = BoardView {
                    board: state.board(),
                    turn: state.turn(),
                    status: "playing to the foundations...",
                };
                paint(&mut screen, &view)?;
                writeln!(output, "{}", screen.render())?;
                output.flush()?;
                if !config.autoplay_frame.is_zero() {
                    thread::sleep(config.autoplay_frame);
                }
                Ok(())
            })
        } else {
            session.execute(command)
        };

        match result {
            Ok(outcome) => {
                if outcome.message.contains('\n') {
                    notes = Some(outcome.message);
                    status.clear();
                } else {
                    status = outcome.message;
                }
                if outcome.won {
                    status = format!(
                        "You won with {} points! n deals again, q quits",
                        session.state().current_score()
                    );
                }
                if outcome.quit {
                    writeln!(output, "{status}")?;
                    break;
                }
            }
            Err(AppError::Domain(e)) => status = e.to_string(),
            Err(e @ AppError::Io { .. }) => {
                warn!(error = %e, "command failed");
                status = e.to_string();
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn draw_frame<W: Write>(
    screen: &mut Screen,
    session: &GameSession,
    status: &str,
    output: &mut W,
) -> Result<(), AppError> {
    let state = session.state();
    let view = BoardView {
        board: state.board(),
        turn: state.turn(),
        status,
    };
    paint(screen, &view)?;
    writeln!(output, "{}", screen.render())?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool, AppError> {
    write!(output, "{CONFIRM_REDEAL}")?;
    output.flush()?;
    Ok(read_line(input)?.is_some_and(|answer| {
        matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes" | "j" | "ja")
    }))
}
