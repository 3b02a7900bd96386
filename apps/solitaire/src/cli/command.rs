//! Player commands and their line syntax.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::rules::TABLEAU_COUNT;
use crate::domain::PileRef;

/// Everything the player can ask for. Column indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Draw,
    ReshuffleStock,
    MoveToFoundation(PileRef),
    MoveWasteToTableau(usize),
    TransferTableau { from: usize, to: usize },
    Undo,
    RedealAll,
    AutoComplete,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Help,
    Quit,
}

impl Command {
    /// Whether executing this command may change the board.
    pub fn changes_board(&self) -> bool {
        matches!(
            self,
            Command::Draw
                | Command::ReshuffleStock
                | Command::MoveToFoundation(_)
                | Command::MoveWasteToTableau(_)
                | Command::TransferTableau { .. }
                | Command::RedealAll
                | Command::AutoComplete
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("no command given, type h for help")]
    Empty,
    #[error("unknown command '{0}', type h for help")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a column, choose 1 to 7")]
    BadColumn(String),
    #[error("too many arguments for '{0}'")]
    TooManyArguments(String),
}

pub const HELP: &str = "\
z draw        draw a card from the stock
r reshuffle   turn the waste back into the stock (-20)
l w | l N     move the waste or column N top card to its foundation (+10)
a N           put the waste card on column N (+2)
m N M         move a run from column N to column M
u undo        take back the last move
n new         collect all cards and deal again (-100)
c complete    play every remaining card to the foundations
s [file]      save the game
o [file]      load a saved game
h help        show this text
q quit        leave the game";

fn column(arg: &str) -> Result<usize, ParseCommandError> {
    arg.parse::<usize>()
        .ok()
        .filter(|n| (1..=TABLEAU_COUNT).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| ParseCommandError::BadColumn(arg.to_string()))
}

fn required<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ParseCommandError> {
    arg.ok_or(ParseCommandError::MissingArgument { command, expected })
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let head = head.to_ascii_lowercase();
        let first = words.next();
        let second = words.next();

        let command = match head.as_str() {
            "z" | "draw" => Command::Draw,
            "r" | "reshuffle" => Command::ReshuffleStock,
            "l" | "lay" => {
                let arg = required(first, "l", "w or a column number")?;
                if arg.eq_ignore_ascii_case("w") {
                    Command::MoveToFoundation(PileRef::Waste)
                } else {
                    Command::MoveToFoundation(PileRef::Tableau(column(arg)?))
                }
            }
            "a" | "add" => Command::MoveWasteToTableau(column(required(
                first,
                "a",
                "a column number",
            )?)?),
            "m" | "move" => {
                let from = column(required(first, "m", "two column numbers")?)?;
                let to = column(required(second, "m", "two column numbers")?)?;
                Command::TransferTableau { from, to }
            }
            "u" | "undo" => Command::Undo,
            "n" | "new" => Command::RedealAll,
            "c" | "complete" => Command::AutoComplete,
            "s" | "save" => Command::Save(first.map(PathBuf::from)),
            "o" | "load" => Command::Load(first.map(PathBuf::from)),
            "h" | "help" | "?" => Command::Help,
            "x" | "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(head)),
        };

        let used = match command {
            Command::TransferTableau { .. } => 2,
            Command::MoveToFoundation(_)
            | Command::MoveWasteToTableau(_)
            | Command::Save(_)
            | Command::Load(_) => 1,
            _ => 0,
        };
        let extra = match used {
            0 => first.is_some(),
            1 => second.is_some(),
            _ => words.next().is_some(),
        };
        if extra {
            return Err(ParseCommandError::TooManyArguments(head));
        }
        Ok(command)
    }
}
