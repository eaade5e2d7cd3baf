use std::str::FromStr;
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Place { tile: u16, slot: u16 },
    Remove { slot: u16 },
    Hint,
    Reset,
    Submit,
    Skip,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Type a command, or `help` to list them")]
    Empty,
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{command}` needs a {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("`{0}` is not a number")]
    BadNumber(String),
    #[error("Too many arguments for `{0}`")]
    TooManyArguments(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CommandError::Empty);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "p" | "place" => {
                let tile = number(parts.next(), "place", "tile number")?;
                let slot = number(parts.next(), "place", "slot number")?;
                Command::Place { tile, slot }
            }
            "r" | "remove" => Command::Remove {
                slot: number(parts.next(), "remove", "slot number")?,
            },
            "h" | "hint" => Command::Hint,
            "reset" => Command::Reset,
            "s" | "submit" => Command::Submit,
            "skip" => Command::Skip,
            "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_owned())),
        };

        if parts.next().is_some() {
            return Err(CommandError::TooManyArguments(command.name()));
        }
        Ok(command)
    }
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Command::Place { .. } => "place",
            Command::Remove { .. } => "remove",
            Command::Hint => "hint",
            Command::Reset => "reset",
            Command::Submit => "submit",
            Command::Skip => "skip",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn number(
    arg: Option<&str>,
    command: &'static str,
    what: &'static str,
) -> Result<u16, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument { command, what })?;
    arg.parse()
        .map_err(|_| CommandError::BadNumber(arg.to_owned()))
}
