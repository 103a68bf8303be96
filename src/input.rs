// Line input for the interactive shell
// Each line is translated into a navigator message or a shell command

use crate::error::{ConfigError, InputError};
use crate::message::Message;
use crate::model::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Message(Message),
    Status,
    History,
    Help,
    Quit,
    Nothing,
}

pub const HELP: &str = "\
commands:
  go <view>      navigate to a view
  next | prev    move through views in order
  home           jump to the default view
  back | forward move through history
  key <name>     press a key (ArrowRight, ArrowLeft, Home, b, ...)
  pop [view]     deliver a history pop carrying an optional view
  status         show the active view and observers
  history        list history entries
  help           show this text
  quit           leave";

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(Command::Nothing);
    };
    let arg = parts.next();

    let command = match word {
        "go" | "navigate" => {
            let view = arg.ok_or(InputError::MissingArgument("go"))?;
            Command::Message(Message::Navigate(view.trim_start_matches('#').to_string()))
        }
        "next" | "n" => Command::Message(Message::Next),
        "prev" | "previous" | "p" => Command::Message(Message::Previous),
        "home" => Command::Message(Message::Home),
        "back" | "b" => Command::Message(Message::Back),
        "forward" | "f" => Command::Message(Message::Forward),
        "key" => {
            let name = arg.ok_or(InputError::MissingArgument("key"))?;
            let key = Key::parse(name).map_err(|e| match e {
                ConfigError::InvalidKey(name) => InputError::UnknownKey(name),
                other => InputError::UnknownKey(other.to_string()),
            })?;
            Command::Message(Message::KeyPressed(key))
        }
        "pop" => Command::Message(Message::PopState(arg.map(String::from))),
        "status" | "s" => Command::Status,
        "history" | "h" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}
