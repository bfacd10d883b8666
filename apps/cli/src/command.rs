//! Line commands understood by the terminal driver.

use anyhow::{anyhow, bail, Context, Result};
use undo_core::Key;

pub const HELP: &str = "\
commands:
  add <text>         append an item
  draft <text>       type into the header input
  submit             press Enter in the header input
  type <i> [text]    replace row i's text (empty text clears it)
  enter <i>          press Enter in row i
  key <i> <name>     release another key in row i
  blur <i>           move focus away from row i
  del <i>            delete row i
  show               print the list
  help               print this help
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Draft(String),
    Submit,
    Type { index: usize, text: String },
    KeyUp { index: usize, key: Key },
    Blur(usize),
    Delete(usize),
    Show,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Command> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    let command = match verb {
        "add" => Command::Add(rest.to_string()),
        "draft" => Command::Draft(rest.to_string()),
        "submit" => Command::Submit,
        "type" => {
            let (index, text) = match rest.split_once(' ') {
                Some((index, text)) => (index, text),
                None => (rest, ""),
            };
            Command::Type {
                index: parse_index(index)?,
                text: text.to_string(),
            }
        }
        "enter" => Command::KeyUp {
            index: parse_index(rest)?,
            key: Key::Enter,
        },
        "key" => {
            let (index, name) = rest
                .split_once(' ')
                .ok_or_else(|| anyhow!("usage: key <i> <name>"))?;
            Command::KeyUp {
                index: parse_index(index)?,
                key: Key::from_name(name.trim()),
            }
        }
        "blur" => Command::Blur(parse_index(rest)?),
        "del" | "delete" => Command::Delete(parse_index(rest)?),
        "show" | "" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(command)
}

fn parse_index(raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .with_context(|| format!("expected a row index, got '{}'", raw.trim()))
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
