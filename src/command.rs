use std::str::{FromStr, SplitWhitespace};

use crate::error::ParseError;
use crate::{Address, Word};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Read(Address),
    Write(Address, Word),
    DisplayCache,
    DisplayCacheDelay(u64), // milliseconds between printed rows
    DisplayRam,
    Wait,
}

impl Command {
    // None for lines with nothing to do: blanks and `#` comments.
    pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Read(_) => "R",
            Command::Write(..) => "W",
            Command::DisplayCache => "DISPLAYCACHE",
            Command::DisplayCacheDelay(_) => "DISPLAYCACHEDELAY",
            Command::DisplayRam => "DISPLAYRAM",
            Command::Wait => "WAIT",
        }
    }
}

fn operand<T: FromStr>(words: &mut SplitWhitespace<'_>, command: &'static str, name: &'static str) -> Result<T, ParseError> {
    let text = words.next().ok_or(ParseError::MissingOperand { command, operand: name })?;
    text.parse().map_err(|_| ParseError::BadOperand {
        command,
        operand: name,
        text: text.to_string(),
    })
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let keyword = words.next().ok_or(ParseError::Empty)?;
        let command = match keyword {
            "R" => Command::Read(operand(&mut words, "R", "address")?),
            "W" => {
                let address = operand(&mut words, "W", "address")?;
                Command::Write(address, operand(&mut words, "W", "value")?)
            },
            "DISPLAYCACHE" => Command::DisplayCache,
            "DISPLAYCACHEDELAY" => Command::DisplayCacheDelay(operand(&mut words, "DISPLAYCACHEDELAY", "delay")?),
            "DISPLAYRAM" => Command::DisplayRam,
            "WAIT" => Command::Wait,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(ParseError::Trailing {
                command: command.keyword(),
                text: rest.join(" "),
            });
        }
        Ok(command)
    }
}
