use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// One line of input to the interactive queue session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Enqueue(i32),
    Dequeue,
    Peek,
    Show,
    Insert { value: i32, priority: i32 },
    ExtractMin,
    PeekMin,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("no command given")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` expects a {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid {argument} `{text}`: {source}")]
    InvalidInteger {
        argument: &'static str,
        text: String,
        source: ParseIntError,
    },
    #[error("`{command}` takes no further arguments, got `{extra}`")]
    TrailingArgument { command: &'static str, extra: String },
}

impl Command {
    pub const HELP: &'static str = "\
enqueue <value>           add to the circular queue (alias: enq)
dequeue                   remove the oldest value (alias: deq)
peek                      show the oldest value
show                      print the circular queue (alias: print)
insert <value> <priority> add to the priority queue, lower priority first
extract                   remove the lowest priority entry (alias: extract-min)
peek-min                  show the lowest priority entry
help                      print this text
quit                      leave the session (alias: exit)";
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let keyword = words.next().ok_or(ParseCommandError::Empty)?;
        let (name, command) = match keyword.to_ascii_lowercase().as_str() {
            "enqueue" | "enq" => ("enqueue", Command::Enqueue(integer(&mut words, "enqueue", "value")?)),
            "dequeue" | "deq" => ("dequeue", Command::Dequeue),
            "peek" => ("peek", Command::Peek),
            "show" | "print" => ("show", Command::Show),
            "insert" => {
                let value = integer(&mut words, "insert", "value")?;
                let priority = integer(&mut words, "insert", "priority")?;
                ("insert", Command::Insert { value, priority })
            }
            "extract" | "extract-min" => ("extract", Command::ExtractMin),
            "peek-min" => ("peek-min", Command::PeekMin),
            "help" => ("help", Command::Help),
            "quit" | "exit" => ("quit", Command::Quit),
            _ => return Err(ParseCommandError::Unknown(keyword.to_owned())),
        };
        if let Some(extra) = words.next() {
            return Err(ParseCommandError::TrailingArgument {
                command: name,
                extra: extra.to_owned(),
            });
        }
        Ok(command)
    }
}

fn integer<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<i32, ParseCommandError> {
    let text = words
        .next()
        .ok_or(ParseCommandError::MissingArgument { command, argument })?;
    text.parse()
        .map_err(|source| ParseCommandError::InvalidInteger {
            argument,
            text: text.to_owned(),
            source,
        })
}
