mod command;

pub use command::{Command, ParseCommandError};
use std::io::{self, BufRead, Write};

/// Prompts until a line parses as a [`Command`].
///
/// Returns `Ok(None)` once the input is exhausted. Unparseable lines are
/// reported on `output` and the user is asked again.
pub fn prompt_user_for_command<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Command>> {
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let mut prompt = String::new();
        if input.read_line(&mut prompt)? == 0 {
            return Ok(None);
        }
        let prompt = prompt.trim();
        if prompt.is_empty() {
            continue;
        }
        match prompt.parse() {
            Ok(command) => {
                return Ok(Some(command));
            }
            Err(e) => writeln!(output, "could not parse command: {} (try `help`)", e)?,
        }
    }
}
