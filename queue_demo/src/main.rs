mod args;
mod session;

use args::Args;
use clap::Parser;
use prompt::prompt_user_for_command;
use session::{demo_script, Outcome, Session, SessionError};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();
    tracing::debug!(?args, "starting");

    let mut session = Session::with_capacity(args.capacity)?;
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    if args.interactive {
        run_interactive(&mut session, &mut stdout)?;
    } else {
        for command in demo_script() {
            report(&mut stdout, session.apply(command))?;
        }
    }
    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&session.snapshot())?)?;
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_interactive(session: &mut Session, stdout: &mut StandardStream) -> io::Result<()> {
    writeln!(stdout, "{}", prompt::Command::HELP)?;
    let mut input = io::stdin().lock();
    while let Some(command) = prompt_user_for_command(&mut input, stdout)? {
        let result = session.apply(command);
        let quit = matches!(result, Ok(Outcome::Quit));
        report(stdout, result)?;
        if quit {
            break;
        }
    }
    Ok(())
}

fn report(stdout: &mut StandardStream, result: Result<Outcome, SessionError>) -> io::Result<()> {
    match result {
        Ok(outcome) => writeln!(stdout, "{outcome}"),
        Err(e) => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(stdout, "{e}")?;
            stdout.reset()
        }
    }
}
