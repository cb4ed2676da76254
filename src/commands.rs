// commands.rs

use std::io::{self, Write};

use itertools::Itertools;
use tracing::{debug, info};

use crate::base::Base;
use crate::converter::{convert, Conversion};
use crate::history::History;
use crate::parser::{parse_command, Command};
use crate::util::{write_numbered, writeln_ignore_broken_pipe};
use crate::validator::MAX_LENGTH;

/// What the prompt loop should do after a command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// State behind the prompt: selected bases, last result, and the history.
#[derive(Default, Debug)]
pub struct Session {
    pub from: Option<Base>,
    pub to: Option<Base>,
    pub last: Option<Conversion>,
    pub history: History,
}

impl Session {
    pub fn new(from: Option<Base>, to: Option<Base>) -> Self {
        Self { from, to, last: None, history: History::new() }
    }
}

/// Parse and run one line. Parse and conversion errors are written to `out`
/// and never end the session.
pub fn execute_line<W: Write>(
    line: &str,
    session: &mut Session,
    out: &mut W,
) -> io::Result<Flow> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Flow::Continue);
    }
    match parse_command(line) {
        Ok(command) => run_command(command, session, out),
        Err(e) => {
            debug!(%line, error = %e, "rejected command");
            writeln_ignore_broken_pipe(out, format!("error: {e}"))?;
            Ok(Flow::Continue)
        }
    }
}

/// Run a parsed command. A successful conversion is followed by the numbered
/// history, newest first.
pub fn run_command<W: Write>(
    command: Command,
    session: &mut Session,
    out: &mut W,
) -> io::Result<Flow> {
    match command {
        Command::Convert { number, from, to } => {
            let explicit = from.is_some();
            let from = from.or(session.from.map(Base::radix));
            let to = to.or(session.to.map(Base::radix));
            match convert(&number, from, to, &mut session.history) {
                Ok(conversion) => {
                    writeln_ignore_broken_pipe(&mut *out, conversion.to_string())?;
                    if explicit {
                        session.from = Some(conversion.from);
                        session.to = Some(conversion.to);
                    }
                    session.last = Some(conversion);
                    write_numbered(&mut *out, session.history.list())?;
                }
                Err(e) => {
                    debug!(%number, error = %e, "conversion refused");
                    writeln_ignore_broken_pipe(&mut *out, format!("error: {e}"))?;
                }
            }
        }
        Command::From(base) => {
            session.from = Some(base);
            writeln_ignore_broken_pipe(&mut *out, format!("from base {base}"))?;
        }
        Command::To(base) => {
            session.to = Some(base);
            writeln_ignore_broken_pipe(&mut *out, format!("to base {base}"))?;
        }
        Command::Swap => {
            std::mem::swap(&mut session.from, &mut session.to);
            writeln_ignore_broken_pipe(&mut *out, selection(session))?;
        }
        Command::History(n) => {
            if session.history.is_empty() {
                writeln_ignore_broken_pipe(&mut *out, "history is empty")?;
            } else {
                let n = n.unwrap_or(usize::MAX);
                write_numbered(&mut *out, session.history.list().take(n))?;
            }
        }
        Command::ClearHistory => {
            session.history.clear();
            info!("history cleared");
            writeln_ignore_broken_pipe(&mut *out, "history cleared")?;
        }
        Command::Clear => {
            session.from = None;
            session.to = None;
            session.last = None;
            writeln_ignore_broken_pipe(&mut *out, "fields cleared")?;
        }
        Command::Last => match &session.last {
            Some(conversion) => writeln_ignore_broken_pipe(&mut *out, &conversion.result)?,
            None => writeln_ignore_broken_pipe(&mut *out, "no result yet")?,
        },
        Command::Bases => {
            for base in Base::ALL {
                let line = format!("{:>2}  {}", base, base.allowed());
                writeln_ignore_broken_pipe(&mut *out, line)?;
            }
        }
        Command::Help => writeln_ignore_broken_pipe(&mut *out, help_text())?,
        Command::Exit(code) => return Ok(Flow::Exit(code)),
    }
    Ok(Flow::Continue)
}

/// Convert `number` once, for the non-interactive command line. The display
/// string goes to `out` and errors to `err`. Returns the process exit code.
pub fn run_once<O: Write, E: Write>(
    number: &str,
    from: Option<Base>,
    to: Option<Base>,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    let mut history = History::new();
    match convert(number, from.map(Base::radix), to.map(Base::radix), &mut history) {
        Ok(conversion) => {
            writeln_ignore_broken_pipe(out, conversion.to_string())?;
            Ok(0)
        }
        Err(e) => {
            debug!(%number, error = %e, "conversion refused");
            writeln_ignore_broken_pipe(err, format!("error: {e}"))?;
            Ok(1)
        }
    }
}

fn selection(session: &Session) -> String {
    let show = |b: Option<Base>| b.map_or_else(|| "-".to_string(), |b| b.to_string());
    format!("from base {}, to base {}", show(session.from), show(session.to))
}

fn help_text() -> String {
    let bases = Base::ALL.iter().join(", ");
    [
        "<number> [<from> <to>]     convert a number (also: convert ...)".to_string(),
        "from <base> | to <base>    select the source or target base".to_string(),
        "swap                       exchange source and target bases".to_string(),
        "history [n] | history -c   show or clear recent conversions".to_string(),
        "last                       print the digits of the last result".to_string(),
        "clear                      reset selected bases and result".to_string(),
        "bases                      list legal digits per base".to_string(),
        "exit [code] | quit [code]  leave".to_string(),
        format!("supported bases: {bases}; maximum length: {MAX_LENGTH} characters"),
    ]
    .iter()
    .join("\n")
}
