// repl.rs

use std::io;

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use tracing::info;

use crate::commands::{execute_line, Flow, Session};
use crate::completion::ConverterHelper;

/// Run the interactive prompt until `exit`, Ctrl-C or Ctrl-D.
/// Returns the exit code requested by the user.
pub fn start_repl(mut session: Session, prompt: &str) -> anyhow::Result<i32> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<ConverterHelper, DefaultHistory> =
        Editor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(ConverterHelper::new()));

    info!(from = ?session.from, to = ?session.to, "session started");
    let mut code = 0;
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let mut stdout = io::stdout().lock();
                let flow = execute_line(&line, &mut session, &mut stdout)
                    .context("failed to write to stdout")?;
                if let Flow::Exit(c) = flow {
                    code = c;
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read line"),
        }
    }
    info!(conversions = session.history.len(), "session ended");
    Ok(code)
}
