// cli.rs

use std::io;

use clap::Parser;

use crate::base::Base;
use crate::commands::{run_once, Session};
use crate::repl::start_repl;

#[derive(Parser, Debug)]
#[command(name = "radix", about = "Convert numbers between bases 2, 8, 10 and 16", version)]
pub struct Cli {
    /// Number to convert once; starts the interactive prompt when omitted
    pub number: Option<String>,

    /// Source base
    #[arg(short, long, env = "RADIX_FROM")]
    pub from: Option<Base>,

    /// Target base
    #[arg(short, long, env = "RADIX_TO")]
    pub to: Option<Base>,

    /// Prompt shown in interactive mode
    #[arg(long, env = "RADIX_PROMPT", default_value = "radix> ")]
    pub prompt: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// One conversion when a number was given, the prompt otherwise.
    /// Returns the process exit code.
    pub fn run(self) -> anyhow::Result<i32> {
        match self.number {
            Some(number) => {
                let code = run_once(
                    &number,
                    self.from,
                    self.to,
                    &mut io::stdout().lock(),
                    &mut io::stderr().lock(),
                )?;
                Ok(code)
            }
            None => start_repl(Session::new(self.from, self.to), &self.prompt),
        }
    }
}
