// parser.rs

use crate::base::Base;
use crate::error::CommandError;

/// One line typed at the prompt, after parsing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Bases are `None` when the selected ones should be used.
    Convert { number: String, from: Option<u32>, to: Option<u32> },
    From(Base),
    To(Base),
    Swap,
    History(Option<usize>),
    ClearHistory,
    Clear,
    Last,
    Bases,
    Help,
    Exit(i32),
}

pub const KEYWORDS: [&str; 11] = [
    "convert", "from", "to", "swap", "history", "clear", "last", "bases", "help", "exit", "quit",
];

/// Split on whitespace; a backslash makes the next character literal and a
/// trailing backslash is dropped.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => word.extend(chars.next()),
            c if c.is_whitespace() => {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
            }
            c => word.push(c),
        }
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}

/// Parse a non-empty line. A line that starts with something other than a
/// keyword is a conversion, as long as its first word looks like hex digits.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens = split_words(line);
    let Some((head, args)) = tokens.split_first() else {
        return Err(CommandError::Unknown(String::new()));
    };
    match head.to_ascii_lowercase().as_str() {
        "convert" => parse_convert("convert", args),
        "from" => Ok(Command::From(single_base("from", args)?)),
        "to" => Ok(Command::To(single_base("to", args)?)),
        "swap" => no_args("swap", args).map(|_| Command::Swap),
        "history" => match args {
            [] => Ok(Command::History(None)),
            [flag] if flag == "-c" => Ok(Command::ClearHistory),
            [n] => match n.parse::<usize>() {
                Ok(0) => Err(CommandError::ZeroCount { command: "history" }),
                Ok(count) => Ok(Command::History(Some(count))),
                Err(_) => {
                    Err(CommandError::InvalidNumber { command: "history", value: n.clone() })
                }
            },
            _ => Err(CommandError::TooManyArguments { command: "history" }),
        },
        "clear" => no_args("clear", args).map(|_| Command::Clear),
        "last" => no_args("last", args).map(|_| Command::Last),
        "bases" => no_args("bases", args).map(|_| Command::Bases),
        "help" => no_args("help", args).map(|_| Command::Help),
        "exit" | "quit" => match args {
            [] => Ok(Command::Exit(0)),
            [code] => code.parse::<i32>().map(Command::Exit).map_err(|_| {
                CommandError::InvalidNumber { command: "exit", value: code.clone() }
            }),
            _ => Err(CommandError::TooManyArguments { command: "exit" }),
        },
        _ if head.chars().all(|c| c.is_ascii_hexdigit()) => parse_convert("convert", &tokens),
        _ => Err(CommandError::Unknown(head.clone())),
    }
}

fn parse_convert(command: &'static str, args: &[String]) -> Result<Command, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument { command, what: "number" }),
        [number] => Ok(Command::Convert { number: number.clone(), from: None, to: None }),
        [_, _] => Err(CommandError::MissingArgument { command, what: "to" }),
        [number, from, to] => Ok(Command::Convert {
            number: number.clone(),
            from: Some(radix(command, from)?),
            to: Some(radix(command, to)?),
        }),
        _ => Err(CommandError::TooManyArguments { command }),
    }
}

/// Radix as typed. Range checking is left to the converter.
fn radix(command: &'static str, s: &str) -> Result<u32, CommandError> {
    s.parse::<u32>()
        .map_err(|_| CommandError::InvalidNumber { command, value: s.to_string() })
}

fn single_base(command: &'static str, args: &[String]) -> Result<Base, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument { command, what: "base" }),
        [base] => base.parse(),
        _ => Err(CommandError::TooManyArguments { command }),
    }
}

fn no_args(command: &'static str, args: &[String]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::TooManyArguments { command })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(number: &str, from: Option<u32>, to: Option<u32>) -> Command {
        Command::Convert { number: number.to_string(), from, to }
    }

    #[test]
    fn split_handles_escapes_and_runs_of_space() {
        assert_eq!(split_words("  FF   16\t2 "), ["FF", "16", "2"]);
        assert_eq!(split_words(r"a\ b c"), ["a b", "c"]);
        assert!(split_words("   ").is_empty());
        assert_eq!(split_words("FF\\"), ["FF"]);
    }

    #[test]
    fn bare_number_forms() {
        assert_eq!(parse_command("FF 16 2"), Ok(convert("FF", Some(16), Some(2))));
        assert_eq!(parse_command("1010"), Ok(convert("1010", None, None)));
        assert_eq!(parse_command("ff"), Ok(convert("ff", None, None)));
        assert_eq!(
            parse_command("FF 16"),
            Err(CommandError::MissingArgument { command: "convert", what: "to" })
        );
    }

    #[test]
    fn explicit_convert_accepts_any_word() {
        assert_eq!(parse_command("convert G 16 2"), Ok(convert("G", Some(16), Some(2))));
        assert_eq!(parse_command("CONVERT 7 3 10"), Ok(convert("7", Some(3), Some(10))));
        assert_eq!(
            parse_command("convert 7 eight 10"),
            Err(CommandError::InvalidNumber { command: "convert", value: "eight".into() })
        );
        assert_eq!(
            parse_command("convert"),
            Err(CommandError::MissingArgument { command: "convert", what: "number" })
        );
    }

    #[test]
    fn base_selection() {
        assert_eq!(parse_command("from 16"), Ok(Command::From(Base::Base16)));
        assert_eq!(parse_command("to 2"), Ok(Command::To(Base::Base2)));
        assert_eq!(parse_command("to 3"), Err(CommandError::InvalidBase("3".into())));
        assert_eq!(
            parse_command("from"),
            Err(CommandError::MissingArgument { command: "from", what: "base" })
        );
    }

    #[test]
    fn history_forms() {
        assert_eq!(parse_command("history"), Ok(Command::History(None)));
        assert_eq!(parse_command("history 3"), Ok(Command::History(Some(3))));
        assert_eq!(parse_command("history -c"), Ok(Command::ClearHistory));
        assert_eq!(
            parse_command("history 0"),
            Err(CommandError::ZeroCount { command: "history" })
        );
        assert!(matches!(
            parse_command("history x"),
            Err(CommandError::InvalidNumber { command: "history", .. })
        ));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("swap"), Ok(Command::Swap));
        assert_eq!(parse_command("clear"), Ok(Command::Clear));
        assert_eq!(parse_command("exit"), Ok(Command::Exit(0)));
        assert_eq!(parse_command("quit 3"), Ok(Command::Exit(3)));
        assert_eq!(
            parse_command("swap now"),
            Err(CommandError::TooManyArguments { command: "swap" })
        );
        assert_eq!(parse_command("hlep"), Err(CommandError::Unknown("hlep".into())));
    }
}
