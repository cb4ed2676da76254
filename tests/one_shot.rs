//! The non-interactive command line: argument and environment handling plus
//! exit codes of a single conversion.

use clap::Parser;
use radix::cli::Cli;
use radix::commands::run_once;
use radix::Base;

fn once(number: &str, from: Option<Base>, to: Option<Base>) -> (i32, String, String) {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = run_once(number, from, to, &mut out, &mut err).unwrap();
    (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn success_goes_to_stdout() {
    let (code, out, err) = once("255", Some(Base::Base10), Some(Base::Base16));
    assert_eq!(code, 0);
    assert_eq!(out, "255 (10) = FF (16)\n");
    assert!(err.is_empty());
}

#[test]
fn missing_base_exits_one() {
    let (code, out, err) = once("255", Some(Base::Base10), None);
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert_eq!(err, "error: select both a source and a target base\n");
}

#[test]
fn illegal_digit_exits_one() {
    let (code, out, err) = once("2", Some(Base::Base2), Some(Base::Base10));
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert!(err.starts_with("error: illegal digit '2' for base 2"));
}

// The only test in this binary that touches the environment.
#[test]
fn environment_preselects_bases() {
    std::env::set_var("RADIX_FROM", "2");
    std::env::set_var("RADIX_TO", "16");
    std::env::set_var("RADIX_PROMPT", "> ");
    let cli = Cli::try_parse_from(["radix", "11111111"]).unwrap();
    assert_eq!(cli.from, Some(Base::Base2));
    assert_eq!(cli.to, Some(Base::Base16));
    assert_eq!(cli.prompt, "> ");

    let flagged = Cli::try_parse_from(["radix", "7", "--from", "8"]).unwrap();
    assert_eq!(flagged.from, Some(Base::Base8));
    assert_eq!(flagged.to, Some(Base::Base16));

    let (code, out, _) = once("11111111", cli.from, cli.to);
    assert_eq!(code, 0);
    assert_eq!(out, "11111111 (2) = FF (16)\n");
}
