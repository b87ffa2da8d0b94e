use numdescribe::*;

use colored::Colorize;
use rustyline::{error::ReadlineError, DefaultEditor};

mod tracer;
use tracer::TextTracer;

const PROMPT: &str = "> ";

const HELP: &str = "\
Type a number to have it described, e.g. 42, -3/4, #e1.5, 0.1f0, 1.5t0, +inf.0, 1-2.5i.

Commands:
  :trace on|off          show how the number is classified
  :set precision BITS    precision of long float literals (1.5t0), default 64,
                         rounded up to whole 64-bit words
  :set limit DIGITS      longest exact decimal value to compute, default 1000000
  :set exponent N        largest decimal exponent accepted in literals, default 100000
  :settings              show current settings
  :help                  this text
  :quit                  leave";

fn main() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut settings = Settings::default();
    let mut tracer = TextTracer::default();
    println!("Type a number to describe it, :help for guidance, :quit to leave.");

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err)
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        rl.add_history_entry(input)?;

        if let Some(command) = input.strip_prefix(':') {
            if command.trim() == "quit" {
                break;
            }
            match run_command(command, &mut settings) {
                Ok(message) => println!("{message}"),
                Err(err) => println!("{}", format!("Error: {err}").red())
            }
            continue;
        }

        let number = match Parser::with_settings(&line, &settings).parse() {
            Ok(number) => number,
            Err(err) => {
                err.display(&line);
                println!("{}", format!("Error: {err}").red());
                continue;
            }
        };
        if let Err(err) = check_limit(&number, &settings) {
            println!("{}", format!("Error: {err}").red());
            continue;
        }
        let desc = if settings.trace {
            describe_number_traced(&number, &mut tracer)
        } else {
            describe_number(&number)
        };
        println!("{desc}");
    }
    Ok(())
}

fn run_command(command: &str, settings: &mut Settings) -> Result<String, BaseError> {
    let words = command.split_whitespace().collect::<Vec<_>>();
    match words[..] {
        ["help"] => Ok(HELP.to_string()),
        ["settings"] => Ok(format!("{settings:?}")),
        ["trace", "on"] => { settings.trace = true; Ok("tracing on".to_string()) },
        ["trace", "off"] => { settings.trace = false; Ok("tracing off".to_string()) },
        ["set", "precision", value] => {
            settings.long_precision = parse_setting(value, 2)?;
            Ok(format!("long floats now have {} bits of precision", settings.long_precision))
        },
        ["set", "limit", value] => {
            settings.max_digits = parse_setting(value, 1)?;
            Ok(format!("exact decimal values limited to {} characters", settings.max_digits))
        },
        ["set", "exponent", value] => {
            settings.max_exponent = parse_setting(value, 0)?;
            Ok(format!("literal exponents limited to {}", settings.max_exponent))
        },
        _ => Err(format!("unknown command ':{command}', try :help").into())
    }
}

fn parse_setting<T>(value: &str, min: T) -> Result<T, BaseError>
    where T: std::str::FromStr + PartialOrd + std::fmt::Display
{
    match value.parse::<T>() {
        Ok(value) if value >= min => Ok(value),
        _ => Err(format!("expected a number of at least {min}, found '{value}'").into())
    }
}

/// Refuses numbers whose exact decimal expansion would exceed the configured length.
fn check_limit(number: &Number, settings: &Settings) -> Result<(), BaseError> {
    let parts = std::iter::once(number.real_part()).chain(number.imag_part());
    for part in parts {
        let Real::Inexact(x) = part else { continue; };
        match x.decimal_len_bound() {
            Some(len) if len > settings.max_digits => return Err(format!(
                "exact decimal value of {x} could take up to {len} characters, \
limit is {} (see :set limit)", settings.max_digits).into()),
            _ => ()
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        let mut settings = Settings::default();
        assert!(run_command("trace on", &mut settings).is_ok());
        assert!(settings.trace);
        assert!(run_command("set precision 113", &mut settings).is_ok());
        assert_eq!(settings.long_precision, 113);
        assert!(run_command("set precision 1", &mut settings).is_err());
        assert!(run_command("set limit x", &mut settings).is_err());
        assert!(run_command("frobnicate", &mut settings).is_err());
    }

    #[test]
    fn test_limit() {
        let settings = Settings { max_digits: 100, ..Default::default() };
        assert!(check_limit(&parse("0.1f0").unwrap(), &settings).is_ok());
        assert!(check_limit(&parse("5e-324").unwrap(), &settings).is_err());
        assert!(check_limit(&parse("1+5e-324i").unwrap(), &settings).is_err());
        assert!(check_limit(&parse("+inf.0").unwrap(), &settings).is_ok());
        assert!(check_limit(&parse("#e5e-324").unwrap(), &settings).is_ok());
    }
}
