//! Resolves the command named on the command line and turns its result into
//! an exit code.

use std::io::Write;

use crate::cli::{Args, Invocation};
use crate::commands::{self, Outcome, REGISTRY};
use crate::config::Config;
use crate::error::{CliError, CommandResult};
use crate::logger::Sinks;

/// Runs one command and returns the process exit code. Output for stdout goes
/// to `out`; errors go to the error sink.
pub fn run(argv: &[String], config: &Config, sinks: &Sinks, out: &mut dyn Write) -> i32 {
    let result = dispatch(argv, config, sinks);
    let code = match &result {
        Ok(_) => 0,
        Err(err) => err.exit_code(),
    };

    let text = match result {
        Ok(Outcome::Printed(line)) => Some(format!("{line}\n")),
        Ok(Outcome::Help(help)) => Some(help),
        Err(err) => {
            if err.is_reported() {
                sinks.error.log(&err);
            }
            err.help().map(str::to_string)
        }
    };

    if let Some(text) = text {
        if let Err(error) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!(%error, "failed to write output");
        }
    }

    code
}

pub fn dispatch(argv: &[String], config: &Config, sinks: &Sinks) -> CommandResult<Outcome> {
    let program = argv.first().map(String::as_str).unwrap_or(env!("CARGO_PKG_NAME"));

    if argv.len() < 2 {
        return Err(CliError::NoArguments {
            help: Args::help_text(program, REGISTRY),
        });
    }

    let args = Args::parse_argv(argv).map_err(CliError::from_clap)?;
    if args.help {
        return Ok(Outcome::Help(Args::help_text(program, REGISTRY)));
    }

    if !config.has_api_key() {
        return Err(CliError::MissingApiKey);
    }

    let (name, rest) = match &args.command {
        Some(Invocation::Command(tokens)) => match tokens.split_first() {
            Some((name, rest)) => (name.as_str(), rest),
            None => ("", &[][..]),
        },
        None => ("", &[][..]),
    };

    let Some(registration) = commands::lookup(name) else {
        tracing::debug!(command = name, "no registered command");
        return Err(CliError::UnknownCommand {
            help: Args::help_text(program, REGISTRY),
        });
    };

    tracing::debug!(command = registration.name, args = rest.len(), "dispatching");
    (registration.handler)(rest, config.clone(), &sinks.error, &sinks.debug)
}
