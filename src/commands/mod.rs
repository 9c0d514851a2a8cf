pub mod command1;
pub mod command2;

use crate::cli::CommandFlags;
use crate::config::Config;
use crate::error::{CliError, CommandResult};
use crate::logger::Logger;

/// Signature shared by every command: remaining arguments, a private copy of
/// the configuration, the error sink and the debug sink.
pub type Handler = fn(&[String], Config, &Logger, &Logger) -> CommandResult<Outcome>;

pub struct Registration {
    pub name: &'static str,
    pub about: &'static str,
    pub handler: Handler,
}

pub static REGISTRY: &[Registration] = &[
    Registration {
        name: command1::NAME,
        about: command1::ABOUT,
        handler: command1::run,
    },
    Registration {
        name: command2::NAME,
        about: command2::ABOUT,
        handler: command2::run,
    },
];

pub fn lookup(name: &str) -> Option<&'static Registration> {
    REGISTRY.iter().find(|registration| registration.name == name)
}

/// What a successful command wants written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Printed(String),
    Help(String),
}

/// A parsed command line with the per-command overrides applied.
#[derive(Debug)]
pub struct Invocation {
    pub config: Config,
    pub verbose: bool,
    pub params: Vec<String>,
}

#[derive(Debug)]
pub enum Prepared {
    Help(String),
    Ready(Invocation),
}

impl Invocation {
    /// Parses a command's flags, applies `-count` to the configuration copy and
    /// switches the debug sink on when verbose output was requested.
    pub fn prepare(
        name: &'static str,
        about: &'static str,
        args: &[String],
        mut config: Config,
        debug: &Logger,
    ) -> CommandResult<Prepared> {
        let flags = CommandFlags::parse_for(name, about, args).map_err(CliError::from_clap)?;

        if flags.help {
            return Ok(Prepared::Help(CommandFlags::help_text(name, about)));
        }

        let verbose = flags.verbose || config.verbose;
        if verbose {
            debug.activate();
        }

        // zero doubles as "not given"
        if flags.count != 0 {
            config.max_pages = flags.count;
        }

        if flags.params.is_empty() {
            return Err(CliError::MissingParameter {
                help: CommandFlags::help_text(name, about),
            });
        }

        Ok(Prepared::Ready(Self {
            config,
            verbose,
            params: flags.params,
        }))
    }

    pub fn first_param(&self) -> &str {
        &self.params[0]
    }
}
