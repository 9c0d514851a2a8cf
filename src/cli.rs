use clap::{ArgAction, CommandFactory, Parser, Subcommand};

use crate::commands::Registration;

const CONFIG_EXAMPLE: &str = r#"{
    "verbose": false,
    "api_key": "asicj738z8fhse7h28783hiuh",
    "max_pages": 3
}"#;

/// Flags accepted before the command name.
#[derive(Debug, Parser)]
#[command(
    about = "A starter command-line interface with JSON configuration and subcommands.",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Args {
    /// Show this help message
    #[arg(short, long)]
    pub help: bool,

    #[command(subcommand)]
    pub command: Option<Invocation>,
}

/// The command name and everything after it, left unparsed for the handler.
#[derive(Debug, Subcommand)]
pub enum Invocation {
    #[command(external_subcommand)]
    Command(Vec<String>),
}

/// Flags shared by every command.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
pub struct CommandFlags {
    /// Show this help message
    #[arg(short, long)]
    pub help: bool,

    /// Show verbose logging.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Maximum number of entries to fetch
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub count: i64,

    /// Command parameters; flag parsing stops at the first one
    #[arg(value_name = "PARAM", num_args = 1.., trailing_var_arg = true)]
    pub params: Vec<String>,
}

impl Args {
    /// Parses `argv` (program name included).
    pub fn parse_argv(argv: &[String]) -> Result<Self, clap::Error> {
        let mut normalized = argv[..1.min(argv.len())].to_vec();
        normalized.extend(normalize_flags(&Self::command(), argv.get(1..).unwrap_or_default()));
        Self::try_parse_from(normalized)
    }

    /// Top-level help, including the registered commands and a sample config.
    pub fn help_text(program: &str, registry: &[Registration]) -> String {
        let width = registry.iter().map(|r| r.name.len()).max().unwrap_or(0);
        let commands: String = registry
            .iter()
            .map(|r| format!("    {:width$}  {}\n", r.name, r.about))
            .collect();
        let after_help = format!(
            "Always enter a command and at least one parameter, e.g.:\n    {} test\n\n\
             Commands:\n{commands}\n\
             To configure the command, at least the api_key must be set in config.json. Example:\n\n{CONFIG_EXAMPLE}",
            registry.first().map(|r| r.name).unwrap_or("command"),
        );

        let mut command = Self::command()
            .override_usage(format!("{program} [-help|-h] <command> [command flags] <param1>"))
            .after_help(after_help);
        command.render_help().to_string()
    }
}

impl CommandFlags {
    fn for_command(name: &'static str, about: &'static str) -> clap::Command {
        Self::command()
            .name(name)
            .about(about)
            .override_usage(format!("{name} [-help|-h] [-v] [-count <N>] <PARAM>..."))
    }

    /// Parses the arguments that follow the command name.
    pub fn parse_for(
        name: &'static str,
        about: &'static str,
        args: &[String],
    ) -> Result<Self, clap::Error> {
        use clap::FromArgMatches;

        let command = Self::for_command(name, about);
        let normalized = normalize_flags(&command, args);
        let matches = command.try_get_matches_from(normalized)?;
        Self::from_arg_matches(&matches)
    }

    pub fn help_text(name: &'static str, about: &'static str) -> String {
        Self::for_command(name, about).render_help().to_string()
    }
}

/// Rewrites single-dash long flags (`-help`, `-count=5`) into the double-dash
/// form clap expects. Stops at `--` or at the first positional token.
pub fn normalize_flags(command: &clap::Command, args: &[String]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(args.len());
    let mut tokens = args.iter();
    let mut expects_value = false;

    while let Some(token) = tokens.next() {
        if expects_value {
            normalized.push(token.clone());
            expects_value = false;
            continue;
        }

        let Some(flag) = token.strip_prefix('-').filter(|f| !f.is_empty() && !f.starts_with('-'))
        else {
            normalized.push(token.clone());
            if token == "--" || token == "-" || !token.starts_with('-') {
                normalized.extend(tokens.cloned());
                break;
            }
            continue;
        };

        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (flag, None),
        };
        let mut chars = name.chars();
        let short = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        let arg = command.get_arguments().find(|arg| match short {
            Some(c) => arg.get_short() == Some(c),
            None => arg.get_long() == Some(name),
        });

        // single-dash tokens are never short-flag clusters
        let Some(arg) = arg else {
            normalized.push(match short {
                Some(_) => token.clone(),
                None => format!("--{flag}"),
            });
            continue;
        };

        let spelled = match short {
            Some(c) => format!("-{c}"),
            None => format!("--{name}"),
        };
        match (arg.get_action(), value) {
            (ArgAction::SetTrue, Some(value)) => match parse_bool(value) {
                Some(true) => normalized.push(spelled),
                Some(false) => {}
                None => normalized.push(format!("{spelled}={value}")),
            },
            (_, Some(value)) => normalized.push(format!("{spelled}={value}")),
            (action, None) => {
                normalized.push(spelled);
                expects_value = action.takes_values();
            }
        }
    }

    normalized
}

/// Boolean spellings accepted in `-flag=value`.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
