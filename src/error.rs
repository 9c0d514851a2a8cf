use std::{io, path::PathBuf};

use thiserror::Error;

pub type CommandResult<T> = Result<T, CliError>;

/// Failures while reading `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the dispatcher and the command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    /// The program was started without a command.
    #[error("no command given")]
    NoArguments { help: String },

    #[error("error parsing flags: {0}")]
    Flags(String),

    #[error("invalid command or command missing")]
    UnknownCommand { help: String },

    #[error("No API key set. Please set api_key in config json.")]
    MissingApiKey,

    #[error("No parameters given!")]
    MissingParameter { help: String },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NoArguments { .. } => 2,
            CliError::Flags(_)
            | CliError::UnknownCommand { .. }
            | CliError::MissingApiKey
            | CliError::MissingParameter { .. } => 1,
        }
    }

    /// Usage text to show alongside the error, if any.
    pub fn help(&self) -> Option<&str> {
        match self {
            CliError::NoArguments { help }
            | CliError::UnknownCommand { help }
            | CliError::MissingParameter { help } => Some(help),
            CliError::Flags(_) | CliError::MissingApiKey => None,
        }
    }

    /// Whether the error sink should receive this error.
    pub fn is_reported(&self) -> bool {
        !matches!(self, CliError::NoArguments { .. })
    }

    pub(crate) fn from_clap(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let reason = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        CliError::Flags(reason)
    }
}
