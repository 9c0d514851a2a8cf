//! Output sinks handed to every command.
//!
//! The error sink is always on. The debug sink discards everything until a
//! command activates it for the rest of the run.

use std::{
    cell::{Cell, RefCell},
    fmt::Display,
    io::{self, Write},
};

pub struct Logger {
    prefix: &'static str,
    active: Cell<bool>,
    writer: RefCell<Box<dyn Write>>,
}

impl Logger {
    pub fn new(prefix: &'static str, active: bool, writer: Box<dyn Write>) -> Self {
        Self {
            prefix,
            active: Cell::new(active),
            writer: RefCell::new(writer),
        }
    }

    /// Always-on sink writing `Error: `-prefixed lines to stderr.
    pub fn error() -> Self {
        Self::new("Error: ", true, Box::new(io::stderr()))
    }

    /// Sink that writes to stderr once activated.
    pub fn debug() -> Self {
        Self::new("", false, Box::new(io::stderr()))
    }

    pub fn activate(&self) {
        self.active.set(true);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn log(&self, message: impl Display) {
        if !self.is_active() {
            return;
        }

        let mut writer = self.writer.borrow_mut();
        if let Err(error) = writeln!(writer, "{}{message}", self.prefix) {
            tracing::warn!(%error, "failed to write log line");
        }
    }
}

/// The pair of sinks shared by the dispatcher and the handlers.
pub struct Sinks {
    pub error: Logger,
    pub debug: Logger,
}

impl Sinks {
    pub fn standard() -> Self {
        Self {
            error: Logger::error(),
            debug: Logger::debug(),
        }
    }
}
