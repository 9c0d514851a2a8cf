use crate::commands::{Invocation, Outcome, Prepared};
use crate::config::Config;
use crate::error::CommandResult;
use crate::logger::Logger;

pub const NAME: &str = "command2";
pub const ABOUT: &str = "Run the second example command";

pub fn run(
    args: &[String],
    config: Config,
    _errors: &Logger,
    debug: &Logger,
) -> CommandResult<Outcome> {
    let invocation = match Invocation::prepare(NAME, ABOUT, args, config, debug)? {
        Prepared::Help(text) => return Ok(Outcome::Help(text)),
        Prepared::Ready(invocation) => invocation,
    };

    debug.log("verbose flag active");
    debug.log(format_args!(
        "max_pages: {}, parameters: {}",
        invocation.config.max_pages,
        invocation.params.len()
    ));

    Ok(Outcome::Printed(format!(
        "{NAME} called with parameter {}",
        invocation.first_param()
    )))
}
