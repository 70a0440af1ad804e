pub mod greet;
pub mod jump;
pub mod run;

use crate::cli::Args;
use crate::error::{CommandError, CommandResult};

/// Dispatches execution to the appropriate command handler.
///
/// Command names are matched case-insensitively against the closed set of
/// subcommands. Each handler parses the deferred argument list itself and
/// returns the sentence to print.
pub fn execute(args: &Args) -> CommandResult<String> {
    let command = args.command().to_lowercase();
    tracing::debug!(command = %command, "dispatching subcommand");

    match command.as_str() {
        "greet" => greet::execute(args.command_args()),
        "jump" => jump::execute(args.command_args(), &args.name),
        "run" => run::execute(args.command_args(), &args.name),
        _ => {
            tracing::warn!(command = %args.command(), "no such subcommand");
            Err(CommandError::UnknownCommand {
                name: args.command().to_string(),
            })
        }
    }
}
