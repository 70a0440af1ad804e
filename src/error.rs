use thiserror::Error;

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    /// The command name did not match any registered subcommand.
    #[error("Unknown command. RTFM!.")]
    UnknownCommand { name: String },

    /// A subcommand rejected its argument list.
    #[error(transparent)]
    Usage(#[from] clap::Error),
}
