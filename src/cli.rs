use clap::{ArgAction, Parser, Subcommand};

/// Command-line arguments for the control CLI.
#[derive(Debug, Parser)]
#[command(
    name = "control",
    version = "1.0.0",
    disable_version_flag = true,
    about = "Control center for an imaginary video game.",
    long_about = None
)]
pub struct Args {
    /// Sets the player name.
    #[arg(short, long, default_value = "player", value_name = "NAME")]
    pub name: String,

    /// Shows the version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    command: Invocation,
}

/// The command name plus its raw arguments, captured without any global flag
/// matching past the command boundary. Resolution happens in the registry.
#[derive(Debug, Subcommand)]
enum Invocation {
    #[command(external_subcommand)]
    Raw(Vec<String>),
}

impl Args {
    /// The subcommand name as typed on the command line.
    pub fn command(&self) -> &str {
        self.tokens().first().map(String::as_str).unwrap_or_default()
    }

    /// The argument tokens deferred to the subcommand's own parser.
    pub fn command_args(&self) -> &[String] {
        self.tokens()
            .split_first()
            .map(|(_, rest)| rest)
            .unwrap_or_default()
    }

    fn tokens(&self) -> &[String] {
        let Invocation::Raw(tokens) = &self.command;
        tokens
    }
}
