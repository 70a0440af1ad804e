use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};

use crate::error::CommandResult;

/// Longest run the player will agree to, in meters.
const MAX_RUN_METERS: u32 = 100;
/// Longest run the player will agree to, in seconds.
const MAX_RUN_SECONDS: u32 = 10;

/// Defines how long a player will run.
#[derive(Debug, Parser)]
#[command(
    name = "run",
    no_binary_name = true,
    about = "Defines how long a player will run.",
    group(ArgGroup::new("length").required(true).multiple(false).args(["distance", "time"]))
)]
pub struct RunArgs {
    /// Player runs for <METERS> meters.
    #[arg(long, value_name = "METERS")]
    pub distance: Option<u32>,

    /// Player runs for <SECONDS> seconds.
    #[arg(long, value_name = "SECONDS")]
    pub time: Option<u32>,
}

/// A validated run request: exactly one measure of how long to run.
#[derive(Debug)]
enum RunRequest {
    Distance(u32),
    Time(u32),
}

impl RunArgs {
    fn request(self) -> CommandResult<RunRequest> {
        match (self.distance, self.time) {
            (Some(meters), None) => Ok(RunRequest::Distance(meters)),
            (None, Some(seconds)) => Ok(RunRequest::Time(seconds)),
            // The argument group rules these out when parsing from the
            // command line; a hand-built RunArgs still gets a usage error.
            _ => {
                let mut cmd = RunArgs::command();
                Err(cmd
                    .error(
                        ErrorKind::MissingRequiredArgument,
                        "either --distance or --time is required",
                    )
                    .into())
            }
        }
    }
}

/// Parses the run options and returns the sentence describing the run,
/// or a refusal when the request exceeds what the player puts up with.
pub fn execute(raw: &[String], name: &str) -> CommandResult<String> {
    let request = RunArgs::try_parse_from(raw)?.request()?;
    Ok(message(&request, name))
}

fn message(request: &RunRequest, name: &str) -> String {
    match *request {
        RunRequest::Distance(meters) if meters > MAX_RUN_METERS => {
            tracing::debug!(meters, "run distance over the limit, refusing");
            format!("Are you crazy? {name} is not going to do that!")
        }
        RunRequest::Distance(meters) => format!("{name} is going to run {meters} meters."),
        RunRequest::Time(seconds) if seconds > MAX_RUN_SECONDS => {
            tracing::debug!(seconds, "run time over the limit, refusing");
            format!("Are you crazy? {name} not going to do that!")
        }
        RunRequest::Time(seconds) => format!("{name} is going to run for {seconds} seconds."),
    }
}
