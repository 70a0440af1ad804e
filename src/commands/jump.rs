use clap::Parser;

use crate::error::CommandResult;

/// Defines how far a player will jump.
#[derive(Debug, Parser)]
#[command(
    name = "jump",
    no_binary_name = true,
    about = "Defines how far a player will jump."
)]
pub struct JumpArgs {
    /// Player jumps for <METERS> meters.
    #[arg(long, value_name = "METERS")]
    pub distance: u32,
}

/// Parses the jump options and returns the sentence describing the jump.
pub fn execute(raw: &[String], name: &str) -> CommandResult<String> {
    let opts = JumpArgs::try_parse_from(raw)?;
    Ok(format!(
        "{name} is going to jump {distance} meters.",
        distance = opts.distance
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_the_jump() {
        let raw = vec!["--distance=5".to_string()];
        let message = execute(&raw, "player").expect("jump succeeds");
        assert_eq!(message, "player is going to jump 5 meters.");
    }

    #[test]
    fn has_no_upper_limit() {
        let raw = vec!["--distance=10000".to_string()];
        let message = execute(&raw, "Alice").expect("jump succeeds");
        assert_eq!(message, "Alice is going to jump 10000 meters.");
    }

    #[test]
    fn requires_a_distance() {
        assert!(execute(&[], "player").is_err());
    }
}
