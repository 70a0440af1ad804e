use clap::Parser;

use crate::error::CommandResult;

pub const GREETING: &str = "Hi other player(s)!";

/// Greets other players.
#[derive(Debug, Parser)]
#[command(name = "greet", no_binary_name = true, about = "Greets other players.")]
pub struct GreetArgs {}

/// Returns the greeting message; any argument is a usage error.
pub fn execute(raw: &[String]) -> CommandResult<String> {
    GreetArgs::try_parse_from(raw)?;
    Ok(GREETING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_fixed_greeting() {
        let message = execute(&[]).expect("greeting succeeds");
        assert_eq!(message, GREETING);
    }

    #[test]
    fn rejects_stray_arguments() {
        let raw = vec!["--loudly".to_string()];
        assert!(execute(&raw).is_err());
    }
}
