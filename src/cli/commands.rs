// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Characters to exclude from the charset
        #[arg(long, short, default_value = "")]
        exclude: String,
    },

    /// Check the strength of a password
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,
    },

    /// Suggest a stronger variant of a password
    Suggest {
        /// Password to improve
        #[arg(required = true)]
        password: String,
    },

    /// Show recently generated passwords
    History,

    /// Clear the password history
    ClearHistory,
}
