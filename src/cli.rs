use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line for the workout app skeleton generator.
#[derive(Parser, Debug)]
#[command(
    name = "workout-scaffold",
    version,
    about = "Create the workout app directory skeleton with placeholder files"
)]
pub struct Cli {
    /// Run as if started in this directory.
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Report what would be created without writing anything.
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Create missing directories and placeholder files (default).
    Create,
    /// Print the declared layout without touching the filesystem.
    List,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_create_in_place() {
        let cli = Cli::try_parse_from(["workout-scaffold"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.chdir.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags_and_subcommand_parse() {
        let cli =
            Cli::try_parse_from(["workout-scaffold", "-C", "/tmp/proj", "create", "-n", "-vv"])
                .unwrap();
        assert_eq!(cli.chdir, Some(PathBuf::from("/tmp/proj")));
        assert_eq!(cli.command, Some(Command::Create));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["workout-scaffold", "deploy"]).is_err());
    }
}
