//! CLI argument parsing for proposal-gen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// proposal-gen: regenerate dated client proposals.
///
/// Two independent pipelines share the same date rules:
/// - `templates` refreshes the dates in the HTML proposal templates
/// - `document` builds the full proposal as a DOCX file
#[derive(Parser, Debug)]
#[command(name = "proposal-gen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory holding proposals.yaml and the demo files.
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for proposal-gen.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Regenerate every configured HTML template with today's dates.
    ///
    /// Writes one `*-generated` file next to each template and a README
    /// indexing the results. Failures are reported per template; the
    /// remaining templates are still processed.
    Templates,

    /// Build the complete proposal as a Word document.
    ///
    /// Assembles cover, overview, features, plan, infrastructure, pricing,
    /// payment schedule and signature block, then saves one `.docx` file.
    Document,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_templates() {
        let cli = Cli::try_parse_from(["proposal-gen", "templates"]).unwrap();
        assert_eq!(cli.command, Command::Templates);
        assert_eq!(cli.dir, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_document() {
        let cli = Cli::try_parse_from(["proposal-gen", "document"]).unwrap();
        assert_eq!(cli.command, Command::Document);
    }

    #[test]
    fn global_options_before_or_after_command() {
        let cli = Cli::try_parse_from(["proposal-gen", "-C", "/srv/proposals", "document", "-vv"])
            .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/proposals")));
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["proposal-gen", "templates", "--dir", "site"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("site")));
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["proposal-gen"]).is_err());
    }

    #[test]
    fn unknown_command_rejected() {
        assert!(Cli::try_parse_from(["proposal-gen", "publish"]).is_err());
    }
}
