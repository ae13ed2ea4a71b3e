//! Command implementations for proposal-gen.
//!
//! `run` installs logging, resolves the base directory, loads the
//! configuration, reads the clock once, and routes to the command handler. Handlers
//! take "now" as a parameter and never read the clock themselves.

mod document;
mod templates;


use crate::cli::{Cli, Command};
use crate::config::{Config, LogLevel};
use crate::context::ProposalContext;
use crate::error::Result;
use crate::logging;
use chrono::{DateTime, FixedOffset, Local};

pub use document::cmd_document;
pub use templates::cmd_templates;

/// Execute the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    logging::init(logging::effective_level(LogLevel::default(), cli.verbose));
    let ctx = ProposalContext::resolve(cli.dir.as_deref())?;
    let config = Config::load_or_default(ctx.config_path())?;
    logging::set_level(logging::effective_level(config.log_level, cli.verbose));

    tracing::debug!(
        base_dir = %ctx.base_dir.display(),
        command = ?cli.command,
        "starting"
    );

    let now = Local::now().fixed_offset();
    dispatch(cli.command, &ctx, &config, now)
}

/// Dispatch a command to its implementation.
pub fn dispatch(
    command: Command,
    ctx: &ProposalContext,
    config: &Config,
    now: DateTime<FixedOffset>,
) -> Result<()> {
    match command {
        Command::Templates => cmd_templates(ctx, config, now),
        Command::Document => cmd_document(ctx, config, now),
    }
}

/// Print a banner line framed by `=` rules.
fn print_banner(title: &str) {
    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("  {}", title);
    println!("{}", rule);
}
