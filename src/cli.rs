//! Command-line interface implementation for notekit.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for notekit.
#[derive(Parser, Debug)]
#[command(author, version, about = "notekit: helper tasks for a markdown note vault", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Vault root (defaults to the nearest parent directory containing .vscode)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Never prompt; use supplied values and template defaults
    #[arg(short = 'n', long, global = true)]
    pub non_interactive: bool,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create today's note in the inbox and open it
    Daily,

    /// Create a project folder with an index note
    Project {
        /// Project name (asked for when omitted)
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },

    /// Render a snippet template into a note
    Template {
        /// Snippet prefix, e.g. /basic
        #[arg(value_name = "PREFIX")]
        prefix: String,

        /// Value for the placeholder whose description matches KEY
        #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        set: Vec<(String, String)>,

        /// Note to create, relative to the vault root (prints to stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite the output note if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// List the available snippet templates
    Templates,

    /// Commit all changes to the vault's git repository
    Backup,

    /// Remove temp files and empty cache folders
    Cleanup,

    /// Count how often each tag is used
    Tags,

    /// List notes no other note links to
    Orphans,

    /// Report link statistics and connectivity
    Report,

    /// List inbox notes, newest first
    Inbox,
}

/// Parses a `KEY=VALUE` pair; the value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("invalid KEY=VALUE: no `=` or empty key in `{s}`")),
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
