//! notekit's entry point.
//! Parses arguments, resolves the vault once and dispatches the task.

use indexmap::IndexMap;
use notekit::{
    cli::{get_args, Args, Command},
    commands,
    context::ProjectContext,
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::{DefaultsPrompter, DialoguerPrompter, Prompter},
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let ctx = match args.root {
        Some(root) => ProjectContext::new(root)?,
        None => ProjectContext::discover(std::env::current_dir()?)?,
    };
    log::debug!("Vault root: {}", ctx.root.display());

    let prompter: Box<dyn Prompter> = if args.non_interactive {
        Box::new(DefaultsPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    };

    match args.command {
        Command::Daily => {
            commands::daily_note(&ctx, &*prompter)?;
        }
        Command::Project { name } => {
            commands::create_project(&ctx, &*prompter, name)?;
        }
        Command::Template { prefix, set, output, force } => {
            let provided: IndexMap<String, String> = set.into_iter().collect();
            commands::render_template(
                &ctx,
                &*prompter,
                &prefix,
                &provided,
                output.as_deref(),
                force,
            )?;
        }
        Command::Templates => commands::list_templates(&ctx)?,
        Command::Backup => {
            commands::backup(&ctx)?;
        }
        Command::Cleanup => {
            commands::cleanup(&ctx)?;
        }
        Command::Tags => {
            commands::tag_statistics(&ctx)?;
        }
        Command::Orphans => {
            commands::orphaned_notes(&ctx)?;
        }
        Command::Report => {
            commands::network_report(&ctx)?;
        }
        Command::Inbox => {
            commands::inbox_overview(&ctx)?;
        }
    }
    Ok(())
}
