//! Recipes CLI - a personal recipe box that answers "what should I cook?"
//!
//! This is the command-line interface for the recipe catalog. It wires the
//! core service to argument parsing, config files and terminal output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::Parser;
use recipe_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{init, library, misc, recipes};
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let err = CliError::from_anyhow(&e);
        tracing::debug!(error = ?e, "command failed");
        print_error(&ui_ctx, &err.to_string(), err.hint());
        std::process::exit(err.exit_code());
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Add(args)) => recipes::handle_add(ctx, args)?,
        Some(Commands::Edit(args)) => recipes::handle_edit(ctx, args)?,
        Some(Commands::Delete(args)) => recipes::handle_delete(ctx, args)?,
        Some(Commands::Show(args)) => recipes::handle_show(ctx, args)?,
        Some(Commands::List(args)) => recipes::handle_list(ctx, args)?,
        Some(Commands::Random(args)) => recipes::handle_random(ctx, args)?,
        Some(Commands::Stats(args)) => library::handle_stats(ctx, args)?,
        Some(Commands::Tags(args)) => library::handle_tags(ctx, args)?,
        Some(Commands::Seed(args)) => library::handle_seed(ctx, args)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            println!("Recipes v{}", VERSION);
            println!("\nQuickstart:");
            println!("  recipes init");
            println!("  recipes add --title \"Pancakes\" -t breakfast");
            println!("  recipes list");
            println!("  recipes random --tag vegetarian");
            println!("  recipes stats");
            println!("\nRun `recipes --help` for full usage.");
        }
    }

    Ok(())
}
