use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use recipe_core::{RecipeId, VERSION};

use crate::ui::OutputFormat;

/// Recipes - a personal recipe box that picks what to cook
#[derive(Parser)]
#[command(name = "recipes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the recipe store file
    #[arg(short, long, global = true, env = "RECIPES_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Do not add the sample recipes to an empty store
    #[arg(long)]
    pub no_samples: bool,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Recipe title
    #[arg(long)]
    pub title: Option<String>,

    /// Ingredients, one per line
    #[arg(long)]
    pub ingredients: Option<String>,

    /// Preparation steps
    #[arg(long)]
    pub steps: Option<String>,

    /// Add tags to the recipe (repeatable or comma-separated)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Recipe ID
    #[arg(value_name = "ID")]
    pub id: RecipeId,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New ingredients
    #[arg(long)]
    pub ingredients: Option<String>,

    /// New steps
    #[arg(long)]
    pub steps: Option<String>,

    /// Replace tags (comma-separated; pass "" to clear)
    #[arg(long)]
    pub tags: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Recipe ID
    #[arg(value_name = "ID")]
    pub id: RecipeId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Recipe ID
    #[arg(value_name = "ID")]
    pub id: RecipeId,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output layout; defaults to table on a terminal, plain otherwise
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `random` command
#[derive(Args)]
pub struct RandomArgs {
    /// Only pick recipes with this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output layout; defaults to table on a terminal, plain otherwise
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `tags` command
#[derive(Args)]
pub struct TagsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `seed` command
#[derive(Args)]
pub struct SeedArgs {
    /// Only seed when the store has no recipes
    #[arg(long)]
    pub if_empty: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a recipe store and write the config file
    Init(InitArgs),

    /// Add a new recipe
    Add(AddArgs),

    /// Edit an existing recipe
    Edit(EditArgs),

    /// Delete a recipe
    Delete(DeleteArgs),

    /// Show a recipe by ID
    Show(ShowArgs),

    /// List recipes
    List(ListArgs),

    /// Pick a random recipe
    Random(RandomArgs),

    /// Show how many recipes were added per day
    Stats(StatsArgs),

    /// List all tags in use
    Tags(TagsArgs),

    /// Add the sample recipes
    Seed(SeedArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
